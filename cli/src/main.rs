//! Command-line driver for `notes-core`.
//!
//! Reads `NOTES_API_BASE_URL` once, builds a `NotesClient`, runs one
//! operation and prints the result as JSON. With no base URL the stub
//! backend answers.

mod command;

use anyhow::Context;
use log::info;
use notes_core::{ClientConfig, NotesClient};

use command::Command;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}\n\n{}", command::USAGE);
            std::process::exit(2);
        }
    };

    let config = ClientConfig::from_env();
    if config.uses_stub() {
        info!("NOTES_API_BASE_URL not set, using stub backend");
    }
    let client = NotesClient::from_config(&config);

    match command {
        Command::List => {
            let notes = client.list().await.context("listing notes")?;
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        Command::Create(draft) => {
            let note = client.create(draft).await.context("creating note")?;
            println!("{}", serde_json::to_string_pretty(&note)?);
        }
        Command::Update(note) => {
            let id = note.id.clone();
            let note = client
                .update(note)
                .await
                .with_context(|| format!("updating note {id}"))?;
            println!("{}", serde_json::to_string_pretty(&note)?);
        }
        Command::Delete(id) => {
            client
                .delete(&id)
                .await
                .with_context(|| format!("deleting note {id}"))?;
        }
    }
    Ok(())
}
