use notes_core::{timestamp, Note, NoteDraft};

pub const USAGE: &str = "usage:
  notes list
  notes create <title> <content>
  notes update <id> <title> <content>
  notes delete <id>";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Create(NoteDraft),
    Update(Note),
    Delete(String),
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| "missing command".to_string())?;
        match (name.as_str(), rest) {
            ("list", []) => Ok(Command::List),
            ("create", [title, content]) => Ok(Command::Create(NoteDraft::new(
                title.as_str(),
                content.as_str(),
            ))),
            // The timestamp sent is replaced by the backend's.
            ("update", [id, title, content]) => Ok(Command::Update(Note {
                id: id.clone(),
                title: title.clone(),
                content: content.clone(),
                updated_at: timestamp::now_iso8601(),
            })),
            ("delete", [id]) => Ok(Command::Delete(id.clone())),
            ("list" | "create" | "update" | "delete", _) => {
                Err(format!("wrong number of arguments for `{name}`"))
            }
            _ => Err(format!("unknown command `{name}`")),
        }
    }
}
