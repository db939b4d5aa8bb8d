use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &mut S, content: String) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.create(&content)? {
        Some(filename) => {
            result.add_message(CmdMessage::success(format!("Note saved: {}", filename)));
            result.affected_notes.push(Note::new(filename, content));
        }
        None => {
            result.add_message(CmdMessage::warning("Nothing to save: note is empty."));
        }
    }

    Ok(result)
}
