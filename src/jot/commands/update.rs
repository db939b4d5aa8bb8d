use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &mut S, filename: &str, content: String) -> Result<CmdResult> {
    // Read first so updating a missing note fails instead of quietly
    // creating a file.
    store.read(filename)?;
    store.update(filename, &content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note updated: {}", filename)));
    result
        .affected_notes
        .push(Note::new(filename.to_string(), content));
    Ok(result)
}
