use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &mut S, filenames: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for filename in filenames {
        if store.delete(filename) {
            result.add_message(CmdMessage::success(format!("Note deleted: {}", filename)));
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Note was not deleted (already gone?): {}",
                filename
            )));
        }
    }

    Ok(result)
}
