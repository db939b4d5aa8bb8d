use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S, filenames: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for filename in filenames {
        let content = store.read(filename)?;
        result.affected_notes.push(Note::new(filename.clone(), content));
    }

    Ok(result)
}
