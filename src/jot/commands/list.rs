use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S) -> Result<CmdResult> {
    let listing = store.list()?;

    let mut result = CmdResult::default().with_listed_entries(listing.entries);
    for filename in &listing.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipped unreadable note: {}",
            filename
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_every_note_with_its_summary() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "Hello world\nSecond line\nThird line".into()).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].summary, "Hello world Second line");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_entries.is_empty());
    }

    #[test]
    fn identical_summaries_keep_distinct_filenames() {
        let mut store = InMemoryStore::new();
        let long = format!("{}\ndiffers here", "z".repeat(60));
        let also_long = format!("{}\ndiffers there", "z".repeat(60));
        create::run(&mut store, long).unwrap();
        create::run(&mut store, also_long).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed_entries.len(), 2);
        assert_eq!(
            result.listed_entries[0].summary,
            result.listed_entries[1].summary
        );
        assert_ne!(
            result.listed_entries[0].filename,
            result.listed_entries[1].filename
        );
    }
}
