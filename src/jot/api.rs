//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all jot operations, regardless of the UI being
//! used.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It does no business logic, no I/O, and no
//! presentation work; those belong to `commands/*.rs` and the CLI layer
//! respectively.
//!
//! `JotApi<S: NoteStore>` is generic over the storage backend:
//! - Production: `JotApi<FileStore>`
//! - Testing: `JotApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::NoteStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for jot operations.
///
/// All UI clients (CLI, GUI, etc.) should interact through this API.
pub struct JotApi<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> JotApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_note(&mut self, content: String) -> Result<CmdResult> {
        commands::create::run(&mut self.store, content)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_notes(&self, filenames: &[String]) -> Result<CmdResult> {
        commands::view::run(&self.store, filenames)
    }

    pub fn update_note(&mut self, filename: &str, content: String) -> Result<CmdResult> {
        commands::update::run(&mut self.store, filename, content)
    }

    pub fn delete_notes(&mut self, filenames: &[String]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, filenames)
    }

    /// Raw note content, for pre-filling an editor buffer.
    pub fn read_note(&self, filename: &str) -> Result<String> {
        self.store.read(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn create_then_list_round_trips_through_the_facade() {
        let mut api = JotApi::new(InMemoryStore::new());
        let created = api.create_note("Hello world\nSecond line".into()).unwrap();
        let filename = created.affected_notes[0].filename.clone();

        let listed = api.list_notes().unwrap();
        assert_eq!(listed.listed_entries.len(), 1);
        assert_eq!(listed.listed_entries[0].filename, filename);
        assert_eq!(api.read_note(&filename).unwrap(), "Hello world\nSecond line");
    }

    #[test]
    fn update_and_delete_dispatch() {
        let mut api = JotApi::new(InMemoryStore::new());
        let created = api.create_note("v1".into()).unwrap();
        let filename = created.affected_notes[0].filename.clone();

        api.update_note(&filename, "v2".into()).unwrap();
        let viewed = api.view_notes(std::slice::from_ref(&filename)).unwrap();
        assert_eq!(viewed.affected_notes[0].content, "v2");

        api.delete_notes(&[filename]).unwrap();
        assert!(api.list_notes().unwrap().listed_entries.is_empty());
    }
}
