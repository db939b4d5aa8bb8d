//! # Storage Layer
//!
//! This module defines the storage abstraction for jot. The [`NoteStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One flat directory of `note_YYYYMMDD_HHMMSS.txt` files
//!   - File content IS the note content, verbatim; no metadata sidecar
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Listing Semantics
//!
//! [`NoteStore::list`] returns a freshly computed [`Listing`] on every call;
//! there is no cached summary table to keep in sync. Entries appear in the
//! backend's enumeration order (for `FileStore` that is the OS directory
//! order, unsorted). A note whose content cannot be read is skipped and
//! recorded in [`Listing::skipped`] instead of aborting the listing.

use crate::error::Result;
use crate::model::NoteEntry;

pub mod fs;
pub mod memory;

/// Result of listing a store: one entry per note, plus the filenames that
/// were skipped because their content could not be read.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<NoteEntry>,
    pub skipped: Vec<String>,
}

/// Abstract interface for note storage.
pub trait NoteStore {
    /// List every note currently in the store, freshly summarized.
    fn list(&self) -> Result<Listing>;

    /// Full content of a note.
    fn read(&self, filename: &str) -> Result<String>;

    /// Persist new content under a timestamped filename and return it.
    /// Returns `None` without writing anything when the content is empty
    /// or whitespace-only.
    fn create(&mut self, content: &str) -> Result<Option<String>>;

    /// Overwrite a note's content unconditionally (empty content allowed).
    fn update(&mut self, filename: &str, content: &str) -> Result<()>;

    /// Remove a note. Returns whether a file was actually removed; deleting
    /// an absent note reports `false` rather than failing.
    fn delete(&mut self, filename: &str) -> bool;
}
