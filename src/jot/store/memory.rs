use super::{Listing, NoteStore};
use crate::error::{JotError, Result};
use crate::model::{self, NoteEntry};
use chrono::Local;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    notes: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for InMemoryStore {
    fn list(&self) -> Result<Listing> {
        Ok(Listing {
            entries: self
                .notes
                .iter()
                .map(|(filename, content)| NoteEntry {
                    filename: filename.clone(),
                    summary: model::summarize(content),
                })
                .collect(),
            skipped: Vec::new(),
        })
    }

    fn read(&self, filename: &str) -> Result<String> {
        self.notes
            .get(filename)
            .cloned()
            .ok_or_else(|| JotError::Read {
                filename: filename.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }

    fn create(&mut self, content: &str) -> Result<Option<String>> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        let filename = model::unique_filename(Local::now(), |name| self.notes.contains_key(name));
        self.notes.insert(filename.clone(), content.to_string());
        Ok(Some(filename))
    }

    fn update(&mut self, filename: &str, content: &str) -> Result<()> {
        self.notes.insert(filename.to_string(), content.to_string());
        Ok(())
    }

    fn delete(&mut self, filename: &str) -> bool {
        self.notes.remove(filename).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_a_store() {
        let mut store = InMemoryStore::new();

        assert_eq!(store.create("  ").unwrap(), None);
        let filename = store.create("Hello world\nSecond line").unwrap().unwrap();

        let listing = store.list().unwrap();
        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.entries[0].filename, filename);
        assert_eq!(listing.entries[0].summary, "Hello world Second line");

        store.update(&filename, "replaced").unwrap();
        assert_eq!(store.read(&filename).unwrap(), "replaced");

        assert!(store.delete(&filename));
        assert!(!store.delete(&filename));
        assert!(matches!(
            store.read(&filename).unwrap_err(),
            JotError::Read { .. }
        ));
    }
}
