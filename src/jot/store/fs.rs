use super::{Listing, NoteStore};
use crate::error::{JotError, Result};
use crate::model::{self, NoteEntry};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Production store: a single flat directory of note files.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens the notes directory, creating it if absent. Failing to create
    /// or access it is fatal to the store.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| JotError::StorageUnavailable {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a bare note filename inside the store directory. Names
    /// carrying path separators are rejected so a caller can never reach
    /// outside the directory.
    fn note_path(&self, filename: &str) -> Result<PathBuf> {
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(JotError::Store(format!(
                "Invalid note filename: '{}'",
                filename
            )));
        }
        Ok(self.root.join(filename))
    }
}

impl NoteStore for FileStore {
    fn list(&self) -> Result<Listing> {
        let dir = fs::read_dir(&self.root).map_err(|source| JotError::StorageUnavailable {
            path: self.root.clone(),
            source,
        })?;

        let mut listing = Listing::default();
        for entry in dir.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !model::is_note_filename(&name) {
                continue;
            }
            match fs::read_to_string(entry.path()) {
                Ok(content) => listing.entries.push(NoteEntry {
                    summary: model::summarize(&content),
                    filename: name,
                }),
                Err(_) => listing.skipped.push(name),
            }
        }

        Ok(listing)
    }

    fn read(&self, filename: &str) -> Result<String> {
        let path = self.note_path(filename)?;
        fs::read_to_string(path).map_err(|source| JotError::Read {
            filename: filename.to_string(),
            source,
        })
    }

    fn create(&mut self, content: &str) -> Result<Option<String>> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        let filename = model::unique_filename(Local::now(), |name| self.root.join(name).exists());
        fs::write(self.root.join(&filename), content).map_err(|source| JotError::Write {
            filename: filename.clone(),
            source,
        })?;
        Ok(Some(filename))
    }

    fn update(&mut self, filename: &str, content: &str) -> Result<()> {
        let path = self.note_path(filename)?;
        fs::write(path, content).map_err(|source| JotError::Write {
            filename: filename.to_string(),
            source,
        })
    }

    fn delete(&mut self, filename: &str) -> bool {
        match self.note_path(filename) {
            Ok(path) => fs::remove_file(path).is_ok(),
            Err(_) => false,
        }
    }
}
