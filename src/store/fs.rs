use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::backend::ShelfBackend;
use crate::error::{Result, ShelfError};
use crate::model::{BookRecord, ShelfName, UserId};
use crate::shelves::ShelfEntry;

/// On-disk shape of one shelf document.
#[derive(Serialize, Deserialize)]
struct ShelfDocument {
    books: Vec<BookRecord>,
}

/// Filesystem backend: one JSON document per `(user, shelf)` plus one
/// registry document per user, under a single root directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// OS-appropriate default data root (e.g. `~/.local/share/readshelf`).
    pub fn default_root() -> Result<PathBuf> {
        directories::ProjectDirs::from("", "", "readshelf")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| ShelfError::Access("no home directory available".to_string()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn user_dir(&self, user: &UserId) -> PathBuf {
        self.root.join(user.as_str())
    }

    fn shelf_file(&self, user: &UserId, shelf: &ShelfName) -> PathBuf {
        self.user_dir(user).join(format!("shelf-{}.json", shelf.slug()))
    }

    fn registry_file(&self, user: &UserId) -> PathBuf {
        self.user_dir(user).join("shelves.json")
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Atomic write: tmp file in the same directory, then rename.
    fn write_atomic(&self, target: &Path, content: &str) -> Result<()> {
        let dir = target
            .parent()
            .ok_or_else(|| ShelfError::Access(format!("no parent directory for {:?}", target)))?;
        self.ensure_dir(dir)?;

        let tmp = dir.join(format!(".doc-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, target)?;
        Ok(())
    }
}

impl ShelfBackend for FsBackend {
    fn load_books(&self, user: &UserId, shelf: &ShelfName) -> Result<Option<Vec<BookRecord>>> {
        let path = self.shelf_file(user, shelf);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let doc: ShelfDocument = serde_json::from_str(&content)?;
        Ok(Some(doc.books))
    }

    fn save_books(&self, user: &UserId, shelf: &ShelfName, books: &[BookRecord]) -> Result<()> {
        let doc = ShelfDocument {
            books: books.to_vec(),
        };
        let content = serde_json::to_string_pretty(&doc)?;
        self.write_atomic(&self.shelf_file(user, shelf), &content)
    }

    fn delete_shelf(&self, user: &UserId, shelf: &ShelfName) -> Result<()> {
        let path = self.shelf_file(user, shelf);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn load_registry(&self, user: &UserId) -> Result<Vec<ShelfEntry>> {
        let path = self.registry_file(user);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        let entries: Vec<ShelfEntry> = serde_json::from_str(&content)?;
        Ok(entries)
    }

    fn save_registry(&self, user: &UserId, entries: &[ShelfEntry]) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)?;
        self.write_atomic(&self.registry_file(user), &content)
    }
}
