//! # Configuration
//!
//! Readshelf configuration is managed by [`confique`], layered in
//! priority order:
//!
//! 1. **Environment variables**: `READSHELF_DATA_DIR`,
//!    `READSHELF_DEFAULT_SHELF`.
//! 2. **Config file**: `readshelf.toml` in the OS config directory (via
//!    the `directories` crate).
//! 3. **Compiled defaults**.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Root directory for the filesystem backend |
//! | `default_shelf` | `To Read` | Shelf selected when a user signs in |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, ShelfError};
use crate::model::ShelfName;
use crate::store::FsBackend;

/// Configuration for readshelf, stored in `readshelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReadshelfConfig {
    /// Root directory for shelf documents. When absent, the OS data
    /// directory is used.
    #[config(env = "READSHELF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Label of the shelf selected at sign-in.
    #[config(default = "To Read", env = "READSHELF_DEFAULT_SHELF")]
    pub default_shelf: String,
}

impl Default for ReadshelfConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_shelf: "To Read".to_string(),
        }
    }
}

impl ReadshelfConfig {
    /// Loads configuration from the environment and the OS config
    /// directory.
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dirs) = directories::ProjectDirs::from("", "", "readshelf") {
            builder = builder.file(dirs.config_dir().join("readshelf.toml"));
        }
        builder
            .load()
            .map_err(|e| ShelfError::Access(e.to_string()))
    }

    /// The configured sign-in shelf, parsed into a [`ShelfName`].
    pub fn default_shelf(&self) -> ShelfName {
        ShelfName::parse(&self.default_shelf)
    }

    /// The storage root, falling back to the OS data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => FsBackend::default_root(),
        }
    }
}
