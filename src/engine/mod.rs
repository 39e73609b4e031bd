//! # Operation Layer
//!
//! This module contains the core shelf operations. Each operation lives
//! in its own submodule as a pure function generic over
//! [`ShelfBackend`]: load the affected document(s), transform in memory,
//! write the full array back, return a structured result.
//!
//! Operations explicitly avoid:
//! - **Any terminal I/O**: no stdout, stderr, or formatting concerns
//! - **Session state**: the selected shelf and cache belong to
//!   [`crate::api::ShelfApi`]
//! - **Failure policy**: operations return `Result`; the facade decides
//!   what is logged and what becomes a user-visible notice
//!
//! ## Operation Modules
//!
//! - [`init`]: Seed the three status shelves on first access
//! - [`add`]: Add a catalog candidate to a shelf
//! - [`update`]: Apply field edits to a book on a shelf
//! - [`delete`]: Remove a book from a shelf
//! - [`move_book`]: Relocate a book between two shelves (two-step)
//! - [`custom`]: Create and delete custom shelves
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Operation tests use
//! [`crate::store::MemBackend`] to cover logic branches, edge cases, and
//! injected backend failures without touching a filesystem.

use serde::Serialize;

use crate::error::Result;
use crate::model::{BookRecord, ShelfName, UserId};
use crate::store::ShelfBackend;

pub mod add;
pub mod custom;
pub mod delete;
pub mod init;
pub mod move_book;
pub mod update;

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A structured message for the UI layer to render as a transient
/// notification. The core never prints.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub content: String,
}

impl Notice {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            content: content.into(),
        }
    }
}

/// Loads a shelf document, treating a never-created document as an empty
/// shelf.
pub fn load_or_empty<S: ShelfBackend>(
    store: &S,
    user: &UserId,
    shelf: &ShelfName,
) -> Result<Vec<BookRecord>> {
    Ok(store.load_books(user, shelf)?.unwrap_or_default())
}
