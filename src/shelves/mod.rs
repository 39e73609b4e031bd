//! Shelf registry support.
//!
//! Each user owns a registry: the list of shelf names that exist for
//! them. The three status shelves are seeded into it on first
//! authenticated access; custom shelves are added and removed by
//! explicit user action. The registry is persisted as one document per
//! user, separate from the shelf documents it enumerates.
//!
//! Custom shelf names must pass the rules in [`validation`] before they
//! enter the registry.

pub mod validation;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ShelfName;

pub use validation::{validate_shelf_name, ShelfNameError};

/// One shelf in a user's registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfEntry {
    pub name: ShelfName,
    pub created_at: DateTime<Utc>,
}

impl ShelfEntry {
    /// Creates a registry entry stamped with the current time.
    ///
    /// Does not validate the name; callers run [`validate_shelf_name`]
    /// on custom names first.
    pub fn new(name: ShelfName) -> Self {
        Self {
            name,
            created_at: Utc::now(),
        }
    }
}
