//! Custom shelf management.
//!
//! Custom shelves are tags, not states: they never participate in the
//! automatic status machine, and a book may sit on any number of them in
//! addition to its status shelf. Names must pass
//! [`crate::shelves::validation`] and be unique within the user's
//! registry (compared by slug, since the slug is the document key).

use crate::error::{Result, ShelfError};
use crate::model::{ShelfName, UserId};
use crate::shelves::{validate_shelf_name, ShelfEntry};
use crate::store::ShelfBackend;

/// Creates an empty custom shelf and registers its name.
///
/// Fails with [`ShelfError::Validation`] when the name is blank,
/// malformed, reserved, or already present; the registry is left
/// unchanged in every failure case.
pub fn create<S: ShelfBackend>(
    store: &S,
    user: &UserId,
    name: &str,
) -> Result<Vec<ShelfEntry>> {
    let name = name.trim();
    validate_shelf_name(name).map_err(|e| ShelfError::Validation(e.to_string()))?;

    let shelf = ShelfName::Custom(name.to_string());
    let mut entries = store.load_registry(user)?;
    if entries.iter().any(|e| e.name.slug() == shelf.slug()) {
        return Err(ShelfError::Validation(format!(
            "shelf '{}' already exists",
            name
        )));
    }

    store.save_books(user, &shelf, &[])?;
    entries.push(ShelfEntry::new(shelf));
    store.save_registry(user, &entries)?;

    Ok(entries)
}

/// Deletes a custom shelf: drops it from the registry, then removes its
/// document. Status shelves cannot be deleted.
pub fn delete<S: ShelfBackend>(
    store: &S,
    user: &UserId,
    shelf: &ShelfName,
) -> Result<Vec<ShelfEntry>> {
    if shelf.is_status() {
        return Err(ShelfError::Validation(format!(
            "'{}' is a built-in shelf and cannot be deleted",
            shelf
        )));
    }

    let mut entries = store.load_registry(user)?;
    let before = entries.len();
    entries.retain(|e| e.name != *shelf);
    if entries.len() == before {
        return Err(ShelfError::Validation(format!(
            "shelf '{}' does not exist",
            shelf
        )));
    }

    store.save_registry(user, &entries)?;
    store.delete_shelf(user, shelf)?;

    Ok(entries)
}
