use crate::engine::load_or_empty;
use crate::error::Result;
use crate::model::{BookRecord, ShelfName, UserId};
use crate::shelves::ShelfEntry;
use crate::store::ShelfBackend;

/// Seeds the three status shelves for a user whose registry is empty.
///
/// Runs on first authenticated access and is idempotent: a non-empty
/// registry is returned untouched.
pub fn ensure_status_shelves<S: ShelfBackend>(
    store: &S,
    user: &UserId,
) -> Result<Vec<ShelfEntry>> {
    let mut entries = store.load_registry(user)?;
    if !entries.is_empty() {
        return Ok(entries);
    }

    for shelf in ShelfName::status_shelves() {
        // Don't clobber a shelf document that already has books (e.g. a
        // registry lost to a failed write).
        if store.load_books(user, &shelf)?.is_none() {
            store.save_books(user, &shelf, &[])?;
        }
        entries.push(ShelfEntry::new(shelf));
    }
    store.save_registry(user, &entries)?;
    Ok(entries)
}

/// Convenience used at sign-in: seed if needed, then load the books of
/// the initial shelf.
pub fn bootstrap<S: ShelfBackend>(
    store: &S,
    user: &UserId,
    initial: &ShelfName,
) -> Result<(Vec<ShelfEntry>, Vec<BookRecord>)> {
    let entries = ensure_status_shelves(store, user)?;
    let books = load_or_empty(store, user, initial)?;
    Ok((entries, books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookInput, BookRecord};
    use crate::store::MemBackend;

    #[test]
    fn empty_registry_gets_the_three_status_shelves() {
        let store = MemBackend::new();
        let user = UserId::new("u1");

        let entries = ensure_status_shelves(&store, &user).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, ShelfName::ToRead);
        assert_eq!(entries[1].name, ShelfName::CurrentlyReading);
        assert_eq!(entries[2].name, ShelfName::Read);

        // Each status shelf now has an (empty) document.
        for shelf in ShelfName::status_shelves() {
            assert_eq!(store.load_books(&user, &shelf).unwrap(), Some(vec![]));
        }
    }

    #[test]
    fn non_empty_registry_is_left_alone() {
        let store = MemBackend::new();
        let user = UserId::new("u1");
        let seeded = ensure_status_shelves(&store, &user).unwrap();

        let again = ensure_status_shelves(&store, &user).unwrap();
        assert_eq!(again.len(), seeded.len());
        assert_eq!(again[0].created_at, seeded[0].created_at);
    }

    #[test]
    fn seeding_does_not_clobber_existing_books() {
        let store = MemBackend::new();
        let user = UserId::new("u1");
        let book = BookRecord::from_input(BookInput {
            id: "b1".into(),
            ..Default::default()
        });
        store
            .save_books(&user, &ShelfName::Read, &[book])
            .unwrap();

        ensure_status_shelves(&store, &user).unwrap();

        let read = store.load_books(&user, &ShelfName::Read).unwrap().unwrap();
        assert_eq!(read.len(), 1);
    }

    #[test]
    fn bootstrap_returns_initial_shelf_books() {
        let store = MemBackend::new();
        let user = UserId::new("u1");
        let (entries, books) = bootstrap(&store, &user, &ShelfName::ToRead).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(books.is_empty());
    }
}
