use crate::engine::load_or_empty;
use crate::error::Result;
use crate::model::{BookRecord, ShelfName, UserId};
use crate::store::ShelfBackend;

pub struct DeleteResult {
    /// The shelf's array after the write.
    pub books: Vec<BookRecord>,
    /// False when no record matched `book_id`.
    pub removed: bool,
}

/// Filters the record with `book_id` off `shelf` and writes the full
/// array back. Deleting an absent id is a no-op, not an error.
pub fn run<S: ShelfBackend>(
    store: &S,
    user: &UserId,
    shelf: &ShelfName,
    book_id: &str,
) -> Result<DeleteResult> {
    let mut books = load_or_empty(store, user, shelf)?;

    let before = books.len();
    books.retain(|b| b.id != book_id);
    let removed = books.len() != before;

    store.save_books(user, shelf, &books)?;

    Ok(DeleteResult { books, removed })
}
