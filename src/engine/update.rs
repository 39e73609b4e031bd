use crate::engine::load_or_empty;
use crate::error::Result;
use crate::fields::BookField;
use crate::model::{BookRecord, ShelfName, UserId};
use crate::store::ShelfBackend;

pub struct UpdateResult {
    /// The shelf's array after the write.
    pub books: Vec<BookRecord>,
    /// False when no record matched `book_id`.
    pub changed: bool,
}

/// Applies `fields` to the record with `book_id` on `shelf` and writes
/// the full array back.
///
/// An absent id is tolerated: the array is written back unchanged, which
/// mirrors the map-and-replace discipline of the document store. Whether
/// the edit triggers an automatic shelf move is the caller's concern;
/// see [`crate::transition::decide_many`].
pub fn run<S: ShelfBackend>(
    store: &S,
    user: &UserId,
    shelf: &ShelfName,
    book_id: &str,
    fields: &[BookField],
) -> Result<UpdateResult> {
    let mut books = load_or_empty(store, user, shelf)?;

    let mut changed = false;
    for book in books.iter_mut().filter(|b| b.id == book_id) {
        for field in fields {
            field.apply(book);
        }
        changed = true;
    }

    store.save_books(user, shelf, &books)?;

    Ok(UpdateResult { books, changed })
}
