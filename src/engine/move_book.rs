use crate::engine::load_or_empty;
use crate::error::Result;
use crate::model::{BookRecord, ShelfName, UserId};
use crate::store::ShelfBackend;

pub struct MoveResult {
    /// The source shelf's array after the removal write.
    pub source_books: Vec<BookRecord>,
    /// False when `book_id` was not on the source shelf (no writes).
    pub moved: bool,
}

/// Relocates the record with `book_id` from `source` to `target`.
///
/// Two-step operation on two independent documents:
/// 1. Remove the record from the source array and write it back. When
///    the caller already holds the source array (`known_source`), it is
///    filtered in memory directly, saving a read.
/// 2. Load the target, append the removed record, write it back.
///
/// There is no transaction across the two writes. A failure after step 1
/// leaves the record on neither shelf; two concurrent movers can both
/// append to the target. Both windows are inherited store discipline,
/// not guarded here.
pub fn run<S: ShelfBackend>(
    store: &S,
    user: &UserId,
    source: &ShelfName,
    target: &ShelfName,
    book_id: &str,
    known_source: Option<Vec<BookRecord>>,
) -> Result<MoveResult> {
    let mut source_books = match known_source {
        Some(books) => books,
        None => load_or_empty(store, user, source)?,
    };

    let Some(pos) = source_books.iter().position(|b| b.id == book_id) else {
        return Ok(MoveResult {
            source_books,
            moved: false,
        });
    };
    let record = source_books.remove(pos);
    store.save_books(user, source, &source_books)?;

    let mut target_books = load_or_empty(store, user, target)?;
    target_books.push(record);
    store.save_books(user, target, &target_books)?;

    Ok(MoveResult {
        source_books,
        moved: true,
    })
}
