use crate::error::Result;
use crate::model::{BookRecord, ShelfName, UserId};
use crate::shelves::ShelfEntry;

/// Abstract interface for shelf document I/O.
pub trait ShelfBackend {
    /// Load the book array for one shelf document.
    /// Returns `Ok(None)` if the document has never been created; callers
    /// treat that as an empty shelf, not an error.
    /// Returns `Err` only on actual backend failure (IO, corrupt data).
    fn load_books(&self, user: &UserId, shelf: &ShelfName) -> Result<Option<Vec<BookRecord>>>;

    /// Replace the entire book array in one document write.
    /// MUST be atomic per document (e.g. write to tmp then rename) to
    /// avoid partial writes. The last writer wins; there is no
    /// concurrency token.
    fn save_books(&self, user: &UserId, shelf: &ShelfName, books: &[BookRecord]) -> Result<()>;

    /// Remove a shelf document. Removing a document that does not exist
    /// is not an error.
    fn delete_shelf(&self, user: &UserId, shelf: &ShelfName) -> Result<()>;

    /// Load the shelf registry for a user (empty if never created).
    fn load_registry(&self, user: &UserId) -> Result<Vec<ShelfEntry>>;

    /// Save the shelf registry.
    fn save_registry(&self, user: &UserId, entries: &[ShelfEntry]) -> Result<()>;
}
