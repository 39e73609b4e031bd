//! Selected-shelf cache.
//!
//! The UI renders from an in-memory copy of exactly one shelf, the
//! currently selected one, never the whole registry. The copy is
//! ownership-free: it is replaced wholesale after every successful load
//! or save, and discarded entirely when the selection changes. Nothing
//! merges cache state back into the store, and there is no offline
//! queue; an edit that never reached the backend is simply gone after
//! the next load.

use crate::model::{BookRecord, ShelfName};

/// Most-recently-fetched copy of the currently selected shelf.
#[derive(Debug, Clone)]
pub struct ShelfCache {
    selected: ShelfName,
    books: Vec<BookRecord>,
}

impl ShelfCache {
    /// Builds a cache for a freshly selected shelf.
    pub fn select(selected: ShelfName, books: Vec<BookRecord>) -> Self {
        Self { selected, books }
    }

    pub fn selected(&self) -> &ShelfName {
        &self.selected
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// Replaces the cached copy wholesale after a successful store
    /// round trip.
    pub fn replace(&mut self, books: Vec<BookRecord>) {
        self.books = books;
    }

    /// Empties the cached copy without changing the selection. Used when
    /// the backend state is known to be unknowable (e.g. a fallback load
    /// failed).
    pub fn invalidate(&mut self) {
        self.books.clear();
    }
}
