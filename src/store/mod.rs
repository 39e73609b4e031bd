//! # Storage Layer
//!
//! This module defines the storage abstraction for readshelf. The
//! [`ShelfBackend`] trait handles the "how" of storage (filesystem vs
//! memory), while the engine handles the "what" (mutations, transitions,
//! cache).
//!
//! ## Document Model
//!
//! The backing store is a plain document store:
//!
//! - One document per `(user, shelf)` pair holding the shelf's full book
//!   array: `{ "books": [BookRecord...] }`.
//! - One registry document per user (`shelves.json`) enumerating the
//!   shelf names that exist for them.
//!
//! There is no partial-field write. Any mutation to one book reads the
//! full array, transforms it in memory, and writes the full array back.
//!
//! ## Consistency Discipline
//!
//! - A single document write is atomic ([`fs::FsBackend`] writes to a
//!   tmp file and renames).
//! - There are no multi-document transactions: operations that touch two
//!   shelves perform two independent writes, and a failure between them
//!   leaves a partially-applied state.
//! - There is no concurrency token: the last full-array write to a
//!   document wins, and a concurrent edit made between another actor's
//!   load and save is silently discarded.
//!
//! ## Storage Layout
//!
//! ```text
//! <root>/<userId>/
//! ├── shelves.json                  # Shelf registry
//! ├── shelf-to-read.json            # { "books": [...] }
//! ├── shelf-currently-reading.json
//! ├── shelf-read.json
//! └── shelf-<custom-slug>.json
//! ```
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production backend, one JSON file per document.
//! - [`memory::MemBackend`]: for testing logic without filesystem I/O,
//!   with failure-injection toggles.

pub mod backend;
pub mod fs;
pub mod memory;

pub use backend::ShelfBackend;
pub use fs::FsBackend;
pub use memory::MemBackend;
