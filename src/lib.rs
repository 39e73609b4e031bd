//! # Readshelf Architecture
//!
//! Readshelf is a **UI-agnostic reading-tracker library**: the shelf and
//! book-status core of a reading tracker, with the UI (web, CLI, tests)
//! as a thin client on top.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                       │
//! │  - Owns the session: user, registry, selected-shelf cache  │
//! │  - Applies the failure-reporting policy (notices vs logs)  │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Operation Layer (engine/*.rs)                             │
//! │  - Pure load→transform→save functions per operation        │
//! │  - Consults the transition machine, no session state       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - Abstract ShelfBackend trait                             │
//! │  - FsBackend (production), MemBackend (testing)            │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, and **never** writes to stdout/stderr or assumes
//! a terminal. Failures worth showing the user come back as structured
//! [`engine::Notice`] values; failures that are policy-silent go to
//! `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`engine`]: Shelf operations (add, update, delete, move, custom
//!   shelves, first-access bootstrap)
//! - [`transition`]: The pure reading-status machine
//! - [`store`]: Storage abstraction and implementations
//! - [`cache`]: The selected-shelf cache
//! - [`model`]: Core data types (`BookRecord`, `ShelfName`, `UserId`)
//! - [`fields`]: The closed union of updatable book fields
//! - [`shelves`]: Shelf registry entries and name validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod fields;
pub mod model;
pub mod shelves;
pub mod store;
pub mod transition;
