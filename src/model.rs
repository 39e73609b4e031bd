//! # Domain Model: Users, Shelf Names, and Book Records
//!
//! This module defines the core data structures of readshelf: [`UserId`],
//! [`ShelfName`], [`BookRecord`], and [`BookInput`].
//!
//! ## Shelf Names
//!
//! Three shelves are fixed and participate in the automatic status
//! machine (`To Read` → `Currently Reading` → `Read`); everything else is
//! a user-created custom shelf, which is a tag rather than a state.
//! [`ShelfName`] is a closed union over both, so code that only makes
//! sense for status shelves can match exhaustively.
//!
//! Shelf names serialize as their display label (`"To Read"`), which is
//! also how the registry stores them. [`ShelfName::slug`] produces the
//! document key used by file-based storage (`to-read`).
//!
//! ## Book Records
//!
//! A [`BookRecord`] describes one book instance owned by one user on one
//! shelf. The record's `id` is the external catalog identifier of the
//! title, so the same id may legitimately appear on shelves of different
//! users, or on a status shelf and several custom shelves of one user.
//!
//! `added_date` is stamped once in [`BookRecord::from_input`] and is
//! deliberately absent from the updatable-field union in
//! [`crate::fields`], so no update path can touch it.
//!
//! Persisted JSON uses camelCase keys; every field other than `id`,
//! `title`, and `addedDate` is defaulted on deserialization so documents
//! written by older clients keep loading.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque user key supplied by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A shelf identifier: one of the three status shelves or a custom shelf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShelfName {
    ToRead,
    CurrentlyReading,
    Read,
    Custom(String),
}

impl ShelfName {
    /// The three fixed shelves, in lifecycle order.
    pub fn status_shelves() -> [ShelfName; 3] {
        [Self::ToRead, Self::CurrentlyReading, Self::Read]
    }

    /// Whether this shelf participates in the status machine.
    pub fn is_status(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// The display label, which is also the serialized form.
    pub fn label(&self) -> &str {
        match self {
            Self::ToRead => "To Read",
            Self::CurrentlyReading => "Currently Reading",
            Self::Read => "Read",
            Self::Custom(name) => name,
        }
    }

    /// The document key used by file-based storage: lowercased, with
    /// whitespace runs collapsed to single hyphens.
    pub fn slug(&self) -> String {
        slugify(self.label())
    }

    /// Parses a label back into a shelf name. Unrecognized labels are
    /// custom shelves.
    pub fn parse(label: &str) -> Self {
        match label {
            "To Read" => Self::ToRead,
            "Currently Reading" => Self::CurrentlyReading,
            "Read" => Self::Read,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for ShelfName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ShelfName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ShelfName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ShelfName::parse(&label))
    }
}

pub(crate) fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// One book instance on one shelf of one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// External catalog identifier. Stable per title, not per copy.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    /// Set once at creation, never mutated afterwards.
    pub added_date: DateTime<Utc>,
    /// 0 (unrated) through 5.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub pages_read: u32,
    #[serde(default)]
    pub pages_total: u32,
    #[serde(default)]
    pub start_reading: Option<NaiveDate>,
    #[serde(default)]
    pub read_date: Option<NaiveDate>,
    #[serde(default)]
    pub reread_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub quotes: Vec<String>,
    /// URL owned by the file-storage collaborator; the core only stores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_document: Option<String>,
}

/// Candidate record produced by the catalog-search collaborator.
///
/// The core persists whatever mapping it is given; it does not validate
/// the catalog data.
#[derive(Debug, Clone, Default)]
pub struct BookInput {
    pub id: String,
    pub isbn: Option<String>,
    pub title: String,
    pub authors: Vec<String>,
    pub image: String,
    pub pages_total: u32,
}

impl BookRecord {
    /// Builds a fresh record from catalog input, stamping `added_date`
    /// and defaulting every lifecycle field.
    pub fn from_input(input: BookInput) -> Self {
        Self {
            id: input.id,
            isbn: input.isbn,
            title: input.title,
            authors: input.authors,
            image: input.image,
            added_date: Utc::now(),
            rating: 0,
            pages_read: 0,
            pages_total: input.pages_total,
            start_reading: None,
            read_date: None,
            reread_dates: Vec::new(),
            review: String::new(),
            quotes: Vec::new(),
            uploaded_document: None,
        }
    }
}
