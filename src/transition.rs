//! # Status Transition Engine
//!
//! Pure decision logic mapping a field mutation to an optional shelf
//! move. No I/O; callers persist whatever this module decides.
//!
//! The reading lifecycle is a one-directional three-state machine:
//!
//! ```text
//!   To Read ──start date──▶ Currently Reading ──finish date──▶ Read
//!      │                                                        ▲
//!      └────────────────────finish date──────────────────────────┘
//! ```
//!
//! Custom shelves are not part of the machine and are only reachable via
//! explicit moves. Nothing regresses a book out of `Read` automatically.

use crate::fields::BookField;
use crate::model::ShelfName;

/// Decides whether setting `field` on a book currently on `current`
/// relocates it. Rules are evaluated in order; first match wins:
///
/// 1. A non-empty start date on `To Read` → `Currently Reading`.
/// 2. A non-empty finish date on `To Read` or `Currently Reading` →
///    `Read`.
/// 3. Anything else → no transition.
pub fn decide(current: &ShelfName, field: &BookField) -> Option<ShelfName> {
    match field {
        BookField::StartReading(Some(_)) if *current == ShelfName::ToRead => {
            Some(ShelfName::CurrentlyReading)
        }
        BookField::ReadDate(Some(_))
            if matches!(current, ShelfName::ToRead | ShelfName::CurrentlyReading) =>
        {
            Some(ShelfName::Read)
        }
        _ => None,
    }
}

/// [`decide`] over a batch of fields, in rule order rather than field
/// order: a start date anywhere in the batch is considered before any
/// finish date.
pub fn decide_many(current: &ShelfName, fields: &[BookField]) -> Option<ShelfName> {
    fields
        .iter()
        .filter(|f| matches!(f, BookField::StartReading(_)))
        .find_map(|f| decide(current, f))
        .or_else(|| {
            fields
                .iter()
                .filter(|f| matches!(f, BookField::ReadDate(_)))
                .find_map(|f| decide(current, f))
        })
}
