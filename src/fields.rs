//! Updatable book fields.
//!
//! Edits arrive from the UI as "set this field to this value". Rather
//! than a free-form key/value pair, the updatable fields form a closed
//! union: [`BookField`] carries the typed payload for exactly the fields
//! an edit may touch. Identity and creation fields (`id`, `isbn`,
//! `title`, `authors`, `image`, `added_date`) have no variant, so no
//! update path can rewrite them.

use chrono::NaiveDate;

use crate::model::BookRecord;

/// A single field mutation with its typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum BookField {
    /// 0 (unrated) through 5.
    Rating(u8),
    PagesRead(u32),
    PagesTotal(u32),
    /// Date the user began reading. `None` clears it.
    StartReading(Option<NaiveDate>),
    /// Date the user finished reading. `None` clears it.
    ReadDate(Option<NaiveDate>),
    /// Full replacement of the reread-dates list.
    RereadDates(Vec<NaiveDate>),
    Review(String),
    Quotes(Vec<String>),
    /// URL managed by the file-storage collaborator. `None` clears it.
    UploadedDocument(Option<String>),
}

impl BookField {
    /// The persisted (camelCase) name of the field, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rating(_) => "rating",
            Self::PagesRead(_) => "pagesRead",
            Self::PagesTotal(_) => "pagesTotal",
            Self::StartReading(_) => "startReading",
            Self::ReadDate(_) => "readDate",
            Self::RereadDates(_) => "rereadDates",
            Self::Review(_) => "review",
            Self::Quotes(_) => "quotes",
            Self::UploadedDocument(_) => "uploadedDocument",
        }
    }

    /// Writes this field's value into `book`.
    pub fn apply(&self, book: &mut BookRecord) {
        match self {
            Self::Rating(rating) => book.rating = *rating,
            Self::PagesRead(pages) => book.pages_read = *pages,
            Self::PagesTotal(pages) => book.pages_total = *pages,
            Self::StartReading(date) => book.start_reading = *date,
            Self::ReadDate(date) => book.read_date = *date,
            Self::RereadDates(dates) => book.reread_dates = dates.clone(),
            Self::Review(review) => book.review = review.clone(),
            Self::Quotes(quotes) => book.quotes = quotes.clone(),
            Self::UploadedDocument(url) => book.uploaded_document = url.clone(),
        }
    }
}
