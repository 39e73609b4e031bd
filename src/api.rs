//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for all readshelf operations,
//! regardless of the UI being used. It owns the per-session state (the
//! signed-in user, their shelf registry, and the selected-shelf cache),
//! dispatches to the operation layer, and applies the failure-reporting
//! policy:
//!
//! - Destructive and relocating actions (add, delete, move, shelf
//!   create/delete) surface failures as error [`Notice`]s for the UI to
//!   render as transient notifications.
//! - In-place field edits fail silently: the failure is logged and the
//!   cache keeps whatever the last successful step produced, which may
//!   diverge from the backend until the next load.
//! - Read failures abort the operation and leave the prior cache
//!   untouched.
//!
//! No operation retries, and none is fatal: every failure is scoped to
//! the single invocation.
//!
//! With no signed-in user every operation is a no-op returning no
//! notices; the identity collaborator owns when a user appears.
//!
//! ## Generic Over ShelfBackend
//!
//! `ShelfApi<S: ShelfBackend>` is generic over storage:
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::cache::ShelfCache;
use crate::engine::{self, Notice};
use crate::error::{Result, ShelfError};
use crate::fields::BookField;
use crate::model::{BookInput, BookRecord, ShelfName, UserId};
use crate::shelves::ShelfEntry;
use crate::store::ShelfBackend;
use crate::transition;

struct Session {
    user: UserId,
    shelves: Vec<ShelfEntry>,
    cache: ShelfCache,
}

/// The main API facade for readshelf operations.
pub struct ShelfApi<S: ShelfBackend> {
    store: S,
    default_shelf: ShelfName,
    session: Option<Session>,
}

impl<S: ShelfBackend> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            default_shelf: ShelfName::ToRead,
            session: None,
        }
    }

    /// Overrides the shelf selected at sign-in (see
    /// [`crate::config::ReadshelfConfig`]).
    pub fn with_default_shelf(mut self, shelf: ShelfName) -> Self {
        self.default_shelf = shelf;
        self
    }

    /// Starts a session for `user`: seeds the three status shelves on
    /// first access, loads the registry, and primes the cache with the
    /// default shelf.
    pub fn sign_in(&mut self, user: UserId) -> Result<()> {
        let (shelves, books) = engine::init::bootstrap(&self.store, &user, &self.default_shelf)?;
        self.session = Some(Session {
            user,
            shelves,
            cache: ShelfCache::select(self.default_shelf.clone(), books),
        });
        Ok(())
    }

    /// Ends the session, dropping registry and cache.
    pub fn sign_out(&mut self) {
        self.session = None;
    }

    pub fn user(&self) -> Option<&UserId> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// The selected shelf, or `None` when signed out.
    pub fn selected_shelf(&self) -> Option<&ShelfName> {
        self.session.as_ref().map(|s| s.cache.selected())
    }

    /// The cached copy of the selected shelf (empty when signed out).
    pub fn books(&self) -> &[BookRecord] {
        self.session
            .as_ref()
            .map(|s| s.cache.books())
            .unwrap_or(&[])
    }

    /// The user's shelf registry (empty when signed out).
    pub fn shelves(&self) -> &[ShelfEntry] {
        self.session
            .as_ref()
            .map(|s| s.shelves.as_slice())
            .unwrap_or(&[])
    }

    /// Switches the selected shelf with a fresh load, replacing the
    /// cache wholesale. Unpersisted edits in the old cache are
    /// discarded. On a read failure the previous selection and cache
    /// stay as they were.
    pub fn select_shelf(&mut self, name: &ShelfName) -> Vec<Notice> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        match engine::load_or_empty(&self.store, &session.user, name) {
            Ok(books) => {
                session.cache = ShelfCache::select(name.clone(), books);
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(shelf = %name, error = %err, "shelf load failed, keeping previous selection");
                Vec::new()
            }
        }
    }

    /// Adds a catalog candidate to `target`. The cache is only updated
    /// when `target` is the selected shelf.
    pub fn add_book(&mut self, input: BookInput, target: &ShelfName) -> Vec<Notice> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let title = input.title.clone();
        match engine::add::run(&self.store, &session.user, input, target) {
            Ok(result) => {
                if !result.added {
                    return vec![Notice::warning(format!(
                        "'{}' is already on '{}'",
                        title, target
                    ))];
                }
                if session.cache.selected() == target {
                    session.cache.replace(result.books);
                }
                vec![Notice::success(format!("Added '{}' to '{}'", title, target))]
            }
            Err(err) => {
                tracing::error!(shelf = %target, error = %err, "add failed");
                vec![Notice::error(format!(
                    "Could not add '{}' to '{}'",
                    title, target
                ))]
            }
        }
    }

    /// Sets one field on a book on the selected shelf. Setting a
    /// lifecycle date may relocate the book (see [`crate::transition`]).
    pub fn update_book_field(&mut self, book_id: &str, field: BookField) -> Vec<Notice> {
        self.update_book_fields(book_id, vec![field])
    }

    /// Merges a batch of field edits in one write, then applies the
    /// transition check across the batch.
    pub fn update_book_fields(&mut self, book_id: &str, fields: Vec<BookField>) -> Vec<Notice> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let selected = session.cache.selected().clone();

        let result =
            match engine::update::run(&self.store, &session.user, &selected, book_id, &fields) {
                Ok(result) => result,
                Err(err) => {
                    let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
                    tracing::warn!(book = book_id, shelf = %selected, fields = ?names, error = %err, "field update failed");
                    return Vec::new();
                }
            };
        session.cache.replace(result.books.clone());

        if !result.changed {
            return Vec::new();
        }
        let Some(target) = transition::decide_many(&selected, &fields) else {
            return Vec::new();
        };

        // The updated array is already in hand; hand it to the move to
        // skip the redundant source read.
        match engine::move_book::run(
            &self.store,
            &session.user,
            &selected,
            &target,
            book_id,
            Some(result.books),
        ) {
            Ok(moved) => {
                session.cache.replace(moved.source_books);
            }
            Err(err) => {
                tracing::warn!(book = book_id, from = %selected, to = %target, error = %err, "automatic shelf move failed");
            }
        }
        Vec::new()
    }

    /// Removes a book from the selected shelf. Success is reported with
    /// a notice; a backend failure is logged without one.
    pub fn delete_book(&mut self, book_id: &str) -> Vec<Notice> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let selected = session.cache.selected().clone();
        match engine::delete::run(&self.store, &session.user, &selected, book_id) {
            Ok(result) => {
                session.cache.replace(result.books);
                if result.removed {
                    vec![Notice::success(format!("Removed from '{}'", selected))]
                } else {
                    Vec::new()
                }
            }
            Err(err) => {
                tracing::warn!(book = book_id, shelf = %selected, error = %err, "delete failed");
                Vec::new()
            }
        }
    }

    /// Explicitly moves a book from the selected shelf to `target`.
    pub fn move_book(&mut self, book_id: &str, target: &ShelfName) -> Vec<Notice> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let selected = session.cache.selected().clone();
        if *target == selected {
            return vec![Notice::info(format!("Already on '{}'", target))];
        }

        match engine::move_book::run(&self.store, &session.user, &selected, target, book_id, None)
        {
            Ok(result) => {
                if !result.moved {
                    return Vec::new();
                }
                session.cache.replace(result.source_books);
                vec![Notice::success(format!("Moved to '{}'", target))]
            }
            Err(err) => {
                tracing::error!(book = book_id, from = %selected, to = %target, error = %err, "move failed");
                vec![Notice::error(format!("Could not move book to '{}'", target))]
            }
        }
    }

    /// Creates a custom shelf. Validation problems come back as error
    /// notices with the registry unchanged.
    pub fn create_custom_shelf(&mut self, name: &str) -> Vec<Notice> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        match engine::custom::create(&self.store, &session.user, name) {
            Ok(entries) => {
                session.shelves = entries;
                vec![Notice::success(format!("Created shelf '{}'", name.trim()))]
            }
            Err(ShelfError::Validation(msg)) => vec![Notice::error(msg)],
            Err(err) => {
                tracing::error!(shelf = name, error = %err, "shelf creation failed");
                vec![Notice::error(format!(
                    "Could not create shelf '{}'",
                    name.trim()
                ))]
            }
        }
    }

    /// Deletes a custom shelf. When the deleted shelf was selected, the
    /// selection falls back to `Read`. User confirmation is the UI's
    /// concern.
    pub fn delete_custom_shelf(&mut self, name: &ShelfName) -> Vec<Notice> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        match engine::custom::delete(&self.store, &session.user, name) {
            Ok(entries) => {
                session.shelves = entries;
                if session.cache.selected() == name {
                    match engine::load_or_empty(&self.store, &session.user, &ShelfName::Read) {
                        Ok(books) => {
                            session.cache = ShelfCache::select(ShelfName::Read, books);
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "fallback shelf load failed");
                            session.cache = ShelfCache::select(ShelfName::Read, Vec::new());
                        }
                    }
                }
                vec![Notice::success(format!("Deleted shelf '{}'", name))]
            }
            Err(ShelfError::Validation(msg)) => vec![Notice::error(msg)],
            Err(err) => {
                tracing::error!(shelf = %name, error = %err, "shelf deletion failed");
                vec![Notice::error(format!("Could not delete shelf '{}'", name))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NoticeLevel;
    use crate::store::MemBackend;
    use chrono::NaiveDate;

    fn signed_in() -> ShelfApi<MemBackend> {
        let mut api = ShelfApi::new(MemBackend::new());
        api.sign_in(UserId::new("u1")).unwrap();
        api
    }

    fn input(id: &str, title: &str) -> BookInput {
        BookInput {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    fn date(s: &str) -> Option<NaiveDate> {
        Some(s.parse().unwrap())
    }

    #[test]
    fn sign_in_seeds_and_selects_the_default_shelf() {
        let api = signed_in();
        assert_eq!(api.user().unwrap().as_str(), "u1");
        assert_eq!(api.shelves().len(), 3);
        assert_eq!(api.selected_shelf(), Some(&ShelfName::ToRead));
        assert!(api.books().is_empty());
    }

    #[test]
    fn sign_out_clears_all_session_state() {
        let mut api = signed_in();
        api.sign_out();
        assert!(api.user().is_none());
        assert!(api.selected_shelf().is_none());
        assert!(api.books().is_empty());
        assert!(api.shelves().is_empty());
    }

    #[test]
    fn operations_are_no_ops_when_signed_out() {
        let mut api: ShelfApi<MemBackend> = ShelfApi::new(MemBackend::new());

        assert!(api.add_book(input("b1", "Dune"), &ShelfName::ToRead).is_empty());
        assert!(api.update_book_field("b1", BookField::Rating(5)).is_empty());
        assert!(api.delete_book("b1").is_empty());
        assert!(api.move_book("b1", &ShelfName::Read).is_empty());
        assert!(api.create_custom_shelf("Sci-Fi").is_empty());
        assert!(api.select_shelf(&ShelfName::Read).is_empty());
    }

    #[test]
    fn configured_default_shelf_is_selected_at_sign_in() {
        let mut api = ShelfApi::new(MemBackend::new()).with_default_shelf(ShelfName::Read);
        api.sign_in(UserId::new("u1")).unwrap();
        assert_eq!(api.selected_shelf(), Some(&ShelfName::Read));
    }

    #[test]
    fn add_updates_cache_only_for_the_selected_shelf() {
        let mut api = signed_in();

        let notices = api.add_book(input("b1", "Dune"), &ShelfName::ToRead);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(api.books().len(), 1);

        // Adding to an unselected shelf leaves the cache alone.
        api.add_book(input("b2", "Hyperion"), &ShelfName::Read);
        assert_eq!(api.books().len(), 1);
    }

    #[test]
    fn duplicate_add_warns_and_keeps_one_record() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        let notices = api.add_book(input("b1", "Dune"), &ShelfName::ToRead);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert_eq!(api.books().len(), 1);
    }

    #[test]
    fn start_date_relocates_from_to_read() {
        // To Read = [Dune]; setting a start date empties To Read and
        // lands the dated record on Currently Reading.
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        api.update_book_field("b1", BookField::StartReading(date("2024-05-01")));

        assert!(api.books().is_empty());

        api.select_shelf(&ShelfName::CurrentlyReading);
        assert_eq!(api.books().len(), 1);
        assert_eq!(api.books()[0].id, "b1");
        assert_eq!(api.books()[0].start_reading, date("2024-05-01"));
    }

    #[test]
    fn finish_date_relocates_to_read_shelf() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);
        api.update_book_field("b1", BookField::StartReading(date("2024-05-01")));

        api.select_shelf(&ShelfName::CurrentlyReading);
        api.update_book_field("b1", BookField::ReadDate(date("2024-06-01")));

        assert!(api.books().is_empty());
        api.select_shelf(&ShelfName::Read);
        assert_eq!(api.books().len(), 1);
        assert_eq!(api.books()[0].read_date, date("2024-06-01"));
    }

    #[test]
    fn neutral_field_edit_stays_put() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        api.update_book_field("b1", BookField::Rating(4));

        assert_eq!(api.selected_shelf(), Some(&ShelfName::ToRead));
        assert_eq!(api.books().len(), 1);
        assert_eq!(api.books()[0].rating, 4);
        assert_eq!(api.books()[0].title, "Dune");
    }

    #[test]
    fn bulk_edit_applies_fields_and_transition_together() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        api.update_book_fields(
            "b1",
            vec![
                BookField::Rating(5),
                BookField::Review("A classic.".into()),
                BookField::ReadDate(date("2024-06-01")),
            ],
        );

        api.select_shelf(&ShelfName::Read);
        assert_eq!(api.books().len(), 1);
        assert_eq!(api.books()[0].rating, 5);
        assert_eq!(api.books()[0].review, "A classic.");
    }

    #[test]
    fn update_of_an_absent_id_is_silent() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        let notices = api.update_book_field("missing", BookField::Rating(4));
        assert!(notices.is_empty());
        assert_eq!(api.books().len(), 1);
        assert_eq!(api.books()[0].rating, 0);
    }

    #[test]
    fn field_update_failure_is_silent_and_leaves_cache() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        api.store.set_simulate_write_error(true);
        let notices = api.update_book_field("b1", BookField::Rating(4));
        assert!(notices.is_empty());

        // Cache still shows the pre-edit copy.
        assert_eq!(api.books()[0].rating, 0);
    }

    #[test]
    fn delete_notifies_on_success_only() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        let notices = api.delete_book("b1");
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert!(api.books().is_empty());

        // Failures are logged, never surfaced.
        api.add_book(input("b2", "Hyperion"), &ShelfName::ToRead);
        api.store.set_simulate_write_error(true);
        let notices = api.delete_book("b2");
        assert!(notices.is_empty());
    }

    #[test]
    fn deleting_an_absent_id_is_quiet() {
        let mut api = signed_in();
        let notices = api.delete_book("missing");
        assert!(notices.is_empty());
    }

    #[test]
    fn explicit_move_relocates_and_notifies() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);
        api.create_custom_shelf("Favorites");

        let notices = api.move_book("b1", &ShelfName::Custom("Favorites".into()));
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert!(api.books().is_empty());

        api.select_shelf(&ShelfName::Custom("Favorites".into()));
        assert_eq!(api.books().len(), 1);
    }

    #[test]
    fn move_to_the_selected_shelf_is_declined() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        let notices = api.move_book("b1", &ShelfName::ToRead);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(api.books().len(), 1);
    }

    #[test]
    fn move_failure_surfaces_an_error_notice() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        api.store.set_simulate_write_error(true);
        let notices = api.move_book("b1", &ShelfName::Read);
        assert_eq!(notices[0].level, NoticeLevel::Error);
    }

    #[test]
    fn create_custom_shelf_validation_surfaces_errors() {
        let mut api = signed_in();

        let notices = api.create_custom_shelf("");
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(api.shelves().len(), 3);

        api.create_custom_shelf("Sci-Fi");
        let notices = api.create_custom_shelf("Sci-Fi");
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(api.shelves().len(), 4);
    }

    #[test]
    fn deleting_the_selected_shelf_falls_back_to_read() {
        let mut api = signed_in();
        api.create_custom_shelf("Sci-Fi");
        let shelf = ShelfName::Custom("Sci-Fi".into());
        api.select_shelf(&shelf);
        assert_eq!(api.selected_shelf(), Some(&shelf));

        api.add_book(input("b1", "Dune"), &ShelfName::Read);
        let notices = api.delete_custom_shelf(&shelf);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(api.selected_shelf(), Some(&ShelfName::Read));
        assert_eq!(api.books().len(), 1);
    }

    #[test]
    fn deleting_an_unselected_shelf_keeps_the_selection() {
        let mut api = signed_in();
        api.create_custom_shelf("Sci-Fi");

        api.delete_custom_shelf(&ShelfName::Custom("Sci-Fi".into()));
        assert_eq!(api.selected_shelf(), Some(&ShelfName::ToRead));
    }

    #[test]
    fn select_failure_keeps_the_previous_cache() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        api.store.set_simulate_read_error(true);
        let notices = api.select_shelf(&ShelfName::Read);
        assert!(notices.is_empty());

        assert_eq!(api.selected_shelf(), Some(&ShelfName::ToRead));
        assert_eq!(api.books().len(), 1);
    }

    #[test]
    fn select_discards_unpersisted_cache_state() {
        let mut api = signed_in();
        api.add_book(input("b1", "Dune"), &ShelfName::ToRead);

        // A failed edit leaves the cache as-is; re-selecting reloads the
        // backend truth.
        api.store.set_simulate_write_error(true);
        api.update_book_field("b1", BookField::Rating(4));
        api.store.set_simulate_write_error(false);

        api.select_shelf(&ShelfName::ToRead);
        assert_eq!(api.books()[0].rating, 0);
    }
}
