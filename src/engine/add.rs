use crate::engine::load_or_empty;
use crate::error::Result;
use crate::model::{BookInput, BookRecord, ShelfName, UserId};
use crate::store::ShelfBackend;

pub struct AddResult {
    /// The target shelf's array after the operation.
    pub books: Vec<BookRecord>,
    /// False when a record with the same id was already on the shelf.
    pub added: bool,
}

/// Appends a catalog candidate to `target`, unless a record with the
/// same id is already there: duplicate adds are a no-op with no write.
pub fn run<S: ShelfBackend>(
    store: &S,
    user: &UserId,
    input: BookInput,
    target: &ShelfName,
) -> Result<AddResult> {
    let mut books = load_or_empty(store, user, target)?;

    if books.iter().any(|b| b.id == input.id) {
        return Ok(AddResult {
            books,
            added: false,
        });
    }

    books.push(BookRecord::from_input(input));
    store.save_books(user, target, &books)?;

    Ok(AddResult { books, added: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;

    fn input(id: &str) -> BookInput {
        BookInput {
            id: id.into(),
            title: format!("Book {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn adds_to_a_never_created_shelf() {
        let store = MemBackend::new();
        let user = UserId::new("u1");

        let result = run(&store, &user, input("b1"), &ShelfName::ToRead).unwrap();
        assert!(result.added);
        assert_eq!(result.books.len(), 1);

        let saved = store.load_books(&user, &ShelfName::ToRead).unwrap().unwrap();
        assert_eq!(saved[0].id, "b1");
    }

    #[test]
    fn preserves_insertion_order() {
        let store = MemBackend::new();
        let user = UserId::new("u1");

        run(&store, &user, input("b1"), &ShelfName::ToRead).unwrap();
        run(&store, &user, input("b2"), &ShelfName::ToRead).unwrap();
        run(&store, &user, input("b3"), &ShelfName::ToRead).unwrap();

        let saved = store.load_books(&user, &ShelfName::ToRead).unwrap().unwrap();
        let ids: Vec<_> = saved.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2", "b3"]);
    }

    #[test]
    fn duplicate_id_is_a_no_op() {
        let store = MemBackend::new();
        let user = UserId::new("u1");
        run(&store, &user, input("b1"), &ShelfName::ToRead).unwrap();

        let result = run(&store, &user, input("b1"), &ShelfName::ToRead).unwrap();
        assert!(!result.added);

        let saved = store.load_books(&user, &ShelfName::ToRead).unwrap().unwrap();
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn duplicate_add_performs_no_write() {
        let store = MemBackend::new();
        let user = UserId::new("u1");
        run(&store, &user, input("b1"), &ShelfName::ToRead).unwrap();

        // A write would fail; the duplicate path never gets there.
        store.set_simulate_write_error(true);
        let result = run(&store, &user, input("b1"), &ShelfName::ToRead).unwrap();
        assert!(!result.added);
    }

    #[test]
    fn same_id_on_another_shelf_is_allowed() {
        let store = MemBackend::new();
        let user = UserId::new("u1");
        run(&store, &user, input("b1"), &ShelfName::ToRead).unwrap();

        let result = run(
            &store,
            &user,
            input("b1"),
            &ShelfName::Custom("Favorites".into()),
        )
        .unwrap();
        assert!(result.added);
    }

    #[test]
    fn write_failure_propagates() {
        let store = MemBackend::new();
        let user = UserId::new("u1");
        store.set_simulate_write_error(true);

        assert!(run(&store, &user, input("b1"), &ShelfName::ToRead).is_err());
    }
}
