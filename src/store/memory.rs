use std::cell::RefCell;
use std::collections::HashMap;

use super::backend::ShelfBackend;
use crate::error::{Result, ShelfError};
use crate::model::{BookRecord, ShelfName, UserId};
use crate::shelves::ShelfEntry;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability: a session is a single logical
/// actor, so the backend never sees concurrent access from one client.
/// Read and write failures can be injected to exercise the error paths
/// without a filesystem.
pub struct MemBackend {
    shelves: RefCell<HashMap<(UserId, ShelfName), Vec<BookRecord>>>,
    registries: RefCell<HashMap<UserId, Vec<ShelfEntry>>>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
    fail_after_writes: RefCell<Option<u32>>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            shelves: RefCell::new(HashMap::new()),
            registries: RefCell::new(HashMap::new()),
            simulate_read_error: RefCell::new(false),
            simulate_write_error: RefCell::new(false),
            fail_after_writes: RefCell::new(None),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read fail until cleared.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Make every write fail until cleared.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Let `count` writes succeed, then fail every subsequent write.
    /// Used to break multi-write operations partway through.
    pub fn fail_after_writes(&self, count: u32) {
        *self.fail_after_writes.borrow_mut() = Some(count);
    }

    fn check_read(&self) -> Result<()> {
        if *self.simulate_read_error.borrow() {
            return Err(ShelfError::Access("simulated read error".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Access("simulated write error".to_string()));
        }
        let mut allowance = self.fail_after_writes.borrow_mut();
        if let Some(remaining) = allowance.as_mut() {
            if *remaining == 0 {
                return Err(ShelfError::Access("simulated write error".to_string()));
            }
            *remaining -= 1;
        }
        Ok(())
    }
}

impl ShelfBackend for MemBackend {
    fn load_books(&self, user: &UserId, shelf: &ShelfName) -> Result<Option<Vec<BookRecord>>> {
        self.check_read()?;
        let shelves = self.shelves.borrow();
        Ok(shelves.get(&(user.clone(), shelf.clone())).cloned())
    }

    fn save_books(&self, user: &UserId, shelf: &ShelfName, books: &[BookRecord]) -> Result<()> {
        self.check_write()?;
        let mut shelves = self.shelves.borrow_mut();
        shelves.insert((user.clone(), shelf.clone()), books.to_vec());
        Ok(())
    }

    fn delete_shelf(&self, user: &UserId, shelf: &ShelfName) -> Result<()> {
        self.check_write()?;
        let mut shelves = self.shelves.borrow_mut();
        shelves.remove(&(user.clone(), shelf.clone()));
        Ok(())
    }

    fn load_registry(&self, user: &UserId) -> Result<Vec<ShelfEntry>> {
        self.check_read()?;
        let registries = self.registries.borrow();
        Ok(registries.get(user).cloned().unwrap_or_default())
    }

    fn save_registry(&self, user: &UserId, entries: &[ShelfEntry]) -> Result<()> {
        self.check_write()?;
        let mut registries = self.registries.borrow_mut();
        registries.insert(user.clone(), entries.to_vec());
        Ok(())
    }
}
