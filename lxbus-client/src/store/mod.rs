//! Local persistence of previously used stop codes.
//!
//! Storage is optional: some hosts have none. Callers ask
//! [`LocalStore::is_available`] once before an operation instead of
//! treating every failure as a reason to stop.

mod error;
mod file;
mod memory;

use crate::domain::StopCode;

pub use error::StoreError;
pub use file::{FileStore, FileStoreConfig};
pub use memory::{MemoryStore, NoStore};

/// Key-value list of stop codes the user has looked up before.
pub trait LocalStore {
    /// Whether this host can store anything at all.
    fn is_available(&self) -> bool;

    /// All stored codes, oldest first.
    fn list_all(&self) -> Result<Vec<StopCode>, StoreError>;

    /// Remember a code. Adding a code twice keeps one copy.
    fn add(&mut self, code: &StopCode) -> Result<(), StoreError>;

    /// Forget a code. Forgetting an unknown code is not an error.
    fn delete(&mut self, code: &StopCode) -> Result<(), StoreError>;
}
