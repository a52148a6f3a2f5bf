//! In-process stores.

use crate::domain::StopCode;

use super::LocalStore;
use super::error::StoreError;

/// Stop codes held in memory for the life of the widget.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    codes: Vec<StopCode>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with codes already in the list.
    pub fn with_codes(codes: impl IntoIterator<Item = StopCode>) -> Self {
        let mut store = Self::new();
        for code in codes {
            // Adding to memory cannot fail.
            let _ = store.add(&code);
        }
        store
    }
}

impl LocalStore for MemoryStore {
    fn is_available(&self) -> bool {
        true
    }

    fn list_all(&self) -> Result<Vec<StopCode>, StoreError> {
        Ok(self.codes.clone())
    }

    fn add(&mut self, code: &StopCode) -> Result<(), StoreError> {
        if !self.codes.contains(code) {
            self.codes.push(code.clone());
        }
        Ok(())
    }

    fn delete(&mut self, code: &StopCode) -> Result<(), StoreError> {
        self.codes.retain(|c| c != code);
        Ok(())
    }
}

/// Host without local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStore;

impl LocalStore for NoStore {
    fn is_available(&self) -> bool {
        false
    }

    fn list_all(&self) -> Result<Vec<StopCode>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn add(&mut self, _code: &StopCode) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn delete(&mut self, _code: &StopCode) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
