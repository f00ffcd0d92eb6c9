//! Catalog management service

use crate::{
    error::AppResult,
    models::{Book, NewBook},
    store::CatalogStore,
};

#[derive(Debug)]
pub struct CatalogService {
    store: CatalogStore,
}

impl CatalogService {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    /// Register a new book in the catalog
    pub fn register_book(&mut self, new: NewBook) -> AppResult<usize> {
        let slot = self.store.register(new)?;
        tracing::debug!("book registered at slot {}", slot);
        Ok(slot)
    }

    /// All registered books in insertion order
    pub fn list_books(&self) -> &[Book] {
        self.store.books()
    }

    /// Number of registered books
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Whether another registration would be rejected
    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }
}
