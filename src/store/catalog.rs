//! Catalog store for registered books

use crate::{
    error::{AppError, AppResult},
    models::{Book, NewBook},
};

/// Bounded, append-only collection of registered books.
///
/// The length of the underlying vector is the single authority for how
/// many books exist; registration always appends at the end, so listing
/// order is insertion order.
#[derive(Debug)]
pub struct CatalogStore {
    books: Vec<Book>,
    capacity: usize,
}

impl CatalogStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            books: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a new book, available by default.
    ///
    /// Returns the 0-based slot of the new entry, or `CatalogFull` when
    /// no slot remains. Nothing is written on failure.
    pub fn register(&mut self, new: NewBook) -> AppResult<usize> {
        if self.books.len() >= self.capacity {
            return Err(AppError::CatalogFull {
                capacity: self.capacity,
            });
        }

        self.books.push(Book {
            title: new.title,
            author: new.author,
            publisher: new.publisher,
            edition: new.edition,
            available: true,
        });

        Ok(self.books.len() - 1)
    }

    /// All registered books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.books.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
