//! Book model and related types

use serde::{Deserialize, Serialize};

/// A registered book in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub edition: i32,
    /// Lending status. Every book starts available; nothing flips this
    /// until loan recording exists.
    pub available: bool,
}

impl Book {
    /// Availability status as rendered in listings
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Disponivel"
        } else {
            "Emprestado"
        }
    }
}

/// Registration request for a new book
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub edition: i32,
}
