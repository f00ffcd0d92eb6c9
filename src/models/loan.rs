//! Loan (borrow) model
//!
//! Loan recording is not implemented yet; this model documents the
//! intended shape of a loan record.

use serde::{Deserialize, Serialize};

/// A loan linking a catalog slot to a reader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Position of the borrowed book in the catalog
    pub book_index: usize,
    /// Name of the reader holding the book
    pub reader: String,
}
