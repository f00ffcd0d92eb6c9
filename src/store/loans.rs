//! Loan store
//!
//! Loan recording is not implemented yet; the store is still constructed
//! at startup so the capacity bound is already in place when the feature
//! lands.

use crate::models::Loan;

/// Bounded collection of loan records
#[derive(Debug)]
pub struct LoanStore {
    loans: Vec<Loan>,
    capacity: usize,
}

impl LoanStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            loans: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// All recorded loans in insertion order
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
