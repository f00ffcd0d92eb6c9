//! Loan management service
//!
//! Both operations are intentional stubs: the original system never
//! specified borrowing or return semantics, so they report themselves as
//! unimplemented instead of inventing behavior. Neither touches the store.

use crate::{
    error::{AppError, AppResult},
    store::LoanStore,
};

#[derive(Debug)]
pub struct LoansService {
    store: LoanStore,
}

impl LoansService {
    pub fn new(store: LoanStore) -> Self {
        Self { store }
    }

    /// Record a loan (not implemented)
    pub fn create_loan(&mut self) -> AppResult<()> {
        tracing::warn!("loan recording requested but not implemented");
        Err(AppError::NotImplemented("realizarEmprestimo"))
    }

    /// List recorded loans (not implemented)
    pub fn list_loans(&self) -> AppResult<()> {
        tracing::warn!("loan listing requested but not implemented");
        Err(AppError::NotImplemented("listarEmprestimos"))
    }

    /// Number of recorded loans
    pub fn count(&self) -> usize {
        self.store.len()
    }
}
