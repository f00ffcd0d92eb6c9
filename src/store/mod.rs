//! In-memory record stores
//!
//! The stores own every record for the lifetime of the process; there is
//! no persistence behind them, so all data is lost on exit.

pub mod catalog;
pub mod loans;

pub use catalog::CatalogStore;
pub use loans::LoanStore;

use crate::config::AppConfig;

/// Container for all stores
#[derive(Debug)]
pub struct Store {
    pub catalog: CatalogStore,
    pub loans: LoanStore,
}

impl Store {
    /// Create both stores with the configured capacities
    pub fn new(config: &AppConfig) -> Self {
        Self {
            catalog: CatalogStore::new(config.catalog.capacity),
            loans: LoanStore::new(config.loans.capacity),
        }
    }
}
