//! Interactive loan flows
//!
//! Both commands surface the service's not-implemented report; they never
//! crash and never succeed silently.

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    services::Services,
};

use super::Console;

pub fn create_loan<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &mut Services,
) -> AppResult<()> {
    match services.loans.create_loan() {
        Ok(()) => {}
        Err(AppError::NotImplemented(name)) => {
            console.write_line(&format!("\n[Funcao '{}' nao implementada.]", name))?;
        }
        Err(e) => return Err(e),
    }

    console.pause()
}

pub fn list_loans<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &Services,
) -> AppResult<()> {
    match services.loans.list_loans() {
        Ok(()) => {}
        Err(AppError::NotImplemented(name)) => {
            console.write_line(&format!("\n[Funcao '{}' nao implementada.]", name))?;
        }
        Err(e) => return Err(e),
    }

    console.pause()
}
