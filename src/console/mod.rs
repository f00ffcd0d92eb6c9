//! Interactive menu surface
//!
//! The menu loop is the only caller of the services: render the menu, read
//! one command, dispatch, repeat until the user asks to leave.

pub mod catalog;
pub mod input;
pub mod loans;

pub use input::Console;

use std::io::{BufRead, Write};

use crate::{error::AppResult, AppState};

pub(crate) const RULE: &str = "--------------------------------------";

const MENU: &str = "\
======================================
     BIBLIOTECA - PARTE 3 (MESTRE)
======================================
1 - Cadastrar novo livro
2 - Listar todos os livros
3 - Realizar emprestimo
4 - Listar emprestimos
0 - Sair
--------------------------------------
Escolha uma opcao: ";

/// One menu command as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RegisterBook,
    ListBooks,
    CreateLoan,
    ListLoans,
    Quit,
    Invalid,
}

impl From<i32> for Command {
    fn from(v: i32) -> Self {
        match v {
            1 => Command::RegisterBook,
            2 => Command::ListBooks,
            3 => Command::CreateLoan,
            4 => Command::ListLoans,
            0 => Command::Quit,
            _ => Command::Invalid,
        }
    }
}

/// Run menu iterations until the user quits or the input ends
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> AppResult<()> {
    loop {
        console.write_str(MENU)?;
        let Some(line) = console.read_line()? else {
            tracing::debug!("input stream closed, leaving menu loop");
            return Ok(());
        };
        // Anything that is not an integer routes to the invalid branch
        let command = line
            .trim()
            .parse::<i32>()
            .map(Command::from)
            .unwrap_or(Command::Invalid);

        tracing::debug!(?command, "dispatching menu command");
        match command {
            Command::RegisterBook => catalog::register_book(console, &mut state.services)?,
            Command::ListBooks => catalog::list_books(console, &state.services)?,
            Command::CreateLoan => loans::create_loan(console, &mut state.services)?,
            Command::ListLoans => loans::list_loans(console, &state.services)?,
            Command::Quit => {
                console.write_line("\nSaindo do sistema...")?;
                return Ok(());
            }
            Command::Invalid => {
                console.write_str("\nOpcao invalida! Pressione Enter para tentar novamente.")?;
                console.read_line()?;
            }
        }
    }
}
