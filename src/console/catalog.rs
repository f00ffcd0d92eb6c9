//! Interactive catalog flows

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    models::NewBook,
    services::Services,
};

use super::{Console, RULE};

/// Registration flow: four prompts, then append through the catalog service.
///
/// A full catalog is reported before any prompt so the user is never asked
/// for data that cannot be stored.
pub fn register_book<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &mut Services,
) -> AppResult<()> {
    console.write_line("--- Cadastro de Novo Livro ---\n")?;

    if services.catalog.is_full() {
        console.write_line("Biblioteca cheia!")?;
        return console.pause();
    }

    let title = console.prompt("Digite o nome do livro: ")?;
    let author = console.prompt("Digite o autor: ")?;
    let publisher = console.prompt("Digite a editora: ")?;
    let edition = match console.prompt_int("Digite a edicao (numero inteiro): ")? {
        Some(value) => value,
        None => {
            // Recovered locally: keep the book, default the edition
            console.write_line("Entrada invalida para edicao. Definindo para 0.")?;
            0
        }
    };

    let new = NewBook {
        title,
        author,
        publisher,
        edition,
    };
    match services.catalog.register_book(new) {
        Ok(_) => console.write_line("\nLivro cadastrado com sucesso!")?,
        Err(AppError::CatalogFull { .. }) => console.write_line("Biblioteca cheia!")?,
        Err(e) => return Err(e),
    }

    console.pause()
}

/// Listing flow: every registered book in insertion order
pub fn list_books<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &Services,
) -> AppResult<()> {
    console.write_line("--- Lista de Livros Cadastrados ---\n")?;

    let books = services.catalog.list_books();
    if books.is_empty() {
        console.write_line("Nenhum livro cadastrado ainda.")?;
    } else {
        for (i, book) in books.iter().enumerate() {
            console.write_line(RULE)?;
            console.write_line(&format!("LIVRO {}", i + 1))?;
            console.write_line(&format!("Nome: {}", book.title))?;
            console.write_line(&format!("Autor: {}", book.author))?;
            console.write_line(&format!("Status: {}", book.status_label()))?;
        }
    }
    console.write_line(RULE)?;

    console.pause()
}
