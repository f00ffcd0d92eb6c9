//! Scripted end-to-end menu sessions
//!
//! Each test feeds a full session through the menu loop from an in-memory
//! buffer and asserts on the captured output and the final state.

use std::io::Cursor;

use biblioteca::{
    config::{AppConfig, CatalogConfig, LoansConfig, LoggingConfig},
    console::{self, Console},
    services::Services,
    store::Store,
    AppState,
};

fn run_session_with(config: AppConfig, script: &str) -> (AppState, String) {
    let store = Store::new(&config);
    let services = Services::new(store);
    let mut state = AppState { config, services };

    let mut output = Vec::new();
    {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), &mut output);
        console::run(&mut console, &mut state).expect("menu session failed");
    }

    (state, String::from_utf8(output).expect("output is not UTF-8"))
}

fn run_session(script: &str) -> (AppState, String) {
    run_session_with(AppConfig::default(), script)
}

#[test]
fn quit_prints_farewell() {
    let (_, output) = run_session("0\n");

    assert!(output.contains("BIBLIOTECA - PARTE 3 (MESTRE)"));
    assert!(output.contains("Escolha uma opcao: "));
    assert!(output.contains("Saindo do sistema..."));
}

#[test]
fn register_then_list_shows_the_book() {
    let (state, output) = run_session("1\nDune\nHerbert\nAce\n1965\n\n2\n\n0\n");

    assert!(output.contains("--- Cadastro de Novo Livro ---"));
    assert!(output.contains("Livro cadastrado com sucesso!"));
    assert!(output.contains("LIVRO 1"));
    assert!(output.contains("Nome: Dune"));
    assert!(output.contains("Autor: Herbert"));
    assert!(output.contains("Status: Disponivel"));

    assert_eq!(state.services.catalog.count(), 1);
    let book = &state.services.catalog.list_books()[0];
    assert_eq!(book.publisher, "Ace");
    assert_eq!(book.edition, 1965);
    assert!(book.available);
}

#[test]
fn empty_catalog_lists_placeholder() {
    let (_, output) = run_session("2\n\n0\n");

    assert!(output.contains("--- Lista de Livros Cadastrados ---"));
    assert!(output.contains("Nenhum livro cadastrado ainda."));
    assert!(!output.contains("LIVRO"));
}

#[test]
fn non_numeric_edition_defaults_to_zero() {
    let (state, output) = run_session("1\nLivro X\nAutor Y\nEditora Z\nabc\n\n2\n\n0\n");

    assert!(output.contains("Entrada invalida para edicao. Definindo para 0."));
    // The next command still reads cleanly
    assert!(output.contains("Nome: Livro X"));

    assert_eq!(state.services.catalog.list_books()[0].edition, 0);
}

#[test]
fn invalid_menu_command_keeps_the_loop() {
    let (_, output) = run_session("banana\n\n7\n\n0\n");

    assert_eq!(output.matches("Opcao invalida!").count(), 2);
    assert_eq!(output.matches("BIBLIOTECA - PARTE 3 (MESTRE)").count(), 3);
    assert!(output.contains("Saindo do sistema..."));
}

#[test]
fn full_catalog_is_reported_before_prompting() {
    let config = AppConfig {
        catalog: CatalogConfig { capacity: 1 },
        loans: LoansConfig::default(),
        logging: LoggingConfig::default(),
    };
    let (state, output) = run_session_with(config, "1\nUm\nA\nE\n1\n\n1\n\n0\n");

    assert!(output.contains("Biblioteca cheia!"));
    // The second registration never asks for data
    assert_eq!(output.matches("Digite o nome do livro: ").count(), 1);
    assert_eq!(state.services.catalog.count(), 1);
}

#[test]
fn loan_commands_report_not_implemented() {
    let (state, output) = run_session("3\n\n4\n\n0\n");

    assert!(output.contains("[Funcao 'realizarEmprestimo' nao implementada.]"));
    assert!(output.contains("[Funcao 'listarEmprestimos' nao implementada.]"));
    assert_eq!(state.services.loans.count(), 0);
}

#[test]
fn end_of_input_terminates_the_loop() {
    let (_, output) = run_session("2\n");

    // The list flow ran, the loop ended without an explicit quit
    assert!(output.contains("Nenhum livro cadastrado ainda."));
    assert!(!output.contains("Saindo do sistema..."));
}
