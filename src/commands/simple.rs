//! Simple interactive CLI mode
//!
//! Line-oriented game loop without TUI: draw the board, read a guess,
//! submit, repeat. Commands: `nova` (new game), `share` (copyable
//! result), `estado` (refresh from the server), `sair` (quit).

use crate::api::GameAuthority;
use crate::core::grid;
use crate::output::{placeholder, row_to_ansi, secret_reveal, status_message};
use crate::session::{GameController, SessionError};
use crate::share;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails. Game and transport
/// errors are reported inline and the loop continues.
pub fn run_simple<A: GameAuthority>(mut controller: GameController<A>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     VOCAB — Jogo de Palavras                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Digite um palpite de 5 letras e pressione Enter.");
    println!("Comandos: 'nova' (nova partida), 'share' (resultado), 'estado', 'sair'\n");

    if let Err(err) = controller.start() {
        println!("{} {err}", "Não foi possível iniciar o jogo.".red());
        println!("Use 'nova' para tentar novamente.\n");
    }
    // Best effort: the server may hold a session from a previous run.
    let _ = controller.refresh();

    loop {
        print_board(&controller);

        let input = get_user_input(placeholder(controller.session()))?;
        match input.to_lowercase().as_str() {
            "sair" | "quit" | "q" => {
                println!("\n👋 Até a próxima!\n");
                return Ok(());
            }
            "nova" | "new" | "n" => {
                match controller.new_game() {
                    Ok(()) => println!("\n🔄 Nova partida!\n"),
                    Err(err) => {
                        println!("{} {err}\n", "Não foi possível iniciar nova partida.".red());
                    }
                }
            }
            "share" | "compartilhar" => {
                let session = controller.session();
                println!("\n{}\n", share::encode(session.history(), session.score()));
            }
            "estado" | "state" => {
                if let Err(err) = controller.refresh() {
                    println!("{} {err}\n", "Não foi possível consultar o estado.".red());
                }
            }
            "" => {}
            guess => {
                controller.set_input(guess);
                match controller.submit() {
                    Ok(()) => {
                        if controller.session().status().is_terminal() {
                            print_game_over(&controller);
                        }
                    }
                    Err(SessionError::Validation(err)) => println!("{}\n", err.to_string().red()),
                    Err(err) => {
                        println!("{} {err}\n", "Não foi possível enviar o palpite.".red());
                    }
                }
            }
        }
    }
}

fn print_board<A: GameAuthority>(controller: &GameController<A>) {
    let session = controller.session();

    println!();
    for row in grid::project(session.history()) {
        println!("  {}", row_to_ansi(&row));
    }

    let message = status_message(session);
    if !message.is_empty() {
        println!("\n  {message}");
    }
    println!();
}

fn print_game_over<A: GameAuthority>(controller: &GameController<A>) {
    let session = controller.session();

    print_board(controller);
    if let Some(reveal) = secret_reveal(session) {
        println!("  {}", reveal.bright_white().bold());
    }
    if let Some(score) = session.score() {
        println!("  Pontuação: {}", score.to_string().bright_yellow().bold());
    }

    println!("\n{}", "Resultado para compartilhar:".bright_cyan());
    println!("{}\n", share::encode(session.history(), session.score()));
    println!("Comandos: 'nova' para jogar de novo, 'sair' para encerrar.\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
