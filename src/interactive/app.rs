//! TUI application state and logic

use crate::api::{GameAuthority, HttpAuthority};
use crate::session::{GameController, SessionError};
use crate::share;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<A: GameAuthority = HttpAuthority> {
    pub controller: GameController<A>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub share_visible: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<A: GameAuthority> App<A> {
    #[must_use]
    pub fn new(controller: GameController<A>) -> Self {
        Self {
            controller,
            input_mode: InputMode::Typing,
            messages: vec![Message {
                text: "Bem-vindo! Digite 5 letras e pressione Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            share_visible: false,
            should_quit: false,
        }
    }

    /// Start a session and pick up any state the server already holds
    pub fn bootstrap(&mut self) {
        if let Err(err) = self.controller.start() {
            self.add_message(
                &format!("Não foi possível iniciar o jogo. {err}"),
                MessageStyle::Error,
            );
            self.add_message("Ctrl+N tenta novamente.", MessageStyle::Info);
            return;
        }
        // Best effort, mirrors the page-load state fetch.
        let _ = self.controller.refresh();
        self.sync_mode();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Align the input mode with the session status
    fn sync_mode(&mut self) {
        if self.controller.session().status().is_terminal() {
            self.input_mode = InputMode::GameOver;
        } else {
            self.input_mode = InputMode::Typing;
            self.share_visible = false;
        }
    }

    pub fn submit(&mut self) {
        match self.controller.submit() {
            Ok(()) => {
                self.sync_mode();
                if self.input_mode == InputMode::GameOver {
                    let session = self.controller.session();
                    let text = if session.status() == crate::session::Status::Won {
                        "🎉 Você acertou!"
                    } else {
                        "💀 Fim de jogo."
                    };
                    self.add_message(text, MessageStyle::Success);
                    self.add_message(
                        "'n' nova partida, 's' compartilhar, 'q' sair.",
                        MessageStyle::Info,
                    );
                }
            }
            Err(SessionError::Validation(err)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(err) => {
                self.add_message(
                    &format!("Não foi possível enviar o palpite. {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.controller.new_game() {
            Ok(()) => {
                self.messages.clear();
                self.share_visible = false;
                self.sync_mode();
                self.add_message("🔄 Nova partida!", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(
                    &format!("Não foi possível iniciar nova partida. {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn refresh(&mut self) {
        match self.controller.refresh() {
            Ok(()) => self.sync_mode(),
            Err(err) => {
                self.add_message(
                    &format!("Não foi possível consultar o estado. {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Share text for the current history
    #[must_use]
    pub fn share_text(&self) -> String {
        let session = self.controller.session();
        share::encode(session.history(), session.score())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an
/// I/O error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.bootstrap();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (avoids double input on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('s') => {
                        app.share_visible = !app.share_visible;
                    }
                    _ => {
                        // In game-over mode, ignore other keys
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.refresh();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.controller.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.controller.pop_char();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
