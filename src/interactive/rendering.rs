//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Cell, LetterStatus, grid};
use crate::output::{placeholder, status_message};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(13), // Board
            Constraint::Length(3),  // Input
            Constraint::Min(5),     // Messages / share
            Constraint::Length(1),  // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    if app.share_visible {
        render_share(f, app, chunks[3]);
    } else {
        render_messages(f, app, chunks[3]);
    }
    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("VOCAB — Jogo de Palavras")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    let letter = cell.letter.unwrap_or(' ');
    let text = format!(" {letter} ");
    let style = match cell.status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::WrongPosition => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Blank => Style::default().fg(Color::DarkGray),
    };
    Span::styled(text, style.add_modifier(Modifier::BOLD))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = app.controller.session();

    let mut lines = Vec::new();
    for row in grid::project(session.history()) {
        let mut spans = Vec::new();
        for (i, &cell) in row.cells().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(cell_span(cell));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let message = status_message(session);
    if !message.is_empty() {
        lines.push(Line::from(message));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Tabuleiro ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let session = app.controller.session();

    let (content, color) = if session.current_input().is_empty() {
        (placeholder(session).to_string(), Color::DarkGray)
    } else {
        (session.current_input().to_string(), Color::Yellow)
    };

    let title = match app.input_mode {
        InputMode::Typing => " Palpite ",
        InputMode::GameOver => " Fim de jogo ",
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(input, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list =
        List::new(messages).block(Block::default().title(" Mensagens ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let text = app.share_text();
    let share = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(" Resultado — copie e compartilhe ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(share, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Typing => "Enter: enviar | Backspace: apagar | Ctrl+N: nova partida | Esc: sair",
        InputMode::GameOver => "n: nova partida | s: compartilhar | q: sair",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
