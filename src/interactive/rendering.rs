//! TUI rendering with ratatui
//!
//! Board, palette and message panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, Sequence};
use crate::game::Outcome;
use crate::output::formatters::{MASK, PEG, SLOT, rgb};
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
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Key help
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Palette and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_help(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 MASTERMIND")
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

fn peg_span(color: crate::core::Color) -> Span<'static> {
    let (r, g, b) = rgb(color);
    Span::styled(PEG, Style::default().fg(Color::Rgb(r, g, b)))
}

fn slot_span() -> Span<'static> {
    Span::styled(SLOT, Style::default().fg(Color::DarkGray))
}

/// Pegs of `sequence` followed by empty slots up to `width`
fn row_spans(sequence: &Sequence, width: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(width * 2);
    for i in 0..width.max(sequence.len()) {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        match sequence.get(i) {
            Ok(color) => spans.push(peg_span(color)),
            Err(_) => spans.push(slot_span()),
        }
    }
    spans
}

fn feedback_spans(feedback: Feedback) -> Vec<Span<'static>> {
    vec![
        Span::raw("   "),
        Span::styled(
            feedback.exact.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" exact  "),
        Span::styled(
            feedback.misplaced.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" misplaced"),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.state;
    let width = state.config().sequence_len();
    let mut lines = Vec::with_capacity(state.config().max_guesses() + 2);

    // Hidden code row, revealed once the game ends
    let mut code_row = vec![Span::raw("Code: ")];
    match state.hidden() {
        Some(hidden) => code_row.extend(row_spans(hidden, width)),
        None => code_row.push(Span::styled(
            vec![MASK; width].join(" "),
            Style::default().fg(Color::DarkGray),
        )),
    }
    match state.outcome() {
        Outcome::Won => code_row.push(Span::styled(
            "   Victory!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Outcome::Lost => code_row.push(Span::styled(
            "   Lose!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Outcome::InProgress => {}
    }
    lines.push(Line::from(code_row));
    lines.push(Line::from(""));

    for row in 0..state.config().max_guesses() {
        let mut spans = vec![Span::styled(
            format!("{:>2}. ", row + 1),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(record) = state.history().get(row) {
            spans.extend(row_spans(&record.sequence, width));
            spans.extend(feedback_spans(record.feedback));
        } else if row == state.guesses_used() && !state.is_over() {
            spans.extend(row_spans(state.current(), width));
            spans.push(Span::styled(
                "   ◀",
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.extend(row_spans(&Sequence::empty(), width));
        }

        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Palette legend
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .config
        .palette()
        .iter()
        .enumerate()
        .map(|(i, color)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", i + 1),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                peg_span(color),
                Span::raw(format!(" {}", color.name())),
            ]))
        })
        .collect();

    let palette =
        List::new(items).block(Block::default().title(" Colors ").borders(Borders::ALL));
    f.render_widget(palette, area);
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

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = if app.state.is_over() {
        ("n: New Game | q: Quit", Color::Green)
    } else {
        (
            "1-9: Pick Color | Backspace: Undo | Enter: Submit | n: New Game | q: Quit",
            Color::Yellow,
        )
    };

    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(help, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let config = app.state.config();
    let rules_text = format!(
        "{} pegs | {} colors | {}",
        config.sequence_len(),
        config.palette().len(),
        if config.duplicates_allowed() {
            "repeats"
        } else {
            "no repeats"
        }
    );
    f.render_widget(
        Paragraph::new(rules_text).alignment(Alignment::Center),
        chunks[0],
    );

    let guesses_text = format!(
        "Guesses: {}/{}",
        app.state.guesses_used(),
        config.max_guesses()
    );
    f.render_widget(
        Paragraph::new(guesses_text).alignment(Alignment::Center),
        chunks[1],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[2],
    );
}
