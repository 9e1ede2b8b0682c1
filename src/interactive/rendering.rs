//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, notice line and status bar.

use super::app::App;
use crate::core::{MAX_ROWS, WORD_LEN};
use crate::game::{CellState, Readiness, SessionStatus, Snapshot, WordSource};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let snapshot = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(MAX_ROWS as u16 + 2), // Board
            Constraint::Length(5),                   // Keyboard
            Constraint::Length(3),                   // Notice
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &snapshot.readiness {
        Readiness::Ready => {
            render_board(f, &snapshot, chunks[1]);
            render_keyboard(f, &snapshot, chunks[2]);
            render_notice(f, &snapshot, chunks[3]);
        }
        Readiness::Loading => {
            render_placeholder(f, "Loading word list...", Color::Yellow, chunks[1]);
        }
        Readiness::Unavailable(reason) => {
            render_placeholder(
                f,
                &format!("Word list unavailable: {reason}"),
                Color::Red,
                chunks[1],
            );
        }
    }

    render_status(f, app, &snapshot, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_placeholder(f: &mut Frame, text: &str, color: Color, area: Rect) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

/// Background/foreground for a scored tile or key
fn cell_style(cell: CellState) -> Style {
    match cell {
        CellState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellState::Unset => Style::default(),
    }
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let active_row =
        (snapshot.status == SessionStatus::InProgress).then_some(snapshot.cursor.row);

    let lines: Vec<Line> = snapshot
        .board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, guess)| {
            let spans: Vec<Span> = (0..WORD_LEN)
                .flat_map(|col| {
                    let tile = match guess.letter(col) {
                        Some(letter) => Span::styled(
                            format!(" {letter} "),
                            cell_style(snapshot.feedback.cell(row, col)),
                        ),
                        None if active_row == Some(row) => {
                            Span::styled(" _ ", Style::default().fg(Color::Yellow))
                        }
                        None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    };
                    [tile, Span::raw(" ")]
                })
                .collect();

            let line = Line::from(spans);
            if active_row == Some(row) {
                line.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                line
            }
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guess {}/{MAX_ROWS} ", snapshot.feedback.submitted()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let cell = snapshot.hints.get(c).map_or(CellState::Unset, CellState::from);
                    [Span::styled(format!(" {c} "), cell_style(cell)), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_notice(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (text, color) = match (&snapshot.notice, snapshot.status) {
        (Some(notice), SessionStatus::Won) => (notice.to_string(), Color::Green),
        (Some(notice), SessionStatus::Lost) => (notice.to_string(), Color::Red),
        (Some(notice), SessionStatus::InProgress | SessionStatus::NotStarted) => {
            (notice.to_string(), Color::Yellow)
        }
        (None, _) => (String::new(), Color::White),
    };

    let notice = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(notice, area);
}

fn render_status<S: WordSource>(f: &mut Frame, app: &App<S>, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats = app.session().statistics();

    let played_text = format!(
        "Played: {} | Win: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    let played = Paragraph::new(played_text).alignment(Alignment::Center);
    f.render_widget(played, chunks[0]);

    let streak_text = format!("Streak: {} | Max: {}", stats.current_streak, stats.max_streak);
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let help_text = match (&snapshot.readiness, snapshot.status) {
        (Readiness::Ready, SessionStatus::InProgress) => {
            "Enter: Submit | Backspace: Delete | Ctrl-N: New Game | Esc: Quit"
        }
        (Readiness::Ready, _) => "Enter: New Game | Esc: Quit",
        _ => "Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
