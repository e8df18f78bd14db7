//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and the optional debug panel.

use super::app::App;
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::keyboard::KEYBOARD_ROWS;
use crate::game::{MAX_GUESSES, MessageKind, Severity, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(18),    // Board + keyboard
            Constraint::Length(7),  // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if app.show_debug {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        render_play_area(f, app, main_chunks[0]);
        render_debug_panel(f, app, main_chunks[1]);
    } else {
        render_play_area(f, app, chunks[1]);
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(banner) = app.board().visible_banner(Instant::now()) {
        render_banner(f, &banner.text, banner.kind);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn tile_style(tile: Tile) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match tile {
        Tile::Empty => Style::default().fg(Color::DarkGray),
        Tile::Filled => base.fg(Color::Black).bg(Color::White),
        Tile::Evaluated(status) => base.fg(Color::Black).bg(status_color(status)),
    }
}

const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_GUESSES as u16 * 2 + 1), // Board
            Constraint::Length(5),                           // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.board();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for column in 0..WORD_LENGTH {
            let (letter, tile) = board.tile(row, column);
            let text = format!(" {} ", letter.unwrap_or('·'));
            spans.push(Span::styled(text, tile_style(tile)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.keyboard_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    let style = hints.status(letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |status| {
                            Style::default()
                                .fg(Color::Black)
                                .bg(status_color(status))
                        },
                    );
                    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn message_style(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Info => Style::default().fg(Color::White),
        MessageKind::Warning | MessageKind::Lost => Style::default().fg(Color::Red),
        MessageKind::Won => Style::default().fg(Color::Green),
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let now = Instant::now();
    let verdict_hidden = app.board().visible_banner(now).is_none();

    let messages: Vec<ListItem> = app
        .board()
        .messages()
        .iter()
        .rev()
        // Hold back the verdict until the banner is revealed
        .filter(|msg| !(verdict_hidden && msg.kind.is_verdict()))
        .map(|msg| ListItem::new(msg.text.clone()).style(message_style(msg.kind)))
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_debug_panel(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .debug_log()
        .entries()
        .map(|entry| {
            let style = match entry.severity {
                Severity::Info => Style::default().fg(Color::White),
                Severity::Success => Style::default().fg(Color::Green),
                Severity::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>6.2}s ", entry.elapsed.as_secs_f64()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.text.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Debug (Ctrl-L clears) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_banner(f: &mut Frame, text: &str, kind: MessageKind) {
    let area = centered_rect(50, 5, f.area());
    let color = match kind {
        MessageKind::Lost => Color::Red,
        _ => Color::Green,
    };

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from("Ctrl-N: New Game | Esc: Quit"),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(banner, area);
}

/// A rectangle `percent_x` wide and `height` tall, centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let session = app.session();
    let row_text = if app.is_game_over() {
        format!("Game over ({}/{MAX_GUESSES})", session.guesses_used())
    } else {
        format!("Guess {}/{MAX_GUESSES}", session.row() + 1)
    };
    f.render_widget(Paragraph::new(row_text).alignment(Alignment::Center), chunks[0]);

    let stats = &app.stats;
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help_text = if app.is_game_over() {
        "Ctrl-N: New Game | Esc: Quit | Tab: Debug"
    } else {
        "Enter: Submit | Backspace: Delete | Tab: Debug | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_status() {
        let mut app = App::new(&GameConfig {
            secret: Some("words".to_string()),
            reveal_delay: Duration::ZERO,
            ..GameConfig::default()
        })
        .unwrap();
        for c in "crane".chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        app.handle_key_event(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Guess 2/6"));
        assert!(text.contains(" C "));
        assert!(text.contains("Debug"));
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 5, area);
        assert_eq!(rect.height, 5);
        assert_eq!(rect.width, 50);
        assert!(rect.x >= 20 && rect.y >= 10);
    }
}
