//! TUI rendering with ratatui
//!
//! Root word tiles, the text field, the found-words list, score and the modal
//! rejection alert.

use super::app::{Alert, App, MessageStyle};
use crate::core::{LetterPool, normalize};
use crate::dictionary::DictionaryOracle;
use crate::output::formatters::length_badge;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Root letters paired with whether the current input uses them
///
/// Letters are consumed left to right, so with root `geologie` and input `ge`
/// the first `g` and first `e` are marked.
#[must_use]
pub fn letter_tiles(root: &str, input: &str) -> Vec<(char, bool)> {
    let mut wanted = LetterPool::from_word(&normalize(input));
    root.to_lowercase()
        .chars()
        .map(|ch| (ch, wanted.take(ch)))
        .collect()
}

/// Main UI rendering function
pub fn ui<D: DictionaryOracle>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(6),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_root(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Score and messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert, f.area());
    }
}

fn render_root<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let root = app.game.session().map(|s| s.root_word()).unwrap_or_default();

    let mut spans = Vec::new();
    for (ch, used) in letter_tiles(root, &app.input_buffer) {
        let style = if used {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!(" {} ", ch.to_uppercase()), style));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" WORD SCRAMBLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let title = format!(
        " {} | Enter: OK | Ctrl-R: {} ",
        app.locale.input_prompt(),
        app.locale.restart_label()
    );

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_words<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let words = app.game.session().map(|s| s.used_words()).unwrap_or_default();

    let items: Vec<ListItem> = words
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    length_badge(word.chars().count()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::styled(word.clone(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ({}) ", app.locale.words_label(), words.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_side_panel<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    render_score(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_score<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let score = app.game.session().map_or(0, crate::core::Session::score);

    let mut lines = vec![Line::from(Span::styled(
        score.to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(last) = &app.last_accepted {
        lines.push(Line::from(Span::styled(
            format!("+{} ({})", last.points, last.word),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", app.locale.score_label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
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

    let messages_list = List::new(messages).block(
        Block::default()
            .title(format!(" {} ", app.locale.messages_label()))
            .borders(Borders::ALL),
    );

    f.render_widget(messages_list, area);
}

fn render_status<D: DictionaryOracle>(f: &mut Frame, app: &App<D>, area: Rect) {
    let locale = app.locale;
    let text = format!(
        "{}: {} | {}: {} | Esc: {}",
        locale.games_label(),
        app.games_played,
        locale.best_label(),
        app.best_score,
        locale.quit_label()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

fn render_alert(f: &mut Frame, alert: &Alert, area: Rect) {
    let width = area.width.min(50);
    let popup = centered_rect(area, width, 8);

    let content = vec![
        Line::from(Span::styled(
            alert.title,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(alert.message),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
