// File: ./src/tui/view.rs
use crate::tui::state::{ChatState, Speaker};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn draw(f: &mut Frame, state: &ChatState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(f.area());

    // --- Transcript ---
    let inner_width = chunks[0].width.saturating_sub(2).max(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for entry in &state.entries {
        let (label_style, text_style) = match entry.speaker {
            Speaker::You => (
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Yellow),
            ),
            Speaker::Tally => (
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                Style::default(),
            ),
        };
        let label = format!("{}: ", entry.speaker.label());
        let indent = " ".repeat(label.width());
        for (i, raw) in entry.lines.iter().enumerate() {
            for (j, piece) in wrap_line(raw, inner_width.saturating_sub(label.width()).max(1))
                .into_iter()
                .enumerate()
            {
                if i == 0 && j == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(label.clone(), label_style),
                        Span::styled(piece, text_style),
                    ]));
                } else {
                    lines.push(Line::from(vec![
                        Span::raw(indent.clone()),
                        Span::styled(piece, text_style),
                    ]));
                }
            }
        }
        lines.push(Line::from(""));
    }

    // Follow the tail unless the user scrolled up.
    let viewport = chunks[0].height.saturating_sub(2) as usize;
    let max_offset = lines.len().saturating_sub(viewport);
    let offset = max_offset.saturating_sub(state.scroll_offset.min(max_offset));

    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Tally "))
        .scroll((offset as u16, 0));
    f.render_widget(transcript, chunks[0]);

    // --- Input box ---
    let input = Paragraph::new(state.input.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Type a command (Esc to quit) "));
    f.render_widget(input, chunks[1]);

    let cursor_x = chunks[1].x + 1 + state.input.width() as u16;
    f.set_cursor_position((cursor_x.min(chunks[1].right().saturating_sub(2)), chunks[1].y + 1));
}

/// Greedy word wrap on display width. Words longer than the width are split
/// hard so pathological input can't push the layout sideways.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if text.width() <= width {
        return vec![text.to_string()];
    }
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            out.push(std::mem::take(&mut current));
        }
        if word.width() > width {
            // Hard-split an oversized word.
            let mut piece = String::new();
            for c in word.chars() {
                if piece.width() + 1 > width {
                    out.push(std::mem::take(&mut piece));
                }
                piece.push(c);
            }
            current = piece;
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
