// src/ui/widgets/status_bar.rs
//! Bottom status line: prompt, notices or key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str = "o open  r reload  ←/→ fold  ⏎ select  esc clear  !/@ panels  q quit";

/// What the status line is showing.
#[derive(Debug, Clone, Copy)]
pub enum Status<'a> {
    Prompt(&'a str),
    Scanning,
    Notice(&'a str),
    Hints,
}

pub fn render_status_bar(f: &mut Frame<'_>, area: Rect, status: Status<'_>) {
    let line = match status {
        Status::Prompt(input) => Line::from(vec![
            Span::styled("Open folder: ", Style::default().fg(Color::Cyan)),
            Span::raw(input.to_string()),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ]),
        Status::Scanning => Line::styled("Scanning…", Style::default().fg(Color::Yellow)),
        Status::Notice(message) => Line::styled(message.to_string(), Style::default().fg(Color::Red)),
        Status::Hints => Line::styled(HINTS, Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(Paragraph::new(line), area);
}
