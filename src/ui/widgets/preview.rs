// src/ui/widgets/preview.rs
//! File content preview widget.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::session::{ContentView, PLACEHOLDER};

/// Render the preview panel for the current content view.
pub fn render_preview(f: &mut Frame<'_>, area: Rect, content: &ContentView, scroll: u16) {
    let (title, body) = match content {
        ContentView::Placeholder => (
            "2: Preview".to_string(),
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true }),
        ),
        ContentView::Loading { name } => (
            format!("2: {name}"),
            Paragraph::new("Loading…").style(Style::default().add_modifier(Modifier::ITALIC)),
        ),
        ContentView::Ready { name, lines } => (
            format!("2: {name}"),
            Paragraph::new(Text::from(lines.clone())).scroll((scroll, 0)),
        ),
        ContentView::Failed { name, message } => (
            format!("2: {name}"),
            Paragraph::new(vec![
                Line::styled("Cannot preview this file", Style::default().fg(Color::Red)),
                Line::raw(message.clone()),
            ])
            .wrap(Wrap { trim: true }),
        ),
    };

    f.render_widget(
        body.block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

/// Number of content lines, used to bound scrolling.
pub fn line_count(content: &ContentView) -> usize {
    match content {
        ContentView::Ready { lines, .. } => lines.len(),
        _ => 0,
    }
}
