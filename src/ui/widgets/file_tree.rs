// src/ui/widgets/file_tree.rs
//! Directory tree widget.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tree::{RowKind, VisibleRow};
use crate::ui::icons::icon_for_entry;

/// Build the text of one tree row.
pub fn row_line(row: &VisibleRow, icons: bool) -> Line<'static> {
    let indent = "  ".repeat(row.depth);
    let (marker, is_dir, expanded) = match row.kind {
        RowKind::Container { expanded, empty } => {
            let marker = match (empty, expanded) {
                (true, _) => "[ ] ",
                (false, true) => "[-] ",
                (false, false) => "[+] ",
            };
            (marker, true, expanded)
        }
        RowKind::Leaf { .. } => ("    ", false, false),
    };

    let mut spans = vec![Span::raw(indent), Span::raw(marker)];
    if icons {
        spans.push(Span::raw(format!("{} ", icon_for_entry(is_dir, expanded, &row.name))));
    }

    let name_style = match row.kind {
        RowKind::Leaf { selected: true } => Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
        RowKind::Container { .. } => Style::default().fg(Color::Yellow),
        RowKind::Leaf { selected: false } => Style::default(),
    };
    spans.push(Span::styled(row.name.clone(), name_style));
    Line::from(spans)
}

/// Render the tree rows with the cursor held in `state`.
pub fn render_file_tree(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    rows: &[VisibleRow],
    icons: bool,
    state: &mut ListState,
) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(row, icons)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodePath;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn folders_show_their_state_marker() {
        let row = VisibleRow {
            path: NodePath::from(vec![0]),
            name: "src".to_string(),
            depth: 1,
            kind: RowKind::Container {
                expanded: false,
                empty: false,
            },
        };
        assert_eq!(text(&row_line(&row, false)), "  [+] src");
    }

    #[test]
    fn selected_leaf_is_bold() {
        let row = VisibleRow {
            path: NodePath::from(vec![1]),
            name: "main.rs".to_string(),
            depth: 1,
            kind: RowKind::Leaf { selected: true },
        };
        let line = row_line(&row, false);
        let name = line.spans.last().unwrap();
        assert_eq!(name.content, "main.rs");
        assert!(name.style.add_modifier.contains(Modifier::BOLD));
    }
}
