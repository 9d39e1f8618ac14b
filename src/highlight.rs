// src/highlight.rs
//! Syntax highlighting of file content into styled terminal lines.

use std::path::Path;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use syntect::{
    easy::HighlightLines,
    highlighting::{FontStyle, Theme, ThemeSet},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

/// Theme used when the configured one does not exist.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Lines beyond this are replaced by a truncation marker.
pub const MAX_LINES: usize = 10_000;

/// Turns plain text into styled lines. Holds no per-file state.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("theme", &self.theme.name)
            .finish_non_exhaustive()
    }
}

impl Highlighter {
    pub fn new(theme_name: &str) -> Self {
        let mut themes = ThemeSet::load_defaults().themes;
        let theme = match themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(theme = theme_name, fallback = DEFAULT_THEME, "unknown theme");
                themes.remove(DEFAULT_THEME).unwrap_or_default()
            }
        };

        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }

    /// Names of the bundled themes.
    pub fn theme_names() -> Vec<String> {
        ThemeSet::load_defaults().themes.into_keys().collect()
    }

    fn syntax_for(&self, file_name: &str, text: &str) -> &SyntaxReference {
        let by_extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.syntaxes.find_syntax_by_extension(ext));

        by_extension
            .or_else(|| {
                let first_line = text.lines().next()?;
                self.syntaxes.find_syntax_by_first_line(first_line)
            })
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }

    /// Highlight `text`, picking the grammar from `file_name` or the first line.
    pub fn highlight(&self, file_name: &str, text: &str) -> Vec<Line<'static>> {
        let syntax = self.syntax_for(file_name, text);
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        let mut source = LinesWithEndings::from(text);
        let mut lines: Vec<Line<'static>> = source
            .by_ref()
            .take(MAX_LINES)
            .map(|line| match highlighter.highlight_line(line, &self.syntaxes) {
                Ok(regions) => Line::from(
                    regions
                        .into_iter()
                        .map(|(style, piece)| Span::styled(clean(piece), convert_style(style)))
                        .filter(|span| !span.content.is_empty())
                        .collect::<Vec<_>>(),
                ),
                Err(err) => {
                    tracing::debug!(error = %err, file = file_name, "highlighting failed for line");
                    Line::raw(clean(line))
                }
            })
            .collect();

        let rest = source.count();
        if rest > 0 {
            lines.push(Line::styled(
                format!("… truncated, {rest} more lines not shown"),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }
        lines
    }
}

fn clean(piece: &str) -> String {
    piece.trim_end_matches(['\n', '\r']).replace('\t', "    ")
}

fn convert_style(style: syntect::highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut converted = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        converted = converted.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        converted = converted.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        converted = converted.add_modifier(Modifier::UNDERLINED);
    }
    converted
}
