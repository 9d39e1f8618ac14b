// src/app/state.rs
//! Application state management.

use std::path::PathBuf;

use crossterm::event::KeyEvent;
use ratatui::{widgets::ListState, Frame};

use super::session::Session;
use crate::{
    config::Config,
    tree::{project, NodePath, RowKind, VisibleRow},
    ui::{
        keybindings::{key_to_action, key_to_prompt_action, NavigationAction, PromptAction},
        layout::{compute_layout, Section, SectionVisibility},
        widgets::{preview::line_count, render_file_tree, render_preview, render_status_bar, Status},
    },
};

/// Lines moved per PageUp/PageDown in the preview.
const SCROLL_STEP: u16 = 10;

/// Main application state.
pub struct App {
    /// Tree store plus background work
    pub session: Session,
    /// Rows currently visible in the tree panel
    pub rows: Vec<VisibleRow>,
    /// List widget state
    pub state: ListState,
    /// Cursor index into `rows`
    pub selected: usize,
    /// Text typed into the open-folder prompt, when it is open
    pub prompt: Option<String>,
    /// Vertical scroll of the preview
    pub preview_scroll: u16,
    /// Selection epoch the scroll offset belongs to
    scroll_epoch: u64,
    /// Section visibility state
    pub visibility: SectionVisibility,
    icons: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(session: Session, config: &Config) -> Self {
        let mut app = Self {
            session,
            rows: Vec::new(),
            state: ListState::default(),
            selected: 0,
            prompt: None,
            preview_scroll: 0,
            scroll_epoch: 0,
            visibility: SectionVisibility::default(),
            icons: config.icons,
        };
        app.refresh_rows();
        app
    }

    /// Row under the cursor.
    pub fn cursor_row(&self) -> Option<&VisibleRow> {
        self.rows.get(self.selected)
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        if self.prompt.is_some() {
            self.on_prompt_key(key);
            return false;
        }

        match key_to_action(&key) {
            NavigationAction::ToggleSection(d) => {
                self.visibility.toggle(d);
            }
            NavigationAction::Down => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
            }
            NavigationAction::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            NavigationAction::Activate => {
                if let Some(row) = self.cursor_row() {
                    let path = row.path.clone();
                    if row.is_leaf() {
                        self.session.select(&path);
                    } else {
                        self.session.toggle(&path);
                    }
                }
            }
            NavigationAction::Collapse => self.collapse_or_ascend(),
            NavigationAction::OpenPrompt => {
                self.session.dismiss_notice();
                let start = self
                    .session
                    .last_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.prompt = Some(start);
            }
            NavigationAction::Reload => self.session.reload(),
            NavigationAction::ClearSelection => self.session.clear_selection(),
            NavigationAction::ScrollUp => {
                self.preview_scroll = self.preview_scroll.saturating_sub(SCROLL_STEP);
            }
            NavigationAction::ScrollDown => {
                let max = line_count(self.session.content()).saturating_sub(1);
                let max = u16::try_from(max).unwrap_or(u16::MAX);
                self.preview_scroll = self.preview_scroll.saturating_add(SCROLL_STEP).min(max);
            }
            NavigationAction::Quit => return true,
            NavigationAction::None => {}
        }

        self.refresh_rows();
        false
    }

    fn on_prompt_key(&mut self, key: KeyEvent) {
        let Some(input) = self.prompt.as_mut() else {
            return;
        };
        match key_to_prompt_action(&key) {
            PromptAction::Input(c) => input.push(c),
            PromptAction::Backspace => {
                input.pop();
            }
            PromptAction::Submit => {
                let path = input.trim().to_string();
                self.prompt = None;
                if path.is_empty() {
                    self.session.cancel_pick();
                } else {
                    self.session.open_path(PathBuf::from(path));
                }
            }
            PromptAction::Cancel => {
                self.prompt = None;
                self.session.cancel_pick();
            }
            PromptAction::None => {}
        }
    }

    fn collapse_or_ascend(&mut self) {
        let Some(row) = self.cursor_row() else {
            return;
        };
        let path = row.path.clone();
        let expanded = matches!(row.kind, RowKind::Container { expanded: true, .. });
        if expanded {
            self.session.toggle(&path);
        } else if let Some(parent) = path.parent() {
            self.move_cursor_to(&parent);
        }
    }

    fn move_cursor_to(&mut self, path: &NodePath) {
        if let Some(index) = self.rows.iter().position(|r| &r.path == path) {
            self.selected = index;
        }
    }

    /// Re-derive the visible rows, keeping the cursor on the same node when possible.
    pub fn refresh_rows(&mut self) {
        let current = self.cursor_row().map(|r| r.path.clone());
        let store = self.session.store();
        self.rows = project(store.root(), store.selected_path());

        match current {
            Some(path) if self.rows.iter().any(|r| r.path == path) => self.move_cursor_to(&path),
            _ => self.selected = self.selected.min(self.rows.len().saturating_sub(1)),
        }

        let epoch = self.session.store().selection_epoch();
        if epoch != self.scroll_epoch {
            self.scroll_epoch = epoch;
            self.preview_scroll = 0;
        }

        self.state.select(if self.rows.is_empty() {
            None
        } else {
            Some(self.selected)
        });
    }

    /// Apply finished background work. Returns true when something changed.
    pub fn tick(&mut self) -> bool {
        let changed = self.session.poll();
        if changed {
            self.refresh_rows();
        }
        changed
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area(), &self.visibility);

        for (section, area) in layout.columns.iter().copied() {
            match section {
                Section::Tree => {
                    let title = match self.session.store().root() {
                        Some(root) => format!("1: {}", root.name()),
                        None => "1: Files".to_string(),
                    };
                    render_file_tree(f, area, &title, &self.rows, self.icons, &mut self.state);
                }
                Section::Preview => {
                    render_preview(f, area, self.session.content(), self.preview_scroll);
                }
            }
        }

        let status = if let Some(input) = &self.prompt {
            Status::Prompt(input)
        } else if let Some(notice) = self.session.notice() {
            Status::Notice(notice)
        } else if self.session.is_building() {
            Status::Scanning
        } else {
            Status::Hints
        };
        render_status_bar(f, layout.status_area, status);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{fs::MemoryHandle, highlight::Highlighter, tree::TreeBuilder};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn loaded_app() -> App {
        let session = Session::new(
            tokio::runtime::Handle::current(),
            TreeBuilder::default(),
            Arc::new(Highlighter::new(crate::highlight::DEFAULT_THEME)),
        );
        let mut app = App::new(session, &Config::default());
        let root = MemoryHandle::dir(
            "proj",
            vec![
                MemoryHandle::dir("src", vec![MemoryHandle::file("lib.rs", "pub fn f() {}")]),
                MemoryHandle::file("README.md", "# proj"),
            ],
        );
        app.session.open_with(async move { Ok(root.into_handle()) });
        while app.session.has_pending() {
            app.session.wait_next().await;
        }
        app.refresh_rows();
        app
    }

    fn names(app: &App) -> Vec<&str> {
        app.rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn activate_expands_folder_and_keeps_cursor() {
        let mut app = loaded_app().await;
        assert_eq!(names(&app), vec!["proj", "src", "README.md"]);

        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(names(&app), vec!["proj", "src", "lib.rs", "README.md"]);
        assert_eq!(app.cursor_row().unwrap().name, "src");
    }

    #[tokio::test]
    async fn left_on_leaf_jumps_to_parent() {
        let mut app = loaded_app().await;
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        app.on_key(key(KeyCode::Down));
        assert_eq!(app.cursor_row().unwrap().name, "lib.rs");

        app.on_key(key(KeyCode::Left));
        assert_eq!(app.cursor_row().unwrap().name, "src");
        app.on_key(key(KeyCode::Left));
        assert_eq!(names(&app), vec!["proj", "src", "README.md"]);
    }

    #[tokio::test]
    async fn prompt_escape_reports_cancel_and_keeps_tree() {
        let mut app = loaded_app().await;
        app.on_key(key(KeyCode::Char('o')));
        assert!(app.prompt.is_some());
        app.on_key(key(KeyCode::Char('x')));
        app.on_key(key(KeyCode::Esc));

        assert!(app.prompt.is_none());
        assert_eq!(app.session.notice(), Some("open cancelled"));
        assert_eq!(app.session.store().root().unwrap().name(), "proj");
    }

    #[tokio::test]
    async fn quit_key_ends_the_loop() {
        let mut app = loaded_app().await;
        assert!(app.on_key(key(KeyCode::Char('q'))));
    }
}
