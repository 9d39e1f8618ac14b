// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map digit/shifted-digit keys to section number (1..2).
pub fn map_key_to_digit(k: &KeyEvent) -> Option<usize> {
    if let KeyCode::Char(c) = k.code {
        match c {
            '1' | '!' => Some(1),
            '2' | '@' => Some(2),
            _ => None,
        }
    } else {
        None
    }
}

/// Check if the key event is a shifted symbol (!, @).
pub fn is_shifted_symbol(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('!') | KeyCode::Char('@'))
}

/// Navigation actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    /// Toggle the folder or select the file under the cursor.
    Activate,
    /// Collapse the folder under the cursor, or jump to its parent.
    Collapse,
    OpenPrompt,
    Reload,
    ClearSelection,
    ScrollUp,
    ScrollDown,
    Quit,
    ToggleSection(usize),
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    // Check for section toggle first
    if let Some(d) = map_key_to_digit(key) {
        if key.modifiers.contains(KeyModifiers::SHIFT) || is_shifted_symbol(key) {
            return NavigationAction::ToggleSection(d);
        }
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => NavigationAction::Activate,
        KeyCode::Left => NavigationAction::Collapse,
        KeyCode::Char('o') => NavigationAction::OpenPrompt,
        KeyCode::Char('r') => NavigationAction::Reload,
        KeyCode::Esc => NavigationAction::ClearSelection,
        KeyCode::PageUp => NavigationAction::ScrollUp,
        KeyCode::PageDown => NavigationAction::ScrollDown,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}

/// Actions while the path prompt is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptAction {
    Input(char),
    Backspace,
    Submit,
    Cancel,
    None,
}

pub fn key_to_prompt_action(key: &KeyEvent) -> PromptAction {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => PromptAction::Input(c),
        KeyCode::Backspace => PromptAction::Backspace,
        KeyCode::Enter => PromptAction::Submit,
        KeyCode::Esc => PromptAction::Cancel,
        _ => PromptAction::None,
    }
}
