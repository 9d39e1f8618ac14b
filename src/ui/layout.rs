// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Visibility state for UI sections.
#[derive(Debug, Clone, Copy)]
pub struct SectionVisibility {
    pub tree: bool,
    pub preview: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            tree: true,
            preview: true,
        }
    }
}

impl SectionVisibility {
    /// Toggle a section by number (1-2).
    pub fn toggle(&mut self, section: usize) {
        match section {
            1 => self.tree = !self.tree,
            2 => self.preview = !self.preview,
            _ => {}
        }
    }
}

/// Which panel a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tree,
    Preview,
}

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// One-line status bar at the bottom
    pub status_area: Rect,
    /// Column areas within the main area, paired with their section
    pub columns: Vec<(Section, Rect)>,
}

/// Compute the layout based on total area and section visibility.
pub fn compute_layout(area: Rect, visibility: &SectionVisibility) -> ComputedLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let (main_area, status_area) = (vertical[0], vertical[1]);

    // Build column weights dynamically based on visible sections
    let mut sections = Vec::new();
    let mut weights = Vec::new();

    if visibility.tree {
        sections.push(Section::Tree);
        weights.push(30u16);
    }
    if visibility.preview {
        sections.push(Section::Preview);
        weights.push(70u16);
    }

    let columns = if weights.is_empty() {
        Vec::new()
    } else {
        let sum: u16 = weights.iter().copied().sum();
        let constraints: Vec<Constraint> = weights
            .into_iter()
            .map(|w| Constraint::Percentage((w as u32 * 100 / sum as u32) as u16))
            .collect();
        let rects = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(main_area);
        sections.into_iter().zip(rects.iter().copied()).collect()
    };

    ComputedLayout {
        status_area,
        columns,
    }
}
