// src/ui/icons.rs
//! Icon mappings for entries in the tree.

use crate::fs::{category_for_name, FileCategory};

/// Get the appropriate icon for a folder or a file name.
pub fn icon_for_entry(is_dir: bool, expanded: bool, name: &str) -> &'static str {
    if is_dir {
        if expanded {
            "\u{f07c}" // open folder
        } else {
            "\u{f07b}" // folder icon
        }
    } else {
        match category_for_name(name) {
            FileCategory::Code => "\u{f121}",
            FileCategory::Text => "\u{f15c}",
            FileCategory::Image => "\u{f1c5}",
            FileCategory::Audio => "\u{f1c7}",
            FileCategory::Video => "\u{f1c8}",
            FileCategory::Binary => "\u{f1c6}",
        }
    }
}
