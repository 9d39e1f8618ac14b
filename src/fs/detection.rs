// src/fs/detection.rs
//! File category detection: extension lookup for display, magic numbers for content.

use std::path::Path;

use infer::MatcherType;
use mime_guess::MimeGuess;

/// High-level file categories.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FileCategory {
    Code,
    Text,
    Image,
    Audio,
    Video,
    Binary,
}

/// Guess a category from the file name alone. Never touches the disk.
pub fn category_for_name(name: &str) -> FileCategory {
    let guess = MimeGuess::from_path(Path::new(name));
    let Some(mime) = guess.first() else {
        // No extension, or one mime_guess does not know: most likely a
        // dotfile, a Makefile or a script.
        return FileCategory::Text;
    };

    match (mime.type_().as_str(), mime.subtype().as_str()) {
        ("image", _) => FileCategory::Image,
        ("audio", _) => FileCategory::Audio,
        ("video", _) => FileCategory::Video,
        ("text", "plain") => FileCategory::Text,
        ("text", _) => FileCategory::Code,
        ("application", sub)
            if matches!(sub, "json" | "javascript" | "toml" | "xml" | "x-sh" | "x-python")
                || sub.starts_with("x-") =>
        {
            FileCategory::Code
        }
        _ => FileCategory::Binary,
    }
}

/// Sniff raw bytes. Returns the MIME type when the magic number belongs to a
/// non-text format.
pub fn sniff_binary(bytes: &[u8]) -> Option<String> {
    let kind = infer::get(bytes)?;
    match kind.matcher_type() {
        MatcherType::Text => None,
        _ => Some(kind.mime_type().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_from_extension() {
        assert_eq!(category_for_name("main.rs"), FileCategory::Code);
        assert_eq!(category_for_name("notes.txt"), FileCategory::Text);
        assert_eq!(category_for_name("logo.png"), FileCategory::Image);
        assert_eq!(category_for_name("song.mp3"), FileCategory::Audio);
        assert_eq!(category_for_name("Makefile"), FileCategory::Text);
    }

    #[test]
    fn png_header_is_binary() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(sniff_binary(&png).as_deref(), Some("image/png"));
    }

    #[test]
    fn source_text_is_not_binary() {
        assert_eq!(sniff_binary(b"fn main() {}\n"), None);
    }
}
