use std::sync::OnceLock;

use regex::Regex;

/// Which marker introduced a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-` or `*`
    Bullet,
    /// `1.`, `2.`, ...
    Numbered,
}

impl ListMarker {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Numbered)
    }
}

/// List item block type.
pub struct ListItem;

impl ListItem {
    /// Parses a bullet or numbered item, returning the marker and the text
    /// with the marker (and the whitespace after it) stripped.
    pub fn parse(trimmed: &str) -> Option<(ListMarker, &str)> {
        static BULLET: OnceLock<Regex> = OnceLock::new();
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        let bullet =
            BULLET.get_or_init(|| Regex::new(r"^[*\-]\s+").expect("Invalid bullet regex"));
        let numbered =
            NUMBERED.get_or_init(|| Regex::new(r"^\d+\.\s+").expect("Invalid numbered regex"));

        if let Some(m) = bullet.find(trimmed) {
            return Some((ListMarker::Bullet, &trimmed[m.end()..]));
        }
        if let Some(m) = numbered.find(trimmed) {
            return Some((ListMarker::Numbered, &trimmed[m.end()..]));
        }
        None
    }
}
