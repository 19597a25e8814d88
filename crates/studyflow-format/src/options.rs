use serde::{Deserialize, Serialize};

/// Which line classification rules are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatMode {
    /// Headings are recognised only by their `#` marker.
    #[default]
    Strict,
    /// Strict rules plus promotion of short title-like lines to headings,
    /// for chat replies that omit `#` markers.
    Chat,
}

/// Options shared by every stage of the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub mode: FormatMode,
    /// Heading level given to lines promoted in [`FormatMode::Chat`] (1-4).
    pub heuristic_header_level: u8,
    /// Longest line, in characters, that can be promoted to a heading.
    pub heuristic_header_max_len: usize,
}

impl FormatOptions {
    pub const DEFAULT_HEURISTIC_HEADER_LEVEL: u8 = 3;
    pub const DEFAULT_HEURISTIC_HEADER_MAX_LEN: usize = 60;

    /// Options for rendering chat replies.
    #[must_use]
    pub fn chat() -> Self {
        Self {
            mode: FormatMode::Chat,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(self, mode: FormatMode) -> Self {
        Self { mode, ..self }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            mode: FormatMode::Strict,
            heuristic_header_level: Self::DEFAULT_HEURISTIC_HEADER_LEVEL,
            heuristic_header_max_len: Self::DEFAULT_HEURISTIC_HEADER_MAX_LEN,
        }
    }
}
