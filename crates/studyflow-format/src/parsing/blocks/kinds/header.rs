/// Heading block type with owned marker constants.
pub struct Header;

impl Header {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 4;
    /// Longest promoted heading, in words, for the chat heuristic.
    pub const HEURISTIC_MAX_WORDS: usize = 8;

    /// Parses `#{1,4}` followed by whitespace, returning `(level, text)`.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let level = trimmed.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        // `#` is one byte, so `level` is also a byte offset.
        let rest = &trimmed[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((level as u8, rest.trim_start()))
    }

    /// Whether a plain line reads like a section title: short, capitalised,
    /// no sentence punctuation at the end and no inline markup.
    pub fn looks_like_header(trimmed: &str, max_len: usize) -> bool {
        let (Some(first), Some(last)) = (trimmed.chars().next(), trimmed.chars().last()) else {
            return false;
        };
        first.is_uppercase()
            && !matches!(last, '.' | ',' | ';' | '!' | '?')
            && trimmed.chars().count() <= max_len
            && trimmed.split_whitespace().count() <= Self::HEURISTIC_MAX_WORDS
            && !trimmed.contains(['*', '_', '`', '[', '|'])
    }

    /// Heading text for a promoted line: a trailing `:` is dropped.
    pub fn heuristic_text(trimmed: &str) -> &str {
        trimmed.trim_end_matches(':').trim_end()
    }

    /// Clamps a configured level into the supported range.
    pub fn clamp_level(level: u8) -> u8 {
        level.clamp(1, Self::MAX_LEVEL)
    }
}
