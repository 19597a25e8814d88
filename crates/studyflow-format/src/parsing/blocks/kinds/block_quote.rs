/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `> ` prefix from a trimmed line.
    ///
    /// The prefix must be followed by whitespace; `>text` and a lone `>` are
    /// not quotes. Only one level is stripped, nested `>` stay in the text.
    pub fn strip_prefix(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::PREFIX)?;
        if rest.starts_with(char::is_whitespace) {
            Some(rest.trim_start())
        } else {
            None
        }
    }
}
