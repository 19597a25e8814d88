/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if the trimmed line opens or closes a fence.
    pub fn is_delimiter(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }

    /// Returns the language hint of an opening fence, `Some(None)` for a bare
    /// fence and `None` if the line is not a fence at all.
    pub fn open(trimmed: &str) -> Option<Option<String>> {
        let info = trimmed.strip_prefix(Self::BACKTICKS)?.trim();
        if info.is_empty() {
            Some(None)
        } else {
            Some(Some(info.to_string()))
        }
    }
}
