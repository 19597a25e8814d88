/// Pipe table row type.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// A line with at least two pipes (more than two `|`-separated segments).
    pub fn is_row(trimmed: &str) -> bool {
        trimmed.split(Self::PIPE).count() > 2
    }

    /// A row made of nothing but pipes, dashes and whitespace, e.g. `|---|---|`.
    pub fn is_separator(trimmed: &str) -> bool {
        trimmed
            .chars()
            .all(|c| c == Self::PIPE || c == '-' || c.is_whitespace())
    }

    /// The trimmed, non-empty cells of a row, in order.
    pub fn cells(trimmed: &str) -> Vec<String> {
        trimmed
            .split(Self::PIPE)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }
}
