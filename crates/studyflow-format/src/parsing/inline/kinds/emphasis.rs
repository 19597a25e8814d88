use crate::parsing::inline::cursor::Cursor;

/// Which style a delimiter toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Bold,
    Italic,
}

/// Emphasis delimiters: `*`/`_` for italic, `**`/`__` for bold.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: [&'static str; 2] = ["**", "__"];
    pub const ITALIC: [&'static str; 2] = ["*", "_"];

    /// Recognises a delimiter at the cursor, returning its kind and its
    /// literal text. Doubled delimiters take precedence.
    pub fn at(cur: &Cursor<'_>) -> Option<(EmphasisKind, &'static str)> {
        let matching = |literals: [&'static str; 2]| {
            literals
                .into_iter()
                .find(|lit| cur.starts_with(lit.as_bytes()))
        };
        matching(Self::BOLD)
            .map(|lit| (EmphasisKind::Bold, lit))
            .or_else(|| matching(Self::ITALIC).map(|lit| (EmphasisKind::Italic, lit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_is_bold() {
        assert_eq!(
            Emphasis::at(&Cursor::new("**x")),
            Some((EmphasisKind::Bold, "**"))
        );
        assert_eq!(
            Emphasis::at(&Cursor::new("__x")),
            Some((EmphasisKind::Bold, "__"))
        );
    }

    #[test]
    fn single_is_italic() {
        assert_eq!(
            Emphasis::at(&Cursor::new("*x")),
            Some((EmphasisKind::Italic, "*"))
        );
        assert_eq!(
            Emphasis::at(&Cursor::new("_")),
            Some((EmphasisKind::Italic, "_"))
        );
    }

    #[test]
    fn mixed_pair_is_two_italics() {
        assert_eq!(
            Emphasis::at(&Cursor::new("*_")),
            Some((EmphasisKind::Italic, "*"))
        );
    }

    #[test]
    fn other_bytes_are_not_emphasis() {
        assert_eq!(Emphasis::at(&Cursor::new("x*")), None);
        assert_eq!(Emphasis::at(&Cursor::new("")), None);
    }
}
