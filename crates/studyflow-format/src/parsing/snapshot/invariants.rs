use crate::{
    options::FormatOptions,
    parsing::blocks::{BlockNode, LineClass, LineClassifier},
};

/// Validates block assembly invariants for `text`.
///
/// Asserts that:
/// - Every block covers at least one line, within the input
/// - Block spans are ascending and never overlap
/// - Every line not covered by a block is a consumed table separator row
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, blocks: &[BlockNode], options: FormatOptions) {
    let lines: Vec<&str> = text.lines().collect();
    let mut covered = vec![false; lines.len()];
    let mut prev_end = 0;

    for b in blocks {
        assert!(
            !b.span.is_empty(),
            "block covers no lines: {:?} ({:?})",
            b.span,
            b.block
        );
        assert!(
            b.span.end <= lines.len(),
            "block span out of bounds: {:?} (line count: {})",
            b.span,
            lines.len()
        );
        assert!(
            b.span.start >= prev_end,
            "block span overlaps or precedes previous block: {:?} (previous end: {})",
            b.span,
            prev_end
        );
        prev_end = b.span.end;
        for flag in &mut covered[b.span.start..b.span.end] {
            *flag = true;
        }
    }

    let classifier = LineClassifier::new(options);
    for (i, line) in lines.iter().enumerate() {
        if !covered[i] {
            assert_eq!(
                classifier.classify(line),
                LineClass::TableSeparator,
                "line {i} was dropped: {line:?}"
            );
        }
    }
}
