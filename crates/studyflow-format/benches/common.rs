// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_study_content(size: usize) -> String {
    let base = "# Study Plan\n\n## Goals\n- Review **cell biology** basics\n- Practice *10 questions* daily\n1. Read chapter 3\n2. Summarise with `flashcards`\n\n> Tip: spaced repetition\n> beats cramming\n\n| Day | Topic |\n|---|---|\n| Mon | [Cells](http://bio.example/cells) |\n---\n```python\nprint(\"**not bold**\")\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_chat_reply(paragraphs: usize) -> String {
    let mut content = String::new();

    for i in 0..paragraphs {
        content.push_str(&format!("Key Concept {i}\n"));
        content.push_str(
            "Cells divide through **mitosis** and *meiosis*, see [notes](http://x.example/n) \
             and run `quiz --topic cells` afterwards.\n",
        );
        content.push_str("- **Mitosis** produces two identical cells\n");
        content.push_str("- **Meiosis** produces four ***unique*** cells\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_unmatched_brackets(n: usize) -> String {
    format!("{}]{}", "[".repeat(n), "[x](".repeat(n / 4))
}

#[allow(dead_code)]
pub fn generate_malformed_emphasis(lines: usize) -> String {
    "Remember **this and *that with `a tick and [a link](unclosed\n".repeat(lines)
}
