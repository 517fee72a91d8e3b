//! Plain-text extraction.
//!
//! The extractor is a fixed chain of whole-document regex substitutions.
//! Order is load-bearing: each rule assumes the ones before it already ran.
//!
//! - Code goes first so that nothing inside a code span is mistaken for
//!   markup, and fenced blocks go before inline spans so a fence is not
//!   consumed as three empty inline spans.
//! - Images precede links, otherwise the link rule would leave a stray `!`.
//! - Headers are stripped before emphasis, and list markers are rewritten
//!   after it, so the `• ` glyph never reaches the emphasis rule.
//! - Blank runs collapse before horizontal rules are removed, and links are
//!   unwrapped last, after every rule that could touch their text.

use std::sync::LazyLock;

use regex::Regex;

use crate::cleaner::TextCleaner;

/// One named substitution of the extraction chain.
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("{name}: hardcoded regex is invalid: {e}"));
        Rule {
            name,
            pattern,
            replacement,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new("fenced_code", r"```[^`]*```", ""),
        Rule::new("inline_code", r"`[^`]*`", ""),
        Rule::new("image", r"!\[(.*?)\]\(.*?\)", "$1"),
        Rule::new("header", r"(?m)^#+\s*", ""),
        Rule::new("emphasis", r"[*_]{1,3}([^*_]+)[*_]{1,3}", "$1"),
        Rule::new("html_tag", r"<[^>]+>", ""),
        Rule::new("bullet", r"(?m)^\s*[-*+]\s+", "• "),
        Rule::new("ordered", r"(?m)^\s*\d+\.\s+", ""),
        Rule::new("blockquote", r"(?m)^\s*>\s*", ""),
        Rule::new("blank_run", r"\n\s*\n", "\n\n"),
        Rule::new("horizontal_rule", r"(?m)^\s*[-*_]{3,}\s*$", ""),
        Rule::new("link", r"\[(.*?)\]\(.*?\)", "$1"),
    ]
});

/// Strips Markdown markup, leaving plain prose.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        TextExtractor
    }

    /// The substitution chain, in application order.
    pub fn rules() -> &'static [Rule] {
        &RULES
    }
}

impl TextCleaner for TextExtractor {
    fn clean(&self, text: &str) -> String {
        let mut content = text.replace("\r\n", "\n").replace('\r', "\n");
        for rule in RULES.iter() {
            content = rule.apply(&content);
        }

        let mut output = content.trim().to_string();
        output.push('\n');
        output
    }
}
