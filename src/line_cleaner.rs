use std::sync::LazyLock;

use regex::Regex;

use crate::{cleaner::TextCleaner, cleaner_config::CleanerConfig};

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("NUMBERED_ITEM: hardcoded regex is valid"));

/// Line-oriented Markdown normalizer.
///
/// Each input line goes through, in order: trailing whitespace trim,
/// header spacing, list marker spacing, blank collapsing and blank
/// insertion before block elements. Every step is gated by its flag in
/// [`CleanerConfig`]; `extract_text` is not consulted here.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCleaner {
    config: CleanerConfig,
}

/// Scan state for one `clean` call.
struct LineState {
    previous_blank: bool,
    previous_was_list_item: bool,
}

impl LineState {
    fn new() -> Self {
        // The line before the document counts as blank.
        LineState {
            previous_blank: true,
            previous_was_list_item: false,
        }
    }
}

impl LineCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        LineCleaner { config }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    fn clean_lines(&self, text: &str) -> Vec<String> {
        let config = &self.config;
        let mut cleaned: Vec<String> = Vec::new();
        let mut state = LineState::new();

        for raw in text.split('\n') {
            let mut line = raw.to_string();

            if config.fix_spacing {
                line.truncate(line.trim_end().len());
            }

            let is_header = config.standardize_headers && line.trim_start().starts_with('#');
            if is_header {
                line = fix_header(&line);
            }

            let is_list_item = config.fix_lists && is_list_syntax(&line);
            if is_list_item {
                line = fix_list_item(&line);
            }

            let blank = is_blank(&line);
            if config.remove_multiple_blanks && blank && state.previous_blank {
                continue;
            }

            let is_block = is_header || is_list_item;
            let after_content = cleaned.last().is_some_and(|last| !is_blank(last));
            let continues_list = state.previous_was_list_item && is_list_item;
            if is_block && after_content && !continues_list {
                cleaned.push(String::new());
            }

            cleaned.push(line);
            state.previous_blank = blank;
            state.previous_was_list_item = is_list_item;
        }

        while cleaned.last().is_some_and(|last| is_blank(last)) {
            cleaned.pop();
        }
        cleaned
    }
}

impl TextCleaner for LineCleaner {
    fn clean(&self, text: &str) -> String {
        let mut output = self.clean_lines(text).join("\n");
        output.push('\n');
        output
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// `-`, `*` or `<digits>.` after optional indentation.
fn is_list_syntax(line: &str) -> bool {
    let content = line.trim_start();
    content.starts_with(['-', '*']) || NUMBERED_ITEM.is_match(content)
}

/// Rewrites `  ##Title` as `## Title`. Indentation is dropped.
fn fix_header(line: &str) -> String {
    let stripped = line.trim_start();
    let content = stripped.trim_start_matches('#');
    let hashes = &stripped[..stripped.len() - content.len()];
    format!("{} {}", hashes, content.trim_start())
}

/// Forces exactly one space between the list marker and its content,
/// keeping indentation and the marker itself.
fn fix_list_item(line: &str) -> String {
    let content = line.trim_start();
    let indent = &line[..line.len() - content.len()];

    if let Some(number) = NUMBERED_ITEM.find(content) {
        let rest = content[number.end()..].trim_start();
        return format!("{}{} {}", indent, number.as_str(), rest);
    }

    match content.chars().next() {
        Some(marker @ ('-' | '*')) => {
            let rest = content[marker.len_utf8()..].trim_start();
            format!("{}{} {}", indent, marker, rest)
        }
        _ => line.to_string(),
    }
}
