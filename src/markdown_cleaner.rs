use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use crate::{
    cleaner::TextCleaner, cleaner_config::CleanerConfig, extractor::TextExtractor,
    line_cleaner::LineCleaner, ConfigError,
};

/// A builder for the `MarkdownCleaner` struct
/// That allows for configuring the cleaner
/// before building it
#[derive(Default)]
pub struct MarkdownCleanerBuilder {
    config: Option<CleanerConfig>,
    config_source: Option<String>,
    fix_spacing: Option<bool>,
    standardize_headers: Option<bool>,
    fix_lists: Option<bool>,
    remove_multiple_blanks: Option<bool>,
    extract_text: Option<bool>,
}

impl MarkdownCleanerBuilder {
    pub fn new() -> Self {
        MarkdownCleanerBuilder::default()
    }

    pub fn with_config(mut self, config: CleanerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// A path to a `.json`/`.toml` file, or inline JSON/TOML.
    /// Ignored when `with_config` was also called.
    pub fn with_config_source(mut self, source: &str) -> Self {
        self.config_source = Some(source.to_string());
        self
    }

    pub fn fix_spacing(mut self, on: bool) -> Self {
        self.fix_spacing = Some(on);
        self
    }

    pub fn standardize_headers(mut self, on: bool) -> Self {
        self.standardize_headers = Some(on);
        self
    }

    pub fn fix_lists(mut self, on: bool) -> Self {
        self.fix_lists = Some(on);
        self
    }

    pub fn remove_multiple_blanks(mut self, on: bool) -> Self {
        self.remove_multiple_blanks = Some(on);
        self
    }

    pub fn extract_text(mut self, on: bool) -> Self {
        self.extract_text = Some(on);
        self
    }

    /// Resolves the configuration once: explicit config, then config
    /// source, then defaults, with flag setters applied on top.
    pub fn build(self) -> Result<MarkdownCleaner, ConfigError> {
        let mut config = match (self.config, self.config_source) {
            (Some(config), _) => config,
            (None, Some(source)) => CleanerConfig::from_config(&source)?,
            (None, None) => CleanerConfig::default(),
        };
        let overrides = [
            (self.fix_spacing, &mut config.fix_spacing),
            (self.standardize_headers, &mut config.standardize_headers),
            (self.fix_lists, &mut config.fix_lists),
            (self.remove_multiple_blanks, &mut config.remove_multiple_blanks),
            (self.extract_text, &mut config.extract_text),
        ];
        for (value, flag) in overrides {
            if let Some(value) = value {
                *flag = value;
            }
        }

        debug!(%config, "built markdown cleaner");
        Ok(MarkdownCleaner::from_config(config))
    }
}

/// Cleans Markdown documents according to a [`CleanerConfig`].
///
/// # Example
///
/// ```
/// use md_cleaner::{MarkdownCleaner, TextCleaner};
///
/// let cleaner = MarkdownCleaner::new().build().unwrap();
/// assert_eq!(cleaner.clean("#Title\ntext  "), "# Title\ntext\n");
///
/// let extractor = MarkdownCleaner::new().extract_text(true).build().unwrap();
/// assert_eq!(extractor.clean("# Title\n**bold**"), "Title\nbold\n");
/// ```
#[derive(Clone, Copy, Default)]
pub struct MarkdownCleaner {
    lines: LineCleaner,
    extractor: TextExtractor,
}

impl Debug for MarkdownCleaner {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "MarkdownCleaner({})", self.config())
    }
}

impl MarkdownCleaner {
    pub fn new() -> MarkdownCleanerBuilder {
        MarkdownCleanerBuilder::new()
    }

    pub fn from_config(config: CleanerConfig) -> Self {
        MarkdownCleaner {
            lines: LineCleaner::new(config),
            extractor: TextExtractor::new(),
        }
    }

    pub fn config(&self) -> &CleanerConfig {
        self.lines.config()
    }
}

impl TextCleaner for MarkdownCleaner {
    fn clean(&self, text: &str) -> String {
        if self.config().extract_text {
            self.extractor.clean(text)
        } else {
            self.lines.clean(text)
        }
    }
}
