mod batch;
#[cfg(feature = "multi_thread")]
mod batch_mt;
mod cleaner;
mod cleaner_config;
mod error;
mod extractor;
mod line_cleaner;
mod markdown_cleaner;

pub use batch::{process_file, process_files, BatchSummary, FileOutcome};
#[cfg(feature = "multi_thread")]
pub use batch_mt::process_files_parallel;
pub use cleaner::TextCleaner;
pub use cleaner_config::CleanerConfig;
pub use error::{ConfigError, FileError};
pub use extractor::{Rule, TextExtractor};
pub use line_cleaner::LineCleaner;
pub use markdown_cleaner::{MarkdownCleaner, MarkdownCleanerBuilder};
