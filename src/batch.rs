use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{cleaner::TextCleaner, error::FileError};

/// Result of processing one file of a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Cleaned text when not writing in place.
    pub result: Result<Option<String>, FileError>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        BatchSummary {
            processed: outcomes.len() - failed,
            failed,
        }
    }
}

/// Cleans one file. With `in_place` the result is written back and
/// `None` is returned, otherwise the cleaned text is returned.
pub fn process_file<C: TextCleaner + ?Sized>(
    path: &Path,
    cleaner: &C,
    in_place: bool,
) -> Result<Option<String>, FileError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        _ => FileError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let cleaned = cleaner.clean(&content);
    debug!(
        path = %path.display(),
        bytes_in = content.len(),
        bytes_out = cleaned.len(),
        "cleaned file"
    );

    if in_place {
        fs::write(path, cleaned).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(None);
    }
    Ok(Some(cleaned))
}

/// Runs `process_file` over every path in order. A failing file is logged
/// and recorded; the remaining files are still processed.
pub fn process_files<C, P>(paths: &[P], cleaner: &C, in_place: bool) -> Vec<FileOutcome>
where
    C: TextCleaner + ?Sized,
    P: AsRef<Path>,
{
    paths
        .iter()
        .map(|path| run_one(path.as_ref(), cleaner, in_place))
        .collect()
}

pub(crate) fn run_one<C: TextCleaner + ?Sized>(
    path: &Path,
    cleaner: &C,
    in_place: bool,
) -> FileOutcome {
    let result = process_file(path, cleaner, in_place);
    if let Err(e) = &result {
        warn!(path = %path.display(), error = %e, "failed to process file");
    }
    FileOutcome {
        path: path.to_path_buf(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkdownCleaner;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.md");
        let err = process_file(&missing, &MarkdownCleaner::default(), false).unwrap_err();
        assert!(matches!(err, FileError::NotFound(ref p) if *p == missing));
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = process_file(dir.path(), &MarkdownCleaner::default(), false).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
    }

    #[test]
    fn path_through_a_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.md");
        fs::write(&file, "text").unwrap();
        let err = process_file(&file.join("child.md"), &MarkdownCleaner::default(), false)
            .unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
    }

    #[test]
    fn summary_counts_failures() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.md");
        fs::write(&good, "#A").unwrap();
        let paths = [good, dir.path().join("nope.md")];

        let outcomes = process_files(&paths, &MarkdownCleaner::default(), false);
        assert_eq!(
            BatchSummary::from_outcomes(&outcomes),
            BatchSummary {
                processed: 1,
                failed: 1
            }
        );
    }
}
