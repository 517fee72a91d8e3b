use std::path::Path;

use rayon::prelude::*;

use crate::{
    batch::{run_one, FileOutcome},
    cleaner::TextCleaner,
};

/// Parallel `process_files`. Outcomes come back in input order.
pub fn process_files_parallel<C, P>(paths: &[P], cleaner: &C, in_place: bool) -> Vec<FileOutcome>
where
    C: TextCleaner + ?Sized,
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| run_one(path.as_ref(), cleaner, in_place))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkdownCleaner;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn keeps_input_order() {
        let dir = TempDir::new().unwrap();
        let paths: Vec<_> = (0..8)
            .map(|i| {
                let path = dir.path().join(format!("{i}.md"));
                fs::write(&path, format!("#Doc {i}")).unwrap();
                path
            })
            .collect();

        let outcomes = process_files_parallel(&paths, &MarkdownCleaner::default(), false);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.path, paths[i]);
            let text = outcome.result.as_ref().unwrap().as_deref();
            assert_eq!(text, Some(format!("# Doc {i}\n").as_str()));
        }
    }
}
