use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use rayon::prelude::*;

use super::classifier::{Classifier, Verdict};

/// Aggregated outcome of classifying a set of candidate files.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Flagged files, in candidate order.
    pub flagged: Vec<PathBuf>,
    /// Number of candidate files examined.
    pub scanned: usize,
    /// Files that could not be read as UTF-8 text. Counted as clean.
    pub unreadable: Vec<PathBuf>,
}

enum FileResult {
    Classified(Verdict),
    Unreadable(std::io::Error),
}

/// Read and classify every candidate in parallel.
///
/// Results are collected through an indexed parallel iterator, so `flagged`
/// keeps the order of `candidates` regardless of completion order.
pub fn scan(candidates: &[PathBuf], classifier: &Classifier, verbose: bool) -> ScanOutcome {
    let results: Vec<FileResult> = candidates
        .par_iter()
        .map(|path| classify_file(path, classifier))
        .collect();

    let mut outcome = ScanOutcome {
        scanned: candidates.len(),
        ..Default::default()
    };

    for (path, result) in candidates.iter().zip(results) {
        match result {
            FileResult::Classified(Verdict::Flagged) => outcome.flagged.push(path.clone()),
            FileResult::Classified(Verdict::Clean) => {}
            FileResult::Unreadable(err) => {
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        err
                    );
                }
                outcome.unreadable.push(path.clone());
            }
        }
    }

    outcome
}

fn classify_file(path: &Path, classifier: &Classifier) -> FileResult {
    match fs::read_to_string(path) {
        Ok(text) => FileResult::Classified(classifier.classify(&text)),
        Err(err) => FileResult::Unreadable(err),
    }
}
