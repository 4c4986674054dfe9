use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Directory extensions treated as opaque bundles. Their contents are never
/// candidates.
const PACKAGE_EXTENSIONS: &[&str] = &[
    "app",
    "appex",
    "bundle",
    "docc",
    "framework",
    "playground",
    "xcassets",
    "xcdatamodeld",
    "xcodeproj",
    "xcworkspace",
];

/// Filters applied while walking the scan root.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Extensions to include, without the leading dot.
    pub file_extensions: Vec<String>,
    /// Substrings that exclude a path when found in it (relative to the root).
    pub excluded_directories: Vec<String>,
    /// Glob patterns matched against the path relative to the root.
    pub ignores: Vec<String>,
    pub verbose: bool,
}

/// Result of walking the scan root.
#[derive(Debug, Default)]
pub struct WalkResult {
    /// Candidate files in traversal order.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed.
    pub skipped_count: usize,
}

/// Collect candidate files under `root`.
///
/// Traversal is sorted by file name so the result is reproducible. Hidden
/// entries and package directories below the root are skipped and symlinks
/// are not followed.
pub fn collect_candidates(root: &Path, options: &WalkOptions) -> Result<WalkResult> {
    if !root.exists() {
        bail!("Scan path does not exist: {}", root.display());
    }
    if !root.is_dir() {
        bail!("Scan path is not a directory: {}", root.display());
    }

    let ignore_patterns = options
        .ignores
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut result = WalkResult::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(is_hidden(e) || is_package(e)));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if options.verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let relative_str = relative.to_string_lossy();

        if !has_extension(path, &options.file_extensions) {
            continue;
        }

        if options
            .excluded_directories
            .iter()
            .any(|dir| relative_str.contains(dir.as_str()))
        {
            continue;
        }

        if ignore_patterns.iter().any(|p| p.matches(&relative_str)) {
            continue;
        }

        result.files.push(path.to_path_buf());
    }

    Ok(result)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_package(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| PACKAGE_EXTENSIONS.contains(&ext))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
