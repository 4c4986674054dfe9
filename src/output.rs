//! Writes the list of flagged files.

use std::{
    fs::{self, Permissions},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Render flagged paths one per line, without a trailing newline.
pub fn render_results(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.to_string_lossy())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Atomically replace `destination` with the rendered results.
///
/// The content is written to a temporary file in the same directory and then
/// renamed over the destination, so readers never see a partial file. An
/// existing destination keeps its permissions; a new one is world-readable.
pub fn write_results(destination: &Path, paths: &[PathBuf]) -> Result<()> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    if let Some(permissions) = destination_permissions(destination) {
        file.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("Failed to write {}", destination.display()))?;
    }
    file.write_all(render_results(paths).as_bytes())
        .with_context(|| format!("Failed to write {}", destination.display()))?;
    file.persist(destination)
        .with_context(|| format!("Failed to write {}", destination.display()))?;

    Ok(())
}

/// Temp files are created owner-only, which `persist` would carry over.
fn destination_permissions(destination: &Path) -> Option<Permissions> {
    match fs::metadata(destination) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
