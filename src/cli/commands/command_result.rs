use std::{path::PathBuf, time::Duration};

use crate::core::{MarkerVariant, ScanOutcome, SuppressionPolicy};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    /// Root directory that was scanned.
    pub root: PathBuf,
    /// Built-in marker variant, `None` for custom tokens.
    pub markers: Option<MarkerVariant>,
    pub policy: SuppressionPolicy,
    /// Config file that was applied, if any.
    pub config_path: Option<PathBuf>,
    pub outcome: ScanOutcome,
    /// Walk entries that could not be accessed.
    pub skipped_count: usize,
    pub write: WriteStatus,
    pub elapsed: Duration,
}

/// What happened to the results file.
#[derive(Debug)]
pub enum WriteStatus {
    Saved(PathBuf),
    Failed { path: PathBuf, error: String },
    /// No candidate files, nothing written.
    Skipped,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running locscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, exit code 1 is returned when files are flagged.
    pub exit_on_flagged: bool,
}

impl CommandResult {
    pub fn flagged_count(&self) -> usize {
        match &self.summary {
            CommandSummary::Scan(summary) => summary.outcome.flagged.len(),
            CommandSummary::Init(_) => 0,
        }
    }
}
