//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow locscan to be used as a library.

use std::{
    env,
    io::{self, Write},
    path::Path,
    time::Duration,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary, WriteStatus};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Set to hide the elapsed time line (stable output for tests).
pub const DISABLE_TIMING_ENV: &str = "LOCSCAN_DISABLE_TIMING";

pub fn print(result: &CommandResult, verbose: bool) {
    let show_timing = env::var_os(DISABLE_TIMING_ENV).is_none();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match &result.summary {
        CommandSummary::Scan(summary) => {
            print_scan_to(summary, verbose, show_timing, &mut stdout, &mut stderr)
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut stdout, &mut stderr),
    }
}

/// Announce a scan before the file walk starts.
pub fn print_scan_start(root: &Path) {
    print_scan_start_to(root, &mut io::stdout().lock());
}

pub fn print_scan_start_to<W: Write>(root: &Path, out: &mut W) {
    let _ = writeln!(out, "{} {}", "Scanning".green().bold(), root.display());
}

/// Print a scan summary. Warnings and write failures go to `err`.
pub fn print_scan_to<W: Write, E: Write>(
    summary: &ScanSummary,
    verbose: bool,
    show_timing: bool,
    out: &mut W,
    err: &mut E,
) {
    let root = summary.root.display();
    let outcome = &summary.outcome;

    if verbose {
        print_settings(summary, out);
    }

    if matches!(summary.write, WriteStatus::Skipped) {
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.yellow(),
            format!("Could not find any files in {}", root).yellow()
        );
        print_walk_warning(summary.skipped_count, verbose, err);
        return;
    }

    if outcome.flagged.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No unlocalized files found in {}", root).green()
        );
    } else {
        if verbose {
            for path in &outcome.flagged {
                let _ = writeln!(out, "  {} {}", "-->".blue(), path.display());
            }
        }
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Found {} unlocalized {} in {}",
                outcome.flagged.len(),
                plural(outcome.flagged.len(), "file", "files"),
                root
            )
            .red()
            .bold()
        );
    }

    let _ = writeln!(
        out,
        "Scanned {} {}",
        outcome.scanned,
        plural(outcome.scanned, "file", "files")
    );

    if show_timing {
        let _ = writeln!(out, "Finished in {}", format_elapsed(summary.elapsed));
    }

    print_unreadable_warning(outcome.unreadable.len(), verbose, err);
    print_walk_warning(summary.skipped_count, verbose, err);

    match &summary.write {
        WriteStatus::Saved(path) => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Results saved to {}", path.display()).green()
            );
        }
        WriteStatus::Failed { path, error } => {
            let _ = writeln!(
                err,
                "{} {} {}",
                FAILURE_MARK.red(),
                format!("Failed to save results to {}:", path.display())
                    .red()
                    .bold(),
                error
            );
        }
        WriteStatus::Skipped => {}
    }
}

pub fn print_init_to<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn print_settings<W: Write>(summary: &ScanSummary, out: &mut W) {
    let markers = summary.markers.map_or("custom", |m| m.as_str());
    let _ = writeln!(
        out,
        "{} markers: {}, policy: {}",
        "note:".bold(),
        markers.cyan(),
        summary.policy.as_str().cyan()
    );
    if let Some(path) = &summary.config_path {
        let _ = writeln!(out, "{} using config {}", "note:".bold(), path.display());
    }
}

fn print_unreadable_warning<E: Write>(count: usize, verbose: bool, err: &mut E) {
    if count > 0 && !verbose {
        let _ = writeln!(
            err,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_walk_warning<E: Write>(count: usize, verbose: bool, err: &mut E) {
    if count > 0 && !verbose {
        let _ = writeln!(
            err,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn format_elapsed(elapsed: Duration) -> String {
    if elapsed.as_secs() >= 1 {
        format!("{:.2}s", elapsed.as_secs_f64())
    } else {
        format!("{}ms", elapsed.as_millis())
    }
}
