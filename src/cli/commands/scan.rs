use std::{path::PathBuf, time::Instant};

use anyhow::Result;

use super::super::{
    args::{ScanArgs, ScanCommand},
    report,
};
use super::{CommandResult, CommandSummary, ScanSummary, WriteStatus};
use crate::{
    config::{Config, MarkerConfig, load_config},
    core::{Classifier, ScanOutcome, WalkOptions, collect_candidates, scan as scan_candidates},
    output::write_results,
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let start = Instant::now();

    let loaded = load_config(&args.scan_path)?;
    let config = merge_args(loaded.config, &args);
    config.validate()?;

    let classifier = Classifier::new(config.markers.markers(), config.effective_policy());

    report::print_scan_start(&args.scan_path);

    let walk = collect_candidates(
        &args.scan_path,
        &WalkOptions {
            file_extensions: config.file_extensions.clone(),
            excluded_directories: config.excluded_directories.clone(),
            ignores: config.ignores.clone(),
            verbose: args.verbose,
        },
    )?;

    let (outcome, write) = if walk.files.is_empty() {
        (ScanOutcome::default(), WriteStatus::Skipped)
    } else {
        let outcome = scan_candidates(&walk.files, &classifier, args.verbose);
        let destination = PathBuf::from(&config.output_file_name);
        let write = match write_results(&destination, &outcome.flagged) {
            Ok(()) => WriteStatus::Saved(destination),
            Err(err) => WriteStatus::Failed {
                path: destination,
                error: format!("{:#}", err),
            },
        };
        (outcome, write)
    };

    let markers = match config.markers {
        MarkerConfig::Variant(variant) => Some(variant),
        MarkerConfig::Custom(_) => None,
    };

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            root: args.scan_path,
            markers,
            policy: classifier.policy(),
            config_path: loaded.path,
            outcome,
            skipped_count: walk.skipped_count,
            write,
            elapsed: start.elapsed(),
        }),
        exit_on_flagged: args.fail_on_flagged,
    })
}

/// Apply CLI overrides on top of the loaded config.
fn merge_args(mut config: Config, args: &ScanArgs) -> Config {
    if !args.file_extensions.is_empty() {
        config.file_extensions = args.file_extensions.clone();
    }
    if !args.excluded_directories.is_empty() {
        config.excluded_directories = args.excluded_directories.clone();
    }
    if let Some(name) = &args.output_file_name {
        config.output_file_name = name.clone();
    }
    if let Some(variant) = args.markers {
        config.markers = MarkerConfig::Variant(variant);
        // A variant chosen on the command line brings its own policy unless one is given
        if args.policy.is_none() {
            config.policy = None;
        }
    }
    if let Some(policy) = args.policy {
        config.policy = Some(policy);
    }
    config
}
