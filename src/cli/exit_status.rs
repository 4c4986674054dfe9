use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary, InitSummary};

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed. A scan that flags files still succeeds
///   unless `--fail-on-flagged` is given.
/// - `Failure` (1): Files were flagged with `--fail-on-flagged`, or `init` found an existing config
/// - `Error` (2): Setup failed (scan path missing, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
        _ if result.exit_on_flagged && result.flagged_count() > 0 => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
