//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find files containing unlocalized string literals
//! - `init`: Initialize a locscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::{MarkerVariant, SuppressionPolicy};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// The path of the directory to scan
    #[arg(default_value = ".")]
    pub scan_path: PathBuf,

    /// The file extensions to search for (overrides config file)
    #[arg(short = 'f', long, value_delimiter = ',')]
    pub file_extensions: Vec<String>,

    /// The directories to exclude from the search (overrides config file)
    #[arg(short = 'e', long, value_delimiter = ',')]
    pub excluded_directories: Vec<String>,

    /// The name of the output file (overrides config file)
    #[arg(short = 'o', long)]
    pub output_file_name: Option<String>,

    /// Suppression marker spelling (overrides config file)
    #[arg(long, value_enum)]
    pub markers: Option<MarkerVariant>,

    /// How disable/enable markers affect detection (overrides config file)
    #[arg(long, value_enum)]
    pub policy: Option<SuppressionPolicy>,

    /// Exit with code 1 when unlocalized files are found
    #[arg(long)]
    pub fail_on_flagged: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find files containing unlocalized string literals
    Scan(ScanCommand),
    /// Initialize a new .locscanrc.json configuration file
    Init,
}
