//! Locscan - unlocalized string literal scanner
//!
//! Locscan is a CLI tool and library for finding hardcoded, human-readable
//! string literals in Swift and Objective-C sources that bypass
//! `NSLocalizedString`. Marker comments can suppress regions of a file or
//! exempt it entirely.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Detection engine (literal matcher, suppression regions, classifier, scan)
//! - `output`: Results file writing

pub mod cli;
pub mod config;
pub mod core;
pub mod output;
