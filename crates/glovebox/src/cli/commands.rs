//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::MAX_INTERVAL_MONTHS;

/// Relative label command arguments.
#[derive(Debug, Args)]
pub struct RelativeCommand {
    /// Target date (YYYY-MM-DD or ISO-8601 timestamp)
    pub date: String,
}

/// Arguments for commands classifying a single anchor date.
#[derive(Debug, Args)]
pub struct DateCommand {
    /// Anchor date; omit when none is recorded
    pub date: Option<String>,
}

/// Next-service command arguments.
#[derive(Debug, Args)]
pub struct NextServiceCommand {
    /// Date of the last service; omit when none is recorded
    pub date: Option<String>,

    /// Service interval in months (defaults to the configured interval)
    #[arg(short, long, value_parser = interval_parser())]
    pub interval: Option<u32>,
}

/// Summary command arguments.
#[derive(Debug, Args)]
pub struct SummaryCommand {
    /// Document issue date
    #[arg(long, value_name = "DATE")]
    pub issued: Option<String>,

    /// Date of the last service
    #[arg(long, value_name = "DATE")]
    pub serviced: Option<String>,

    /// Service interval in months (defaults to the configured interval)
    #[arg(short, long, value_parser = interval_parser())]
    pub interval: Option<u32>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn interval_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(0..=i64::from(MAX_INTERVAL_MONTHS))
}
