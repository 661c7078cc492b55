//! Command-line interface for glovebox.
//!
//! This module provides the CLI structure for the `glovebox` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, DateCommand, NextServiceCommand, RelativeCommand, SummaryCommand,
};

use crate::logging::Verbosity;

/// glovebox - Keep track of vehicle paperwork and service dates
///
/// Classifies document issue dates and service history into status buckets
/// such as "due soon" or "overdue".
#[derive(Debug, Parser)]
#[command(name = "glovebox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Evaluate as if it were this date or timestamp
    #[arg(long, global = true, value_name = "DATE")]
    pub now: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Describe how far away a date is
    Relative(RelativeCommand),

    /// Classify a document issue date
    Issue(DateCommand),

    /// Classify a last-service date
    Service(DateCommand),

    /// Work out when the next service is due
    NextService(NextServiceCommand),

    /// Classify issue, service and next-service dates together
    Summary(SummaryCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "glovebox");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(parse(&["glovebox", "-q", "issue"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["glovebox", "issue"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["glovebox", "-v", "issue"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["glovebox", "-vv", "issue"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_relative() {
        let cli = parse(&["glovebox", "relative", "2024-06-11"]);
        match cli.command {
            Command::Relative(cmd) => assert_eq!(cmd.date, "2024-06-11"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_relative_requires_date() {
        assert!(Cli::try_parse_from(["glovebox", "relative"]).is_err());
    }

    #[test]
    fn test_parse_issue_without_date() {
        let cli = parse(&["glovebox", "issue"]);
        assert!(matches!(cli.command, Command::Issue(DateCommand { date: None })));
    }

    #[test]
    fn test_parse_service_with_date() {
        let cli = parse(&["glovebox", "service", "2024-03-01"]);
        match cli.command {
            Command::Service(cmd) => assert_eq!(cmd.date.as_deref(), Some("2024-03-01")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_next_service() {
        let cli = parse(&["glovebox", "next-service", "2024-01-01", "-i", "6"]);
        match cli.command {
            Command::NextService(cmd) => {
                assert_eq!(cmd.date.as_deref(), Some("2024-01-01"));
                assert_eq!(cmd.interval, Some(6));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_next_service_rejects_huge_interval() {
        let result = Cli::try_parse_from(["glovebox", "next-service", "2024-01-01", "-i", "5000"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_summary() {
        let cli = parse(&[
            "glovebox",
            "summary",
            "--issued",
            "2023-05-01",
            "--serviced",
            "2024-01-01",
            "--interval",
            "12",
        ]);
        match cli.command {
            Command::Summary(cmd) => {
                assert_eq!(cmd.issued.as_deref(), Some("2023-05-01"));
                assert_eq!(cmd.serviced.as_deref(), Some("2024-01-01"));
                assert_eq!(cmd.interval, Some(12));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = parse(&["glovebox", "issue", "2024-01-01", "--now", "2024-01-15", "--json"]);
        assert_eq!(cli.now.as_deref(), Some("2024-01-15"));
        assert!(cli.json);
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["glovebox", "-c", "/custom/config.toml", "config", "path"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
    }
}
