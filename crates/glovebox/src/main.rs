//! `glovebox` - CLI for classifying vehicle document and service dates

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, TimeZone};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use glovebox::cli::{Cli, Command, ConfigCommand};
use glovebox::config::OutputFormat;
use glovebox::report::{next_service_line, status_line, to_json};
use glovebox::status::anchor::parse_anchor;
use glovebox::{
    init_logging, issue_status, next_service_due, relative_label, service_status, Clock, Config,
    FixedClock, Summary, SystemClock,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    let zone = config.clock.time_zone;
    let now = match &cli.now {
        Some(raw) => FixedClock::parse(raw, zone)
            .context("parsing --now")?
            .now(),
        None => SystemClock::new(zone).now(),
    };
    debug!(%now, ?zone, "evaluating dates");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match cli.command {
        Command::Relative(cmd) => {
            let target = parse_target(&cmd.date, &now)?;
            let label = relative_label(&target, &now);
            emit(format, &serde_json::json!({ "label": &label }), || label.clone())
        }
        Command::Issue(cmd) => {
            let result = issue_status(cmd.date.as_deref(), &now);
            emit(format, &result, || status_line(&result))
        }
        Command::Service(cmd) => {
            let result = service_status(cmd.date.as_deref(), &now);
            emit(format, &result, || status_line(&result))
        }
        Command::NextService(cmd) => {
            let interval = cmd.interval.or_else(|| config.default_interval());
            let result = next_service_due(cmd.date.as_deref(), interval, &now);
            emit(format, &result, || next_service_line(&result))
        }
        Command::Summary(cmd) => {
            let interval = cmd.interval.or_else(|| config.default_interval());
            let summary = Summary::evaluate(
                cmd.issued.as_deref(),
                cmd.serviced.as_deref(),
                interval,
                &now,
            );
            emit(format, &summary, || {
                summary.render_plain().trim_end().to_string()
            })
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

/// Resolve the `relative` target in the same frame as `now`.
fn parse_target(raw: &str, now: &DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>> {
    let zone = now.timezone();
    let wall = parse_anchor(raw, &zone).context("parsing target date")?;
    zone.from_local_datetime(&wall)
        .single()
        .context("target date is out of range")
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, plain: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(value)?),
        OutputFormat::Plain => println!("{}", plain()),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", to_json(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Clock]");
                println!("  Time zone:          {:?}", config.clock.time_zone);
                println!();
                println!("[Service]");
                println!(
                    "  Default interval:   {} months",
                    config.service.default_interval_months
                );
                println!();
                println!("[Output]");
                println!("  Format:             {:?}", config.output.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_existing(path) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
