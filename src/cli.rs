use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};

/// Fasli Zoroastrian calendar and memorial ceremony schedules.
#[derive(Parser)]
#[command(
    name = "fasli",
    version,
    about = "Fasli Zoroastrian calendar and memorial ceremony schedules"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date and time to its Fasli date.
    Date(DateArgs),
    /// Generate the memorial ceremony schedule for a death.
    Schedule(ScheduleArgs),
}

/// Output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments shared by both subcommands.
#[derive(clap::Args)]
pub struct InstantArgs {
    /// Gregorian date (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,

    /// Local time of day (HH:MM or HH:MM:SS). Defaults to noon.
    #[arg(short, long, value_parser = parse_time)]
    pub time: Option<NaiveTime>,

    /// Place used for the sunrise day boundary, e.g. "Mumbai, Maharashtra".
    #[arg(short, long)]
    pub location: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    #[command(flatten)]
    pub instant: InstantArgs,

    /// Print only the day name.
    #[arg(short, long)]
    pub short: bool,
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub instant: InstantArgs,

    /// Number of monthly recurrences (overrides [schedule].months).
    #[arg(short, long)]
    pub months: Option<u32>,

    /// Write the schedule to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("invalid time '{s}' (expected HH:MM or HH:MM:SS)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_times() {
        assert_eq!(
            parse_time("02:00").unwrap(),
            NaiveTime::from_hms_opt(2, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("23:59:30").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 30).unwrap()
        );
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn parses_schedule_command() {
        let cli = Cli::try_parse_from([
            "fasli",
            "-vv",
            "schedule",
            "--date",
            "2025-06-15",
            "--time",
            "10:00",
            "--location",
            "Mumbai, Maharashtra",
            "--months",
            "6",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Schedule(args) = cli.command else {
            panic!("expected schedule");
        };
        assert_eq!(args.months, Some(6));
        assert_eq!(args.instant.format, OutputFormat::Json);
        assert_eq!(
            args.instant.date,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
        );
        assert_eq!(args.instant.location.as_deref(), Some("Mumbai, Maharashtra"));
    }
}
