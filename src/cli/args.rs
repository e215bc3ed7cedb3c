//! Command-line argument parsing for ExportDash
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::checklist::{last_due_date, Status, StatusFilter};
use crate::errors::{ChecklistError, Result};
use crate::export::is_excel_date;

/// ExportDash - track digital export readiness from the terminal
#[derive(Parser, Debug)]
#[command(name = "exportdash")]
#[command(version)]
#[command(about = "Checklist dashboard for digital export readiness", long_about = None)]
pub struct Args {
    /// Anchor date for the schedule (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true, value_name = "DATE")]
    pub today: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress everything but results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive dashboard (default)
    Start,

    /// Print the checklist, progress and summary once
    Show {
        /// Only show items with these statuses (repeatable)
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<String>,
    },

    /// Write a spreadsheet of the fresh checklist
    Export {
        /// Output directory (defaults to the configured output_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Resolve the schedule anchor date
    ///
    /// The whole schedule must fit in the dates a spreadsheet can hold.
    pub fn anchor_date(&self) -> Result<NaiveDate> {
        let anchor = match &self.today {
            Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                .map_err(|e| ChecklistError::InvalidDate(format!("{}: {}", text, e)))?,
            None => Local::now().date_naive(),
        };

        let fits = is_excel_date(anchor) && last_due_date(anchor).is_some_and(is_excel_date);
        if !fits {
            return Err(ChecklistError::InvalidDate(format!(
                "{}: schedule must fall between 1900-01-01 and 9999-12-31",
                anchor
            )));
        }

        Ok(anchor)
    }
}

/// Parse repeated `--status` values into a filter
///
/// No values means every status is shown.
pub fn parse_status_filter(values: &[String]) -> Result<StatusFilter> {
    if values.is_empty() {
        return Ok(StatusFilter::all());
    }

    values
        .iter()
        .map(|v| v.parse::<Status>())
        .collect::<Result<StatusFilter>>()
}

impl Verbosity {
    /// Default tracing directive for this level
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if should show progress bars
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show detailed events
    pub fn show_events(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> Args {
        Args {
            today: None,
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(args(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(args(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(args(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(args(3, false).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(args(2, true).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_anchor_date_override() {
        let mut a = args(0, false);
        a.today = Some("2024-02-28".to_string());
        assert_eq!(
            a.anchor_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_anchor_date_invalid() {
        let mut a = args(0, false);
        a.today = Some("28/02/2024".to_string());
        assert!(matches!(a.anchor_date(), Err(ChecklistError::InvalidDate(_))));
    }

    #[test]
    fn test_anchor_date_outside_spreadsheet_range() {
        for text in ["1899-12-31", "9999-12-20", "+67436-01-01"] {
            let mut a = args(0, false);
            a.today = Some(text.to_string());
            assert!(
                matches!(a.anchor_date(), Err(ChecklistError::InvalidDate(_))),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_anchor_date_range_edges() {
        let mut a = args(0, false);
        a.today = Some("1900-01-01".to_string());
        assert!(a.anchor_date().is_ok());

        // Last item lands on 9999-12-31
        a.today = Some("9999-12-03".to_string());
        assert!(a.anchor_date().is_ok());
        a.today = Some("9999-12-04".to_string());
        assert!(a.anchor_date().is_err());
    }

    #[test]
    fn test_default_anchor_is_valid() {
        assert!(args(0, false).anchor_date().is_ok());
    }

    #[test]
    fn test_parse_cli() {
        let parsed = Args::try_parse_from([
            "exportdash",
            "--today",
            "2024-01-01",
            "show",
            "--status",
            "done",
            "--status",
            "wip",
        ])
        .unwrap();

        assert_eq!(parsed.today.as_deref(), Some("2024-01-01"));
        match parsed.command {
            Some(Commands::Show { statuses }) => assert_eq!(statuses, vec!["done", "wip"]),
            other => panic!("Expected Show, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_status_filter() {
        let filter = parse_status_filter(&["done".to_string()]).unwrap();
        assert!(filter.contains(Status::Done));
        assert_eq!(filter.len(), 1);

        assert!(parse_status_filter(&[]).unwrap().is_all());
        assert!(parse_status_filter(&["later".to_string()]).is_err());
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
        assert!(!Verbosity::Normal.show_events());
        assert!(Verbosity::Verbose.show_events());
        assert_eq!(Verbosity::VeryVerbose.log_directive(), "debug");
    }
}
