//! Command handler for dashboard REPL commands
//!
//! Slash commands drive every view; bare `<row> <status>` input is shorthand
//! for `/set`.

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::checklist::{Status, StatusFilter};
use crate::errors::ChecklistError;
use crate::repl::display::DisplayManager;
use crate::repl::session::DashboardSession;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    /// Row is 1-based, as displayed
    Set { row: usize, status: Status },
    /// `None` shows the current selection
    Filter { selection: Option<StatusFilter> },
    Progress,
    Summary,
    Next { limit: Option<usize> },
    Schedule,
    Export { dir: Option<PathBuf> },
    Stats,
    Verbose { enable: bool },
    Clear,
    Exit,
    /// Recognized command with bad arguments
    Invalid { message: String },
    Unknown { input: String },
}

/// Command handler for parsing and executing REPL commands
pub struct CommandHandler {
    verbose: bool,
}

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler { verbose: false }
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        let Some(body) = trimmed.strip_prefix('/') else {
            return parse_shorthand(trimmed).unwrap_or(Command::Unknown {
                input: input.to_string(),
            });
        };

        let parts: Vec<&str> = body.split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown {
                input: input.to_string(),
            };
        }
        let rest = body
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim())
            .filter(|rest| !rest.is_empty());

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "list" | "ls" => Command::List,
            "set" => parse_set(&parts[1..]),
            "filter" | "f" => parse_filter(&parts[1..]),
            "progress" | "p" => Command::Progress,
            "summary" => Command::Summary,
            "next" => match parts.get(1) {
                None => Command::Next { limit: None },
                Some(n) => match n.parse::<usize>() {
                    Ok(limit) if limit > 0 => Command::Next { limit: Some(limit) },
                    _ => Command::Invalid {
                        message: format!("'{}' is not a positive number", n),
                    },
                },
            },
            "schedule" => Command::Schedule,
            "export" => Command::Export {
                dir: rest.map(PathBuf::from),
            },
            "stats" => Command::Stats,
            "verbose" => {
                let enable = parts
                    .get(1)
                    .map(|s| s.to_lowercase() == "on" || s == &"1" || s == &"true")
                    .unwrap_or(true);
                Command::Verbose { enable }
            }
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command
    ///
    /// Returns true if REPL should continue, false if should exit
    pub fn execute(
        &mut self,
        command: Command,
        session: &mut DashboardSession,
        display: &DisplayManager,
    ) -> Result<bool> {
        match command {
            Command::Help => display.show_help(),
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                return Ok(false);
            }
            Command::List => {
                display.render_checklist(
                    &session.visible_rows(),
                    session.filter(),
                    session.checklist().len(),
                );
            }
            Command::Set { row, status } => match session.apply_row_edit(row, status) {
                Ok(previous) => {
                    let label = session
                        .checklist()
                        .get(row - 1)
                        .map(|r| r.label.clone())
                        .unwrap_or_default();
                    display.show_edit(row, &label, previous, status);
                    display.render_progress(
                        &session.checklist().completion_stats(),
                        &session.checklist().status_counts(),
                    );
                    if session.checklist().is_complete() {
                        println!("{}", "Every activity is done. Ready to export!".green().bold());
                    }
                }
                Err(ChecklistError::IndexOutOfRange { len, .. }) => {
                    display.show_error(&format!(
                        "Row {} does not exist (rows are 1-{})",
                        row, len
                    ));
                }
                Err(err) => display.show_error(&err.to_string()),
            },
            Command::Filter { selection: None } => {
                display.show_info(&format!("Current filter: {}", session.filter()));
            }
            Command::Filter {
                selection: Some(filter),
            } => {
                if filter.is_empty() {
                    display.show_warning("No statuses selected; every row will be hidden");
                }
                session.set_filter(filter);
                display.render_checklist(
                    &session.visible_rows(),
                    session.filter(),
                    session.checklist().len(),
                );
            }
            Command::Progress => {
                display.render_progress(
                    &session.checklist().completion_stats(),
                    &session.checklist().status_counts(),
                );
            }
            Command::Summary => display.render_advice(&session.advise(None)),
            Command::Next { limit } => display.render_advice(&session.advise(limit)),
            Command::Schedule => display.render_schedule(&session.checklist().schedule()),
            Command::Export { dir } => match session.export(dir.as_deref()) {
                Ok((path, bytes)) => display.show_export(&path, bytes),
                Err(err) => display.show_error(&err.to_string()),
            },
            Command::Stats => session.telemetry().display_summary(),
            Command::Verbose { enable } => {
                self.verbose = enable;
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Verbose mode {}", status).cyan());
            }
            Command::Clear => display.clear_screen()?,
            Command::Invalid { message } => display.show_error(&message),
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
            }
        }

        Ok(true)
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if input is a command (starts with /)
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Parse `<row> <status>` shorthand; `None` if input does not start with a number
pub fn parse_shorthand(input: &str) -> Option<Command> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.first() {
        Some(first) if first.chars().all(|c| c.is_ascii_digit()) => Some(parse_set(&parts)),
        _ => None,
    }
}

fn parse_set(args: &[&str]) -> Command {
    if args.len() < 2 {
        return Command::Invalid {
            message: "Usage: /set <row> <status>".to_string(),
        };
    }

    let Ok(row) = args[0].parse::<usize>() else {
        return Command::Invalid {
            message: format!("'{}' is not a row number", args[0]),
        };
    };

    match args[1..].join(" ").parse::<Status>() {
        Ok(status) => Command::Set { row, status },
        Err(err) => Command::Invalid {
            message: err.to_string(),
        },
    }
}

fn parse_filter(args: &[&str]) -> Command {
    if args.is_empty() {
        return Command::Filter { selection: None };
    }

    match args[0].to_lowercase().as_str() {
        "all" => {
            return Command::Filter {
                selection: Some(StatusFilter::all()),
            }
        }
        "none" => {
            return Command::Filter {
                selection: Some(StatusFilter::none()),
            }
        }
        _ => {}
    }

    match args
        .iter()
        .map(|a| a.parse::<Status>())
        .collect::<crate::errors::Result<StatusFilter>>()
    {
        Ok(filter) => Command::Filter {
            selection: Some(filter),
        },
        Err(err) => Command::Invalid {
            message: err.to_string(),
        },
    }
}
