//! Display manager for the dashboard terminal UI
//!
//! Renders the checklist, progress, advisor text and schedule.

use chrono::NaiveDate;
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;

use crate::checklist::{
    AdvisorReport, CompletionStats, ScheduleEntry, Status, StatusCounts, StatusFilter, TaskRecord,
};

const RULE_WIDTH: usize = 72;

/// Display manager for dashboard UI
pub struct DisplayManager {
    show_progress_bars: bool,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager {
            show_progress_bars: true,
        }
    }

    /// Disable indicatif bars in favor of a plain text line
    pub fn with_progress_bars(mut self, enabled: bool) -> Self {
        self.show_progress_bars = enabled;
        self
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, anchor: NaiveDate) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("\n{}", rule.cyan());
        println!(
            "{}",
            format!("  ExportDash {} - Digital Export Performance", version)
                .bold()
                .cyan()
        );
        println!("{}", format!("  Schedule anchored at {}", anchor).dimmed());
        println!("{}\n", rule.cyan());
        println!(
            "Type {} for commands, {} to mark row 3 done, {} to quit\n",
            "/help".green(),
            "3 done".green(),
            "/exit".green()
        );
    }

    /// Render the filtered checklist
    pub fn render_checklist(
        &self,
        rows: &[(usize, &TaskRecord)],
        filter: &StatusFilter,
        total: usize,
    ) {
        self.show_section(&format!(
            "Checklist ({} of {} shown, filter: {})",
            rows.len(),
            total,
            filter
        ));

        if rows.is_empty() {
            println!("  {}", "No items match the current filter.".yellow());
            println!();
            return;
        }

        for (index, record) in rows {
            println!(
                "  {:>2}. {} {:<44} {} {}",
                (index + 1).to_string().cyan(),
                status_icon(record.status),
                record.label,
                format!("due {}", record.due_date).dimmed(),
                colored_status(record.status)
            );
        }
        println!();
    }

    /// Render completion percentage and per-status tallies
    pub fn render_progress(&self, stats: &CompletionStats, counts: &StatusCounts) {
        if self.show_progress_bars {
            let pb = ProgressBar::new(100);
            pb.set_style(
                ProgressStyle::with_template("Overall progress [{bar:40.green/blue}] {pos}% {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
            );
            pb.set_message(format!("({}/{})", stats.completed, stats.total));
            pb.set_position(u64::from(stats.percentage));
            pb.abandon();
        } else {
            println!(
                "Overall progress: {}% ({}/{})",
                stats.percentage.to_string().green().bold(),
                stats.completed,
                stats.total
            );
        }

        println!(
            "  {} {}  {} {}  {} {}",
            Status::NotStarted.label().dimmed(),
            counts.not_started,
            Status::InProgress.label().yellow(),
            counts.in_progress,
            Status::Done.label().green(),
            counts.done
        );
        println!();
    }

    /// Render the summary and next-step suggestions
    pub fn render_advice(&self, report: &AdvisorReport) {
        self.show_section("Summary and next suggestions");
        println!("  {} {}", "Summary:".bold(), report.summary);

        if report.all_complete() {
            println!("  {}", "All items are complete!".green().bold());
        } else {
            println!("  {}", "Next priorities:".bold());
            for (i, step) in report.next_steps.iter().enumerate() {
                self.show_numbered(i + 1, step);
            }
        }
        println!();
    }

    /// Render the upcoming-schedule table
    pub fn render_schedule(&self, schedule: &[ScheduleEntry<'_>]) {
        self.show_section("Upcoming schedule");
        println!(
            "  {:<44} {:<12} {}",
            "Activity".bold(),
            "Due".bold(),
            "Status".bold()
        );
        for entry in schedule {
            println!(
                "  {:<44} {:<12} {}",
                entry.label,
                entry.due_date.to_string(),
                colored_status(entry.status)
            );
        }
        println!();
    }

    /// Confirm an applied status edit
    pub fn show_edit(&self, row: usize, label: &str, from: Status, to: Status) {
        if from == to {
            println!(
                "{} Row {} ({}) already {}",
                "=".dimmed(),
                row,
                label,
                colored_status(to)
            );
        } else {
            println!(
                "{} Row {} ({}): {} -> {}",
                "✓".green(),
                row,
                label,
                colored_status(from),
                colored_status(to)
            );
        }
    }

    /// Confirm a written export
    pub fn show_export(&self, path: &Path, bytes: usize) {
        println!(
            "{} Exported checklist to {} {}",
            "✓".green(),
            path.display().to_string().bold(),
            format!("({} bytes)", bytes).dimmed()
        );
    }

    /// Display help information
    pub fn show_help(&self) {
        self.show_section("Available Commands");

        let commands = [
            ("/list, /ls", "Show checklist (current filter)"),
            ("/set <row> <status>", "Set a row's status (or just '<row> <status>')"),
            ("/filter [all|none|<status>..]", "Show or change the status filter"),
            ("/progress, /p", "Show overall completion"),
            ("/summary", "Show summary and next suggestions"),
            ("/next [n]", "Show the next n open items (default from config)"),
            ("/schedule", "Show the upcoming schedule"),
            ("/export [dir]", "Write the checklist as an .xlsx file"),
            ("/stats", "Show session statistics"),
            ("/verbose [on|off]", "Toggle verbose output"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<32} {}", cmd.green(), desc);
        }

        println!("\n{}", "Statuses:".bold());
        println!(
            "  {} (todo), {} (wip, doing), {} (complete)",
            "not-started".cyan(),
            "in-progress".cyan(),
            "done".cyan()
        );
        println!();
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Display debug message (only if verbose)
    pub fn show_debug(&self, debug: &str, verbose: bool) {
        if verbose {
            println!("{} {}", "Debug:".dimmed(), debug.dimmed());
        }
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(RULE_WIDTH).cyan());
    }

    /// Show numbered item
    pub fn show_numbered(&self, index: usize, text: &str) {
        println!("  {}. {}", index.to_string().cyan(), text);
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

fn status_icon(status: Status) -> ColoredString {
    match status {
        Status::NotStarted => "○".dimmed(),
        Status::InProgress => "◐".yellow(),
        Status::Done => "●".green(),
    }
}

fn colored_status(status: Status) -> ColoredString {
    match status {
        Status::NotStarted => status.label().dimmed(),
        Status::InProgress => status.label().yellow(),
        Status::Done => status.label().green(),
    }
}
