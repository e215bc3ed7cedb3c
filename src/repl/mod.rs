//! Interactive dashboard (REPL) for the export checklist
//!
//! The REPL is the display surface over the checklist model: it renders the
//! current state, forwards status edits and filter selections into the
//! session, and triggers spreadsheet exports.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;

use crate::repl::commands::{is_command, parse_shorthand, Command, CommandHandler};
pub use crate::repl::display::DisplayManager;
use crate::repl::input::InputHandler;
pub use crate::repl::session::DashboardSession;

/// REPL session coordinator
///
/// Ties together input handling, command processing, the dashboard session
/// and display.
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session: DashboardSession,
    display_manager: DisplayManager,
}

impl ReplSession {
    /// Create new REPL session around a dashboard session
    pub fn new(session: DashboardSession, display_manager: DisplayManager) -> Result<Self> {
        Ok(ReplSession {
            input_handler: InputHandler::new()?,
            command_handler: CommandHandler::new(),
            session,
            display_manager,
        })
    }

    /// Show welcome banner followed by the initial views
    pub fn show_welcome(&self, version: &str) {
        let checklist = self.session.checklist();
        self.display_manager.show_banner(version, checklist.anchor());
        self.display_manager.render_checklist(
            &self.session.visible_rows(),
            self.session.filter(),
            checklist.len(),
        );
        self.display_manager
            .render_progress(&checklist.completion_stats(), &checklist.status_counts());
    }

    /// Read a line of input from user
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input
    /// - Ok(None) for EOF/exit
    /// - Err for interrupt
    pub fn read_input(&mut self) -> Result<Option<String>> {
        self.input_handler.read_line()
    }

    /// Handle user input (command or `<row> <status>` shorthand)
    ///
    /// Returns true if session should continue, false to exit
    pub fn handle_input(&mut self, input: &str) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        let command = if is_command(input) {
            self.command_handler.parse(input)
        } else {
            parse_shorthand(input).unwrap_or_else(|| Command::Invalid {
                message: format!(
                    "Not understood: '{}'. Use '<row> <status>' or /help",
                    input.trim()
                ),
            })
        };

        self.display_manager
            .show_debug(&format!("{:?}", command), self.is_verbose());

        self.command_handler
            .execute(command, &mut self.session, &self.display_manager)
    }

    /// Get dashboard session (immutable)
    pub fn session(&self) -> &DashboardSession {
        &self.session
    }

    /// Get display manager
    pub fn display(&self) -> &DisplayManager {
        &self.display_manager
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.command_handler.is_verbose()
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.command_handler.set_verbose(enable);
    }
}
