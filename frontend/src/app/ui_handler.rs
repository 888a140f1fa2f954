//! UI Command Handler
//!
//! Dispatches the commands returned by pages.

use super::state::App;
use crate::events::UiCommand;
use crate::navigation::Navigator;

impl App {
    /// Dispatches UI commands to appropriate handlers
    /// This is the main entry point for all UI actions
    pub(super) fn handle_ui_command(&mut self, command: UiCommand) {
        self.logger
            .debug(&format!("[UI] Handling command: {:?}", command));
        match command {
            UiCommand::JoinStream => self.home.on_join_activated(&mut self.router),
            UiCommand::GoHome => self.router.navigate("/"),
        }
    }
}
