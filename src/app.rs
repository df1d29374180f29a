//! App core for CBrowser.
//!
//! Owns the main window and drives the application lifecycle independently of the
//! rendering backend.

use tracing::info;

use crate::chrome_ipc;
use crate::config::BrowserConfig;
use crate::engine::{ViewEvent, ViewFactory};
use crate::managers::main_window::{MainWindow, MainWindowTrait};
use crate::types::errors::{ShellError, TabError};
use crate::types::tab::TabHandle;

/// Central application struct.
pub struct App<F: ViewFactory> {
    pub window: MainWindow<F>,
}

impl<F: ViewFactory> App<F> {
    pub fn new(config: BrowserConfig, factory: F) -> Result<Self, ShellError> {
        Ok(Self { window: MainWindow::new(config, factory)? })
    }

    /// Startup sequence: open the first tab on the default start page.
    pub fn startup(&mut self) -> Result<TabHandle, ShellError> {
        info!(
            title = %self.window.config().window.title,
            start_page = %self.window.config().default_url,
            "starting"
        );
        self.window.add_blank_tab()
    }

    /// Applies a message from the chrome page. Returns whether the chrome needs redrawing.
    pub fn handle_chrome_message(&mut self, body: &str) -> Result<bool, ShellError> {
        chrome_ipc::handle_message(&mut self.window, body)
    }

    /// Delivers an engine event to its tab.
    pub fn handle_view_event(&mut self, handle: TabHandle, event: ViewEvent) -> Result<(), TabError> {
        self.window.handle_view_event(handle, event)
    }

    pub fn chrome_update_script(&self) -> String {
        chrome_ipc::build_chrome_update(&self.window)
    }

    /// Shutdown sequence: report and let the window release its views.
    pub fn shutdown(self) {
        info!(open_tabs = self.window.tab_count(), "shutting down");
    }
}
