//! Message handling for the browser chrome (tab strip + navigation bar).
//!
//! The chrome page posts JSON messages of the form `{"cmd": "...", ...}`; each one is
//! applied to the [`MainWindow`]. After a state change the chrome is redrawn by evaluating
//! the script returned from [`build_chrome_update`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::ViewFactory;
use crate::managers::main_window::{MainWindow, MainWindowTrait};
use crate::types::errors::ShellError;
use crate::types::tab::TabSnapshot;

/// A command sent by the chrome page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ChromeCommand {
    /// The chrome page finished loading and wants the current state.
    UiReady,
    /// The "+" control.
    NewTab,
    CloseTab { index: usize },
    ActivateTab { index: usize },
    /// The address field of the active tab was edited.
    AddressInput { text: String },
    /// Return was pressed in the address field.
    SubmitAddress { text: String },
    Back,
    Forward,
    Reload,
}

/// State rendered by the chrome page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeState {
    pub tabs: Vec<TabSnapshot>,
    pub active_index: Option<usize>,
}

pub fn parse_command(body: &str) -> Option<ChromeCommand> {
    match serde_json::from_str(body) {
        Ok(cmd) => Some(cmd),
        Err(e) => {
            debug!(error = %e, "ignoring unrecognised chrome message");
            None
        }
    }
}

/// Applies one chrome command. Returns whether the chrome needs redrawing.
///
/// Out-of-range tab indexes are logged and ignored; only a failure to create a view for
/// a new tab is returned as an error.
pub fn handle_command<F: ViewFactory>(
    window: &mut MainWindow<F>,
    command: ChromeCommand,
) -> Result<bool, ShellError> {
    let outcome = match command {
        ChromeCommand::UiReady => Ok(()),
        ChromeCommand::NewTab => {
            window.add_blank_tab()?;
            Ok(())
        }
        ChromeCommand::CloseTab { index } => window.close_tab(index),
        ChromeCommand::ActivateTab { index } => window.activate_tab(index),
        ChromeCommand::AddressInput { text } => {
            if let Some(tab) = window.active_tab_mut() {
                tab.set_address_text(&text);
            }
            return Ok(false);
        }
        ChromeCommand::SubmitAddress { text } => {
            if let Some(tab) = window.active_tab_mut() {
                tab.set_address_text(&text);
                tab.submit_address();
            }
            Ok(())
        }
        ChromeCommand::Back => {
            if let Some(tab) = window.active_tab_mut() {
                tab.go_back();
            }
            return Ok(false);
        }
        ChromeCommand::Forward => {
            if let Some(tab) = window.active_tab_mut() {
                tab.go_forward();
            }
            return Ok(false);
        }
        ChromeCommand::Reload => {
            if let Some(tab) = window.active_tab_mut() {
                tab.reload();
            }
            return Ok(false);
        }
    };

    if let Err(e) = outcome {
        warn!(error = %e, "chrome command ignored");
    }
    Ok(true)
}

/// Parses and applies a raw chrome message. Unknown messages change nothing.
pub fn handle_message<F: ViewFactory>(
    window: &mut MainWindow<F>,
    body: &str,
) -> Result<bool, ShellError> {
    match parse_command(body) {
        Some(command) => handle_command(window, command),
        None => Ok(false),
    }
}

pub fn chrome_state<F: ViewFactory>(window: &MainWindow<F>) -> ChromeState {
    ChromeState {
        tabs: window.snapshots(),
        active_index: window.active_index(),
    }
}

/// Script that pushes the current window state into the chrome page.
pub fn build_chrome_update<F: ViewFactory>(window: &MainWindow<F>) -> String {
    let state = serde_json::to_string(&chrome_state(window)).unwrap_or_else(|_| "null".into());
    format!("if(window.__cb_updateChrome)__cb_updateChrome({})", state)
}
