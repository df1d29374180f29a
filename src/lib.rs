//! CBrowser — a minimal tabbed web browser shell.
//!
//! The library exposes the window/tab logic independently of the webview backend so that
//! the binary and the integration tests drive the same code paths.

pub mod app;
pub mod chrome_ipc;
pub mod config;
pub mod engine;
pub mod managers;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
