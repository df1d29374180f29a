//! CBrowser UI layer.
//!
//! Uses `wry` child webviews inside one `tao` window:
//! - a chrome view across the top renders the tab strip and navigation bar as HTML
//! - one content view per tab fills the rest; only the active one is visible
//!
//! Chrome → Rust communication uses wry IPC; engine callbacks are forwarded to the event
//! loop through an `EventLoopProxy` so all state changes happen on the loop thread.

pub mod chrome;
pub mod webview_app;
