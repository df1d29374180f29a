use std::fmt;

// === TabError ===

/// Errors related to window/tab lookups.
#[derive(Debug, PartialEq, Eq)]
pub enum TabError {
    /// No open tab carries the given handle (the tab was already closed).
    NotFound(String),
    /// The provided tab index is out of bounds.
    InvalidIndex(usize),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
            TabError::InvalidIndex(index) => write!(f, "Invalid tab index: {}", index),
        }
    }
}

impl std::error::Error for TabError {}

// === ShellError ===

/// Errors raised while building the window or talking to the rendering engine.
#[derive(Debug)]
pub enum ShellError {
    /// The native window or event loop could not be created.
    WindowBuild(String),
    /// The engine refused to create a rendering view.
    WebViewBuild(String),
    /// An engine call (navigation, script evaluation, visibility) failed.
    Engine(String),
    /// A configured header value is not a valid HTTP header value.
    InvalidHeader(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::WindowBuild(msg) => write!(f, "Failed to build window: {}", msg),
            ShellError::WebViewBuild(msg) => write!(f, "Failed to build web view: {}", msg),
            ShellError::Engine(msg) => write!(f, "Engine call failed: {}", msg),
            ShellError::InvalidHeader(msg) => write!(f, "Invalid header value: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
