use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable, non-owning reference to an open tab.
///
/// Engine callbacks are tagged with the handle of the tab whose view produced them; the
/// window resolves it to the tab's current index at delivery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabHandle(Uuid);

impl TabHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Load-progress indicator of a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub value: u8,
    pub visible: bool,
}

impl Default for Progress {
    fn default() -> Self {
        Self { value: 0, visible: true }
    }
}

/// Area of the window occupied by content views, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Serializable view of one tab, pushed to the chrome strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSnapshot {
    pub index: usize,
    pub title: String,
    pub address: String,
    pub progress: Progress,
}
