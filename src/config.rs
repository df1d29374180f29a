// CBrowser configuration
// Process-wide immutable values: window geometry, start page, spoofed User-Agent and the
// capability flags every rendering view is created with. Nothing here is persisted, and
// views keep no browsing data on disk.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Page loaded by every tab created without an explicit address.
pub const DEFAULT_URL: &str = "https://cbrowser.colebolebole.site/";

/// Label given to tabs opened from the "+" control.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// User-Agent sent with every request issued by any view.
pub const SPOOFED_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

static GLOBAL: OnceLock<BrowserConfig> = OnceLock::new();

/// Top-level browser configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserConfig {
    pub window: WindowConfig,
    pub default_url: String,
    pub new_tab_title: String,
    pub user_agent: String,
    pub engine: EngineSettings,
    /// Height in logical pixels of the tab strip + navigation bar above the content views.
    pub chrome_height: u32,
}

/// Main window title and initial geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Capability flags applied identically to every rendering view at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineSettings {
    pub local_storage: bool,
    pub plugins: bool,
    pub auto_load_images: bool,
    pub javascript: bool,
    pub full_screen_support: bool,
    pub hyperlink_auditing: bool,
    /// Keep cookies, storage and cache in memory only; nothing survives the process.
    pub off_the_record: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            default_url: DEFAULT_URL.to_string(),
            new_tab_title: NEW_TAB_TITLE.to_string(),
            user_agent: SPOOFED_USER_AGENT.to_string(),
            engine: EngineSettings::default(),
            chrome_height: 72,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "CBrowser".to_string(),
            x: 100,
            y: 100,
            width: 1200,
            height: 800,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            local_storage: true,
            plugins: true,
            auto_load_images: true,
            javascript: true,
            full_screen_support: true,
            hyperlink_auditing: false,
            off_the_record: true,
        }
    }
}

impl BrowserConfig {
    /// Returns the process-wide configuration, initialising it on first use.
    pub fn global() -> &'static BrowserConfig {
        GLOBAL.get_or_init(BrowserConfig::default)
    }
}
