//! Seam between the tab logic and the rendering engine.
//!
//! A [`ViewFactory`] creates one [`RenderingView`] per tab and subscribes it to the
//! engine's callbacks; those callbacks come back to the window as [`ViewEvent`]s tagged
//! with the owning tab's [`TabHandle`], on the same thread that owns the window.

pub mod headless;
pub mod intercept;
pub mod script;

use crate::config::EngineSettings;
use crate::engine::intercept::UserAgentOverride;
use crate::types::errors::ShellError;
use crate::types::tab::{ContentBounds, TabHandle};

/// Engine notification about a view's load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A navigation was committed for `url`.
    LoadStarted { url: String },
    /// Load progress in percent.
    Progress(u8),
    /// The navigation finished. `success` is informational only.
    LoadFinished { success: bool },
    /// The document title changed.
    TitleChanged(String),
}

/// Capabilities a tab needs from its rendering view.
///
/// All calls are asynchronous hand-offs; results come back later as [`ViewEvent`]s.
pub trait RenderingView {
    fn navigate(&mut self, url: &str) -> Result<(), ShellError>;
    fn go_back(&mut self) -> Result<(), ShellError>;
    fn go_forward(&mut self) -> Result<(), ShellError>;
    fn reload(&mut self) -> Result<(), ShellError>;
    fn evaluate_script(&mut self, script: &str) -> Result<(), ShellError>;
    fn set_visible(&mut self, visible: bool) -> Result<(), ShellError>;
    fn set_bounds(&mut self, bounds: ContentBounds) -> Result<(), ShellError>;
}

/// Everything a factory needs to build a view for a new tab.
pub struct ViewRequest<'a> {
    pub url: &'a str,
    pub settings: &'a EngineSettings,
    pub user_agent: &'a UserAgentOverride,
    /// Scripts run at document creation on every page of the view.
    pub initialization_scripts: &'a [String],
    pub bounds: ContentBounds,
}

/// Creates rendering views and wires their callbacks back to the owning tab.
pub trait ViewFactory {
    type View: RenderingView;

    fn create_view(
        &mut self,
        handle: TabHandle,
        request: &ViewRequest<'_>,
    ) -> Result<Self::View, ShellError>;
}
