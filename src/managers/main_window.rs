use std::rc::Rc;

use tracing::{debug, info};

use crate::config::BrowserConfig;
use crate::engine::intercept::UserAgentOverride;
use crate::engine::script;
use crate::engine::{ViewEvent, ViewFactory, ViewRequest};
use crate::managers::browser_tab::{BrowserTab, TabNotification};
use crate::types::errors::{ShellError, TabError};
use crate::types::tab::{ContentBounds, TabHandle, TabSnapshot};

/// Trait defining the window's tab operations.
pub trait MainWindowTrait {
    fn add_tab(&mut self, url: &str, title: &str) -> Result<TabHandle, ShellError>;
    fn add_blank_tab(&mut self) -> Result<TabHandle, ShellError>;
    fn close_tab(&mut self, index: usize) -> Result<(), TabError>;
    fn activate_tab(&mut self, index: usize) -> Result<(), TabError>;
    fn rename_tab(&mut self, index: usize, title: &str) -> Result<(), TabError>;
    fn tab_count(&self) -> usize;
    fn active_index(&self) -> Option<usize>;
    fn index_of(&self, handle: TabHandle) -> Option<usize>;
}

/// The browser window: an ordered list of tabs, one of them active.
///
/// Insertion order is display order. At least one tab stays open once the first has been
/// added; closing the last one is ignored.
pub struct MainWindow<F: ViewFactory> {
    config: BrowserConfig,
    factory: F,
    tabs: Vec<BrowserTab<F::View>>,
    active: Option<TabHandle>,
    user_agent: UserAgentOverride,
    initialization_scripts: Vec<String>,
    post_load_script: Rc<str>,
    content_bounds: ContentBounds,
}

impl<F: ViewFactory> MainWindow<F> {
    pub fn new(config: BrowserConfig, factory: F) -> Result<Self, ShellError> {
        let user_agent = UserAgentOverride::new(&config.user_agent)?;
        let initialization_scripts = script::initialization_scripts(&config.engine);
        let post_load_script: Rc<str> = script::post_load_script(&config.user_agent).into();
        let content_bounds = ContentBounds {
            x: 0,
            y: config.chrome_height as i32,
            width: config.window.width,
            height: config.window.height.saturating_sub(config.chrome_height),
        };

        Ok(Self {
            config,
            factory,
            tabs: Vec::new(),
            active: None,
            user_agent,
            initialization_scripts,
            post_load_script,
            content_bounds,
        })
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn tabs(&self) -> &[BrowserTab<F::View>] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&BrowserTab<F::View>> {
        self.tabs.get(index)
    }

    pub fn tab_mut(&mut self, index: usize) -> Option<&mut BrowserTab<F::View>> {
        self.tabs.get_mut(index)
    }

    pub fn active_tab(&self) -> Option<&BrowserTab<F::View>> {
        self.active_index().and_then(|i| self.tabs.get(i))
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut BrowserTab<F::View>> {
        let index = self.active_index()?;
        self.tabs.get_mut(index)
    }

    pub fn content_bounds(&self) -> ContentBounds {
        self.content_bounds
    }

    /// Resizes every content view to `bounds`; views created later use them too.
    pub fn set_content_bounds(&mut self, bounds: ContentBounds) {
        self.content_bounds = bounds;
        for tab in &mut self.tabs {
            tab.set_bounds(bounds);
        }
    }

    /// Delivers an engine event to the tab owning `handle`.
    ///
    /// Events for a tab that has already been closed yield `TabError::NotFound`.
    pub fn handle_view_event(&mut self, handle: TabHandle, event: ViewEvent) -> Result<(), TabError> {
        let index = self
            .index_of(handle)
            .ok_or_else(|| TabError::NotFound(handle.to_string()))?;
        if let Some(TabNotification::TitleChanged(title)) = self.tabs[index].handle_event(event) {
            self.rename_tab(index, &title)?;
        }
        Ok(())
    }

    /// Serializable state of every tab, in display order.
    pub fn snapshots(&self) -> Vec<TabSnapshot> {
        self.tabs.iter().enumerate().map(|(i, t)| t.snapshot(i)).collect()
    }

    fn set_active(&mut self, handle: TabHandle) {
        if self.active == Some(handle) {
            return;
        }
        if let Some(previous) = self.active.and_then(|h| self.index_of(h)) {
            self.tabs[previous].set_visible(false);
        }
        self.active = Some(handle);
        if let Some(index) = self.index_of(handle) {
            self.tabs[index].set_visible(true);
        }
    }
}

impl<F: ViewFactory> MainWindowTrait for MainWindow<F> {
    /// Creates a tab loading `url`, appends it and makes it active.
    fn add_tab(&mut self, url: &str, title: &str) -> Result<TabHandle, ShellError> {
        let handle = TabHandle::new();
        let request = ViewRequest {
            url,
            settings: &self.config.engine,
            user_agent: &self.user_agent,
            initialization_scripts: &self.initialization_scripts,
            bounds: self.content_bounds,
        };
        let view = self.factory.create_view(handle, &request)?;

        self.tabs.push(BrowserTab::new(
            handle,
            url,
            title,
            view,
            Rc::clone(&self.post_load_script),
        ));
        info!(%handle, url, index = self.tabs.len() - 1, "tab added");
        self.set_active(handle);
        Ok(handle)
    }

    fn add_blank_tab(&mut self) -> Result<TabHandle, ShellError> {
        let url = self.config.default_url.clone();
        let title = self.config.new_tab_title.clone();
        self.add_tab(&url, &title)
    }

    /// Removes and releases the tab at `index`, unless it is the only one left.
    fn close_tab(&mut self, index: usize) -> Result<(), TabError> {
        if self.tabs.len() <= 1 {
            debug!(index, "ignoring close of the last tab");
            return Ok(());
        }
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }

        let closed = self.tabs.remove(index);
        let was_active = self.active == Some(closed.handle());
        info!(handle = %closed.handle(), index, "tab closed");
        drop(closed);

        if was_active {
            self.active = None;
            let next = index.min(self.tabs.len() - 1);
            let handle = self.tabs[next].handle();
            self.set_active(handle);
        }
        Ok(())
    }

    fn activate_tab(&mut self, index: usize) -> Result<(), TabError> {
        let handle = self
            .tabs
            .get(index)
            .map(|t| t.handle())
            .ok_or(TabError::InvalidIndex(index))?;
        self.set_active(handle);
        Ok(())
    }

    fn rename_tab(&mut self, index: usize, title: &str) -> Result<(), TabError> {
        let tab = self.tabs.get_mut(index).ok_or(TabError::InvalidIndex(index))?;
        tab.set_title(title);
        Ok(())
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn active_index(&self) -> Option<usize> {
        self.active.and_then(|h| self.index_of(h))
    }

    fn index_of(&self, handle: TabHandle) -> Option<usize> {
        self.tabs.iter().position(|t| t.handle() == handle)
    }
}
