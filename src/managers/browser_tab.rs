//! A single browser pane: one rendering view, its address text and progress indicator.
//!
//! UI actions become engine calls; engine events become indicator updates. The tab never
//! reaches back into the window: a title change is returned as a [`TabNotification`]
//! that the window applies to the label at this tab's current index.

use std::rc::Rc;

use tracing::{debug, warn};
use url::Url;

use crate::engine::{RenderingView, ViewEvent};
use crate::types::errors::ShellError;
use crate::types::tab::{ContentBounds, Progress, TabHandle, TabSnapshot};

/// Whether `text` already names a scheme (`https://…`, `ftp://…`, `mailto:…`, `data:…`).
///
/// `host:port` parses as a URL whose scheme is the host, so a scheme containing a dot or
/// followed by a numeric port is treated as a bare host.
fn has_scheme(text: &str) -> bool {
    let Ok(url) = Url::parse(text) else {
        return false;
    };
    let scheme_len = url.scheme().len();
    if text.get(scheme_len..).is_some_and(|rest| rest.starts_with("://")) {
        return true;
    }
    let port_like = url
        .path()
        .split('/')
        .next()
        .is_some_and(|first| !first.is_empty() && first.bytes().all(|b| b.is_ascii_digit()));
    !url.scheme().contains('.') && !port_like
}

/// Turns address-bar text into a navigable URL by prepending `http://` when it has no
/// scheme. The text is otherwise not validated.
pub fn normalize_address(text: &str) -> String {
    let trimmed = text.trim();
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

/// Notification a tab raises for its owning window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabNotification {
    TitleChanged(String),
}

/// One tab and the view it exclusively owns. Dropping the tab releases the view.
pub struct BrowserTab<V: RenderingView> {
    handle: TabHandle,
    title: String,
    address_text: String,
    progress: Progress,
    post_load_script: Rc<str>,
    view: V,
}

impl<V: RenderingView> BrowserTab<V> {
    pub fn new(
        handle: TabHandle,
        url: &str,
        title: &str,
        view: V,
        post_load_script: Rc<str>,
    ) -> Self {
        Self {
            handle,
            title: title.to_string(),
            address_text: url.to_string(),
            progress: Progress::default(),
            post_load_script,
            view,
        }
    }

    pub fn handle(&self) -> TabHandle {
        self.handle
    }

    /// Label shown in the tab strip.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn address_text(&self) -> &str {
        &self.address_text
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mirrors the address input field.
    pub fn set_address_text(&mut self, text: &str) {
        self.address_text = text.to_string();
    }

    /// Navigates to the address text, prefixing `http://` when it has no known scheme.
    /// Returns the URL handed to the engine.
    pub fn submit_address(&mut self) -> String {
        let url = normalize_address(&self.address_text);
        debug!(handle = %self.handle, %url, "submitting address");
        let result = self.view.navigate(&url);
        self.log_failure("navigate", result);
        url
    }

    pub fn go_back(&mut self) {
        let result = self.view.go_back();
        self.log_failure("go_back", result);
    }

    pub fn go_forward(&mut self) {
        let result = self.view.go_forward();
        self.log_failure("go_forward", result);
    }

    pub fn reload(&mut self) {
        let result = self.view.reload();
        self.log_failure("reload", result);
    }

    /// A navigation was committed: show the indicator at 0 and mirror the URL.
    pub fn on_load_started(&mut self, url: &str) {
        self.progress = Progress { value: 0, visible: true };
        self.address_text = url.to_string();
    }

    pub fn on_progress(&mut self, percent: u8) {
        self.progress.value = percent.min(100);
    }

    /// Completes the indicator and hides it, whether or not the load succeeded, then runs
    /// the post-load script. The script result is not observed.
    pub fn on_load_finished(&mut self, success: bool) {
        if !success {
            debug!(handle = %self.handle, "load reported failure");
        }
        self.progress.value = 100;
        self.progress.visible = false;

        let result = self.view.evaluate_script(&self.post_load_script);
        self.log_failure("inject post-load script", result);
    }

    pub fn on_title_changed(&mut self, title: &str) -> TabNotification {
        TabNotification::TitleChanged(title.to_string())
    }

    /// Routes an engine event to the matching callback.
    pub fn handle_event(&mut self, event: ViewEvent) -> Option<TabNotification> {
        match event {
            ViewEvent::LoadStarted { url } => {
                self.on_load_started(&url);
                None
            }
            ViewEvent::Progress(percent) => {
                self.on_progress(percent);
                None
            }
            ViewEvent::LoadFinished { success } => {
                self.on_load_finished(success);
                None
            }
            ViewEvent::TitleChanged(title) => Some(self.on_title_changed(&title)),
        }
    }

    pub fn snapshot(&self, index: usize) -> TabSnapshot {
        TabSnapshot {
            index,
            title: self.title.clone(),
            address: self.address_text.clone(),
            progress: self.progress,
        }
    }

    pub(crate) fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        let result = self.view.set_visible(visible);
        self.log_failure("set_visible", result);
    }

    pub(crate) fn set_bounds(&mut self, bounds: ContentBounds) {
        let result = self.view.set_bounds(bounds);
        self.log_failure("set_bounds", result);
    }

    fn log_failure(&self, call: &str, result: Result<(), ShellError>) {
        if let Err(e) = result {
            warn!(handle = %self.handle, call, error = %e, "engine call failed");
        }
    }
}
