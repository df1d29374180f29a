//! Display-less rendering backend.
//!
//! Views record every engine call in a shared [`Journal`] instead of rendering. Each
//! navigation also builds the outgoing request and runs it through the view's
//! User-Agent override, so the journal shows the headers the engine would have sent.

use std::cell::RefCell;
use std::rc::Rc;

use http::header::{HeaderValue, USER_AGENT};
use http::Request;
use tracing::debug;

use crate::engine::intercept::UserAgentOverride;
use crate::engine::{RenderingView, ViewFactory, ViewRequest};
use crate::types::errors::ShellError;
use crate::types::tab::{ContentBounds, TabHandle};

/// User-Agent a headless view would send if nothing overrode it.
pub const NATIVE_USER_AGENT: &str = "cbrowser-headless/0.1";

/// One call observed on a headless view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Created { url: String, initialization_scripts: usize, off_the_record: bool },
    /// A request left the view with this User-Agent.
    Request { url: String, user_agent: String },
    Navigate(String),
    Back,
    Forward,
    Reload,
    EvaluateScript(String),
    SetVisible(bool),
    SetBounds(ContentBounds),
    Released,
}

/// Shared, single-threaded log of view calls.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<(TabHandle, ViewCall)>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, handle: TabHandle, call: ViewCall) {
        debug!(%handle, ?call, "headless view call");
        self.0.borrow_mut().push((handle, call));
    }

    /// All calls recorded so far, in order.
    pub fn entries(&self) -> Vec<(TabHandle, ViewCall)> {
        self.0.borrow().clone()
    }

    /// Calls recorded for one tab, in order.
    pub fn calls_for(&self, handle: TabHandle) -> Vec<ViewCall> {
        self.0
            .borrow()
            .iter()
            .filter(|(h, _)| *h == handle)
            .map(|(_, c)| c.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// View that journals instead of rendering.
pub struct HeadlessView {
    handle: TabHandle,
    journal: Journal,
    user_agent: UserAgentOverride,
}

impl HeadlessView {
    fn issue_request(&self, url: &str) {
        let mut request = Request::new(());
        if let Ok(uri) = url.parse() {
            *request.uri_mut() = uri;
        }
        request
            .headers_mut()
            .insert(USER_AGENT, HeaderValue::from_static(NATIVE_USER_AGENT));
        self.user_agent.intercept(&mut request);

        let sent = request
            .headers()
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        self.journal.record(
            self.handle,
            ViewCall::Request { url: url.to_string(), user_agent: sent },
        );
    }
}

impl RenderingView for HeadlessView {
    fn navigate(&mut self, url: &str) -> Result<(), ShellError> {
        self.journal.record(self.handle, ViewCall::Navigate(url.to_string()));
        self.issue_request(url);
        Ok(())
    }

    fn go_back(&mut self) -> Result<(), ShellError> {
        self.journal.record(self.handle, ViewCall::Back);
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), ShellError> {
        self.journal.record(self.handle, ViewCall::Forward);
        Ok(())
    }

    fn reload(&mut self) -> Result<(), ShellError> {
        self.journal.record(self.handle, ViewCall::Reload);
        Ok(())
    }

    fn evaluate_script(&mut self, script: &str) -> Result<(), ShellError> {
        self.journal.record(self.handle, ViewCall::EvaluateScript(script.to_string()));
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), ShellError> {
        self.journal.record(self.handle, ViewCall::SetVisible(visible));
        Ok(())
    }

    fn set_bounds(&mut self, bounds: ContentBounds) -> Result<(), ShellError> {
        self.journal.record(self.handle, ViewCall::SetBounds(bounds));
        Ok(())
    }
}

impl Drop for HeadlessView {
    fn drop(&mut self) {
        self.journal.record(self.handle, ViewCall::Released);
    }
}

/// Factory producing [`HeadlessView`]s that share one journal.
#[derive(Debug, Clone, Default)]
pub struct HeadlessFactory {
    journal: Journal,
}

impl HeadlessFactory {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}

impl ViewFactory for HeadlessFactory {
    type View = HeadlessView;

    fn create_view(
        &mut self,
        handle: TabHandle,
        request: &ViewRequest<'_>,
    ) -> Result<HeadlessView, ShellError> {
        self.journal.record(
            handle,
            ViewCall::Created {
                url: request.url.to_string(),
                initialization_scripts: request.initialization_scripts.len(),
                off_the_record: request.settings.off_the_record,
            },
        );
        let view = HeadlessView {
            handle,
            journal: self.journal.clone(),
            user_agent: request.user_agent.clone(),
        };
        // The initial load goes through the same hook as every later request.
        view.issue_request(request.url);
        Ok(view)
    }
}
