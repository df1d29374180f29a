use std::cell::RefCell;
use std::rc::Rc;

use cbrowser::engine::{RenderingView, ViewEvent};
use cbrowser::managers::browser_tab::{normalize_address, BrowserTab, TabNotification};
use cbrowser::types::errors::ShellError;
use cbrowser::types::tab::{ContentBounds, Progress, TabHandle};
use rstest::rstest;

/// View that records calls and can be told to fail them.
#[derive(Clone, Default)]
struct FakeView {
    calls: Rc<RefCell<Vec<String>>>,
    failing: bool,
}

impl FakeView {
    fn record(&self, call: String) -> Result<(), ShellError> {
        self.calls.borrow_mut().push(call);
        if self.failing {
            Err(ShellError::Engine("view gone".to_string()))
        } else {
            Ok(())
        }
    }
}

impl RenderingView for FakeView {
    fn navigate(&mut self, url: &str) -> Result<(), ShellError> {
        self.record(format!("navigate {}", url))
    }
    fn go_back(&mut self) -> Result<(), ShellError> {
        self.record("back".to_string())
    }
    fn go_forward(&mut self) -> Result<(), ShellError> {
        self.record("forward".to_string())
    }
    fn reload(&mut self) -> Result<(), ShellError> {
        self.record("reload".to_string())
    }
    fn evaluate_script(&mut self, script: &str) -> Result<(), ShellError> {
        self.record(format!("script {}", script))
    }
    fn set_visible(&mut self, visible: bool) -> Result<(), ShellError> {
        self.record(format!("visible {}", visible))
    }
    fn set_bounds(&mut self, bounds: ContentBounds) -> Result<(), ShellError> {
        self.record(format!("bounds {}x{}", bounds.width, bounds.height))
    }
}

const POST_LOAD: &str = "/* post-load */";

fn tab_with(view: FakeView) -> BrowserTab<FakeView> {
    BrowserTab::new(
        TabHandle::new(),
        "https://cbrowser.colebolebole.site/",
        "New Tab",
        view,
        Rc::from(POST_LOAD),
    )
}

#[test]
fn new_tab_mirrors_url_and_title() {
    let tab = tab_with(FakeView::default());
    assert_eq!(tab.address_text(), "https://cbrowser.colebolebole.site/");
    assert_eq!(tab.title(), "New Tab");
    assert_eq!(tab.progress(), Progress { value: 0, visible: true });
}

#[rstest]
#[case("example.com", "http://example.com")]
#[case("https://example.com", "https://example.com")]
#[case("http://example.com/a?b=c", "http://example.com/a?b=c")]
#[case("file:///tmp/index.html", "file:///tmp/index.html")]
#[case("about:blank", "about:blank")]
#[case("localhost:8080", "http://localhost:8080")]
#[case("not a url", "http://not a url")]
#[case("httpbin.org", "http://httpbin.org")]
#[case("ftp://ftp.example.com/pub", "ftp://ftp.example.com/pub")]
#[case("data:text/html,hello", "data:text/html,hello")]
#[case("mailto:x@example.com", "mailto:x@example.com")]
#[case("example.com:8080/path", "http://example.com:8080/path")]
fn submit_address_navigates_to_normalized_url(#[case] input: &str, #[case] expected: &str) {
    let view = FakeView::default();
    let calls = view.calls.clone();
    let mut tab = tab_with(view);

    tab.set_address_text(input);
    let url = tab.submit_address();

    assert_eq!(url, expected);
    assert_eq!(normalize_address(input), expected);
    assert_eq!(*calls.borrow(), vec![format!("navigate {}", expected)]);
}

#[test]
fn navigation_buttons_delegate_to_view() {
    let view = FakeView::default();
    let calls = view.calls.clone();
    let mut tab = tab_with(view);

    tab.go_back();
    tab.go_forward();
    tab.reload();

    assert_eq!(*calls.borrow(), vec!["back", "forward", "reload"]);
}

#[test]
fn progress_then_finish_ends_complete_and_hidden() {
    let mut tab = tab_with(FakeView::default());
    tab.on_progress(55);
    assert_eq!(tab.progress(), Progress { value: 55, visible: true });

    tab.on_load_finished(true);
    assert_eq!(tab.progress(), Progress { value: 100, visible: false });
}

#[test]
fn failed_load_behaves_like_success() {
    let mut ok = tab_with(FakeView::default());
    let mut failed = tab_with(FakeView::default());
    ok.on_progress(55);
    failed.on_progress(55);

    ok.on_load_finished(true);
    failed.on_load_finished(false);

    assert_eq!(failed.progress(), Progress { value: 100, visible: false });
    assert_eq!(failed.progress(), ok.progress());
}

#[test]
fn every_finished_load_injects_post_load_script() {
    let view = FakeView::default();
    let calls = view.calls.clone();
    let mut tab = tab_with(view);

    tab.on_load_finished(true);
    tab.on_load_finished(false);

    let expected = format!("script {}", POST_LOAD);
    assert_eq!(*calls.borrow(), vec![expected.clone(), expected]);
}

#[test]
fn injection_failure_is_ignored() {
    let view = FakeView { failing: true, ..FakeView::default() };
    let mut tab = tab_with(view);

    tab.on_load_finished(true);

    assert_eq!(tab.progress(), Progress { value: 100, visible: false });
}

#[test]
fn load_start_resets_and_shows_progress() {
    let mut tab = tab_with(FakeView::default());
    tab.on_progress(80);
    tab.on_load_finished(true);

    tab.on_load_started("https://example.com/next");

    assert_eq!(tab.progress(), Progress { value: 0, visible: true });
    assert_eq!(tab.address_text(), "https://example.com/next");
}

#[test]
fn progress_is_capped_at_one_hundred() {
    let mut tab = tab_with(FakeView::default());
    tab.on_progress(180);
    assert_eq!(tab.progress().value, 100);
}

#[test]
fn title_change_is_raised_for_the_window() {
    let mut tab = tab_with(FakeView::default());
    assert_eq!(
        tab.handle_event(ViewEvent::TitleChanged("Example Site".to_string())),
        Some(TabNotification::TitleChanged("Example Site".to_string()))
    );
    // The label itself belongs to the window.
    assert_eq!(tab.title(), "New Tab");
}

#[test]
fn load_events_raise_nothing() {
    let mut tab = tab_with(FakeView::default());
    assert_eq!(tab.handle_event(ViewEvent::LoadStarted { url: "https://a.test/".into() }), None);
    assert_eq!(tab.handle_event(ViewEvent::Progress(40)), None);
    assert_eq!(tab.handle_event(ViewEvent::LoadFinished { success: false }), None);
    assert_eq!(tab.progress(), Progress { value: 100, visible: false });
}

#[test]
fn snapshot_reflects_tab_state() {
    let mut tab = tab_with(FakeView::default());
    tab.on_progress(30);
    let snap = tab.snapshot(3);
    assert_eq!(snap.index, 3);
    assert_eq!(snap.title, "New Tab");
    assert_eq!(snap.address, "https://cbrowser.colebolebole.site/");
    assert_eq!(snap.progress, Progress { value: 30, visible: true });
}
