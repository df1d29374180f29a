//! CBrowser — a minimal tabbed web browser shell.
//!
//! Entry point: opens the browser window with one tab on the default start page.
//! When built without the `gui` feature, drives the window logic against the headless
//! backend and prints what the engine would have been asked to do.

use std::process::ExitCode;

use tracing::{error, Level};
#[cfg(not(feature = "gui"))]
use tracing::warn;
use tracing_subscriber::FmtSubscriber;

fn init_tracing() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {}", e);
    }
}

#[cfg(feature = "gui")]
fn main() -> ExitCode {
    init_tracing();
    match cbrowser::ui::webview_app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "CBrowser failed to start");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "gui"))]
fn main() -> ExitCode {
    init_tracing();
    match demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "demo failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "gui"))]
fn demo() -> Result<(), cbrowser::types::errors::ShellError> {
    use cbrowser::app::App;
    use cbrowser::config::BrowserConfig;
    use cbrowser::engine::headless::{HeadlessFactory, Journal};
    use cbrowser::engine::ViewEvent;
    use cbrowser::managers::main_window::MainWindowTrait;

    let journal = Journal::new();
    let mut app = App::new(BrowserConfig::global().clone(), HeadlessFactory::new(journal.clone()))?;
    let first = app.startup()?;

    app.handle_chrome_message(r#"{"cmd":"submit_address","text":"example.com"}"#)?;
    let events = [
        ViewEvent::LoadStarted { url: "http://example.com/".into() },
        ViewEvent::Progress(55),
        ViewEvent::LoadFinished { success: true },
        ViewEvent::TitleChanged("Example Domain".into()),
    ];
    for event in events {
        if let Err(e) = app.handle_view_event(first, event) {
            warn!(error = %e, "view event was not delivered");
        }
    }
    app.handle_chrome_message(r#"{"cmd":"new_tab"}"#)?;

    for (handle, call) in journal.entries() {
        println!("{}  {:?}", handle, call);
    }
    for tab in app.window.snapshots() {
        println!("[{}] {} — {} ({:?})", tab.index, tab.title, tab.address, tab.progress);
    }
    println!("{} tab(s) open", app.window.tab_count());
    app.shutdown();
    Ok(())
}
