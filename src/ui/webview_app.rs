//! WebView-based browser application using `wry` + `tao`.
//!
//! Architecture:
//! - The chrome page is served over the `cbrowser://` custom protocol into a child
//!   webview across the top of the window.
//! - Every tab gets its own child webview below the chrome, built with the spoofed
//!   User-Agent so even the initial request carries it.
//! - Page-load, title and IPC callbacks of content views are forwarded as `UserEvent`s and
//!   applied on the event loop.

use std::borrow::Cow;
use std::rc::Rc;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use tracing::{debug, error, info, warn};
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::app::App;
use crate::config::BrowserConfig;
use crate::engine::script;
use crate::engine::{RenderingView, ViewEvent, ViewFactory, ViewRequest};
use crate::types::errors::ShellError;
use crate::types::tab::{ContentBounds, TabHandle};
use crate::ui::chrome::{chrome_html, CHROME_SCHEME, CHROME_URL};

#[derive(Debug)]
enum UserEvent {
    /// IPC message posted by the chrome page.
    Chrome(String),
    /// Engine callback from the content view of a tab.
    View(TabHandle, ViewEvent),
}

fn to_rect(bounds: ContentBounds) -> Rect {
    Rect {
        position: LogicalPosition::new(bounds.x, bounds.y).into(),
        size: LogicalSize::new(bounds.width, bounds.height).into(),
    }
}

fn engine_error(e: wry::Error) -> ShellError {
    ShellError::Engine(e.to_string())
}

// ─── Content views ───

/// A tab's content webview.
pub struct WryView {
    webview: WebView,
}

impl RenderingView for WryView {
    fn navigate(&mut self, url: &str) -> Result<(), ShellError> {
        self.webview.load_url(url).map_err(engine_error)
    }

    fn go_back(&mut self) -> Result<(), ShellError> {
        self.webview.evaluate_script("history.back()").map_err(engine_error)
    }

    fn go_forward(&mut self) -> Result<(), ShellError> {
        self.webview.evaluate_script("history.forward()").map_err(engine_error)
    }

    fn reload(&mut self) -> Result<(), ShellError> {
        self.webview.reload().map_err(engine_error)
    }

    fn evaluate_script(&mut self, script: &str) -> Result<(), ShellError> {
        self.webview.evaluate_script(script).map_err(engine_error)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), ShellError> {
        self.webview.set_visible(visible).map_err(engine_error)
    }

    fn set_bounds(&mut self, bounds: ContentBounds) -> Result<(), ShellError> {
        self.webview.set_bounds(to_rect(bounds)).map_err(engine_error)
    }
}

/// Parent the child webviews are built into.
///
/// On Linux this is a `gtk::Fixed` packed into tao's default vbox, which works under both
/// X11 and Wayland. Elsewhere it is the native window itself.
struct ViewHost {
    window: Rc<Window>,
    #[cfg(target_os = "linux")]
    fixed: gtk::Fixed,
}

impl ViewHost {
    fn new(window: Rc<Window>) -> Result<Self, ShellError> {
        #[cfg(target_os = "linux")]
        let fixed = {
            use gtk::prelude::*;
            use tao::platform::unix::WindowExtUnix;
            let vbox = window
                .default_vbox()
                .ok_or_else(|| ShellError::WindowBuild("window has no GTK vbox".to_string()))?;
            let fixed = gtk::Fixed::new();
            vbox.pack_start(&fixed, true, true, 0);
            fixed.show_all();
            fixed
        };

        Ok(Self {
            window,
            #[cfg(target_os = "linux")]
            fixed,
        })
    }

    fn build(&self, builder: WebViewBuilder<'_>) -> Result<WebView, ShellError> {
        #[cfg(target_os = "linux")]
        let built = {
            use wry::WebViewBuilderExtUnix;
            builder.build_gtk(&self.fixed)
        };
        #[cfg(not(target_os = "linux"))]
        let built = builder.build_as_child(self.window.as_ref());

        built.map_err(|e| ShellError::WebViewBuild(e.to_string()))
    }
}

/// Builds content webviews as children of the main window.
struct WryViewFactory {
    host: ViewHost,
    proxy: EventLoopProxy<UserEvent>,
}

impl ViewFactory for WryViewFactory {
    type View = WryView;

    fn create_view(
        &mut self,
        handle: TabHandle,
        request: &ViewRequest<'_>,
    ) -> Result<WryView, ShellError> {
        let load_proxy = self.proxy.clone();
        let title_proxy = self.proxy.clone();
        let ipc_proxy = self.proxy.clone();

        let mut builder = WebViewBuilder::new()
            .with_url(request.url)
            // Applied by the engine to every request of this view, the first one included.
            .with_user_agent(request.user_agent.as_str())
            // Keeps cookies, storage and cache in memory for the lifetime of the view.
            .with_incognito(request.settings.off_the_record)
            .with_bounds(to_rect(request.bounds))
            .with_devtools(cfg!(debug_assertions))
            .with_on_page_load_handler(move |event, url| {
                let event = match event {
                    PageLoadEvent::Started => ViewEvent::LoadStarted { url },
                    PageLoadEvent::Finished => ViewEvent::LoadFinished { success: true },
                };
                let _ = load_proxy.send_event(UserEvent::View(handle, event));
            })
            .with_document_title_changed_handler(move |title| {
                let _ = title_proxy.send_event(UserEvent::View(handle, ViewEvent::TitleChanged(title)));
            })
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                if let Some(event) = script::parse_page_message(msg.body()) {
                    let _ = ipc_proxy.send_event(UserEvent::View(handle, event));
                }
            });
        for init in request.initialization_scripts {
            builder = builder.with_initialization_script(init.as_str());
        }

        let webview = self.host.build(builder)?;
        debug!(%handle, url = request.url, "content view created");
        Ok(WryView { webview })
    }
}

// ─── Chrome view ───

fn chrome_bounds(width: u32, chrome_height: u32) -> ContentBounds {
    ContentBounds { x: 0, y: 0, width, height: chrome_height }
}

fn build_chrome_view(
    host: &ViewHost,
    proxy: EventLoopProxy<UserEvent>,
    config: &BrowserConfig,
) -> Result<WebView, ShellError> {
    let builder = WebViewBuilder::new()
        .with_custom_protocol(CHROME_SCHEME.into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header(wry::http::header::CONTENT_TYPE, "text/html; charset=utf-8")
                .body(Cow::Owned(chrome_html().into_bytes()))
                .unwrap_or_else(|_| wry::http::Response::new(Cow::Borrowed(&[][..])))
        })
        .with_url(CHROME_URL)
        .with_bounds(to_rect(chrome_bounds(config.window.width, config.chrome_height)))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = proxy.send_event(UserEvent::Chrome(msg.body().clone()));
        })
        .with_incognito(config.engine.off_the_record)
        .with_devtools(cfg!(debug_assertions));
    host.build(builder)
}

fn refresh_chrome(chrome: &WebView, app: &App<WryViewFactory>) {
    if let Err(e) = chrome.evaluate_script(&app.chrome_update_script()) {
        warn!(error = %e, "failed to update chrome");
    }
}

// ─── Main entry point ───

pub fn run() -> Result<(), ShellError> {
    let config = BrowserConfig::global().clone();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let native_window = WindowBuilder::new()
        .with_title(config.window.title.as_str())
        .with_position(tao::dpi::LogicalPosition::new(config.window.x, config.window.y))
        .with_inner_size(tao::dpi::LogicalSize::new(config.window.width, config.window.height))
        .build(&event_loop)
        .map_err(|e| ShellError::WindowBuild(e.to_string()))?;
    let host = ViewHost::new(Rc::new(native_window))?;
    let native_window = Rc::clone(&host.window);

    let chrome = build_chrome_view(&host, proxy.clone(), &config)?;
    let chrome_height = config.chrome_height;

    let factory = WryViewFactory { host, proxy };
    let mut app = App::new(config, factory)?;
    app.startup()?;
    info!("event loop starting");

    let mut app = Some(app);
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Some(app) = app.take() {
                    app.shutdown();
                }
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                let size = size.to_logical::<u32>(native_window.scale_factor());
                let bounds = ContentBounds {
                    x: 0,
                    y: chrome_height as i32,
                    width: size.width,
                    height: size.height.saturating_sub(chrome_height),
                };
                let chrome_rect = to_rect(chrome_bounds(size.width, chrome_height));
                if let Err(e) = chrome.set_bounds(chrome_rect) {
                    warn!(error = %e, "failed to resize chrome");
                }
                if let Some(app) = app.as_mut() {
                    app.window.set_content_bounds(bounds);
                }
            }

            Event::UserEvent(UserEvent::Chrome(body)) => {
                let Some(app) = app.as_mut() else { return };
                debug!(body = %body.chars().take(200).collect::<String>(), "chrome message");
                match app.handle_chrome_message(&body) {
                    Ok(true) => refresh_chrome(&chrome, app),
                    Ok(false) => {}
                    Err(e) => error!(error = %e, "chrome command failed"),
                }
            }

            Event::UserEvent(UserEvent::View(handle, view_event)) => {
                let Some(app) = app.as_mut() else { return };
                match app.handle_view_event(handle, view_event) {
                    Ok(()) => refresh_chrome(&chrome, app),
                    // The tab was closed while the engine still had events queued.
                    Err(e) => debug!(error = %e, "dropping view event"),
                }
            }

            _ => {}
        }
    })
}
