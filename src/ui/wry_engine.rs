//! The platform webview as a [`WebEngine`].
//!
//! Each tab gets its own child webview laid out under the chrome. Engine
//! callbacks never touch shell state: they post [`PageEvent`]s tagged with
//! the tab id onto the tao event loop, where the controller applies them.
//!
//! In-page URL changes (fragment jumps, `history.pushState`) raise no
//! callback in the binding and are not reported.

use std::sync::{Arc, Mutex};

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::debug;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::engine::{EngineView, PageEvent, ViewPolicy, WebEngine};
use crate::types::command::UiCommand;
use crate::types::errors::EngineError;
use crate::types::tab::TabId;

/// Height of the toolbar plus tab strip, in logical pixels.
pub const CHROME_HEIGHT: f64 = 84.0;

/// Everything delivered to the event loop from outside it.
#[derive(Debug)]
pub enum UserEvent {
    Page(PageEvent),
    Command(UiCommand),
    /// The chrome finished loading and wants its first render.
    ChromeReady,
}

pub fn chrome_rect(width: f64) -> Rect {
    Rect {
        position: wry::dpi::Position::Logical(LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(LogicalSize::new(width, CHROME_HEIGHT)),
    }
}

pub fn content_rect(width: f64, height: f64) -> Rect {
    Rect {
        position: wry::dpi::Position::Logical(LogicalPosition::new(0.0, CHROME_HEIGHT)),
        size: wry::dpi::Size::Logical(LogicalSize::new(
            width,
            (height - CHROME_HEIGHT).max(0.0),
        )),
    }
}

pub struct WryEngine {
    window: Window,
    proxy: EventLoopProxy<UserEvent>,
}

impl WryEngine {
    pub fn new(window: Window, proxy: EventLoopProxy<UserEvent>) -> Self {
        Self { window, proxy }
    }

    /// Inner size of the window in logical pixels.
    pub fn logical_size(&self) -> (f64, f64) {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        (size.width, size.height)
    }
}

impl WebEngine for WryEngine {
    type View = WryView;

    fn create_view(
        &mut self,
        tab: TabId,
        url: &str,
        policy: ViewPolicy,
    ) -> Result<WryView, EngineError> {
        let (width, height) = self.logical_size();
        let title = Arc::new(Mutex::new(String::new()));
        let title_slot = Arc::clone(&title);
        let load_proxy = self.proxy.clone();
        let title_proxy = self.proxy.clone();

        // An incognito view gets a non-persistent data store: no cookie
        // jar or disk cache survives it.
        let incognito = !policy.persistent_cookies || !policy.http_cache;

        let webview = WebViewBuilder::new()
            .with_url(url)
            .with_bounds(content_rect(width, height))
            .with_incognito(incognito)
            .with_devtools(cfg!(debug_assertions))
            .with_on_page_load_handler(move |event, url| {
                // Started carries the URL being loaded, Finished the one that
                // ended up displayed after redirects.
                let _ = load_proxy.send_event(UserEvent::Page(PageEvent::url_changed(tab, url)));
                if let PageLoadEvent::Finished = event {
                    // The binding does not report failures; error pages
                    // still finish and still have a title.
                    let _ = load_proxy.send_event(UserEvent::Page(PageEvent::load_finished(tab, true)));
                }
            })
            .with_document_title_changed_handler(move |new_title| {
                if let Ok(mut slot) = title_slot.lock() {
                    *slot = new_title.clone();
                }
                let _ = title_proxy.send_event(UserEvent::Page(PageEvent::title_changed(tab, new_title)));
            })
            .build_as_child(&self.window)
            .map_err(|e| EngineError::ViewCreation(e.to_string()))?;

        debug!(tab = %tab, url, incognito, "created webview");
        Ok(WryView { webview, title })
    }
}

pub struct WryView {
    webview: WebView,
    title: Arc<Mutex<String>>,
}

impl WryView {
    pub fn resize(&self, width: f64, height: f64) -> Result<(), EngineError> {
        self.webview
            .set_bounds(content_rect(width, height))
            .map_err(|e| EngineError::ViewCall(e.to_string()))
    }

    fn eval(&self, script: &str) -> Result<(), EngineError> {
        self.webview
            .evaluate_script(script)
            .map_err(|e| EngineError::ViewCall(e.to_string()))
    }
}

impl EngineView for WryView {
    fn set_url(&mut self, url: &str) -> Result<(), EngineError> {
        self.webview
            .load_url(url)
            .map_err(|e| EngineError::Navigation(e.to_string()))
    }

    fn back(&mut self) -> Result<(), EngineError> {
        self.eval("history.back()")
    }

    fn forward(&mut self) -> Result<(), EngineError> {
        self.eval("history.forward()")
    }

    fn reload(&mut self) -> Result<(), EngineError> {
        self.eval("location.reload()")
    }

    fn title(&self) -> String {
        self.title
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError> {
        self.webview
            .set_visible(visible)
            .map_err(|e| EngineError::ViewCall(e.to_string()))
    }
}
