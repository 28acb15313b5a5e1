//! Browser window using `wry` + `tao`.
//!
//! Layout:
//! - one chrome webview on top (toolbar, URL field, tab strip), loaded from
//!   `resources/ui/chrome.html`
//! - one content webview per tab below it; only the active one is visible
//!
//! Chrome → Rust goes through `window.ipc.postMessage()` (see [`crate::ipc`]),
//! Rust → chrome through `evaluate_script`. Everything, including engine
//! notifications, is funnelled into the tao event loop as a [`UserEvent`], so
//! the controller is only ever touched from that one thread.

use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, info, warn};
use wry::{WebView, WebViewBuilder};

use crate::app::App;
use crate::ipc::{self, Inbound};
use crate::logging;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::{AppError, EngineError};
use crate::types::settings::BrowserSettings;
use crate::ui::wry_engine::{chrome_rect, UserEvent, WryEngine};

const CHROME_HTML: &str = include_str!("../../resources/ui/chrome.html");

/// Pushes the current tab strip and URL bar to the chrome.
fn sync_chrome(app: &App<WryEngine>, chrome: &WebView) {
    let script = ipc::chrome_update_script(&app.chrome_state());
    if let Err(e) = chrome.evaluate_script(&script) {
        warn!(error = %e, "failed to update chrome");
    }
}

/// Fits the chrome and every content view to the window.
fn layout(app: &mut App<WryEngine>, chrome: &WebView) {
    let (width, height) = app.tabs().engine().logical_size();
    if let Err(e) = chrome.set_bounds(chrome_rect(width)) {
        warn!(error = %e, "failed to resize chrome");
    }
    for view in app.tabs_mut().views_mut() {
        if let Err(e) = view.resize(width, height) {
            warn!(error = %e, "failed to resize page view");
        }
    }
}

fn load_settings() -> BrowserSettings {
    let mut engine = SettingsEngine::new(None);
    let loaded = engine.load();
    let settings = engine.get_settings().clone();
    logging::init(&settings.logging.level);
    if let Err(e) = loaded {
        warn!(path = %engine.get_config_path().display(), error = %e, "ignoring settings file");
    }
    settings
}

// ─── Main entry point ───

pub fn run() -> Result<(), AppError> {
    let settings = load_settings();
    info!("Starting Nimbus {}", env!("CARGO_PKG_VERSION"));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(settings.window.title.as_str())
        .with_position(LogicalPosition::new(
            f64::from(settings.window.x),
            f64::from(settings.window.y),
        ))
        .with_inner_size(LogicalSize::new(
            f64::from(settings.window.width),
            f64::from(settings.window.height),
        ))
        .build(&event_loop)
        .map_err(|e| AppError::Window(e.to_string()))?;

    let width = window
        .inner_size()
        .to_logical::<f64>(window.scale_factor())
        .width;
    let ipc_proxy = proxy.clone();
    let chrome = WebViewBuilder::new()
        .with_html(CHROME_HTML)
        .with_bounds(chrome_rect(width))
        .with_ipc_handler(move |request: wry::http::Request<String>| {
            match ipc::parse_message(request.body()) {
                Ok(Inbound::Ready) => {
                    let _ = ipc_proxy.send_event(UserEvent::ChromeReady);
                }
                Ok(Inbound::Command(command)) => {
                    let _ = ipc_proxy.send_event(UserEvent::Command(command));
                }
                Err(e) => warn!(error = %e, "dropping chrome message"),
            }
        })
        .with_devtools(cfg!(debug_assertions))
        .build_as_child(&window)
        .map_err(|e| EngineError::ViewCreation(e.to_string()))?;

    let engine = WryEngine::new(window, proxy);
    let mut app = App::new(engine, settings)?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => layout(&mut app, &chrome),

            Event::UserEvent(user_event) => {
                match user_event {
                    UserEvent::Command(command) => {
                        debug!(?command, "ui command");
                        if let Err(e) = app.handle_command(command) {
                            warn!(error = %e, "command failed");
                        }
                    }
                    UserEvent::Page(page_event) => app.handle_page_event(page_event),
                    UserEvent::ChromeReady => {}
                }
                sync_chrome(&app, &chrome);
            }

            _ => {}
        }
    })
}
