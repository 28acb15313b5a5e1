//! Boundary to the embedded web engine.
//!
//! The shell never renders, fetches or stores anything itself. It asks an
//! engine for one view per tab, sends it navigation commands, and receives
//! [`PageEvent`]s back on the event-loop thread. Any engine providing this
//! capability set can be plugged in:
//! - `ui::wry_engine` (feature `gui`): the platform webview via `wry`
//! - [`headless::HeadlessEngine`]: an in-process engine for the demo and tests

pub mod headless;
pub mod page_view;

use crate::types::errors::EngineError;
use crate::types::tab::TabId;

pub use page_view::PageView;

/// Storage policy applied once when a view is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPolicy {
    pub persistent_cookies: bool,
    pub http_cache: bool,
}

impl ViewPolicy {
    /// No persistent cookies and no HTTP cache: nothing outlives the view.
    pub const EPHEMERAL: ViewPolicy = ViewPolicy {
        persistent_cookies: false,
        http_cache: false,
    };
}

/// Notification raised by a view, tagged with the tab that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEvent {
    pub tab: TabId,
    pub kind: PageEventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEventKind {
    /// The displayed URL changed (navigation, redirect or in-page).
    UrlChanged(String),
    /// A navigation completed. Error pages report `success: false`.
    LoadFinished { success: bool },
    /// `document.title` changed after the page had loaded.
    TitleChanged(String),
}

impl PageEvent {
    pub fn url_changed(tab: TabId, url: impl Into<String>) -> Self {
        Self {
            tab,
            kind: PageEventKind::UrlChanged(url.into()),
        }
    }

    pub fn load_finished(tab: TabId, success: bool) -> Self {
        Self {
            tab,
            kind: PageEventKind::LoadFinished { success },
        }
    }

    pub fn title_changed(tab: TabId, title: impl Into<String>) -> Self {
        Self {
            tab,
            kind: PageEventKind::TitleChanged(title.into()),
        }
    }
}

/// One engine view. Loading is asynchronous: results come back as events.
pub trait EngineView {
    fn set_url(&mut self, url: &str) -> Result<(), EngineError>;
    fn back(&mut self) -> Result<(), EngineError>;
    fn forward(&mut self) -> Result<(), EngineError>;
    fn reload(&mut self) -> Result<(), EngineError>;
    /// Title of the currently displayed page.
    fn title(&self) -> String;
    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError>;
}

/// Factory for views. Created views start loading `url` immediately.
pub trait WebEngine {
    type View: EngineView;

    fn create_view(
        &mut self,
        tab: TabId,
        url: &str,
        policy: ViewPolicy,
    ) -> Result<Self::View, EngineError>;
}
