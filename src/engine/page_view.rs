// Page view adapter
// Wraps one engine view and remembers what the engine last reported about it.

use crate::engine::EngineView;
use crate::types::errors::EngineError;
use crate::types::tab::TabId;

/// One tab's engine view plus the last URL the engine reported for it.
pub struct PageView<V: EngineView> {
    id: TabId,
    view: V,
    current_url: String,
}

impl<V: EngineView> PageView<V> {
    /// Wraps a freshly created view that was bound to `url`.
    pub fn new(id: TabId, view: V, url: &str) -> Self {
        Self {
            id,
            view,
            current_url: url.to_string(),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    /// Starts loading `url`. The reported URL only moves once the engine
    /// raises `UrlChanged`, so during a redirect chain it may differ from
    /// what was requested here.
    pub fn set_url(&mut self, url: &str) -> Result<(), EngineError> {
        self.view.set_url(url)
    }

    pub fn back(&mut self) -> Result<(), EngineError> {
        self.view.back()
    }

    pub fn forward(&mut self) -> Result<(), EngineError> {
        self.view.forward()
    }

    pub fn reload(&mut self) -> Result<(), EngineError> {
        self.view.reload()
    }

    /// Last URL reported by the engine.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn title(&self) -> String {
        self.view.title()
    }

    /// Applies an engine `UrlChanged` notification.
    pub fn record_url(&mut self, url: &str) {
        self.current_url = url.to_string();
    }

    pub fn set_visible(&mut self, visible: bool) -> Result<(), EngineError> {
        self.view.set_visible(visible)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
