use tracing::{debug, warn};

use crate::engine::{EngineView, PageView, ViewPolicy, WebEngine};
use crate::types::errors::EngineError;
use crate::types::tab::{TabId, TabInfo};

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    type View: EngineView;

    fn open_tab(&mut self, url: &str, label: &str) -> Result<usize, EngineError>;
    fn open_default_tab(&mut self) -> Result<usize, EngineError>;
    fn close_tab(&mut self, index: usize) -> bool;
    fn switch_to(&mut self, index: usize) -> bool;
    fn double_click_on_empty_area(&mut self) -> Result<usize, EngineError>;
    fn tab_count(&self) -> usize;
    fn active_index(&self) -> usize;
    fn active_id(&self) -> Option<TabId>;
    fn index_of(&self, tab: TabId) -> Option<usize>;
    fn label(&self, index: usize) -> Option<&str>;
    fn page(&self, index: usize) -> Option<&PageView<Self::View>>;
    fn active_page(&self) -> Option<&PageView<Self::View>>;
    fn active_page_mut(&mut self) -> Option<&mut PageView<Self::View>>;
    fn record_url(&mut self, tab: TabId, url: &str) -> bool;
    fn apply_title(&mut self, tab: TabId) -> bool;
    fn set_label(&mut self, tab: TabId, label: &str) -> bool;
    fn snapshot(&self) -> Vec<TabInfo>;
}

/// One open page: the adapter around its engine view plus its strip label.
struct Tab<V: EngineView> {
    page: PageView<V>,
    label: String,
}

/// Ordered tab collection with an active index.
///
/// Once the first tab is open there is always at least one: closing the
/// last remaining tab is refused.
pub struct TabManager<E: WebEngine> {
    engine: E,
    tabs: Vec<Tab<E::View>>,
    active: usize,
    home_url: String,
    new_tab_label: String,
}

impl<E: WebEngine> TabManager<E> {
    pub fn new(engine: E, home_url: &str, new_tab_label: &str) -> Self {
        Self {
            engine,
            tabs: Vec::new(),
            active: 0,
            home_url: home_url.to_string(),
            new_tab_label: new_tab_label.to_string(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// All views, in strip order.
    pub fn views_mut(&mut self) -> impl Iterator<Item = &mut E::View> {
        self.tabs.iter_mut().map(|t| t.page.view_mut())
    }

    fn find(&self, tab: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.page.id() == tab)
    }

    /// Shows the active view and hides every other one.
    fn sync_visibility(&mut self) {
        let active = self.active;
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            if let Err(e) = tab.page.set_visible(i == active) {
                warn!(tab = %tab.page.id(), error = %e, "failed to update view visibility");
            }
        }
    }
}

impl<E: WebEngine> TabManagerTrait for TabManager<E> {
    type View = E::View;

    /// Creates a tab bound to `url`, appends it and makes it active.
    /// Returns its index.
    fn open_tab(&mut self, url: &str, label: &str) -> Result<usize, EngineError> {
        let id = TabId::new();
        let view = self.engine.create_view(id, url, ViewPolicy::EPHEMERAL)?;
        self.tabs.push(Tab {
            page: PageView::new(id, view, url),
            label: label.to_string(),
        });
        self.active = self.tabs.len() - 1;
        self.sync_visibility();
        debug!(tab = %id, url, index = self.active, "opened tab");
        Ok(self.active)
    }

    fn open_default_tab(&mut self) -> Result<usize, EngineError> {
        let url = self.home_url.clone();
        let label = self.new_tab_label.clone();
        self.open_tab(&url, &label)
    }

    /// Close a tab. The sole remaining tab is never closed, and an
    /// out-of-range index is ignored. Returns whether a tab was removed.
    ///
    /// When the active tab goes, the tab that shifts into its position
    /// becomes active (the previous one if it was the last). Closing a tab
    /// left of the active one keeps the same tab active.
    fn close_tab(&mut self, index: usize) -> bool {
        if self.tabs.len() < 2 || index >= self.tabs.len() {
            return false;
        }

        let removed = self.tabs.remove(index);
        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            self.active = index.min(self.tabs.len() - 1);
        }
        self.sync_visibility();
        debug!(tab = %removed.page.id(), index, active = self.active, "closed tab");
        true
    }

    /// Switch the active tab. Out-of-range indices are ignored.
    fn switch_to(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.active = index;
        self.sync_visibility();
        true
    }

    /// The "double-click the empty tab strip" gesture.
    fn double_click_on_empty_area(&mut self) -> Result<usize, EngineError> {
        self.open_default_tab()
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn active_index(&self) -> usize {
        self.active
    }

    fn active_id(&self) -> Option<TabId> {
        self.tabs.get(self.active).map(|t| t.page.id())
    }

    fn index_of(&self, tab: TabId) -> Option<usize> {
        self.find(tab)
    }

    fn label(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|t| t.label.as_str())
    }

    fn page(&self, index: usize) -> Option<&PageView<E::View>> {
        self.tabs.get(index).map(|t| &t.page)
    }

    fn active_page(&self) -> Option<&PageView<E::View>> {
        self.page(self.active)
    }

    fn active_page_mut(&mut self) -> Option<&mut PageView<E::View>> {
        self.tabs.get_mut(self.active).map(|t| &mut t.page)
    }

    /// Stores an engine-reported URL on the tab. Returns `false` when the
    /// tab no longer exists.
    fn record_url(&mut self, tab: TabId, url: &str) -> bool {
        match self.find(tab) {
            Some(i) => {
                self.tabs[i].page.record_url(url);
                true
            }
            None => false,
        }
    }

    /// Sets the tab's label to its view's current page title.
    fn apply_title(&mut self, tab: TabId) -> bool {
        match self.find(tab) {
            Some(i) => {
                let title = self.tabs[i].page.title();
                self.tabs[i].label = title;
                true
            }
            None => false,
        }
    }

    fn set_label(&mut self, tab: TabId, label: &str) -> bool {
        match self.find(tab) {
            Some(i) => {
                self.tabs[i].label = label.to_string();
                true
            }
            None => false,
        }
    }

    fn snapshot(&self) -> Vec<TabInfo> {
        self.tabs
            .iter()
            .map(|t| TabInfo {
                id: t.page.id(),
                label: t.label.clone(),
                url: t.page.current_url().to_string(),
            })
            .collect()
    }
}
