//! Window controller for Nimbus.
//!
//! Owns the tab collection and the URL bar text for the lifetime of the
//! window. Created at startup, mutated only on the event-loop thread and
//! dropped at exit. UI actions arrive as [`UiCommand`]s, engine
//! notifications as [`PageEvent`]s; both are handled here.

use tracing::{debug, info};

use crate::engine::{PageEvent, PageEventKind, WebEngine};
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::url_normalizer;
use crate::types::command::UiCommand;
use crate::types::errors::EngineError;
use crate::types::settings::BrowserSettings;
use crate::types::tab::{ChromeState, TabId};

pub struct App<E: WebEngine> {
    settings: BrowserSettings,
    tabs: TabManager<E>,
    url_bar: String,
}

impl<E: WebEngine> App<E> {
    /// Creates the controller and opens the initial tab at the home page.
    pub fn new(engine: E, settings: BrowserSettings) -> Result<Self, EngineError> {
        let tabs = TabManager::new(
            engine,
            &settings.general.home_url,
            &settings.general.new_tab_label,
        );
        let mut app = Self {
            settings,
            tabs,
            url_bar: String::new(),
        };

        let home = app.settings.general.home_url.clone();
        let label = app.settings.general.initial_tab_label.clone();
        app.tabs.open_tab(&home, &label)?;
        app.on_active_tab_changed();
        info!(home = %home, "window ready");
        Ok(app)
    }

    pub fn tabs(&self) -> &TabManager<E> {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabManager<E> {
        &mut self.tabs
    }

    /// Current text of the URL bar.
    pub fn url_bar(&self) -> &str {
        &self.url_bar
    }

    // ─── Navigation ───

    /// Normalizes URL-bar text and loads it in the active tab.
    /// Returns the URL that was dispatched.
    pub fn navigate_to(&mut self, text: &str) -> Result<String, EngineError> {
        let url = url_normalizer::normalize(text, &self.settings.general.search_url);
        debug!(input = text, url = %url, "navigate");
        if let Some(page) = self.tabs.active_page_mut() {
            page.set_url(&url)?;
        }
        Ok(url)
    }

    pub fn navigate_home(&mut self) -> Result<(), EngineError> {
        let home = self.settings.general.home_url.clone();
        match self.tabs.active_page_mut() {
            Some(page) => page.set_url(&home),
            None => Ok(()),
        }
    }

    pub fn back(&mut self) -> Result<(), EngineError> {
        match self.tabs.active_page_mut() {
            Some(page) => page.back(),
            None => Ok(()),
        }
    }

    pub fn forward(&mut self) -> Result<(), EngineError> {
        match self.tabs.active_page_mut() {
            Some(page) => page.forward(),
            None => Ok(()),
        }
    }

    pub fn reload(&mut self) -> Result<(), EngineError> {
        match self.tabs.active_page_mut() {
            Some(page) => page.reload(),
            None => Ok(()),
        }
    }

    // ─── Tabs ───

    /// Opens a home-page tab labelled "New Tab" and makes it active.
    pub fn open_tab(&mut self) -> Result<usize, EngineError> {
        let index = self.tabs.open_default_tab()?;
        self.on_active_tab_changed();
        Ok(index)
    }

    pub fn close_tab(&mut self, index: usize) -> bool {
        let closed = self.tabs.close_tab(index);
        if closed {
            self.on_active_tab_changed();
        }
        closed
    }

    pub fn switch_to(&mut self, index: usize) -> bool {
        let switched = self.tabs.switch_to(index);
        if switched {
            self.on_active_tab_changed();
        }
        switched
    }

    /// Double-click on the tab strip. Only the empty area (`None`) opens a
    /// tab; double-clicking an existing tab does nothing.
    pub fn on_tab_bar_double_clicked(&mut self, hit: Option<usize>) -> Result<(), EngineError> {
        if hit.is_none() {
            self.tabs.double_click_on_empty_area()?;
            self.on_active_tab_changed();
        }
        Ok(())
    }

    // ─── Engine notifications ───

    /// Mirrors `url` into the URL bar if `tab` is the active tab.
    pub fn on_url_changed(&mut self, tab: TabId, url: &str) {
        if self.tabs.active_id() == Some(tab) {
            self.url_bar = url.to_string();
        }
    }

    /// Resynchronizes the URL bar from the active tab.
    pub fn on_active_tab_changed(&mut self) {
        if let Some(page) = self.tabs.active_page() {
            self.url_bar = page.current_url().to_string();
        }
    }

    /// Applies one engine notification. Events for tabs that were closed in
    /// the meantime are dropped.
    pub fn handle_page_event(&mut self, event: PageEvent) {
        match event.kind {
            PageEventKind::UrlChanged(url) => {
                if self.tabs.record_url(event.tab, &url) {
                    self.on_url_changed(event.tab, &url);
                } else {
                    debug!(tab = %event.tab, "url change for closed tab ignored");
                }
            }
            PageEventKind::LoadFinished { success } => {
                // The label follows the title even when the engine is
                // showing its own error page.
                if self.tabs.apply_title(event.tab) {
                    debug!(tab = %event.tab, success, "load finished");
                } else {
                    debug!(tab = %event.tab, "load finished for closed tab ignored");
                }
            }
            PageEventKind::TitleChanged(title) => {
                if !self.tabs.set_label(event.tab, &title) {
                    debug!(tab = %event.tab, "title change for closed tab ignored");
                }
            }
        }
    }

    pub fn handle_page_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = PageEvent>,
    {
        for event in events {
            self.handle_page_event(event);
        }
    }

    /// Dispatches one user action.
    pub fn handle_command(&mut self, command: UiCommand) -> Result<(), EngineError> {
        match command {
            UiCommand::Back => self.back(),
            UiCommand::Forward => self.forward(),
            UiCommand::Reload => self.reload(),
            UiCommand::Home => self.navigate_home(),
            UiCommand::NewTab => self.open_tab().map(|_| ()),
            UiCommand::Navigate { text } => self.navigate_to(&text).map(|_| ()),
            UiCommand::SwitchTab { index, tab } => {
                if let Some(index) = self.resolve_tab(index, tab) {
                    self.switch_to(index);
                }
                Ok(())
            }
            UiCommand::CloseTab { index, tab } => {
                if let Some(index) = self.resolve_tab(index, tab) {
                    self.close_tab(index);
                }
                Ok(())
            }
            UiCommand::TabBarDoubleClick { index } => self.on_tab_bar_double_clicked(index),
        }
    }

    /// Position of the tab a strip command refers to. An id wins over the
    /// position it was drawn at; `None` if that tab has since been closed.
    fn resolve_tab(&self, index: usize, tab: Option<TabId>) -> Option<usize> {
        match tab {
            Some(id) => {
                let found = self.tabs.index_of(id);
                if found.is_none() {
                    debug!(tab = %id, "command for closed tab ignored");
                }
                found
            }
            None => Some(index),
        }
    }

    /// Snapshot for rendering the chrome.
    pub fn chrome_state(&self) -> ChromeState {
        ChromeState {
            tabs: self.tabs.snapshot(),
            active: self.tabs.active_index(),
            url_bar: self.url_bar.clone(),
        }
    }
}
