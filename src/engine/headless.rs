//! In-process engine with no rendering or networking.
//!
//! URLs resolve against a small site table instead of the network, which makes
//! the shell's behaviour observable in the console demo and in tests:
//! - a registered page loads with its title
//! - a redirect is followed, raising `UrlChanged` for every hop
//! - an unreachable site finishes with `success: false` and an error-page title
//! - anything else loads successfully and uses the URL as its title
//!
//! Events go into an `mpsc` channel; the owner drains it and feeds the
//! controller, just as the native shell drains its event loop.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use crate::engine::{EngineView, PageEvent, ViewPolicy, WebEngine};
use crate::types::errors::EngineError;
use crate::types::tab::TabId;

/// Redirect hops followed before giving up, as browsers do.
const MAX_REDIRECTS: usize = 20;

/// How a URL behaves when loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Site {
    Page { title: String },
    Redirect { to: String },
    Unreachable { title: String },
}

type SiteTable = Rc<RefCell<HashMap<String, Site>>>;

pub struct HeadlessEngine {
    sink: Sender<PageEvent>,
    sites: SiteTable,
    views_created: usize,
}

impl HeadlessEngine {
    /// Creates the engine and the receiving end of its event stream.
    pub fn new() -> (Self, Receiver<PageEvent>) {
        let (sink, events) = mpsc::channel();
        let engine = Self {
            sink,
            sites: Rc::new(RefCell::new(HashMap::new())),
            views_created: 0,
        };
        (engine, events)
    }

    pub fn add_page(&self, url: &str, title: &str) {
        self.sites.borrow_mut().insert(
            url.to_string(),
            Site::Page {
                title: title.to_string(),
            },
        );
    }

    pub fn add_redirect(&self, from: &str, to: &str) {
        self.sites
            .borrow_mut()
            .insert(from.to_string(), Site::Redirect { to: to.to_string() });
    }

    pub fn add_unreachable(&self, url: &str, error_title: &str) {
        self.sites.borrow_mut().insert(
            url.to_string(),
            Site::Unreachable {
                title: error_title.to_string(),
            },
        );
    }

    pub fn views_created(&self) -> usize {
        self.views_created
    }
}

impl WebEngine for HeadlessEngine {
    type View = HeadlessView;

    fn create_view(
        &mut self,
        tab: TabId,
        url: &str,
        policy: ViewPolicy,
    ) -> Result<HeadlessView, EngineError> {
        self.views_created += 1;
        let mut view = HeadlessView {
            tab,
            policy,
            sink: self.sink.clone(),
            sites: Rc::clone(&self.sites),
            history: Vec::new(),
            position: 0,
            title: String::new(),
            visible: false,
            requested: Vec::new(),
        };
        view.set_url(url)?;
        Ok(view)
    }
}

pub struct HeadlessView {
    tab: TabId,
    policy: ViewPolicy,
    sink: Sender<PageEvent>,
    sites: SiteTable,
    history: Vec<String>,
    position: usize,
    title: String,
    visible: bool,
    requested: Vec<String>,
}

impl HeadlessView {
    pub fn policy(&self) -> ViewPolicy {
        self.policy
    }

    /// Every URL passed to `set_url`, in order.
    pub fn requested_urls(&self) -> &[String] {
        &self.requested
    }

    /// Session history as final (post-redirect) URLs.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Simulates page script assigning `document.title` after the load.
    pub fn set_document_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.emit(PageEvent::title_changed(self.tab, title));
    }

    fn emit(&self, event: PageEvent) {
        // The receiver only goes away at teardown.
        let _ = self.sink.send(event);
    }

    /// Resolves `url` against the site table, raising events as a real
    /// engine would. Returns the URL that ended up displayed.
    fn load(&mut self, url: &str) -> String {
        let mut current = url.to_string();
        self.emit(PageEvent::url_changed(self.tab, current.clone()));

        let mut hops = 0;
        loop {
            let next = match self.sites.borrow().get(&current) {
                Some(Site::Redirect { to }) if hops < MAX_REDIRECTS => Some(to.clone()),
                _ => None,
            };
            let Some(to) = next else { break };
            hops += 1;
            current = to;
            self.emit(PageEvent::url_changed(self.tab, current.clone()));
        }

        let (title, success) = match self.sites.borrow().get(&current) {
            Some(Site::Page { title }) => (title.clone(), true),
            Some(Site::Unreachable { title }) => (title.clone(), false),
            Some(Site::Redirect { .. }) => ("Too many redirects".to_string(), false),
            None => (current.clone(), true),
        };
        debug!(tab = %self.tab, url = %current, success, "headless load finished");
        self.title = title;
        self.emit(PageEvent::load_finished(self.tab, success));
        current
    }
}

impl EngineView for HeadlessView {
    fn set_url(&mut self, url: &str) -> Result<(), EngineError> {
        self.requested.push(url.to_string());
        let landed = self.load(url);
        if !self.history.is_empty() {
            self.history.truncate(self.position + 1);
        }
        self.history.push(landed);
        self.position = self.history.len() - 1;
        Ok(())
    }

    fn back(&mut self) -> Result<(), EngineError> {
        if self.position > 0 {
            self.position -= 1;
            let url = self.history[self.position].clone();
            self.load(&url);
        }
        Ok(())
    }

    fn forward(&mut self) -> Result<(), EngineError> {
        if self.position + 1 < self.history.len() {
            self.position += 1;
            let url = self.history[self.position].clone();
            self.load(&url);
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<(), EngineError> {
        if let Some(url) = self.history.get(self.position).cloned() {
            self.load(&url);
        }
        Ok(())
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError> {
        self.visible = visible;
        Ok(())
    }
}
