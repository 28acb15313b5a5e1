use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a tab for its whole lifetime.
///
/// Engine events carry this instead of a position so that a notification
/// arriving after its tab was closed (or moved) can never hit the wrong tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only view of one tab, as shown in the tab strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub label: String,
    pub url: String,
}

/// Everything the chrome needs to render itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromeState {
    pub tabs: Vec<TabInfo>,
    pub active: usize,
    pub url_bar: String,
}
