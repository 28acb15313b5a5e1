use serde::{Deserialize, Serialize};

use crate::types::tab::TabId;

/// A user action coming from the toolbar, the URL field or the tab strip.
///
/// Serialized with an internal `cmd` tag, which is the shape the chrome
/// posts over IPC: `{"cmd":"navigate","text":"example.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum UiCommand {
    Back,
    Forward,
    Reload,
    Home,
    NewTab,
    /// Raw text submitted from the URL field.
    Navigate { text: String },
    /// `tab` names the tab the strip was drawn with. When present it wins
    /// over `index`, and a tab that is already gone makes this a no-op.
    SwitchTab {
        index: usize,
        #[serde(default)]
        tab: Option<TabId>,
    },
    CloseTab {
        index: usize,
        #[serde(default)]
        tab: Option<TabId>,
    },
    /// Double-click on the tab strip; `index` is `None` on the empty area.
    TabBarDoubleClick {
        #[serde(default)]
        index: Option<usize>,
    },
}
