use serde::{Deserialize, Serialize};

/// Top-level browser settings container.
///
/// Every section is defaulted, so a settings file only needs the keys it
/// wants to override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub window: WindowSettings,
    pub logging: LoggingSettings,
}

/// Navigation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub home_url: String,
    /// Prefix a search query is appended to.
    pub search_url: String,
    pub new_tab_label: String,
    /// Label of the tab opened at startup.
    pub initial_tab_label: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".to_string(),
            search_url: "https://www.google.com/search?q=".to_string(),
            new_tab_label: "New Tab".to_string(),
            initial_tab_label: "Home".to_string(),
        }
    }
}

/// Geometry of the top-level window, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Nimbus".to_string(),
            x: 100,
            y: 100,
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
