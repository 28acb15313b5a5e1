//! Nimbus UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The chrome (toolbar, URL field, tab strip) is itself a small HTML page in
//! its own webview; every tab is a separate webview underneath it.

pub mod webview_app;
pub mod wry_engine;
