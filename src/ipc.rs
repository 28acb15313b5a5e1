//! Message protocol between the browser chrome and the Rust side.
//!
//! Inbound: one JSON object per `window.ipc.postMessage` call, tagged by `cmd`.
//! `{"cmd":"ui_ready"}` announces that the chrome finished loading; every
//! other command maps onto a [`UiCommand`].
//!
//! Outbound: [`chrome_update_script`] builds the script call that re-renders
//! the tab strip and URL field from a [`ChromeState`].

use serde_json::Value;

use crate::types::command::UiCommand;
use crate::types::errors::IpcError;
use crate::types::tab::ChromeState;

/// Commands accepted from the chrome besides `ui_ready`.
const COMMANDS: &[&str] = &[
    "back",
    "forward",
    "reload",
    "home",
    "new_tab",
    "navigate",
    "switch_tab",
    "close_tab",
    "tab_bar_double_click",
];

/// A decoded chrome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Ready,
    Command(UiCommand),
}

/// Decodes one IPC message body.
pub fn parse_message(body: &str) -> Result<Inbound, IpcError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| IpcError::Malformed(format!("invalid JSON: {}", e)))?;
    let cmd = value
        .get("cmd")
        .and_then(|v| v.as_str())
        .ok_or_else(|| IpcError::Malformed("missing cmd".to_string()))?
        .to_string();

    if cmd == "ui_ready" {
        return Ok(Inbound::Ready);
    }
    if !COMMANDS.contains(&cmd.as_str()) {
        return Err(IpcError::UnknownCommand(cmd));
    }

    serde_json::from_value::<UiCommand>(value)
        .map(Inbound::Command)
        .map_err(|e| IpcError::Malformed(format!("{}: {}", cmd, e)))
}

/// Script that hands `state` to the chrome's render function.
pub fn chrome_update_script(state: &ChromeState) -> String {
    let json = serde_json::to_string(state).unwrap_or_default();
    format!("if(window.__nimbus_sync)window.__nimbus_sync({})", json)
}
