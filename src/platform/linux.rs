// Nimbus config location for Linux: ~/.config/nimbus

use std::env;
use std::path::PathBuf;

/// Uses `$XDG_CONFIG_HOME/nimbus` if set, otherwise `~/.config/nimbus`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("nimbus")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("nimbus")
    }
}
