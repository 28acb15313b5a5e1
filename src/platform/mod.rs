// Nimbus platform abstraction
// Locates the directory holding the optional settings file.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Nimbus.
///
/// - **Linux**: `~/.config/nimbus` (or `$XDG_CONFIG_HOME/nimbus`)
/// - **macOS**: `~/Library/Application Support/Nimbus`
/// - **Windows**: `%APPDATA%/Nimbus`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".").join("nimbus")
    }
}
