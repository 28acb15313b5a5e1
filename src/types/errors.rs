use thiserror::Error;

// === EngineError ===

/// Errors reported by the embedded web engine binding.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not create a page view.
    #[error("Failed to create page view: {0}")]
    ViewCreation(String),
    /// The engine rejected a navigation command.
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// A script or visibility call on an existing view failed.
    #[error("Page view call failed: {0}")]
    ViewCall(String),
}

// === SettingsError ===

/// Errors related to loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// The settings file is not valid JSON for `BrowserSettings`.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
}

// === IpcError ===

/// Errors related to messages arriving from the browser chrome.
#[derive(Debug, Error)]
pub enum IpcError {
    /// The message body is not a JSON object with a `cmd` field.
    #[error("Malformed IPC message: {0}")]
    Malformed(String),
    /// The `cmd` field names a command the shell does not know.
    #[error("Unknown IPC command: {0}")]
    UnknownCommand(String),
}

// === AppError ===

/// Startup failures of the native shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The top-level window could not be created.
    #[error("Window creation failed: {0}")]
    Window(String),
}
