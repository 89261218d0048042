//! Error taxonomy for level loading and browser startup.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result of asking for a level that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// No level with this number exists. The campaign is over.
    #[error("level {0} not found")]
    NotFound(u32),
    /// The level exceeds the configured grid ceiling.
    #[error("level {number} is {width}x{height}, larger than the {max}x{max} maximum")]
    TooLarge {
        number: u32,
        width: usize,
        height: usize,
        max: usize,
    },
}

impl LoadError {
    /// Errors that should stop the game rather than fall back to the title screen.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LoadError::TooLarge { .. })
    }
}

/// Unrecoverable problems while bringing up the browser shell.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[cfg(feature = "serde_json")]
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for StartupError {
    fn from(value: JsValue) -> Self {
        StartupError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<StartupError> for JsValue {
    fn from(err: StartupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
