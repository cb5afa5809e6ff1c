//! Errors raised at the host boundary (logger, observer, build-time config).
//!
//! UI state transitions never fail; only setup that talks to the browser or
//! parses overrides does.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LandingError {
    #[error("fade threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("invalid fade threshold override {0:?}")]
    UnparsableThreshold(String),

    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),

    #[error("intersection observer unavailable: {0}")]
    Observer(String),

    #[error("logger installation failed: {0}")]
    Logger(String),
}

impl LandingError {
    /// Wrap a JS exception thrown by the host while setting up observation.
    pub fn observer(err: JsValue) -> Self {
        let message = err
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{err:?}"));
        Self::Observer(message)
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            LandingError::InvalidThreshold(1.5).to_string(),
            "fade threshold must be in (0, 1], got 1.5"
        );
        assert_eq!(
            LandingError::InvalidLogLevel("loud".into()).to_string(),
            "invalid log level \"loud\""
        );
    }
}
