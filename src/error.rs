//! Error types for the drum machine widget.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while building or driving the drum machine.
#[derive(Debug, Error)]
pub enum DrumError {
    /// The router matched a trigger key but the state holds no pad for it.
    /// Means the pad table and the state have diverged.
    #[error("no pad is bound to key '{key}'")]
    UnknownPad { key: char },

    /// The static pad table is malformed.
    #[error("invalid pad table: {0}")]
    InvalidTable(String),

    /// The mount configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The state could not be serialized for a snapshot.
    #[error("failed to serialize state: {0}")]
    Snapshot(serde_json::Error),

    /// The configured log level is not one `log` understands.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    /// A browser API call failed or a required node is missing.
    #[error("dom error: {0}")]
    Dom(String),
}

impl From<JsValue> for DrumError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        DrumError::Dom(message)
    }
}

impl From<DrumError> for JsValue {
    fn from(err: DrumError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, DrumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_pad_message() {
        let err = DrumError::UnknownPad { key: 'q' };
        assert_eq!(err.to_string(), "no pad is bound to key 'q'");
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: DrumError = parse.unwrap_err().into();
        assert!(matches!(err, DrumError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
