use log::LevelFilter;
use serde::Deserialize;

use crate::error::{DrumError, Result};
use crate::pads::DEFAULT_CLIP_BASE_URL;

/// Options passed to `mount` as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix joined with each clip file name.
    pub clip_base_url: String,
    /// Id of the element the widget is appended to. Falls back to `<body>`.
    pub root_id: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clip_base_url: DEFAULT_CLIP_BASE_URL.to_string(),
            root_id: "root".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| DrumError::InvalidLogLevel(self.log_level.clone()))
    }
}
