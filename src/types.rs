use serde::Serialize;
use std::fmt;

/// A single keyboard character bound to a pad, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TriggerKey(char);

impl TriggerKey {
    /// Case-folds a key name into a trigger key. Named keys such as
    /// "Shift" or "Enter" are not trigger keys.
    pub fn parse(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(folded), None) => Some(Self(folded)),
            // Characters whose lowercase form spans several chars stay as-is.
            _ => Some(Self(c)),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// The label shown on the tile and used as the audio element id.
    pub fn label(self) -> String {
        self.0.to_uppercase().collect()
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the static pad table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadSpec {
    pub clip: &'static str,
    pub key: &'static str,
    pub display: &'static str,
}

/// A pad as it lives in the widget state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pad {
    pub clip_url: String,
    pub trigger: TriggerKey,
    pub playing: bool,
    pub display_name: String,
}
