//! The fixed table of pads.

use std::collections::HashSet;

use crate::error::{DrumError, Result};
use crate::types::{Pad, PadSpec, TriggerKey};

pub const DEFAULT_CLIP_BASE_URL: &str = "https://s3.amazonaws.com/freecodecamp/drums/";

const SOURCES: [PadSpec; 9] = [
    PadSpec { clip: "Heater-1.mp3", key: "q", display: "heater 1" },
    PadSpec { clip: "Heater-2.mp3", key: "w", display: "heater 2" },
    PadSpec { clip: "Heater-3.mp3", key: "e", display: "heater 3" },
    PadSpec { clip: "Heater-4_1.mp3", key: "a", display: "heater 4" },
    PadSpec { clip: "Heater-6.mp3", key: "s", display: "clap" },
    PadSpec { clip: "Dsc_Oh.mp3", key: "d", display: "open HH" },
    PadSpec { clip: "Kick_n_Hat.mp3", key: "z", display: "kick n' Hat" },
    PadSpec { clip: "RP4_KICK_1.mp3", key: "x", display: "kick" },
    PadSpec { clip: "Cev_H2.mp3", key: "c", display: "closed HH" },
];

/// Read-only list of pad definitions with unique trigger keys.
#[derive(Debug, Clone)]
pub struct PadTable {
    entries: Vec<(TriggerKey, PadSpec)>,
}

impl PadTable {
    pub fn new(specs: &[PadSpec]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(specs.len());

        for spec in specs {
            let key = TriggerKey::parse(spec.key).ok_or_else(|| {
                DrumError::InvalidTable(format!(
                    "pad '{}' has key '{}', expected a single character",
                    spec.display, spec.key
                ))
            })?;
            if !seen.insert(key) {
                return Err(DrumError::InvalidTable(format!(
                    "key '{}' is bound to more than one pad",
                    key
                )));
            }
            entries.push((key, *spec));
        }

        Ok(Self { entries })
    }

    /// The nine stock pads.
    pub fn standard() -> Result<Self> {
        Self::new(&SOURCES)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TriggerKey, &PadSpec)> {
        self.entries.iter().map(|(key, spec)| (*key, spec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: TriggerKey) -> Option<&PadSpec> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, spec)| spec)
    }

    /// Looks up a raw key name, ignoring case.
    pub fn lookup(&self, key: &str) -> Option<TriggerKey> {
        TriggerKey::parse(key).filter(|k| self.get(*k).is_some())
    }

    /// Expands the table into runtime pads, all idle.
    pub fn pads(&self, base_url: &str) -> Vec<Pad> {
        self.entries
            .iter()
            .map(|(key, spec)| Pad {
                clip_url: clip_url(base_url, spec.clip),
                trigger: *key,
                playing: false,
                display_name: spec.display.to_string(),
            })
            .collect()
    }
}

fn clip_url(base_url: &str, clip: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        clip.trim_start_matches('/')
    )
}
