//! Widget state and the actions that update it.
//!
//! `DrumState` is never mutated in place by callers. Each action yields the
//! next state together with the side effects the host has to carry out.

use serde::Serialize;

use crate::error::{DrumError, Result};
use crate::pads::PadTable;
use crate::types::{Pad, TriggerKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show the pad's name, highlight it and restart its clip.
    Play(TriggerKey),
    /// Clear the pad's highlight.
    Release(TriggerKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Pause, rewind and play the pad's clip.
    Restart(TriggerKey),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrumState {
    pads: Vec<Pad>,
    readout: String,
}

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: DrumState,
    pub effects: Vec<Effect>,
}

impl DrumState {
    pub fn new(table: &PadTable, clip_base_url: &str) -> Self {
        Self {
            pads: table.pads(clip_base_url),
            readout: String::new(),
        }
    }

    pub fn pads(&self) -> &[Pad] {
        &self.pads
    }

    pub fn readout(&self) -> &str {
        &self.readout
    }

    pub fn pad(&self, key: TriggerKey) -> Option<&Pad> {
        self.pads.iter().find(|p| p.trigger == key)
    }

    pub fn is_playing(&self, key: TriggerKey) -> bool {
        self.pad(key).map(|p| p.playing).unwrap_or(false)
    }

    pub fn apply(&self, action: Action) -> Result<Transition> {
        match action {
            Action::Play(key) => {
                let mut next = self.clone();
                let pad = next.pad_mut(key)?;
                pad.playing = true;
                let name = pad.display_name.clone();
                next.readout = name;
                Ok(Transition {
                    state: next,
                    effects: vec![Effect::Restart(key)],
                })
            }
            Action::Release(key) => {
                let mut next = self.clone();
                next.pad_mut(key)?.playing = false;
                Ok(Transition {
                    state: next,
                    effects: Vec::new(),
                })
            }
        }
    }

    fn pad_mut(&mut self, key: TriggerKey) -> Result<&mut Pad> {
        self.pads
            .iter_mut()
            .find(|p| p.trigger == key)
            .ok_or(DrumError::UnknownPad { key: key.as_char() })
    }
}
