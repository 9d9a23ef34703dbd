//! Maps keyboard and pointer input onto pad actions.

use crate::audio::{AudioBank, ClipPlayer};
use crate::error::Result;
use crate::pads::PadTable;
use crate::state::{Action, DrumState, Effect};
use crate::types::TriggerKey;

pub struct InputRouter<P> {
    table: PadTable,
    state: DrumState,
    audio: AudioBank<P>,
}

impl<P: ClipPlayer> InputRouter<P> {
    pub fn new(table: PadTable, state: DrumState, audio: AudioBank<P>) -> Self {
        Self {
            table,
            state,
            audio,
        }
    }

    pub fn state(&self) -> &DrumState {
        &self.state
    }

    pub fn table(&self) -> &PadTable {
        &self.table
    }

    pub fn audio(&self) -> &AudioBank<P> {
        &self.audio
    }

    /// Plays a pad on key-down unless it is already held.
    /// Returns whether the state changed.
    pub fn on_key_down(&mut self, key: &str) -> Result<bool> {
        let Some(trigger) = self.table.lookup(key) else {
            return Ok(false);
        };
        if self.state.is_playing(trigger) {
            return Ok(false);
        }
        self.dispatch(Action::Play(trigger))?;
        Ok(true)
    }

    /// Clears a pad's highlight on key-up. Returns whether the state changed.
    pub fn on_key_up(&mut self, key: &str) -> Result<bool> {
        let Some(trigger) = self.table.lookup(key) else {
            return Ok(false);
        };
        let was_playing = self.state.is_playing(trigger);
        self.dispatch(Action::Release(trigger))?;
        Ok(was_playing)
    }

    /// Plays a pad regardless of whether it is already highlighted.
    pub fn on_click(&mut self, trigger: TriggerKey) -> Result<()> {
        self.dispatch(Action::Play(trigger))
    }

    fn dispatch(&mut self, action: Action) -> Result<()> {
        let transition = self.state.apply(action)?;
        log::debug!("{:?} -> readout {:?}", action, transition.state.readout());
        self.state = transition.state;

        for effect in transition.effects {
            match effect {
                Effect::Restart(key) => self.audio.restart(key)?,
            }
        }
        Ok(())
    }
}
