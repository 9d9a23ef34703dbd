//! Pure view of the widget state.

use crate::state::DrumState;
use crate::types::TriggerKey;

pub const MACHINE_ID: &str = "drum-machine";
pub const DISPLAY_ID: &str = "display";
pub const PAD_CLASS: &str = "drum-pad";
pub const PLAYING_CLASS: &str = "playing";
pub const CLIP_CLASS: &str = "clip";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadView {
    pub trigger: TriggerKey,
    /// Tile element id, the pad's display name.
    pub id: String,
    /// Audio element id, the upper-case trigger key.
    pub clip_id: String,
    pub clip_url: String,
    pub label: String,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineView {
    pub pads: Vec<PadView>,
    pub readout: String,
}

pub fn view(state: &DrumState) -> MachineView {
    let pads = state
        .pads()
        .iter()
        .map(|pad| PadView {
            trigger: pad.trigger,
            id: pad.display_name.clone(),
            clip_id: pad.trigger.label(),
            clip_url: pad.clip_url.clone(),
            label: pad.trigger.label(),
            class_name: pad_class(pad.playing),
        })
        .collect();

    MachineView {
        pads,
        readout: state.readout().to_string(),
    }
}

pub fn pad_class(playing: bool) -> String {
    if playing {
        format!("{} {}", PAD_CLASS, PLAYING_CLASS)
    } else {
        PAD_CLASS.to_string()
    }
}
