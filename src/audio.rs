//! Per-pad audio handles.

use std::collections::HashMap;

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::error::{DrumError, Result};
use crate::types::TriggerKey;

/// Something that can restart a clip from the beginning.
pub trait ClipPlayer {
    /// Stop the clip, rewind to zero and play it again.
    fn restart(&self) -> Result<()>;
}

/// A clip backed by an `<audio>` element.
pub struct HtmlClip {
    element: HtmlAudioElement,
}

impl HtmlClip {
    pub fn new(element: HtmlAudioElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

impl ClipPlayer for HtmlClip {
    fn restart(&self) -> Result<()> {
        self.element.pause()?;
        self.element.set_current_time(0.0);

        let promise = self.element.play()?;
        let src = self.element.src();
        wasm_bindgen_futures::spawn_local(async move {
            // Autoplay policy or a failed fetch rejects here
            if let Err(err) = JsFuture::from(promise).await {
                log::warn!("playback of {} rejected: {:?}", src, err);
            }
        });
        Ok(())
    }
}

/// Audio handles keyed by trigger key, fixed at construction.
pub struct AudioBank<P> {
    clips: HashMap<TriggerKey, P>,
}

impl<P: ClipPlayer> AudioBank<P> {
    pub fn new(clips: impl IntoIterator<Item = (TriggerKey, P)>) -> Self {
        Self {
            clips: clips.into_iter().collect(),
        }
    }

    pub fn get(&self, key: TriggerKey) -> Option<&P> {
        self.clips.get(&key)
    }

    pub fn clips(&self) -> impl Iterator<Item = &P> {
        self.clips.values()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn restart(&self, key: TriggerKey) -> Result<()> {
        self.clips
            .get(&key)
            .ok_or(DrumError::UnknownPad { key: key.as_char() })?
            .restart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingClip {
        restarts: Cell<usize>,
    }

    impl ClipPlayer for CountingClip {
        fn restart(&self) -> Result<()> {
            self.restarts.set(self.restarts.get() + 1);
            Ok(())
        }
    }

    fn key(k: &str) -> TriggerKey {
        TriggerKey::parse(k).unwrap()
    }

    #[test]
    fn test_restart_hits_only_its_clip() {
        let bank = AudioBank::new(["q", "w"].iter().map(|k| {
            (
                key(k),
                CountingClip {
                    restarts: Cell::new(0),
                },
            )
        }));

        bank.restart(key("w")).unwrap();
        bank.restart(key("w")).unwrap();

        assert_eq!(bank.get(key("q")).unwrap().restarts.get(), 0);
        assert_eq!(bank.get(key("w")).unwrap().restarts.get(), 2);
    }

    #[test]
    fn test_restart_missing_clip() {
        let bank: AudioBank<CountingClip> = AudioBank::new(Vec::new());
        assert!(bank.is_empty());
        assert!(matches!(
            bank.restart(key("z")),
            Err(DrumError::UnknownPad { key: 'z' })
        ));
    }
}
