//! Theme music volume control
//!
//! The simulation only issues [`VolumeLevel`] directives; this module maps
//! them onto the looping theme track. A missing or unloadable asset turns
//! every directive into a no-op so audio failure can never take down the
//! game loop.

use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound, set_sound_volume};

use crate::sim::VolumeLevel;

/// Applies volume directives from the core to the theme track
pub struct MusicDirector {
    track: Option<Sound>,
    current: Option<VolumeLevel>,
}

impl MusicDirector {
    /// Load the theme track and start it looping at menu volume
    pub async fn load(path: &str) -> Self {
        match load_sound(path).await {
            Ok(track) => {
                play_sound(
                    &track,
                    PlaySoundParams {
                        looped: true,
                        volume: VolumeLevel::Menu.gain(),
                    },
                );
                log::info!("Theme music playing from {path}");
                Self {
                    track: Some(track),
                    current: Some(VolumeLevel::Menu),
                }
            }
            Err(err) => {
                log::warn!("Music disabled - could not load {path}: {err}");
                Self {
                    track: None,
                    current: None,
                }
            }
        }
    }

    /// Apply a directive; only acts when the level actually changes
    pub fn apply(&mut self, level: VolumeLevel) {
        if self.current == Some(level) {
            return;
        }
        if let Some(track) = &self.track {
            set_sound_volume(track, level.gain());
            log::debug!("music volume -> {level:?}");
        }
        self.current = Some(level);
    }
}
