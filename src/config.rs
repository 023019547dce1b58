//! Explicit run context for the simulation
//!
//! Everything the loop needs to know about its world lives here and is passed
//! in at construction - never read from ambient globals. Values can be
//! overridden from a JSON file; anything missing falls back to the defaults
//! in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Height of the ground strip
    pub ground_height: f32,
    /// Simulation rate (ticks per second)
    pub tick_rate: u32,

    /// Downward acceleration per tick
    pub gravity: f32,
    /// Upward jump impulse
    pub jump_force: f32,
    /// Base scroll speed (pixels per tick)
    pub game_speed: f32,
    /// Scroll speed while boost is active
    pub boost_speed: f32,
    /// Cosmetic rotation animation step (degrees per tick)
    pub rotation_step: f32,

    /// Milliseconds between obstacle spawns
    pub obstacle_interval_ms: u64,
    /// Milliseconds between boost coin spawn attempts
    pub boost_interval_ms: u64,
    /// Pull-forward applied to the next attempt when a coin spawn is rejected
    pub boost_retry_pullback_ms: u64,
    /// How long boost and shield last once activated
    pub boost_duration_ms: u64,
    /// Milliseconds without input before the idle state kicks in
    pub idle_timeout_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            tick_rate: TICK_RATE,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            game_speed: GAME_SPEED,
            boost_speed: BOOST_SPEED,
            rotation_step: ROTATION_STEP,
            obstacle_interval_ms: OBSTACLE_INTERVAL_MS,
            boost_interval_ms: BOOST_INTERVAL_MS,
            boost_retry_pullback_ms: BOOST_RETRY_PULLBACK_MS,
            boost_duration_ms: BOOST_DURATION_MS,
            idle_timeout_ms: IDLE_TIMEOUT_MS,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the ground line entities stand on
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Load configuration from a JSON file, falling back to defaults.
    ///
    /// A missing file is normal; a malformed one is logged and ignored so a
    /// bad config can never take the game down.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed config {path}: {err}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_line() {
        let config = GameConfig::default();
        assert_eq!(config.ground_y(), 350.0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"game_speed": 7.0}"#).unwrap();
        assert_eq!(config.game_speed, 7.0);
        assert_eq!(config.boost_speed, BOOST_SPEED);
        assert_eq!(config.obstacle_interval_ms, OBSTACLE_INTERVAL_MS);
    }
}
