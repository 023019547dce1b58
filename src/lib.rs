//! Cloud Dash - a neon side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, scoring)
//! - `config`: Explicit run context (dimensions, tick rate, speeds, intervals)
//! - `audio`: Music volume directives mapped onto the theme track

pub mod audio;
pub mod config;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Height of the ground strip at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Physics (all per-tick quantities)
    pub const GRAVITY: f32 = 1.0;
    pub const JUMP_FORCE: f32 = 15.0;
    pub const GAME_SPEED: f32 = 5.0;
    /// Scroll speed while the player's boost is active
    pub const BOOST_SPEED: f32 = 10.0;
    /// Cosmetic spin animation step (degrees per tick)
    pub const ROTATION_STEP: f32 = 10.0;

    /// Player square
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_START_X: f32 = 100.0;

    /// Obstacle dimensions
    pub const TRIANGLE_SIZE: f32 = 40.0;
    pub const PLATFORM_WIDTH: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 30.0;

    /// A falling contact this close above a platform top counts as a landing
    pub const LANDING_MARGIN: f32 = 10.0;
    /// Bottom-corner probe inset for triangle containment
    pub const CORNER_INSET: f32 = 5.0;
    /// Tolerance for the barycentric area-sum containment test
    pub const AREA_EPSILON: f64 = 0.1;

    /// Boost coin
    pub const BOOST_SIZE: f32 = 60.0;
    /// Spawn heights above the ground line
    pub const BOOST_LOW_OFFSET: f32 = 70.0;
    pub const BOOST_HIGH_OFFSET: f32 = 150.0;
    /// Minimum x-distance between a coin spawn and any live obstacle
    pub const BOOST_MIN_CLEARANCE: f32 = 200.0;
    /// Coin spin animation step (degrees per tick)
    pub const COIN_SPIN_STEP: f32 = 5.0;

    /// Spawn cadence and timed state (wall-clock milliseconds)
    pub const OBSTACLE_INTERVAL_MS: u64 = 1500;
    pub const BOOST_INTERVAL_MS: u64 = 5000;
    /// How far a rejected coin spawn pulls the next attempt forward
    pub const BOOST_RETRY_PULLBACK_MS: u64 = 3000;
    pub const BOOST_DURATION_MS: u64 = 3000;
    pub const IDLE_TIMEOUT_MS: u64 = 5000;

    /// Music volume levels
    pub const MUSIC_FULL_VOLUME: f32 = 1.0;
    pub const MUSIC_IDLE_VOLUME: f32 = 0.3;
    pub const MUSIC_MENU_VOLUME: f32 = 0.1;
}
