//! Game state and entity models
//!
//! All entities are exclusively owned by [`GameState`] and mutated only
//! inside its own update pass. Timestamps are wall-clock milliseconds
//! supplied by the frontend; the sim never samples a clock itself, so spawn
//! cadence and boost duration stay real-time and tests stay deterministic.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geom::{Rect, triangle_verts};
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the start input; nothing updates
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended; waiting for the restart input
    GameOver,
}

/// Music volume directive issued to the audio back end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    /// Before start and after game over
    Menu,
    /// No input for a while during gameplay
    Idle,
    /// Active gameplay
    Full,
}

impl VolumeLevel {
    pub fn gain(self) -> f32 {
        match self {
            VolumeLevel::Menu => MUSIC_MENU_VOLUME,
            VolumeLevel::Idle => MUSIC_IDLE_VOLUME,
            VolumeLevel::Full => MUSIC_FULL_VOLUME,
        }
    }
}

/// The player-controlled square
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (pixels per tick, positive is downward)
    pub velocity_y: f32,
    pub jumping: bool,
    /// Jumps taken since last grounding (capped at 2)
    pub jump_count: u8,
    /// Cosmetic spin state in degrees. Non-authoritative: physics and
    /// collision never read these.
    pub rotation: f32,
    pub target_rotation: f32,
    pub boost_active: bool,
    /// Wall-clock ms when the boost was last activated
    pub boost_started_ms: u64,
    /// One-hit protection granted together with the boost
    pub shield_active: bool,
    /// 1 normally, 2 while the boost is active
    pub score_multiplier: u32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                PLAYER_START_X,
                config.ground_y() - PLAYER_SIZE,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            velocity_y: 0.0,
            jumping: false,
            jump_count: 0,
            rotation: 0.0,
            target_rotation: 0.0,
            boost_active: false,
            boost_started_ms: 0,
            shield_active: false,
            score_multiplier: 1,
        }
    }

    /// Jump if grounded, or once more while airborne (double jump).
    ///
    /// Each jump advances the target rotation a quarter turn clockwise,
    /// wrapped into (-360, 0].
    pub fn jump(&mut self, config: &GameConfig) {
        if !self.jumping || self.jump_count < 2 {
            self.velocity_y = -config.jump_force;
            self.jumping = true;
            self.jump_count += 1;
            self.target_rotation = (self.target_rotation - 90.0).rem_euclid(360.0);
            if self.target_rotation > 0.0 {
                self.target_rotation -= 360.0;
            }
        }
    }

    /// Advance physics and timed state by one tick
    pub fn update(&mut self, now_ms: u64, config: &GameConfig) {
        self.velocity_y += config.gravity;
        self.rect.y += self.velocity_y;

        // Spin animation: always clockwise, clamped at the target
        if self.rotation != self.target_rotation {
            self.rotation -= config.rotation_step;
            if self.rotation <= self.target_rotation {
                self.rotation = self.target_rotation;
            }
        }

        let ground_top = config.ground_y() - self.rect.h;
        if self.rect.y >= ground_top {
            self.rect.y = ground_top;
            self.velocity_y = 0.0;
            self.jumping = false;
            self.jump_count = 0;
        }

        if self.boost_active
            && now_ms.saturating_sub(self.boost_started_ms) > config.boost_duration_ms
        {
            self.boost_active = false;
            self.shield_active = false;
            self.score_multiplier = 1;
        }
    }

    /// Activate boost and shield. Re-triggering restarts the window.
    pub fn activate_boost(&mut self, now_ms: u64) {
        self.boost_active = true;
        self.shield_active = true;
        self.boost_started_ms = now_ms;
        self.score_multiplier = 2;
    }

    /// Snap onto a platform top after a landing contact
    pub fn land_on(&mut self, platform_top: f32) {
        self.rect.y = platform_top - self.rect.h;
        self.velocity_y = 0.0;
        self.jumping = false;
        self.jump_count = 0;
    }

    /// Whole seconds of boost remaining, for the HUD countdown
    pub fn boost_seconds_left(&self, now_ms: u64, config: &GameConfig) -> u64 {
        config
            .boost_duration_ms
            .saturating_sub(now_ms.saturating_sub(self.boost_started_ms))
            .div_ceil(1000)
    }
}

/// Obstacle shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Ground spike; collides via triangle containment
    Triangle,
    /// Low block the player can land on
    Platform,
}

/// Fixed neon palette obstacles are colored from (RGB)
pub const NEON_PALETTE: [[u8; 3]; 5] = [
    [255, 20, 147], // pink
    [57, 255, 20],  // green
    [0, 191, 255],  // blue
    [138, 43, 226], // purple
    [255, 153, 0],  // orange
];

/// A scrolling obstacle anchored to the ground line
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Triangle vertices, recomputed from the rect every tick.
    /// Meaningful only for [`ObstacleKind::Triangle`].
    pub verts: [Vec2; 3],
    /// Scored exactly once when the trailing edge crosses the player
    pub passed: bool,
    /// Platform only: the player has stood on top of this one
    pub landed_on: bool,
    pub color: [u8; 3],
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, color: [u8; 3], config: &GameConfig) -> Self {
        let (w, h) = match kind {
            ObstacleKind::Triangle => (TRIANGLE_SIZE, TRIANGLE_SIZE),
            ObstacleKind::Platform => (PLATFORM_WIDTH, PLATFORM_HEIGHT),
        };
        let rect = Rect::new(x, config.ground_y() - h, w, h);
        let verts = triangle_verts(&rect);
        Self {
            kind,
            rect,
            verts,
            passed: false,
            landed_on: false,
            color,
        }
    }

    /// Spawn with a uniformly random kind and a random palette color
    pub fn random<R: Rng>(rng: &mut R, x: f32, config: &GameConfig) -> Self {
        let kind = if rng.random_bool(0.5) {
            ObstacleKind::Triangle
        } else {
            ObstacleKind::Platform
        };
        let color = NEON_PALETTE[rng.random_range(0..NEON_PALETTE.len())];
        Self::new(kind, x, color, config)
    }

    /// Translate left by `speed` pixels; triangles refresh their vertices
    pub fn advance(&mut self, speed: f32) {
        self.rect.x -= speed;
        if self.kind == ObstacleKind::Triangle {
            self.verts = triangle_verts(&self.rect);
        }
    }
}

/// A collectible boost coin
#[derive(Debug, Clone)]
pub struct BoostItem {
    pub rect: Rect,
    pub collected: bool,
    /// Animation phase in degrees (mod 360); purely visual
    pub phase: f32,
}

impl BoostItem {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            collected: false,
            phase: 0.0,
        }
    }

    pub fn advance(&mut self, speed: f32) {
        self.rect.x -= speed;
        self.phase = (self.phase + COIN_SPIN_STEP) % 360.0;
    }

    /// Pulsing glow radius for rendering
    pub fn glow_radius(&self) -> f32 {
        36.0 + self.phase.to_radians().sin() * 4.0
    }

    /// Vertical bounce offset for rendering
    pub fn bounce_offset(&self) -> f32 {
        (self.phase * 2.0).to_radians().sin() * 3.0
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub boost_items: Vec<BoostItem>,
    pub score: u64,
    pub phase: GamePhase,
    /// Wall-clock ms of the last obstacle spawn
    pub last_obstacle_ms: u64,
    /// Wall-clock ms of the last boost spawn (or rejected-attempt rebase)
    pub last_boost_ms: u64,
    /// Wall-clock ms of the last player input
    pub last_input_ms: u64,
    /// No input for a while; only drives the music volume
    pub idle: bool,
}

impl GameState {
    /// Create a new game in the ready state
    pub fn new(config: GameConfig, seed: u64, now_ms: u64) -> Self {
        let player = Player::new(&config);
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player,
            obstacles: Vec::new(),
            boost_items: Vec::new(),
            score: 0,
            phase: GamePhase::Ready,
            last_obstacle_ms: now_ms,
            last_boost_ms: now_ms,
            last_input_ms: now_ms,
            idle: false,
        }
    }

    /// Leave the ready state and begin play; spawn timers start now
    pub fn start(&mut self, now_ms: u64) {
        self.phase = GamePhase::Playing;
        self.last_obstacle_ms = now_ms;
        self.last_boost_ms = now_ms;
        self.last_input_ms = now_ms;
        self.idle = false;
        log::info!("game started");
    }

    /// Re-initialize everything and re-enter play directly
    pub fn reset(&mut self, now_ms: u64) {
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.boost_items.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.last_obstacle_ms = now_ms;
        self.last_boost_ms = now_ms;
        self.last_input_ms = now_ms;
        self.idle = false;
        log::info!("game restarted");
    }

    /// Current scroll speed, shared by obstacles and boost coins every tick
    pub fn current_speed(&self) -> f32 {
        if self.player.boost_active {
            self.config.boost_speed
        } else {
            self.config.game_speed
        }
    }

    /// Volume directive for the audio back end
    pub fn music_volume(&self) -> VolumeLevel {
        match self.phase {
            GamePhase::Ready | GamePhase::GameOver => VolumeLevel::Menu,
            GamePhase::Playing => {
                if self.idle {
                    VolumeLevel::Idle
                } else {
                    VolumeLevel::Full
                }
            }
        }
    }
}
