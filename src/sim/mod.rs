//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Wall-clock timestamps are passed in, never sampled
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod geom;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{ObstacleContact, classify_contact};
pub use geom::{Rect, point_in_triangle, triangle_verts};
pub use state::{
    BoostItem, GamePhase, GameState, NEON_PALETTE, Obstacle, ObstacleKind, Player, VolumeLevel,
};
pub use tick::{TickInput, tick};
