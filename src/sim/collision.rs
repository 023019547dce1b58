//! Obstacle/player contact classification
//!
//! Platforms use a plain rectangle overlap test. Triangles get a cheap
//! rectangle rejection first, then a true containment check of the player's
//! two bottom corners (inset from each side) against the spike. A falling
//! contact just above a platform top is support, not damage.

use glam::Vec2;

use super::geom::{Rect, point_in_triangle};
use super::state::{Obstacle, ObstacleKind};
use crate::consts::{CORNER_INSET, LANDING_MARGIN};

/// Outcome of testing an obstacle against the player this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleContact {
    /// No contact
    None,
    /// Falling onto a platform top: snap and stand, no damage
    Landing,
    /// Damaging contact (shield-absorbed or run-ending)
    Hit,
}

/// Classify the contact between an obstacle and the player.
///
/// `velocity_y` is the player's vertical velocity; a platform contact only
/// counts as a landing while falling and within [`LANDING_MARGIN`] of the
/// platform top.
pub fn classify_contact(obstacle: &Obstacle, player: &Rect, velocity_y: f32) -> ObstacleContact {
    if !touches_player(obstacle, player) {
        return ObstacleContact::None;
    }
    if obstacle.kind == ObstacleKind::Platform
        && player.bottom() <= obstacle.rect.top() + LANDING_MARGIN
        && velocity_y > 0.0
    {
        return ObstacleContact::Landing;
    }
    ObstacleContact::Hit
}

fn touches_player(obstacle: &Obstacle, player: &Rect) -> bool {
    match obstacle.kind {
        ObstacleKind::Platform => player.overlaps(&obstacle.rect),
        ObstacleKind::Triangle => {
            if !player.overlaps(&obstacle.rect) {
                return false;
            }
            let bottom_left = Vec2::new(
                player.left() + CORNER_INSET,
                player.bottom() - CORNER_INSET,
            );
            let bottom_right = Vec2::new(
                player.right() - CORNER_INSET,
                player.bottom() - CORNER_INSET,
            );
            point_in_triangle(bottom_left, &obstacle.verts)
                || point_in_triangle(bottom_right, &obstacle.verts)
        }
    }
}
