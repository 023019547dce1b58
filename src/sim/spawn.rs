//! Interval-gated procedural spawning
//!
//! Obstacles appear on a fixed cadence at the right screen edge. Boost coins
//! run on their own slower cadence and must clear live obstacles: a spawn is
//! rejected when any obstacle is too close in x, or when that obstacle's
//! position projected forward would overlap the coin. A rejected attempt
//! pulls the next one forward instead of waiting a full interval.

use rand::Rng;

use super::geom::Rect;
use super::state::{BoostItem, GameState, Obstacle};
use crate::consts::{BOOST_HIGH_OFFSET, BOOST_LOW_OFFSET, BOOST_MIN_CLEARANCE, BOOST_SIZE};

/// Append a new obstacle at the right edge when the interval has elapsed
pub(crate) fn spawn_obstacles(state: &mut GameState, now_ms: u64) {
    if now_ms.saturating_sub(state.last_obstacle_ms) >= state.config.obstacle_interval_ms {
        let obstacle = Obstacle::random(&mut state.rng, state.config.screen_width, &state.config);
        state.obstacles.push(obstacle);
        state.last_obstacle_ms = now_ms;
    }
}

/// Attempt a boost coin spawn when the interval has elapsed
pub(crate) fn spawn_boosts(state: &mut GameState, now_ms: u64) {
    if now_ms.saturating_sub(state.last_boost_ms) < state.config.boost_interval_ms {
        return;
    }

    let offset = if state.rng.random_bool(0.5) {
        BOOST_LOW_OFFSET
    } else {
        BOOST_HIGH_OFFSET
    };
    let candidate = Rect::new(
        state.config.screen_width,
        state.config.ground_y() - offset,
        BOOST_SIZE,
        BOOST_SIZE,
    );

    if placement_blocked(&state.obstacles, &candidate) {
        // Retry sooner rather than waiting the full interval again
        state.last_boost_ms = now_ms.saturating_sub(state.config.boost_retry_pullback_ms);
    } else {
        state.boost_items.push(BoostItem::new(candidate));
        state.last_boost_ms = now_ms;
    }
}

/// A coin placement conflicts with an obstacle that is nearby in x, or whose
/// forward-projected rect would overlap the coin.
fn placement_blocked(obstacles: &[Obstacle], candidate: &Rect) -> bool {
    obstacles.iter().any(|obstacle| {
        if (obstacle.rect.x - candidate.x).abs() < BOOST_MIN_CLEARANCE {
            return true;
        }
        let mut projected = obstacle.rect;
        projected.x += BOOST_MIN_CLEARANCE;
        projected.overlaps(candidate)
    })
}
