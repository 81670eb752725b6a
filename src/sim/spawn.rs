//! Obstacle spawning on a fixed tick cadence with a seeded gap position

use super::rng::Lcg;
use super::state::Obstacle;
use crate::consts::*;

/// The spawner's slice of `GameState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnCursor {
    pub rng_seed: u32,
    pub next_obstacle_tick: u32,
    pub next_obstacle_id: u32,
}

/// Map a unit draw onto `[MIN_GAP_TOP, MAX_GAP_TOP]`
///
/// A draw of exactly 1.0 would land one past the top of the range, so it is clamped.
pub fn gap_top_from(value: f64) -> f64 {
    let span = MAX_GAP_TOP - MIN_GAP_TOP + 1.0;
    (MIN_GAP_TOP + (value * span).floor()).min(MAX_GAP_TOP)
}

/// Spawn at most one obstacle for `tick`, returning the advanced cursor
pub fn maybe_spawn(tick: u32, cursor: SpawnCursor) -> (SpawnCursor, Option<Obstacle>) {
    if tick < cursor.next_obstacle_tick {
        return (cursor, None);
    }

    let mut rng = Lcg::new(cursor.rng_seed);
    let obstacle = Obstacle::spawn(cursor.next_obstacle_id, gap_top_from(rng.next_f64()));
    let cursor = SpawnCursor {
        rng_seed: rng.state(),
        next_obstacle_tick: cursor.next_obstacle_tick + PIPE_SPAWN_TICKS,
        next_obstacle_id: cursor.next_obstacle_id + 1,
    };
    (cursor, Some(obstacle))
}
