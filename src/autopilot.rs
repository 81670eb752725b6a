//! Idle/demo mode AI
//!
//! Steers toward the gap of the next obstacle the bird hasn't cleared yet.
//! Pure: looks at a snapshot and answers "flap now?".

use crate::consts::GAME_HEIGHT;
use crate::sim::GameState;

/// How far below the gap centre the bird is allowed to sag before flapping
const TARGET_OFFSET: f64 = 24.0;
/// Don't flap again while still rising faster than this
const MIN_FLAP_VELOCITY: f64 = -1.5;

/// Vertical position the autopilot is aiming for
pub fn target_y(state: &GameState) -> f64 {
    let bird = &state.bird;
    state
        .obstacles
        .iter()
        .find(|obstacle| obstacle.trailing_edge() >= bird.x - bird.radius)
        .map(|obstacle| obstacle.gap_center() + TARGET_OFFSET)
        .unwrap_or(GAME_HEIGHT / 2.0)
}

/// Whether the autopilot wants to flap this tick
pub fn wants_flap(state: &GameState) -> bool {
    if !state.is_running() {
        return false;
    }
    let bird = &state.bird;
    bird.y > target_y(state) && bird.velocity_y > MIN_FLAP_VELOCITY
}
