//! Collision detection
//!
//! The bird is tested as an axis-aligned box (its circle's bounding extent)
//! against the world bounds and against each obstacle's two solid columns.

use super::state::{Bird, Obstacle};
use crate::consts::GAME_HEIGHT;

/// Check whether the bird touches the floor/ceiling or any obstacle body
pub fn has_collision(bird: &Bird, obstacles: &[Obstacle]) -> bool {
    out_of_bounds(bird) || obstacles.iter().any(|obstacle| hits_obstacle(bird, obstacle))
}

/// Touching the ceiling or floor counts as a hit
#[inline]
pub fn out_of_bounds(bird: &Bird) -> bool {
    bird.top() <= 0.0 || bird.bottom() >= GAME_HEIGHT
}

/// Bird overlaps the obstacle horizontally and sticks out of its gap
pub fn hits_obstacle(bird: &Bird, obstacle: &Obstacle) -> bool {
    // Strict overlap: touching edges is not a hit
    let intersects_x =
        bird.x + bird.radius > obstacle.x && bird.x - bird.radius < obstacle.trailing_edge();
    if !intersects_x {
        return false;
    }

    bird.top() < obstacle.gap_top || bird.bottom() > obstacle.gap_bottom()
}
