//! Bird integration and obstacle scrolling

use super::state::{Bird, Obstacle};
use crate::consts::*;

/// Apply one tick of gravity (semi-implicit Euler: velocity first, then position)
#[inline]
pub fn integrate_bird(bird: &Bird) -> Bird {
    let velocity_y = bird.velocity_y + GRAVITY;
    Bird {
        y: bird.y + velocity_y,
        velocity_y,
        ..*bird
    }
}

/// Flap impulse: replaces the current velocity
#[inline]
pub fn apply_flap(bird: &Bird) -> Bird {
    Bird {
        velocity_y: FLAP_VELOCITY,
        ..*bird
    }
}

/// Scroll obstacles left by one tick and drop the ones that left the screen
pub fn advance_obstacles(obstacles: &[Obstacle]) -> Vec<Obstacle> {
    obstacles
        .iter()
        .map(|obstacle| Obstacle {
            x: obstacle.x - PIPE_SPEED,
            ..*obstacle
        })
        .filter(|obstacle| obstacle.trailing_edge() > CULL_EDGE)
        .collect()
}
