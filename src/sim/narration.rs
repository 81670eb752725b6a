//! Score tracking and the rotating status line

use super::state::{Bird, Obstacle};
use crate::consts::SCORE_MESSAGE_INTERVAL;

pub const IDLE_STATUS: &str = "Tap Space or click to start sealing drafts.";
pub const START_STATUS: &str = "Draft Detector deployed.";
pub const GAMEOVER_STATUS: &str = "Run complete. The draft won this round.";

/// Milestone lines, one every `SCORE_MESSAGE_INTERVAL` points, wrapping around
pub const HUMOR_LINES: [&str; 6] = [
    "Five ducts sealed. The thermostat nods approvingly.",
    "Ten down. Somewhere a window stops whistling.",
    "The attic draft has filed a formal complaint.",
    "Comfort levels rising. Sweaters now optional.",
    "Weatherstripping legends will speak of this run.",
    "The draft is reconsidering its career choices.",
];

/// Mark every obstacle the bird has fully cleared and return the points earned.
///
/// Each obstacle scores at most once.
pub fn score_passed(bird: &Bird, obstacles: &mut [Obstacle]) -> u32 {
    let mut points = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.trailing_edge() < bird.x {
            obstacle.passed = true;
            points += 1;
        }
    }
    points
}

/// Status text for `score`, keeping `current` between milestones
pub fn next_status_text(score: u32, current: &str) -> String {
    if score == 0 || score % SCORE_MESSAGE_INTERVAL != 0 {
        return current.to_string();
    }
    let idx = (score / SCORE_MESSAGE_INTERVAL - 1) as usize % HUMOR_LINES.len();
    HUMOR_LINES[idx].to_string()
}
