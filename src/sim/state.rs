//! Game state and core simulation types
//!
//! A `GameState` is one snapshot of the world. Transitions in `tick` consume a
//! snapshot and return the next one; nothing mutates a snapshot in place once
//! it has been handed out.

use serde::{Deserialize, Serialize};

use super::narration::IDLE_STATUS;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Waiting for the first press
    Idle,
    /// Active gameplay
    Running,
    /// Run ended by a collision
    GameOver,
}

/// The player's bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bird {
    /// Horizontal lane position (constant within a run)
    pub x: f64,
    pub y: f64,
    pub velocity_y: f64,
    pub radius: f64,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            x: BIRD_X,
            y: GAME_HEIGHT / 2.0,
            velocity_y: 0.0,
            radius: BIRD_RADIUS,
        }
    }
}

impl Bird {
    #[inline]
    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }
}

/// An obstacle (a pipe pair with a passable gap)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obstacle {
    /// Monotonically increasing within a run
    pub id: u32,
    /// Left edge
    pub x: f64,
    pub width: f64,
    pub gap_top: f64,
    pub gap_height: f64,
    /// Set once the bird has cleared it and it has been scored
    pub passed: bool,
}

impl Obstacle {
    /// New obstacle just off the right edge of the world
    pub fn spawn(id: u32, gap_top: f64) -> Self {
        Self {
            id,
            x: GAME_WIDTH + PIPE_WIDTH,
            width: PIPE_WIDTH,
            gap_top,
            gap_height: PIPE_GAP_HEIGHT,
            passed: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap_height
    }

    #[inline]
    pub fn gap_center(&self) -> f64 {
        self.gap_top + self.gap_height / 2.0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub phase: GamePhase,
    /// Incremented each time a run begins (0 before the first run)
    pub run_id: u32,
    /// Ticks elapsed in the current run
    pub tick: u32,
    /// Current LCG state
    pub rng_seed: u32,
    pub next_obstacle_tick: u32,
    pub next_obstacle_id: u32,
    pub bird: Bird,
    /// Obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub status_text: String,
}

impl GameState {
    /// Create an idle state with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            phase: GamePhase::Idle,
            run_id: 0,
            tick: 0,
            rng_seed: seed,
            next_obstacle_tick: PIPE_SPAWN_TICKS,
            next_obstacle_id: 1,
            bird: Bird::default(),
            obstacles: Vec::new(),
            score: 0,
            status_text: IDLE_STATUS.to_string(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
