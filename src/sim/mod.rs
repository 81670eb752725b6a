//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded LCG only
//! - Stable iteration order (obstacles kept in spawn order)
//! - No I/O, logging, rendering or platform dependencies

pub mod collision;
pub mod narration;
pub mod physics;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::has_collision;
pub use narration::{GAMEOVER_STATUS, HUMOR_LINES, IDLE_STATUS, START_STATUS, next_status_text};
pub use rng::{Lcg, next_random};
pub use state::{Bird, GamePhase, GameState, Obstacle};
pub use tick::{begin_game, create_initial_state, flap, step_game};
