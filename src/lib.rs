//! Drafty Bird - a deterministic one-button arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `session`: Single-slot controller glue (input, fixed-step scheduler, score submission)
//! - `autopilot`: Demo AI that plays the game
//! - `highscores`: Local top-10 leaderboard
//! - `settings`: Configuration loading and seed normalization
//! - `platform`: Browser bridge (wasm32 only)

pub mod autopilot;
pub mod highscores;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use session::{ScoreSubmission, Session, TickInput};
pub use settings::{Settings, SettingsError, normalize_seed};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const GAME_WIDTH: f64 = 960.0;
    pub const GAME_HEIGHT: f64 = 540.0;

    /// Bird defaults
    pub const BIRD_X: f64 = 220.0;
    pub const BIRD_RADIUS: f64 = 14.0;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f64 = 0.32;
    /// Velocity set (not added) by a flap
    pub const FLAP_VELOCITY: f64 = -6.3;

    /// Obstacle defaults
    pub const PIPE_SPEED: f64 = 2.9;
    pub const PIPE_WIDTH: f64 = 82.0;
    pub const PIPE_GAP_HEIGHT: f64 = 168.0;
    pub const PIPE_SPAWN_TICKS: u32 = 94;
    pub const MIN_GAP_TOP: f64 = 70.0;
    pub const MAX_GAP_TOP: f64 = GAME_HEIGHT - PIPE_GAP_HEIGHT - 70.0;
    /// Obstacles are kept while their right edge is past this x
    pub const CULL_EDGE: f64 = -8.0;

    /// Seed used when the caller supplies none
    pub const DEFAULT_SEED: u32 = 1337;
    /// Status text rotates every this many points
    pub const SCORE_MESSAGE_INTERVAL: u32 = 5;
}
