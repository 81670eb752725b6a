//! Session controller
//!
//! Owns the single current `GameState` slot and everything around the pure
//! simulation: translating presses into begin/flap, restarting, the fixed-step
//! scheduler, and emitting one score submission per completed run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::autopilot;
use crate::consts::SIM_DT;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, begin_game, create_initial_state, flap, step_game};

/// Longest frame the scheduler will try to catch up on (seconds)
const MAX_FRAME_TIME: f64 = 0.1;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Space/click: begins an idle run, flaps a running one
    pub press: bool,
    /// Restart button
    pub restart: bool,
    /// Idle/demo mode - autopilot plays the game
    pub autopilot: bool,
}

/// Score to report for a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    /// Dedupe key, not part of the payload
    #[serde(skip)]
    pub run_id: u32,
    pub player: String,
    pub score: u32,
}

/// Seed for the run after `run_id` finished with LCG state `seed`
pub fn reseed(seed: u32, run_id: u32) -> u32 {
    let mut rng = Pcg32::seed_from_u64((u64::from(seed) << 32) | u64::from(run_id));
    rng.random()
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    player: String,
    reseed_on_restart: bool,
    max_substeps: u32,
    accumulator: f64,
    /// Last run_id a submission was emitted for (0 = none)
    submitted_run: u32,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: create_initial_state(settings.seed),
            player: settings.player.clone(),
            reseed_on_restart: settings.reseed_on_restart,
            max_substeps: settings.max_substeps.max(1),
            accumulator: 0.0,
            submitted_run: 0,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Space/click. Returns true if this press started a run.
    pub fn press(&mut self) -> bool {
        if self.state.phase == GamePhase::Idle {
            self.apply(begin_game);
            true
        } else {
            self.apply(flap);
            false
        }
    }

    /// Replace the snapshot with a fresh idle one
    ///
    /// `run_id` carries over; the next `begin` mints the following id, so a
    /// restarted run never shares an id with a submitted one.
    pub fn restart(&mut self) {
        let seed = if self.reseed_on_restart {
            reseed(self.state.rng_seed, self.state.run_id)
        } else {
            self.state.rng_seed
        };
        log::debug!("Restart after run {} with seed {}", self.state.run_id, seed);
        self.state = GameState {
            run_id: self.state.run_id,
            ..create_initial_state(seed)
        };
    }

    /// Apply one-shot input and advance one tick
    pub fn step(&mut self, input: &TickInput) -> Option<ScoreSubmission> {
        if input.restart {
            self.restart();
        }
        if input.press {
            self.press();
        }
        if input.autopilot {
            let phase = self.state.phase;
            match phase {
                GamePhase::Idle => {
                    self.apply(begin_game);
                }
                GamePhase::Running if autopilot::wants_flap(&self.state) => {
                    self.apply(flap);
                }
                _ => {}
            }
        }

        self.apply(step_game);
        self.take_submission()
    }

    /// Run as many fixed ticks as `elapsed` seconds cover, up to the substep cap
    ///
    /// One-shot inputs are cleared once consumed by the first tick.
    pub fn update(&mut self, elapsed: f64, input: &mut TickInput) -> Vec<ScoreSubmission> {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut submissions = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < self.max_substeps {
            submissions.extend(self.step(input));
            self.accumulator -= SIM_DT;
            substeps += 1;

            input.press = false;
            input.restart = false;
        }

        // Capped out: drop whole ticks still owed so idle frames don't replay them
        if substeps == self.max_substeps && self.accumulator >= SIM_DT {
            log::debug!(
                "Scheduler behind by {:.3}s, dropping backlog",
                self.accumulator
            );
            self.accumulator %= SIM_DT;
        }
        submissions
    }

    fn apply(&mut self, transition: impl FnOnce(GameState) -> GameState) {
        let before = self.state.phase;
        self.state = transition(std::mem::take(&mut self.state));

        match (before, self.state.phase) {
            (GamePhase::Idle, GamePhase::Running) => {
                log::info!(
                    "Run {} started (seed {})",
                    self.state.run_id,
                    self.state.rng_seed
                );
            }
            (GamePhase::Running, GamePhase::GameOver) => {
                log::info!(
                    "Run {} over at tick {} with score {}",
                    self.state.run_id,
                    self.state.tick,
                    self.state.score
                );
            }
            _ => {}
        }
    }

    /// Emit the finished run's score exactly once
    fn take_submission(&mut self) -> Option<ScoreSubmission> {
        let state = &self.state;
        if !state.is_over()
            || state.run_id == 0
            || state.run_id == self.submitted_run
        {
            return None;
        }

        self.submitted_run = state.run_id;
        log::debug!("Submitting score {} for run {}", state.score, state.run_id);
        Some(ScoreSubmission {
            run_id: state.run_id,
            player: self.player.clone(),
            score: state.score,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
