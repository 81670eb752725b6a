//! Fixed timestep simulation tick
//!
//! Phase machine and per-tick pipeline. Every function takes a snapshot by value
//! and returns the next one; calls that are illegal for the current phase hand
//! the input back untouched.

use super::collision::has_collision;
use super::narration::{GAMEOVER_STATUS, START_STATUS, next_status_text, score_passed};
use super::physics::{advance_obstacles, apply_flap, integrate_bird};
use super::spawn::{SpawnCursor, maybe_spawn};
use super::state::{GamePhase, GameState};

/// Fresh idle snapshot for `seed`
pub fn create_initial_state(seed: u32) -> GameState {
    GameState::new(seed)
}

/// `Idle -> Running`. Resets the run but keeps the seed and bumps `run_id`.
pub fn begin_game(state: GameState) -> GameState {
    if state.phase != GamePhase::Idle {
        return state;
    }

    GameState {
        phase: GamePhase::Running,
        run_id: state.run_id + 1,
        status_text: START_STATUS.to_string(),
        ..GameState::new(state.rng_seed)
    }
}

/// Flap impulse (running only)
pub fn flap(state: GameState) -> GameState {
    if !state.is_running() {
        return state;
    }

    GameState {
        bird: apply_flap(&state.bird),
        ..state
    }
}

/// Advance the game state by one tick
pub fn step_game(state: GameState) -> GameState {
    if !state.is_running() {
        return state;
    }

    let tick = state.tick + 1;

    let mut obstacles = advance_obstacles(&state.obstacles);

    let (cursor, spawned) = maybe_spawn(
        tick,
        SpawnCursor {
            rng_seed: state.rng_seed,
            next_obstacle_tick: state.next_obstacle_tick,
            next_obstacle_id: state.next_obstacle_id,
        },
    );
    obstacles.extend(spawned);

    let bird = integrate_bird(&state.bird);

    // Scoring runs before the collision check so a pass-and-crash tick still counts
    let score = state.score + score_passed(&bird, &mut obstacles);

    let (phase, status_text) = if has_collision(&bird, &obstacles) {
        (GamePhase::GameOver, GAMEOVER_STATUS.to_string())
    } else {
        (GamePhase::Running, next_status_text(score, &state.status_text))
    };

    GameState {
        phase,
        run_id: state.run_id,
        tick,
        rng_seed: cursor.rng_seed,
        next_obstacle_tick: cursor.next_obstacle_tick,
        next_obstacle_id: cursor.next_obstacle_id,
        bird,
        obstacles,
        score,
        status_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::narration::{HUMOR_LINES, IDLE_STATUS};
    use crate::sim::state::{Bird, Obstacle};
    use proptest::prelude::*;

    fn run(seed: u32, ticks: u32) -> Vec<GameState> {
        let mut state = begin_game(create_initial_state(seed));
        let mut history = Vec::new();
        for i in 0..ticks {
            // Keep the bird airborne so obstacles get a chance to spawn
            if state.bird.y > GAME_HEIGHT / 2.0 && i % 3 == 0 {
                state = flap(state);
            }
            state = step_game(state);
            history.push(state.clone());
        }
        history
    }

    #[test]
    fn test_begin_from_idle() {
        let idle = create_initial_state(42);
        assert_eq!(idle.status_text, IDLE_STATUS);

        let running = begin_game(idle);
        assert_eq!(running.phase, GamePhase::Running);
        assert_eq!(running.run_id, 1);
        assert_eq!(running.rng_seed, 42);
        assert_eq!(running.tick, 0);
        assert_eq!(running.score, 0);
        assert_eq!(running.status_text, START_STATUS);
    }

    #[test]
    fn test_begin_is_noop_outside_idle() {
        let running = begin_game(create_initial_state(42));
        assert_eq!(begin_game(running.clone()), running);

        let over = GameState {
            phase: GamePhase::GameOver,
            ..running
        };
        assert_eq!(begin_game(over.clone()), over);
    }

    #[test]
    fn test_begin_preserves_run_counter() {
        let idle = GameState {
            run_id: 6,
            ..create_initial_state(3)
        };
        assert_eq!(begin_game(idle).run_id, 7);
    }

    #[test]
    fn test_flap_noop_when_idle() {
        let idle = create_initial_state(1);
        assert_eq!(flap(idle.clone()), idle);
    }

    #[test]
    fn test_flap_sets_velocity_when_running() {
        let running = begin_game(create_initial_state(1));
        let flapped = flap(running);
        assert_eq!(flapped.bird.velocity_y, FLAP_VELOCITY);
    }

    #[test]
    fn test_step_noop_unless_running() {
        let idle = create_initial_state(1);
        assert_eq!(step_game(idle.clone()), idle);

        let over = GameState {
            phase: GamePhase::GameOver,
            ..begin_game(create_initial_state(1))
        };
        assert_eq!(step_game(over.clone()), over);
    }

    #[test]
    fn test_scores_passed_obstacle() {
        let running = begin_game(create_initial_state(25));
        let state = GameState {
            obstacles: vec![Obstacle {
                id: 1,
                x: running.bird.x - 90.0,
                width: 60.0,
                gap_top: 180.0,
                gap_height: 180.0,
                passed: false,
            }],
            bird: Bird {
                y: 250.0,
                ..running.bird
            },
            ..running
        };

        let advanced = step_game(state);
        assert_eq!(advanced.score, 1);
        assert!(advanced.obstacles[0].passed);
        assert_eq!(advanced.phase, GamePhase::Running);

        let again = step_game(advanced);
        assert_eq!(again.score, 1);
    }

    #[test]
    fn test_pass_and_crash_same_tick_still_scores() {
        let running = begin_game(create_initial_state(25));
        let state = GameState {
            obstacles: vec![Obstacle {
                x: running.bird.x - 90.0,
                width: 60.0,
                ..Obstacle::spawn(1, 180.0)
            }],
            bird: Bird {
                y: 522.0,
                velocity_y: 5.0,
                ..running.bird
            },
            ..running
        };

        let over = step_game(state);
        assert_eq!(over.phase, GamePhase::GameOver);
        assert_eq!(over.score, 1);
        assert_eq!(over.status_text, GAMEOVER_STATUS);
    }

    #[test]
    fn test_falls_to_floor_at_tick_40() {
        // y_n = 270 + 0.16 * n * (n + 1); floor hit when y_n + 14 >= 540
        let mut state = begin_game(create_initial_state(1337));
        for _ in 0..39 {
            state = step_game(state);
            assert_eq!(state.phase, GamePhase::Running);
        }
        state = step_game(state);
        assert_eq!(state.tick, 40);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.bird.bottom() >= GAME_HEIGHT);
        assert!(state.obstacles.is_empty());

        // Terminal: further ticks do nothing
        assert_eq!(step_game(state.clone()), state);
    }

    #[test]
    fn test_first_spawn_at_cadence() {
        let history = run(1337, 100);
        assert!(history[92].obstacles.is_empty());
        let spawned = &history[93];
        assert_eq!(spawned.tick, 94);
        assert_eq!(spawned.phase, GamePhase::Running);
        assert_eq!(spawned.obstacles.len(), 1);
        assert_eq!(spawned.obstacles[0].id, 1);
        assert_eq!(spawned.next_obstacle_id, 2);
        assert_eq!(spawned.next_obstacle_tick, 188);
        assert_ne!(spawned.rng_seed, 1337);
    }

    #[test]
    fn test_offscreen_obstacle_is_culled() {
        let running = begin_game(create_initial_state(9));
        let state = GameState {
            obstacles: vec![
                Obstacle {
                    x: -100.0,
                    passed: true,
                    ..Obstacle::spawn(1, 150.0)
                },
                Obstacle::spawn(2, 150.0),
            ],
            ..running
        };

        let next = step_game(state);
        assert_eq!(next.obstacles.len(), 1);
        assert_eq!(next.obstacles[0].id, 2);
    }

    #[test]
    fn test_milestone_updates_status() {
        let running = begin_game(create_initial_state(2));
        let state = GameState {
            score: 4,
            obstacles: vec![Obstacle {
                x: 100.0,
                ..Obstacle::spawn(1, 150.0)
            }],
            ..running
        };

        let next = step_game(state);
        assert_eq!(next.score, 5);
        assert_eq!(next.status_text, HUMOR_LINES[0]);

        let next = step_game(next);
        assert_eq!(next.status_text, HUMOR_LINES[0]);
    }

    #[test]
    fn test_deterministic_runs() {
        assert_eq!(run(1337, 400), run(1337, 400));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = run(1, 100);
        let b = run(1337, 100);
        assert_ne!(
            a[99].obstacles.first().map(|o| o.gap_top),
            b[99].obstacles.first().map(|o| o.gap_top)
        );
    }

    proptest! {
        #[test]
        fn prop_same_seed_same_snapshot(seed in any::<u32>(), ticks in 1u32..300) {
            let first = run(seed, ticks);
            let second = run(seed, ticks);
            prop_assert_eq!(first.last(), second.last());
        }

        #[test]
        fn prop_score_never_decreases(seed in any::<u32>()) {
            let history = run(seed, 300);
            for pair in history.windows(2) {
                prop_assert!(pair[1].score >= pair[0].score);
                prop_assert_eq!(pair[1].run_id, 1);
            }
        }
    }
}
