//! Drafty Bird headless runner
//!
//! Plays autopilot runs through the fixed-step scheduler and prints the
//! resulting leaderboard as JSON. The browser build uses `platform::WebGame`.

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "drafty-bird")]
#[command(about = "Play headless Drafty Bird autopilot runs and print the leaderboard")]
struct Args {
    /// Settings JSON file (env overrides still apply)
    settings: Option<std::path::PathBuf>,
    /// Number of runs to play
    #[arg(long, default_value_t = 5)]
    runs: u32,
    /// Earlier leaderboard JSON (this tool's output) to extend
    #[arg(long)]
    leaderboard: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn load_leaderboard(path: &std::path::Path) -> drafty_bird::HighScores {
    use drafty_bird::HighScores;

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("Failed to read {}: {err}; starting fresh", path.display());
            return HighScores::new();
        }
    };
    match HighScores::from_json(&json) {
        Ok(scores) => {
            log::info!("Loaded {} high scores", scores.entries.len());
            scores
        }
        Err(err) => {
            log::warn!("Invalid leaderboard {}: {err}; starting fresh", path.display());
            HighScores::new()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use drafty_bird::consts::SIM_DT;
    use drafty_bird::{HighScores, Session, Settings, TickInput};

    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path).unwrap_or_else(|err| {
            log::warn!("{err}; using defaults");
            Settings::default()
        }),
        None => Settings::default(),
    };
    settings.apply_process_env();
    log::info!(
        "Drafty Bird (headless) starting: seed {}, {} runs",
        settings.seed,
        args.runs
    );

    // Two minutes of play per run
    let max_ticks = (120.0 / SIM_DT) as u32;

    let mut session = Session::new(&settings);
    let mut leaderboard = match &args.leaderboard {
        Some(path) => load_leaderboard(path),
        None => HighScores::new(),
    };
    let mut input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    for _ in 0..args.runs {
        let mut finished = false;
        for _ in 0..max_ticks {
            for submission in session.update(SIM_DT, &mut input) {
                if leaderboard.qualifies(submission.score) {
                    leaderboard.record(&submission);
                } else {
                    log::info!(
                        "Run {} scored {}, not enough for the board",
                        submission.run_id,
                        submission.score
                    );
                }
                finished = true;
            }
            if finished {
                break;
            }
        }
        if !finished {
            log::info!(
                "Run {} still alive after {} ticks with score {}",
                session.state().run_id,
                session.state().tick,
                session.state().score
            );
        }
        session.restart();
    }

    match leaderboard.top_score() {
        Some(best) => log::info!("Best score over {} runs: {best}", args.runs),
        None => log::info!("No run scored a point"),
    }

    match leaderboard.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize leaderboard: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::start, this is just to satisfy the compiler
}
