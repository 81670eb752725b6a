//! Platform abstraction layer
//!
//! Browser bridge for the canvas front end: input events go in, JSON snapshots
//! and score submissions come out. Rendering and networking stay on the JS side.
//! Compiles to nothing on native targets.

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use crate::session::{ScoreSubmission, Session, TickInput};
    use crate::settings::{Settings, normalize_seed};

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        // Fails only if a logger is already installed
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Drafty Bird core loaded");
    }

    /// Session handle owned by the JS game loop
    #[wasm_bindgen]
    pub struct WebGame {
        session: Session,
        input: TickInput,
        pending: Vec<ScoreSubmission>,
    }

    #[wasm_bindgen]
    impl WebGame {
        /// `seed` is a JS number; it is wrapped to 32 bits here
        #[wasm_bindgen(constructor)]
        pub fn new(seed: f64, player: Option<String>) -> WebGame {
            let mut settings = Settings {
                seed: normalize_seed(seed as i64),
                ..Settings::default()
            };
            if let Some(player) = player.filter(|p| !p.trim().is_empty()) {
                settings.player = player;
            }
            WebGame {
                session: Session::new(&settings),
                input: TickInput::default(),
                pending: Vec::new(),
            }
        }

        /// Queue a press for the next tick
        pub fn press(&mut self) {
            self.input.press = true;
        }

        /// Queue a restart for the next tick
        pub fn restart(&mut self) {
            self.input.restart = true;
        }

        pub fn set_autopilot(&mut self, enabled: bool) {
            self.input.autopilot = enabled;
        }

        /// Advance by `dt` seconds of wall time
        pub fn update(&mut self, dt: f64) {
            let submissions = self.session.update(dt, &mut self.input);
            self.pending.extend(submissions);
        }

        /// Current snapshot as JSON for the renderer
        pub fn snapshot_json(&self) -> Result<String, JsValue> {
            serde_json::to_string(self.session.state())
                .map_err(|err| JsValue::from_str(&err.to_string()))
        }

        /// Oldest unsent score submission as JSON, if any
        pub fn take_submission_json(&mut self) -> Result<Option<String>, JsValue> {
            if self.pending.is_empty() {
                return Ok(None);
            }
            let submission = self.pending.remove(0);
            serde_json::to_string(&submission)
                .map(Some)
                .map_err(|err| JsValue::from_str(&err.to_string()))
        }
    }
}
