//! Runtime settings
//!
//! Loaded from an optional JSON file, then overridden by environment variables.
//! This is the only place untrusted numbers enter the crate, so seeds are
//! normalized to `u32` here and the simulation never sees anything else.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::{DEFAULT_SEED, MAX_SUBSTEPS};

pub const ENV_SEED: &str = "DRAFTY_SEED";
pub const ENV_PLAYER: &str = "DRAFTY_PLAYER";
pub const ENV_RESEED: &str = "DRAFTY_RESEED";

/// Wrap any integer seed into the 32-bit LCG state space
#[inline]
pub fn normalize_seed(raw: i64) -> u32 {
    raw as u32
}

fn deserialize_seed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    i64::deserialize(deserializer).map(normalize_seed)
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Errors from loading settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "invalid settings JSON: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the first run
    #[serde(deserialize_with = "deserialize_seed")]
    pub seed: u32,
    /// Name attached to score submissions
    pub player: String,
    /// Mint a new seed on restart instead of replaying the same layout
    pub reseed_on_restart: bool,
    /// Scheduler catch-up limit per update
    pub max_substeps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            player: "Guest".to_string(),
            reseed_on_restart: true,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply overrides from the process environment
    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`; unparseable values are ignored
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<i64>() {
                Ok(seed) => self.seed = normalize_seed(seed),
                Err(_) => log::warn!("Ignoring {ENV_SEED}={raw:?}: not an integer"),
            }
        }

        if let Some(player) = lookup(ENV_PLAYER) {
            let player = player.trim();
            if !player.is_empty() {
                self.player = player.to_string();
            }
        }

        if let Some(raw) = lookup(ENV_RESEED) {
            self.reseed_on_restart = parse_bool(&raw);
        }
    }
}
