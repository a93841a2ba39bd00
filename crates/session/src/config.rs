//! Session configuration, loadable from TOML settings.

use anyhow::{Context, Result};
use game_core::{Color, Difficulty};
use serde::{Deserialize, Serialize};

/// Serde mirror for the rules engine's `Color` so configs can spell it
/// `"white"` / `"black"`.
#[derive(Serialize, Deserialize)]
#[serde(remote = "Color", rename_all = "lowercase")]
enum ColorDef {
    White,
    Black,
}

/// Configuration for a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Opponent strength
    pub difficulty: Difficulty,
    /// The human's color, fixed for the session lifetime
    #[serde(with = "ColorDef")]
    pub human_color: Color,
    /// Fixed "thinking" delay before the opponent moves, in milliseconds
    pub thinking_delay_ms: u64,
    /// Seed for the session RNG; omit to seed from entropy
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            human_color: Color::White,
            thinking_delay_ms: 2_000,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing session config")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
