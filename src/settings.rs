// ⚙️ Settings - runtime knobs for the demo / play binary
// Loaded from JSON; every field is optional and falls back to its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::guessing::DEFAULT_UPPER_BOUND;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Opening balance of the demo account
    #[serde(default)]
    pub opening_balance: f64,

    /// PIN of the demo account
    #[serde(default = "default_demo_pin")]
    pub demo_pin: u32,

    /// Guessing game targets are drawn from [0, upper_bound)
    #[serde(default = "default_upper_bound")]
    pub upper_bound: u32,

    /// Fixed RNG seed for reproducible games
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_demo_pin() -> u32 {
    1234
}

fn default_upper_bound() -> u32 {
    DEFAULT_UPPER_BOUND
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            opening_balance: 0.0,
            demo_pin: default_demo_pin(),
            upper_bound: default_upper_bound(),
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).context("Failed to parse settings JSON")?;

        if settings.upper_bound == 0 {
            anyhow::bail!("upper_bound must be at least 1");
        }

        Ok(settings)
    }
}

// ============================================================================
// TESTS
// ============================================================================
