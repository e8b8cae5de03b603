//! Scenario definition for headless replays.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Sequence of host events and frames to replay.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid scenario {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Scroll {
        top: f32,
    },
    Layout {
        width: f32,
        #[serde(default)]
        height: f32,
    },
    Configure {
        use_shadows: bool,
    },
    Render,
}
