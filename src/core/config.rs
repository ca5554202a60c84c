/*!
 * Simulation Configuration
 * Explicit, validated scenario input for both engines
 *
 * The original globals (a compile-time debug flag, fixed-size arrays in
 * main) are replaced by a configuration value passed into each engine.
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{
    DEFAULT_FRAME_CAPACITY, DEFAULT_HOLE_SIZES, DEFAULT_REFERENCE_TRACE, DEFAULT_REQUEST_SIZES,
    MAX_FRAME_CAPACITY,
};
use crate::core::types::{ConfigResult, PageId, Size};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Allocation scenario: initial holes plus the request stream
///
/// An empty hole list is legal (every request ends up unmet); sizes are
/// unsigned so negative input is rejected at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationScenario {
    pub holes: Vec<Size>,
    pub requests: Vec<Size>,
}

impl Default for AllocationScenario {
    fn default() -> Self {
        Self {
            holes: DEFAULT_HOLE_SIZES.to_vec(),
            requests: DEFAULT_REQUEST_SIZES.to_vec(),
        }
    }
}

/// Replacement scenario: reference trace plus frame count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplacementScenario {
    pub trace: Vec<PageId>,
    pub frames: usize,
}

impl Default for ReplacementScenario {
    fn default() -> Self {
        Self {
            trace: DEFAULT_REFERENCE_TRACE.to_vec(),
            frames: DEFAULT_FRAME_CAPACITY,
        }
    }
}

impl ReplacementScenario {
    /// Validate capacity and trace before any simulation step
    pub fn validate(&self) -> ConfigResult<()> {
        if self.frames == 0 {
            return Err(ConfigError::ZeroFrameCapacity);
        }
        if self.frames > MAX_FRAME_CAPACITY {
            return Err(ConfigError::FrameCapacityExceeded {
                requested: self.frames,
                max: MAX_FRAME_CAPACITY,
            });
        }
        if self.trace.is_empty() {
            return Err(ConfigError::EmptyReferenceTrace);
        }
        Ok(())
    }
}

/// Top-level simulation configuration
///
/// `verbose` gates per-event log lines in both engines; reports collect
/// every event regardless of the flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    pub verbose: bool,
    pub allocation: AllocationScenario,
    pub replacement: ReplacementScenario,
}

impl SimulationConfig {
    /// Load a scenario file, falling back to the bundled scenario when
    /// no path is given
    pub fn load(path: Option<&str>) -> ConfigResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                info!("No scenario file given, using bundled scenario");
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON scenario file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::UnreadableScenario {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::MalformedScenario {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Validate every embedded scenario
    pub fn validate(&self) -> ConfigResult<()> {
        self.replacement.validate()
    }
}
