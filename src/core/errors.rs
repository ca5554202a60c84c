/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors with serialization support
///
/// These are the only fatal errors in the system: they are raised while
/// validating a scenario, before any simulation step runs. Unmet
/// allocation requests and page faults are business outcomes, not errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Frame capacity must be at least 1")]
    #[diagnostic(
        code(config::zero_capacity),
        help("A replacement run needs at least one frame to load pages into.")
    )]
    ZeroFrameCapacity,

    #[error("Frame capacity {requested} exceeds maximum ({max})")]
    #[diagnostic(
        code(config::capacity_exceeded),
        help("Reduce the frame count in the scenario. The bound exists to catch malformed input.")
    )]
    FrameCapacityExceeded { requested: usize, max: usize },

    #[error("Reference trace is empty")]
    #[diagnostic(
        code(config::empty_trace),
        help("A replacement scenario needs at least one page reference.")
    )]
    EmptyReferenceTrace,

    #[error("Failed to read scenario file '{path}': {reason}")]
    #[diagnostic(
        code(config::unreadable_scenario),
        help("Check that the path in MEMSIM_SCENARIO exists and is readable.")
    )]
    UnreadableScenario { path: String, reason: String },

    #[error("Malformed scenario file '{path}': {reason}")]
    #[diagnostic(
        code(config::malformed_scenario),
        help("The scenario file must be valid JSON matching the SimulationConfig schema.")
    )]
    MalformedScenario { path: String, reason: String },
}
