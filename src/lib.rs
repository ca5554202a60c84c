/*!
 * memsim Library
 * Offline simulators of classical memory-management policies:
 * contiguous free-space allocation and fixed-capacity frame replacement
 */

pub mod alloc;
pub mod core;
pub mod monitoring;
pub mod replace;
pub mod report;

// Re-exports
pub use crate::core::{AllocationScenario, ConfigError, ReplacementScenario, SimulationConfig};
pub use alloc::{
    AllocationRecord, AllocationReport, AllocationStats, AllocatorEngine, Hole, PlacementStrategy,
    RequestOutcome,
};
pub use monitoring::init_tracing;
pub use replace::{
    Frame, FrameSnapshot, FrameTable, ReplacementEngine, ReplacementPolicy, ReplacementReport,
    StepEvent,
};
pub use report::{PolicyComparison, StrategyComparison};
