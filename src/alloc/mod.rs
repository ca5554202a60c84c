/*!
 * Allocation Engine
 * First-fit / best-fit placement over a mutable ordered list of holes
 */

mod engine;
mod hole_list;
pub mod traits;
pub mod types;

// Re-export public types and traits
pub use engine::AllocatorEngine;
pub use hole_list::HoleList;
pub use traits::{FragmentationInfo, Placement};
pub use types::{
    AllocationRecord, AllocationReport, AllocationStats, Hole, PlacementStrategy, RequestOutcome,
};
