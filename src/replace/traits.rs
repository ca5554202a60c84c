/*!
 * Replacement Traits
 * Replacement engine abstractions
 */

use super::types::{FrameSnapshot, ReplacementReport, StepEvent};
use crate::core::types::PageId;

/// Replacement interface
pub trait Replacement: Send + Sync {
    /// Resolve one reference as a hit or a fault-then-load
    fn step(&mut self, page: PageId) -> StepEvent;

    /// Apply a whole trace in order
    fn run(&mut self, trace: &[PageId]) -> ReplacementReport;

    /// Empty every frame and rewind run-scoped state
    fn reset(&mut self);
}

/// Frame-set observer
pub trait FrameInfo: Send + Sync {
    /// Fixed frame count of the table
    fn capacity(&self) -> usize;

    /// Resident pages in frame-index order
    fn resident_pages(&self) -> FrameSnapshot;
}
