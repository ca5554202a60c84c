/*!
 * Allocator Traits
 * Allocation engine abstractions
 */

use super::types::AllocationReport;
use crate::core::types::Size;

/// Placement interface
pub trait Placement: Send + Sync {
    /// Process a request stream against the owned hole state
    fn allocate(&mut self, requests: &[Size]) -> AllocationReport;

    /// Restore the hole state the engine was built with
    fn reset(&mut self);
}

/// Free-space statistics provider
pub trait FragmentationInfo: Send + Sync {
    /// Sum of all remaining hole sizes
    fn total_free(&self) -> Size;

    /// Size of the largest remaining hole
    fn largest_hole(&self) -> Size;

    /// Free-space fragmentation ratio in [0, 1]
    fn fragmentation(&self) -> f64 {
        let free = self.total_free();
        if free == 0 {
            0.0
        } else {
            1.0 - self.largest_hole() as f64 / free as f64
        }
    }
}
