/*!
 * Allocator Engine
 * Contiguous free-space placement under a selectable strategy
 */

use super::hole_list::HoleList;
use super::traits::{FragmentationInfo, Placement};
use super::types::{
    AllocationRecord, AllocationReport, AllocationStats, Hole, PlacementStrategy, RequestOutcome,
};
use crate::core::types::Size;
use log::{debug, info, warn};

/// Allocation engine
///
/// Owns the hole list and the initial sizes it was built from, so runs
/// under different strategies can start from identical state via
/// [`AllocatorEngine::reset`]. Callers comparing strategies must reset
/// between runs; the engine does not enforce it.
#[derive(Debug, Clone)]
pub struct AllocatorEngine {
    strategy: PlacementStrategy,
    initial_sizes: Vec<Size>,
    holes: HoleList,
    verbose: bool,
}

impl AllocatorEngine {
    pub fn new(initial_sizes: Vec<Size>, strategy: PlacementStrategy) -> Self {
        let holes = HoleList::from_sizes(&initial_sizes);
        info!(
            "Allocator engine initialized: {} holes, {} units free, strategy {}",
            holes.len(),
            holes.total_free(),
            strategy.as_str()
        );
        Self {
            strategy,
            initial_sizes,
            holes,
            verbose: false,
        }
    }

    /// Enable per-request event logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    /// Current hole state, in address order
    pub fn holes(&self) -> &[Hole] {
        self.holes.as_slice()
    }

    /// Process every request in order, mutating holes in place
    ///
    /// Unmet requests are warned about and recorded, and processing
    /// continues with the next request.
    pub fn allocate(&mut self, requests: &[Size]) -> AllocationReport {
        debug!(
            "Starting {} allocation for {} requests",
            self.strategy.as_str(),
            requests.len()
        );
        let free_before = self.holes.total_free();
        let mut records = Vec::new();
        let mut outcomes = Vec::with_capacity(requests.len());

        for (i, &size) in requests.iter().enumerate() {
            let request = i as u32 + 1;
            let selected = match self.strategy {
                PlacementStrategy::FirstFit => self.holes.first_fit(size),
                PlacementStrategy::BestFit => self.holes.best_fit(size),
            };

            let placement = match selected {
                Some(index) => {
                    let hole = self.holes.shrink(index, size);
                    if self.verbose {
                        info!(
                            "Request #{} ({} units) placed in hole #{}, {} units left",
                            request, size, hole.id, hole.size
                        );
                    }
                    records.push(AllocationRecord {
                        request,
                        size,
                        hole: hole.id,
                    });
                    Some(hole.id)
                }
                None => {
                    warn!("Request #{} ({} units) does not fit in any hole", request, size);
                    None
                }
            };
            outcomes.push(RequestOutcome {
                request,
                size,
                placement,
            });
        }

        let stats = AllocationStats {
            total_requested: requests.iter().sum(),
            placed_bytes: records.iter().map(|r| r.size).sum(),
            free_before,
            free_after: self.holes.total_free(),
            unmet_requests: outcomes.iter().filter(|o| !o.is_met()).count(),
            largest_hole: self.holes.largest(),
        };
        info!(
            "{} run complete: {}/{} requests placed, {} units free",
            self.strategy.as_str(),
            records.len(),
            requests.len(),
            stats.free_after
        );

        AllocationReport {
            strategy: self.strategy,
            records,
            outcomes,
            stats,
            holes: self.holes.as_slice().to_vec(),
        }
    }

    /// Rebuild the hole list from the original sizes, discarding all
    /// prior mutation
    pub fn reset(&mut self) {
        self.holes = HoleList::from_sizes(&self.initial_sizes);
        debug!("Hole list reset to initial state");
    }

    /// Switch strategy in place; state is untouched, so callers normally
    /// pair this with [`AllocatorEngine::reset`]
    pub fn set_strategy(&mut self, strategy: PlacementStrategy) {
        self.strategy = strategy;
    }
}

impl Placement for AllocatorEngine {
    fn allocate(&mut self, requests: &[Size]) -> AllocationReport {
        AllocatorEngine::allocate(self, requests)
    }

    fn reset(&mut self) {
        AllocatorEngine::reset(self)
    }
}

impl FragmentationInfo for AllocatorEngine {
    fn total_free(&self) -> Size {
        self.holes.total_free()
    }

    fn largest_hole(&self) -> Size {
        self.holes.largest()
    }
}
