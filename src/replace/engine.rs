/*!
 * Replacement Engine
 * Reference-trace runner over a fixed frame table
 */

use super::frame_table::FrameTable;
use super::traits::{FrameInfo, Replacement};
use super::types::{
    FrameSnapshot, ReplacementPolicy, ReplacementReport, ReplacementStats, StepEvent,
};
use crate::core::types::PageId;
use log::{debug, info};

/// Replacement engine
///
/// Owns the frame table and applies one policy per run. Callers
/// comparing policies must [`ReplacementEngine::reset`] between runs;
/// the engine does not enforce it.
#[derive(Debug, Clone)]
pub struct ReplacementEngine {
    policy: ReplacementPolicy,
    table: FrameTable,
    verbose: bool,
}

impl ReplacementEngine {
    pub fn new(capacity: usize, policy: ReplacementPolicy) -> Self {
        info!(
            "Replacement engine initialized: {} frames, policy {}",
            capacity,
            policy.as_str()
        );
        Self {
            policy,
            table: FrameTable::new(capacity),
            verbose: false,
        }
    }

    /// Enable per-reference event logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn policy(&self) -> ReplacementPolicy {
        self.policy
    }

    pub fn table(&self) -> &FrameTable {
        &self.table
    }

    /// Process a single reference
    pub fn step(&mut self, page: PageId) -> StepEvent {
        let event = self.table.step(page, self.policy);
        if self.verbose {
            if event.fault {
                info!(
                    "Page {} -> {} (fault{})",
                    page,
                    event.frames,
                    event
                        .evicted
                        .map(|p| format!(", evicted {}", p))
                        .unwrap_or_default()
                );
            } else {
                info!("Page {} -> {} (hit)", page, event.frames);
            }
        }
        event
    }

    /// Apply the whole trace in order and accumulate the fault count
    pub fn run(&mut self, trace: &[PageId]) -> ReplacementReport {
        debug!(
            "Starting {} run over {} references",
            self.policy.as_str(),
            trace.len()
        );
        let steps: Vec<StepEvent> = trace.iter().map(|&page| self.step(page)).collect();

        let total_faults = steps.iter().filter(|e| e.fault).count();
        let stats = ReplacementStats {
            total_references: trace.len(),
            total_faults,
            hits: trace.len() - total_faults,
        };
        info!(
            "{} run complete: {} faults over {} references",
            self.policy.as_str(),
            total_faults,
            trace.len()
        );

        ReplacementReport {
            policy: self.policy,
            capacity: self.table.capacity(),
            stats,
            steps,
        }
    }

    /// Empty every frame and rewind the cursor and clock
    pub fn reset(&mut self) {
        self.table.reset();
        debug!("Frame table reset to initial state");
    }

    /// Switch policy in place; state is untouched, so callers normally
    /// pair this with [`ReplacementEngine::reset`]
    pub fn set_policy(&mut self, policy: ReplacementPolicy) {
        self.policy = policy;
    }
}

impl Replacement for ReplacementEngine {
    fn step(&mut self, page: PageId) -> StepEvent {
        ReplacementEngine::step(self, page)
    }

    fn run(&mut self, trace: &[PageId]) -> ReplacementReport {
        ReplacementEngine::run(self, trace)
    }

    fn reset(&mut self) {
        ReplacementEngine::reset(self)
    }
}

impl FrameInfo for ReplacementEngine {
    fn capacity(&self) -> usize {
        self.table.capacity()
    }

    fn resident_pages(&self) -> FrameSnapshot {
        self.table.snapshot()
    }
}
