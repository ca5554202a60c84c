/*!
 * Run Reports
 * Human rendering and cross-policy comparison of engine reports
 */

use crate::alloc::{AllocationReport, PlacementStrategy};
use crate::replace::{ReplacementPolicy, ReplacementReport, ReplacementStats};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// Render an allocation report the way the memory-state dump reads:
/// holes first, then the placed blocks, then the unmet requests
pub fn render_allocation(report: &AllocationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Memory state after {} run:", report.strategy.as_str());
    let _ = writeln!(out, "Available holes:");
    for hole in &report.holes {
        let _ = writeln!(out, "  hole #{}: {} units free", hole.id, hole.size);
    }
    let _ = writeln!(out, "Placed blocks:");
    for record in &report.records {
        let _ = writeln!(
            out,
            "  request #{}: {} units in hole #{}",
            record.request, record.size, record.hole
        );
    }
    for outcome in report.outcomes.iter().filter(|o| !o.is_met()) {
        let _ = writeln!(
            out,
            "  request #{}: {} units UNMET",
            outcome.request, outcome.size
        );
    }
    let _ = writeln!(
        out,
        "Summary: {} units placed, {} unmet, {} units free, fragmentation {:.2}",
        report.stats.placed_bytes,
        report.stats.unmet_requests,
        report.stats.free_after,
        report.stats.fragmentation()
    );
    out
}

/// Render a replacement report as one frame row per reference
pub fn render_replacement(report: &ReplacementReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reference trace under {}:", report.policy.as_str());
    for step in &report.steps {
        let _ = writeln!(
            out,
            "  page {} -> {} {}",
            step.page,
            step.frames,
            if step.fault { "fault" } else { "hit" }
        );
    }
    let _ = writeln!(
        out,
        "Summary: {} faults over {} references (rate {:.2})",
        report.stats.total_faults,
        report.stats.total_references,
        report.stats.fault_rate()
    );
    out
}

/// Side-by-side outcome of the two placement strategies on one scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyComparison {
    pub first_fit_unmet: usize,
    pub best_fit_unmet: usize,
    pub first_fit_fragmentation: f64,
    pub best_fit_fragmentation: f64,
}

impl StrategyComparison {
    pub fn new(first_fit: &AllocationReport, best_fit: &AllocationReport) -> Self {
        Self {
            first_fit_unmet: first_fit.stats.unmet_requests,
            best_fit_unmet: best_fit.stats.unmet_requests,
            first_fit_fragmentation: first_fit.stats.fragmentation(),
            best_fit_fragmentation: best_fit.stats.fragmentation(),
        }
    }

    /// Strategy that left fewer requests unmet, if they differ
    pub fn winner(&self) -> Option<PlacementStrategy> {
        match self.first_fit_unmet.cmp(&self.best_fit_unmet) {
            std::cmp::Ordering::Less => Some(PlacementStrategy::FirstFit),
            std::cmp::Ordering::Greater => Some(PlacementStrategy::BestFit),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for StrategyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "first_fit: {} unmet, fragmentation {:.2}",
            self.first_fit_unmet, self.first_fit_fragmentation
        )?;
        writeln!(
            f,
            "best_fit:  {} unmet, fragmentation {:.2}",
            self.best_fit_unmet, self.best_fit_fragmentation
        )?;
        match self.winner() {
            Some(strategy) => write!(f, "{} satisfied more requests", strategy.as_str()),
            None => write!(f, "both strategies satisfied the same number of requests"),
        }
    }
}

/// Side-by-side outcome of the two replacement policies on one trace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyComparison {
    pub fifo: ReplacementStats,
    pub lru: ReplacementStats,
}

impl PolicyComparison {
    pub fn new(fifo: &ReplacementReport, lru: &ReplacementReport) -> Self {
        Self {
            fifo: fifo.stats.clone(),
            lru: lru.stats.clone(),
        }
    }

    /// Policy that faulted less, if they differ
    pub fn winner(&self) -> Option<ReplacementPolicy> {
        match self.fifo.total_faults.cmp(&self.lru.total_faults) {
            std::cmp::Ordering::Less => Some(ReplacementPolicy::Fifo),
            std::cmp::Ordering::Greater => Some(ReplacementPolicy::Lru),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for PolicyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fifo: {} page faults", self.fifo.total_faults)?;
        writeln!(f, "lru:  {} page faults", self.lru.total_faults)?;
        match self.winner() {
            Some(policy) => write!(f, "{} performed better", policy.as_str()),
            None => write!(f, "both policies faulted equally"),
        }
    }
}
