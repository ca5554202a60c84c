/*!
 * Allocator Types
 * Domain types for the contiguous free-space allocation engine
 */

use crate::core::types::{HoleId, RequestId, Size};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placement strategy configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// First hole in scan order that satisfies the request
    FirstFit,
    /// Smallest hole that still satisfies the request
    BestFit,
}

impl PlacementStrategy {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "first_fit" | "firstfit" | "first" => Ok(Self::FirstFit),
            "best_fit" | "bestfit" | "best" => Ok(Self::BestFit),
            _ => Err(format!("Invalid strategy '{}'. Valid: first_fit, best_fit", s)),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstFit => "first_fit",
            Self::BestFit => "best_fit",
        }
    }
}

impl Serialize for PlacementStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlacementStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// A free memory region
///
/// Holes keep their identity and list position for the whole run: a hole
/// whose size reaches 0 stays in place (the simulated policies never
/// coalesce or delete).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hole {
    pub id: HoleId,
    pub size: Size,
}

impl Hole {
    pub fn new(id: HoleId, size: Size) -> Self {
        Self { id, size }
    }

    /// Whether this hole can host a request of the given size
    #[inline(always)]
    pub const fn fits(&self, request: Size) -> bool {
        self.size >= request
    }
}

/// The result of successfully placing one request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationRecord {
    pub request: RequestId,
    pub size: Size,
    pub hole: HoleId,
}

/// Per-request outcome, met or not
///
/// Every request is individually signaled; an unmet request is a normal
/// business outcome, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestOutcome {
    pub request: RequestId,
    pub size: Size,
    pub placement: Option<HoleId>,
}

impl RequestOutcome {
    #[inline(always)]
    pub const fn is_met(&self) -> bool {
        self.placement.is_some()
    }
}

/// End-of-run allocation statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationStats {
    pub total_requested: Size,
    pub placed_bytes: Size,
    pub free_before: Size,
    pub free_after: Size,
    pub unmet_requests: usize,
    pub largest_hole: Size,
}

impl AllocationStats {
    /// Free-space fragmentation ratio in [0, 1]
    ///
    /// 0 means all remaining free space sits in one hole; values near 1
    /// mean the free space is shattered across many small holes.
    pub fn fragmentation(&self) -> f64 {
        if self.free_after == 0 {
            0.0
        } else {
            1.0 - self.largest_hole as f64 / self.free_after as f64
        }
    }
}

/// Full report of one allocation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationReport {
    pub strategy: PlacementStrategy,
    /// One record per successful request, in request order
    pub records: Vec<AllocationRecord>,
    /// One outcome per request, met or not, in request order
    pub outcomes: Vec<RequestOutcome>,
    pub stats: AllocationStats,
    /// Hole state after the run, in address order
    pub holes: Vec<Hole>,
}
