/*!
 * Replacement Types
 * Domain types for the fixed-capacity frame replacement engine
 */

use crate::core::types::{Clock, PageId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Replacement policy configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPolicy {
    /// Evict in load order via a rotating cursor, independent of hits
    Fifo,
    /// Evict the frame with the oldest last-use timestamp
    Lru,
}

impl ReplacementPolicy {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            _ => Err(format!("Invalid policy '{}'. Valid: fifo, lru", s)),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lru => "lru",
        }
    }
}

impl Serialize for ReplacementPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReplacementPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One slot of the fixed-size frame table
///
/// `page` is `None` while the frame is empty; `stamp` is the last-use
/// logical time and is meaningful only under LRU.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frame {
    pub page: Option<PageId>,
    pub stamp: Clock,
}

impl Frame {
    #[inline(always)]
    pub const fn is_occupied(&self) -> bool {
        self.page.is_some()
    }

    /// Replace the resident page and stamp the load time
    pub fn load(&mut self, page: PageId, clock: Clock) {
        self.page = Some(page);
        self.stamp = clock;
    }

    /// Refresh the last-use time of a resident page
    pub fn touch(&mut self, clock: Clock) {
        debug_assert!(self.is_occupied());
        self.stamp = clock;
    }
}

/// Resident pages of every frame, in frame-index order, immediately
/// after a step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameSnapshot(pub Vec<Option<PageId>>);

impl fmt::Display for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}

/// Outcome of processing one reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepEvent {
    pub page: PageId,
    pub fault: bool,
    /// Page displaced by this step, when the victim frame was occupied
    pub evicted: Option<PageId>,
    pub frames: FrameSnapshot,
}

/// End-of-run replacement statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplacementStats {
    pub total_references: usize,
    pub total_faults: usize,
    pub hits: usize,
}

impl ReplacementStats {
    /// Fraction of references that faulted, in [0, 1]
    pub fn fault_rate(&self) -> f64 {
        if self.total_references == 0 {
            0.0
        } else {
            self.total_faults as f64 / self.total_references as f64
        }
    }
}

/// Full report of one replacement run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplacementReport {
    pub policy: ReplacementPolicy,
    pub capacity: usize,
    pub stats: ReplacementStats,
    /// One event per trace element, in reference order
    pub steps: Vec<StepEvent>,
}
