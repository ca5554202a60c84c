/*!
 * Frame Table
 * Fixed frame set with a rotating FIFO cursor and a logical clock
 */

use super::types::{Frame, FrameSnapshot, ReplacementPolicy, StepEvent};
use crate::core::types::{Clock, FrameIndex, PageId};

/// Fixed-capacity frame set
///
/// Capacity is set at construction and never changes. The FIFO cursor
/// and the logical clock are run-scoped: both survive hits and only the
/// cursor is policy-specific.
#[derive(Debug, Clone)]
pub struct FrameTable {
    frames: Vec<Frame>,
    cursor: FrameIndex,
    clock: Clock,
}

impl FrameTable {
    /// Create an all-empty table; capacity is validated upstream by the
    /// scenario configuration
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            frames: vec![Frame::default(); capacity],
            cursor: 0,
            clock: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Index of the frame holding `page`, if resident
    pub fn find(&self, page: PageId) -> Option<FrameIndex> {
        self.frames.iter().position(|f| f.page == Some(page))
    }

    /// Resident pages in frame-index order
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot(self.frames.iter().map(|f| f.page).collect())
    }

    /// Empty every frame and rewind cursor and clock
    pub fn reset(&mut self) {
        for frame in &mut self.frames {
            *frame = Frame::default();
        }
        self.cursor = 0;
        self.clock = 0;
    }

    /// Process one reference: hit check, then eviction+load on fault
    ///
    /// The logical clock advances before the reference is examined, so
    /// the first reference of a run observes clock 1.
    pub fn step(&mut self, page: PageId, policy: ReplacementPolicy) -> StepEvent {
        self.clock += 1;

        if let Some(index) = self.find(page) {
            // Hit. LRU refreshes recency; FIFO mutates nothing.
            if policy == ReplacementPolicy::Lru {
                self.frames[index].touch(self.clock);
            }
            return StepEvent {
                page,
                fault: false,
                evicted: None,
                frames: self.snapshot(),
            };
        }

        let victim = match policy {
            ReplacementPolicy::Fifo => self.fifo_victim(),
            ReplacementPolicy::Lru => self.lru_victim(),
        };
        let evicted = self.frames[victim].page;
        self.frames[victim].load(page, self.clock);

        StepEvent {
            page,
            fault: true,
            evicted,
            frames: self.snapshot(),
        }
    }

    /// FIFO victim: the frame under the rotating cursor
    ///
    /// The cursor advances exactly once per fault and never on hits, so
    /// during partial fill it walks the empty frames in index order and
    /// then keeps rotating over the full table.
    fn fifo_victim(&mut self) -> FrameIndex {
        let victim = self.cursor;
        self.cursor = (self.cursor + 1) % self.frames.len();
        victim
    }

    /// LRU victim: the first empty frame, else the oldest stamp
    ///
    /// The stamp comparison is strict `<`, so on equal stamps the lowest
    /// frame index wins.
    fn lru_victim(&self) -> FrameIndex {
        let mut victim = 0;
        let mut oldest = Clock::MAX;
        for (index, frame) in self.frames.iter().enumerate() {
            if !frame.is_occupied() {
                return index;
            }
            if frame.stamp < oldest {
                oldest = frame.stamp;
                victim = index;
            }
        }
        victim
    }
}
