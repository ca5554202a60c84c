/*!
 * Hole List
 * Owned ordered sequence of free holes with strategy scans
 *
 * Insertion order is address order and never changes; index-based access
 * replaces the original's pointer-chasing while keeping O(n) scan
 * semantics.
 */

use super::types::Hole;
use crate::core::types::Size;

/// Ordered collection of free holes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoleList {
    holes: Vec<Hole>,
}

impl HoleList {
    /// Build the list from initial sizes; ids are 1-based and sequential
    pub fn from_sizes(sizes: &[Size]) -> Self {
        let holes = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| Hole::new(i as u32 + 1, size))
            .collect();
        Self { holes }
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn as_slice(&self) -> &[Hole] {
        &self.holes
    }

    /// Sum of all remaining hole sizes
    pub fn total_free(&self) -> Size {
        self.holes.iter().map(|h| h.size).sum()
    }

    /// Size of the largest remaining hole
    pub fn largest(&self) -> Size {
        self.holes.iter().map(|h| h.size).max().unwrap_or(0)
    }

    /// First hole in scan order that fits the request
    pub fn first_fit(&self, request: Size) -> Option<usize> {
        self.holes.iter().position(|h| h.fits(request))
    }

    /// Smallest hole that fits the request, scanning the whole list
    ///
    /// The comparison is strict `<`, so on equal sizes the earliest
    /// discovered minimum wins.
    pub fn best_fit(&self, request: Size) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_size = Size::MAX;
        for (idx, hole) in self.holes.iter().enumerate() {
            if hole.fits(request) && hole.size < best_size {
                best = Some(idx);
                best_size = hole.size;
            }
        }
        best
    }

    /// Shrink the hole at `index` by `amount`
    ///
    /// Callers only pass indices returned by a fit scan for the same
    /// amount, so the subtraction cannot underflow.
    pub fn shrink(&mut self, index: usize, amount: Size) -> &Hole {
        debug_assert!(self.holes[index].size >= amount);
        self.holes[index].size -= amount;
        &self.holes[index]
    }
}
