//! Match runs: the result of measuring a line of equal tokens.
//!
//! A run is anchored at its leftmost (horizontal) or topmost (vertical) cell
//! and extends toward increasing coordinates. Runs are never stored on the
//! board; they are return values of measurement and clearing.

use crate::types::Orientation;

/// A run of consecutive equal, non-empty tokens.
///
/// ## Example
///
/// ```
/// use gridmatch::types::{MatchRun, Orientation, MIN_MATCH_LENGTH};
///
/// let run = MatchRun::new(Orientation::Horizontal, 1, 2, 4);
/// assert!(run.is_match(MIN_MATCH_LENGTH));
/// assert!(!run.is_match(5));
/// assert_eq!(run.cells().last(), Some((4, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchRun {
    /// Direction the run extends in
    pub orientation: Orientation,

    /// Anchor column
    pub x: usize,

    /// Anchor row
    pub y: usize,

    /// Number of cells in the run, anchor included.
    /// Zero when the anchor cell is empty.
    pub length: usize,
}

impl MatchRun {
    /// Create a run
    pub fn new(orientation: Orientation, x: usize, y: usize, length: usize) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
        }
    }

    /// Anchor coordinates `(x, y)`
    #[inline]
    pub fn anchor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Check if the run is long enough to clear under `min_length`
    ///
    /// Pass [`MatchEngine::min_length`](crate::engine::MatchEngine::min_length)
    /// to apply the rule of the engine that produced the run.
    #[inline]
    pub fn is_match(&self, min_length: usize) -> bool {
        self.length >= min_length
    }

    /// Check if the run is empty (anchor cell held no token)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterate the coordinates covered by the run, anchor first
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dx, dy) = self.orientation.step();
        let (x, y) = (self.x, self.y);
        (0..self.length).map(move |i| (x + i * dx, y + i * dy))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
