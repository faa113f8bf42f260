//! Match engine: detection, run measurement and clearing.
//!
//! ## Scan Order
//!
//! Every scan visits anchors column by column (`x` outer, `y` inner). Only
//! anchors where a full match window fits on the board are visited:
//!
//! - Horizontal: `x` in `[0, width - min_length]`, every `y`
//! - Vertical: every `x`, `y` in `[0, height - min_length]`
//!
//! Boards narrower (or shorter) than the window have no anchors on that axis.
//!
//! ## Clear-As-You-Go
//!
//! Clearing empties a run the moment its anchor is visited. Later anchors
//! inside the same run then see an empty cell, measure length 0 and do
//! nothing, so a run of 5 is counted once as 5 rather than as 5 + 4 + 3.
//! Scanning a snapshot and clearing afterwards would double count.

use crate::board::Board;
use crate::error::{BoardError, EngineError};
use crate::types::{ClearReceipt, MatchRun, Orientation, MIN_MATCH_LENGTH};

// ============================================================================
// ClearReport
// ============================================================================

/// Runs removed by a single clearing scan.
///
/// Lets the caller tear down whatever it draws for each cleared cell without
/// diffing the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearReport {
    /// Axis that was scanned
    pub orientation: Orientation,

    /// Cleared runs, in scan order
    pub runs: Vec<MatchRun>,
}

impl ClearReport {
    /// Number of cells cleared
    pub fn count(&self) -> usize {
        self.runs.iter().map(|run| run.length).sum()
    }

    /// Check if nothing was cleared
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Coordinates of every cleared cell, in scan order
    pub fn cleared_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.runs.iter().flat_map(MatchRun::cells)
    }
}

// ============================================================================
// MatchEngine
// ============================================================================

/// Stateless match-3 scanner.
///
/// The engine holds only its match rule; the board is borrowed per call.
///
/// ## Example
///
/// ```
/// use gridmatch::board::Board;
/// use gridmatch::engine::MatchEngine;
///
/// let mut board: Board = "AAABB".parse().unwrap();
/// let engine = MatchEngine::new();
///
/// assert!(engine.has_horizontal_match(&board));
/// assert_eq!(engine.clear_horizontal_matches(&mut board), 3);
/// assert_eq!(board.to_string(), "...BB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEngine {
    min_length: usize,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    /// Create an engine that matches runs of [`MIN_MATCH_LENGTH`] or more
    pub fn new() -> Self {
        Self {
            min_length: MIN_MATCH_LENGTH,
        }
    }

    /// Create an engine with a custom minimum run length
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidMinLength`] if `min_length < 2`.
    ///
    /// # Example
    ///
    /// ```
    /// use gridmatch::board::Board;
    /// use gridmatch::engine::MatchEngine;
    ///
    /// let board: Board = "AAAB".parse().unwrap();
    /// let engine = MatchEngine::with_min_length(4).unwrap();
    /// assert!(!engine.has_horizontal_match(&board));
    ///
    /// assert!(MatchEngine::with_min_length(1).is_err());
    /// ```
    pub fn with_min_length(min_length: usize) -> Result<Self, EngineError> {
        if min_length < 2 {
            return Err(EngineError::InvalidMinLength(min_length));
        }
        Ok(Self { min_length })
    }

    /// Minimum run length this engine treats as a match
    #[inline]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    // ========================================================================
    // Detection
    // ========================================================================

    /// Check if any horizontal match exists on the board
    ///
    /// Always false when the board is narrower than the match length.
    pub fn has_horizontal_match(&self, board: &Board) -> bool {
        self.has_match(board, Orientation::Horizontal)
    }

    /// Check if any vertical match exists on the board
    ///
    /// Always false when the board is shorter than the match length.
    pub fn has_vertical_match(&self, board: &Board) -> bool {
        self.has_match(board, Orientation::Vertical)
    }

    /// Check if a horizontal match window starts at `(x, y)`
    ///
    /// Returns `Ok(false)` when the window runs off the right edge.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if `(x, y)` is not on the board.
    pub fn has_horizontal_match_at(&self, board: &Board, x: usize, y: usize) -> Result<bool, BoardError> {
        self.has_match_at(board, Orientation::Horizontal, x, y)
    }

    /// Check if a vertical match window starts at `(x, y)`
    ///
    /// Returns `Ok(false)` when the window runs off the bottom edge.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if `(x, y)` is not on the board.
    pub fn has_vertical_match_at(&self, board: &Board, x: usize, y: usize) -> Result<bool, BoardError> {
        self.has_match_at(board, Orientation::Vertical, x, y)
    }

    fn has_match(&self, board: &Board, orientation: Orientation) -> bool {
        anchors(board.width(), board.height(), self.min_length, orientation)
            .any(|(x, y)| self.window_matches(board, orientation, x, y))
    }

    fn has_match_at(
        &self,
        board: &Board,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<bool, BoardError> {
        board.get(x, y)?;

        let start = match orientation {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        };
        let extent = orientation.extent(board.width(), board.height());
        if extent - start < self.min_length {
            return Ok(false);
        }

        Ok(self.window_matches(board, orientation, x, y))
    }

    /// Test the `min_length` cells starting at an anchor whose window fits.
    fn window_matches(&self, board: &Board, orientation: Orientation, x: usize, y: usize) -> bool {
        let first = match board.at(x, y) {
            Some(token) => token,
            None => return false,
        };

        let (dx, dy) = orientation.step();
        (1..self.min_length).all(|i| board.at(x + i * dx, y + i * dy) == Some(first))
    }

    // ========================================================================
    // Run Measurement
    // ========================================================================

    /// Length of the run starting at `(x, y)` and extending right
    ///
    /// 0 if the anchor is empty, otherwise 1 plus every consecutive equal
    /// token to the right. The walk stops at the first different token,
    /// empty cell or board edge, and never looks left of the anchor.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if `(x, y)` is not on the board.
    ///
    /// # Example
    ///
    /// ```
    /// use gridmatch::board::Board;
    /// use gridmatch::engine::MatchEngine;
    ///
    /// let board: Board = "BAAAB.".parse().unwrap();
    /// let engine = MatchEngine::new();
    ///
    /// assert_eq!(engine.horizontal_run_length(&board, 1, 0), Ok(3));
    /// assert_eq!(engine.horizontal_run_length(&board, 2, 0), Ok(2));
    /// assert_eq!(engine.horizontal_run_length(&board, 5, 0), Ok(0));
    /// ```
    pub fn horizontal_run_length(&self, board: &Board, x: usize, y: usize) -> Result<usize, BoardError> {
        board.get(x, y)?;
        Ok(self.run_length(board, Orientation::Horizontal, x, y))
    }

    /// Length of the run starting at `(x, y)` and extending down
    ///
    /// Same rules as [`horizontal_run_length`](Self::horizontal_run_length).
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if `(x, y)` is not on the board.
    pub fn vertical_run_length(&self, board: &Board, x: usize, y: usize) -> Result<usize, BoardError> {
        board.get(x, y)?;
        Ok(self.run_length(board, Orientation::Vertical, x, y))
    }

    /// Measure the horizontal run at `(x, y)` as a [`MatchRun`]
    pub fn horizontal_run(&self, board: &Board, x: usize, y: usize) -> Result<MatchRun, BoardError> {
        let length = self.horizontal_run_length(board, x, y)?;
        Ok(MatchRun::new(Orientation::Horizontal, x, y, length))
    }

    /// Measure the vertical run at `(x, y)` as a [`MatchRun`]
    pub fn vertical_run(&self, board: &Board, x: usize, y: usize) -> Result<MatchRun, BoardError> {
        let length = self.vertical_run_length(board, x, y)?;
        Ok(MatchRun::new(Orientation::Vertical, x, y, length))
    }

    fn run_length(&self, board: &Board, orientation: Orientation, x: usize, y: usize) -> usize {
        let first = match board.at(x, y) {
            Some(token) => token,
            None => return 0,
        };

        let (dx, dy) = orientation.step();
        let start = match orientation {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        };
        let extent = orientation.extent(board.width(), board.height());

        let mut length = 1;
        while start + length < extent && board.at(x + length * dx, y + length * dy) == Some(first) {
            length += 1;
        }
        length
    }

    // ========================================================================
    // Clearing
    // ========================================================================

    /// Clear every horizontal match, returning the number of cells cleared
    ///
    /// Cells outside matched runs are untouched. Returns 0 (and leaves the
    /// board as is) when there is no match.
    pub fn clear_horizontal_matches(&self, board: &mut Board) -> usize {
        self.clear_runs(board, Orientation::Horizontal, |_| {})
    }

    /// Clear every vertical match, returning the number of cells cleared
    pub fn clear_vertical_matches(&self, board: &mut Board) -> usize {
        self.clear_runs(board, Orientation::Vertical, |_| {})
    }

    /// Clear every horizontal match and report the cleared runs
    ///
    /// Mutates the board exactly like
    /// [`clear_horizontal_matches`](Self::clear_horizontal_matches).
    pub fn clear_horizontal_matches_report(&self, board: &mut Board) -> ClearReport {
        self.clear_with_report(board, Orientation::Horizontal)
    }

    /// Clear every vertical match and report the cleared runs
    pub fn clear_vertical_matches_report(&self, board: &mut Board) -> ClearReport {
        self.clear_with_report(board, Orientation::Vertical)
    }

    /// Run one resolve pass: clear horizontal matches, then vertical ones
    ///
    /// A token shared by a horizontal and a vertical run is taken by the
    /// horizontal scan, which can leave the vertical run too short to clear.
    ///
    /// # Example
    ///
    /// ```
    /// use gridmatch::board::Board;
    /// use gridmatch::engine::MatchEngine;
    ///
    /// let mut board: Board = "AAAB\nCDEB\nCFGB".parse().unwrap();
    /// let receipt = MatchEngine::new().resolve(&mut board);
    ///
    /// assert_eq!(receipt.horizontal_cleared, 3);
    /// assert_eq!(receipt.vertical_cleared, 3);
    /// assert_eq!(receipt.state_root, board.compute_state_root());
    /// ```
    pub fn resolve(&self, board: &mut Board) -> ClearReceipt {
        let horizontal = self.clear_horizontal_matches(board);
        let vertical = self.clear_vertical_matches(board);

        ClearReceipt::new(
            board.width() as u64,
            board.height() as u64,
            horizontal as u64,
            vertical as u64,
            board.compute_state_root(),
        )
    }

    fn clear_with_report(&self, board: &mut Board, orientation: Orientation) -> ClearReport {
        let mut runs = Vec::new();
        self.clear_runs(board, orientation, |run| runs.push(run));
        ClearReport { orientation, runs }
    }

    fn clear_runs<F>(&self, board: &mut Board, orientation: Orientation, mut on_run: F) -> usize
    where
        F: FnMut(MatchRun),
    {
        let mut cleared = 0;

        for (x, y) in anchors(board.width(), board.height(), self.min_length, orientation) {
            let length = self.run_length(board, orientation, x, y);
            if length < self.min_length {
                continue;
            }

            let run = MatchRun::new(orientation, x, y, length);
            for (cx, cy) in run.cells() {
                board.clear_at(cx, cy);
            }
            cleared += length;
            on_run(run);
        }

        cleared
    }
}

/// Anchors at which a window of `min_length` cells fits, `x` outer, `y` inner.
fn anchors(
    width: usize,
    height: usize,
    min_length: usize,
    orientation: Orientation,
) -> impl Iterator<Item = (usize, usize)> {
    let fit = |extent: usize| extent.checked_sub(min_length).map_or(0, |n| n + 1);
    let (columns, rows) = match orientation {
        Orientation::Horizontal => (fit(width), height),
        Orientation::Vertical => (width, fit(height)),
    };

    (0..columns).flat_map(move |x| (0..rows).map(move |y| (x, y)))
}

// ============================================================================
// Unit Tests
// ============================================================================
