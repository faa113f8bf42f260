//! Clear receipt for a resolve pass.
//!
//! The ClearReceipt summarizes one horizontal + vertical clearing pass over a
//! board, including the state root of the board after the pass.

use ssz_rs::prelude::*;
use sha2::{Sha256, Digest};

/// Compute SHA-256 hash of the given data
///
/// Returns a 32-byte array suitable for use as a state root.
pub fn compute_hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Receipt summarizing a single resolve pass.
///
/// ## Purpose
///
/// The game loop uses the receipt to decide whether to refill and re-scan
/// (`total_cleared() > 0`) and to detect board changes between passes
/// without diffing cell by cell.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 hash of the board after clearing,
/// as produced by [`Board::compute_state_root`](crate::board::Board::compute_state_root).
///
/// ## Example
///
/// ```
/// use gridmatch::types::ClearReceipt;
///
/// let receipt = ClearReceipt::new(
///     8,                      // width
///     8,                      // height
///     3,                      // horizontal_cleared
///     4,                      // vertical_cleared
///     [0u8; 32],              // state_root (would be computed)
/// );
/// assert_eq!(receipt.total_cleared(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct ClearReceipt {
    /// Board width at the time of the pass
    pub width: u64,

    /// Board height at the time of the pass
    pub height: u64,

    /// Cells cleared by the horizontal scan
    pub horizontal_cleared: u64,

    /// Cells cleared by the vertical scan (runs left after the horizontal scan)
    pub vertical_cleared: u64,

    /// Board state root after the pass (SHA-256, 32 bytes)
    pub state_root: [u8; 32],
}

impl ClearReceipt {
    /// Create a new clear receipt
    ///
    /// # Arguments
    ///
    /// * `width` - Board width
    /// * `height` - Board height
    /// * `horizontal_cleared` - Count of cells cleared horizontally
    /// * `vertical_cleared` - Count of cells cleared vertically
    /// * `state_root` - 32-byte hash of the board state
    pub fn new(
        width: u64,
        height: u64,
        horizontal_cleared: u64,
        vertical_cleared: u64,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            width,
            height,
            horizontal_cleared,
            vertical_cleared,
            state_root,
        }
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Total cells cleared across both axes
    pub fn total_cleared(&self) -> u64 {
        self.horizontal_cleared + self.vertical_cleared
    }

    /// Check if the pass cleared nothing (the board was already stable)
    pub fn is_empty(&self) -> bool {
        self.total_cleared() == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
