//! Match engine module for gridmatch.
//!
//! ## Design Principles
//!
//! 1. **Stateless**: The engine borrows the board per call and keeps nothing
//! 2. **Bounded Scans**: Every scan is O(width * height), no allocation on the
//!    counting paths
//! 3. **Clear-As-You-Go**: Runs are emptied the moment their anchor is visited
//!
//! ## Operations
//!
//! - **Detection**: `has_horizontal_match` / `has_vertical_match`
//! - **Measurement**: `horizontal_run_length` / `vertical_run_length`
//! - **Clearing**: `clear_horizontal_matches` / `clear_vertical_matches`
//!   (plus `_report` variants that return the cleared runs)
//! - **Resolve**: one horizontal + vertical pass summarized as a
//!   [`ClearReceipt`](crate::types::ClearReceipt)
//!
//! Refill, gravity and scoring stay with the caller, which re-runs detection
//! until both axes report no match.
//!
//! ## Example
//!
//! ```
//! use gridmatch::board::Board;
//! use gridmatch::engine::MatchEngine;
//!
//! let mut board: Board = "A\nA\nA\nA".parse().unwrap();
//! let engine = MatchEngine::new();
//!
//! assert_eq!(engine.vertical_run_length(&board, 0, 0), Ok(4));
//! assert_eq!(engine.clear_vertical_matches(&mut board), 4);
//! assert_eq!(board.empty_count(), 4);
//! ```

pub mod matcher;

pub use matcher::{ClearReport, MatchEngine};
