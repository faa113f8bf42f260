//! # gridmatch
//!
//! Match-3 alignment engine for 2D grids of typed tokens.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (TokenId, MatchRun, ClearReceipt)
//! - **Board**: Fixed-size grid of optional tokens, owned by the caller
//! - **Engine**: Stateless detection, run measurement and clearing
//!
//! ## Design Principles
//!
//! 1. **Determinism**: The same board always scans and clears the same way
//! 2. **Explicit Ownership**: The engine borrows the board per call
//! 3. **Logical State Only**: Clearing empties cells and reports them; any
//!    visual teardown is left to the caller
//! 4. **Synchronous Execution**: Every call is a bounded scan, nothing blocks
//!
//! ## Example
//!
//! ```
//! use gridmatch::{Board, MatchEngine};
//!
//! let mut board: Board = "AAA\nAAA\nAAA".parse().unwrap();
//! let engine = MatchEngine::new();
//!
//! assert_eq!(engine.clear_horizontal_matches(&mut board), 9);
//! assert_eq!(engine.clear_vertical_matches(&mut board), 0);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: TokenId, MatchRun, ClearReceipt
pub mod types;

/// Board: the grid the engine scans
pub mod board;

/// Match engine: detection and clearing
pub mod engine;

/// Error types for board access and engine configuration
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{ClearReceipt, MatchRun, Orientation, TokenId, MIN_MATCH_LENGTH};
pub use board::{Board, Cell};
pub use engine::{ClearReport, MatchEngine};
pub use error::{BoardError, EngineError};
