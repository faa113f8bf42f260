//! Board module: the grid the match engine scans and mutates.
//!
//! ## Ownership
//!
//! The board is owned by the caller's game loop. The engine borrows it for
//! the duration of a single call and keeps nothing between calls:
//!
//! - Detection and measurement take `&Board`
//! - Clearing takes `&mut Board` and only ever empties cells
//!
//! ## Components
//!
//! - [`Board`]: Fixed-size grid of optional [`TokenId`](crate::types::TokenId)s
//! - [`Cell`]: Alias for `Option<TokenId>`
//!
//! ## Example
//!
//! ```
//! use gridmatch::board::Board;
//! use gridmatch::types::TokenId;
//!
//! let mut board = Board::new(3, 3).unwrap();
//! board.set(0, 0, Some(TokenId::new(7))).unwrap();
//!
//! assert_eq!(board.get(0, 0), Ok(Some(TokenId::new(7))));
//! assert!(board.get(3, 0).is_err());
//! ```

pub mod grid;

pub use grid::{Board, Cell};
