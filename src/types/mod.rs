//! Core data types for gridmatch
//!
//! ## Types
//!
//! - [`TokenId`]: Opaque identity of a token's kind
//! - [`Orientation`]: Horizontal or vertical scan direction
//! - [`MatchRun`]: A measured run of equal tokens
//! - [`ClearReceipt`]: Summary of a resolve pass (SSZ encoded)
//! - [`compute_hash`]: SHA-256 used for board state roots
//!
//! ## Match Rule
//!
//! A run matches when it holds at least [`MIN_MATCH_LENGTH`] equal,
//! non-empty tokens in a row or column.

mod token;
mod run;
mod receipt;

pub use token::{TokenId, Orientation, MIN_MATCH_LENGTH};
pub use run::MatchRun;
pub use receipt::{compute_hash, ClearReceipt};
