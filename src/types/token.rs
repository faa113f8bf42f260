//! Token identities and scan orientation.
//!
//! A [`TokenId`] is the only thing the engine knows about a token: two cells
//! match iff their ids are equal. What an id *means* (a sprite, a gem color,
//! a tile kind) belongs to the caller.

use std::fmt;

/// Minimum run length that counts as a match.
pub const MIN_MATCH_LENGTH: usize = 3;

// ============================================================================
// TokenId
// ============================================================================

/// Opaque, comparable identity of a token's kind.
///
/// ## Example
///
/// ```
/// use gridmatch::types::TokenId;
///
/// let red = TokenId::from('R');
/// assert_eq!(red, TokenId::new('R' as u32));
/// assert_eq!(red.as_char(), Some('R'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Create a token id from its raw value
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Interpret the id as a character, if it is a printable one
    ///
    /// Used by the text form of a board; ids created from chars round-trip.
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0).filter(|c| !c.is_whitespace() && !c.is_control() && *c != '.')
    }
}

impl From<char> for TokenId {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<u32> for TokenId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "#{}", self.0),
        }
    }
}

// ============================================================================
// Orientation
// ============================================================================

/// Scan direction for runs.
///
/// Horizontal runs extend toward increasing `x`, vertical runs toward
/// increasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step `(dx, dy)` along this orientation
    #[inline]
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    /// Length of the board along this orientation
    #[inline]
    pub fn extent(self, width: usize, height: usize) -> usize {
        match self {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_match_length() {
        assert_eq!(MIN_MATCH_LENGTH, 3);
    }

    #[test]
    fn test_token_from_char() {
        let token = TokenId::from('A');
        assert_eq!(token.raw(), 65);
        assert_eq!(token.as_char(), Some('A'));
        assert_eq!(token.to_string(), "A");
    }

    #[test]
    fn test_token_non_printable() {
        let token = TokenId::new(7);
        assert_eq!(token.as_char(), None);
        assert_eq!(token.to_string(), "#7");

        // '.' is reserved for empty cells in the text form
        assert_eq!(TokenId::from('.').as_char(), None);
    }

    #[test]
    fn test_token_equality() {
        assert_eq!(TokenId::new(3), TokenId::from(3u32));
        assert_ne!(TokenId::from('A'), TokenId::from('B'));
    }

    #[test]
    fn test_orientation_step() {
        assert_eq!(Orientation::Horizontal.step(), (1, 0));
        assert_eq!(Orientation::Vertical.step(), (0, 1));
    }

    #[test]
    fn test_orientation_extent() {
        assert_eq!(Orientation::Horizontal.extent(5, 2), 5);
        assert_eq!(Orientation::Vertical.extent(5, 2), 2);
    }
}
