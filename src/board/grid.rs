//! Board: a rectangular grid of optional tokens.
//!
//! ## Layout
//!
//! Cells are stored row-major in a single `Vec`:
//!
//! ```text
//! index = y * width + x
//! ```
//!
//! `(0, 0)` is the top-left cell. `x` grows to the right, `y` grows downward,
//! which is the direction vertical runs extend in.
//!
//! ## Text Form
//!
//! Boards parse from and render to one line per row, `.` for an empty cell
//! and any other character for a token whose id is that character:
//!
//! ```
//! use gridmatch::board::Board;
//! use gridmatch::types::TokenId;
//!
//! let board: Board = "AAB\n.AB".parse().unwrap();
//!
//! assert_eq!(board.width(), 3);
//! assert_eq!(board.height(), 2);
//! assert_eq!(board.get(2, 1), Ok(Some(TokenId::from('B'))));
//! assert_eq!(board.get(0, 1), Ok(None));
//! assert_eq!(board.to_string(), "AAB\n.AB");
//! ```
//!
//! A board without cells has no rows to print, so a zero width or zero
//! height always collapses to `0x0`. Every board then renders to text that
//! parses back to an equal board.

use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;
use crate::types::{compute_hash, TokenId};

/// A single board cell: empty or holding a token.
pub type Cell = Option<TokenId>;

/// Rectangular grid of optional token identities.
///
/// Width and height are fixed for the board's lifetime. The engine only ever
/// empties cells; placing and replacing tokens is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell empty
    ///
    /// A zero `width` or `height` yields the `0x0` board.
    ///
    /// # Errors
    ///
    /// [`BoardError::TooLarge`] if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let len = width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })?;
        if len == 0 {
            return Ok(Self::default());
        }

        Ok(Self {
            width,
            height,
            cells: vec![None; len],
        })
    }

    /// Build a board from rows of cells (`rows[y][x]`)
    ///
    /// # Errors
    ///
    /// [`BoardError::RaggedRows`] if rows have different lengths.
    /// Rows that are all empty (`vec![vec![], vec![]]`) yield the `0x0` board.
    ///
    /// # Example
    ///
    /// ```
    /// use gridmatch::board::Board;
    /// use gridmatch::types::TokenId;
    ///
    /// let a = Some(TokenId::new(1));
    /// let board = Board::from_rows(vec![vec![a, a, None]]).unwrap();
    /// assert_eq!(board.width(), 3);
    ///
    /// assert!(Board::from_rows(vec![vec![a, a], vec![a]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(width * height);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }

        if width == 0 {
            return Ok(Self::default());
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    // ========================================================================
    // Dimensions
    // ========================================================================

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    // ========================================================================
    // Checked Access
    // ========================================================================

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= self.width || y >= self.height {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Get the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Set the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: usize, y: usize, value: Cell) -> Result<(), BoardError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Check if the cell at `(x, y)` is empty
    pub fn is_empty_at(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        Ok(self.get(x, y)?.is_none())
    }

    // ========================================================================
    // Engine Access (coordinates already range-checked by the scan)
    // ========================================================================

    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.width && y < self.height, "scan left the board at ({x}, {y})");
        self.cells[y * self.width + x]
    }

    #[inline]
    pub(crate) fn clear_at(&mut self, x: usize, y: usize) {
        debug_assert!(x < self.width && y < self.height, "scan left the board at ({x}, {y})");
        self.cells[y * self.width + x] = None;
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Iterate all cells in row-major order as `((x, y), cell)`
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width, i / width), *cell))
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Canonical byte encoding of the board
    ///
    /// `width` and `height` as u64 LE, then per cell `0x00` for empty or
    /// `0x01` followed by the token id as u32 LE.
    pub fn state_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16 + self.cells.len() * 5);
        bytes.extend_from_slice(&(self.width as u64).to_le_bytes());
        bytes.extend_from_slice(&(self.height as u64).to_le_bytes());
        for cell in &self.cells {
            match cell {
                None => bytes.push(0),
                Some(token) => {
                    bytes.push(1);
                    bytes.extend_from_slice(&token.raw().to_le_bytes());
                }
            }
        }
        bytes
    }

    /// SHA-256 state root of the board
    ///
    /// Equal boards always produce equal roots; callers compare roots taken
    /// before and after a pass to detect changes.
    pub fn compute_state_root(&self) -> [u8; 32] {
        compute_hash(&self.state_bytes())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<Cell>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| if c == '.' { None } else { Some(TokenId::from(c)) })
                    .collect::<Vec<Cell>>()
            })
            .collect();
        Self::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let c = match self.at(x, y) {
                    None => '.',
                    Some(token) => token.as_char().unwrap_or('?'),
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
