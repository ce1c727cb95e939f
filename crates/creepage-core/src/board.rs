//! The [`Board`] type — a rectangular row-major grid of [`Cell`]s.

use std::fmt;

use crate::cell::Cell;
use crate::geom::Point;

/// A painted board surface: `width` × `height` cells, row-major, 0-indexed.
///
/// The rectangularity invariant is enforced at construction; a board is
/// treated as immutable for the duration of one path search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of the given dimensions, filled with [`Cell::Substrate`].
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }

    /// Build a board from rows of cells.
    ///
    /// Fails with [`BoardError::Ragged`] if any row's length differs from the
    /// first row's.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::Ragged {
                    row: y,
                    expected: width,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            width: width as i32,
            height: height as i32,
            cells,
        })
    }

    /// Width in cells (columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells (rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (x = width, y = height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` is inside the board bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The cell at `p`, or `None` if `p` is outside bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The cell at `p`. Returns `Cell::default()` if `p` is outside bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Cell {
        self.get(p).unwrap_or_default()
    }

    /// Set the cell at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let w = self.width as usize;
        self.cells.iter().enumerate().map(move |(i, &c)| {
            let p = Point::new((i % w) as i32, (i / w) as i32);
            (p, c)
        })
    }
}

/// Errors from board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged { row, expected, got } => write!(
                f,
                "board is not rectangular: row {row} has {got} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_at() {
        let b = Board::new(4, 3);
        assert_eq!(b.size(), Point::new(4, 3));
        assert_eq!(b.at(Point::new(2, 1)), Cell::Substrate);
        // Out of bounds reads as default.
        assert_eq!(b.at(Point::new(4, 0)), Cell::Substrate);
        assert_eq!(b.get(Point::new(4, 0)), None);
    }

    #[test]
    fn set_and_get() {
        let mut b = Board::new(3, 3);
        b.set(Point::new(1, 2), Cell::Trace);
        assert_eq!(b.get(Point::new(1, 2)), Some(Cell::Trace));
        // Out-of-bounds set is a no-op.
        b.set(Point::new(-1, 0), Cell::Slot);
        assert_eq!(b.at(Point::new(0, 0)), Cell::Substrate);
    }

    #[test]
    fn from_rows_rectangular() {
        let rows = vec![
            vec![Cell::Substrate, Cell::Trace],
            vec![Cell::Slot, Cell::Substrate],
        ];
        let b = Board::from_rows(&rows).unwrap();
        assert_eq!(b.size(), Point::new(2, 2));
        assert_eq!(b.at(Point::new(1, 0)), Cell::Trace);
        assert_eq!(b.at(Point::new(0, 1)), Cell::Slot);
    }

    #[test]
    fn from_rows_ragged() {
        let rows = vec![
            vec![Cell::Substrate, Cell::Substrate],
            vec![Cell::Substrate],
        ];
        let err = Board::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            BoardError::Ragged {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn iter_row_major() {
        let mut b = Board::new(2, 2);
        b.set(Point::new(1, 1), Cell::Target);
        let pts: Vec<_> = b.iter().collect();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[0], (Point::new(0, 0), Cell::Substrate));
        assert_eq!(pts[3], (Point::new(1, 1), Cell::Target));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let mut b = Board::new(3, 2);
        b.set(Point::new(2, 1), Cell::Slot);
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
