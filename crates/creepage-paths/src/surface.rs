use creepage_core::{Board, Cell, Point};

/// A rectangular surface the search can walk over.
///
/// Implemented for [`Board`]; tests and callers with their own grid
/// representation can implement it directly.
pub trait Surface {
    /// Size of the surface (x = width, y = height).
    fn size(&self) -> Point;

    /// Whether a creepage path may pass through `p`.
    ///
    /// Out-of-bounds positions must report `false`.
    fn walkable(&self, p: Point) -> bool;
}

impl Surface for Board {
    #[inline]
    fn size(&self) -> Point {
        Board::size(self)
    }

    #[inline]
    fn walkable(&self, p: Point) -> bool {
        self.get(p).is_some_and(Cell::is_walkable)
    }
}
