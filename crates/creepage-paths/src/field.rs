use creepage_core::Point;

/// A computed creepage path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreepPath {
    /// Ordered positions from source to target, both inclusive.
    pub points: Vec<Point>,
    /// Physical length in grid units (straight step = 1, diagonal = √2).
    pub distance: f64,
}

/// Sentinel parent index for the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-cell search record, kept in a flat arena indexed `y * width + x`.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Reusable working state for creepage searches over one board size.
///
/// `SearchField` owns the node arena and the open list so that repeated
/// queries incur no allocations after warm-up. A generation counter lazily
/// invalidates stale nodes between searches instead of clearing the arena.
pub struct SearchField {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    /// Frontier, in insertion order. Scanned linearly for the minimum `f`;
    /// among equal scores the first-inserted entry wins, which keeps
    /// results deterministic.
    pub(crate) open: Vec<usize>,
}

impl SearchField {
    /// Create a field for surfaces of the given size (x = width, y = height).
    pub fn new(size: Point) -> Self {
        let w = size.x.max(0);
        let h = size.y.max(0);
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); (w as usize) * (h as usize)],
            generation: 0,
            open: Vec::new(),
        }
    }

    /// The surface size this field was built for.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Convert a position to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_point_round_trip() {
        let field = SearchField::new(Point::new(5, 3));
        for y in 0..3 {
            for x in 0..5 {
                let p = Point::new(x, y);
                let i = field.idx(p).unwrap();
                assert_eq!(field.point(i), p);
            }
        }
        assert_eq!(field.idx(Point::new(5, 0)), None);
        assert_eq!(field.idx(Point::new(0, 3)), None);
        assert_eq!(field.idx(Point::new(-1, 0)), None);
    }

    #[test]
    fn negative_size_clamps_to_empty() {
        let field = SearchField::new(Point::new(-2, 4));
        assert_eq!(field.size(), Point::new(0, 4));
        assert_eq!(field.idx(Point::ZERO), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn creep_path_round_trip() {
        let path = CreepPath {
            points: vec![Point::new(0, 0), Point::new(1, 1)],
            distance: std::f64::consts::SQRT_2,
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: CreepPath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
