use std::fmt;

use creepage_core::Point;

use crate::distance::{COST_DIAGONAL, COST_STRAIGHT, euclidean, step_cost};
use crate::field::{CreepPath, NO_PARENT, SearchField};
use crate::surface::Surface;

impl SearchField {
    /// Compute the shortest creepage path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) with its physical
    /// length, `Ok(None)` if the target is unreachable, or an error when an
    /// endpoint lies outside the surface or the surface does not match the
    /// field's size.
    ///
    /// The target cell is enterable even when it blocks; diagonal steps are
    /// rejected when both orthogonal flanks block (see the crate docs).
    pub fn find_path<S: Surface>(
        &mut self,
        surface: &S,
        from: Point,
        to: Point,
    ) -> Result<Option<CreepPath>, SearchError> {
        let size = surface.size();
        if size != self.size() {
            return Err(SearchError::SizeMismatch {
                surface: size,
                field: self.size(),
            });
        }
        let Some(start_idx) = self.idx(from) else {
            return Err(SearchError::OutOfBounds { pos: from, size });
        };
        let Some(goal_idx) = self.idx(to) else {
            return Err(SearchError::OutOfBounds { pos: to, size });
        };

        if start_idx == goal_idx {
            return Ok(Some(CreepPath {
                points: vec![from],
                distance: 0.0,
            }));
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.f = euclidean(from, to);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }
        self.open.clear();
        self.open.push(start_idx);

        let found = loop {
            if self.open.is_empty() {
                break false;
            }

            // Select the open node with the smallest f. The strict `<` keeps
            // the first-inserted entry on ties, so results are reproducible.
            let mut best = 0;
            for i in 1..self.open.len() {
                if self.nodes[self.open[i]].f < self.nodes[self.open[best]].f {
                    best = i;
                }
            }
            let ci = self.open.remove(best);

            if ci == goal_idx {
                break true;
            }
            self.nodes[ci].open = false; // finalized

            let cp = self.point(ci);
            let current_g = self.nodes[ci].g;

            // Fixed enumeration order: it decides frontier insertion order
            // and therefore tie-breaking.
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let np = cp.shift(dx, dy);
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    if self.nodes[ni].generation == cur_gen && !self.nodes[ni].open {
                        continue; // finalized
                    }
                    // The target is enterable even when its cell blocks.
                    if !surface.walkable(np) && np != to {
                        continue;
                    }
                    if dx != 0 && dy != 0 {
                        // No squeezing through a diagonal gap: both orthogonal
                        // flanks blocking forbids the step. A flank that is the
                        // target itself does not count as blocking.
                        let flank_a = Point::new(np.x, cp.y);
                        let flank_b = Point::new(cp.x, np.y);
                        let blocks_a = !surface.walkable(flank_a) && flank_a != to;
                        let blocks_b = !surface.walkable(flank_b) && flank_b != to;
                        if blocks_a && blocks_b {
                            continue;
                        }
                    }

                    let move_cost = if dx != 0 && dy != 0 {
                        COST_DIAGONAL
                    } else {
                        COST_STRAIGHT
                    };
                    let tentative_g = current_g + move_cost;

                    let n = &mut self.nodes[ni];
                    let in_open = n.generation == cur_gen && n.open;
                    if !in_open || tentative_g < n.g {
                        n.g = tentative_g;
                        n.f = tentative_g + euclidean(np, to);
                        n.parent = ci;
                        if !in_open {
                            n.generation = cur_gen;
                            n.open = true;
                            // An improved node keeps its frontier position;
                            // only new nodes append.
                            self.open.push(ni);
                        }
                    }
                }
            }
        };

        if !found {
            return Ok(None);
        }

        // Walk back from the target, summing per-edge costs.
        let mut points = Vec::new();
        let mut distance = 0.0;
        let mut ci = goal_idx;
        loop {
            let p = self.point(ci);
            points.push(p);
            let pi = self.nodes[ci].parent;
            if pi == NO_PARENT {
                break;
            }
            distance += step_cost(p, self.point(pi));
            ci = pi;
        }
        points.reverse();
        Ok(Some(CreepPath { points, distance }))
    }
}

/// Compute the shortest creepage path with a freshly allocated field.
///
/// Convenience wrapper over [`SearchField::find_path`]; callers issuing many
/// queries against same-sized boards should keep a `SearchField` instead.
pub fn find_path<S: Surface>(
    surface: &S,
    from: Point,
    to: Point,
) -> Result<Option<CreepPath>, SearchError> {
    SearchField::new(surface.size()).find_path(surface, from, to)
}

/// Caller contract violations reported by [`find_path`].
///
/// An unreachable target is *not* an error; it is the `Ok(None)` outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the surface bounds.
    OutOfBounds { pos: Point, size: Point },
    /// The surface size differs from the size the field was built for.
    SizeMismatch { surface: Point, field: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, size } => {
                write!(f, "endpoint {pos} outside board bounds {}x{}", size.x, size.y)
            }
            Self::SizeMismatch { surface, field } => write!(
                f,
                "surface size {}x{} does not match search field size {}x{}",
                surface.x, surface.y, field.x, field.y
            ),
        }
    }
}

impl std::error::Error for SearchError {}
