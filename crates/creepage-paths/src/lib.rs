//! Creepage-distance pathfinding.
//!
//! Given a painted board surface and two pads, [`find_path`] computes the
//! shortest 8-directional surface path between them, avoiding copper traces
//! and cutout slots, and returns it together with its physical length in
//! grid units (straight step = 1, diagonal step = √2).
//!
//! Two rules distinguish creepage measurement from plain grid pathfinding:
//!
//! - **No corner cutting**: a diagonal step is forbidden when both
//!   orthogonally adjacent cells block — a path cannot squeeze through the
//!   gap between two obstacles that touch at a corner.
//! - **The target is always enterable**, even when its own cell is an
//!   obstacle type. This allows measuring the distance up to a pad that
//!   sits on a trace-painted cell.
//!
//! The search reads the board through the [`Surface`] trait and keeps its
//! working state in a [`SearchField`], which can be reused across queries
//! without reallocating.

mod astar;
mod distance;
mod field;
mod surface;

pub use astar::{SearchError, find_path};
pub use distance::{COST_DIAGONAL, COST_STRAIGHT, chebyshev, euclidean, step_cost};
pub use field::{CreepPath, SearchField};
pub use surface::Surface;
