//! Core types for PCB creepage-distance analysis.
//!
//! A [`Board`] is a rectangular grid of [`Cell`]s describing a printed
//! circuit board surface: insulating substrate, copper traces, cutout
//! slots, and the source/target pads between which creepage distance is
//! measured. Boards can be painted programmatically or parsed from the
//! ASCII layout format in [`layout`].
//!
//! The pathfinding engine itself lives in the `creepage-paths` crate.

mod board;
mod cell;
mod geom;
pub mod layout;

pub use board::{Board, BoardError};
pub use cell::Cell;
pub use geom::Point;
pub use layout::{Layout, LayoutError};
