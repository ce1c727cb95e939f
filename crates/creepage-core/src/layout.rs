//! ASCII board layouts.
//!
//! A [`Layout`] parses an ASCII art string into a [`Board`] plus the source
//! and target pads found in the text. The format is used by tests, demo
//! boards and the command-line front end; the interactive painting surface
//! is out of scope for this crate.
//!
//! Character set:
//!
//! | char | cell |
//! |---|---|
//! | `.` | substrate (insulator) |
//! | `#` | copper trace |
//! | `~` | cutout / slot |
//! | `S` | source pad |
//! | `T` | target pad |
//! | `*` | path overlay mark |

use std::fmt;

use crate::board::Board;
use crate::cell::Cell;
use crate::geom::Point;

/// Map a layout character to a cell.
pub fn cell_from_char(ch: char) -> Option<Cell> {
    match ch {
        '.' => Some(Cell::Substrate),
        '#' => Some(Cell::Trace),
        '~' => Some(Cell::Slot),
        'S' => Some(Cell::Source),
        'T' => Some(Cell::Target),
        '*' => Some(Cell::PathMark),
        _ => None,
    }
}

/// Map a cell back to its layout character.
pub fn char_from_cell(cell: Cell) -> char {
    match cell {
        Cell::Substrate => '.',
        Cell::Trace => '#',
        Cell::Slot => '~',
        Cell::Source => 'S',
        Cell::Target => 'T',
        Cell::PathMark => '*',
    }
}

/// A board parsed from text, with the pad positions found in it.
#[derive(Debug, Clone)]
pub struct Layout {
    pub board: Board,
    /// Position of the `S` pad, if the layout has one.
    pub source: Option<Point>,
    /// Position of the `T` pad, if the layout has one.
    pub target: Option<Point>,
}

/// Parse an ASCII layout into a [`Layout`].
///
/// Leading/trailing whitespace is trimmed from the whole string but not
/// from individual lines. Every line must have the same width. At most one
/// `S` and one `T` are allowed.
pub fn parse_layout(s: &str) -> Result<Layout, LayoutError> {
    let s = s.trim();
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut source = None;
    let mut target = None;
    let mut width = None;

    for (y, line) in s.lines().enumerate() {
        let mut row = Vec::with_capacity(width.unwrap_or(0));
        for (x, ch) in line.chars().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            let cell = cell_from_char(ch).ok_or_else(|| LayoutError::InvalidChar {
                ch,
                pos,
                content: s.to_string(),
            })?;
            match cell {
                Cell::Source => {
                    if source.replace(pos).is_some() {
                        return Err(LayoutError::DuplicateMarker { ch, pos });
                    }
                }
                Cell::Target => {
                    if target.replace(pos).is_some() {
                        return Err(LayoutError::DuplicateMarker { ch, pos });
                    }
                }
                _ => {}
            }
            row.push(cell);
        }
        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(LayoutError::InconsistentSize(s.to_string()));
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    // Rectangularity was already checked line by line, so this cannot fail.
    let board = Board::from_rows(&rows).map_err(|_| LayoutError::InconsistentSize(s.to_string()))?;
    Ok(Layout {
        board,
        source,
        target,
    })
}

/// Render a board back to its ASCII layout form.
///
/// `path` cells are overlaid with `*`, except where the board already shows
/// a pad or an obstacle (so a target sitting on copper stays visible).
pub fn render_layout(board: &Board, path: &[Point]) -> String {
    let mut out = String::with_capacity(((board.width() + 1) * board.height()) as usize);
    for y in 0..board.height() {
        for x in 0..board.width() {
            let p = Point::new(x, y);
            let cell = board.at(p);
            let ch = if cell == Cell::Substrate && path.contains(&p) {
                char_from_cell(Cell::PathMark)
            } else {
                char_from_cell(cell)
            };
            out.push(ch);
        }
        if y < board.height() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Errors from layout parsing.
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside the layout character set was found.
    InvalidChar {
        ch: char,
        pos: Point,
        content: String,
    },
    /// A second `S` or `T` pad was found.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent line widths:\n{s}"),
            Self::InvalidChar { ch, pos, content } => {
                write!(
                    f,
                    "layout contains invalid character \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                    pos.x, pos.y
                )
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(
                    f,
                    "layout has a second \u{201c}{ch}\u{201d} marker at ({}, {})",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}
