//! The [`Cell`] type — one square of painted board surface.

/// The categorical state of one board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Insulating substrate (soldermask). Walkable.
    #[default]
    Substrate,
    /// Copper trace belonging to another net. Blocks.
    Trace,
    /// Cutout or slot (an air gap). Blocks.
    Slot,
    /// The source pad.
    Source,
    /// The target pad.
    Target,
    /// Presentation overlay for a computed path. Walkable; the engine never
    /// produces this state, the display layer paints it.
    PathMark,
}

impl Cell {
    /// Whether a creepage path may pass through this cell.
    ///
    /// Exactly [`Cell::Trace`] and [`Cell::Slot`] block; everything else is
    /// traversable surface.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Cell::Trace | Cell::Slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkability() {
        assert!(Cell::Substrate.is_walkable());
        assert!(Cell::Source.is_walkable());
        assert!(Cell::Target.is_walkable());
        assert!(Cell::PathMark.is_walkable());
        assert!(!Cell::Trace.is_walkable());
        assert!(!Cell::Slot.is_walkable());
    }

    #[test]
    fn default_is_substrate() {
        assert_eq!(Cell::default(), Cell::Substrate);
    }
}
