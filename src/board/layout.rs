//! Board geometry: the slot grid and per-card presentation state.
//!
//! The board is a 3-column grid. Rows `0..4` are the base grid the
//! initial twelve cards land in; rows `4..7` are the overflow region
//! that "add three" fills. Slots are logical coordinates only - the
//! presentation layer maps them to pixels however it likes.

use serde::{Deserialize, Serialize};

/// Columns in the card grid.
pub const GRID_COLUMNS: usize = 3;

/// Rows in the base grid.
pub const BASE_ROWS: usize = 4;

/// Cards dealt at game start (the full base grid).
pub const BASE_DEAL: usize = GRID_COLUMNS * BASE_ROWS;

/// Total rows including the overflow region.
pub const MAX_ROWS: usize = 7;

/// Board capacity: the base grid plus three overflow rows.
pub const MAX_BOARD: usize = GRID_COLUMNS * MAX_ROWS;

/// A logical grid slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotPos {
    pub col: u8,
    pub row: u8,
}

impl SlotPos {
    #[must_use]
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// True for slots below the base grid. Overflow slots are consumed
    /// first when an oversized board compacts after a found set.
    #[must_use]
    pub fn is_overflow(self) -> bool {
        usize::from(self.row) >= BASE_ROWS
    }
}

/// Presentation state for one revealed card: where it sits and whether
/// it is highlighted. Kept on the board, keyed by card identity - the
/// card value itself stays immutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub slot: SlotPos,
    pub highlighted: bool,
}

impl CardView {
    /// A fresh, un-highlighted view at the given slot.
    #[must_use]
    pub fn at(slot: SlotPos) -> Self {
        Self {
            slot,
            highlighted: false,
        }
    }
}
