//! Board domain: grid coordinates and 8-neighbour adjacency.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Row/column offsets of the 8 cells surrounding a grid cell.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Largest side length a board grid may have.
pub const MAX_BOARD_SIDE: u32 = 32;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Deserialize,
    Serialize,
    Reflect,
)]
pub struct GridPosition {
    pub row: u32,
    pub column: u32,
}

impl GridPosition {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Offsets this position, returning None when the result would be negative.
    pub fn offset(self, d_row: i64, d_column: i64) -> Option<GridPosition> {
        let row = u32::try_from(i64::from(self.row) + d_row).ok()?;
        let column = u32::try_from(i64::from(self.column) + d_column).ok()?;
        Some(GridPosition { row, column })
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub struct BoardSize {
    pub rows: u32,
    pub columns: u32,
}

impl BoardSize {
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    pub const fn square(side: u32) -> Self {
        Self {
            rows: side,
            columns: side,
        }
    }

    pub fn cell_count(self) -> usize {
        (self.rows as usize).saturating_mul(self.columns as usize)
    }

    pub fn within_limit(self) -> bool {
        self.rows <= MAX_BOARD_SIDE && self.columns <= MAX_BOARD_SIDE
    }

    /// This size with each side capped at `MAX_BOARD_SIDE`.
    pub fn clamped(self) -> Self {
        Self {
            rows: self.rows.min(MAX_BOARD_SIDE),
            columns: self.columns.min(MAX_BOARD_SIDE),
        }
    }

    pub fn contains(self, position: GridPosition) -> bool {
        position.row < self.rows && position.column < self.columns
    }

    /// Row-major index of `position`, if it lies inside the grid.
    pub fn index_of(self, position: GridPosition) -> Option<usize> {
        self.contains(position)
            .then(|| position.row as usize * self.columns as usize + position.column as usize)
    }

    /// In-bounds cells surrounding `position`, in row-major order.
    pub fn neighbors(self, position: GridPosition) -> impl Iterator<Item = GridPosition> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(d_row, d_column)| position.offset(d_row, d_column))
            .filter(move |p| self.contains(*p))
    }
}
