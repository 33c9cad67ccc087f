//! Board domain: nodes, extension points, and board connections.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::board::grid::{BoardSize, GridPosition};
use crate::content::NodeType;

/// Current and maximum rank of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRank {
    pub current: u32,
    pub max: u32,
}

impl NodeRank {
    pub fn new(max: u32) -> Self {
        Self { current: 0, max }
    }

    pub fn is_allocated(&self) -> bool {
        self.current > 0
    }

    pub fn is_maxed(&self) -> bool {
        self.current >= self.max
    }
}

/// A single allocatable cell on a board.
#[derive(Debug, Clone)]
pub struct PassiveNode {
    pub id: String,
    pub name: String,
    pub description: String,
    pub position: GridPosition,
    pub node_type: NodeType,
    /// Stat name -> magnitude, granted while the node is allocated
    pub stats: HashMap<String, f32>,
    pub rank: NodeRank,
    /// Points spent per rank
    pub cost: u32,
    /// Ids of populated neighbouring cells, filled in by `Board::compute_adjacency`
    pub adjacent: Vec<String>,
}

impl PassiveNode {
    pub fn new(id: impl Into<String>, position: GridPosition, node_type: NodeType) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            position,
            node_type,
            stats: HashMap::new(),
            rank: NodeRank::new(1),
            cost: 1,
            adjacent: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_stat(mut self, stat: impl Into<String>, amount: f32) -> Self {
        *self.stats.entry(stat.into()).or_insert(0.0) += amount;
        self
    }

    pub fn with_max_rank(mut self, max: u32) -> Self {
        self.rank.max = max;
        self
    }

    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn is_allocated(&self) -> bool {
        self.rank.is_allocated()
    }

    /// Points this node currently holds.
    pub fn points_spent(&self) -> u32 {
        self.cost.saturating_mul(self.rank.current)
    }
}

/// A board cell that can link to another board.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionPoint {
    pub id: String,
    pub position: GridPosition,
    /// Board ids allowed to attach here; empty accepts any board
    pub compatible_boards: Vec<String>,
    pub max_connections: u32,
    pub current_connections: u32,
}

impl ExtensionPoint {
    pub fn new(id: impl Into<String>, position: GridPosition, max_connections: u32) -> Self {
        Self {
            id: id.into(),
            position,
            compatible_boards: Vec::new(),
            max_connections,
            current_connections: 0,
        }
    }

    pub fn has_capacity(&self) -> bool {
        self.current_connections < self.max_connections
    }

    pub fn accepts(&self, board_id: &str) -> bool {
        self.compatible_boards.is_empty() || self.compatible_boards.iter().any(|b| b == board_id)
    }

    /// Claims one connection slot. Returns false when already at capacity.
    pub fn add_connection(&mut self) -> bool {
        if !self.has_capacity() {
            return false;
        }
        self.current_connections += 1;
        true
    }

    /// Releases one connection slot. Returns false when no slot is held.
    pub fn remove_connection(&mut self) -> bool {
        if self.current_connections == 0 {
            return false;
        }
        self.current_connections -= 1;
        true
    }
}

/// Quarter-turn rotation applied to an attached board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    pub fn from_degrees(degrees: i32) -> Option<Rotation> {
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::None),
            90 => Some(Rotation::Clockwise90),
            180 => Some(Rotation::Clockwise180),
            270 => Some(Rotation::Clockwise270),
            _ => None,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }
}

/// Orientation of an attached board relative to its source.
/// Flips apply first, then the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardTransform {
    pub rotation: Rotation,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl BoardTransform {
    /// Where `position` on a board of `size` lands after the transform.
    pub fn apply(&self, position: GridPosition, size: BoardSize) -> GridPosition {
        let last_row = size.rows.saturating_sub(1);
        let last_column = size.columns.saturating_sub(1);

        let mut row = position.row;
        let mut column = position.column;
        if self.flip_horizontal {
            column = last_column.saturating_sub(column);
        }
        if self.flip_vertical {
            row = last_row.saturating_sub(row);
        }

        let (row, column) = match self.rotation {
            Rotation::None => (row, column),
            Rotation::Clockwise90 => (column, last_row.saturating_sub(row)),
            Rotation::Clockwise180 => (
                last_row.saturating_sub(row),
                last_column.saturating_sub(column),
            ),
            Rotation::Clockwise270 => (last_column.saturating_sub(column), row),
        };
        GridPosition::new(row, column)
    }

    /// Grid size after the transform; quarter turns swap rows and columns.
    pub fn transformed_size(&self, size: BoardSize) -> BoardSize {
        match self.rotation {
            Rotation::Clockwise90 | Rotation::Clockwise270 => {
                BoardSize::new(size.columns, size.rows)
            }
            Rotation::None | Rotation::Clockwise180 => size,
        }
    }
}

/// Links an extension point on a source board to an attached board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConnection {
    pub source_board_id: String,
    pub extension_point_id: String,
    pub board_id: String,
    pub transform: BoardTransform,
    pub active: bool,
}
