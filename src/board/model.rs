//! Board domain: the board model, a themed grid of passive nodes.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::board::grid::{BoardSize, GridPosition, MAX_BOARD_SIDE};
use crate::board::types::{ExtensionPoint, NodeRank, PassiveNode};
use crate::content::{BoardDef, BoardKind, BoardTheme};
use crate::stats::StatTotals;

/// Why a node or extension point could not be placed on a board.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementError {
    OutOfBounds { id: String, position: GridPosition },
    PositionOccupied { id: String, occupant: String, position: GridPosition },
    DuplicateId { id: String },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::OutOfBounds { id, position } => {
                write!(f, "'{}' at {} is outside the grid", id, position)
            }
            PlacementError::PositionOccupied {
                id,
                occupant,
                position,
            } => write!(f, "'{}' cannot use {}: occupied by '{}'", id, position, occupant),
            PlacementError::DuplicateId { id } => write!(f, "'{}' is already on the board", id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub description: String,
    pub theme: BoardTheme,
    pub kind: BoardKind,
    pub size: BoardSize,
    /// Most points this board may hold
    pub max_points: u32,
    nodes: Vec<PassiveNode>,
    /// Row-major cells holding an index into `nodes`
    grid: Vec<Option<usize>>,
    index: HashMap<String, usize>,
    extension_points: Vec<ExtensionPoint>,
}

impl Board {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        theme: BoardTheme,
        kind: BoardKind,
        size: BoardSize,
        max_points: u32,
    ) -> Self {
        // Sides beyond the limit are cut off; nodes placed there are out of bounds.
        let size = size.clamped();
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            theme,
            kind,
            size,
            max_points,
            nodes: Vec::new(),
            grid: vec![None; size.cell_count()],
            index: HashMap::new(),
            extension_points: Vec::new(),
        }
    }

    /// Builds a board from its description. Nodes or extension points that
    /// cannot be placed are skipped with a warning; adjacency is computed
    /// before returning.
    pub fn from_def(def: &BoardDef) -> Self {
        if !def.size.within_limit() {
            warn!(
                "Board '{}': grid {}x{} exceeds {} per side, clamping",
                def.id, def.size.rows, def.size.columns, MAX_BOARD_SIDE
            );
        }
        let mut board = Board::new(
            def.id.clone(),
            def.name.clone(),
            def.theme,
            def.kind,
            def.size,
            def.max_points,
        );
        board.description = def.description.clone();

        for node_def in &def.nodes {
            let node = PassiveNode {
                id: node_def.id.clone(),
                name: node_def.name.clone(),
                description: node_def.description.clone(),
                position: node_def.position,
                node_type: node_def.node_type,
                stats: node_def.stats.clone(),
                rank: NodeRank::new(node_def.max_rank),
                cost: node_def.cost,
                adjacent: Vec::new(),
            };
            if let Err(e) = board.place_node(node) {
                warn!("Board '{}': skipping node: {}", def.id, e);
            }
        }

        for point_def in &def.extension_points {
            let mut point = ExtensionPoint::new(
                point_def.id.clone(),
                point_def.position,
                point_def.max_connections,
            );
            point.compatible_boards = point_def.compatible_boards.clone();
            if let Err(e) = board.add_extension_point(point) {
                warn!("Board '{}': skipping extension point: {}", def.id, e);
            }
        }

        board.compute_adjacency();
        board
    }

    /// Puts a node in its grid cell. Positions and ids are unique per board.
    pub fn place_node(&mut self, node: PassiveNode) -> Result<(), PlacementError> {
        let Some(cell) = self.size.index_of(node.position) else {
            return Err(PlacementError::OutOfBounds {
                id: node.id,
                position: node.position,
            });
        };
        if self.index.contains_key(&node.id) {
            return Err(PlacementError::DuplicateId { id: node.id });
        }
        if let Some(existing) = self.grid[cell] {
            return Err(PlacementError::PositionOccupied {
                id: node.id,
                occupant: self.nodes[existing].id.clone(),
                position: node.position,
            });
        }

        let slot = self.nodes.len();
        self.grid[cell] = Some(slot);
        self.index.insert(node.id.clone(), slot);
        self.nodes.push(node);
        Ok(())
    }

    pub fn add_extension_point(&mut self, point: ExtensionPoint) -> Result<(), PlacementError> {
        if !self.size.contains(point.position) {
            return Err(PlacementError::OutOfBounds {
                id: point.id,
                position: point.position,
            });
        }
        if self.extension_points.iter().any(|p| p.id == point.id) {
            return Err(PlacementError::DuplicateId { id: point.id });
        }
        self.extension_points.push(point);
        Ok(())
    }

    /// Fills every node's adjacency list with the ids of populated cells
    /// among its 8 in-bounds neighbours.
    pub fn compute_adjacency(&mut self) {
        let adjacency: Vec<Vec<String>> = self
            .nodes
            .iter()
            .map(|node| {
                self.size
                    .neighbors(node.position)
                    .filter_map(|pos| self.node_at(pos))
                    .map(|neighbor| neighbor.id.clone())
                    .collect()
            })
            .collect();

        for (node, adjacent) in self.nodes.iter_mut().zip(adjacency) {
            node.adjacent = adjacent;
        }
    }

    pub fn node_at(&self, position: GridPosition) -> Option<&PassiveNode> {
        let cell = self.size.index_of(position)?;
        self.grid.get(cell).copied().flatten().map(|i| &self.nodes[i])
    }

    pub fn node(&self, id: &str) -> Option<&PassiveNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub(crate) fn node_mut(&mut self, id: &str) -> Option<&mut PassiveNode> {
        let i = *self.index.get(id)?;
        self.nodes.get_mut(i)
    }

    /// Nodes in placement order.
    pub fn nodes(&self) -> &[PassiveNode] {
        &self.nodes
    }

    pub fn allocated_nodes(&self) -> impl Iterator<Item = &PassiveNode> {
        self.nodes.iter().filter(|n| n.is_allocated())
    }

    pub fn has_allocations(&self) -> bool {
        self.nodes.iter().any(|n| n.is_allocated())
    }

    pub fn is_allocated(&self, node_id: &str) -> bool {
        self.node(node_id).is_some_and(|n| n.is_allocated())
    }

    /// True when any node adjacent to `node_id` holds at least one rank.
    pub fn has_allocated_neighbor(&self, node_id: &str) -> bool {
        self.node(node_id)
            .is_some_and(|node| node.adjacent.iter().any(|id| self.is_allocated(id)))
    }

    pub fn points_spent(&self) -> u32 {
        self.nodes.iter().map(PassiveNode::points_spent).sum()
    }

    pub fn remaining_points(&self) -> u32 {
        self.max_points.saturating_sub(self.points_spent())
    }

    /// Sum of the stat maps of every allocated node on this board.
    pub fn aggregate_stats(&self) -> StatTotals {
        let mut totals = StatTotals::new();
        for node in self.allocated_nodes() {
            totals.add_all(&node.stats);
        }
        totals
    }

    pub fn extension_points(&self) -> &[ExtensionPoint] {
        &self.extension_points
    }

    pub fn extension_point(&self, id: &str) -> Option<&ExtensionPoint> {
        self.extension_points.iter().find(|p| p.id == id)
    }

    pub(crate) fn extension_point_mut(&mut self, id: &str) -> Option<&mut ExtensionPoint> {
        self.extension_points.iter_mut().find(|p| p.id == id)
    }

    /// Drops every rank and connection count back to zero.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.rank.current = 0;
        }
        for point in &mut self.extension_points {
            point.current_connections = 0;
        }
    }
}
