//! Tree domain: the aggregate of the core board and every attachable board.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::board::{Board, BoardConnection, BoardTransform};
use crate::content::{BoardKind, NodeType};
use crate::stats::StatTotals;
use crate::tree::errors::{AllocationError, ConnectionError};

/// The player's whole passive tree.
///
/// The core board is always attached. Extension and keystone boards become
/// attached once an active connection links them to an attached board's
/// extension point; only attached boards accept allocations and count
/// towards stats and spent points.
#[derive(Resource, Debug, Default)]
pub struct PassiveTree {
    pub core: Board,
    pub extension_boards: HashMap<String, Board>,
    pub keystone_boards: HashMap<String, Board>,
    pub connections: Vec<BoardConnection>,
    /// Passive points earned so far, spent or not
    pub total_points: u32,
}

impl PassiveTree {
    pub fn new(core: Board, total_points: u32) -> Self {
        Self {
            core,
            total_points,
            ..default()
        }
    }

    /// Registers a non-core board. Returns false if the id is taken.
    pub fn add_board(&mut self, board: Board) -> bool {
        if self.board(&board.id).is_some() {
            return false;
        }
        let boards = match board.kind {
            BoardKind::Keystone => &mut self.keystone_boards,
            BoardKind::Extension | BoardKind::Core => &mut self.extension_boards,
        };
        boards.insert(board.id.clone(), board);
        true
    }

    pub fn board(&self, id: &str) -> Option<&Board> {
        if self.core.id == id {
            return Some(&self.core);
        }
        self.extension_boards
            .get(id)
            .or_else(|| self.keystone_boards.get(id))
    }

    pub(crate) fn board_mut(&mut self, id: &str) -> Option<&mut Board> {
        if self.core.id == id {
            return Some(&mut self.core);
        }
        match self.extension_boards.get_mut(id) {
            Some(board) => Some(board),
            None => self.keystone_boards.get_mut(id),
        }
    }

    pub fn is_attached(&self, board_id: &str) -> bool {
        self.core.id == board_id
            || self
                .connections
                .iter()
                .any(|c| c.active && c.board_id == board_id)
    }

    /// The core board followed by attached boards in connection order.
    pub fn attached_boards(&self) -> impl Iterator<Item = &Board> {
        std::iter::once(&self.core).chain(
            self.connections
                .iter()
                .filter(|c| c.active)
                .filter_map(|c| {
                    self.extension_boards
                        .get(&c.board_id)
                        .or_else(|| self.keystone_boards.get(&c.board_id))
                }),
        )
    }

    pub fn points_spent(&self) -> u32 {
        self.attached_boards().map(Board::points_spent).sum()
    }

    pub fn available_points(&self) -> u32 {
        self.total_points.saturating_sub(self.points_spent())
    }

    pub fn grant_points(&mut self, amount: u32) {
        self.total_points = self.total_points.saturating_add(amount);
    }

    /// Checks every allocation rule without changing anything.
    pub fn can_allocate(&self, board_id: &str, node_id: &str) -> Result<(), AllocationError> {
        let board = self
            .board(board_id)
            .ok_or_else(|| AllocationError::UnknownBoard(board_id.to_string()))?;
        if !self.is_attached(board_id) {
            return Err(AllocationError::BoardNotAttached(board_id.to_string()));
        }
        let node = board
            .node(node_id)
            .ok_or_else(|| AllocationError::UnknownNode {
                board_id: board_id.to_string(),
                node_id: node_id.to_string(),
            })?;

        if node.rank.is_maxed() {
            return Err(AllocationError::MaxRank {
                node_id: node_id.to_string(),
                max: node.rank.max,
            });
        }

        let available = self.available_points();
        if node.cost > available {
            return Err(AllocationError::NotEnoughPoints {
                needed: node.cost,
                available,
            });
        }
        if node.cost > board.remaining_points() {
            return Err(AllocationError::BoardPointCap {
                board_id: board_id.to_string(),
                max_points: board.max_points,
            });
        }

        // Main nodes seed a board; further ranks on an allocated node are
        // already connected.
        let connected = node.node_type == NodeType::Main
            || node.is_allocated()
            || board.has_allocated_neighbor(node_id);
        if !connected {
            return Err(AllocationError::NoAllocatedNeighbor {
                node_id: node_id.to_string(),
            });
        }

        Ok(())
    }

    /// Spends points on one rank of a node. Returns the node's new rank.
    pub fn allocate(&mut self, board_id: &str, node_id: &str) -> Result<u32, AllocationError> {
        self.can_allocate(board_id, node_id)?;

        let node = self
            .board_mut(board_id)
            .and_then(|board| board.node_mut(node_id))
            .ok_or_else(|| AllocationError::UnknownNode {
                board_id: board_id.to_string(),
                node_id: node_id.to_string(),
            })?;
        node.rank.current += 1;
        Ok(node.rank.current)
    }

    /// Checks every connection rule without changing anything.
    pub fn can_connect(
        &self,
        source_id: &str,
        point_id: &str,
        target_id: &str,
    ) -> Result<(), ConnectionError> {
        let source = self
            .board(source_id)
            .ok_or_else(|| ConnectionError::UnknownBoard(source_id.to_string()))?;
        if !self.is_attached(source_id) {
            return Err(ConnectionError::SourceNotAttached(source_id.to_string()));
        }
        let point = source
            .extension_point(point_id)
            .ok_or_else(|| ConnectionError::UnknownExtensionPoint {
                board_id: source_id.to_string(),
                point_id: point_id.to_string(),
            })?;
        if let Some(node) = source.node_at(point.position) {
            if node.node_type == NodeType::Extension && !node.is_allocated() {
                return Err(ConnectionError::ExtensionNodeNotAllocated {
                    point_id: point_id.to_string(),
                });
            }
        }

        if target_id == self.core.id {
            return Err(ConnectionError::CannotAttachCore(target_id.to_string()));
        }
        if self.board(target_id).is_none() {
            return Err(ConnectionError::UnknownBoard(target_id.to_string()));
        }
        if self.is_attached(target_id) {
            return Err(ConnectionError::AlreadyAttached(target_id.to_string()));
        }
        if !point.accepts(target_id) {
            return Err(ConnectionError::Incompatible {
                point_id: point_id.to_string(),
                board_id: target_id.to_string(),
            });
        }
        if !point.has_capacity() {
            return Err(ConnectionError::NoCapacity {
                point_id: point_id.to_string(),
                max: point.max_connections,
            });
        }

        Ok(())
    }

    /// Attaches `target_id` through extension point `point_id` on
    /// `source_id`.
    pub fn connect_board(
        &mut self,
        source_id: &str,
        point_id: &str,
        target_id: &str,
        transform: BoardTransform,
    ) -> Result<(), ConnectionError> {
        self.can_connect(source_id, point_id, target_id)?;
        self.attach(source_id, point_id, target_id, transform)
    }

    /// Claims a slot on the extension point and records the connection,
    /// skipping the gameplay rules. Used by `connect_board` and save restore.
    pub(crate) fn attach(
        &mut self,
        source_id: &str,
        point_id: &str,
        target_id: &str,
        transform: BoardTransform,
    ) -> Result<(), ConnectionError> {
        let point = self
            .board_mut(source_id)
            .and_then(|board| board.extension_point_mut(point_id))
            .ok_or_else(|| ConnectionError::UnknownExtensionPoint {
                board_id: source_id.to_string(),
                point_id: point_id.to_string(),
            })?;
        if !point.add_connection() {
            return Err(ConnectionError::NoCapacity {
                point_id: point_id.to_string(),
                max: point.max_connections,
            });
        }

        self.connections.push(BoardConnection {
            source_board_id: source_id.to_string(),
            extension_point_id: point_id.to_string(),
            board_id: target_id.to_string(),
            transform,
            active: true,
        });
        Ok(())
    }

    /// Checks that `target_id` is attached, holds no allocations and has
    /// nothing attached through it. Returns the index of its connection.
    pub fn can_disconnect(&self, target_id: &str) -> Result<usize, ConnectionError> {
        let index = self
            .connections
            .iter()
            .position(|c| c.active && c.board_id == target_id)
            .ok_or_else(|| ConnectionError::NotAttached(target_id.to_string()))?;

        let in_use = self.board(target_id).is_some_and(Board::has_allocations)
            || self
                .connections
                .iter()
                .any(|c| c.active && c.source_board_id == target_id);
        if in_use {
            return Err(ConnectionError::BoardInUse(target_id.to_string()));
        }
        Ok(index)
    }

    /// Detaches an unused board, releasing its extension point slot.
    pub fn disconnect_board(&mut self, target_id: &str) -> Result<(), ConnectionError> {
        let index = self.can_disconnect(target_id)?;

        let connection = self.connections.remove(index);
        if let Some(point) = self
            .board_mut(&connection.source_board_id)
            .and_then(|board| board.extension_point_mut(&connection.extension_point_id))
        {
            point.remove_connection();
        }
        Ok(())
    }

    /// Sum of every allocated node's stats across all attached boards.
    pub fn aggregate_stats(&self) -> StatTotals {
        let mut totals = StatTotals::new();
        for board in self.attached_boards() {
            totals.merge(&board.aggregate_stats());
        }
        totals
    }

    /// Ids of attached boards, core first.
    pub fn attached_board_ids(&self) -> Vec<String> {
        self.attached_boards().map(|b| b.id.clone()).collect()
    }

    /// Zeroes every rank and drops every connection. Earned points are kept.
    pub fn reset(&mut self) {
        self.core.reset();
        for board in self.extension_boards.values_mut() {
            board.reset();
        }
        for board in self.keystone_boards.values_mut() {
            board.reset();
        }
        self.connections.clear();
    }
}
