//! BoardRegistry resource providing lookups for all loaded board definitions.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{BoardDef, BoardKind};

/// Central registry for loaded board descriptions, keyed by board id.
#[derive(Resource, Debug, Default)]
pub struct BoardRegistry {
    pub boards: HashMap<String, BoardDef>,
}

impl BoardRegistry {
    /// Inserts a board. Returns false, leaving the registry untouched, if the
    /// id is already taken.
    pub fn insert(&mut self, board: BoardDef) -> bool {
        if self.boards.contains_key(&board.id) {
            return false;
        }
        self.boards.insert(board.id.clone(), board);
        true
    }

    pub fn get(&self, id: &str) -> Option<&BoardDef> {
        self.boards.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<BoardDef> {
        self.boards.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.boards.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Boards of the given kind, sorted by id.
    pub fn boards_of_kind(&self, kind: BoardKind) -> Vec<&BoardDef> {
        let mut boards: Vec<&BoardDef> = self.boards.values().filter(|b| b.kind == kind).collect();
        boards.sort_by(|a, b| a.id.cmp(&b.id));
        boards
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let node_count: usize = self.boards.values().map(|b| b.nodes.len()).sum();
        format!(
            "BoardRegistry loaded:\n\
             - Core boards: {}\n\
             - Extension boards: {}\n\
             - Keystone boards: {}\n\
             - Nodes: {}",
            self.boards_of_kind(BoardKind::Core).len(),
            self.boards_of_kind(BoardKind::Extension).len(),
            self.boards_of_kind(BoardKind::Keystone).len(),
            node_count,
        )
    }
}
