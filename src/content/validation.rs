//! Validation for board definitions and their cross-references.

use std::collections::{HashMap, HashSet};

use super::data::{BoardDef, NodeType};
use super::registry::BoardRegistry;
use crate::board::{BoardSize, GridPosition, MAX_BOARD_SIDE};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyGrid {
        board_id: String,
    },
    GridTooLarge {
        board_id: String,
        size: BoardSize,
    },
    NoMainNode {
        board_id: String,
    },
    DuplicateNodeId {
        board_id: String,
        node_id: String,
    },
    NodeOutOfBounds {
        board_id: String,
        node_id: String,
        position: GridPosition,
    },
    DuplicatePosition {
        board_id: String,
        first: String,
        second: String,
        position: GridPosition,
    },
    ZeroMaxRank {
        board_id: String,
        node_id: String,
    },
    DuplicateExtensionPoint {
        board_id: String,
        point_id: String,
    },
    ExtensionPointOutOfBounds {
        board_id: String,
        point_id: String,
        position: GridPosition,
    },
    ZeroConnectionCapacity {
        board_id: String,
        point_id: String,
    },
    MissingCompatibleBoard {
        board_id: String,
        point_id: String,
        missing_id: String,
    },
}

impl ValidationError {
    /// The board the error was found on.
    pub fn board_id(&self) -> &str {
        match self {
            ValidationError::EmptyGrid { board_id }
            | ValidationError::GridTooLarge { board_id, .. }
            | ValidationError::NoMainNode { board_id }
            | ValidationError::DuplicateNodeId { board_id, .. }
            | ValidationError::NodeOutOfBounds { board_id, .. }
            | ValidationError::DuplicatePosition { board_id, .. }
            | ValidationError::ZeroMaxRank { board_id, .. }
            | ValidationError::DuplicateExtensionPoint { board_id, .. }
            | ValidationError::ExtensionPointOutOfBounds { board_id, .. }
            | ValidationError::ZeroConnectionCapacity { board_id, .. }
            | ValidationError::MissingCompatibleBoard { board_id, .. } => board_id,
        }
    }

    /// Errors that leave the board unusable. Dangling compatible ids only
    /// narrow what can attach, so they are reported but not fatal.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ValidationError::MissingCompatibleBoard { .. })
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyGrid { board_id } => {
                write!(f, "Board '{}' has an empty grid", board_id)
            }
            ValidationError::GridTooLarge { board_id, size } => write!(
                f,
                "Board '{}' grid {}x{} exceeds {} cells per side",
                board_id, size.rows, size.columns, MAX_BOARD_SIDE
            ),
            ValidationError::NoMainNode { board_id } => {
                write!(f, "Board '{}' has no Main node to start from", board_id)
            }
            ValidationError::DuplicateNodeId { board_id, node_id } => {
                write!(f, "Board '{}' defines node '{}' twice", board_id, node_id)
            }
            ValidationError::NodeOutOfBounds {
                board_id,
                node_id,
                position,
            } => write!(
                f,
                "Board '{}' node '{}' at {} is outside the grid",
                board_id, node_id, position
            ),
            ValidationError::DuplicatePosition {
                board_id,
                first,
                second,
                position,
            } => write!(
                f,
                "Board '{}' nodes '{}' and '{}' share position {}",
                board_id, first, second, position
            ),
            ValidationError::ZeroMaxRank { board_id, node_id } => {
                write!(f, "Board '{}' node '{}' has max rank 0", board_id, node_id)
            }
            ValidationError::DuplicateExtensionPoint { board_id, point_id } => write!(
                f,
                "Board '{}' defines extension point '{}' twice",
                board_id, point_id
            ),
            ValidationError::ExtensionPointOutOfBounds {
                board_id,
                point_id,
                position,
            } => write!(
                f,
                "Board '{}' extension point '{}' at {} is outside the grid",
                board_id, point_id, position
            ),
            ValidationError::ZeroConnectionCapacity { board_id, point_id } => write!(
                f,
                "Board '{}' extension point '{}' allows no connections",
                board_id, point_id
            ),
            ValidationError::MissingCompatibleBoard {
                board_id,
                point_id,
                missing_id,
            } => write!(
                f,
                "Board '{}' extension point '{}' references missing board '{}'",
                board_id, point_id, missing_id
            ),
        }
    }
}

/// Validate the structure of a single board.
pub fn validate_board(board: &BoardDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let board_id = board.id.clone();

    if board.size.cell_count() == 0 {
        errors.push(ValidationError::EmptyGrid { board_id });
        return errors;
    }
    if !board.size.within_limit() {
        errors.push(ValidationError::GridTooLarge {
            board_id,
            size: board.size,
        });
        return errors;
    }

    let mut ids = HashSet::new();
    let mut occupied: HashMap<GridPosition, &str> = HashMap::new();
    for node in &board.nodes {
        if !ids.insert(node.id.as_str()) {
            errors.push(ValidationError::DuplicateNodeId {
                board_id: board_id.clone(),
                node_id: node.id.clone(),
            });
        }
        if node.max_rank == 0 {
            errors.push(ValidationError::ZeroMaxRank {
                board_id: board_id.clone(),
                node_id: node.id.clone(),
            });
        }
        if !board.size.contains(node.position) {
            errors.push(ValidationError::NodeOutOfBounds {
                board_id: board_id.clone(),
                node_id: node.id.clone(),
                position: node.position,
            });
            continue;
        }
        if let Some(first) = occupied.insert(node.position, node.id.as_str()) {
            errors.push(ValidationError::DuplicatePosition {
                board_id: board_id.clone(),
                first: first.to_string(),
                second: node.id.clone(),
                position: node.position,
            });
        }
    }

    if !board.nodes.iter().any(|n| n.node_type == NodeType::Main) {
        errors.push(ValidationError::NoMainNode {
            board_id: board_id.clone(),
        });
    }

    let mut point_ids = HashSet::new();
    for point in &board.extension_points {
        if !point_ids.insert(point.id.as_str()) {
            errors.push(ValidationError::DuplicateExtensionPoint {
                board_id: board_id.clone(),
                point_id: point.id.clone(),
            });
        }
        if !board.size.contains(point.position) {
            errors.push(ValidationError::ExtensionPointOutOfBounds {
                board_id: board_id.clone(),
                point_id: point.id.clone(),
                position: point.position,
            });
        }
        if point.max_connections == 0 {
            errors.push(ValidationError::ZeroConnectionCapacity {
                board_id: board_id.clone(),
                point_id: point.id.clone(),
            });
        }
    }

    errors
}

/// Validate every board plus the compatible-board references between them.
/// Returns a list of validation errors, empty if everything is valid.
pub fn validate_boards(registry: &BoardRegistry) -> Vec<ValidationError> {
    let mut board_ids: Vec<&String> = registry.boards.keys().collect();
    board_ids.sort();

    let mut errors = Vec::new();
    for id in board_ids {
        let Some(board) = registry.get(id) else {
            continue;
        };
        errors.extend(validate_board(board));

        for point in &board.extension_points {
            for target in &point.compatible_boards {
                if !registry.contains(target) {
                    errors.push(ValidationError::MissingCompatibleBoard {
                        board_id: board.id.clone(),
                        point_id: point.id.clone(),
                        missing_id: target.clone(),
                    });
                }
            }
        }
    }

    errors
}
