//! Tree domain: reasons an allocation or connection was refused.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    UnknownBoard(String),
    BoardNotAttached(String),
    UnknownNode { board_id: String, node_id: String },
    MaxRank { node_id: String, max: u32 },
    NotEnoughPoints { needed: u32, available: u32 },
    BoardPointCap { board_id: String, max_points: u32 },
    NoAllocatedNeighbor { node_id: String },
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationError::UnknownBoard(id) => write!(f, "board '{}' does not exist", id),
            AllocationError::BoardNotAttached(id) => {
                write!(f, "board '{}' is not attached to the tree", id)
            }
            AllocationError::UnknownNode { board_id, node_id } => {
                write!(f, "board '{}' has no node '{}'", board_id, node_id)
            }
            AllocationError::MaxRank { node_id, max } => {
                write!(f, "node '{}' is already at max rank {}", node_id, max)
            }
            AllocationError::NotEnoughPoints { needed, available } => write!(
                f,
                "needs {} passive point(s), {} available",
                needed, available
            ),
            AllocationError::BoardPointCap {
                board_id,
                max_points,
            } => write!(
                f,
                "board '{}' would exceed its cap of {} points",
                board_id, max_points
            ),
            AllocationError::NoAllocatedNeighbor { node_id } => {
                write!(f, "node '{}' has no allocated neighbour", node_id)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    UnknownBoard(String),
    SourceNotAttached(String),
    UnknownExtensionPoint { board_id: String, point_id: String },
    ExtensionNodeNotAllocated { point_id: String },
    CannotAttachCore(String),
    AlreadyAttached(String),
    Incompatible { point_id: String, board_id: String },
    NoCapacity { point_id: String, max: u32 },
    NotAttached(String),
    BoardInUse(String),
}

impl std::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionError::UnknownBoard(id) => write!(f, "board '{}' does not exist", id),
            ConnectionError::SourceNotAttached(id) => {
                write!(f, "source board '{}' is not attached to the tree", id)
            }
            ConnectionError::UnknownExtensionPoint { board_id, point_id } => write!(
                f,
                "board '{}' has no extension point '{}'",
                board_id, point_id
            ),
            ConnectionError::ExtensionNodeNotAllocated { point_id } => write!(
                f,
                "the node on extension point '{}' must be allocated first",
                point_id
            ),
            ConnectionError::CannotAttachCore(id) => {
                write!(f, "core board '{}' cannot be attached elsewhere", id)
            }
            ConnectionError::AlreadyAttached(id) => write!(f, "board '{}' is already attached", id),
            ConnectionError::Incompatible { point_id, board_id } => write!(
                f,
                "extension point '{}' does not accept board '{}'",
                point_id, board_id
            ),
            ConnectionError::NoCapacity { point_id, max } => write!(
                f,
                "extension point '{}' already holds {} connection(s)",
                point_id, max
            ),
            ConnectionError::NotAttached(id) => write!(f, "board '{}' is not attached", id),
            ConnectionError::BoardInUse(id) => write!(
                f,
                "board '{}' still has allocated nodes or attached boards",
                id
            ),
        }
    }
}
