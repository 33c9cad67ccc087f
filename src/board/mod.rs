//! Board domain: grids of passive nodes, adjacency, and extension points.

mod grid;
mod model;
mod setup;
#[cfg(test)]
mod tests;
mod types;

pub use grid::{BoardSize, GridPosition, MAX_BOARD_SIDE};
pub use model::{Board, PlacementError};
pub use setup::build_core_board;
pub use types::{
    BoardConnection, BoardTransform, ExtensionPoint, NodeRank, PassiveNode, Rotation,
};
