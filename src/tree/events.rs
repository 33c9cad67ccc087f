//! Tree domain: request and notification messages.

use bevy::ecs::message::Message;

use crate::board::BoardTransform;

/// Request to spend points on one rank of a node
#[derive(Debug, Clone)]
pub struct AllocateNodeRequest {
    pub board_id: String,
    pub node_id: String,
}

impl Message for AllocateNodeRequest {}

/// Fired after a node gains a rank
#[derive(Debug, Clone)]
pub struct NodeAllocatedEvent {
    pub board_id: String,
    pub node_id: String,
    pub new_rank: u32,
}

impl Message for NodeAllocatedEvent {}

/// Request to attach a board through an extension point
#[derive(Debug, Clone)]
pub struct ConnectBoardRequest {
    pub source_board_id: String,
    pub extension_point_id: String,
    pub board_id: String,
    pub transform: BoardTransform,
}

impl Message for ConnectBoardRequest {}

/// Fired after a board is attached
#[derive(Debug, Clone)]
pub struct BoardConnectedEvent {
    pub source_board_id: String,
    pub extension_point_id: String,
    pub board_id: String,
}

impl Message for BoardConnectedEvent {}

/// Request to detach an unused board
#[derive(Debug, Clone)]
pub struct DisconnectBoardRequest {
    pub board_id: String,
}

impl Message for DisconnectBoardRequest {}

/// Fired after a board is detached
#[derive(Debug, Clone)]
pub struct BoardDisconnectedEvent {
    pub board_id: String,
}

impl Message for BoardDisconnectedEvent {}

/// Adds passive points to the tree (level up, quest reward, ...)
#[derive(Debug, Clone)]
pub struct PassivePointsGrantedEvent {
    pub amount: u32,
}

impl Message for PassivePointsGrantedEvent {}
