//! Data definitions for board description files.
//!
//! These structs mirror assets/data/boards/*.json and are used for
//! deserialization only. `Board::from_def` turns them into the runtime
//! model; the BoardRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::board::{BoardSize, GridPosition};

// ============================================================================
// Enums shared with the runtime model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect, Default)]
pub enum BoardTheme {
    #[default]
    Neutral,
    Fire,
    Cold,
    Lightning,
    Physical,
    Chaos,
    Life,
    Defense,
    Utility,
}

/// Where a board sits in the tree aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect, Default)]
pub enum BoardKind {
    Core,
    #[default]
    Extension,
    Keystone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect, Default)]
pub enum NodeType {
    /// Starting node; allocatable without an allocated neighbour
    Main,
    #[default]
    Small,
    Notable,
    Keystone,
    /// Sits on an extension point and gates attaching another board
    Extension,
    /// Pathing node, usually without stats
    Travel,
}

// ============================================================================
// Boards (assets/data/boards/*.json)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(rename_all = "camelCase")]
pub struct BoardDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub theme: BoardTheme,
    #[serde(default)]
    pub kind: BoardKind,
    pub size: BoardSize,
    pub max_points: u32,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub extension_points: Vec<ExtensionPointDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(rename_all = "camelCase")]
pub struct NodeDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub position: GridPosition,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    /// Stat name -> magnitude
    #[serde(default)]
    pub stats: HashMap<String, f32>,
    #[serde(default = "default_max_rank")]
    pub max_rank: u32,
    #[serde(default = "default_cost")]
    pub cost: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionPointDef {
    pub id: String,
    pub position: GridPosition,
    /// Board ids that may attach here; empty accepts any board
    #[serde(default)]
    pub compatible_boards: Vec<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_rank() -> u32 {
    1
}

fn default_cost() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    1
}
