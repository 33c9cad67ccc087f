//! Save domain: persisting allocations and board connections as JSON.

#[cfg(test)]
mod tests;

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::board::BoardTransform;
use crate::core::{PassiveTreeConfig, StartupSet, UpdateSet};
use crate::tree::PassiveTree;

pub const SAVE_SCHEMA_VERSION: u32 = 1;

/// Error type for save file failures.
#[derive(Debug)]
pub struct SaveError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Save file {}: {}", self.path, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassiveTreeSave {
    pub schema_version: u32,
    pub total_points: u32,
    pub allocations: Vec<SavedAllocation>,
    pub connections: Vec<SavedConnection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAllocation {
    pub board_id: String,
    pub node_id: String,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedConnection {
    pub source_board_id: String,
    pub extension_point_id: String,
    pub board_id: String,
    #[serde(default)]
    pub transform: BoardTransform,
}

impl PassiveTreeSave {
    /// Snapshot of every allocated node and active connection.
    pub fn capture(tree: &PassiveTree) -> Self {
        let connections = tree
            .connections
            .iter()
            .filter(|c| c.active)
            .map(|c| SavedConnection {
                source_board_id: c.source_board_id.clone(),
                extension_point_id: c.extension_point_id.clone(),
                board_id: c.board_id.clone(),
                transform: c.transform,
            })
            .collect();

        let allocations = tree
            .attached_boards()
            .flat_map(|board| {
                board.allocated_nodes().map(|node| SavedAllocation {
                    board_id: board.id.clone(),
                    node_id: node.id.clone(),
                    rank: node.rank.current,
                })
            })
            .collect();

        Self {
            schema_version: SAVE_SCHEMA_VERSION,
            total_points: tree.total_points,
            allocations,
            connections,
        }
    }

    /// Resets `tree` and replays this save onto it. Entries naming boards,
    /// nodes, or extension points the tree no longer has are skipped and
    /// counted, as are connections from and ranks on boards that end up
    /// detached. Ranks are clamped to each node's max.
    ///
    /// Returns the number of skipped entries.
    pub fn apply(&self, tree: &mut PassiveTree) -> usize {
        tree.reset();
        tree.total_points = self.total_points;
        let mut skipped = 0;

        for saved in &self.connections {
            // Captures list parent links first; a detached source lost its own.
            if tree.board(&saved.board_id).is_none()
                || tree.is_attached(&saved.board_id)
                || !tree.is_attached(&saved.source_board_id)
            {
                warn!("Save: skipping connection to '{}'", saved.board_id);
                skipped += 1;
                continue;
            }
            if let Err(e) = tree.attach(
                &saved.source_board_id,
                &saved.extension_point_id,
                &saved.board_id,
                saved.transform,
            ) {
                warn!("Save: skipping connection to '{}': {}", saved.board_id, e);
                skipped += 1;
            }
        }

        for saved in &self.allocations {
            if !tree.is_attached(&saved.board_id) {
                warn!(
                    "Save: skipping '{}' on detached board '{}'",
                    saved.node_id, saved.board_id
                );
                skipped += 1;
                continue;
            }
            let node = tree
                .board_mut(&saved.board_id)
                .and_then(|board| board.node_mut(&saved.node_id));
            match node {
                Some(node) => node.rank.current = saved.rank.min(node.rank.max),
                None => {
                    warn!(
                        "Save: skipping unknown node '{}' on '{}'",
                        saved.node_id, saved.board_id
                    );
                    skipped += 1;
                }
            }
        }

        if tree.points_spent() > tree.total_points {
            warn!(
                "Save spends {} points but only {} were earned",
                tree.points_spent(),
                tree.total_points
            );
        }

        skipped
    }
}

pub fn write_save(path: &Path, save: &PassiveTreeSave) -> Result<(), SaveError> {
    let err = |message: String| SaveError {
        path: path.display().to_string(),
        message,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| err(format!("IO error: {}", e)))?;
        }
    }
    let json =
        serde_json::to_string_pretty(save).map_err(|e| err(format!("Encode error: {}", e)))?;
    fs::write(path, json).map_err(|e| err(format!("IO error: {}", e)))
}

pub fn read_save(path: &Path) -> Result<PassiveTreeSave, SaveError> {
    let err = |message: String| SaveError {
        path: path.display().to_string(),
        message,
    };

    let contents = fs::read_to_string(path).map_err(|e| err(format!("IO error: {}", e)))?;
    let save: PassiveTreeSave =
        serde_json::from_str(&contents).map_err(|e| err(format!("Parse error: {}", e)))?;
    if save.schema_version != SAVE_SCHEMA_VERSION {
        return Err(err(format!(
            "Unsupported schema version {} (expected {})",
            save.schema_version, SAVE_SCHEMA_VERSION
        )));
    }
    Ok(save)
}

/// Request to write the current tree to the configured save path
#[derive(Debug, Clone, Default)]
pub struct SavePassiveTreeRequest;

impl Message for SavePassiveTreeRequest {}

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SavePassiveTreeRequest>()
            .add_systems(Startup, restore_saved_tree.in_set(StartupSet::Restore))
            .add_systems(
                Update,
                (
                    handle_save_requests,
                    autosave_tree
                        .run_if(|config: Res<PassiveTreeConfig>| config.autosave)
                        .run_if(resource_changed::<PassiveTree>),
                )
                    .in_set(UpdateSet::Summarize),
            );
    }
}

fn restore_saved_tree(config: Res<PassiveTreeConfig>, mut tree: ResMut<PassiveTree>) {
    if !config.restore_on_startup {
        return;
    }
    let path = Path::new(&config.save_path);
    if !path.exists() {
        info!("No passive tree save at '{}'", config.save_path);
        return;
    }

    match read_save(path) {
        Ok(save) => {
            let skipped = save.apply(&mut tree);
            info!(
                "Restored passive tree: {} allocation(s), {} connection(s), {} skipped",
                save.allocations.len(),
                save.connections.len(),
                skipped
            );
        }
        Err(e) => error!("{}", e),
    }
}

fn save_tree(config: &PassiveTreeConfig, tree: &PassiveTree) {
    let save = PassiveTreeSave::capture(tree);
    match write_save(Path::new(&config.save_path), &save) {
        Ok(()) => info!("Saved passive tree to '{}'", config.save_path),
        Err(e) => error!("{}", e),
    }
}

fn handle_save_requests(
    mut requests: MessageReader<SavePassiveTreeRequest>,
    config: Res<PassiveTreeConfig>,
    tree: Res<PassiveTree>,
) {
    // Several requests in one frame produce a single write.
    if requests.read().count() > 0 {
        save_tree(&config, &tree);
    }
}

fn autosave_tree(config: Res<PassiveTreeConfig>, tree: Res<PassiveTree>) {
    save_tree(&config, &tree);
}
