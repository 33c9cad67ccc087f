//! Core domain: runtime configuration loaded from RON.

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::ContentLoadError;

/// Default location of the runtime configuration file.
pub const CONFIG_PATH: &str = "assets/config/passive_tree.ron";

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PassiveTreeConfig {
    /// Directory scanned for board description files (*.json)
    pub boards_dir: String,
    /// Where the passive tree save file lives
    pub save_path: String,
    /// Restore the save file at startup when it exists
    pub restore_on_startup: bool,
    /// Write the save file whenever the tree changes
    pub autosave: bool,
    /// Passive points available before any are granted
    pub starting_points: u32,
    pub core_board: CoreBoardConfig,
    pub debug: DebugConfig,
}

impl Default for PassiveTreeConfig {
    fn default() -> Self {
        Self {
            boards_dir: "assets/data/boards".to_string(),
            save_path: "saves/passive_tree.json".to_string(),
            restore_on_startup: true,
            autosave: false,
            starting_points: 30,
            core_board: CoreBoardConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CoreBoardConfig {
    pub id: String,
    pub name: String,
    pub max_points: u32,
    /// Use a Core-kind board from the boards directory instead of the
    /// built-in layout
    pub board_id: Option<String>,
}

impl Default for CoreBoardConfig {
    fn default() -> Self {
        Self {
            id: "core".to_string(),
            name: "Core Board".to_string(),
            max_points: 40,
            board_id: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Number of random allocations to perform at startup (dev-tools only)
    pub random_allocations: u32,
    /// Seed for random allocations; a fresh seed is drawn when absent
    pub seed: Option<u64>,
    /// Log the full stat summary whenever it is recomputed
    pub log_summary: bool,
    /// Queue a summary dump once startup finishes (dev-tools only)
    pub log_summary_on_start: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            random_allocations: 0,
            seed: None,
            log_summary: true,
            log_summary_on_start: false,
        }
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a config from RON text.
pub fn parse_config(contents: &str, file: &str) -> Result<PassiveTreeConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the config file at `path`.
pub fn load_config(path: &Path) -> Result<PassiveTreeConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;
    parse_config(&contents, &file_name)
}

pub(crate) fn load_tree_config(mut config: ResMut<PassiveTreeConfig>) {
    let path = Path::new(CONFIG_PATH);
    if !path.exists() {
        warn!("No config at '{}', using defaults", CONFIG_PATH);
        return;
    }

    match load_config(path) {
        Ok(loaded) => {
            info!(
                "Loaded config: boards from '{}', {} starting points",
                loaded.boards_dir, loaded.starting_points
            );
            *config = loaded;
        }
        Err(e) => error!("{}; using defaults", e),
    }
}
