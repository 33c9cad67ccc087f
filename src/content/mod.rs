//! Content domain: board description files, registry, and validation.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{BoardDef, BoardKind, BoardTheme, ExtensionPointDef, NodeDef, NodeType};
pub use loader::{ContentLoadError, load_board_directory, load_board_file, parse_board};
pub use registry::BoardRegistry;
pub use validation::{ValidationError, validate_board, validate_boards};

use bevy::prelude::*;
use std::collections::HashSet;
use std::path::Path;

use crate::core::{PassiveTreeConfig, StartupSet};

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BoardDef>()
            .register_type::<NodeDef>()
            .register_type::<ExtensionPointDef>()
            .register_type::<BoardTheme>()
            .register_type::<BoardKind>()
            .register_type::<NodeType>()
            .init_resource::<BoardRegistry>()
            .add_systems(Startup, load_board_content.in_set(StartupSet::Content));
    }
}

/// Loads and validates every board file, leaving only usable boards in the
/// registry.
fn load_board_content(config: Res<PassiveTreeConfig>, mut registry: ResMut<BoardRegistry>) {
    let (loaded, load_errors) = load_board_directory(Path::new(&config.boards_dir));
    for e in &load_errors {
        error!("{}", e);
    }

    *registry = loaded;
    let rejected = prune_invalid_boards(&mut registry);
    if !rejected.is_empty() {
        warn!("Skipped {} invalid board(s): {:?}", rejected.len(), rejected);
    }

    info!("{}", registry.summary());
}

/// Removes boards with fatal validation errors and logs every error found.
/// Returns the ids of removed boards, sorted.
pub(crate) fn prune_invalid_boards(registry: &mut BoardRegistry) -> Vec<String> {
    let errors = validate_boards(registry);

    let mut rejected = HashSet::new();
    for e in &errors {
        if e.is_fatal() {
            error!("{}", e);
            rejected.insert(e.board_id().to_string());
        } else {
            warn!("{}", e);
        }
    }

    let mut rejected: Vec<String> = rejected.into_iter().collect();
    rejected.sort();
    for id in &rejected {
        registry.remove(id);
    }
    rejected
}
