//! Debug mode for fast iteration on tree layouts.
//!
//! Features:
//! - Random allocation with a reproducible seed
//! - Reset the tree to an empty build
//! - Dump the stat summary on demand

mod state;
mod systems;

pub use state::{DebugCommand, DebugState};
pub use systems::{RandomStep, random_build};

use bevy::prelude::*;

use crate::core::{StartupSet, UpdateSet};
use crate::debug::systems::{handle_debug_commands, queue_configured_commands};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_message::<DebugCommand>()
            .add_systems(Startup, queue_configured_commands.after(StartupSet::Restore))
            .add_systems(Update, handle_debug_commands.in_set(UpdateSet::Apply));
    }
}
