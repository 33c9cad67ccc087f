//! Core domain: configuration and schedule ordering shared by every plugin.

mod config;
#[cfg(test)]
mod tests;

pub use config::{CONFIG_PATH, CoreBoardConfig, DebugConfig, PassiveTreeConfig, load_config};

use bevy::prelude::*;

use crate::core::config::load_tree_config;

/// Startup phases, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartupSet {
    Config,
    Content,
    Tree,
    Restore,
}

/// Per-frame phases: requests are applied before the summary is rebuilt.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateSet {
    Apply,
    Summarize,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PassiveTreeConfig>()
            .configure_sets(
                Startup,
                (
                    StartupSet::Config,
                    StartupSet::Content,
                    StartupSet::Tree,
                    StartupSet::Restore,
                )
                    .chain(),
            )
            .configure_sets(Update, (UpdateSet::Apply, UpdateSet::Summarize).chain())
            .add_systems(Startup, load_tree_config.in_set(StartupSet::Config));
    }
}
