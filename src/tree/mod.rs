//! Tree domain: the passive tree aggregate, allocation, and board connections.

mod errors;
mod events;
mod passive_tree;
mod summary;
mod systems;

pub use errors::{AllocationError, ConnectionError};
pub use events::{
    AllocateNodeRequest, BoardConnectedEvent, BoardDisconnectedEvent, ConnectBoardRequest,
    DisconnectBoardRequest, NodeAllocatedEvent, PassivePointsGrantedEvent,
};
pub use passive_tree::PassiveTree;
pub use summary::StatsSummary;
pub use systems::build_tree;

use bevy::prelude::*;

use crate::core::{StartupSet, UpdateSet};
use crate::tree::systems::{
    handle_allocation_requests, handle_connection_requests, handle_disconnection_requests,
    handle_point_grants, refresh_stats_summary, setup_passive_tree,
};

pub struct PassiveTreePlugin;

impl Plugin for PassiveTreePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PassiveTree>()
            .init_resource::<StatsSummary>()
            .add_message::<AllocateNodeRequest>()
            .add_message::<NodeAllocatedEvent>()
            .add_message::<ConnectBoardRequest>()
            .add_message::<BoardConnectedEvent>()
            .add_message::<DisconnectBoardRequest>()
            .add_message::<BoardDisconnectedEvent>()
            .add_message::<PassivePointsGrantedEvent>()
            .add_systems(Startup, setup_passive_tree.in_set(StartupSet::Tree))
            .add_systems(
                Update,
                (
                    handle_point_grants,
                    handle_connection_requests,
                    handle_allocation_requests,
                    handle_disconnection_requests,
                )
                    .chain()
                    .in_set(UpdateSet::Apply),
            )
            .add_systems(
                Update,
                refresh_stats_summary
                    .run_if(resource_changed::<PassiveTree>)
                    .in_set(UpdateSet::Summarize),
            );
    }
}
