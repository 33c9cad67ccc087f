//! Tree domain: setup and request-handling systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::board::{Board, build_core_board};
use crate::content::{BoardKind, BoardRegistry};
use crate::core::PassiveTreeConfig;
use crate::tree::events::{
    AllocateNodeRequest, BoardConnectedEvent, BoardDisconnectedEvent, ConnectBoardRequest,
    DisconnectBoardRequest, NodeAllocatedEvent, PassivePointsGrantedEvent,
};
use crate::tree::passive_tree::PassiveTree;
use crate::tree::summary::StatsSummary;

/// Picks the core board: a Core-kind board from the registry when the
/// config names one, otherwise the built-in layout.
fn core_board(config: &PassiveTreeConfig, registry: &BoardRegistry) -> Board {
    let core = &config.core_board;
    if let Some(board_id) = &core.board_id {
        match registry.get(board_id) {
            Some(def) if def.kind == BoardKind::Core => return Board::from_def(def),
            Some(_) => warn!(
                "Configured core board '{}' is not a Core board, using built-in layout",
                board_id
            ),
            None => warn!(
                "Configured core board '{}' not found, using built-in layout",
                board_id
            ),
        }
    }
    build_core_board(&core.id, &core.name, core.max_points)
}

/// Builds the tree from config and every loaded board.
pub fn build_tree(config: &PassiveTreeConfig, registry: &BoardRegistry) -> PassiveTree {
    let mut tree = PassiveTree::new(core_board(config, registry), config.starting_points);

    let mut ids: Vec<&String> = registry.boards.keys().collect();
    ids.sort();
    for id in ids {
        let Some(def) = registry.get(id) else {
            continue;
        };
        if def.kind == BoardKind::Core {
            if *id != tree.core.id {
                warn!("Ignoring extra core board '{}'", id);
            }
            continue;
        }
        if !tree.add_board(Board::from_def(def)) {
            warn!("Board id '{}' collides with the core board, skipping", id);
        }
    }

    tree
}

pub(crate) fn setup_passive_tree(
    config: Res<PassiveTreeConfig>,
    registry: Res<BoardRegistry>,
    mut tree: ResMut<PassiveTree>,
) {
    *tree = build_tree(&config, &registry);
    info!(
        "Passive tree ready: core '{}' ({} nodes), {} extension board(s), {} keystone board(s), {} points",
        tree.core.id,
        tree.core.nodes().len(),
        tree.extension_boards.len(),
        tree.keystone_boards.len(),
        tree.total_points
    );
}

pub(crate) fn handle_allocation_requests(
    mut requests: MessageReader<AllocateNodeRequest>,
    mut allocated: MessageWriter<NodeAllocatedEvent>,
    mut tree: ResMut<PassiveTree>,
) {
    for request in requests.read() {
        // Checked through a shared borrow so rejections leave the tree unchanged.
        if let Err(e) = tree.can_allocate(&request.board_id, &request.node_id) {
            warn!("Cannot allocate '{}': {}", request.node_id, e);
            continue;
        }
        match tree.allocate(&request.board_id, &request.node_id) {
            Ok(new_rank) => {
                info!(
                    "Allocated '{}' on '{}' (rank {})",
                    request.node_id, request.board_id, new_rank
                );
                allocated.write(NodeAllocatedEvent {
                    board_id: request.board_id.clone(),
                    node_id: request.node_id.clone(),
                    new_rank,
                });
            }
            Err(e) => warn!("Cannot allocate '{}': {}", request.node_id, e),
        }
    }
}

pub(crate) fn handle_connection_requests(
    mut requests: MessageReader<ConnectBoardRequest>,
    mut connected: MessageWriter<BoardConnectedEvent>,
    mut tree: ResMut<PassiveTree>,
) {
    for request in requests.read() {
        let check = tree.can_connect(
            &request.source_board_id,
            &request.extension_point_id,
            &request.board_id,
        );
        if let Err(e) = check {
            warn!("Cannot attach '{}': {}", request.board_id, e);
            continue;
        }
        let result = tree.connect_board(
            &request.source_board_id,
            &request.extension_point_id,
            &request.board_id,
            request.transform,
        );
        match result {
            Ok(()) => {
                info!(
                    "Attached board '{}' to '{}' at '{}'",
                    request.board_id, request.source_board_id, request.extension_point_id
                );
                connected.write(BoardConnectedEvent {
                    source_board_id: request.source_board_id.clone(),
                    extension_point_id: request.extension_point_id.clone(),
                    board_id: request.board_id.clone(),
                });
            }
            Err(e) => warn!("Cannot attach '{}': {}", request.board_id, e),
        }
    }
}

pub(crate) fn handle_disconnection_requests(
    mut requests: MessageReader<DisconnectBoardRequest>,
    mut disconnected: MessageWriter<BoardDisconnectedEvent>,
    mut tree: ResMut<PassiveTree>,
) {
    for request in requests.read() {
        if let Err(e) = tree.can_disconnect(&request.board_id) {
            warn!("Cannot detach '{}': {}", request.board_id, e);
            continue;
        }
        match tree.disconnect_board(&request.board_id) {
            Ok(()) => {
                info!("Detached board '{}'", request.board_id);
                disconnected.write(BoardDisconnectedEvent {
                    board_id: request.board_id.clone(),
                });
            }
            Err(e) => warn!("Cannot detach '{}': {}", request.board_id, e),
        }
    }
}

pub(crate) fn handle_point_grants(
    mut grants: MessageReader<PassivePointsGrantedEvent>,
    mut tree: ResMut<PassiveTree>,
) {
    for grant in grants.read() {
        tree.grant_points(grant.amount);
        info!(
            "Granted {} passive point(s), {} available",
            grant.amount,
            tree.available_points()
        );
    }
}

pub(crate) fn refresh_stats_summary(
    tree: Res<PassiveTree>,
    config: Res<PassiveTreeConfig>,
    mut summary: ResMut<StatsSummary>,
) {
    *summary = StatsSummary::from_tree(&tree);

    for name in summary.totals.unrecognized() {
        warn!("Stat '{}' is not part of the stat schema", name);
    }
    if config.debug.log_summary {
        info!("{}", summary.report());
    }
}
