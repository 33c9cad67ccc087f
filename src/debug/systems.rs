//! Debug domain: random builds and command handling.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::BoardTransform;
use crate::core::PassiveTreeConfig;
use crate::debug::state::{DebugCommand, DebugState};
use crate::tree::{PassiveTree, StatsSummary};

/// A single legal change to the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomStep {
    Allocate {
        board_id: String,
        node_id: String,
    },
    Connect {
        source_board_id: String,
        extension_point_id: String,
        board_id: String,
    },
}

/// Every step the tree would accept right now, in a stable order:
/// allocations board by board, then connections.
fn legal_steps(tree: &PassiveTree) -> Vec<RandomStep> {
    let mut steps = Vec::new();

    for board in tree.attached_boards() {
        for node in board.nodes() {
            if tree.can_allocate(&board.id, &node.id).is_ok() {
                steps.push(RandomStep::Allocate {
                    board_id: board.id.clone(),
                    node_id: node.id.clone(),
                });
            }
        }
    }

    let mut detached: Vec<&String> = tree
        .extension_boards
        .keys()
        .chain(tree.keystone_boards.keys())
        .filter(|id| !tree.is_attached(id))
        .collect();
    detached.sort();

    for board in tree.attached_boards() {
        for point in board.extension_points() {
            for target in &detached {
                if tree.can_connect(&board.id, &point.id, target).is_ok() {
                    steps.push(RandomStep::Connect {
                        source_board_id: board.id.clone(),
                        extension_point_id: point.id.clone(),
                        board_id: (*target).clone(),
                    });
                }
            }
        }
    }

    steps
}

/// Applies up to `count` randomly chosen legal steps. Stops early once
/// nothing is legal. Returns the steps taken.
pub fn random_build(tree: &mut PassiveTree, count: u32, rng: &mut ChaCha8Rng) -> Vec<RandomStep> {
    let mut taken = Vec::new();

    for _ in 0..count {
        let steps = legal_steps(tree);
        if steps.is_empty() {
            break;
        }
        let step = steps[rng.random_range(0..steps.len())].clone();

        let applied = match &step {
            RandomStep::Allocate { board_id, node_id } => {
                tree.allocate(board_id, node_id).map(|_| ()).map_err(|e| e.to_string())
            }
            RandomStep::Connect {
                source_board_id,
                extension_point_id,
                board_id,
            } => tree
                .connect_board(
                    source_board_id,
                    extension_point_id,
                    board_id,
                    BoardTransform::default(),
                )
                .map_err(|e| e.to_string()),
        };

        match applied {
            Ok(()) => taken.push(step),
            Err(e) => {
                warn!("Random step {:?} rejected: {}", step, e);
                break;
            }
        }
    }

    taken
}

/// Queue the debug commands requested by the config
pub(crate) fn queue_configured_commands(
    config: Res<PassiveTreeConfig>,
    mut commands: MessageWriter<DebugCommand>,
) {
    if config.debug.random_allocations > 0 {
        commands.write(DebugCommand::AllocateRandom {
            count: config.debug.random_allocations,
            seed: config.debug.seed,
        });
    }
    if config.debug.log_summary_on_start {
        commands.write(DebugCommand::LogSummary);
    }
}

pub(crate) fn handle_debug_commands(
    mut commands: MessageReader<DebugCommand>,
    mut tree: ResMut<PassiveTree>,
    mut debug_state: ResMut<DebugState>,
) {
    for command in commands.read() {
        match command {
            DebugCommand::AllocateRandom { count, seed } => {
                let seed = seed.unwrap_or_else(rand::random::<u64>);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let taken = random_build(&mut tree, *count, &mut rng);
                debug_state.last_seed = Some(seed);
                debug_state.set_message(format!(
                    "Random build (seed {}): {} of {} step(s), {} point(s) left",
                    seed,
                    taken.len(),
                    count,
                    tree.available_points()
                ));
            }
            DebugCommand::ResetTree => {
                tree.reset();
                debug_state.set_message("Passive tree reset");
            }
            DebugCommand::LogSummary => {
                let report = StatsSummary::from_tree(&tree).report();
                debug_state.set_message(format!("Stat summary:\n{}", report));
            }
        }
    }
}
