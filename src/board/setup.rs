//! Board domain: built-in core board layout.

use bevy::prelude::*;

use crate::board::grid::{BoardSize, GridPosition};
use crate::board::model::Board;
use crate::board::types::{ExtensionPoint, PassiveNode};
use crate::content::{BoardKind, BoardTheme, NodeType};
use crate::stats::StatKind;

pub const CORE_BOARD_SIDE: u32 = 7;

/// Cell archetypes of the core board, one character per cell:
/// `M` main, `s` small, `N` notable, `T` travel, `X` extension, `.` empty.
const CORE_LAYOUT: [&str; CORE_BOARD_SIDE as usize] = [
    ".ssXss.",
    "sNsTsNs",
    "sssTsss",
    "XTTMTTX",
    "sssTsss",
    "sNsTsNs",
    ".ssXss.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// None for cells on the centre row or column.
    fn of(position: GridPosition) -> Option<Quadrant> {
        let mid = CORE_BOARD_SIDE / 2;
        match (position.row.cmp(&mid), position.column.cmp(&mid)) {
            (std::cmp::Ordering::Less, std::cmp::Ordering::Less) => Some(Quadrant::NorthWest),
            (std::cmp::Ordering::Less, std::cmp::Ordering::Greater) => Some(Quadrant::NorthEast),
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Less) => Some(Quadrant::SouthWest),
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Greater) => Some(Quadrant::SouthEast),
            _ => None,
        }
    }

    fn small_bonus(self) -> (StatKind, f32) {
        match self {
            Quadrant::NorthWest => (StatKind::Strength, 5.0),
            Quadrant::NorthEast => (StatKind::Dexterity, 5.0),
            Quadrant::SouthWest => (StatKind::Intelligence, 5.0),
            Quadrant::SouthEast => (StatKind::MaxLife, 10.0),
        }
    }

    fn notable(self) -> (&'static str, &'static [(StatKind, f32)]) {
        match self {
            Quadrant::NorthWest => (
                "Brute Force",
                &[(StatKind::PhysicalDamage, 15.0), (StatKind::Strength, 10.0)],
            ),
            Quadrant::NorthEast => (
                "Fleet Footed",
                &[(StatKind::MovementSpeed, 5.0), (StatKind::Evasion, 40.0)],
            ),
            Quadrant::SouthWest => (
                "Arcane Focus",
                &[(StatKind::SpellDamage, 15.0), (StatKind::MaxMana, 20.0)],
            ),
            Quadrant::SouthEast => (
                "Iron Hide",
                &[(StatKind::Armour, 50.0), (StatKind::MaxLife, 25.0)],
            ),
        }
    }
}

fn edge_name(position: GridPosition) -> &'static str {
    let last = CORE_BOARD_SIDE - 1;
    match (position.row, position.column) {
        (0, _) => "north",
        (r, _) if r == last => "south",
        (_, 0) => "west",
        (_, c) if c == last => "east",
        _ => "inner",
    }
}

fn archetype(symbol: char) -> Option<NodeType> {
    match symbol {
        'M' => Some(NodeType::Main),
        's' => Some(NodeType::Small),
        'N' => Some(NodeType::Notable),
        'T' => Some(NodeType::Travel),
        'X' => Some(NodeType::Extension),
        _ => None,
    }
}

fn core_node(board_id: &str, position: GridPosition, node_type: NodeType) -> PassiveNode {
    let (row, column) = (position.row, position.column);
    match node_type {
        NodeType::Main => {
            PassiveNode::new(format!("{}_main", board_id), position, node_type).with_name("Origin")
        }
        NodeType::Extension => PassiveNode::new(
            format!("{}_ext_{}", board_id, edge_name(position)),
            position,
            node_type,
        )
        .with_name("Board Socket"),
        NodeType::Travel => PassiveNode::new(
            format!("{}_travel_{}_{}", board_id, row, column),
            position,
            node_type,
        )
        .with_name("Path"),
        NodeType::Notable => {
            let id = format!("{}_notable_{}_{}", board_id, row, column);
            let Some(quadrant) = Quadrant::of(position) else {
                return PassiveNode::new(id, position, node_type);
            };
            let (name, bonuses) = quadrant.notable();
            bonuses.iter().fold(
                PassiveNode::new(id, position, node_type).with_name(name),
                |node, (kind, amount)| node.with_stat(kind.key(), *amount),
            )
        }
        NodeType::Small | NodeType::Keystone => {
            let id = format!("{}_small_{}_{}", board_id, row, column);
            let Some(quadrant) = Quadrant::of(position) else {
                return PassiveNode::new(id, position, node_type);
            };
            let (kind, amount) = quadrant.small_bonus();
            PassiveNode::new(id, position, node_type)
                .with_name(kind.label())
                .with_stat(kind.key(), amount)
        }
    }
}

/// Builds the 7x7 core board from the built-in layout. Every extension
/// cell gets a single-connection extension point that accepts any board.
pub fn build_core_board(id: &str, name: &str, max_points: u32) -> Board {
    let mut board = Board::new(
        id,
        name,
        BoardTheme::Neutral,
        BoardKind::Core,
        BoardSize::square(CORE_BOARD_SIDE),
        max_points,
    );
    board.description = "The starting board every build grows from.".to_string();

    for (row, line) in CORE_LAYOUT.iter().enumerate() {
        for (column, symbol) in line.chars().enumerate() {
            let Some(node_type) = archetype(symbol) else {
                continue;
            };
            let position = GridPosition::new(row as u32, column as u32);
            if let Err(e) = board.place_node(core_node(id, position, node_type)) {
                warn!("Core board '{}': skipping node: {}", id, e);
            }

            if node_type == NodeType::Extension {
                let point_id = format!("ext_{}", edge_name(position));
                let point = ExtensionPoint::new(point_id, position, 1);
                if let Err(e) = board.add_extension_point(point) {
                    warn!("Core board '{}': skipping extension point: {}", id, e);
                }
            }
        }
    }

    board.compute_adjacency();
    board
}
