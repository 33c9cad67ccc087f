//! Save domain: capture, restore, and file round-trip tests.

use std::fs;

use super::{
    PassiveTreeSave, SAVE_SCHEMA_VERSION, SavedAllocation, SavedConnection, read_save, write_save,
};
use crate::board::{
    Board, BoardSize, BoardTransform, ExtensionPoint, GridPosition, PassiveNode, Rotation,
    build_core_board,
};
use crate::content::{BoardKind, BoardTheme, NodeType};
use crate::stats::StatKind;
use crate::tree::PassiveTree;

fn tree() -> PassiveTree {
    let mut tree = PassiveTree::new(build_core_board("core", "Core", 40), 20);
    let mut storm = Board::new(
        "storm",
        "Storm",
        BoardTheme::Lightning,
        BoardKind::Extension,
        BoardSize::square(3),
        5,
    );
    storm
        .place_node(
            PassiveNode::new("storm_main", GridPosition::new(1, 1), NodeType::Main)
                .with_stat("LightningDamage", 12.0),
        )
        .unwrap();
    storm.compute_adjacency();
    tree.add_board(storm);
    tree
}

fn built_tree() -> PassiveTree {
    let mut tree = tree();
    for id in [
        "core_main",
        "core_travel_3_4",
        "core_travel_3_5",
        "core_ext_east",
        "core_small_2_4",
    ] {
        tree.allocate("core", id).unwrap();
    }
    let transform = BoardTransform {
        rotation: Rotation::Clockwise270,
        flip_horizontal: true,
        flip_vertical: false,
    };
    tree.connect_board("core", "ext_east", "storm", transform)
        .unwrap();
    tree.allocate("storm", "storm_main").unwrap();
    tree
}

#[test]
fn test_capture_lists_allocations_and_connections() {
    let save = PassiveTreeSave::capture(&built_tree());

    assert_eq!(save.schema_version, SAVE_SCHEMA_VERSION);
    assert_eq!(save.total_points, 20);
    assert_eq!(save.allocations.len(), 6);
    assert_eq!(save.connections.len(), 1);
    assert_eq!(save.connections[0].board_id, "storm");
    assert_eq!(save.connections[0].transform.rotation, Rotation::Clockwise270);
}

#[test]
fn test_apply_restores_tree() {
    let original = built_tree();
    let save = PassiveTreeSave::capture(&original);

    let mut restored = tree();
    let skipped = save.apply(&mut restored);

    assert_eq!(skipped, 0);
    assert!(restored.is_attached("storm"));
    assert_eq!(restored.points_spent(), original.points_spent());
    assert_eq!(restored.aggregate_stats(), original.aggregate_stats());
    assert_eq!(
        restored.aggregate_stats().get(StatKind::LightningDamage),
        12.0
    );
    assert_eq!(
        restored.core.extension_point("ext_east").unwrap().current_connections,
        1
    );
}

#[test]
fn test_apply_skips_unknown_entries_and_clamps_rank() {
    let save = PassiveTreeSave {
        schema_version: SAVE_SCHEMA_VERSION,
        total_points: 10,
        allocations: vec![
            SavedAllocation {
                board_id: "core".to_string(),
                node_id: "core_main".to_string(),
                rank: 4,
            },
            SavedAllocation {
                board_id: "core".to_string(),
                node_id: "removed_node".to_string(),
                rank: 1,
            },
        ],
        connections: vec![SavedConnection {
            source_board_id: "core".to_string(),
            extension_point_id: "ext_west".to_string(),
            board_id: "retired_board".to_string(),
            transform: BoardTransform::default(),
        }],
    };

    let mut tree = built_tree();
    let skipped = save.apply(&mut tree);

    assert_eq!(skipped, 2);
    assert_eq!(tree.total_points, 10);
    assert_eq!(tree.core.node("core_main").unwrap().rank.current, 1);
    assert!(tree.connections.is_empty());
    assert_eq!(tree.points_spent(), 1);
}

#[test]
fn test_save_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("passive_boards_save_{}", std::process::id()));
    let path = dir.join("nested").join("tree.json");
    let save = PassiveTreeSave::capture(&built_tree());

    write_save(&path, &save).unwrap();
    let loaded = read_save(&path).unwrap();
    assert_eq!(loaded, save);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_read_save_rejects_other_schema() {
    let dir = std::env::temp_dir().join(format!("passive_boards_schema_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("old.json");
    fs::write(
        &path,
        r#"{ "schemaVersion": 99, "totalPoints": 0, "allocations": [], "connections": [] }"#,
    )
    .unwrap();

    let err = read_save(&path).unwrap_err();
    assert!(err.message.contains("Unsupported schema version 99"));

    let _ = fs::remove_dir_all(&dir);
}

fn chained_tree() -> PassiveTree {
    let mut tree = tree();
    let mut fire = Board::new(
        "fire",
        "Fire",
        BoardTheme::Fire,
        BoardKind::Extension,
        BoardSize::square(3),
        5,
    );
    fire.place_node(PassiveNode::new("fire_main", GridPosition::new(1, 1), NodeType::Main))
        .unwrap();
    fire.place_node(PassiveNode::new("fire_ext", GridPosition::new(0, 1), NodeType::Extension))
        .unwrap();
    fire.add_extension_point(ExtensionPoint::new("fire_socket", GridPosition::new(0, 1), 1))
        .unwrap();
    fire.compute_adjacency();
    tree.add_board(fire);
    tree
}

fn allocation(board_id: &str, node_id: &str) -> SavedAllocation {
    SavedAllocation {
        board_id: board_id.to_string(),
        node_id: node_id.to_string(),
        rank: 1,
    }
}

#[test]
fn test_apply_drops_boards_below_a_lost_link() {
    let save = PassiveTreeSave {
        schema_version: SAVE_SCHEMA_VERSION,
        total_points: 5,
        allocations: vec![
            allocation("core", "core_main"),
            allocation("fire", "fire_main"),
            allocation("fire", "fire_ext"),
            allocation("storm", "storm_main"),
        ],
        connections: vec![
            SavedConnection {
                source_board_id: "core".to_string(),
                extension_point_id: "ext_gone".to_string(),
                board_id: "fire".to_string(),
                transform: BoardTransform::default(),
            },
            SavedConnection {
                source_board_id: "fire".to_string(),
                extension_point_id: "fire_socket".to_string(),
                board_id: "storm".to_string(),
                transform: BoardTransform::default(),
            },
        ],
    };

    let mut tree = chained_tree();
    let skipped = save.apply(&mut tree);

    assert_eq!(skipped, 5);
    assert!(!tree.is_attached("fire"));
    assert!(!tree.is_attached("storm"));
    assert!(tree.connections.is_empty());
    assert!(!tree.board("fire").unwrap().has_allocations());
    assert!(!tree.board("storm").unwrap().has_allocations());
    assert_eq!(
        tree.board("fire")
            .unwrap()
            .extension_point("fire_socket")
            .unwrap()
            .current_connections,
        0
    );
    assert_eq!(tree.points_spent(), 1);
    assert_eq!(tree.available_points(), 4);
}
