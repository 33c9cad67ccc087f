//! Board domain: tests for grids, adjacency, and extension points.

use std::collections::HashSet;

use super::{
    Board, BoardSize, BoardTransform, ExtensionPoint, GridPosition, MAX_BOARD_SIDE, PassiveNode,
    PlacementError, Rotation, build_core_board,
};
use crate::content::{BoardKind, BoardTheme, NodeType, parse_board};
use crate::stats::StatKind;

fn small_board() -> Board {
    let mut board = Board::new(
        "test",
        "Test Board",
        BoardTheme::Physical,
        BoardKind::Extension,
        BoardSize::square(7),
        10,
    );
    board
        .place_node(PassiveNode::new("main", GridPosition::new(3, 3), NodeType::Main))
        .unwrap();
    board
        .place_node(
            PassiveNode::new("str", GridPosition::new(3, 4), NodeType::Small)
                .with_stat("Strength", 10.0),
        )
        .unwrap();
    board.compute_adjacency();
    board
}

// -----------------------------------------------------------------------------
// Grid tests
// -----------------------------------------------------------------------------

#[test]
fn test_corner_has_three_neighbors() {
    let size = BoardSize::square(7);
    let neighbors: Vec<_> = size.neighbors(GridPosition::new(0, 0)).collect();
    assert_eq!(
        neighbors,
        vec![
            GridPosition::new(0, 1),
            GridPosition::new(1, 0),
            GridPosition::new(1, 1),
        ]
    );
}

#[test]
fn test_center_has_eight_neighbors() {
    let size = BoardSize::square(7);
    assert_eq!(size.neighbors(GridPosition::new(3, 3)).count(), 8);
    assert_eq!(size.neighbors(GridPosition::new(6, 3)).count(), 5);
}

#[test]
fn test_index_of_is_row_major() {
    let size = BoardSize::new(2, 3);
    assert_eq!(size.index_of(GridPosition::new(0, 0)), Some(0));
    assert_eq!(size.index_of(GridPosition::new(1, 2)), Some(5));
    assert_eq!(size.index_of(GridPosition::new(2, 0)), None);
    assert_eq!(size.index_of(GridPosition::new(0, 3)), None);
}

// -----------------------------------------------------------------------------
// Placement tests
// -----------------------------------------------------------------------------

#[test]
fn test_place_node_rejects_out_of_bounds() {
    let mut board = small_board();
    let err = board
        .place_node(PassiveNode::new("far", GridPosition::new(7, 0), NodeType::Small))
        .unwrap_err();
    assert!(matches!(err, PlacementError::OutOfBounds { .. }));
}

#[test]
fn test_place_node_keeps_positions_unique() {
    let mut board = small_board();
    let err = board
        .place_node(PassiveNode::new("other", GridPosition::new(3, 4), NodeType::Small))
        .unwrap_err();
    assert_eq!(
        err,
        PlacementError::PositionOccupied {
            id: "other".to_string(),
            occupant: "str".to_string(),
            position: GridPosition::new(3, 4),
        }
    );
    assert_eq!(board.nodes().len(), 2);
}

#[test]
fn test_place_node_rejects_duplicate_id() {
    let mut board = small_board();
    let err = board
        .place_node(PassiveNode::new("str", GridPosition::new(0, 0), NodeType::Small))
        .unwrap_err();
    assert!(matches!(err, PlacementError::DuplicateId { .. }));
}

// -----------------------------------------------------------------------------
// Adjacency tests
// -----------------------------------------------------------------------------

#[test]
fn test_adjacency_links_populated_neighbors() {
    let board = small_board();
    assert_eq!(board.node("main").unwrap().adjacent, vec!["str".to_string()]);
    assert_eq!(board.node("str").unwrap().adjacent, vec!["main".to_string()]);
}

#[test]
fn test_core_board_adjacency_matches_grid() {
    let board = build_core_board("core", "Core", 40);

    for node in board.nodes() {
        let expected: HashSet<String> = board
            .size
            .neighbors(node.position)
            .filter_map(|pos| board.node_at(pos))
            .map(|n| n.id.clone())
            .collect();
        let actual: HashSet<String> = node.adjacent.iter().cloned().collect();

        assert_eq!(actual.len(), node.adjacent.len(), "duplicates on {}", node.id);
        assert_eq!(actual, expected, "adjacency of {}", node.id);
        for id in &node.adjacent {
            let neighbor = board.node(id).unwrap();
            let d_row = neighbor.position.row.abs_diff(node.position.row);
            let d_col = neighbor.position.column.abs_diff(node.position.column);
            assert!(d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0));
        }
    }
}

#[test]
fn test_core_board_layout() {
    let board = build_core_board("core", "Core", 40);
    assert_eq!(board.size, BoardSize::square(7));
    assert_eq!(board.kind, BoardKind::Core);
    assert_eq!(board.nodes().len(), 45);

    let main = board.node_at(GridPosition::new(3, 3)).unwrap();
    assert_eq!(main.node_type, NodeType::Main);
    assert_eq!(main.id, "core_main");
    assert_eq!(main.adjacent.len(), 8);

    assert!(board.node_at(GridPosition::new(0, 0)).is_none());
    assert_eq!(board.extension_points().len(), 4);
    for point in board.extension_points() {
        let node = board.node_at(point.position).unwrap();
        assert_eq!(node.node_type, NodeType::Extension);
        assert_eq!(point.max_connections, 1);
    }

    let notable = board.node_at(GridPosition::new(1, 1)).unwrap();
    assert_eq!(notable.node_type, NodeType::Notable);
    assert_eq!(notable.stats.get(StatKind::PhysicalDamage.key()), Some(&15.0));
}

// -----------------------------------------------------------------------------
// Stats tests
// -----------------------------------------------------------------------------

#[test]
fn test_aggregate_only_allocated_nodes() {
    let mut board = small_board();
    board.node_mut("str").unwrap().rank.current = 1;

    let totals = board.aggregate_stats();
    assert_eq!(totals.get(StatKind::Strength), 10.0);
    assert_eq!(totals.len(), 1);
    assert_eq!(board.points_spent(), 1);
    assert_eq!(board.remaining_points(), 9);
}

#[test]
fn test_reset_clears_ranks_and_connections() {
    let mut board = small_board();
    board.node_mut("str").unwrap().rank.current = 1;
    board
        .add_extension_point(ExtensionPoint::new("ext", GridPosition::new(0, 3), 2))
        .unwrap();
    assert!(board.extension_point_mut("ext").unwrap().add_connection());

    board.reset();

    assert!(!board.has_allocations());
    assert_eq!(board.extension_point("ext").unwrap().current_connections, 0);
}

// -----------------------------------------------------------------------------
// Extension point tests
// -----------------------------------------------------------------------------

#[test]
fn test_add_connection_respects_capacity() {
    let mut point = ExtensionPoint::new("ext", GridPosition::new(0, 3), 2);
    assert!(point.add_connection());
    assert!(point.add_connection());
    assert!(!point.add_connection());
    assert_eq!(point.current_connections, 2);
}

#[test]
fn test_remove_connection_without_connections_is_noop() {
    let mut point = ExtensionPoint::new("ext", GridPosition::new(0, 3), 1);
    assert!(!point.remove_connection());
    assert_eq!(point.current_connections, 0);

    assert!(point.add_connection());
    assert!(point.remove_connection());
    assert!(!point.remove_connection());
}

#[test]
fn test_extension_point_compatibility() {
    let mut point = ExtensionPoint::new("ext", GridPosition::new(0, 3), 1);
    assert!(point.accepts("anything"));

    point.compatible_boards = vec!["fire".to_string()];
    assert!(point.accepts("fire"));
    assert!(!point.accepts("cold"));
}

// -----------------------------------------------------------------------------
// Transform tests
// -----------------------------------------------------------------------------

#[test]
fn test_rotation_from_degrees() {
    assert_eq!(Rotation::from_degrees(90), Some(Rotation::Clockwise90));
    assert_eq!(Rotation::from_degrees(-90), Some(Rotation::Clockwise270));
    assert_eq!(Rotation::from_degrees(45), None);
    assert_eq!(Rotation::Clockwise180.degrees(), 180);
}

#[test]
fn test_transform_rotates_clockwise() {
    let size = BoardSize::new(2, 3);
    let turn = BoardTransform {
        rotation: Rotation::Clockwise90,
        ..Default::default()
    };
    assert_eq!(turn.apply(GridPosition::new(0, 0), size), GridPosition::new(0, 1));
    assert_eq!(turn.apply(GridPosition::new(1, 2), size), GridPosition::new(2, 0));
    assert_eq!(turn.transformed_size(size), BoardSize::new(3, 2));
}

#[test]
fn test_transform_flip_then_rotate() {
    let size = BoardSize::square(7);
    let transform = BoardTransform {
        rotation: Rotation::Clockwise180,
        flip_horizontal: true,
        flip_vertical: false,
    };
    // Horizontal flip then half turn is a vertical flip.
    assert_eq!(transform.apply(GridPosition::new(1, 2), size), GridPosition::new(5, 2));
}

// -----------------------------------------------------------------------------
// Conversion tests
// -----------------------------------------------------------------------------

#[test]
fn test_from_def_skips_unplaceable_nodes() {
    let json = r#"{
        "id": "ember",
        "name": "Ember",
        "theme": "Fire",
        "size": { "rows": 3, "columns": 3 },
        "maxPoints": 5,
        "nodes": [
            { "id": "a", "name": "Start", "position": { "row": 1, "column": 1 }, "type": "Main" },
            { "id": "b", "name": "Heat", "position": { "row": 1, "column": 1 }, "stats": { "FireDamage": 5 } },
            { "id": "c", "name": "Far", "position": { "row": 9, "column": 9 } },
            { "id": "d", "name": "Spark", "position": { "row": 0, "column": 0 }, "maxRank": 3, "cost": 2 }
        ],
        "extensionPoints": [
            { "id": "ext", "position": { "row": 2, "column": 2 }, "compatibleBoards": ["frost"] }
        ]
    }"#;
    let def = parse_board(json, "inline").unwrap();
    let board = Board::from_def(&def);

    assert_eq!(board.theme, BoardTheme::Fire);
    assert_eq!(board.nodes().len(), 2);
    assert!(board.node("b").is_none());
    assert!(board.node("c").is_none());

    let spark = board.node("d").unwrap();
    assert_eq!(spark.rank.max, 3);
    assert_eq!(spark.cost, 2);
    assert_eq!(spark.adjacent, vec!["a".to_string()]);

    let point = board.extension_point("ext").unwrap();
    assert_eq!(point.compatible_boards, vec!["frost".to_string()]);
    assert_eq!(point.max_connections, 1);
}

#[test]
fn test_from_def_clamps_oversized_grid() {
    let json = r#"{
        "id": "sprawl",
        "name": "Sprawl",
        "size": { "rows": 4294967295, "columns": 40 },
        "maxPoints": 5,
        "nodes": [
            { "id": "a", "name": "Start", "position": { "row": 0, "column": 0 }, "type": "Main" },
            { "id": "b", "name": "Edge", "position": { "row": 31, "column": 31 } },
            { "id": "c", "name": "Beyond", "position": { "row": 100, "column": 0 } }
        ]
    }"#;
    let def = parse_board(json, "inline").unwrap();
    let board = Board::from_def(&def);

    assert_eq!(board.size, BoardSize::square(MAX_BOARD_SIDE));
    assert!(board.node("a").is_some());
    assert!(board.node("b").is_some());
    assert!(board.node("c").is_none());
}

#[test]
fn test_cell_count_saturates() {
    assert_eq!(BoardSize::new(3, 4).cell_count(), 12);
    assert!(!BoardSize::new(u32::MAX, 1).within_limit());
    assert_eq!(
        BoardSize::new(u32::MAX, u32::MAX).clamped(),
        BoardSize::square(MAX_BOARD_SIDE)
    );
}
