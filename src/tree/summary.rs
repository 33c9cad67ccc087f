//! Tree domain: cached stat summary of the attached boards.

use bevy::prelude::*;

use crate::stats::StatTotals;
use crate::tree::passive_tree::PassiveTree;

/// Rebuilt whenever the PassiveTree changes.
#[derive(Resource, Debug, Default, Clone)]
pub struct StatsSummary {
    pub totals: StatTotals,
    pub points_spent: u32,
    pub available_points: u32,
    pub total_points: u32,
    pub attached_boards: Vec<String>,
    pub allocated_nodes: usize,
}

impl StatsSummary {
    pub fn from_tree(tree: &PassiveTree) -> Self {
        Self {
            totals: tree.aggregate_stats(),
            points_spent: tree.points_spent(),
            available_points: tree.available_points(),
            total_points: tree.total_points,
            attached_boards: tree.attached_board_ids(),
            allocated_nodes: tree
                .attached_boards()
                .map(|board| board.allocated_nodes().count())
                .sum(),
        }
    }

    /// Multi-line report for logging.
    pub fn report(&self) -> String {
        format!(
            "Passive tree: {} node(s) allocated, {}/{} points spent ({} available)\n\
             Attached boards: {}\n\
             Stats:\n{}",
            self.allocated_nodes,
            self.points_spent,
            self.total_points,
            self.available_points,
            self.attached_boards.join(", "),
            self.totals.summary(),
        )
    }
}
