//! Debug domain: debug state and command messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Seed used by the most recent random allocation
    pub last_seed: Option<u64>,
    /// Last status line reported by a debug command
    pub status_message: Option<String>,
}

impl DebugState {
    /// Record a status line and echo it to the log
    pub fn set_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("[DEBUG] {}", message);
        self.status_message = Some(message);
    }
}

/// Commands that can be issued to the debug tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugCommand {
    /// Take up to `count` random legal steps (allocations or connections).
    /// A fresh seed is drawn when `seed` is absent.
    AllocateRandom { count: u32, seed: Option<u64> },
    /// Clear every allocation and connection
    ResetTree,
    /// Log the current stat summary
    LogSummary,
}

impl Message for DebugCommand {}
