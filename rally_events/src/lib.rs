//! Boundary messages between the duel core and its presentation layer.
//!
//! The presentation layer feeds pointer movement and round commands in,
//! and renders the snapshots and announcements that flow back out. The
//! boundary is in-process; these types exist so the two halves share a
//! vocabulary, not a wire format.

use rally_core::Side;
use serde::{Deserialize, Serialize};

// ============================================================================
// Inbound (presentation layer to core)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Inbound {
    /// Latest pointer height. Last write wins; positions between frames
    /// are dropped on purpose.
    PointerMoved { y: f32 },

    /// Begin a round lasting the given number of minutes. Zero is
    /// treated as the 1-minute default.
    StartRound { minutes: u32 },

    /// End the current round early, if one is running
    StopRound,
}

// ============================================================================
// Outbound (core to presentation layer)
// ============================================================================

/// Winner of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Human,
    Opponent,
    Draw,
}

impl From<Option<Side>> for Winner {
    fn from(leader: Option<Side>) -> Self {
        match leader {
            Some(Side::Human) => Winner::Human,
            Some(Side::Opponent) => Winner::Opponent,
            None => Winner::Draw,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub human_paddle_y: f32,
    pub opponent_paddle_y: f32,
    pub score_human: u32,
    pub score_opponent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outbound {
    /// Fresh entity positions, once per frame while a round runs
    Snapshot(Snapshot),

    /// A point was just awarded
    Score { side: Side },

    /// Coarse clock update, once per second while a round runs
    TimerTick { minutes: u64, seconds: u64 },

    /// The round finished; `message` is ready for a winner banner
    RoundEnd { winner: Winner, message: String },

    /// Whether the presentation layer should capture the pointer
    InputCapture { enabled: bool },
}

/// Render a timer tick as `m:ss`, seconds zero-padded
pub fn format_clock(minutes: u64, seconds: u64) -> String {
    format!("{minutes}:{seconds:02}")
}
