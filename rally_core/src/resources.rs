use std::cmp::Ordering;

use crate::Side;

/// Points tallied for the current round
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub human: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    /// Side currently ahead, `None` on a tie
    pub fn leader(&self) -> Option<Side> {
        match self.human.cmp(&self.opponent) {
            Ordering::Greater => Some(Side::Human),
            Ordering::Less => Some(Side::Opponent),
            Ordering::Equal => None,
        }
    }
}

/// Random number generator for serve directions
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(4242)
    }
}

/// What happened during the last step
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    /// Side awarded a point this step, at most one per step
    pub scored: Option<Side>,
    /// Paddle the ball rebounded off this step
    pub paddle_hit: Option<Side>,
    /// Ball bounced off the top or bottom edge
    pub wall_bounce: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
