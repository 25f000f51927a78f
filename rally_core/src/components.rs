use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Config, GameRng};

/// Which end of the field an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the pointer
    Human,
    /// Right paddle, driven by the tracking heuristic
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// Paddle component, anchored at its top edge
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component, anchored at its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Recenter the ball and serve it in a fresh pseudo-random direction:
    /// full base speed horizontally with a coin-flip sign, and a vertical
    /// component anywhere up to base speed either way.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = config.ball_spawn();

        let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            config.ball_speed * sign,
            config.ball_speed * rng.0.gen_range(-1.0..1.0),
        );
    }
}
