use glam::Vec2;

use crate::Side;

/// Tuning constants for the duel
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    pub const PADDLE_INSET: f32 = 20.0;

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SPEED: f32 = 6.0;

    // Opponent tracking
    pub const TRACK_SPEED_FACTOR: f32 = 0.7;
    pub const TRACK_DEAD_ZONE: f32 = 10.0;
}

/// What happens when the ball crosses the left or right edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitMode {
    /// The far side is awarded a point before the ball resets
    #[default]
    Scored,
    /// The ball resets silently, nothing is tallied
    Practice,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub track_speed_factor: f32,
    pub track_dead_zone: f32,
    pub exit_mode: ExitMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            track_speed_factor: Params::TRACK_SPEED_FACTOR,
            track_dead_zone: Params::TRACK_DEAD_ZONE,
            exit_mode: ExitMode::Scored,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of a paddle, fixed per side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Human => self.paddle_inset,
            Side::Opponent => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }

    /// Top-left corner that centers the ball on the field
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.field_width - self.ball_size) / 2.0,
            (self.field_height - self.ball_size) / 2.0,
        )
    }
}
