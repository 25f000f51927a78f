use hecs::World;
use tracing::{debug, info};

use rally_core::{
    create_ball, create_paddle, step, Ball, Config, Events, GameRng, Paddle, Score, Side,
};
use rally_events::{Inbound, Outbound, Snapshot, Winner};

use crate::clock::Clock;

/// Round lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round running; play is frozen
    Idle,
    /// A timed round is underway
    Active,
}

/// One mouse-vs-computer duel: simulation, score, and round clock.
///
/// A single owner drives this from interleaved callbacks; all mutation
/// funnels through `start_round`, `pointer_moved`, `frame`,
/// `timer_tick`, and `stop`, so no further locking is needed.
pub struct Session {
    pub clock: Box<dyn Clock>,
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub phase: RoundPhase,
    pub started_at_ms: u64,
    pub duration_secs: u64,
    pub pointer_y: f32,
}

impl Session {
    pub fn new(config: Config, clock: Box<dyn Clock>, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Human, &config);
        create_paddle(&mut world, Side::Opponent, &config);
        create_ball(&mut world, &config, &mut rng);

        let pointer_y = config.field_height / 2.0;

        Self {
            clock,
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            phase: RoundPhase::Idle,
            started_at_ms: 0,
            duration_secs: 0,
            pointer_y,
        }
    }

    /// Dispatch one presentation-layer command
    pub fn handle(&mut self, cmd: Inbound) -> Vec<Outbound> {
        match cmd {
            Inbound::PointerMoved { y } => {
                self.pointer_moved(y);
                Vec::new()
            }
            Inbound::StartRound { minutes } => self.start_round(minutes),
            Inbound::StopRound => self.stop(),
        }
    }

    /// Begin a fresh round.
    ///
    /// A round already underway is discarded: score and clock restart
    /// from zero, and the old deadline can no longer fire because the
    /// start timestamp it was measured against is gone.
    pub fn start_round(&mut self, minutes: u32) -> Vec<Outbound> {
        let minutes = sanitize_minutes(minutes);
        self.duration_secs = u64::from(minutes) * 60;
        self.started_at_ms = self.clock.now_ms();
        self.score = Score::new();
        self.events.clear();

        // Fresh serve for the kickoff.
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }

        self.phase = RoundPhase::Active;
        info!(minutes, "round started");

        vec![
            Outbound::InputCapture { enabled: true },
            Outbound::TimerTick {
                minutes: 0,
                seconds: 0,
            },
        ]
    }

    /// Record the latest pointer height. Last write wins; the next frame
    /// reads whatever is current.
    pub fn pointer_moved(&mut self, y: f32) {
        self.pointer_y = y;
    }

    /// Advance one frame of play. A no-op while no round is active.
    pub fn frame(&mut self) -> Vec<Outbound> {
        if self.phase != RoundPhase::Active {
            return Vec::new();
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            self.pointer_y,
        );

        let mut out = Vec::new();
        if let Some(side) = self.events.scored {
            debug!(
                ?side,
                human = self.score.human,
                opponent = self.score.opponent,
                "point scored"
            );
            out.push(Outbound::Score { side });
        }
        out.push(Outbound::Snapshot(self.snapshot()));
        out
    }

    /// One-second cadence: report the clock and end the round once its
    /// deadline passes. A no-op while no round is active.
    pub fn timer_tick(&mut self) -> Vec<Outbound> {
        if self.phase != RoundPhase::Active {
            return Vec::new();
        }

        let elapsed = self.clock.now_ms().saturating_sub(self.started_at_ms) / 1000;
        let mut out = vec![Outbound::TimerTick {
            minutes: elapsed / 60,
            seconds: elapsed % 60,
        }];

        if elapsed >= self.duration_secs {
            out.extend(self.end_round());
        }
        out
    }

    /// End the current round early. A no-op while idle.
    pub fn stop(&mut self) -> Vec<Outbound> {
        if self.phase != RoundPhase::Active {
            return Vec::new();
        }
        self.end_round()
    }

    fn end_round(&mut self) -> Vec<Outbound> {
        self.phase = RoundPhase::Idle;

        let winner = Winner::from(self.score.leader());
        let message = closing_message(winner, self.duration_secs);
        info!(
            ?winner,
            human = self.score.human,
            opponent = self.score.opponent,
            "round over"
        );

        vec![
            Outbound::InputCapture { enabled: false },
            Outbound::RoundEnd { winner, message },
        ]
    }

    fn snapshot(&self) -> Snapshot {
        let (ball_x, ball_y) = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos.x, ball.pos.y))
            .unwrap_or((0.0, 0.0));

        let mut human_paddle_y = 0.0;
        let mut opponent_paddle_y = 0.0;
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Human => human_paddle_y = paddle.y,
                Side::Opponent => opponent_paddle_y = paddle.y,
            }
        }

        Snapshot {
            ball_x,
            ball_y,
            human_paddle_y,
            opponent_paddle_y,
            score_human: self.score.human,
            score_opponent: self.score.opponent,
        }
    }
}

/// A zero duration means the caller sent garbage; it gets the 1-minute
/// default instead of an error.
pub fn sanitize_minutes(minutes: u32) -> u32 {
    if minutes == 0 {
        1
    } else {
        minutes
    }
}

/// Parse a free-form duration field, falling back to one minute
pub fn parse_minutes(input: &str) -> u32 {
    input
        .trim()
        .parse()
        .ok()
        .filter(|&minutes| minutes > 0)
        .unwrap_or(1)
}

/// Banner text for the end of a round
fn closing_message(winner: Winner, duration_secs: u64) -> String {
    let minutes = duration_secs / 60;
    let unit = if minutes > 1 { "minutes" } else { "minute" };
    match winner {
        Winner::Human => format!("{minutes} {unit} is over, the winner is you!"),
        Winner::Opponent => format!("{minutes} {unit} is over, the winner is the computer!"),
        Winner::Draw => format!("It's a draw after {minutes} {unit}!"),
    }
}
