//! Cadences for a session.
//!
//! One task owns the session and multiplexes its three inputs: the
//! presentation layer's command channel, the ~60 Hz frame pulse, and
//! the 1 Hz round clock. A single owner means the cadences interleave
//! explicitly and never race, and the loop has a real stop switch
//! instead of running forever.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use rally_events::{Inbound, Outbound};

use crate::session::Session;

/// Nominal frame cadence the simulation assumes
pub const FRAME: Duration = Duration::from_millis(16);

/// Coarse cadence of the round clock
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Drive a session until the stop signal flips to true or the command
/// channel closes.
pub async fn drive(
    mut session: Session,
    mut inbound: mpsc::Receiver<Inbound>,
    outbound: broadcast::Sender<Outbound>,
    mut stop: watch::Receiver<bool>,
) {
    let mut frame = interval(FRAME);
    frame.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut clock = interval(CLOCK_TICK);
    clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let emitted = tokio::select! {
            changed = stop.changed() => {
                if changed.is_err() || *stop.borrow() {
                    debug!("session driver stopping");
                    break;
                }
                Vec::new()
            }
            cmd = inbound.recv() => match cmd {
                Some(cmd) => session.handle(cmd),
                None => {
                    debug!("command channel closed, driver stopping");
                    break;
                }
            },
            _ = frame.tick() => session.frame(),
            _ = clock.tick() => session.timer_tick(),
        };

        for event in emitted {
            // Nobody listening is fine; events are fire-and-forget.
            let _ = outbound.send(event);
        }
    }
}
