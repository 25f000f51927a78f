//! Round control around the duel simulation.
//!
//! [`Session`] owns the simulation state, the score, and the round
//! clock, and exposes the handful of operations the presentation layer
//! drives: start a round, feed pointer positions, advance frames, tick
//! the clock, stop. [`driver::drive`] wires those operations to real
//! cadences on a tokio task.

pub mod clock;
pub mod driver;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use session::{parse_minutes, sanitize_minutes, RoundPhase, Session};
