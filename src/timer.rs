//! Pomodoro timer: the work/break countdown and the 1 Hz scheduled tick.
//!
//! `engine` holds the phase state machine; `ticker` decides when the next
//! tick is due. Neither owns a thread: the runtime polls them.

mod engine;
mod ticker;

pub use engine::*;
pub use ticker::Ticker;

#[cfg(test)]
mod tests;
