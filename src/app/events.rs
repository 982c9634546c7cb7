//! Outbound game events.
//!
//! The [`GameSession`](super::service::GameSession) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them, such as logging or recording them in a test.

use crate::fsm::{FoldCommand, Garment, Outcome, Phase};

/// Structured events emitted by the game core.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The session rendered its first round.
    Started { garment: Garment, tint: u32 },

    /// A non-terminal fold step was accepted.
    PhaseChanged { from: Phase, to: Phase },

    /// A round ended.
    RoundResolved {
        round: u32,
        garment: Garment,
        outcome: Outcome,
        stats: RoundStats,
    },

    /// A new round was set up after the result display.
    RoundStarted {
        round: u32,
        garment: Garment,
        tint: u32,
    },

    /// A command arrived during lockout and was discarded.
    InputDropped(FoldCommand),

    /// A config update was refused; the live config is unchanged.
    ConfigRejected(&'static str),
}

/// Running tally for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub played: u32,
    pub successes: u32,
    pub failures: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl RoundStats {
    pub fn record(&mut self, outcome: Outcome) {
        self.played += 1;
        match outcome {
            Outcome::Success => {
                self.successes += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            Outcome::Fail => {
                self.failures += 1;
                self.current_streak = 0;
            }
        }
    }
}
