//! Log-based event sink.
//!
//! [`LogEventSink`] writes structured game events through the `log`
//! facade.  The terminal binary installs it as the session's
//! [`EventSink`]; with `RUST_LOG=info` the log reads as a play-by-play.

use log::info;

use crate::app::events::GameEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`GameEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started { garment, tint } => {
                info!("START | garment={:?} tint={:#08x}", garment, tint);
            }
            GameEvent::PhaseChanged { from, to } => {
                info!("PHASE | {:?} -> {:?}", from, to);
            }
            GameEvent::RoundResolved {
                round,
                garment,
                outcome,
                stats,
            } => {
                info!(
                    "ROUND | #{} {:?} {:?} | played={} ok={} fail={} streak={} best={}",
                    round,
                    garment,
                    outcome,
                    stats.played,
                    stats.successes,
                    stats.failures,
                    stats.current_streak,
                    stats.best_streak,
                );
            }
            GameEvent::RoundStarted {
                round,
                garment,
                tint,
            } => {
                info!("ROUND | #{} begins: {:?} tint={:#08x}", round, garment, tint);
            }
            GameEvent::InputDropped(cmd) => {
                info!("INPUT | {:?} dropped during lockout", cmd);
            }
            GameEvent::ConfigRejected(reason) => {
                info!("CONFIG | rejected: {}", reason);
            }
        }
    }
}
