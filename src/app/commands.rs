//! Inbound commands to the game session.
//!
//! These represent what the outside world (key edges, the round timer,
//! a config reload) asks the [`GameSession`](super::service::GameSession)
//! to do.

use crate::config::GameConfig;
use crate::fsm::FoldCommand;

#[derive(Debug, Clone)]
pub enum GameCommand {
    /// A discrete player command (one per key rising edge).
    Fold(FoldCommand),

    /// The result display delay elapsed; start the next round.
    RoundTimerExpired,

    /// Abandon the current round (and any pending result timer) and
    /// deal a new garment.
    Restart,

    /// Hot-reload configuration.  Takes effect for following rounds.
    UpdateConfig(GameConfig),
}
