//! Garment-folding state machines and the input judge.
//!
//! Each garment kind owns its own variant state machine.  The engine
//! holds one [`RoundState`] and routes every discrete command to the
//! machine of the garment currently on screen:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  FoldEngine                                                  │
//! │                                                              │
//! │   FoldCommand ──▶ locked? ──yes──▶ (dropped, no directive)   │
//! │                      │ no                                    │
//! │                      ▼                                       │
//! │   RoundState.garment ─┬─ Shirt(ShirtMachine)                 │
//! │                       └─ Trousers(TrousersMachine)           │
//! │                      │                                       │
//! │                      ▼                                       │
//! │   Step::Advance ──▶ Directive::ShowFrame                     │
//! │   Step::Resolve ──▶ Directive::ShowResult  (locks the round) │
//! │                                                              │
//! │   complete_round() ──▶ reset ──▶ Directive::NewRound         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid input is never an error here: it resolves the round with
//! [`Outcome::Fail`].

pub mod context;
pub mod shirt;
pub mod trousers;

use context::RoundState;
use log::{debug, info};
use rand::Rng;

pub use shirt::ShirtPhase;
pub use trousers::TrousersPhase;

/// Title text shown above the garment for the whole session.
pub const HEADLINE: &str = "Fold the laundry using arrow keys!";

/// Instruction shown at the start of every round.
pub const INITIAL_INSTRUCTION: &str = "Press LEFT or RIGHT to fold";

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// The garment displayed for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Garment {
    Shirt,
    Trousers,
}

impl Garment {
    /// Every garment kind, in selection order.
    pub const ALL: [Garment; 2] = [Garment::Shirt, Garment::Trousers];
}

/// A discrete player command, delivered at most once per input edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldCommand {
    Left,
    Right,
    /// Bound to the UP key.
    Confirm,
}

/// Fold side.  Used as the committed trousers fold path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Outcome {
    Fail = 0,
    Success = 1,
}

impl Outcome {
    /// Frame index in the results sprite sheet.
    pub fn frame(self) -> u8 {
        self as u8
    }
}

/// Current node of the active garment's state machine.
///
/// Tagged by garment so a shirt phase can never be paired with trousers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Shirt(ShirtPhase),
    Trousers(TrousersPhase),
}

impl Phase {
    /// Sprite frame index for this phase.
    pub fn frame(self) -> u8 {
        match self {
            Self::Shirt(p) => p as u8,
            Self::Trousers(p) => p as u8,
        }
    }

    /// Garment this phase belongs to.
    pub fn garment(self) -> Garment {
        match self {
            Self::Shirt(_) => Garment::Shirt,
            Self::Trousers(_) => Garment::Trousers,
        }
    }

    /// Position along the garment's progress order.  Never decreases
    /// within a round.
    pub fn progress(self) -> u8 {
        match self {
            Self::Shirt(p) => p.progress(),
            Self::Trousers(p) => p.progress(),
        }
    }
}

// ---------------------------------------------------------------------------
// Machine contract
// ---------------------------------------------------------------------------

/// Result of applying one command to a garment machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Non-terminal transition; carries the next instruction text.
    Advance(&'static str),
    /// The round is over.
    Resolve(Outcome),
}

/// Behaviour shared by both garment state machines.
pub trait FoldMachine {
    /// Machine positioned at its START node with no progress recorded.
    fn initial() -> Self;

    /// Current node, tagged with the garment.
    fn phase(&self) -> Phase;

    /// Judge one command.  A failing command leaves the phase untouched.
    fn apply(&mut self, cmd: FoldCommand) -> Step;
}

// ---------------------------------------------------------------------------
// Directives
// ---------------------------------------------------------------------------

/// What the presentation layer should render after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Non-terminal transition: show `phase`'s frame and new instruction.
    ShowFrame {
        garment: Garment,
        phase: Phase,
        instruction: &'static str,
    },
    /// Terminal result.  Input is locked until the round is completed.
    ShowResult(Outcome),
    /// A fresh round is ready: show `garment` at START with `instruction`.
    NewRound {
        garment: Garment,
        instruction: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The state machine and judge for one game session.
#[derive(Debug, Clone)]
pub struct FoldEngine {
    round: RoundState,
}

impl FoldEngine {
    /// Start a new engine with a randomly chosen first garment.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            round: RoundState::new(rng),
        }
    }

    /// Start a new engine on a specific garment (replays and tests).
    pub fn with_garment(garment: Garment) -> Self {
        Self {
            round: RoundState::with_garment(garment),
        }
    }

    /// Judge one command.
    ///
    /// Returns `None` while a result is displayed: the command is
    /// dropped and the round state is left untouched.
    pub fn handle_command(&mut self, cmd: FoldCommand) -> Option<Directive> {
        if self.round.is_locked() {
            debug!("Round {} locked, dropping {:?}", self.round.round(), cmd);
            return None;
        }

        let before = self.round.phase();
        let step = self.round.garment_mut().apply(cmd);

        let directive = match step {
            Step::Advance(instruction) => {
                let phase = self.round.phase();
                info!("Fold: {:?} -> {:?} on {:?}", before, phase, cmd);
                Directive::ShowFrame {
                    garment: phase.garment(),
                    phase,
                    instruction,
                }
            }
            Step::Resolve(outcome) => {
                self.round.lock();
                info!(
                    "Round {} resolved {:?} on {:?} (phase {:?})",
                    self.round.round(),
                    outcome,
                    cmd,
                    self.round.phase()
                );
                Directive::ShowResult(outcome)
            }
        };
        Some(directive)
    }

    /// Finish the displayed round and set up the next one.
    ///
    /// Only meaningful while locked; otherwise this is a no-op and
    /// returns `None`.
    pub fn complete_round(&mut self, rng: &mut impl Rng) -> Option<Directive> {
        if !self.round.is_locked() {
            debug!("complete_round called on an unresolved round, ignoring");
            return None;
        }
        self.round.reset(rng);
        info!(
            "Round {} started with {:?}",
            self.round.round(),
            self.round.garment()
        );
        Some(Directive::NewRound {
            garment: self.round.garment(),
            instruction: INITIAL_INSTRUCTION,
        })
    }

    /// Abandon the live round, locked or not, and set up a fresh one.
    pub fn restart(&mut self, rng: &mut impl Rng) -> Directive {
        info!("Round {} abandoned", self.round.round());
        self.round.reset(rng);
        Directive::NewRound {
            garment: self.round.garment(),
            instruction: INITIAL_INSTRUCTION,
        }
    }

    /// Read-only view of the live round.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn is_locked(&self) -> bool {
        self.round.is_locked()
    }
}
