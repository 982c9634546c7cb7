//! Trousers fold machine: pick a side once, then two confirms along it.
//!
//! ```text
//!           LEFT               UP                   UP
//!  START ──────▶ LEFT_FOLD ─────▶ LEFT_FIRST_UP ─────▶ LEFT_COMPLETE
//!    │
//!    └──RIGHT──▶ RIGHT_FOLD ────▶ RIGHT_FIRST_UP ────▶ RIGHT_COMPLETE
//! ```
//!
//! The first side command commits the fold path for the rest of the
//! round; any later side command fails.

use super::{FoldCommand, FoldMachine, Outcome, Phase, Side, Step};

/// Trousers nodes, numbered by sprite frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TrousersPhase {
    Start = 0,
    LeftFold = 1,
    RightFold = 2,
    LeftFirstUp = 3,
    RightFirstUp = 4,
    LeftComplete = 5,
    RightComplete = 6,
}

impl TrousersPhase {
    /// Progress rank along either path.
    pub fn progress(self) -> u8 {
        match self {
            Self::Start => 0,
            Self::LeftFold | Self::RightFold => 1,
            Self::LeftFirstUp | Self::RightFirstUp => 2,
            Self::LeftComplete | Self::RightComplete => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrousersMachine {
    phase: TrousersPhase,
    path: Option<Side>,
}

impl TrousersMachine {
    /// Committed fold path, if a side has been chosen this round.
    pub fn path(&self) -> Option<Side> {
        self.path
    }

    pub fn current(&self) -> TrousersPhase {
        self.phase
    }

    fn commit(&mut self, side: Side) -> Step {
        if self.phase != TrousersPhase::Start {
            return Step::Resolve(Outcome::Fail);
        }
        self.path = Some(side);
        self.phase = match side {
            Side::Left => TrousersPhase::LeftFold,
            Side::Right => TrousersPhase::RightFold,
        };
        Step::Advance("Press UP to continue folding")
    }

    fn confirm(&mut self) -> Step {
        use TrousersPhase as P;

        let next = match (self.path, self.phase) {
            (Some(Side::Left), P::LeftFold) => P::LeftFirstUp,
            (Some(Side::Left), P::LeftFirstUp) => P::LeftComplete,
            (Some(Side::Right), P::RightFold) => P::RightFirstUp,
            (Some(Side::Right), P::RightFirstUp) => P::RightComplete,
            _ => return Step::Resolve(Outcome::Fail),
        };
        self.phase = next;

        match next {
            P::LeftComplete | P::RightComplete => Step::Resolve(Outcome::Success),
            _ => Step::Advance("Press UP one more time!"),
        }
    }
}

impl FoldMachine for TrousersMachine {
    fn initial() -> Self {
        Self {
            phase: TrousersPhase::Start,
            path: None,
        }
    }

    fn phase(&self) -> Phase {
        Phase::Trousers(self.phase)
    }

    fn apply(&mut self, cmd: FoldCommand) -> Step {
        match cmd {
            FoldCommand::Left => self.commit(Side::Left),
            FoldCommand::Right => self.commit(Side::Right),
            FoldCommand::Confirm => self.confirm(),
        }
    }
}
