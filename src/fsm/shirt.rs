//! Shirt fold machine: two side folds in either order, then confirm.
//!
//! ```text
//!            LEFT                     RIGHT
//!  START ─────────▶ RIGHT_FOLD_SHOWN ─────────┐
//!    │                                        ▼
//!    └───RIGHT────▶ LEFT_FOLD_SHOWN ──LEFT──▶ DOUBLE_FOLD ──UP──▶ COMPLETE
//! ```
//!
//! The frame shown after one fold is the one that prompts the *other*
//! side: completing LEFT displays RIGHT_FOLD_SHOWN.

use super::{FoldCommand, FoldMachine, Outcome, Phase, Step};

/// Shirt nodes, numbered by sprite frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShirtPhase {
    Start = 0,
    LeftFoldShown = 1,
    RightFoldShown = 2,
    DoubleFold = 3,
    Complete = 4,
}

impl ShirtPhase {
    /// Progress rank.  Both single-fold frames share a rank.
    pub fn progress(self) -> u8 {
        match self {
            Self::Start => 0,
            Self::LeftFoldShown | Self::RightFoldShown => 1,
            Self::DoubleFold => 2,
            Self::Complete => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShirtMachine {
    phase: ShirtPhase,
    left_done: bool,
    right_done: bool,
}

impl ShirtMachine {
    pub fn left_done(&self) -> bool {
        self.left_done
    }

    pub fn right_done(&self) -> bool {
        self.right_done
    }

    pub fn current(&self) -> ShirtPhase {
        self.phase
    }

    fn fold(&mut self, side: FoldCommand) -> Step {
        if matches!(self.phase, ShirtPhase::DoubleFold | ShirtPhase::Complete) {
            return Step::Resolve(Outcome::Fail);
        }

        let (done, other_done) = match side {
            FoldCommand::Left => (&mut self.left_done, self.right_done),
            _ => (&mut self.right_done, self.left_done),
        };
        if *done {
            return Step::Resolve(Outcome::Fail);
        }
        *done = true;

        if other_done {
            self.phase = ShirtPhase::DoubleFold;
            return Step::Advance("Press UP to complete!");
        }

        match side {
            FoldCommand::Left => {
                self.phase = ShirtPhase::RightFoldShown;
                Step::Advance("Press RIGHT to do second fold")
            }
            _ => {
                self.phase = ShirtPhase::LeftFoldShown;
                Step::Advance("Press LEFT to do second fold")
            }
        }
    }
}

impl FoldMachine for ShirtMachine {
    fn initial() -> Self {
        Self {
            phase: ShirtPhase::Start,
            left_done: false,
            right_done: false,
        }
    }

    fn phase(&self) -> Phase {
        Phase::Shirt(self.phase)
    }

    fn apply(&mut self, cmd: FoldCommand) -> Step {
        match cmd {
            FoldCommand::Left | FoldCommand::Right => self.fold(cmd),
            FoldCommand::Confirm => {
                if self.phase == ShirtPhase::DoubleFold {
                    self.phase = ShirtPhase::Complete;
                    Step::Resolve(Outcome::Success)
                } else {
                    Step::Resolve(Outcome::Fail)
                }
            }
        }
    }
}
