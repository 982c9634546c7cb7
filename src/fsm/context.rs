//! Per-round state owned by the engine.
//!
//! `RoundState` is the one live blackboard of a session: which garment
//! is on screen, that garment's machine (phase plus side bookkeeping),
//! and the lockout flag raised while a result is displayed.

use rand::Rng;
use rand::seq::SliceRandom;

use super::shirt::ShirtMachine;
use super::trousers::TrousersMachine;
use super::{FoldCommand, FoldMachine, Garment, Phase, Side, Step};

// ---------------------------------------------------------------------------
// Garment machine variant
// ---------------------------------------------------------------------------

/// The active garment's machine.  The variant *is* the garment kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GarmentMachine {
    Shirt(ShirtMachine),
    Trousers(TrousersMachine),
}

impl GarmentMachine {
    /// Fresh machine for `garment`, at START.
    pub fn initial(garment: Garment) -> Self {
        match garment {
            Garment::Shirt => Self::Shirt(ShirtMachine::initial()),
            Garment::Trousers => Self::Trousers(TrousersMachine::initial()),
        }
    }

    pub fn garment(&self) -> Garment {
        match self {
            Self::Shirt(_) => Garment::Shirt,
            Self::Trousers(_) => Garment::Trousers,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Self::Shirt(m) => m.phase(),
            Self::Trousers(m) => m.phase(),
        }
    }

    pub fn apply(&mut self, cmd: FoldCommand) -> Step {
        match self {
            Self::Shirt(m) => m.apply(cmd),
            Self::Trousers(m) => m.apply(cmd),
        }
    }
}

/// Uniform pick over every garment kind.
pub fn random_garment(rng: &mut impl Rng) -> Garment {
    *Garment::ALL
        .choose(rng)
        .unwrap_or(&Garment::Shirt)
}

// ---------------------------------------------------------------------------
// RoundState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    machine: GarmentMachine,
    /// True iff a terminal result is being displayed.
    locked: bool,
    /// 1-based round counter for the session.
    round: u32,
}

impl RoundState {
    /// First round of a session, garment picked uniformly at random.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_garment(random_garment(rng))
    }

    /// First round of a session on a known garment.
    pub fn with_garment(garment: Garment) -> Self {
        Self {
            machine: GarmentMachine::initial(garment),
            locked: false,
            round: 1,
        }
    }

    /// Replace every field for the next round: new random garment,
    /// START phase, no side progress, no fold path, unlocked.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.machine = GarmentMachine::initial(random_garment(rng));
        self.locked = false;
        self.round = self.round.wrapping_add(1);
    }

    pub fn garment(&self) -> Garment {
        self.machine.garment()
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Shirt only; always `false` for trousers.
    pub fn left_done(&self) -> bool {
        match &self.machine {
            GarmentMachine::Shirt(m) => m.left_done(),
            GarmentMachine::Trousers(_) => false,
        }
    }

    /// Shirt only; always `false` for trousers.
    pub fn right_done(&self) -> bool {
        match &self.machine {
            GarmentMachine::Shirt(m) => m.right_done(),
            GarmentMachine::Trousers(_) => false,
        }
    }

    /// Trousers only; always `None` for shirts.
    pub fn fold_path(&self) -> Option<Side> {
        match &self.machine {
            GarmentMachine::Shirt(_) => None,
            GarmentMachine::Trousers(m) => m.path(),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub(super) fn garment_mut(&mut self) -> &mut GarmentMachine {
        &mut self.machine
    }

    pub(super) fn lock(&mut self) {
        self.locked = true;
    }
}
