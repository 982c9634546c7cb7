//! Key edge detector: held-key snapshots in, discrete commands out.
//!
//! ## Input model
//!
//! The presentation layer samples the three game keys once per frame
//! and hands the held state to [`KeyEdgeDetector::update`].  The
//! detector compares against the previous frame and reports a command
//! only on a rising edge, so a held key (or OS auto-repeat) never
//! fires twice.
//!
//! | Key   | Command   | Priority when several rise together |
//! |-------|-----------|-------------------------------------|
//! | LEFT  | `Left`    | 1                                   |
//! | RIGHT | `Right`   | 2                                   |
//! | UP    | `Confirm` | 3                                   |
//!
//! At most one command is produced per frame; simultaneous edges of
//! lower priority are consumed.

use crate::fsm::FoldCommand;

/// Held state of the game keys for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
}

impl KeySnapshot {
    /// Snapshot with only the key bound to `cmd` held.
    pub fn only(cmd: FoldCommand) -> Self {
        let mut snap = Self::default();
        match cmd {
            FoldCommand::Left => snap.left = true,
            FoldCommand::Right => snap.right = true,
            FoldCommand::Confirm => snap.confirm = true,
        }
        snap
    }
}

#[derive(Debug, Default)]
pub struct KeyEdgeDetector {
    last: KeySnapshot,
}

impl KeyEdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame with the currently held keys.
    /// Returns the command for a newly pressed key, if any.
    pub fn update(&mut self, now: KeySnapshot) -> Option<FoldCommand> {
        let left = now.left && !self.last.left;
        let right = now.right && !self.last.right;
        let confirm = now.confirm && !self.last.confirm;
        self.last = now;

        if left {
            Some(FoldCommand::Left)
        } else if right {
            Some(FoldCommand::Right)
        } else if confirm {
            Some(FoldCommand::Confirm)
        } else {
            None
        }
    }

    /// Forget held state, e.g. after focus loss.
    pub fn reset(&mut self) {
        self.last = KeySnapshot::default();
    }
}
