//! Input event queue.
//!
//! Events are produced by:
//! - the key edge detector (one fold command per rising edge)
//! - the restart key
//! - the scheduler delegate (round-result timeout)
//!
//! Events are consumed by the host loop, which hands them to the
//! session one at a time, each processed to completion before the next.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Key edges    │────▶│              │     │              │
//! │ Round timer  │────▶│  InputQueue  │────▶│  GameSession │
//! │              │     │  (bounded)   │     │  (consumer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The queue is an owned value, not a global, so every session (and
//! every test) gets its own.

use heapless::Deque;
use log::warn;

use crate::app::commands::GameCommand;
use crate::app::ports::{ScheduleFiredKind, SchedulerDelegate};
use crate::fsm::FoldCommand;

/// Maximum number of pending events.
const EVENT_QUEUE_CAP: usize = 32;

/// Things that can happen between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Discrete player command.
    Command(FoldCommand),
    /// The result display timer fired.
    RoundTimerExpired,
    /// The player asked for a fresh garment.
    Restart,
}

impl From<InputEvent> for GameCommand {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Command(cmd) => GameCommand::Fold(cmd),
            InputEvent::RoundTimerExpired => GameCommand::RoundTimerExpired,
            InputEvent::Restart => GameCommand::Restart,
        }
    }
}

/// Bounded FIFO of pending input events.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Deque<InputEvent, EVENT_QUEUE_CAP>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event.
    /// Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: InputEvent) -> bool {
        if self.events.push_back(event).is_err() {
            warn!("Input queue full, dropping {:?}", event);
            return false;
        }
        true
    }

    /// Pop the oldest event, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    /// Drain all pending events into a callback, in FIFO order.
    pub fn drain(&mut self, mut handler: impl FnMut(InputEvent)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Bridges the scheduler to the queue: every fired schedule becomes a
/// [`InputEvent::RoundTimerExpired`].
impl SchedulerDelegate for InputQueue {
    fn on_schedule_fired(&mut self, _label: &str, _kind: ScheduleFiredKind) {
        self.push(InputEvent::RoundTimerExpired);
    }
}
