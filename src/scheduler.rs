//! One-shot timer engine.
//!
//! Runs the round-result timeout.  The scheduler notifies a
//! [`SchedulerDelegate`] when an entry fires; the host loop implements
//! the delegate to push a timer event into its input queue.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  GameSession ──schedule_once(label, delay, token)──▶ Scheduler│
//! │                                                    │         │
//! │                          tick(elapsed_ms)          ▼         │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │ token cancelled? ──yes──▶ drop entry silently          │  │
//! │  │ delay elapsed?   ──yes──▶ SchedulerDelegate (fire once)│  │
//! │  └───────────────────────┬────────────────────────────────┘  │
//! │                          ▼                                   │
//! │                InputQueue ──▶ GameSession.handle_command()   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every entry carries a [`CancellationToken`] tied to the lifetime of
//! the session that scheduled it, so a discarded session can never be
//! reset by a late timer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use heapless::Vec;
use log::{info, warn};

use crate::app::ports::{ScheduleFiredKind, SchedulerDelegate};

// ═══════════════════════════════════════════════════════════════
//  Cancellation
// ═══════════════════════════════════════════════════════════════

/// Shared cancel flag.  Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every schedule holding a clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler engine
// ═══════════════════════════════════════════════════════════════

/// Maximum number of pending schedules (stack-allocated).
const MAX_SCHEDULES: usize = 4;

/// Handle returned by [`Scheduler::schedule_once`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleId(u32);

/// Internal bookkeeping for a pending schedule.
#[derive(Debug, Clone)]
struct ScheduleEntry {
    id: ScheduleId,
    label: &'static str,
    delay_ms: u32,
    elapsed_ms: u64,
    token: CancellationToken,
}

/// The scheduler engine.
///
/// Decoupled from the input queue: firing goes through the
/// [`SchedulerDelegate`], which keeps this type independently testable.
pub struct Scheduler {
    entries: Vec<ScheduleEntry, MAX_SCHEDULES>,
    next_id: u32,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Fire `label` once after `delay_ms`, unless `token` is cancelled
    /// first.  Returns `None` if every slot is taken.
    pub fn schedule_once(
        &mut self,
        label: &'static str,
        delay_ms: u32,
        token: CancellationToken,
    ) -> Option<ScheduleId> {
        let id = ScheduleId(self.next_id);
        let entry = ScheduleEntry {
            id,
            label,
            delay_ms,
            elapsed_ms: 0,
            token,
        };
        if self.entries.push(entry).is_err() {
            warn!("Scheduler: no free slot for '{}'", label);
            return None;
        }
        self.next_id = self.next_id.wrapping_add(1);
        info!("Scheduler: '{}' fires in {}ms", label, delay_ms);
        Some(id)
    }

    /// Remove a pending schedule.  Unknown ids are ignored.
    pub fn cancel(&mut self, id: ScheduleId) {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            let entry = self.entries.remove(pos);
            info!("Scheduler: cancelled '{}'", entry.label);
        }
    }

    /// Advance every pending schedule by `elapsed_ms`.
    ///
    /// Entries whose token was cancelled are dropped without firing.
    /// Entries whose delay has elapsed fire exactly once, in the order
    /// they were scheduled, then are removed.
    pub fn tick(&mut self, elapsed_ms: u32, delegate: &mut dyn SchedulerDelegate) {
        let mut i = 0;
        while i < self.entries.len() {
            let entry = &mut self.entries[i];

            if entry.token.is_cancelled() {
                info!("Scheduler: '{}' dropped (owner gone)", entry.label);
                self.entries.remove(i);
                continue;
            }

            entry.elapsed_ms += u64::from(elapsed_ms);
            if entry.elapsed_ms >= u64::from(entry.delay_ms) {
                let label = entry.label;
                info!("Scheduler: '{}' one-shot fired", label);
                self.entries.remove(i);
                delegate.on_schedule_fired(label, ScheduleFiredKind::OneShot);
                continue;
            }

            i += 1;
        }
    }

    /// Number of schedules still waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .count()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
