//! Port traits: the hexagonal boundary between game logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ GameSession (domain)
//! ```
//!
//! Driven adapters (presentation, event sinks, config storage) implement
//! these traits.  The [`GameSession`](super::service::GameSession) consumes
//! them via generics, so the game core never draws, reads keys, or touches
//! the filesystem directly.

use crate::config::GameConfig;
use crate::fsm::{Garment, Outcome};

// ───────────────────────────────────────────────────────────────
// Presentation port (driven adapter: domain → screen)
// ───────────────────────────────────────────────────────────────

/// Everything the session asks the screen to do.
///
/// Exactly one garment sprite is visible per round; the result sprite is
/// drawn on top of it while a round is being resolved.
pub trait Presentation {
    /// Make `garment` the visible sprite (hiding the other) tinted `tint`
    /// (0xRRGGBB).
    fn show_garment(&mut self, garment: Garment, tint: u32);

    /// Set the visible garment sprite's frame.
    fn show_frame(&mut self, garment: Garment, frame: u8);

    /// Replace the instruction line.
    fn set_instruction(&mut self, text: &str);

    /// Show the result sprite at `frame` with opacity `alpha` (0.0–1.0).
    fn show_result(&mut self, outcome: Outcome, frame: u8, alpha: f32);

    /// Hide the result sprite.
    fn hide_result(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`GameEvent`](super::events::GameEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::GameEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists game configuration.
///
/// Implementations MUST validate config values before persisting.
/// Invalid ranges are rejected with [`ConfigError::ValidationFailed`],
/// not silently clamped.
pub trait ConfigPort {
    /// Load configuration.
    /// Returns [`GameConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<GameConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &GameConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate (decouples scheduler from the input queue)
// ───────────────────────────────────────────────────────────────

/// Callback trait that the scheduler invokes when a schedule fires.
///
/// The host loop implements this by pushing into its
/// [`InputQueue`](crate::events::InputQueue); the scheduler itself knows
/// nothing about sessions or queues.
pub trait SchedulerDelegate {
    /// Called when a schedule fires.
    ///
    /// * `label`: the label of the schedule that fired.
    /// * `kind`: how it fired.
    fn on_schedule_fired(&mut self, label: &str, kind: ScheduleFiredKind);
}

/// Discriminant passed to [`SchedulerDelegate::on_schedule_fired`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFiredKind {
    /// A one-shot schedule fired (removed after).
    OneShot,
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
