//! Game session, the hexagonal core.
//!
//! [`GameSession`] owns the fold engine, the live config, the session
//! RNG and the round tally.  It exposes a presentation-agnostic API.
//! All I/O flows through port traits injected at call sites, making
//! the entire session testable with recording mocks.
//!
//! ```text
//!  GameCommand ──▶ ┌────────────────────────┐ ──▶ Presentation
//!                  │      GameSession        │ ──▶ EventSink
//!    Scheduler ◀── │  FoldEngine · RoundStats│
//!                  └────────────────────────┘
//! ```
//!
//! A session is explicitly owned by the host; nothing here is global,
//! so several sessions can run side by side.

use log::{info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{DEFAULT_PALETTE, GameConfig};
use crate::fsm::{Directive, FoldCommand, FoldEngine, Garment, Outcome, Phase};
use crate::scheduler::{CancellationToken, ScheduleId, Scheduler};

use super::commands::GameCommand;
use super::events::{GameEvent, RoundStats};
use super::ports::{EventSink, Presentation};

/// Label of the one-shot schedule that ends the result display.
pub const ROUND_RESET_LABEL: &str = "round-reset";

/// Uniform pick over the configured palette.
pub fn pick_tint(config: &GameConfig, rng: &mut impl Rng) -> u32 {
    *config.palette.choose(rng).unwrap_or(&DEFAULT_PALETTE[0])
}

// ───────────────────────────────────────────────────────────────
// GameSession
// ───────────────────────────────────────────────────────────────

pub struct GameSession<R> {
    engine: FoldEngine,
    config: GameConfig,
    rng: R,
    /// Tint of the current round's garment.
    tint: u32,
    stats: RoundStats,
    /// Cancelled when the session is dropped.
    token: CancellationToken,
    pending_reset: Option<ScheduleId>,
}

impl<R: Rng> GameSession<R> {
    /// Construct a session with a random first garment.
    ///
    /// Does **not** render anything; call [`start`](Self::start) next.
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let engine = FoldEngine::new(&mut rng);
        Self::with_engine(config, rng, engine)
    }

    /// Construct a session around an existing engine (e.g. a fixed
    /// first garment for replays).
    pub fn with_engine(config: GameConfig, mut rng: R, engine: FoldEngine) -> Self {
        let tint = pick_tint(&config, &mut rng);
        Self {
            engine,
            config,
            rng,
            tint,
            stats: RoundStats::default(),
            token: CancellationToken::new(),
            pending_reset: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Render the first round.
    pub fn start(&mut self, screen: &mut impl Presentation, sink: &mut impl EventSink) {
        let garment = self.engine.round().garment();
        self.render_round_start(garment, crate::fsm::INITIAL_INSTRUCTION, screen);
        sink.emit(&GameEvent::Started {
            garment,
            tint: self.tint,
        });
        info!("GameSession started with {:?} tint={:#08x}", garment, self.tint);
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one inbound command to completion.
    pub fn handle_command(
        &mut self,
        cmd: GameCommand,
        scheduler: &mut Scheduler,
        screen: &mut impl Presentation,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            GameCommand::Fold(fold) => self.on_fold(fold, scheduler, screen, sink),
            GameCommand::RoundTimerExpired => self.on_round_timer(screen, sink),
            GameCommand::Restart => self.on_restart(scheduler, screen, sink),
            GameCommand::UpdateConfig(new_config) => match new_config.validate() {
                Ok(()) => {
                    self.config = new_config;
                    info!("Configuration updated at runtime");
                }
                Err(e) => {
                    warn!("Rejected config update: {}", e);
                    let reason = match e {
                        super::ports::ConfigError::ValidationFailed(msg) => msg,
                        _ => "invalid config",
                    };
                    sink.emit(&GameEvent::ConfigRejected(reason));
                }
            },
        }
    }

    fn on_fold(
        &mut self,
        cmd: FoldCommand,
        scheduler: &mut Scheduler,
        screen: &mut impl Presentation,
        sink: &mut impl EventSink,
    ) {
        let before = self.engine.round().phase();
        let Some(directive) = self.engine.handle_command(cmd) else {
            sink.emit(&GameEvent::InputDropped(cmd));
            return;
        };

        match directive {
            Directive::ShowFrame {
                garment,
                phase,
                instruction,
            } => {
                screen.show_frame(garment, phase.frame());
                screen.set_instruction(instruction);
                sink.emit(&GameEvent::PhaseChanged {
                    from: before,
                    to: phase,
                });
            }
            Directive::ShowResult(outcome) => {
                self.resolve(outcome, screen, sink);
                self.schedule_reset(scheduler, screen, sink);
            }
            Directive::NewRound { .. } => {
                // handle_command never starts a round.
            }
        }
    }

    fn resolve(
        &mut self,
        outcome: Outcome,
        screen: &mut impl Presentation,
        sink: &mut impl EventSink,
    ) {
        let round = self.engine.round();
        let final_phase: Phase = round.phase();
        screen.show_frame(round.garment(), final_phase.frame());

        let alpha = match outcome {
            Outcome::Success => self.config.success_alpha,
            Outcome::Fail => self.config.fail_alpha,
        };
        screen.show_result(outcome, outcome.frame(), alpha);

        self.stats.record(outcome);
        sink.emit(&GameEvent::RoundResolved {
            round: round.round(),
            garment: round.garment(),
            outcome,
            stats: self.stats,
        });
    }

    fn schedule_reset(
        &mut self,
        scheduler: &mut Scheduler,
        screen: &mut impl Presentation,
        sink: &mut impl EventSink,
    ) {
        self.pending_reset = scheduler.schedule_once(
            ROUND_RESET_LABEL,
            self.config.result_display_ms,
            self.token.clone(),
        );
        if self.pending_reset.is_none() {
            // A round must never stay locked forever.
            warn!("Round reset could not be scheduled, resetting now");
            self.on_round_timer(screen, sink);
        }
    }

    fn on_round_timer(&mut self, screen: &mut impl Presentation, sink: &mut impl EventSink) {
        self.pending_reset = None;
        let Some(Directive::NewRound {
            garment,
            instruction,
        }) = self.engine.complete_round(&mut self.rng)
        else {
            return;
        };

        self.begin_round(garment, instruction, screen, sink);
    }

    fn on_restart(
        &mut self,
        scheduler: &mut Scheduler,
        screen: &mut impl Presentation,
        sink: &mut impl EventSink,
    ) {
        if let Some(id) = self.pending_reset.take() {
            scheduler.cancel(id);
        }
        if let Directive::NewRound {
            garment,
            instruction,
        } = self.engine.restart(&mut self.rng)
        {
            self.begin_round(garment, instruction, screen, sink);
        }
    }

    fn begin_round(
        &mut self,
        garment: Garment,
        instruction: &str,
        screen: &mut impl Presentation,
        sink: &mut impl EventSink,
    ) {
        self.tint = pick_tint(&self.config, &mut self.rng);
        self.render_round_start(garment, instruction, screen);
        sink.emit(&GameEvent::RoundStarted {
            round: self.engine.round().round(),
            garment,
            tint: self.tint,
        });
    }

    fn render_round_start(
        &self,
        garment: Garment,
        instruction: &str,
        screen: &mut impl Presentation,
    ) {
        screen.hide_result();
        screen.show_garment(garment, self.tint);
        screen.show_frame(garment, self.engine.round().phase().frame());
        screen.set_instruction(instruction);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn engine(&self) -> &FoldEngine {
        &self.engine
    }

    pub fn is_locked(&self) -> bool {
        self.engine.is_locked()
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    pub fn tint(&self) -> u32 {
        self.tint
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Clone of the token guarding this session's scheduled work.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl<R> Drop for GameSession<R> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
