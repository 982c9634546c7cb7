//! Integration tests for the input → GameSession → presentation pipeline.
//!
//! These drive a session the way the terminal loop does (queue, scheduler
//! ticks, drain) and assert on what reached the screen.

use crate::mock_screen::{DrawCall, RecordingScreen, RecordingSink};

use foldgame::app::commands::GameCommand;
use foldgame::app::events::GameEvent;
use foldgame::app::service::GameSession;
use foldgame::config::GameConfig;
use foldgame::events::{InputEvent, InputQueue};
use foldgame::fsm::{FoldCommand, FoldEngine, Garment, INITIAL_INSTRUCTION, Outcome};
use foldgame::scheduler::Scheduler;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct Harness {
    pub session: GameSession<StdRng>,
    pub scheduler: Scheduler,
    pub queue: InputQueue,
    pub screen: RecordingScreen,
    pub sink: RecordingSink,
}

impl Harness {
    pub fn new(garment: Garment) -> Self {
        Self::with_config(garment, GameConfig::default())
    }

    pub fn with_config(garment: Garment, config: GameConfig) -> Self {
        let mut harness = Self {
            session: GameSession::with_engine(
                config,
                StdRng::seed_from_u64(0xf01d),
                FoldEngine::with_garment(garment),
            ),
            scheduler: Scheduler::new(),
            queue: InputQueue::new(),
            screen: RecordingScreen::new(),
            sink: RecordingSink::new(),
        };
        harness.session.start(&mut harness.screen, &mut harness.sink);
        harness
    }

    pub fn press(&mut self, cmd: FoldCommand) {
        self.queue.push(InputEvent::Command(cmd));
        self.pump();
    }

    pub fn advance(&mut self, ms: u32) {
        self.scheduler.tick(ms, &mut self.queue);
        self.pump();
    }

    fn pump(&mut self) {
        self.queue.drain(|event| {
            self.session.handle_command(
                event.into(),
                &mut self.scheduler,
                &mut self.screen,
                &mut self.sink,
            );
        });
    }
}

fn result_call(screen: &RecordingScreen) -> Option<DrawCall> {
    screen
        .calls
        .iter()
        .rev()
        .find(|c| matches!(c, DrawCall::Result { .. }))
        .cloned()
}

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn start_shows_one_garment_at_first_frame() {
    let h = Harness::new(Garment::Trousers);
    assert!(h.screen.calls.contains(&DrawCall::Garment {
        garment: Garment::Trousers,
        tint: h.session.tint(),
    }));
    assert_eq!(h.screen.last_frame(), Some((Garment::Trousers, 0)));
    assert_eq!(h.screen.last_instruction(), Some(INITIAL_INSTRUCTION));
    assert!(!h.screen.result_visible());
    assert!(matches!(
        h.sink.events[0],
        GameEvent::Started {
            garment: Garment::Trousers,
            ..
        }
    ));
}

// ── End-to-end scenarios ──────────────────────────────────────

#[test]
fn shirt_success_scenario() {
    let mut h = Harness::new(Garment::Shirt);

    h.press(FoldCommand::Left);
    assert_eq!(h.screen.last_frame(), Some((Garment::Shirt, 2)));
    assert_eq!(
        h.screen.last_instruction(),
        Some("Press RIGHT to do second fold")
    );

    h.press(FoldCommand::Right);
    assert_eq!(h.screen.last_frame(), Some((Garment::Shirt, 3)));
    assert_eq!(h.screen.last_instruction(), Some("Press UP to complete!"));

    h.press(FoldCommand::Confirm);
    assert_eq!(h.screen.last_frame(), Some((Garment::Shirt, 4)));
    assert_eq!(
        result_call(&h.screen),
        Some(DrawCall::Result {
            outcome: Outcome::Success,
            frame: 1,
            alpha: 0.5,
        })
    );
    assert!(h.session.is_locked());
    assert_eq!(h.session.stats().successes, 1);
}

#[test]
fn shirt_fail_scenario() {
    let mut h = Harness::new(Garment::Shirt);
    h.press(FoldCommand::Left);
    h.press(FoldCommand::Left);
    assert_eq!(
        result_call(&h.screen),
        Some(DrawCall::Result {
            outcome: Outcome::Fail,
            frame: 0,
            alpha: 1.0,
        })
    );
    // Phase is left where the failing command found it.
    assert_eq!(h.screen.last_frame(), Some((Garment::Shirt, 2)));
    assert_eq!(h.session.stats().failures, 1);
}

#[test]
fn trousers_success_scenario() {
    let mut h = Harness::new(Garment::Trousers);

    h.press(FoldCommand::Right);
    assert_eq!(h.screen.last_frame(), Some((Garment::Trousers, 2)));
    assert_eq!(
        h.screen.last_instruction(),
        Some("Press UP to continue folding")
    );

    h.press(FoldCommand::Confirm);
    assert_eq!(h.screen.last_frame(), Some((Garment::Trousers, 4)));
    assert_eq!(h.screen.last_instruction(), Some("Press UP one more time!"));

    h.press(FoldCommand::Confirm);
    assert_eq!(h.screen.last_frame(), Some((Garment::Trousers, 6)));
    assert!(matches!(
        result_call(&h.screen),
        Some(DrawCall::Result {
            outcome: Outcome::Success,
            ..
        })
    ));
}

#[test]
fn trousers_fail_scenario() {
    let mut h = Harness::new(Garment::Trousers);
    h.press(FoldCommand::Confirm);
    assert!(matches!(
        result_call(&h.screen),
        Some(DrawCall::Result {
            outcome: Outcome::Fail,
            ..
        })
    ));
    assert_eq!(h.screen.last_frame(), Some((Garment::Trousers, 0)));
}

#[test]
fn trousers_one_confirm_then_side_fails() {
    let mut h = Harness::new(Garment::Trousers);
    h.press(FoldCommand::Left);
    h.press(FoldCommand::Confirm);
    h.press(FoldCommand::Right);
    assert!(matches!(
        result_call(&h.screen),
        Some(DrawCall::Result {
            outcome: Outcome::Fail,
            ..
        })
    ));
}

// ── Lockout and reset ─────────────────────────────────────────

#[test]
fn input_during_result_is_dropped() {
    let mut h = Harness::new(Garment::Shirt);
    h.press(FoldCommand::Confirm);
    let drawn = h.screen.calls.len();

    h.press(FoldCommand::Left);
    h.press(FoldCommand::Right);
    h.press(FoldCommand::Confirm);

    assert_eq!(h.screen.calls.len(), drawn, "nothing drawn while locked");
    assert_eq!(h.sink.dropped_inputs(), 3);
    assert_eq!(h.session.stats().played, 1);
}

#[test]
fn result_stays_up_for_display_delay_then_round_resets() {
    let mut h = Harness::new(Garment::Shirt);
    h.press(FoldCommand::Right);
    h.press(FoldCommand::Right);
    assert!(h.screen.result_visible());

    for _ in 0..9 {
        h.advance(111);
    }
    assert!(h.session.is_locked(), "999ms: still showing the result");
    assert!(h.screen.result_visible());

    h.advance(1);
    assert!(!h.session.is_locked());
    assert!(!h.screen.result_visible());
    assert_eq!(h.screen.last_instruction(), Some(INITIAL_INSTRUCTION));

    let round = h.session.engine().round();
    assert_eq!(round.round(), 2);
    assert!(!round.left_done() && !round.right_done());
    assert_eq!(round.fold_path(), None);
    assert_eq!(h.screen.last_frame(), Some((round.garment(), 0)));
    assert!(h.screen.calls.contains(&DrawCall::Garment {
        garment: round.garment(),
        tint: h.session.tint(),
    }));
    assert!(matches!(
        h.sink.events.last(),
        Some(GameEvent::RoundStarted { round: 2, .. })
    ));
}

#[test]
fn new_round_accepts_input_again() {
    let mut h = Harness::new(Garment::Trousers);
    h.press(FoldCommand::Confirm);
    h.advance(1000);

    let garment = h.session.engine().round().garment();
    h.press(FoldCommand::Left);
    let expected_frame = match garment {
        Garment::Shirt => 2,
        Garment::Trousers => 1,
    };
    assert_eq!(h.screen.last_frame(), Some((garment, expected_frame)));
    assert_eq!(h.sink.dropped_inputs(), 0);
}

#[test]
fn stray_timer_while_playing_is_ignored() {
    let mut h = Harness::new(Garment::Shirt);
    h.press(FoldCommand::Left);
    h.queue.push(InputEvent::RoundTimerExpired);
    h.advance(0);
    assert!(h.session.engine().round().left_done());
    assert_eq!(h.session.engine().round().round(), 1);
}

#[test]
fn dropped_session_never_resets() {
    let mut h = Harness::new(Garment::Shirt);
    h.press(FoldCommand::Confirm);
    assert_eq!(h.scheduler.pending_count(), 1);

    let Harness {
        session,
        mut scheduler,
        mut queue,
        ..
    } = h;
    drop(session);

    assert_eq!(scheduler.pending_count(), 0);
    scheduler.tick(5_000, &mut queue);
    assert!(queue.is_empty());
}

#[test]
fn config_update_changes_next_result_delay() {
    let mut h = Harness::new(Garment::Shirt);
    let fast = GameConfig {
        result_display_ms: 200,
        ..Default::default()
    };
    h.session.handle_command(
        GameCommand::UpdateConfig(fast),
        &mut h.scheduler,
        &mut h.screen,
        &mut h.sink,
    );

    h.press(FoldCommand::Confirm);
    h.advance(199);
    assert!(h.session.is_locked());
    h.advance(1);
    assert!(!h.session.is_locked());
}

#[test]
fn custom_alphas_reach_the_screen() {
    let config = GameConfig {
        success_alpha: 0.25,
        fail_alpha: 0.75,
        ..Default::default()
    };
    let mut h = Harness::with_config(Garment::Trousers, config);
    h.press(FoldCommand::Left);
    h.press(FoldCommand::Left);
    assert_eq!(
        result_call(&h.screen),
        Some(DrawCall::Result {
            outcome: Outcome::Fail,
            frame: 0,
            alpha: 0.75,
        })
    );
}

#[test]
fn sessions_are_independent() {
    let mut a = Harness::new(Garment::Shirt);
    let mut b = Harness::new(Garment::Trousers);

    a.press(FoldCommand::Left);
    b.press(FoldCommand::Confirm);

    assert!(!a.session.is_locked());
    assert!(a.session.engine().round().left_done());
    assert!(b.session.is_locked());
    assert_eq!(a.sink.dropped_inputs(), 0);
}

#[test]
fn restart_clears_result_and_stale_reset() {
    let mut h = Harness::new(Garment::Shirt);
    h.press(FoldCommand::Confirm);
    assert!(h.screen.result_visible());

    h.queue.push(InputEvent::Restart);
    h.advance(0);
    assert!(!h.session.is_locked());
    assert!(!h.screen.result_visible());
    assert_eq!(h.scheduler.pending_count(), 0);
    assert_eq!(h.session.engine().round().round(), 2);

    h.advance(1_000);
    assert_eq!(h.session.engine().round().round(), 2, "cancelled reset must not fire");
    assert!(matches!(
        h.sink.events.last(),
        Some(GameEvent::RoundStarted { round: 2, .. })
    ));
}
