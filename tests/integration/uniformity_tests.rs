//! Statistical checks on round setup.
//!
//! Plays many short rounds through a real session and checks that
//! garment and tint picks are uniform (chi-square, p = 0.001).  The RNG
//! is seeded so the outcome is reproducible.

use crate::session_tests::Harness;

use foldgame::app::events::GameEvent;
use foldgame::app::service::pick_tint;
use foldgame::config::{DEFAULT_PALETTE, GameConfig, PALETTE_SIZE};
use foldgame::fsm::{FoldCommand, Garment};
use rand::SeedableRng;
use rand::rngs::StdRng;

const ROUNDS: usize = 10_000;

/// Critical values at p = 0.001.
const CHI2_1_DOF: f64 = 10.828;
const CHI2_11_DOF: f64 = 31.264;

fn chi_square(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Fail every round immediately and let the reset timer start the next.
fn play_rounds(rounds: usize) -> Vec<GameEvent> {
    let mut h = Harness::new(Garment::Shirt);
    for _ in 0..rounds {
        h.press(FoldCommand::Confirm);
        h.advance(1_000);
    }
    let Harness { sink, .. } = h;
    sink.events
}

#[test]
fn new_round_garment_is_uniform() {
    let events = play_rounds(ROUNDS);
    let mut counts = [0usize; 2];
    for e in &events {
        if let GameEvent::RoundStarted { garment, .. } = e {
            counts[*garment as usize] += 1;
        }
    }
    assert_eq!(counts.iter().sum::<usize>(), ROUNDS);
    let chi2 = chi_square(&counts);
    assert!(chi2 < CHI2_1_DOF, "garment counts {:?}, chi2 = {}", counts, chi2);
}

#[test]
fn new_round_tint_is_uniform_over_palette() {
    let events = play_rounds(ROUNDS);
    let mut counts = [0usize; PALETTE_SIZE];
    for e in &events {
        if let GameEvent::RoundStarted { tint, .. } = e {
            let idx = DEFAULT_PALETTE
                .iter()
                .position(|c| c == tint)
                .expect("tint outside palette");
            counts[idx] += 1;
        }
    }
    let chi2 = chi_square(&counts);
    assert!(chi2 < CHI2_11_DOF, "tint counts {:?}, chi2 = {}", counts, chi2);
}

#[test]
fn pick_tint_is_uniform() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(0x7e57);
    let mut counts = [0usize; PALETTE_SIZE];
    for _ in 0..ROUNDS {
        let tint = pick_tint(&config, &mut rng);
        if let Some(idx) = DEFAULT_PALETTE.iter().position(|c| *c == tint) {
            counts[idx] += 1;
        }
    }
    assert_eq!(counts.iter().sum::<usize>(), ROUNDS);
    assert!(chi_square(&counts) < CHI2_11_DOF, "{:?}", counts);
}

#[test]
fn every_round_start_is_fully_reset() {
    let mut h = Harness::new(Garment::Trousers);
    for _ in 0..50 {
        h.press(FoldCommand::Left);
        h.press(FoldCommand::Left);
        h.advance(1_000);
        let round = h.session.engine().round();
        assert!(!round.is_locked());
        assert_eq!(round.fold_path(), None);
        assert!(!round.left_done() && !round.right_done());
        assert_eq!(h.screen.last_frame(), Some((round.garment(), 0)));
    }
    assert_eq!(h.session.stats().failures, 50);
}
