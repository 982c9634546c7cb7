//! Fuzz target: `FoldEngine::handle_command` / `complete_round`
//!
//! Each input byte is either a fold command or a round reset.  The
//! engine must never panic, must ignore input while locked, and must
//! never let the phase move backwards inside a round.
//!
//! cargo fuzz run fuzz_fold_engine

#![no_main]

use foldgame::fsm::{Directive, FoldCommand, FoldEngine};
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;

fuzz_target!(|data: &[u8]| {
    let Some((&seed, script)) = data.split_first() else {
        return;
    };
    let mut rng = StdRng::seed_from_u64(u64::from(seed));
    let mut engine = FoldEngine::new(&mut rng);

    for &byte in script {
        let cmd = match byte % 4 {
            0 => FoldCommand::Left,
            1 => FoldCommand::Right,
            2 => FoldCommand::Confirm,
            _ => {
                let was_locked = engine.is_locked();
                let reset = engine.complete_round(&mut rng);
                assert_eq!(reset.is_some(), was_locked);
                if reset.is_some() {
                    assert_eq!(engine.round().phase().progress(), 0);
                }
                continue;
            }
        };

        let locked = engine.is_locked();
        let before = engine.round().phase();
        let directive = engine.handle_command(cmd);

        if locked {
            assert!(directive.is_none());
            assert_eq!(engine.round().phase(), before);
            continue;
        }

        let after = engine.round().phase();
        assert_eq!(before.garment(), after.garment());
        assert!(after.progress() >= before.progress());
        match directive {
            Some(Directive::ShowFrame { phase, .. }) => {
                assert_eq!(phase, after);
                assert!(!engine.is_locked());
            }
            Some(Directive::ShowResult(_)) => assert!(engine.is_locked()),
            other => panic!("unexpected directive {:?}", other),
        }
    }
});
