//! Recording presentation and event sink for integration tests.
//!
//! Records every draw call so tests can assert on the full render
//! history without a terminal.

use foldgame::app::events::GameEvent;
use foldgame::app::ports::{EventSink, Presentation};
use foldgame::fsm::{Garment, Outcome};

// ── Draw call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Garment { garment: Garment, tint: u32 },
    Frame { garment: Garment, frame: u8 },
    Instruction(String),
    Result { outcome: Outcome, frame: u8, alpha: f32 },
    HideResult,
}

// ── RecordingScreen ───────────────────────────────────────────

pub struct RecordingScreen {
    pub calls: Vec<DrawCall>,
}

#[allow(dead_code)]
impl RecordingScreen {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn last_instruction(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::Instruction(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn last_frame(&self) -> Option<(Garment, u8)> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::Frame { garment, frame } => Some((*garment, *frame)),
            _ => None,
        })
    }

    /// Whether the result sprite is currently visible.
    pub fn result_visible(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                DrawCall::Result { .. } => Some(true),
                DrawCall::HideResult => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Presentation for RecordingScreen {
    fn show_garment(&mut self, garment: Garment, tint: u32) {
        self.calls.push(DrawCall::Garment { garment, tint });
    }
    fn show_frame(&mut self, garment: Garment, frame: u8) {
        self.calls.push(DrawCall::Frame { garment, frame });
    }
    fn set_instruction(&mut self, text: &str) {
        self.calls.push(DrawCall::Instruction(text.to_string()));
    }
    fn show_result(&mut self, outcome: Outcome, frame: u8, alpha: f32) {
        self.calls.push(DrawCall::Result {
            outcome,
            frame,
            alpha,
        });
    }
    fn hide_result(&mut self) {
        self.calls.push(DrawCall::HideResult);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn dropped_inputs(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::InputDropped(_)))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, e: &GameEvent) {
        self.events.push(e.clone());
    }
}
