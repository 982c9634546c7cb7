//! Crossterm terminal adapter.
//!
//! - [`TerminalSession`] puts the terminal in raw mode on the alternate
//!   screen and restores it on drop.
//! - [`TerminalScreen`] implements [`Presentation`] by keeping a
//!   [`ScreenState`] and redrawing it when it changes.
//! - [`TerminalInput`] turns key events into rising-edge fold commands.
//!
//! Terminals that support the kitty keyboard protocol report key
//! releases and tag auto-repeat, so a held key fires once.  Other
//! terminals deliver OS auto-repeat as ordinary presses; there a
//! release is synthesized right after every press and a held key
//! fires on every repeat (holding LEFT on a shirt fails the round).

use std::io::{Stdout, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self as term, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use log::{debug, info};

use crate::adapters::sprites::{SPRITE_HEIGHT, garment_sprite, result_sprite};
use crate::app::events::RoundStats;
use crate::app::ports::Presentation;
use crate::drivers::keys::{KeyEdgeDetector, KeySnapshot};
use crate::error::Result;
use crate::events::{InputEvent, InputQueue};
use crate::fsm::{FoldCommand, Garment, HEADLINE, Outcome};

// ───────────────────────────────────────────────────────────────
// Terminal lifecycle
// ───────────────────────────────────────────────────────────────

/// RAII guard for raw mode + alternate screen.
pub struct TerminalSession {
    reports_releases: bool,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        term::enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = term::disable_raw_mode();
            return Err(err.into());
        }

        let reports_releases = matches!(term::supports_keyboard_enhancement(), Ok(true));
        if reports_releases {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        info!("Terminal ready (key releases reported: {})", reports_releases);

        Ok(Self { reports_releases })
    }

    /// Whether the terminal sends key release events.
    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.reports_releases {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, cursor::Show, LeaveAlternateScreen);
        let _ = term::disable_raw_mode();
    }
}

// ───────────────────────────────────────────────────────────────
// Input
// ───────────────────────────────────────────────────────────────

fn command_for(code: KeyCode) -> Option<FoldCommand> {
    match code {
        KeyCode::Left => Some(FoldCommand::Left),
        KeyCode::Right => Some(FoldCommand::Right),
        KeyCode::Up => Some(FoldCommand::Confirm),
        _ => None,
    }
}

fn set_held(snap: &mut KeySnapshot, cmd: FoldCommand, held: bool) {
    match cmd {
        FoldCommand::Left => snap.left = held,
        FoldCommand::Right => snap.right = held,
        FoldCommand::Confirm => snap.confirm = held,
    }
}

/// Key event reader feeding the edge detector.
pub struct TerminalInput {
    keys: KeyEdgeDetector,
    held: KeySnapshot,
    reports_releases: bool,
}

impl TerminalInput {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            keys: KeyEdgeDetector::new(),
            held: KeySnapshot::default(),
            reports_releases,
        }
    }

    /// Read key events for up to `budget`, queueing one command per
    /// rising edge.  Returns `true` when the player asked to quit.
    pub fn poll_frame(&mut self, budget: Duration, queue: &mut InputQueue) -> Result<bool> {
        let deadline = Instant::now() + budget;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(false);
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.on_key(key, queue) {
                        return Ok(true);
                    }
                }
                Event::FocusLost => {
                    self.held = KeySnapshot::default();
                    self.keys.reset();
                }
                _ => {}
            }
            if remaining.is_zero() {
                return Ok(false);
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent, queue: &mut InputQueue) -> bool {
        if key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        {
            return true;
        }
        if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('r') {
            queue.push(InputEvent::Restart);
            return false;
        }
        let Some(cmd) = command_for(key.code) else {
            return false;
        };

        match key.kind {
            KeyEventKind::Press => {
                set_held(&mut self.held, cmd, true);
                if let Some(edge) = self.keys.update(self.held) {
                    queue.push(InputEvent::Command(edge));
                }
                if !self.reports_releases {
                    set_held(&mut self.held, cmd, false);
                    self.keys.update(self.held);
                }
            }
            KeyEventKind::Release => {
                set_held(&mut self.held, cmd, false);
                self.keys.update(self.held);
            }
            KeyEventKind::Repeat => {
                debug!("Ignoring auto-repeat of {:?}", cmd);
            }
        }
        false
    }
}

// ───────────────────────────────────────────────────────────────
// Screen
// ───────────────────────────────────────────────────────────────

/// What the screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub garment: Garment,
    pub tint: u32,
    pub frame: u8,
    pub instruction: String,
    /// Visible result sprite: outcome, frame, alpha.
    pub result: Option<(Outcome, u8, f32)>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            garment: Garment::Shirt,
            tint: 0x00ff_ffff,
            frame: 0,
            instruction: String::new(),
            result: None,
        }
    }
}

fn rgb(tint: u32) -> Color {
    Color::Rgb {
        r: (tint >> 16) as u8,
        g: (tint >> 8) as u8,
        b: tint as u8,
    }
}

/// Presentation that draws the game onto stdout.
pub struct TerminalScreen {
    out: Stdout,
    state: ScreenState,
    dirty: bool,
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            out: stdout(),
            state: ScreenState::default(),
            dirty: true,
        }
    }

    /// Redraw if anything changed since the last call.
    pub fn draw(&mut self, stats: &RoundStats) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;

        let s = &self.state;
        queue!(
            self.out,
            Clear(ClearType::All),
            cursor::MoveTo(2, 1),
            SetAttribute(Attribute::Bold),
            Print(HEADLINE),
            SetAttribute(Attribute::Reset),
        )?;

        if let Some(sprite) = garment_sprite(s.garment, s.frame) {
            queue!(self.out, SetForegroundColor(rgb(s.tint)))?;
            for (row, line) in sprite.iter().enumerate() {
                queue!(self.out, cursor::MoveTo(8, 3 + row as u16), Print(line))?;
            }
            queue!(self.out, ResetColor)?;
        }

        let below = 4 + SPRITE_HEIGHT as u16;
        if let Some((outcome, frame, alpha)) = s.result {
            if let Some(banner) = result_sprite(frame) {
                let colour = match outcome {
                    Outcome::Success => Color::Green,
                    Outcome::Fail => Color::Red,
                };
                let weight = if alpha < 1.0 {
                    Attribute::Dim
                } else {
                    Attribute::Bold
                };
                queue!(
                    self.out,
                    cursor::MoveTo(8, below),
                    SetForegroundColor(colour),
                    SetAttribute(weight),
                    Print(banner),
                    SetAttribute(Attribute::Reset),
                    ResetColor,
                )?;
            }
        }

        queue!(
            self.out,
            cursor::MoveTo(2, below + 2),
            Print(&s.instruction),
            cursor::MoveTo(2, below + 4),
            Print(format!(
                "rounds {}  ok {}  fail {}  streak {} (best {})",
                stats.played,
                stats.successes,
                stats.failures,
                stats.current_streak,
                stats.best_streak
            )),
            cursor::MoveTo(2, below + 5),
            SetAttribute(Attribute::Dim),
            Print("arrows: fold / confirm   r: new garment   q: quit"),
            SetAttribute(Attribute::Reset),
        )?;
        self.out.flush()?;
        Ok(())
    }
}

impl Presentation for TerminalScreen {
    fn show_garment(&mut self, garment: Garment, tint: u32) {
        self.state.garment = garment;
        self.state.tint = tint;
        self.dirty = true;
    }

    fn show_frame(&mut self, garment: Garment, frame: u8) {
        if garment == self.state.garment {
            self.state.frame = frame;
            self.dirty = true;
        }
    }

    fn set_instruction(&mut self, text: &str) {
        text.clone_into(&mut self.state.instruction);
        self.dirty = true;
    }

    fn show_result(&mut self, outcome: Outcome, frame: u8, alpha: f32) {
        self.state.result = Some((outcome, frame, alpha));
        self.dirty = true;
    }

    fn hide_result(&mut self) {
        self.state.result = None;
        self.dirty = true;
    }
}
