//! Application core: pure game logic, zero I/O.
//!
//! This module contains the session rules for FoldGame: engine
//! orchestration, result timing, round statistics and config updates.
//! All interaction with the screen, storage and clock happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without a terminal.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
