//! FoldGame library.
//!
//! Exposes the pure game core (fold state machines, session service,
//! scheduler, input queue) for integration testing and for any
//! presentation layer.  The crossterm terminal adapter is behind the
//! `terminal` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod fsm;
pub mod scheduler;
