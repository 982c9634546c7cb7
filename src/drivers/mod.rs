//! Input drivers.

pub mod keys;
