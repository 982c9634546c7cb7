//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against recording adapters.  No terminal is required.

mod mock_screen;
mod session_tests;
mod uniformity_tests;
