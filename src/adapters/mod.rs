//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements    | Connects to                  |
//! |---------------|---------------|------------------------------|
//! | `config_file` | ConfigPort    | JSON file on disk            |
//! | `log_sink`    | EventSink     | `log` facade                 |
//! | `sprites`     |               | text sprite sheets           |
//! | `terminal`    | Presentation  | crossterm raw-mode terminal  |
//! | `time`        |               | `std::time::Instant`         |

pub mod config_file;
pub mod log_sink;
pub mod sprites;
#[cfg(feature = "terminal")]
pub mod terminal;
pub mod time;
