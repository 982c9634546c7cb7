//! Game configuration parameters
//!
//! All tunable parameters for a FoldGame session.
//! Values can be overridden from a JSON config file.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Number of tint colours a garment can be drawn in.
pub const PALETTE_SIZE: usize = 12;

/// Default garment tints (0xRRGGBB).
pub const DEFAULT_PALETTE: [u32; PALETTE_SIZE] = [
    0x00ff_6b6b, // red
    0x004e_cdc4, // teal
    0x00ff_e66d, // yellow
    0x00a8_e6cf, // mint
    0x00ff_d3b6, // peach
    0x00ff_aaa5, // pink
    0x0095_e1d3, // turquoise
    0x00f3_8181, // coral
    0x00aa_96da, // purple
    0x00fc_bad3, // light pink
    0x00a8_d8ea, // light blue
    0x00ff_ccb6, // light orange
];

/// Core game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // --- Round timing ---
    /// How long the result sprite stays up before the next round (ms)
    pub result_display_ms: u32,

    // --- Result sprite ---
    /// Opacity of the SUCCESS sprite (0.0-1.0)
    pub success_alpha: f32,
    /// Opacity of the FAIL sprite (0.0-1.0)
    pub fail_alpha: f32,

    // --- Garment tint ---
    /// Tints picked uniformly at the start of each round
    pub palette: [u32; PALETTE_SIZE],

    // --- Presentation loop ---
    /// Input poll / redraw period (ms)
    pub frame_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            result_display_ms: 1000,

            success_alpha: 0.5,
            fail_alpha: 1.0,

            palette: DEFAULT_PALETTE,

            frame_interval_ms: 16, // ~60 Hz
        }
    }
}

impl GameConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.result_display_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "result_display_ms must be > 0",
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "frame_interval_ms must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.success_alpha) {
            return Err(ConfigError::ValidationFailed(
                "success_alpha must be within 0.0..=1.0",
            ));
        }
        if !(0.0..=1.0).contains(&self.fail_alpha) {
            return Err(ConfigError::ValidationFailed(
                "fail_alpha must be within 0.0..=1.0",
            ));
        }
        if self.palette.iter().any(|c| *c > 0x00ff_ffff) {
            return Err(ConfigError::ValidationFailed(
                "palette entries must be 0xRRGGBB",
            ));
        }
        Ok(())
    }
}
