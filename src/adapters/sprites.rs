//! Text sprite sheets for the terminal screen.
//!
//! Each sheet is indexed by the frame numbers the core hands out
//! (`Phase::frame()`, `Outcome::frame()`).  Every sprite is
//! [`SPRITE_HEIGHT`] lines of [`SPRITE_WIDTH`] columns.

use crate::fsm::Garment;

pub const SPRITE_WIDTH: usize = 14;
pub const SPRITE_HEIGHT: usize = 4;

pub type Sprite = [&'static str; SPRITE_HEIGHT];

/// Shirt frames: START, LEFT_FOLD_SHOWN, RIGHT_FOLD_SHOWN, DOUBLE_FOLD,
/// COMPLETE.
const SHIRT_SHEET: [Sprite; 5] = [
    [
        " ___/\\__/\\___ ",
        "|___|    |___|",
        "    |    |    ",
        "    |____|    ",
    ],
    [
        " ___/\\__/\\    ",
        "|___|    |    ",
        "    |    |    ",
        "    |____|    ",
    ],
    [
        "    /\\__/\\___ ",
        "    |    |___|",
        "    |    |    ",
        "    |____|    ",
    ],
    [
        "    /\\__/\\    ",
        "    |    |    ",
        "    |    |    ",
        "    |____|    ",
    ],
    [
        "              ",
        "    ______    ",
        "   |______|   ",
        "              ",
    ],
];

/// Trousers frames in phase declaration order.
const TROUSERS_SHEET: [Sprite; 7] = [
    [
        "   ________   ",
        "  |   ||   |  ",
        "  |   ||   |  ",
        "  |___||___|  ",
    ],
    [
        "      _____   ",
        "     |#|   |  ",
        "     |#|   |  ",
        "     |#|___|  ",
    ],
    [
        "   _____      ",
        "  |   |#|     ",
        "  |   |#|     ",
        "  |___|#|     ",
    ],
    [
        "              ",
        "      _____   ",
        "     |#|   |  ",
        "     |#|___|  ",
    ],
    [
        "              ",
        "   _____      ",
        "  |   |#|     ",
        "  |___|#|     ",
    ],
    [
        "              ",
        "              ",
        "      _____   ",
        "     |#|___|  ",
    ],
    [
        "              ",
        "              ",
        "   _____      ",
        "  |___|#|     ",
    ],
];

/// Result frames: FAIL, SUCCESS.
const RESULT_SHEET: [&str; 2] = ["   X  FAIL    ", "   OK SUCCESS "];

/// Sprite for `garment` at `frame`, or `None` past the end of its sheet.
pub fn garment_sprite(garment: Garment, frame: u8) -> Option<&'static Sprite> {
    match garment {
        Garment::Shirt => SHIRT_SHEET.get(usize::from(frame)),
        Garment::Trousers => TROUSERS_SHEET.get(usize::from(frame)),
    }
}

/// Single-line result banner for a result frame.
pub fn result_sprite(frame: u8) -> Option<&'static str> {
    RESULT_SHEET.get(usize::from(frame)).copied()
}
