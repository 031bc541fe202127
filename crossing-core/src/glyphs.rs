//! Digit glyphs for the 5x5 countdown matrix.
//!
//! The masks are listed in the grid's raster order, one cell per entry,
//! matching the serial order the matrix driver shifts pixels out in. The
//! shapes account for the board's wiring, so they are kept as flat tables
//! rather than being generated.

/// Number of cells in the countdown grid. Every refresh writes exactly
/// this many pixels.
pub const GRID_PIXELS: usize = 25;

/// Index of the all-off sentinel glyph. The countdown's first second shows
/// it (there is no two-digit glyph for 10) and it doubles as the blank
/// frame.
pub const BLANK_GLYPH: u8 = 10;

/// Look up the mask for a countdown value. Values above 9 map to the
/// all-off sentinel; the countdown itself never leaves 0..=10 because it
/// is reset at phase entry and decremented once per second.
pub fn glyph(countdown: u8) -> &'static [u8; GRID_PIXELS] {
    &DIGITS[countdown.min(BLANK_GLYPH) as usize]
}

#[rustfmt::skip]
const DIGITS: [[u8; GRID_PIXELS]; 11] = [
    [0, 1, 1, 1, 0,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1,
     0, 1, 1, 1, 0], // 0
    [0, 0, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 0, 1, 0, 1,
     0, 1, 1, 0, 0,
     0, 0, 1, 0, 0], // 1
    [1, 1, 1, 1, 1,
     0, 1, 0, 0, 0,
     0, 1, 0, 0, 0,
     1, 0, 0, 0, 1,
     0, 1, 1, 1, 0], // 2
    [1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     0, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1], // 3
    [1, 0, 0, 0, 0,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1], // 4
    [1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 1], // 5
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 1], // 6
    [0, 0, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 0, 1, 1, 1], // 7
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1], // 8
    [1, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 1,
     1, 0, 0, 0, 1,
     1, 1, 1, 1, 1], // 9
    [0, 0, 0, 0, 0,
     0, 0, 0, 0, 0,
     0, 0, 0, 0, 0,
     0, 0, 0, 0, 0,
     0, 0, 0, 0, 0], // all off
];
