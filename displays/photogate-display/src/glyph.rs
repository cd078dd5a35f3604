//! 7-segment glyph table
//!
//! Segments follow the standard lettering:
//! ```text
//!  aaa
//! f   b
//! f   b
//!  ggg
//! e   c
//! e   c
//!  ddd
//! ```
//! Each glyph is a bitmask with bit 0 = segment a through bit 6 = segment g.

/// Segment a bit
pub const SEG_A: u8 = 1 << 0;
/// Segment b bit
pub const SEG_B: u8 = 1 << 1;
/// Segment c bit
pub const SEG_C: u8 = 1 << 2;
/// Segment d bit
pub const SEG_D: u8 = 1 << 3;
/// Segment e bit
pub const SEG_E: u8 = 1 << 4;
/// Segment f bit
pub const SEG_F: u8 = 1 << 5;
/// Segment g bit
pub const SEG_G: u8 = 1 << 6;

/// Standard 7-segment glyphs for digits 0-9
const GLYPHS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_B | SEG_C,                                         // 1
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,                 // 2
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,                 // 3
    SEG_B | SEG_C | SEG_F | SEG_G,                         // 4
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,                 // 5
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,         // 6
    SEG_A | SEG_B | SEG_C,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,         // 9
];

/// Segment bitmask for a digit
///
/// Anything outside 0-9 renders blank (all segments off), never an error.
pub fn segments_for(digit: i8) -> u8 {
    match digit {
        0..=9 => GLYPHS[digit as usize],
        _ => 0,
    }
}
