//! 7-segment LED strip rendering for the Photogate stopwatch
//!
//! The display is a single WS2812 strip wired as six 7-segment digits, eight
//! LEDs per segment. This crate maps digits to segment sets, segments to LED
//! index ranges, and paints complete frames; the physical push-out (one DMA
//! write per frame) belongs to the firmware.
//!
//! Rendering is pure: a frame is recomputed from `(digits, mode)` on every
//! call, and a slot is always cleared before its active segments are lit, so
//! no partial digit is ever observable once the frame is pushed.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod glyph;
pub mod layout;

pub use frame::{DisplayFrame, Mode};
pub use glyph::segments_for;
pub use layout::{NUM_LEDS, SEGMENTS_PER_DIGIT, SEGMENT_LEN, SLOT_COUNT};
