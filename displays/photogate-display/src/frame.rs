//! Frame buffer and digit painting

use smart_leds::RGB8;

use crate::glyph::segments_for;
use crate::layout::{segment_range, NUM_LEDS, SEGMENTS_PER_DIGIT, SLOT_COUNT};

/// Normal readout color
const GREEN: RGB8 = RGB8::new(0, 160, 0);

/// Alert readout color (peer busy / refused)
const RED: RGB8 = RGB8::new(160, 0, 0);

const OFF: RGB8 = RGB8::new(0, 0, 0);

/// Display color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Local readouts and accepted status reports
    #[default]
    Normal,
    /// Busy notices from the peer
    Alert,
}

impl Mode {
    fn color(self) -> RGB8 {
        match self {
            Mode::Normal => GREEN,
            Mode::Alert => RED,
        }
    }
}

/// One full frame of LED states
///
/// The firmware pushes a frame out in a single DMA write, so painting here
/// is atomic as far as the strip is concerned.
pub struct DisplayFrame {
    leds: [RGB8; NUM_LEDS],
}

impl Default for DisplayFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayFrame {
    /// A dark frame
    pub const fn new() -> Self {
        Self {
            leds: [OFF; NUM_LEDS],
        }
    }

    /// Raw LED states, ready for the strip driver
    pub fn leds(&self) -> &[RGB8; NUM_LEDS] {
        &self.leds
    }

    /// Paint one digit slot: clear all seven segments, then light the
    /// glyph's active ones. Out-of-range digits leave the slot blank.
    pub fn paint_digit(&mut self, slot: usize, digit: i8, mode: Mode) {
        if slot >= SLOT_COUNT {
            return;
        }

        for segment in 0..SEGMENTS_PER_DIGIT {
            self.leds[segment_range(slot, segment)].fill(OFF);
        }

        let glyph = segments_for(digit);
        let color = mode.color();
        for segment in 0..SEGMENTS_PER_DIGIT {
            if glyph & (1 << segment) != 0 {
                self.leds[segment_range(slot, segment)].fill(color);
            }
        }
    }

    /// Paint all six time digits, most significant first
    pub fn paint_time(&mut self, digits: [u8; 6], mode: Mode) {
        for (slot, digit) in digits.iter().enumerate() {
            self.paint_digit(slot, *digit as i8, mode);
        }
    }

    /// Blank every slot
    pub fn clear(&mut self) {
        self.leds.fill(OFF);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_segments(frame: &DisplayFrame, slot: usize) -> u8 {
        let mut mask = 0;
        for segment in 0..SEGMENTS_PER_DIGIT {
            let range = segment_range(slot, segment);
            if frame.leds()[range].iter().any(|led| *led != OFF) {
                mask |= 1 << segment;
            }
        }
        mask
    }

    #[test]
    fn test_digit_eight_lights_every_segment() {
        let mut frame = DisplayFrame::new();
        frame.paint_digit(0, 8, Mode::Normal);

        assert_eq!(lit_segments(&frame, 0), 0b111_1111);
        // Whole segments light, not partial runs
        for led in &frame.leds()[segment_range(0, 0)] {
            assert_eq!(*led, RGB8::new(0, 160, 0));
        }
    }

    #[test]
    fn test_repaint_clears_stale_segments() {
        let mut frame = DisplayFrame::new();
        // 8 lights all segments; 1 must leave only b and c
        frame.paint_digit(2, 8, Mode::Normal);
        frame.paint_digit(2, 1, Mode::Normal);

        assert_eq!(lit_segments(&frame, 2), crate::glyph::segments_for(1));
    }

    #[test]
    fn test_out_of_range_digit_blanks_slot() {
        let mut frame = DisplayFrame::new();
        frame.paint_digit(1, 8, Mode::Normal);
        frame.paint_digit(1, -1, Mode::Normal);

        assert_eq!(lit_segments(&frame, 1), 0);
    }

    #[test]
    fn test_alert_mode_uses_alert_color() {
        let mut frame = DisplayFrame::new();
        frame.paint_digit(0, 1, Mode::Alert);

        let range = segment_range(0, 1); // segment b is lit for 1
        for led in &frame.leds()[range] {
            assert_eq!(*led, RGB8::new(160, 0, 0));
        }
    }

    #[test]
    fn test_paint_does_not_leak_into_neighbor_slots() {
        let mut frame = DisplayFrame::new();
        frame.paint_digit(3, 8, Mode::Normal);

        for slot in [2usize, 4] {
            assert_eq!(lit_segments(&frame, slot), 0, "slot {}", slot);
        }
    }

    #[test]
    fn test_paint_time_covers_all_slots() {
        let mut frame = DisplayFrame::new();
        frame.paint_time([0, 0, 0, 3, 5, 0], Mode::Normal);

        // 00:03:50 - every slot shows a digit (0 is six lit segments)
        for slot in 0..SLOT_COUNT {
            assert_ne!(lit_segments(&frame, slot), 0, "slot {}", slot);
        }
        // Digit 3 in slot 3
        assert_eq!(lit_segments(&frame, 3), crate::glyph::segments_for(3));
    }

    #[test]
    fn test_ignores_bad_slot() {
        let mut frame = DisplayFrame::new();
        frame.paint_digit(SLOT_COUNT, 8, Mode::Normal);
        assert!(frame.leds().iter().all(|led| *led == OFF));
    }
}
