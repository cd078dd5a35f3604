//! Physical strip layout
//!
//! The strip is wired digit by digit, segment by segment: segment `s` of
//! slot `d` occupies the contiguous LED range starting at `(d*7 + s) * 8`.

use core::ops::Range;

/// Number of digit slots, MM:SS:CC
pub const SLOT_COUNT: usize = 6;

/// Segments per digit
pub const SEGMENTS_PER_DIGIT: usize = 7;

/// LEDs per segment
pub const SEGMENT_LEN: usize = 8;

/// Total LEDs on the strip
pub const NUM_LEDS: usize = SLOT_COUNT * SEGMENTS_PER_DIGIT * SEGMENT_LEN;

/// LED index range of one segment of one slot
///
/// `slot` must be below [`SLOT_COUNT`] and `segment` below
/// [`SEGMENTS_PER_DIGIT`]; the layout is fixed at build time so callers
/// index with constants or loop bounds.
pub const fn segment_range(slot: usize, segment: usize) -> Range<usize> {
    let start = (slot * SEGMENTS_PER_DIGIT + segment) * SEGMENT_LEN;
    start..start + SEGMENT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_size() {
        assert_eq!(NUM_LEDS, 336);
    }

    #[test]
    fn test_known_segment_bases() {
        // Bases of the as-built wiring table
        assert_eq!(segment_range(0, 0).start, 0);
        assert_eq!(segment_range(0, 6).start, 48);
        assert_eq!(segment_range(1, 0).start, 56);
        assert_eq!(segment_range(3, 3).start, 192);
        assert_eq!(segment_range(5, 6).start, 328);
    }

    #[test]
    fn test_ranges_tile_the_strip() {
        let mut next = 0;
        for slot in 0..SLOT_COUNT {
            for segment in 0..SEGMENTS_PER_DIGIT {
                let range = segment_range(slot, segment);
                assert_eq!(range.start, next);
                assert_eq!(range.len(), SEGMENT_LEN);
                next = range.end;
            }
        }
        assert_eq!(next, NUM_LEDS);
    }
}
