//! Elapsed-time to display-digit codec
//!
//! Converts a millisecond count into the minutes/seconds/centiseconds fields
//! shown on the 6-slot display and carried in status packets. Division
//! truncates (never rounds) and minutes wrap after 60: the display has six
//! slots, so the hour is dropped by design.

/// Elapsed time split into display fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeFields {
    /// Minutes, 0-59 (wraps)
    pub minutes: u8,
    /// Seconds, 0-59
    pub seconds: u8,
    /// Centiseconds, 0-99
    pub centis: u8,
}

impl TimeFields {
    /// Split a millisecond count into display fields
    pub fn from_ms(ms: u32) -> Self {
        Self {
            minutes: ((ms / 60_000) % 60) as u8,
            seconds: ((ms / 1_000) % 60) as u8,
            centis: ((ms % 1_000) / 10) as u8,
        }
    }

    /// The six display digits, most significant first: MM:SS:CC
    pub fn digits(&self) -> [u8; 6] {
        [
            self.minutes / 10,
            self.minutes % 10,
            self.seconds / 10,
            self.seconds % 10,
            self.centis / 10,
            self.centis % 10,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let fields = TimeFields::from_ms(0);
        assert_eq!(fields.digits(), [0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_three_and_a_half_seconds() {
        // 3500 ms reads 00:03:50
        let fields = TimeFields::from_ms(3500);
        assert_eq!(fields.minutes, 0);
        assert_eq!(fields.seconds, 3);
        assert_eq!(fields.centis, 50);
        assert_eq!(fields.digits(), [0, 0, 0, 3, 5, 0]);
    }

    #[test]
    fn test_truncates_never_rounds() {
        // 9 ms is under one centisecond and must read zero
        assert_eq!(TimeFields::from_ms(9).centis, 0);
        // 999 ms reads 99 centiseconds, not one second
        let fields = TimeFields::from_ms(999);
        assert_eq!(fields.seconds, 0);
        assert_eq!(fields.centis, 99);
    }

    #[test]
    fn test_field_boundaries() {
        let fields = TimeFields::from_ms(59 * 60_000 + 59_000 + 990);
        assert_eq!(fields.minutes, 59);
        assert_eq!(fields.seconds, 59);
        assert_eq!(fields.centis, 99);
        assert_eq!(fields.digits(), [5, 9, 5, 9, 9, 9]);
    }

    #[test]
    fn test_wraps_after_sixty_minutes() {
        // One hour and one second reads 00:01:00 - intentional bound,
        // the display has no hour slots
        let fields = TimeFields::from_ms(3_601_000);
        assert_eq!(fields.minutes, 0);
        assert_eq!(fields.seconds, 1);
    }

    #[test]
    fn test_digits_in_range() {
        for ms in (0..4_000_000).step_by(7_919) {
            let digits = TimeFields::from_ms(ms).digits();
            for d in digits {
                assert!(d <= 9, "digit {} out of range for {} ms", d, ms);
            }
        }
    }
}
