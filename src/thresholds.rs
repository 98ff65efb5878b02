//! Per-axis dead zone and raw-to-position normalization.

use crate::direction::AxisFlag;

/// Most negative normalized position (full left / full down).
pub const POSITION_MIN: i32 = -100;

/// Most positive normalized position (full right / full up).
pub const POSITION_MAX: i32 = 100;

/// Center dead zone for one axis, in raw converter units.
///
/// Raw readings strictly above `high` are deflected positively, readings
/// strictly below `low` negatively, everything else counts as centered.
///
/// `low <= high` is expected but not enforced here. An inverted pair is an
/// accepted degenerate configuration: every reading ends up deflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// Lower edge of the dead zone.
    pub low: i32,
    /// Upper edge of the dead zone.
    pub high: i32,
}

/// Result of classifying one raw axis sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisReading {
    /// Which side of the dead zone the sample fell on.
    pub flag: AxisFlag,
    /// Normalized position in `[POSITION_MIN, POSITION_MAX]`, 0 when centered.
    pub position: i32,
}

impl Thresholds {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Dead zone of `center ± tolerance`, saturating at the `i32` limits.
    pub const fn around_center(center: i32, tolerance: i32) -> Self {
        Self {
            low: center.saturating_sub(tolerance),
            high: center.saturating_add(tolerance),
        }
    }

    /// Returns `true` if `low <= high`.
    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }

    /// Classify one raw sample against this dead zone.
    ///
    /// Above `high` the sample is mapped linearly from
    /// `[high, high + low]` onto `[0, 100]` and clamped. The upper input
    /// bound assumes the converter range is roughly symmetric around the
    /// dead zone; with the default 10-bit thresholds full deflection lands
    /// near 1023. Below `low` the sample is mapped from `[0, low]` onto
    /// `[-100, 0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use joystick_driver::{AxisFlag, Thresholds};
    ///
    /// let t = Thresholds::new(510, 530);
    /// let r = t.classify(600);
    /// assert_eq!(r.flag, AxisFlag::Positive);
    /// assert_eq!(r.position, 13);
    ///
    /// assert_eq!(t.classify(520).position, 0);
    /// ```
    pub fn classify(&self, raw: u16) -> AxisReading {
        let raw = i32::from(raw);

        if raw > self.high {
            // Input span is (high + low) - high, i.e. `low`. A negative span
            // yields a negative value that the clamp pulls up to 0.
            let position = if self.low == 0 {
                POSITION_MAX
            } else {
                let high = i64::from(self.high);
                map_range(raw.into(), high, high + i64::from(self.low), 0, POSITION_MAX)
                    .clamp(0, POSITION_MAX)
            };
            AxisReading {
                flag: AxisFlag::Positive,
                position,
            }
        } else if raw < self.low {
            // raw >= 0 here, so low >= 1 and the span is never zero.
            AxisReading {
                flag: AxisFlag::Negative,
                position: map_range(raw.into(), 0, self.low.into(), POSITION_MIN, 0),
            }
        } else {
            AxisReading {
                flag: AxisFlag::Centered,
                position: 0,
            }
        }
    }
}

/// Integer linear re-mapping with truncating division.
///
/// Inputs are widened to `i64` so threshold sums cannot overflow. Returns
/// `out_min` if the input span is empty.
pub(crate) fn map_range(
    value: i64,
    in_min: i64,
    in_max: i64,
    out_min: i32,
    out_max: i32,
) -> i32 {
    let in_span = in_max - in_min;
    if in_span == 0 {
        return out_min;
    }
    let scaled = (value - in_min) * (i64::from(out_max) - i64::from(out_min)) / in_span
        + i64::from(out_min);
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Thresholds = Thresholds::new(510, 530);
    const Y: Thresholds = Thresholds::new(510, 540);

    // ── map_range ────────────────────────────────────────────────────

    #[test]
    fn map_range_truncates_toward_zero() {
        assert_eq!(map_range(600, 530, 1040, 0, 100), 13);
        assert_eq!(map_range(400, 0, 510, -100, 0), -22);
        assert_eq!(map_range(0, 0, 510, -100, 0), -100);
    }

    #[test]
    fn map_range_empty_span_returns_out_min() {
        assert_eq!(map_range(7, 5, 5, -3, 9), -3);
    }

    // ── Dead zone ────────────────────────────────────────────────────

    #[test]
    fn inside_dead_zone_is_centered() {
        for raw in 510..=530u16 {
            let r = X.classify(raw);
            assert_eq!(r.flag, AxisFlag::Centered);
            assert_eq!(r.position, 0);
        }
    }

    #[test]
    fn boundaries_are_inclusive_of_dead_zone() {
        assert_eq!(Y.classify(510).flag, AxisFlag::Centered);
        assert_eq!(Y.classify(540).flag, AxisFlag::Centered);
        assert_eq!(Y.classify(509).flag, AxisFlag::Negative);
        assert_eq!(Y.classify(541).flag, AxisFlag::Positive);
    }

    // ── Positive branch ──────────────────────────────────────────────

    #[test]
    fn positive_reference_scenario() {
        let r = X.classify(600);
        assert_eq!(r.flag, AxisFlag::Positive);
        assert_eq!(r.position, 13);
    }

    #[test]
    fn positive_branch_is_clamped_at_max() {
        // high + low = 1040 maps to exactly 100; beyond it clamps.
        assert_eq!(X.classify(1040).position, POSITION_MAX);
        assert_eq!(X.classify(1023).position, 96);
        assert_eq!(X.classify(u16::MAX).position, POSITION_MAX);
    }

    #[test]
    fn positive_branch_is_monotonic() {
        let mut last = 0;
        for raw in 531..=1100u16 {
            let p = X.classify(raw).position;
            assert!(p >= last, "raw {} went from {} to {}", raw, last, p);
            assert!((0..=POSITION_MAX).contains(&p));
            last = p;
        }
        assert_eq!(last, POSITION_MAX);
        // Every step of 6 raw units (> 510 / 100) moves the position.
        assert!(X.classify(531 + 6).position > X.classify(531).position);
    }

    #[test]
    fn negative_low_threshold_clamps_to_zero() {
        // Span (high + low) - high is negative, so the mapped value is
        // negative and clamps to 0.
        let t = Thresholds::new(-5, 5);
        let r = t.classify(6);
        assert_eq!(r.flag, AxisFlag::Positive);
        assert_eq!(r.position, 0);
        assert_eq!(t.classify(1023).position, 0);
    }

    #[test]
    fn extreme_thresholds_do_not_overflow() {
        // Inverted band with high + low beyond i32::MAX.
        let t = Thresholds::new(i32::MAX, 100);
        let r = t.classify(200);
        assert_eq!(r.flag, AxisFlag::Positive);
        // map(200, 100, 100 + i32::MAX, 0, 100) truncates to 0.
        assert_eq!(r.position, 0);

        let t = Thresholds::new(i32::MIN, i32::MAX);
        assert_eq!(t.classify(u16::MAX).flag, AxisFlag::Centered);
    }

    #[test]
    fn around_center_saturates() {
        assert_eq!(
            Thresholds::around_center(1000, i32::MAX),
            Thresholds::new(1000 - i32::MAX, i32::MAX)
        );
        assert_eq!(
            Thresholds::around_center(-1000, i32::MAX),
            Thresholds::new(i32::MIN, i32::MAX - 1000)
        );
    }

    #[test]
    fn zero_low_threshold_saturates_instead_of_dividing_by_zero() {
        let t = Thresholds::new(0, 10);
        let r = t.classify(11);
        assert_eq!(r.flag, AxisFlag::Positive);
        assert_eq!(r.position, POSITION_MAX);
    }

    // ── Negative branch ──────────────────────────────────────────────

    #[test]
    fn negative_branch_reaches_min_at_zero() {
        let r = X.classify(0);
        assert_eq!(r.flag, AxisFlag::Negative);
        assert_eq!(r.position, POSITION_MIN);
    }

    #[test]
    fn negative_branch_is_monotonic() {
        let mut last = 0;
        for raw in (0..510u16).rev() {
            let p = X.classify(raw).position;
            assert!(p <= last, "raw {} went from {} to {}", raw, last, p);
            assert!((POSITION_MIN..=0).contains(&p));
            last = p;
        }
        assert_eq!(last, POSITION_MIN);
    }

    #[test]
    fn negative_reference_scenario() {
        let r = X.classify(400);
        assert_eq!(r.flag, AxisFlag::Negative);
        assert_eq!(r.position, -22);
    }

    // ── Degenerate configurations ────────────────────────────────────

    #[test]
    fn inverted_thresholds_never_center() {
        let t = Thresholds::new(600, 400);
        assert!(!t.is_ordered());
        for raw in [0u16, 399, 400, 500, 600, 601, 1023] {
            assert_ne!(t.classify(raw).flag, AxisFlag::Centered, "raw {}", raw);
        }
    }

    #[test]
    fn around_center_builds_symmetric_band() {
        let t = Thresholds::around_center(512, 5);
        assert_eq!(t, Thresholds::new(507, 517));
        assert!(t.is_ordered());
    }
}
