//! Zone classification — pure banding of a day's actual value against a goal.
//!
//! The tolerance percentage opens a grace band on the wrong side of the
//! target: an `under` goal of 2000 kcal with 10% tolerance accepts up to
//! 2200 kcal as `near`. The band edge is rounded to one decimal before
//! comparison, matching the precision of stored totals.

use crate::tracker::types::{round1, Direction, Zone};

/// Outcome of classifying an actual value against a goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub zone: Zone,
    /// The grace-band edge: the furthest value on the wrong side of the
    /// target that still counts as `near`.
    pub band: f64,
}

/// Classify an actual value against a target, direction, and tolerance band.
///
/// With `tolerance == 0` the band equals the target, `near` is unreachable,
/// and classification degenerates to strict met/missed.
pub fn classify(actual: f64, target: f64, direction: Direction, tolerance: f64) -> Classification {
    match direction {
        Direction::Under => {
            let band = round1(target * (1.0 + tolerance / 100.0));
            let zone = if actual <= target {
                Zone::Met
            } else if actual <= band {
                Zone::Near
            } else {
                Zone::Over
            };
            Classification { zone, band }
        }
        Direction::Over => {
            let band = round1(target * (1.0 - tolerance / 100.0));
            let zone = if actual >= target {
                Zone::Met
            } else if actual >= band {
                Zone::Near
            } else {
                Zone::Under
            };
            Classification { zone, band }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_goal_with_tolerance_bands() {
        // 2000 kcal under-goal, 10% tolerance → band 2200
        let c = classify(2100.0, 2000.0, Direction::Under, 10.0);
        assert_eq!(c.band, 2200.0);
        assert_eq!(c.zone, Zone::Near);

        assert_eq!(classify(2000.0, 2000.0, Direction::Under, 10.0).zone, Zone::Met);
        assert_eq!(classify(1500.0, 2000.0, Direction::Under, 10.0).zone, Zone::Met);
        assert_eq!(classify(2200.0, 2000.0, Direction::Under, 10.0).zone, Zone::Near);
        assert_eq!(classify(2200.1, 2000.0, Direction::Under, 10.0).zone, Zone::Over);
    }

    #[test]
    fn over_goal_with_tolerance_bands() {
        // 120g protein over-goal, 15% tolerance → band 102
        let c = classify(90.0, 120.0, Direction::Over, 15.0);
        assert_eq!(c.band, 102.0);
        assert_eq!(c.zone, Zone::Under);

        assert_eq!(classify(120.0, 120.0, Direction::Over, 15.0).zone, Zone::Met);
        assert_eq!(classify(130.0, 120.0, Direction::Over, 15.0).zone, Zone::Met);
        assert_eq!(classify(102.0, 120.0, Direction::Over, 15.0).zone, Zone::Near);
        assert_eq!(classify(110.0, 120.0, Direction::Over, 15.0).zone, Zone::Near);
        assert_eq!(classify(101.9, 120.0, Direction::Over, 15.0).zone, Zone::Under);
    }

    #[test]
    fn zero_tolerance_is_strict_met_or_missed() {
        // near must never occur when tolerance is 0
        for actual in [0.0, 999.9, 1000.0, 1000.1, 2500.0] {
            let c = classify(actual, 1000.0, Direction::Under, 0.0);
            assert_eq!(c.band, 1000.0);
            if actual <= 1000.0 {
                assert_eq!(c.zone, Zone::Met);
            } else {
                assert_eq!(c.zone, Zone::Over);
            }

            let c = classify(actual, 1000.0, Direction::Over, 0.0);
            assert_eq!(c.band, 1000.0);
            if actual >= 1000.0 {
                assert_eq!(c.zone, Zone::Met);
            } else {
                assert_eq!(c.zone, Zone::Under);
            }
        }
    }

    #[test]
    fn band_is_rounded_to_one_decimal() {
        // 1600 * 1.2 = 1920 exactly; 333.3 * 1.07 = 356.631 → 356.6
        assert_eq!(classify(0.0, 1600.0, Direction::Under, 20.0).band, 1920.0);
        assert_eq!(classify(0.0, 333.3, Direction::Under, 7.0).band, 356.6);
        // value exactly at the rounded band is still near
        assert_eq!(classify(356.6, 333.3, Direction::Under, 7.0).zone, Zone::Near);
    }

    #[test]
    fn zero_target_still_resolves() {
        let c = classify(0.0, 0.0, Direction::Under, 10.0);
        assert_eq!(c.band, 0.0);
        assert_eq!(c.zone, Zone::Met);

        let c = classify(5.0, 0.0, Direction::Under, 10.0);
        assert_eq!(c.zone, Zone::Over);

        let c = classify(5.0, 0.0, Direction::Over, 10.0);
        assert_eq!(c.zone, Zone::Met);
    }
}
