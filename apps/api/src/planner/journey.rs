//! Score journey: where the resume is, where it could be after the critical
//! fixes, and where it should aim, next to the cohort average.

use serde::Serialize;

/// Scores at or above this aim for a perfect 100 instead of 90.
const HIGH_SCORE_THRESHOLD: i32 = 85;
const STANDARD_TARGET: i32 = 90;
const HIGH_TARGET: i32 = 100;
/// Share of the remaining gap closed by the critical fixes alone.
const CRITICAL_GAP_SHARE: f64 = 0.55;

const AVERAGE_AXIS_PADDING: i32 = 10;
const CURRENT_AXIS_PADDING: i32 = 5;
const CURRENT_MARKER_BOUNDS: (f64, f64) = (5.0, 90.0);
const AVERAGE_MARKER_BOUNDS: (f64, f64) = (2.0, 85.0);

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JourneyMilestones {
    pub average: i32,
    pub current: i32,
    pub after_critical: i32,
    pub target: i32,
}

/// Marker positions as percentages (0–100) along the journey axis.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPositions {
    pub average: f64,
    pub current: f64,
    pub after_critical: f64,
    pub target: f64,
}

/// Computes the four milestones. Inputs are expected to be validated 0–100.
pub fn journey_milestones(current: i32, average: i32) -> JourneyMilestones {
    let target = if current >= HIGH_SCORE_THRESHOLD {
        HIGH_TARGET
    } else {
        STANDARD_TARGET
    };
    // f64::round rounds half away from zero
    let projected = (current as f64 + (target - current) as f64 * CRITICAL_GAP_SHARE).round();
    let after_critical = (projected as i32).min(target);

    JourneyMilestones {
        average,
        current,
        after_critical,
        target,
    }
}

impl JourneyMilestones {
    /// Lower end of the journey axis. Always below `target` for scores in 0–100.
    pub fn axis_min(&self) -> i32 {
        (self.average - AVERAGE_AXIS_PADDING).min(self.current - CURRENT_AXIS_PADDING)
    }

    pub fn positions(&self) -> JourneyPositions {
        let min = self.axis_min() as f64;
        let span = (self.target as f64 - min).max(1.0);
        let at = |score: i32| (score as f64 - min) / span * 100.0;

        JourneyPositions {
            average: at(self.average).clamp(AVERAGE_MARKER_BOUNDS.0, AVERAGE_MARKER_BOUNDS.1),
            current: at(self.current).clamp(CURRENT_MARKER_BOUNDS.0, CURRENT_MARKER_BOUNDS.1),
            after_critical: at(self.after_critical).clamp(0.0, 100.0),
            target: at(self.target).clamp(0.0, 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_target_scenario() {
        let j = journey_milestones(62, 58);
        assert_eq!(j.target, 90);
        assert_eq!(j.after_critical, 77);
        assert_eq!(j.current, 62);
        assert_eq!(j.average, 58);
    }

    #[test]
    fn test_high_target_scenario() {
        let j = journey_milestones(88, 70);
        assert_eq!(j.target, 100);
        assert_eq!(j.after_critical, 95);
    }

    #[test]
    fn test_target_threshold_is_85() {
        assert_eq!(journey_milestones(84, 62).target, 90);
        assert_eq!(journey_milestones(85, 62).target, 100);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 80 + 10 * 0.55 = 85.5
        assert_eq!(journey_milestones(80, 62).after_critical, 86);
    }

    #[test]
    fn test_after_critical_never_exceeds_target() {
        for current in 0..=100 {
            let j = journey_milestones(current, 62);
            assert!(j.target == 90 || j.target == 100);
            assert!(j.after_critical <= j.target, "current={current}");
            assert!(j.after_critical >= j.current, "current={current}");
        }
    }

    #[test]
    fn test_perfect_score_stays_at_target() {
        let j = journey_milestones(100, 62);
        assert_eq!(j.after_critical, 100);
        assert_eq!(j.target, 100);
    }

    #[test]
    fn test_axis_starts_below_both_markers() {
        let j = journey_milestones(62, 58);
        assert_eq!(j.axis_min(), 48);
        let j = journey_milestones(40, 70);
        assert_eq!(j.axis_min(), 35);
    }

    #[test]
    fn test_positions_target_at_end_of_axis() {
        let p = journey_milestones(62, 58).positions();
        assert_eq!(p.target, 100.0);
        // (62 - 48) / 42 * 100
        assert!((p.current - 33.333).abs() < 0.01, "current was {}", p.current);
        assert!(p.after_critical > p.current);
    }

    #[test]
    fn test_current_marker_clamped() {
        // current far above average: raw position would be near 100
        let p = journey_milestones(99, 0).positions();
        assert_eq!(p.current, 90.0);
        // current far below average: raw position would be near 0
        let p = journey_milestones(0, 0).positions();
        assert!(p.current >= 5.0);
    }

    #[test]
    fn test_average_marker_clamped() {
        // average far above current: raw position would be past the target
        let p = journey_milestones(0, 100).positions();
        assert_eq!(p.average, 85.0);
        let p = journey_milestones(90, 0).positions();
        assert!(p.average >= 2.0 && p.average < p.current);
    }

    #[test]
    fn test_positions_stay_in_bounds_for_all_scores() {
        for current in (0..=100).step_by(5) {
            for average in (0..=100).step_by(5) {
                let p = journey_milestones(current, average).positions();
                assert!((5.0..=90.0).contains(&p.current));
                assert!((2.0..=85.0).contains(&p.average));
                assert!((0.0..=100.0).contains(&p.after_critical));
            }
        }
    }
}
