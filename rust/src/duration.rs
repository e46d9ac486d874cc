//! Expected duration of each activity, fixed or from a PERT three-point estimate.

use crate::models::{Activity, ThreePointEstimate};

/// How activity durations are derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationMode {
    /// Use `Activity::duration`.
    Fixed,
    /// Use the three-point estimate where one is usable.
    Pert,
}

/// Duration used by the scheduler, with its PERT standard deviation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedDuration {
    pub expected: f64,
    pub spread: f64,
    /// True when PERT was requested but the fixed duration had to be used.
    pub fell_back: bool,
}

/// A triple is usable when all values are finite and non-negative and it is
/// not degenerate (optimistic and pessimistic both zero).
///
/// An inverted triple (optimistic > pessimistic) is still usable; the formula
/// applies as-is and the spread comes out negative.
fn usable(estimate: &ThreePointEstimate) -> bool {
    let values = [
        estimate.optimistic,
        estimate.most_likely,
        estimate.pessimistic,
    ];
    values.iter().all(|v| v.is_finite() && *v >= 0.0)
        && !(estimate.optimistic == 0.0 && estimate.pessimistic == 0.0)
}

fn fixed_duration(activity: &Activity) -> f64 {
    match activity.duration {
        Some(d) if d.is_finite() => d.max(0.0),
        _ => 0.0,
    }
}

/// Resolve the duration of a single activity.
///
/// PERT: expected = (o + 4m + p) / 6, spread = (p - o) / 6.
pub fn resolve(activity: &Activity, mode: DurationMode) -> ResolvedDuration {
    let fixed = ResolvedDuration {
        expected: fixed_duration(activity),
        spread: 0.0,
        fell_back: false,
    };

    match mode {
        DurationMode::Fixed => fixed,
        DurationMode::Pert => match &activity.estimate {
            Some(est) if usable(est) => ResolvedDuration {
                expected: (est.optimistic + 4.0 * est.most_likely + est.pessimistic) / 6.0,
                spread: (est.pessimistic - est.optimistic) / 6.0,
                fell_back: false,
            },
            _ => ResolvedDuration {
                fell_back: true,
                ..fixed
            },
        },
    }
}
