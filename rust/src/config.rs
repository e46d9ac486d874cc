//! Configuration for a scheduling run.

use pyo3::prelude::*;

use crate::duration::DurationMode;

/// Slack at or below which an activity counts as critical.
pub const DEFAULT_CRITICAL_TOLERANCE: f64 = 1e-2;

/// Options for [`crate::schedule_network`].
#[pyclass]
#[derive(Clone, Debug)]
pub struct ScheduleOptions {
    /// Derive durations from three-point estimates where available
    #[pyo3(get, set)]
    pub use_pert: bool,
    /// Critical slack threshold, absorbs rounding from PERT arithmetic
    #[pyo3(get, set)]
    pub critical_tolerance: f64,
    /// Verbosity level: 0=silent, 1=stages, 2=activities, 3=debug
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            use_pert: false,
            critical_tolerance: DEFAULT_CRITICAL_TOLERANCE,
            verbosity: 0,
        }
    }
}

impl ScheduleOptions {
    pub fn pert() -> Self {
        Self {
            use_pert: true,
            ..Self::default()
        }
    }

    pub fn duration_mode(&self) -> DurationMode {
        if self.use_pert {
            DurationMode::Pert
        } else {
            DurationMode::Fixed
        }
    }

    /// The configured tolerance, or the default if it is negative or not finite.
    pub fn tolerance(&self) -> f64 {
        if self.critical_tolerance.is_finite() && self.critical_tolerance >= 0.0 {
            self.critical_tolerance
        } else {
            DEFAULT_CRITICAL_TOLERANCE
        }
    }
}

#[pymethods]
impl ScheduleOptions {
    #[new]
    #[pyo3(signature = (use_pert=None, critical_tolerance=None, verbosity=None))]
    fn new(use_pert: Option<bool>, critical_tolerance: Option<f64>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            use_pert: use_pert.unwrap_or(defaults.use_pert),
            critical_tolerance: critical_tolerance.unwrap_or(defaults.critical_tolerance),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleOptions(use_pert={}, critical_tolerance={}, verbosity={})",
            self.use_pert, self.critical_tolerance, self.verbosity
        )
    }
}
