//! Critical Path Method / PERT scheduling engine.
//!
//! Given activities with durations (or three-point estimates) and predecessor
//! relationships, computes earliest/latest start and finish, slack, criticality,
//! the project duration and a connected critical path. The engine is a pure
//! function of its input and keeps no state between calls.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDate;
use pyo3::prelude::*;

pub mod calendar;
mod config;
mod critical_path;
pub mod duration;
mod graph;
pub mod logging;
mod models;
mod schedule;
pub mod sequencing;
pub mod validation;

pub use calendar::{project_dates, project_finish, ActivityDates};
pub use config::{ScheduleOptions, DEFAULT_CRITICAL_TOLERANCE};
pub use duration::{resolve, DurationMode, ResolvedDuration};
pub use models::{Activity, Network, ScheduledActivity, ThreePointEstimate};
pub use schedule::{schedule_network, ActivityTiming};
pub use sequencing::sequence;
pub use validation::{validate, ValidationError};

fn to_py_err(err: ValidationError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Schedule an activity network.
///
/// # Arguments
/// * `activities` - Activities with ids, durations or estimates, and predecessors
/// * `options` - Scheduling options (defaults: fixed durations, tolerance 0.01)
///
/// # Returns
/// * Network with per-activity timings, project duration and critical path
///
/// # Raises
/// * ValueError on a missing/duplicate id, unknown predecessor, or cycle
#[pyfunction]
#[pyo3(name = "schedule_network", signature = (activities, options=None))]
fn py_schedule_network(
    activities: Vec<Activity>,
    options: Option<ScheduleOptions>,
) -> PyResult<Network> {
    let options = options.unwrap_or_default();
    schedule_network(&activities, &options).map_err(to_py_err)
}

/// Check activities without scheduling them.
///
/// # Raises
/// * ValueError describing the first problem found
#[pyfunction]
fn validate_activities(activities: Vec<Activity>) -> PyResult<()> {
    validate(&activities).map_err(to_py_err)
}

/// Activity ids with every predecessor before its successors.
///
/// # Raises
/// * ValueError if the activities do not validate
#[pyfunction]
fn topological_order(activities: Vec<Activity>) -> PyResult<Vec<String>> {
    sequence(&activities).map_err(to_py_err)
}

/// Calendar dates for each activity of a scheduled network, counted from `start_date`.
#[pyfunction]
#[pyo3(name = "project_dates")]
fn py_project_dates(network: PyRef<'_, Network>, start_date: NaiveDate) -> Vec<ActivityDates> {
    project_dates(&network, start_date)
}

/// The cpm_engine Python module.
#[pymodule]
fn cpm_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<ThreePointEstimate>()?;
    m.add_class::<Activity>()?;
    m.add_class::<ScheduledActivity>()?;
    m.add_class::<Network>()?;
    m.add_class::<ActivityDates>()?;

    // Config types
    m.add_class::<ScheduleOptions>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_schedule_network, m)?)?;
    m.add_function(wrap_pyfunction!(validate_activities, m)?)?;
    m.add_function(wrap_pyfunction!(topological_order, m)?)?;
    m.add_function(wrap_pyfunction!(py_project_dates, m)?)?;

    Ok(())
}
