//! Projection of a scheduled network onto calendar dates.
//!
//! Time units are treated as calendar days counted from a start date. A
//! fractional start rounds down to the day work begins on; a fractional finish
//! rounds up to the day it completes by.

use chrono::{Days, NaiveDate};
use pyo3::prelude::*;

use crate::models::Network;

/// Calendar dates for one scheduled activity.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityDates {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub earliest_start: NaiveDate,
    #[pyo3(get)]
    pub earliest_finish: NaiveDate,
    #[pyo3(get)]
    pub latest_start: NaiveDate,
    #[pyo3(get)]
    pub latest_finish: NaiveDate,
}

#[pymethods]
impl ActivityDates {
    fn __repr__(&self) -> String {
        format!(
            "ActivityDates(id={:?}, start={}, finish={})",
            self.id, self.earliest_start, self.earliest_finish
        )
    }
}

/// Offset `start` by a whole number of days. Saturates at `NaiveDate::MAX`.
fn offset(start: NaiveDate, days: f64) -> NaiveDate {
    let days = if days.is_finite() { days.max(0.0) as u64 } else { 0 };
    start
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Dates for every activity in `network`, in the network's activity order.
pub fn project_dates(network: &Network, start: NaiveDate) -> Vec<ActivityDates> {
    network
        .activities
        .iter()
        .map(|a| ActivityDates {
            id: a.id.clone(),
            earliest_start: offset(start, a.earliest_start.floor()),
            earliest_finish: offset(start, a.earliest_finish.ceil()),
            latest_start: offset(start, a.latest_start.floor()),
            latest_finish: offset(start, a.latest_finish.ceil()),
        })
        .collect()
}

/// Date by which the whole project completes.
pub fn project_finish(network: &Network, start: NaiveDate) -> NaiveDate {
    offset(start, network.project_duration.ceil())
}
