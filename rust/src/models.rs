//! Core data types for the activity network.

use pyo3::prelude::*;

/// Optimistic / most-likely / pessimistic duration estimate.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct ThreePointEstimate {
    #[pyo3(get, set)]
    pub optimistic: f64,
    #[pyo3(get, set)]
    pub most_likely: f64,
    #[pyo3(get, set)]
    pub pessimistic: f64,
}

#[pymethods]
impl ThreePointEstimate {
    #[new]
    pub fn new(optimistic: f64, most_likely: f64, pessimistic: f64) -> Self {
        Self {
            optimistic,
            most_likely,
            pessimistic,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ThreePointEstimate(optimistic={}, most_likely={}, pessimistic={})",
            self.optimistic, self.most_likely, self.pessimistic
        )
    }
}

/// An activity as declared by the caller.
///
/// `predecessors` lists the ids of activities that must finish before this one
/// starts. Repeated entries are treated as one edge.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub predecessors: Vec<String>,
    /// Fixed duration, used outside PERT mode and as the PERT fallback.
    #[pyo3(get, set)]
    pub duration: Option<f64>,
    #[pyo3(get, set)]
    pub estimate: Option<ThreePointEstimate>,
}

impl Activity {
    /// Activity with a fixed duration.
    pub fn fixed(id: &str, duration: f64, predecessors: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            predecessors: predecessors.iter().map(|p| p.to_string()).collect(),
            duration: Some(duration),
            estimate: None,
        }
    }

    /// Activity with a three-point estimate and no fixed duration.
    pub fn estimated(id: &str, estimate: ThreePointEstimate, predecessors: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            predecessors: predecessors.iter().map(|p| p.to_string()).collect(),
            duration: None,
            estimate: Some(estimate),
        }
    }
}

#[pymethods]
impl Activity {
    /// The triple is only attached when all three values are supplied.
    #[new]
    #[pyo3(signature = (
        id,
        predecessors=Vec::new(),
        duration=None,
        name=String::new(),
        optimistic=None,
        most_likely=None,
        pessimistic=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        id: String,
        predecessors: Vec<String>,
        duration: Option<f64>,
        name: String,
        optimistic: Option<f64>,
        most_likely: Option<f64>,
        pessimistic: Option<f64>,
    ) -> Self {
        let estimate = match (optimistic, most_likely, pessimistic) {
            (Some(o), Some(m), Some(p)) => Some(ThreePointEstimate::new(o, m, p)),
            _ => None,
        };
        Self {
            id,
            name,
            predecessors,
            duration,
            estimate,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Activity(id={:?}, duration={:?}, estimate={}, preds={})",
            self.id,
            self.duration,
            self.estimate.is_some(),
            self.predecessors.len()
        )
    }
}

/// An activity after scheduling. One is produced per input activity, in input order.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledActivity {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub predecessors: Vec<String>,
    #[pyo3(get)]
    pub expected_duration: f64,
    /// PERT standard deviation; 0 when the fixed duration was used.
    #[pyo3(get)]
    pub estimate_spread: f64,
    #[pyo3(get)]
    pub earliest_start: f64,
    #[pyo3(get)]
    pub earliest_finish: f64,
    #[pyo3(get)]
    pub latest_start: f64,
    #[pyo3(get)]
    pub latest_finish: f64,
    #[pyo3(get)]
    pub slack: f64,
    #[pyo3(get)]
    pub is_critical: bool,
}

#[pymethods]
impl ScheduledActivity {
    fn __repr__(&self) -> String {
        format!(
            "ScheduledActivity(id={:?}, es={}, ef={}, ls={}, lf={}, slack={}, critical={})",
            self.id,
            self.earliest_start,
            self.earliest_finish,
            self.latest_start,
            self.latest_finish,
            self.slack,
            self.is_critical
        )
    }
}

/// Result of one scheduling run. Never mutated after construction.
#[pyclass(frozen)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Network {
    #[pyo3(get)]
    pub activities: Vec<ScheduledActivity>,
    #[pyo3(get)]
    pub project_duration: f64,
    /// One connected chain of critical activities from a source to a sink.
    #[pyo3(get)]
    pub critical_path: Vec<String>,
    /// Number of distinct critical chains, of which `critical_path` is one.
    #[pyo3(get)]
    pub critical_path_count: u64,
}

impl Network {
    /// Look up a scheduled activity by id.
    pub fn get(&self, id: &str) -> Option<&ScheduledActivity> {
        self.activities.iter().find(|a| a.id == id)
    }
}

#[pymethods]
impl Network {
    /// Number of activities classified as critical.
    pub fn critical_count(&self) -> usize {
        self.activities.iter().filter(|a| a.is_critical).count()
    }

    /// Mean slack over all activities (0 for an empty network).
    pub fn average_slack(&self) -> f64 {
        if self.activities.is_empty() {
            return 0.0;
        }
        let total: f64 = self.activities.iter().map(|a| a.slack).sum();
        total / self.activities.len() as f64
    }

    /// Standard deviation of the project duration along `critical_path`.
    ///
    /// Spreads of independent activities combine as the root of summed variances.
    pub fn critical_path_spread(&self) -> f64 {
        self.critical_path
            .iter()
            .filter_map(|id| self.get(id))
            .map(|a| a.estimate_spread * a.estimate_spread)
            .sum::<f64>()
            .sqrt()
    }

    #[pyo3(name = "get")]
    fn py_get(&self, id: &str) -> Option<ScheduledActivity> {
        self.get(id).cloned()
    }

    fn __len__(&self) -> usize {
        self.activities.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Network(activities={}, project_duration={}, critical_path={:?}, critical_path_count={})",
            self.activities.len(),
            self.project_duration,
            self.critical_path,
            self.critical_path_count
        )
    }
}
