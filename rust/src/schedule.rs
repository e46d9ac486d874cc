//! Critical Path Method scheduling using forward and backward passes.

use crate::config::ScheduleOptions;
use crate::critical_path::extract_critical_path;
use crate::duration::{resolve, ResolvedDuration};
use crate::graph::{ActivityGraph, ActivityIdx};
use crate::models::{Activity, Network, ScheduledActivity};
use crate::sequencing::topological_order;
use crate::validation::{validated_graph, ValidationError};
use crate::{log_activities, log_debug, log_stages};

/// Per-activity timing from the forward and backward passes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActivityTiming {
    pub earliest_start: f64,
    pub earliest_finish: f64,
    pub latest_start: f64,
    pub latest_finish: f64,
    /// latest_finish - earliest_finish
    pub slack: f64,
}

impl ActivityTiming {
    pub fn is_critical(&self, tolerance: f64) -> bool {
        self.slack <= tolerance
    }
}

/// Compute earliest start/finish in topological order.
///
/// Returns the timings (latest fields left at zero) and the project duration,
/// the largest earliest finish.
pub(crate) fn forward_pass(
    graph: &ActivityGraph<'_>,
    order: &[ActivityIdx],
    durations: &[f64],
) -> (Vec<ActivityTiming>, f64) {
    let mut timings = vec![ActivityTiming::default(); graph.len()];
    let mut project_duration: f64 = 0.0;

    for &idx in order {
        let earliest_start = graph
            .predecessors(idx)
            .iter()
            .map(|&pred| timings[pred].earliest_finish)
            .fold(0.0, f64::max);
        let earliest_finish = earliest_start + durations[idx];

        timings[idx].earliest_start = earliest_start;
        timings[idx].earliest_finish = earliest_finish;
        project_duration = project_duration.max(earliest_finish);
    }

    (timings, project_duration)
}

/// Compute latest start/finish and slack in reverse topological order.
///
/// Activities without successors must finish by `project_duration`.
pub(crate) fn backward_pass(
    graph: &ActivityGraph<'_>,
    order: &[ActivityIdx],
    durations: &[f64],
    timings: &mut [ActivityTiming],
    project_duration: f64,
) {
    for &idx in order.iter().rev() {
        let latest_finish = graph
            .successors(idx)
            .iter()
            .map(|&succ| timings[succ].latest_start)
            .fold(project_duration, f64::min);

        let timing = &mut timings[idx];
        timing.latest_finish = latest_finish;
        timing.latest_start = latest_finish - durations[idx];
        timing.slack = latest_finish - timing.earliest_finish;
    }
}

/// Schedule an activity network.
///
/// Validates the input, orders it topologically, resolves durations, runs the
/// forward and backward passes, classifies critical activities and extracts a
/// critical path. The caller's activities are only read; the result is a new
/// [`Network`] whose activities follow the input order.
///
/// # Errors
/// Returns the first [`ValidationError`] found; no scheduling happens in that case.
pub fn schedule_network(
    activities: &[Activity],
    options: &ScheduleOptions,
) -> Result<Network, ValidationError> {
    let verbosity = options.verbosity;
    let tolerance = options.tolerance();
    let mode = options.duration_mode();

    let graph = validated_graph(activities)?;
    let order = topological_order(&graph);
    log_debug!(
        verbosity,
        "Topological order: {:?}",
        order.iter().map(|&idx| graph.id(idx)).collect::<Vec<_>>()
    );

    let resolved: Vec<ResolvedDuration> = activities.iter().map(|a| resolve(a, mode)).collect();
    for (activity, r) in activities.iter().zip(&resolved) {
        if r.fell_back {
            log_activities!(
                verbosity,
                "Activity {} has no usable three-point estimate, using duration {}",
                activity.id,
                r.expected
            );
        }
    }
    let durations: Vec<f64> = resolved.iter().map(|r| r.expected).collect();

    let (mut timings, project_duration) = forward_pass(&graph, &order, &durations);
    backward_pass(&graph, &order, &durations, &mut timings, project_duration);

    let critical: Vec<bool> = timings.iter().map(|t| t.is_critical(tolerance)).collect();
    let critical_path = extract_critical_path(
        &graph,
        &order,
        &timings,
        &critical,
        tolerance,
        verbosity,
    );

    let scheduled: Vec<ScheduledActivity> = activities
        .iter()
        .enumerate()
        .map(|(idx, activity)| {
            let timing = &timings[idx];
            log_activities!(
                verbosity,
                "  {}: ES={} EF={} LS={} LF={} slack={}{}",
                activity.id,
                timing.earliest_start,
                timing.earliest_finish,
                timing.latest_start,
                timing.latest_finish,
                timing.slack,
                if critical[idx] { " (critical)" } else { "" }
            );
            ScheduledActivity {
                id: activity.id.clone(),
                name: activity.name.clone(),
                predecessors: activity.predecessors.clone(),
                expected_duration: resolved[idx].expected,
                estimate_spread: resolved[idx].spread,
                earliest_start: timing.earliest_start,
                earliest_finish: timing.earliest_finish,
                latest_start: timing.latest_start,
                latest_finish: timing.latest_finish,
                slack: timing.slack,
                is_critical: critical[idx],
            }
        })
        .collect();

    let path: Vec<String> = critical_path
        .path
        .iter()
        .map(|&idx| graph.id(idx).to_string())
        .collect();

    log_stages!(
        verbosity,
        "Scheduled {} activities: project duration {}, critical path {} ({} distinct)",
        scheduled.len(),
        project_duration,
        path.join(" -> "),
        critical_path.path_count
    );

    Ok(Network {
        activities: scheduled,
        project_duration,
        critical_path: path,
        critical_path_count: critical_path.path_count,
    })
}
