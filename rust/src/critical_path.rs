//! Critical path extraction over tight edges between critical activities.
//!
//! An edge `u -> v` is tight when both ends are critical and `v` starts the
//! moment `u` finishes (within tolerance). Following only tight edges keeps the
//! returned path connected even when the network has parallel critical chains.

use crate::graph::{ActivityGraph, ActivityIdx};
use crate::schedule::ActivityTiming;

/// One critical path plus the number of distinct critical paths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CriticalPathResult {
    pub path: Vec<ActivityIdx>,
    pub path_count: u64,
}

struct TightEdges<'g, 'a> {
    graph: &'g ActivityGraph<'a>,
    timings: &'g [ActivityTiming],
    critical: &'g [bool],
    tolerance: f64,
}

impl TightEdges<'_, '_> {
    fn is_tight(&self, from: ActivityIdx, to: ActivityIdx) -> bool {
        self.critical[from]
            && self.critical[to]
            && (self.timings[to].earliest_start - self.timings[from].earliest_finish).abs()
                <= self.tolerance
    }

    fn has_tight_predecessor(&self, idx: ActivityIdx) -> bool {
        self.graph
            .predecessors(idx)
            .iter()
            .any(|&pred| self.is_tight(pred, idx))
    }

    fn has_tight_successor(&self, idx: ActivityIdx) -> bool {
        self.graph
            .successors(idx)
            .iter()
            .any(|&succ| self.is_tight(idx, succ))
    }

    /// Tight successor with the lexicographically smallest id.
    fn next_step(&self, idx: ActivityIdx) -> Option<ActivityIdx> {
        self.graph
            .successors(idx)
            .iter()
            .copied()
            .filter(|&succ| self.is_tight(idx, succ))
            .min_by(|&a, &b| self.graph.id(a).cmp(self.graph.id(b)))
    }
}

/// Extract a critical path and count the distinct ones.
///
/// The path starts at the smallest-id critical activity with no tight
/// predecessor and repeatedly steps to the smallest-id tight successor. The
/// count is the number of maximal tight-edge chains, saturating at `u64::MAX`.
/// `order` must be a topological order of `graph`.
pub(crate) fn extract_critical_path(
    graph: &ActivityGraph<'_>,
    order: &[ActivityIdx],
    timings: &[ActivityTiming],
    critical: &[bool],
    tolerance: f64,
    verbosity: u8,
) -> CriticalPathResult {
    if graph.is_empty() {
        return CriticalPathResult::default();
    }

    let edges = TightEdges {
        graph,
        timings,
        critical,
        tolerance,
    };

    // Chains ending at each activity, accumulated in topological order.
    let mut chains = vec![0u64; graph.len()];
    let mut path_count = 0u64;
    let mut start: Option<ActivityIdx> = None;

    for &idx in order {
        if !critical[idx] {
            continue;
        }
        if edges.has_tight_predecessor(idx) {
            chains[idx] = graph
                .predecessors(idx)
                .iter()
                .filter(|&&pred| edges.is_tight(pred, idx))
                .fold(0u64, |acc, &pred| acc.saturating_add(chains[pred]));
        } else {
            chains[idx] = 1;
            let smaller = start.map_or(true, |s| graph.id(idx) < graph.id(s));
            if smaller {
                start = Some(idx);
            }
        }
        if !edges.has_tight_successor(idx) {
            path_count = path_count.saturating_add(chains[idx]);
        }
    }

    let mut path = Vec::new();
    let mut cursor = start;
    while let Some(idx) = cursor {
        path.push(idx);
        cursor = edges.next_step(idx);
    }

    crate::log_debug!(
        verbosity,
        "Critical path walk from {:?}: {} steps, {} distinct paths",
        start.map(|s| graph.id(s)),
        path.len(),
        path_count
    );

    CriticalPathResult { path, path_count }
}
