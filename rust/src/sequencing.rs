//! Topological ordering of a validated activity graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{ActivityGraph, ActivityIdx};
use crate::models::Activity;
use crate::validation::{validated_graph, ValidationError};

/// Order activities so every predecessor comes before its successors (Kahn's algorithm).
///
/// Among activities whose predecessors have all been emitted, the one declared
/// earliest in the input goes first, so identical input always yields the same order.
/// The graph must be acyclic.
pub(crate) fn topological_order(graph: &ActivityGraph<'_>) -> Vec<ActivityIdx> {
    let n = graph.len();
    let mut remaining: Vec<usize> = (0..n).map(|idx| graph.predecessors(idx).len()).collect();

    let mut ready: BinaryHeap<Reverse<ActivityIdx>> = remaining
        .iter()
        .enumerate()
        .filter(|(_, &count)| count == 0)
        .map(|(idx, _)| Reverse(idx))
        .collect();

    let mut order: Vec<ActivityIdx> = Vec::with_capacity(n);

    while let Some(Reverse(idx)) = ready.pop() {
        order.push(idx);
        for &succ in graph.successors(idx) {
            remaining[succ] -= 1;
            if remaining[succ] == 0 {
                ready.push(Reverse(succ));
            }
        }
    }

    debug_assert_eq!(order.len(), n, "topological order requires an acyclic graph");
    order
}

/// Validate `activities` and return their ids in topological order.
pub fn sequence(activities: &[Activity]) -> Result<Vec<String>, ValidationError> {
    let graph = validated_graph(activities)?;
    Ok(topological_order(&graph)
        .into_iter()
        .map(|idx| graph.id(idx).to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_activity(id: &str, preds: &[&str]) -> Activity {
        Activity::fixed(id, 1.0, preds)
    }

    fn position(order: &[String], id: &str) -> usize {
        order.iter().position(|x| x == id).unwrap()
    }

    #[test]
    fn test_reverse_declared_chain() {
        // Declared successor-first; order must still be a -> b -> c
        let activities = vec![
            make_activity("c", &["b"]),
            make_activity("b", &["a"]),
            make_activity("a", &[]),
        ];
        assert_eq!(sequence(&activities).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ties_follow_input_order() {
        let activities = vec![
            make_activity("z", &[]),
            make_activity("m", &[]),
            make_activity("a", &[]),
        ];
        assert_eq!(sequence(&activities).unwrap(), vec!["z", "m", "a"]);
    }

    #[test]
    fn test_released_activity_waits_for_earlier_ready_one() {
        // After "x" is emitted, "y" (position 0) becomes ready and beats "w" (position 2).
        let activities = vec![
            make_activity("y", &["x"]),
            make_activity("x", &[]),
            make_activity("w", &[]),
        ];
        assert_eq!(sequence(&activities).unwrap(), vec!["x", "y", "w"]);
    }

    #[test]
    fn test_predecessors_precede_successors() {
        let activities = vec![
            make_activity("f", &["d", "e"]),
            make_activity("e", &["b"]),
            make_activity("d", &["c"]),
            make_activity("c", &["b"]),
            make_activity("b", &["a"]),
            make_activity("a", &[]),
        ];
        let order = sequence(&activities).unwrap();
        assert_eq!(order.len(), activities.len());
        for activity in &activities {
            for pred in &activity.predecessors {
                assert!(position(&order, pred) < position(&order, &activity.id));
            }
        }
    }

    #[test]
    fn test_cycle_rejected() {
        let activities = vec![make_activity("a", &["b"]), make_activity("b", &["a"])];
        assert_eq!(sequence(&activities), Err(ValidationError::CyclicDependency));
    }
}
