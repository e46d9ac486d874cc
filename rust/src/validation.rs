//! Structural checks run before any scheduling arithmetic.
//!
//! Checks, in order, stopping at the first failure:
//! 1. Every activity has a non-empty, unique id
//! 2. Every predecessor id refers to a declared activity
//! 3. The predecessor graph has no cycle (self-references included)

use thiserror::Error;

use crate::graph::{ActivityGraph, ActivityIdx};
use crate::models::Activity;

/// Why an activity list was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `id` is empty when the activity had no id at all.
    #[error("Activity id is missing or duplicated: {id:?}")]
    DuplicateOrMissingId { id: String },
    #[error("Activity {activity_id} has undefined predecessor: {predecessor_id}")]
    UnknownPredecessor {
        activity_id: String,
        predecessor_id: String,
    },
    #[error("Circular dependency detected in activities")]
    CyclicDependency,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Depth-first search over predecessor edges from every activity.
///
/// Reaching an activity that is still on the active path means a cycle. The
/// traversal uses an explicit stack so long chains cannot overflow the call stack.
pub(crate) fn check_acyclic(graph: &ActivityGraph<'_>) -> Result<(), ValidationError> {
    let mut marks = vec![Mark::Unvisited; graph.len()];
    // (activity, index of the next predecessor to visit)
    let mut stack: Vec<(ActivityIdx, usize)> = Vec::new();

    for root in 0..graph.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::OnStack;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            let preds = graph.predecessors(node);
            if next == preds.len() {
                marks[node] = Mark::Done;
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let pred = preds[next];
            match marks[pred] {
                Mark::OnStack => return Err(ValidationError::CyclicDependency),
                Mark::Done => {}
                Mark::Unvisited => {
                    marks[pred] = Mark::OnStack;
                    stack.push((pred, 0));
                }
            }
        }
    }

    Ok(())
}

/// Build the graph index and verify it is a DAG.
pub(crate) fn validated_graph(
    activities: &[Activity],
) -> Result<ActivityGraph<'_>, ValidationError> {
    let graph = ActivityGraph::build(activities)?;
    check_acyclic(&graph)?;
    Ok(graph)
}

/// Check an activity list without scheduling it.
///
/// Disconnected sub-networks are legal; every component is checked.
pub fn validate(activities: &[Activity]) -> Result<(), ValidationError> {
    validated_graph(activities).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_activity(id: &str, preds: &[&str]) -> Activity {
        Activity::fixed(id, 1.0, preds)
    }

    #[test]
    fn test_valid_network() {
        let activities = vec![
            make_activity("a", &[]),
            make_activity("b", &["a"]),
            make_activity("c", &["a"]),
            make_activity("d", &["b", "c"]),
        ];
        assert_eq!(validate(&activities), Ok(()));
    }

    #[test]
    fn test_empty_network_is_valid() {
        assert_eq!(validate(&[]), Ok(()));
    }

    #[test]
    fn test_missing_id() {
        let activities = vec![make_activity("a", &[]), make_activity("", &[])];
        assert_eq!(
            validate(&activities),
            Err(ValidationError::DuplicateOrMissingId { id: String::new() })
        );
    }

    #[test]
    fn test_duplicate_id() {
        let activities = vec![make_activity("a", &[]), make_activity("a", &[])];
        assert_eq!(
            validate(&activities),
            Err(ValidationError::DuplicateOrMissingId {
                id: "a".to_string()
            })
        );
    }

    #[test]
    fn test_id_check_runs_before_reference_check() {
        // The dangling reference comes first, but the duplicate id wins.
        let activities = vec![
            make_activity("a", &["ghost"]),
            make_activity("b", &[]),
            make_activity("b", &[]),
        ];
        assert!(matches!(
            validate(&activities),
            Err(ValidationError::DuplicateOrMissingId { .. })
        ));
    }

    #[test]
    fn test_unknown_predecessor() {
        let activities = vec![make_activity("a", &[]), make_activity("b", &["a", "z"])];
        assert_eq!(
            validate(&activities),
            Err(ValidationError::UnknownPredecessor {
                activity_id: "b".to_string(),
                predecessor_id: "z".to_string(),
            })
        );
    }

    #[test]
    fn test_self_reference_is_cycle() {
        let activities = vec![make_activity("a", &["a"])];
        assert_eq!(validate(&activities), Err(ValidationError::CyclicDependency));
    }

    #[test]
    fn test_two_node_cycle() {
        let activities = vec![make_activity("a", &["b"]), make_activity("b", &["a"])];
        assert_eq!(validate(&activities), Err(ValidationError::CyclicDependency));
    }

    #[test]
    fn test_cycle_in_second_component() {
        // a -> b is fine; c -> d -> e -> c is not
        let activities = vec![
            make_activity("a", &[]),
            make_activity("b", &["a"]),
            make_activity("c", &["e"]),
            make_activity("d", &["c"]),
            make_activity("e", &["d"]),
        ];
        assert_eq!(validate(&activities), Err(ValidationError::CyclicDependency));
    }

    #[test]
    fn test_shared_ancestor_is_not_cycle() {
        // Diamond: d reaches a through both b and c
        let activities = vec![
            make_activity("d", &["b", "c"]),
            make_activity("b", &["a"]),
            make_activity("c", &["a"]),
            make_activity("a", &[]),
        ];
        assert_eq!(validate(&activities), Ok(()));
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let ids: Vec<String> = (0..50_000).map(|i| format!("t{}", i)).collect();
        let activities: Vec<Activity> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let preds: Vec<&str> = if i == 0 { vec![] } else { vec![ids[i - 1].as_str()] };
                make_activity(id, &preds)
            })
            .rev()
            .collect();
        assert_eq!(validate(&activities), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::UnknownPredecessor {
            activity_id: "b".to_string(),
            predecessor_id: "z".to_string(),
        };
        assert_eq!(err.to_string(), "Activity b has undefined predecessor: z");
        assert_eq!(
            ValidationError::CyclicDependency.to_string(),
            "Circular dependency detected in activities"
        );
    }
}
