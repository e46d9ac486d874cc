//! Position-indexed view of an activity list.
//!
//! Activities are addressed by their position in the caller's slice so that
//! every per-activity table is a plain `Vec` and lookups are direct indexing.

use rustc_hash::FxHashMap;

use crate::models::Activity;
use crate::validation::ValidationError;

/// Position of an activity in the input slice.
pub type ActivityIdx = usize;

/// Adjacency over an activity slice. Borrows ids from the input; never copies it.
#[derive(Debug)]
pub struct ActivityGraph<'a> {
    activities: &'a [Activity],
    /// Predecessor positions per activity, deduplicated, in declaration order.
    predecessors: Vec<Vec<ActivityIdx>>,
    /// Successor positions per activity, in ascending position order.
    successors: Vec<Vec<ActivityIdx>>,
}

impl<'a> ActivityGraph<'a> {
    /// Index the activities, checking id uniqueness and predecessor references.
    ///
    /// Acyclicity is not checked here; see [`crate::validation::validate`].
    pub fn build(activities: &'a [Activity]) -> Result<Self, ValidationError> {
        let n = activities.len();
        let mut positions: FxHashMap<&str, ActivityIdx> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());

        for (idx, activity) in activities.iter().enumerate() {
            let id = activity.id.as_str();
            if id.trim().is_empty() || positions.insert(id, idx).is_some() {
                return Err(ValidationError::DuplicateOrMissingId { id: id.to_string() });
            }
        }

        let mut predecessors: Vec<Vec<ActivityIdx>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<ActivityIdx>> = vec![Vec::new(); n];

        for (idx, activity) in activities.iter().enumerate() {
            for pred_id in &activity.predecessors {
                let Some(&pred) = positions.get(pred_id.as_str()) else {
                    return Err(ValidationError::UnknownPredecessor {
                        activity_id: activity.id.clone(),
                        predecessor_id: pred_id.clone(),
                    });
                };
                if predecessors[idx].contains(&pred) {
                    continue;
                }
                predecessors[idx].push(pred);
                successors[pred].push(idx);
            }
        }

        Ok(Self {
            activities,
            predecessors,
            successors,
        })
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    #[inline]
    pub fn id(&self, idx: ActivityIdx) -> &'a str {
        self.activities[idx].id.as_str()
    }

    #[inline]
    pub fn predecessors(&self, idx: ActivityIdx) -> &[ActivityIdx] {
        &self.predecessors[idx]
    }

    #[inline]
    pub fn successors(&self, idx: ActivityIdx) -> &[ActivityIdx] {
        &self.successors[idx]
    }
}
