//! Trace data model: the replayable record of one sort run.
//!
//! A [`Trace`] is an ordered list of [`Step`]s plus the two operation
//! counters. Every step carries a full copy of the working array at that
//! instant (not a diff), so a display layer can jump to any index without
//! replaying earlier steps.

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;

/// Semantic role tags attached to a step.
///
/// Every field is independently optional: a step may highlight only a
/// comparison, or a swap together with the settled tail of the array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roles {
    /// Indices whose values are currently being compared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparing: Option<Vec<usize>>,
    /// Indices currently being exchanged or written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapping: Option<Vec<usize>>,
    /// Indices guaranteed to hold their final value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<Vec<usize>>,
    /// Index of the active partition pivot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<usize>,
}

impl Roles {
    /// A step with no highlighted indices.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparing = Some(indices.into_iter().collect());
        self
    }

    pub fn swapping(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.swapping = Some(indices.into_iter().collect());
        self
    }

    pub fn sorted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.sorted = Some(indices.into_iter().collect());
        self
    }

    pub fn pivot(mut self, index: usize) -> Self {
        self.pivot = Some(index);
        self
    }

    /// True when no role is set.
    pub fn is_empty(&self) -> bool {
        self.comparing.is_none()
            && self.swapping.is_none()
            && self.sorted.is_none()
            && self.pivot.is_none()
    }
}

/// Snapshot of a helper buffer used by algorithms that are not in-place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Auxiliary {
    /// Frequency table (counting sort) or per-digit table (radix sort).
    Counts(Vec<usize>),
    /// The two runs captured just before a merge.
    Halves { left: Vec<f64>, right: Vec<f64> },
    /// Radix output buffer while it is being filled.
    Output(Vec<Option<f64>>),
    /// Bucket contents, in bucket index order.
    Buckets(Vec<Vec<f64>>),
}

/// One recorded instant of a sort run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Full copy of the working array at this instant.
    pub array: Vec<f64>,
    #[serde(default, skip_serializing_if = "Roles::is_empty")]
    pub roles: Roles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<Auxiliary>,
    /// Narration referencing the concrete values and indices involved.
    pub description: String,
}

/// The complete result of one sort run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub algorithm: Algorithm,
    /// Recorded steps; never empty.
    pub steps: Vec<Step>,
    /// Element-vs-element value comparisons performed.
    pub comparisons: u64,
    /// Element relocations: exchanges, shifts, or positional writes.
    pub swaps: u64,
}

impl Trace {
    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, if any.
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first_step(&self) -> &Step {
        &self.steps[0]
    }

    pub fn final_step(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// The sorted output, i.e. the array of the final step.
    pub fn final_array(&self) -> &[f64] {
        &self.final_step().array
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_builder_sets_independent_fields() {
        let roles = Roles::none().swapping([1, 2]).sorted(3..5);
        assert_eq!(roles.swapping, Some(vec![1, 2]));
        assert_eq!(roles.sorted, Some(vec![3, 4]));
        assert!(roles.comparing.is_none());
        assert!(roles.pivot.is_none());
        assert!(!roles.is_empty());
        assert!(Roles::none().is_empty());
    }

    #[test]
    fn step_json_omits_unset_roles() {
        let step = Step {
            array: vec![2.0, 1.0],
            roles: Roles::none().comparing([0, 1]),
            auxiliary: None,
            description: "Comparing".into(),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["roles"]["comparing"], serde_json::json!([0, 1]));
        assert!(json["roles"].get("swapping").is_none());
        assert!(json.get("auxiliary").is_none());
    }

    #[test]
    fn auxiliary_is_tagged_by_kind() {
        let aux = Auxiliary::Counts(vec![1, 0, 2]);
        let json = serde_json::to_value(&aux).unwrap();
        assert_eq!(json["kind"], "counts");
        assert_eq!(json["data"], serde_json::json!([1, 0, 2]));

        let back: Auxiliary = serde_json::from_value(json).unwrap();
        assert_eq!(back, aux);
    }
}
