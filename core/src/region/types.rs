use crate::segment::SegmentId;
use serde::{Deserialize, Serialize};
use std::fmt;

const REGION_ID_PREFIX: &str = "region";

/// Canonical region identity: the sorted, deduplicated member ids joined
/// together, e.g. `region_segment_1_segment_3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Builds the canonical id for a member list in any order.
    pub fn from_members(members: &[SegmentId]) -> Self {
        Self::from_sorted(&canonical_members(members.iter().copied()))
    }

    fn from_sorted(sorted: &[SegmentId]) -> Self {
        let mut id = String::from(REGION_ID_PREFIX);
        for member in sorted {
            id.push('_');
            id.push_str(&member.to_string());
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RegionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

fn canonical_members(members: impl IntoIterator<Item = SegmentId>) -> Vec<SegmentId> {
    let mut sorted: Vec<SegmentId> = members.into_iter().collect();
    sorted.sort();
    sorted.dedup();
    sorted
}

/// One non-empty combination of segment membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    /// Sorted and deduplicated.
    pub segment_ids: Vec<SegmentId>,
    #[serde(default)]
    pub selected: bool,
}

impl Region {
    pub fn new(members: impl IntoIterator<Item = SegmentId>) -> Self {
        let segment_ids = canonical_members(members);
        Self {
            id: RegionId::from_sorted(&segment_ids),
            segment_ids,
            selected: false,
        }
    }

    pub fn len(&self) -> usize {
        self.segment_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segment_ids.is_empty()
    }

    pub fn has_member(&self, id: SegmentId) -> bool {
        self.segment_ids.binary_search(&id).is_ok()
    }
}
