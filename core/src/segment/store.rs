use super::types::{Segment, SegmentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entity store for segments, keyed by id.
///
/// Iteration follows id order, which is creation order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentStore {
    segments: BTreeMap<SegmentId, Segment>,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, segment: Segment) -> Option<Segment> {
        self.segments.insert(segment.id, segment)
    }

    pub fn remove(&mut self, id: SegmentId) -> Option<Segment> {
        self.segments.remove(&id)
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(&id)
    }

    pub fn get_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.segments.get_mut(&id)
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.segments.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Segment> {
        self.segments.values_mut()
    }

    pub fn ids(&self) -> Vec<SegmentId> {
        self.segments.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<Segment> for SegmentStore {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut store = SegmentStore::new();
        for segment in iter {
            store.insert(segment);
        }
        store
    }
}
