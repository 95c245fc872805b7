//! Containment forest for segments.
//!
//! Every segment points at its smallest enclosing segment; the parent's
//! `children` list is the inverse. The whole forest is rebuilt from scratch on
//! each commit since moving one circle can reshuffle any number of links.

use super::store::SegmentStore;
use super::types::{Segment, SegmentId};
use crate::geometry::ApproxEq;
use tracing::debug;

/// Whether `candidate` may act as the parent of `segment`.
///
/// Two identical circles contain each other. Only the lower id may enclose
/// the higher one, otherwise the forest would grow a cycle.
fn can_parent(segment: &Segment, candidate: &Segment) -> bool {
    if !segment.is_contained_in(candidate) {
        return false;
    }
    !(candidate.is_contained_in(segment) && candidate.id > segment.id)
}

/// Smallest-area segment among `candidates` that contains `segment`.
/// Equal areas, within [`EPSILON`](crate::geometry::EPSILON), resolve to
/// whichever candidate comes first, i.e. the lowest id when iterating a store.
pub fn find_smallest_container<'a>(
    segment: &Segment,
    candidates: impl IntoIterator<Item = &'a Segment>,
) -> Option<SegmentId> {
    let mut best: Option<(SegmentId, f64)> = None;

    for candidate in candidates {
        if !can_parent(segment, candidate) {
            continue;
        }
        let area = candidate.area();
        match best {
            Some((_, best_area)) if area > best_area || area.approx_eq(&best_area) => {}
            _ => best = Some((candidate.id, area)),
        }
    }

    best.map(|(id, _)| id)
}

/// Recomputes `parent_id` and `children` for every segment in the store.
pub fn build_hierarchy(store: &mut SegmentStore) {
    let parents: Vec<(SegmentId, Option<SegmentId>)> = store
        .iter()
        .map(|segment| (segment.id, find_smallest_container(segment, store.iter())))
        .collect();

    for segment in store.iter_mut() {
        segment.parent_id = None;
        segment.children.clear();
    }

    let mut linked = 0usize;
    for (id, parent) in parents {
        let Some(parent_id) = parent else { continue };
        if let Some(segment) = store.get_mut(id) {
            segment.parent_id = Some(parent_id);
        }
        if let Some(parent) = store.get_mut(parent_id) {
            parent.children.push(id);
        }
        linked += 1;
    }

    debug!(
        "Hierarchy rebuilt: {} segments, {} nested",
        store.len(),
        linked
    );
}

/// Walks `parent_id` links upwards, nearest ancestor first.
pub fn ancestors(store: &SegmentStore, id: SegmentId) -> Vec<SegmentId> {
    let mut chain = Vec::new();
    let mut current = store.get(id).and_then(|s| s.parent_id);
    while let Some(parent_id) = current {
        if chain.contains(&parent_id) || parent_id == id {
            break;
        }
        chain.push(parent_id);
        current = store.get(parent_id).and_then(|s| s.parent_id);
    }
    chain
}
