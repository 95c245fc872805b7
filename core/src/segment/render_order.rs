//! Draw order for segments: outer circles first so nested ones paint on top.

use super::store::SegmentStore;
use super::types::{Segment, SegmentId};
use std::cmp::Ordering;
use std::collections::HashSet;

fn by_area_desc(a: &Segment, b: &Segment) -> Ordering {
    b.area().total_cmp(&a.area()).then(a.id.cmp(&b.id))
}

/// Roots by descending area, each followed depth-first by its children.
///
/// Requires the hierarchy to be current.
pub fn compose_render_order(store: &SegmentStore) -> Vec<SegmentId> {
    let mut roots: Vec<&Segment> = store.iter().filter(|s| s.is_root()).collect();
    roots.sort_by(|a, b| by_area_desc(a, b));

    let mut order = Vec::with_capacity(store.len());
    let mut visited = HashSet::new();
    for root in roots {
        collect_with_children(store, root.id, &mut visited, &mut order);
    }
    order
}

fn collect_with_children(
    store: &SegmentStore,
    id: SegmentId,
    visited: &mut HashSet<SegmentId>,
    order: &mut Vec<SegmentId>,
) {
    if !visited.insert(id) {
        return;
    }
    let Some(segment) = store.get(id) else { return };
    order.push(id);
    for child in &segment.children {
        collect_with_children(store, *child, visited, order);
    }
}

/// Area-only order for intermediate drag and resize frames. Ignores the
/// (possibly stale) hierarchy.
pub fn preview_render_order(store: &SegmentStore) -> Vec<SegmentId> {
    let mut segments: Vec<&Segment> = store.iter().collect();
    segments.sort_by(|a, b| by_area_desc(a, b));
    segments.into_iter().map(|s| s.id).collect()
}
