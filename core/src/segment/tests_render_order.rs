use crate::geometry::Circle;
use crate::segment::hierarchy::build_hierarchy;
use crate::segment::render_order::{compose_render_order, preview_render_order};
use crate::segment::store::SegmentStore;
use crate::segment::types::{Segment, SegmentId};

fn seg(n: u64, cx: f64, cy: f64, r: f64) -> Segment {
    Segment::new(SegmentId::new(n), "", "", Circle::new(cx, cy, r))
}

fn ids(ns: &[u64]) -> Vec<SegmentId> {
    ns.iter().map(|n| SegmentId::new(*n)).collect()
}

#[test]
fn test_empty_store() {
    let store = SegmentStore::new();
    assert!(compose_render_order(&store).is_empty());
    assert!(preview_render_order(&store).is_empty());
}

#[test]
fn test_roots_by_descending_area_with_children_after_parent() {
    // Small root 1, big root 2 with nested 3 and 4 (4 inside 3)
    let mut store: SegmentStore = vec![
        seg(1, 1000.0, 0.0, 40.0),
        seg(2, 0.0, 0.0, 300.0),
        seg(3, 0.0, 0.0, 150.0),
        seg(4, 0.0, 0.0, 50.0),
        seg(5, 200.0, 0.0, 60.0),
    ]
    .into_iter()
    .collect();
    build_hierarchy(&mut store);

    let order = compose_render_order(&store);
    assert_eq!(order, ids(&[2, 3, 4, 5, 1]));
}

#[test]
fn test_every_segment_emitted_once() {
    let mut store: SegmentStore = vec![
        seg(1, 0.0, 0.0, 80.0),
        seg(2, 0.0, 0.0, 80.0),
        seg(3, 60.0, 0.0, 80.0),
    ]
    .into_iter()
    .collect();
    build_hierarchy(&mut store);

    let mut order = compose_render_order(&store);
    assert_eq!(order.len(), 3);
    order.sort();
    assert_eq!(order, ids(&[1, 2, 3]));
}

#[test]
fn test_preview_order_ignores_hierarchy() {
    let store: SegmentStore = vec![
        seg(1, 0.0, 0.0, 20.0),
        seg(2, 500.0, 0.0, 90.0),
        seg(3, -500.0, 0.0, 50.0),
    ]
    .into_iter()
    .collect();

    assert_eq!(preview_render_order(&store), ids(&[2, 3, 1]));
}
