use crate::geometry::Circle;
use crate::region::classify::{classify_point, membership_at, region_contains_point};
use crate::region::enumerate::enumerate_regions;
use crate::region::types::RegionId;
use crate::segment::{Segment, SegmentId, SegmentStore};

fn seg(n: u64, cx: f64, cy: f64, r: f64) -> Segment {
    Segment::new(SegmentId::new(n), "", "", Circle::new(cx, cy, r))
}

fn id(n: u64) -> SegmentId {
    SegmentId::new(n)
}

fn overlapping_pair() -> SegmentStore {
    vec![seg(1, 0.0, 0.0, 80.0), seg(2, 100.0, 0.0, 80.0)]
        .into_iter()
        .collect()
}

#[test]
fn test_point_in_both_overlapping_segments() {
    let store = overlapping_pair();
    let regions = enumerate_regions(&store.ids());

    let region = classify_point(50.0, 0.0, &regions, store.iter()).expect("lens region");
    assert_eq!(region.id, RegionId::from_members(&[id(1), id(2)]));
}

#[test]
fn test_point_in_one_segment_only() {
    let store = overlapping_pair();
    let regions = enumerate_regions(&store.ids());

    let region = classify_point(-50.0, 0.0, &regions, store.iter()).expect("left region");
    assert_eq!(region.segment_ids, vec![id(1)]);
}

#[test]
fn test_point_outside_everything() {
    let store = overlapping_pair();
    let regions = enumerate_regions(&store.ids());
    assert!(classify_point(0.0, 500.0, &regions, store.iter()).is_none());
}

#[test]
fn test_nested_point_reports_both_members() {
    let store: SegmentStore = vec![
        seg(1, 0.0, 0.0, 200.0),
        seg(2, 0.0, 0.0, 50.0),
        seg(3, 500.0, 0.0, 50.0),
    ]
    .into_iter()
    .collect();
    let regions = enumerate_regions(&store.ids());

    let region = classify_point(10.0, 10.0, &regions, store.iter()).unwrap();
    assert_eq!(region.segment_ids, vec![id(1), id(2)]);

    // Ring between the two circles
    let ring = classify_point(100.0, 0.0, &regions, store.iter()).unwrap();
    assert_eq!(ring.segment_ids, vec![id(1)]);
}

#[test]
fn test_boundary_point_counts_as_inside() {
    let store: SegmentStore = vec![seg(1, 0.0, 0.0, 10.0)].into_iter().collect();
    assert_eq!(membership_at(10.0, 0.0, store.iter()), vec![id(1)]);
}

#[test]
fn test_missing_region_list_yields_none() {
    let store = overlapping_pair();
    assert!(classify_point(50.0, 0.0, &[], store.iter()).is_none());
}

#[test]
fn test_region_contains_point() {
    let store = overlapping_pair();
    let regions = enumerate_regions(&store.ids());
    let lens = regions
        .iter()
        .find(|r| r.segment_ids == vec![id(1), id(2)])
        .unwrap();

    assert!(region_contains_point(lens, 50.0, 0.0, store.iter()));
    assert!(!region_contains_point(lens, -50.0, 0.0, store.iter()));
}
