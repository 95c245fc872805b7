use crate::geometry::Circle;
use crate::region::enumerate::{apply_selected_ids, enumerate_regions};
use crate::region::formula::{generate_formula, region_formula, EMPTY_FORMULA};
use crate::region::types::{Region, RegionId};
use crate::segment::{Segment, SegmentId, SegmentStore};

fn seg(n: u64, code: &str) -> Segment {
    Segment::new(
        SegmentId::new(n),
        code,
        code,
        Circle::new(n as f64 * 300.0, 0.0, 80.0),
    )
}

fn store(codes: &[&str]) -> SegmentStore {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| seg(i as u64 + 1, code))
        .collect()
}

fn select(segments: &SegmentStore, members: &[&[u64]]) -> Vec<Region> {
    let mut regions = enumerate_regions(&segments.ids());
    let wanted: Vec<RegionId> = members
        .iter()
        .map(|m| {
            let ids: Vec<SegmentId> = m.iter().map(|n| SegmentId::new(*n)).collect();
            RegionId::from_members(&ids)
        })
        .collect();
    apply_selected_ids(&mut regions, wanted.iter());
    regions
}

#[test]
fn test_nothing_selected() {
    let segments = store(&["A", "B"]);
    let regions = enumerate_regions(&segments.ids());
    assert_eq!(generate_formula(&regions, &segments), EMPTY_FORMULA);
    assert_eq!(generate_formula(&[], &SegmentStore::new()), "-");
}

#[test]
fn test_single_segment_alone() {
    let segments = store(&["A"]);
    let regions = select(&segments, &[&[1]]);
    assert_eq!(generate_formula(&regions, &segments), "A");
}

#[test]
fn test_full_intersection() {
    let segments = store(&["A", "B"]);
    let regions = select(&segments, &[&[1, 2]]);
    assert_eq!(generate_formula(&regions, &segments), "A \u{2229} B");
}

#[test]
fn test_difference() {
    let segments = store(&["A", "B"]);
    let regions = select(&segments, &[&[1]]);
    assert_eq!(generate_formula(&regions, &segments), "(A) - B");
}

#[test]
fn test_union_of_two_regions() {
    let segments = store(&["A", "B"]);
    let regions = select(&segments, &[&[1], &[2]]);
    assert_eq!(
        generate_formula(&regions, &segments),
        "((A) - B) \u{222A} ((B) - A)"
    );
}

#[test]
fn test_several_outside_codes() {
    let segments = store(&["A", "B", "C", "D"]);
    let regions = select(&segments, &[&[2, 1]]);
    assert_eq!(
        generate_formula(&regions, &segments),
        "(A \u{2229} B) - C - D"
    );
}

#[test]
fn test_codes_sorted_lexicographically() {
    // Created in order C, A, B
    let segments = store(&["C", "A", "B"]);
    let region = Region::new([SegmentId::new(1), SegmentId::new(3)]);
    assert_eq!(region_formula(&region, &segments), "(B \u{2229} C) - A");
}

#[test]
fn test_missing_member_falls_back_to_id() {
    let segments = store(&["A"]);
    let region = Region::new([SegmentId::new(1), SegmentId::new(7)]);
    assert_eq!(region_formula(&region, &segments), "A \u{2229} segment_7");
}
