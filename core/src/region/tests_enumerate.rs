use crate::region::enumerate::{
    apply_selected_ids, enumerate_regions, merge_selection, recompute_regions,
    selected_region_ids,
};
use crate::region::types::{Region, RegionId};
use crate::segment::SegmentId;
use std::collections::HashSet;

fn ids(ns: &[u64]) -> Vec<SegmentId> {
    ns.iter().map(|n| SegmentId::new(*n)).collect()
}

#[test]
fn test_no_segments_no_regions() {
    assert!(enumerate_regions(&[]).is_empty());
}

#[test]
fn test_region_count_is_two_to_the_n_minus_one() {
    for n in 1..=6u64 {
        let members: Vec<SegmentId> = (1..=n).map(SegmentId::new).collect();
        let regions = enumerate_regions(&members);
        assert_eq!(regions.len(), (1usize << n) - 1, "n = {}", n);

        let unique: HashSet<&RegionId> = regions.iter().map(|r| &r.id).collect();
        assert_eq!(unique.len(), regions.len());
        assert!(regions.iter().all(|r| !r.is_empty()));
    }
}

#[test]
fn test_three_segment_order() {
    let regions = enumerate_regions(&ids(&[1, 2, 3]));
    let names: Vec<&str> = regions.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "region_segment_1",
            "region_segment_2",
            "region_segment_3",
            "region_segment_1_segment_2",
            "region_segment_1_segment_3",
            "region_segment_2_segment_3",
            "region_segment_1_segment_2_segment_3",
        ]
    );
}

#[test]
fn test_sizes_never_decrease() {
    let regions = enumerate_regions(&ids(&[4, 7, 9, 12]));
    for pair in regions.windows(2) {
        assert!(pair[0].len() <= pair[1].len());
    }
}

#[test]
fn test_selection_survives_recompute_by_canonical_id() {
    let mut before = enumerate_regions(&ids(&[1, 2]));
    let both = RegionId::from_members(&ids(&[1, 2]));
    apply_selected_ids(&mut before, [&both]);

    // A third segment shifts every list position
    let after = recompute_regions(&ids(&[1, 2, 3]), &before);
    assert_eq!(selected_region_ids(&after), vec![both]);
}

#[test]
fn test_selection_dropped_when_member_removed() {
    let mut before = enumerate_regions(&ids(&[1, 2]));
    let lonely = RegionId::from_members(&ids(&[2]));
    let kept = RegionId::from_members(&ids(&[1]));
    apply_selected_ids(&mut before, [&lonely, &kept]);

    let mut after = enumerate_regions(&ids(&[1]));
    merge_selection(&mut after, &before);
    assert_eq!(selected_region_ids(&after), vec![kept]);
}

#[test]
fn test_apply_selected_ids_ignores_unknown() {
    let mut regions = enumerate_regions(&ids(&[1]));
    let bogus = RegionId::from("region_segment_99");
    let count = apply_selected_ids(&mut regions, [&bogus]);
    assert_eq!(count, 0);
    assert!(regions.iter().all(|r: &Region| !r.selected));
}
