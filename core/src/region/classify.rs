//! Point to region lookup.

use super::types::Region;
use crate::segment::{Segment, SegmentId};

/// Sorted ids of every segment whose disk contains the point. Does not look at
/// the hierarchy.
pub fn membership_at<'a>(
    x: f64,
    y: f64,
    segments: impl IntoIterator<Item = &'a Segment>,
) -> Vec<SegmentId> {
    let mut members: Vec<SegmentId> = segments
        .into_iter()
        .filter(|s| s.contains_point(x, y))
        .map(|s| s.id)
        .collect();
    members.sort();
    members.dedup();
    members
}

fn same_members(region: &Region, members: &[SegmentId]) -> bool {
    region.segment_ids.len() == members.len()
        && members.iter().all(|id| region.has_member(*id))
}

/// The region whose member set equals the point's exact membership, or `None`
/// when the point is outside every segment.
pub fn classify_point<'r, 's>(
    x: f64,
    y: f64,
    regions: &'r [Region],
    segments: impl IntoIterator<Item = &'s Segment>,
) -> Option<&'r Region> {
    let members = membership_at(x, y, segments);
    if members.is_empty() {
        return None;
    }
    regions.iter().find(|r| same_members(r, &members))
}

/// True when the point lies in exactly the region's segments and no others.
pub fn region_contains_point<'s>(
    region: &Region,
    x: f64,
    y: f64,
    segments: impl IntoIterator<Item = &'s Segment>,
) -> bool {
    same_members(region, &membership_at(x, y, segments))
}
