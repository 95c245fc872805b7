//! Enumeration of every non-empty membership combination.

use super::types::{Region, RegionId};
use crate::segment::SegmentId;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Largest segment count the bitmask enumeration can address.
pub const MAX_ENUMERABLE: usize = 63;

/// All `2^n - 1` regions for `ids`, smallest membership first, ties ordered by
/// canonical id. Returns nothing for an empty slice.
pub fn enumerate_regions(ids: &[SegmentId]) -> Vec<Region> {
    let n = ids.len();
    if n == 0 {
        return Vec::new();
    }
    if n > MAX_ENUMERABLE {
        warn!("Refusing to enumerate regions for {} segments", n);
        return Vec::new();
    }

    let limit: u64 = 1 << n;
    let mut regions: Vec<Region> = (1..limit)
        .map(|mask| {
            Region::new(
                ids.iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, id)| *id),
            )
        })
        .collect();

    regions.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.id.cmp(&b.id)));
    regions
}

/// Copies `selected` onto regions whose canonical id was selected before.
/// Selections whose member set vanished are dropped.
pub fn merge_selection(regions: &mut [Region], previous: &[Region]) {
    let selected: HashSet<&RegionId> = previous
        .iter()
        .filter(|r| r.selected)
        .map(|r| &r.id)
        .collect();
    apply_selected_ids(regions, selected.into_iter());
}

/// Marks the given ids as selected and everything else as not selected.
/// Unknown ids are ignored. Returns how many regions ended up selected.
pub fn apply_selected_ids<'a>(
    regions: &mut [Region],
    ids: impl IntoIterator<Item = &'a RegionId>,
) -> usize {
    let wanted: HashSet<&RegionId> = ids.into_iter().collect();
    let mut count = 0;
    for region in regions.iter_mut() {
        region.selected = wanted.contains(&region.id);
        if region.selected {
            count += 1;
        }
    }
    count
}

/// Fresh enumeration carrying over the selection of `previous`.
pub fn recompute_regions(ids: &[SegmentId], previous: &[Region]) -> Vec<Region> {
    let mut regions = enumerate_regions(ids);
    merge_selection(&mut regions, previous);
    debug!(
        "Enumerated {} regions for {} segments ({} selected)",
        regions.len(),
        ids.len(),
        regions.iter().filter(|r| r.selected).count()
    );
    regions
}

pub fn selected_region_ids(regions: &[Region]) -> Vec<RegionId> {
    regions
        .iter()
        .filter(|r| r.selected)
        .map(|r| r.id.clone())
        .collect()
}
