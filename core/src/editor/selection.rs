//! Segment selection and region selection exclude each other: picking a
//! segment clears every region, toggling a region clears every segment.

use super::Editor;
use crate::region::{Region, RegionId};
use crate::segment::{Segment, SegmentId};
use tracing::debug;

impl Editor {
    /// Selects exactly one segment. Unknown ids are ignored.
    pub fn select_segment(&mut self, id: SegmentId) -> bool {
        if !self.segments.contains(id) {
            return false;
        }
        for segment in self.segments.iter_mut() {
            segment.selected = segment.id == id;
        }
        self.clear_region_selection();
        debug!("Selected {}", id);
        true
    }

    pub fn deselect_all(&mut self) {
        self.clear_segment_selection();
        self.clear_region_selection();
    }

    /// Flips one region and clears segment selection. Returns the new flag,
    /// or `None` when no region has that id.
    pub fn toggle_region(&mut self, id: &RegionId) -> Option<bool> {
        let region = self.regions.iter_mut().find(|r| &r.id == id)?;
        region.selected = !region.selected;
        let selected = region.selected;
        self.clear_segment_selection();
        debug!("Region {} selected: {}", id, selected);
        Some(selected)
    }

    /// Toggles whatever region lies under the point.
    pub fn click(&mut self, x: f64, y: f64) -> Option<RegionId> {
        let id = self.classify_point(x, y)?.id.clone();
        self.toggle_region(&id);
        Some(id)
    }

    pub fn selected_segment(&self) -> Option<&Segment> {
        self.segments.iter().find(|s| s.selected)
    }

    pub fn selected_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.selected)
    }

    pub fn selected_region_ids(&self) -> Vec<RegionId> {
        crate::region::selected_region_ids(&self.regions)
    }

    fn clear_segment_selection(&mut self) {
        for segment in self.segments.iter_mut() {
            segment.selected = false;
        }
    }

    fn clear_region_selection(&mut self) {
        for region in self.regions.iter_mut() {
            region.selected = false;
        }
    }
}
