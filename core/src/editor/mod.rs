//! The editor owns the segment store and every derived view of it.
//!
//! Mutations are synchronous. Anything that changes membership or geometry
//! for good (add, remove, drag end, resize end, restore) goes through
//! [`Editor::commit`], which rebuilds hierarchy, regions and render order in
//! one pass. Intermediate drag and resize frames only touch geometry and the
//! preview order.

pub mod interaction;
pub mod selection;
pub mod persistence;

#[cfg(test)]
mod tests_persistence;

pub use interaction::{DragState, Interaction, ResizeState};

use crate::config::{EditorConfig, MAX_SEGMENTS};
use crate::geometry::Circle;
use crate::region::{self, Region};
use crate::segment::{self, Segment, SegmentId, SegmentSequence, SegmentStore};
use crate::storage::StorageError;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Segment limit of {0} reached")]
    SegmentLimit(usize),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("No segment ids left")]
    IdsExhausted,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for EngineError {
    fn from(err: StorageError) -> Self {
        EngineError::Storage(err.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    segments: SegmentStore,
    sequence: SegmentSequence,
    regions: Vec<Region>,
    render_order: Vec<SegmentId>,
    interaction: Interaction,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Builds an empty editor. A `max_segments` outside 1..=[`MAX_SEGMENTS`]
    /// is clamped into range.
    pub fn new(mut config: EditorConfig) -> Self {
        let limit = config.max_segments.clamp(1, MAX_SEGMENTS);
        if limit != config.max_segments {
            warn!(
                "max_segments {} out of range, using {}",
                config.max_segments, limit
            );
            config.max_segments = limit;
        }
        Self {
            config,
            segments: SegmentStore::new(),
            sequence: SegmentSequence::new(),
            regions: Vec::new(),
            render_order: Vec::new(),
            interaction: Interaction::Idle,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn segments(&self) -> &SegmentStore {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn render_order(&self) -> &[SegmentId] {
        &self.render_order
    }

    /// Segments in draw order.
    pub fn segments_in_render_order(&self) -> Vec<&Segment> {
        self.render_order
            .iter()
            .filter_map(|id| self.segments.get(*id))
            .collect()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn next_segment_number(&self) -> u64 {
        self.sequence.peek()
    }

    /// Rebuilds hierarchy, regions (keeping selection) and render order.
    pub fn commit(&mut self) {
        segment::build_hierarchy(&mut self.segments);
        self.regions = region::recompute_regions(&self.segments.ids(), &self.regions);
        self.render_order = segment::compose_render_order(&self.segments);
        debug!(
            "Committed {} segments, {} regions",
            self.segments.len(),
            self.regions.len()
        );
    }

    /// Adds a segment centered at (`cx`, `cy`) with the default radius.
    pub fn add_segment(&mut self, cx: f64, cy: f64) -> EngineResult<Segment> {
        if self.segments.len() >= self.config.max_segments {
            return Err(EngineError::SegmentLimit(self.config.max_segments));
        }
        if !cx.is_finite() || !cy.is_finite() {
            return Err(EngineError::InvalidGeometry(format!(
                "center ({}, {}) is not finite",
                cx, cy
            )));
        }

        let entry = self.sequence.next_entry().ok_or(EngineError::IdsExhausted)?;
        let segment = Segment::new(
            entry.id,
            &entry.code,
            &entry.name,
            Circle::new(cx, cy, self.config.default_radius),
        );
        let created = segment.clone();
        self.segments.insert(segment);
        self.commit();
        debug!("Added {} ({}) at ({}, {})", entry.id, entry.code, cx, cy);

        // Hand back the committed record so parent links are current.
        Ok(self.segments.get(entry.id).cloned().unwrap_or(created))
    }

    /// Removes a segment. Unknown ids are ignored. Returns whether anything
    /// was removed.
    pub fn remove_segment(&mut self, id: SegmentId) -> bool {
        if self.segments.remove(id).is_none() {
            return false;
        }
        if self.interaction.segment_id() == Some(id) {
            self.interaction = Interaction::Idle;
        }
        self.commit();
        debug!("Removed {}", id);
        true
    }

    /// Metadata only; no recompute.
    pub fn rename_segment(&mut self, id: SegmentId, name: &str) -> bool {
        match self.segments.get_mut(id) {
            Some(segment) => {
                segment.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Links a segment to an externally owned segment definition.
    pub fn set_definition(&mut self, id: SegmentId, definition_id: Option<String>) -> bool {
        match self.segments.get_mut(id) {
            Some(segment) => {
                segment.definition_id = definition_id;
                true
            }
            None => false,
        }
    }

    /// Region under the point, if any.
    pub fn classify_point(&self, x: f64, y: f64) -> Option<&Region> {
        region::classify_point(x, y, &self.regions, self.segments.iter())
    }

    /// Smallest segment under the point; used to pick what a press grabs.
    pub fn segment_at(&self, x: f64, y: f64) -> Option<&Segment> {
        let mut best: Option<&Segment> = None;
        for segment in self.segments.iter().filter(|s| s.contains_point(x, y)) {
            match best {
                Some(current) if segment.area() >= current.area() => {}
                _ => best = Some(segment),
            }
        }
        best
    }

    pub fn formula(&self) -> String {
        region::generate_formula(&self.regions, &self.segments)
    }
}
