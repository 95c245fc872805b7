//! Records that cross the save/load boundary. Hierarchy, the region list and
//! render order are never stored; they are rederived on load.

use crate::geometry::Circle;
use crate::region::RegionId;
use crate::segment::{Segment, SegmentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiagramId(pub Uuid);

impl DiagramId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DiagramId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSegment {
    pub id: SegmentId,
    pub name: String,
    pub code: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_definition_id: Option<String>,
}

impl From<&Segment> for SavedSegment {
    fn from(segment: &Segment) -> Self {
        Self {
            id: segment.id,
            name: segment.name.clone(),
            code: segment.code.clone(),
            cx: segment.cx(),
            cy: segment.cy(),
            radius: segment.radius(),
            segment_definition_id: segment.definition_id.clone(),
        }
    }
}

impl SavedSegment {
    pub fn to_segment(&self) -> Segment {
        let mut segment = Segment::new(
            self.id,
            &self.code,
            &self.name,
            Circle::new(self.cx, self.cy, self.radius),
        );
        segment.definition_id = self.segment_definition_id.clone();
        segment
    }
}

/// Autosaved editor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub segments: Vec<SavedSegment>,
    pub next_id: u64,
    #[serde(default)]
    pub selected_region_ids: Vec<RegionId>,
}

/// A named diagram in the saved-diagram library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDiagram {
    pub id: DiagramId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub segments: Vec<SavedSegment>,
    #[serde(default)]
    pub selected_region_ids: Vec<RegionId>,
    /// Missing in files written before timestamps existed; those load as the
    /// Unix epoch.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl SavedDiagram {
    /// Swaps in new contents, keeping id and creation time.
    pub fn replace(&mut self, diagram: NewDiagram, now: DateTime<Utc>) {
        self.name = diagram.name;
        self.description = diagram.description;
        self.segments = diagram.segments;
        self.selected_region_ids = diagram.selected_region_ids;
        self.updated_at = now;
    }
}

/// Diagram contents without an id, as passed to create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDiagram {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub segments: Vec<SavedSegment>,
    #[serde(default)]
    pub selected_region_ids: Vec<RegionId>,
}

impl NewDiagram {
    /// Stamps a fresh id with both timestamps set to `now`.
    pub fn into_saved(self, now: DateTime<Utc>) -> SavedDiagram {
        SavedDiagram {
            id: DiagramId::new(),
            name: self.name,
            description: self.description,
            segments: self.segments,
            selected_region_ids: self.selected_region_ids,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Listing entry for the diagram library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSummary {
    pub id: DiagramId,
    pub name: String,
    pub description: String,
    pub segment_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl From<&SavedDiagram> for DiagramSummary {
    fn from(diagram: &SavedDiagram) -> Self {
        Self {
            id: diagram.id,
            name: diagram.name.clone(),
            description: diagram.description.clone(),
            segment_count: diagram.segments.len(),
            updated_at: diagram.updated_at,
        }
    }
}
