use crate::geometry::Circle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const SEGMENT_ID_PREFIX: &str = "segment_";

/// Stable identifier for a segment, assigned once from the creation counter
/// and never reused. Ordering follows creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SegmentId(u64);

impl SegmentId {
    pub fn new(n: u64) -> Self {
        Self(n)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SEGMENT_ID_PREFIX, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid segment id: {0:?}")]
pub struct ParseSegmentIdError(pub String);

impl FromStr for SegmentId {
    type Err = ParseSegmentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(SEGMENT_ID_PREFIX)
            .and_then(|n| n.parse::<u64>().ok())
            .map(SegmentId)
            .ok_or_else(|| ParseSegmentIdError(s.to_string()))
    }
}

impl From<SegmentId> for String {
    fn from(id: SegmentId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for SegmentId {
    type Error = ParseSegmentIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A user-placed circle standing for one set of the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub name: String,
    pub code: String,
    pub circle: Circle,
    /// Smallest segment containing this one. Derived by the hierarchy builder.
    #[serde(default)]
    pub parent_id: Option<SegmentId>,
    /// Segments whose smallest container is this one. Derived.
    #[serde(default)]
    pub children: Vec<SegmentId>,
    #[serde(default)]
    pub selected: bool,
    /// Reference to a named segment definition kept outside the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<String>,
}

impl Segment {
    pub fn new(id: SegmentId, code: &str, name: &str, circle: Circle) -> Self {
        Self {
            id,
            name: name.to_string(),
            code: code.to_string(),
            circle,
            parent_id: None,
            children: Vec::new(),
            selected: false,
            definition_id: None,
        }
    }

    pub fn cx(&self) -> f64 {
        self.circle.center.x
    }

    pub fn cy(&self) -> f64 {
        self.circle.center.y
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius
    }

    pub fn area(&self) -> f64 {
        self.circle.area()
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.circle.contains_point(x, y)
    }

    /// A segment is never contained in itself.
    pub fn is_contained_in(&self, parent: &Segment) -> bool {
        self.id != parent.id && self.circle.within(&parent.circle)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

pub fn is_contained(child: &Segment, parent: &Segment) -> bool {
    child.is_contained_in(parent)
}
