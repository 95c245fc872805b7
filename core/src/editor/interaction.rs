//! Drag and resize sessions.
//!
//! A session starts on pointer down, receives cheap geometry-only updates
//! while the pointer moves and commits on release.

use super::Editor;
use crate::geometry::{Point2, Vector2};
use crate::segment::{self, SegmentId};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub segment_id: SegmentId,
    /// Pointer position minus segment center at drag start.
    pub offset: Vector2,
    /// Pointer position at drag start.
    pub origin: Point2,
    /// Set once the pointer travels past the click threshold.
    pub moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeState {
    pub segment_id: SegmentId,
}

/// At most one transient session exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragState),
    Resizing(ResizeState),
}

impl Interaction {
    pub fn segment_id(&self) -> Option<SegmentId> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging(state) => Some(state.segment_id),
            Interaction::Resizing(state) => Some(state.segment_id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Interaction::Resizing(_))
    }
}

impl Editor {
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.interaction.is_resizing()
    }

    /// Commits whatever session is active.
    pub fn finish_interaction(&mut self) {
        match self.interaction {
            Interaction::Idle => {}
            Interaction::Dragging(_) => {
                self.end_drag();
            }
            Interaction::Resizing(_) => self.end_resize(),
        }
    }

    /// Begins dragging `id` with the pointer at (`px`, `py`). Returns false
    /// for unknown ids and non-finite pointers. An active session is committed
    /// first.
    pub fn start_drag(&mut self, id: SegmentId, px: f64, py: f64) -> bool {
        let Some(center) = self.segments.get(id).map(|s| s.circle.center) else {
            return false;
        };
        let origin = Point2::new(px, py);
        let offset = origin - center;
        if !is_finite_point(&origin) || !offset.iter().all(|v| v.is_finite()) {
            return false;
        }
        self.finish_interaction();

        self.interaction = Interaction::Dragging(DragState {
            segment_id: id,
            offset,
            origin,
            moved: false,
        });
        debug!("Drag started on {}", id);
        true
    }

    /// Follows the pointer. Geometry and preview order only.
    pub fn drag_to(&mut self, px: f64, py: f64) {
        let Interaction::Dragging(mut state) = self.interaction else {
            return;
        };
        let pointer = Point2::new(px, py);
        let center = pointer - state.offset;
        if !is_finite_point(&center) {
            return;
        }
        let Some(segment) = self.segments.get_mut(state.segment_id) else {
            return;
        };
        segment.circle.center = center;

        if nalgebra::distance(&pointer, &state.origin) > self.config.click_threshold {
            state.moved = true;
        }
        self.interaction = Interaction::Dragging(state);
        self.render_order = segment::preview_render_order(&self.segments);
    }

    /// Places the dragged segment's center directly. Ignored unless `id` is
    /// the segment being dragged.
    pub fn move_segment(&mut self, id: SegmentId, cx: f64, cy: f64) {
        let Interaction::Dragging(mut state) = self.interaction else {
            return;
        };
        if state.segment_id != id || !cx.is_finite() || !cy.is_finite() {
            return;
        }
        let Some(segment) = self.segments.get_mut(id) else {
            return;
        };
        segment.circle.center = Point2::new(cx, cy);
        state.moved = true;
        self.interaction = Interaction::Dragging(state);
        self.render_order = segment::preview_render_order(&self.segments);
    }

    /// Ends the drag and commits. Returns true when the pointer travelled past
    /// the click threshold, false for a click or when no drag was active.
    pub fn end_drag(&mut self) -> bool {
        let Interaction::Dragging(state) = self.interaction else {
            return false;
        };
        self.interaction = Interaction::Idle;
        self.commit();
        debug!("Drag ended on {} (moved: {})", state.segment_id, state.moved);
        state.moved
    }

    /// Begins resizing `id`. Returns false for unknown ids. An active session
    /// is committed first.
    pub fn start_resize(&mut self, id: SegmentId) -> bool {
        if !self.segments.contains(id) {
            return false;
        }
        self.finish_interaction();
        self.interaction = Interaction::Resizing(ResizeState { segment_id: id });
        debug!("Resize started on {}", id);
        true
    }

    /// Radius follows the pointer's distance from the center, clamped to the
    /// minimum radius.
    pub fn resize_to(&mut self, px: f64, py: f64) {
        let Interaction::Resizing(state) = self.interaction else {
            return;
        };
        let Some(center) = self.segments.get(state.segment_id).map(|s| s.circle.center) else {
            return;
        };
        let radius = nalgebra::distance(&center, &Point2::new(px, py));
        self.resize_segment(state.segment_id, radius);
    }

    /// Sets the radius of the segment being resized, clamped to the minimum.
    /// Ignored unless `id` is that segment and the radius is finite.
    pub fn resize_segment(&mut self, id: SegmentId, radius: f64) {
        let Interaction::Resizing(state) = self.interaction else {
            return;
        };
        if state.segment_id != id || !radius.is_finite() {
            return;
        }
        let min_radius = self.config.min_radius;
        let Some(segment) = self.segments.get_mut(id) else {
            return;
        };
        segment.circle.radius = radius.max(min_radius);
        self.render_order = segment::preview_render_order(&self.segments);
    }

    /// Ends the resize and commits. No-op when no resize is active.
    pub fn end_resize(&mut self) {
        let Interaction::Resizing(state) = self.interaction else {
            return;
        };
        self.interaction = Interaction::Idle;
        self.commit();
        debug!("Resize ended on {}", state.segment_id);
    }
}

fn is_finite_point(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
