//! Save/load boundary of the editor. Only segment records and selected region
//! ids are persisted; everything else is rederived.

use super::{Editor, EngineError, EngineResult, Interaction};
use crate::region::{self, RegionId};
use crate::segment::{self, SegmentSequence, SegmentStore};
use crate::storage::{
    NewDiagram, SavedDiagram, SavedSegment, SessionSnapshot, SessionStore,
};
use std::collections::HashSet;
use tracing::{debug, warn};

impl Editor {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            segments: self.segments.iter().map(SavedSegment::from).collect(),
            next_id: self.sequence.peek(),
            selected_region_ids: self.selected_region_ids(),
        }
    }

    /// Replaces the editor contents with a snapshot. The snapshot is validated
    /// first; on error the editor is left exactly as it was.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> EngineResult<()> {
        if snapshot.next_id == u64::MAX {
            return Err(EngineError::InvalidSnapshot(format!(
                "id counter {} cannot advance",
                snapshot.next_id
            )));
        }
        self.replace_contents(
            &snapshot.segments,
            snapshot.next_id,
            &snapshot.selected_region_ids,
        )
    }

    pub fn to_new_diagram(&self, name: &str, description: &str) -> NewDiagram {
        NewDiagram {
            name: name.to_string(),
            description: description.to_string(),
            segments: self.segments.iter().map(SavedSegment::from).collect(),
            selected_region_ids: self.selected_region_ids(),
        }
    }

    /// Loads a saved diagram. The creation counter never moves backwards, so
    /// ids handed out earlier in this session are not reused.
    pub fn load_diagram(&mut self, diagram: &SavedDiagram) -> EngineResult<()> {
        self.replace_contents(
            &diagram.segments,
            self.sequence.peek(),
            &diagram.selected_region_ids,
        )
    }

    /// Restores the last saved session, if there is one. Returns whether a
    /// session was found.
    pub fn load_session_from<S: SessionStore + ?Sized>(&mut self, store: &S) -> EngineResult<bool> {
        let snapshot = store.load_session().map_err(|e| {
            warn!("Loading session failed: {}", e);
            EngineError::from(e)
        })?;
        match snapshot {
            Some(snapshot) => {
                self.restore(&snapshot)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn save_session_to<S: SessionStore + ?Sized>(&self, store: &mut S) -> EngineResult<()> {
        store.save_session(&self.snapshot()).map_err(|e| {
            warn!("Saving session failed: {}", e);
            EngineError::from(e)
        })
    }

    fn replace_contents(
        &mut self,
        records: &[SavedSegment],
        next_id: u64,
        selected: &[RegionId],
    ) -> EngineResult<()> {
        self.validate_records(records)?;

        let mut segments: SegmentStore = records.iter().map(SavedSegment::to_segment).collect();
        let mut sequence = SegmentSequence::starting_at(next_id);
        for id in segments.ids() {
            sequence.observe(id);
        }

        segment::build_hierarchy(&mut segments);
        let mut regions = region::enumerate_regions(&segments.ids());
        let applied = region::apply_selected_ids(&mut regions, selected.iter());
        if applied < selected.len() {
            debug!(
                "Dropped {} selected region ids with no matching region",
                selected.len() - applied
            );
        }
        let render_order = segment::compose_render_order(&segments);

        self.segments = segments;
        self.sequence = sequence;
        self.regions = regions;
        self.render_order = render_order;
        self.interaction = Interaction::Idle;
        debug!(
            "Restored {} segments, {} selected regions",
            self.segments.len(),
            applied
        );
        Ok(())
    }

    fn validate_records(&self, records: &[SavedSegment]) -> EngineResult<()> {
        if records.len() > self.config.max_segments {
            return Err(EngineError::SegmentLimit(self.config.max_segments));
        }
        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert(record.id) {
                return Err(EngineError::InvalidSnapshot(format!(
                    "duplicate segment id {}",
                    record.id
                )));
            }
            if record.id.value() == u64::MAX {
                return Err(EngineError::InvalidSnapshot(format!(
                    "segment id {} cannot advance the id counter",
                    record.id
                )));
            }
            if !record.cx.is_finite() || !record.cy.is_finite() {
                return Err(EngineError::InvalidSnapshot(format!(
                    "segment {} has a non-finite center",
                    record.id
                )));
            }
            if !(record.radius > 0.0) || !record.radius.is_finite() {
                return Err(EngineError::InvalidSnapshot(format!(
                    "segment {} has invalid radius {}",
                    record.id, record.radius
                )));
            }
        }
        Ok(())
    }
}
