use super::records::{DiagramId, DiagramSummary, NewDiagram, SavedDiagram, SessionSnapshot};
use super::{DiagramStore, SessionStore, StorageError, StorageResult};
use chrono::Utc;

/// Volatile store, used in tests and when no data directory is configured.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    session: Option<SessionSnapshot>,
    diagrams: Vec<SavedDiagram>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load_session(&self) -> StorageResult<Option<SessionSnapshot>> {
        Ok(self.session.clone())
    }

    fn save_session(&mut self, snapshot: &SessionSnapshot) -> StorageResult<()> {
        self.session = Some(snapshot.clone());
        Ok(())
    }
}

impl DiagramStore for MemoryStore {
    fn list_diagrams(&self) -> StorageResult<Vec<DiagramSummary>> {
        Ok(self.diagrams.iter().map(DiagramSummary::from).collect())
    }

    fn get_diagram(&self, id: DiagramId) -> StorageResult<Option<SavedDiagram>> {
        Ok(self.diagrams.iter().find(|d| d.id == id).cloned())
    }

    fn create_diagram(&mut self, diagram: NewDiagram) -> StorageResult<SavedDiagram> {
        let saved = diagram.into_saved(Utc::now());
        self.diagrams.push(saved.clone());
        Ok(saved)
    }

    fn update_diagram(
        &mut self,
        id: DiagramId,
        diagram: NewDiagram,
    ) -> StorageResult<SavedDiagram> {
        let slot = self
            .diagrams
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StorageError::NotFound(id))?;
        slot.replace(diagram, Utc::now());
        Ok(slot.clone())
    }

    fn delete_diagram(&mut self, id: DiagramId) -> StorageResult<()> {
        self.diagrams.retain(|d| d.id != id);
        Ok(())
    }
}
