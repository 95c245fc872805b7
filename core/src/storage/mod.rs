//! Persistence boundary.
//!
//! The editor hands snapshots to a [`SessionStore`] on every commit and reads
//! one back on start. Named diagrams live in a [`DiagramStore`]. Failures are
//! reported as [`StorageError`] and never touch in-memory editor state.

pub mod records;
pub mod json_file;
pub mod memory;


pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use records::{
    DiagramId, DiagramSummary, NewDiagram, SavedDiagram, SavedSegment, SessionSnapshot,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Diagram {0} not found")]
    NotFound(DiagramId),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Load-on-start / save-on-commit storage for the working session.
pub trait SessionStore {
    /// `Ok(None)` when nothing was saved yet.
    fn load_session(&self) -> StorageResult<Option<SessionSnapshot>>;

    fn save_session(&mut self, snapshot: &SessionSnapshot) -> StorageResult<()>;
}

/// Library of named diagrams.
pub trait DiagramStore {
    fn list_diagrams(&self) -> StorageResult<Vec<DiagramSummary>>;

    fn get_diagram(&self, id: DiagramId) -> StorageResult<Option<SavedDiagram>>;

    fn create_diagram(&mut self, diagram: NewDiagram) -> StorageResult<SavedDiagram>;

    fn update_diagram(&mut self, id: DiagramId, diagram: NewDiagram)
        -> StorageResult<SavedDiagram>;

    /// Deleting an unknown id is not an error.
    fn delete_diagram(&mut self, id: DiagramId) -> StorageResult<()>;
}
