use super::records::{DiagramId, DiagramSummary, NewDiagram, SavedDiagram, SessionSnapshot};
use super::{DiagramStore, SessionStore, StorageError, StorageResult};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const SESSION_FILE: &str = "session.json";
const DIAGRAMS_FILE: &str = "diagrams.json";

/// Pretty-printed JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl JsonFileStore {
    /// Opens `dir`, creating it when missing.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn diagrams_path(&self) -> PathBuf {
        self.dir.join(DIAGRAMS_FILE)
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(path, e)),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Parse {
                path: path.display().to_string(),
                source,
            })
    }

    /// Writes through a temporary file so a crash never leaves half a file.
    fn write_json<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StorageError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| io_error(path, e))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    fn read_diagrams(&self) -> StorageResult<Vec<SavedDiagram>> {
        Ok(Self::read_json(&self.diagrams_path())?.unwrap_or_default())
    }

    fn write_diagrams(&self, diagrams: &[SavedDiagram]) -> StorageResult<()> {
        Self::write_json(&self.diagrams_path(), &diagrams)
    }
}

impl SessionStore for JsonFileStore {
    fn load_session(&self) -> StorageResult<Option<SessionSnapshot>> {
        Self::read_json(&self.session_path())
    }

    fn save_session(&mut self, snapshot: &SessionSnapshot) -> StorageResult<()> {
        Self::write_json(&self.session_path(), snapshot)
    }
}

impl DiagramStore for JsonFileStore {
    fn list_diagrams(&self) -> StorageResult<Vec<DiagramSummary>> {
        Ok(self.read_diagrams()?.iter().map(DiagramSummary::from).collect())
    }

    fn get_diagram(&self, id: DiagramId) -> StorageResult<Option<SavedDiagram>> {
        Ok(self.read_diagrams()?.into_iter().find(|d| d.id == id))
    }

    fn create_diagram(&mut self, diagram: NewDiagram) -> StorageResult<SavedDiagram> {
        let mut diagrams = self.read_diagrams()?;
        let saved = diagram.into_saved(Utc::now());
        diagrams.push(saved.clone());
        self.write_diagrams(&diagrams)?;
        Ok(saved)
    }

    fn update_diagram(
        &mut self,
        id: DiagramId,
        diagram: NewDiagram,
    ) -> StorageResult<SavedDiagram> {
        let mut diagrams = self.read_diagrams()?;
        let slot = diagrams
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StorageError::NotFound(id))?;
        slot.replace(diagram, Utc::now());
        let saved = slot.clone();
        self.write_diagrams(&diagrams)?;
        Ok(saved)
    }

    fn delete_diagram(&mut self, id: DiagramId) -> StorageResult<()> {
        let mut diagrams = self.read_diagrams()?;
        let before = diagrams.len();
        diagrams.retain(|d| d.id != id);
        if diagrams.len() != before {
            self.write_diagrams(&diagrams)?;
        }
        Ok(())
    }
}
