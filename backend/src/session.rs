//! One editor plus its store, driven by parsed commands.

use serde::Serialize;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use venn_core::editor::Interaction;
use venn_core::region::Region;
use venn_core::segment::Segment;
use venn_core::storage::{DiagramStore, DiagramSummary, SessionStore, StorageError};
use venn_core::{Editor, EditorConfig, EngineError};

use crate::commands::{Command, CommandError, Pointer};

/// Format an error as a JSON message for the frontend
pub fn format_error(code: &str, message: &str, severity: &str) -> String {
    format!(
        "ERROR_UPDATE:{}",
        json!({
            "code": code,
            "message": message,
            "severity": severity
        })
    )
}

/// Everything the client draws, segments in render order.
#[derive(Debug, Clone, Serialize)]
pub struct StateView {
    pub segments: Vec<Segment>,
    pub regions: Vec<Region>,
    pub formula: String,
    pub interaction: Interaction,
    pub next_segment_number: u64,
}

impl StateView {
    pub fn of(editor: &Editor) -> Self {
        Self {
            segments: editor
                .segments_in_render_order()
                .into_iter()
                .cloned()
                .collect(),
            regions: editor.regions().to_vec(),
            formula: editor.formula(),
            interaction: *editor.interaction(),
            next_segment_number: editor.next_segment_number(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Reply {
    State(StateView),
    Diagrams(Vec<DiagramSummary>),
    Error {
        code: &'static str,
        message: String,
        severity: &'static str,
    },
}

impl Reply {
    fn error(code: &'static str, message: impl ToString, severity: &'static str) -> Self {
        Reply::Error {
            code,
            message: message.to_string(),
            severity,
        }
    }

    pub fn bad_command(err: &CommandError) -> Self {
        Reply::error("BAD_COMMAND", err, "warning")
    }

    pub fn to_frame(&self) -> String {
        match self {
            Reply::State(view) => format!(
                "STATE_UPDATE:{}",
                serde_json::to_string(view).unwrap_or("{}".to_string())
            ),
            Reply::Diagrams(list) => format!(
                "DIAGRAMS_UPDATE:{}",
                serde_json::to_string(list).unwrap_or("[]".to_string())
            ),
            Reply::Error {
                code,
                message,
                severity,
            } => format_error(code, message, severity),
        }
    }
}

fn engine_error(err: EngineError) -> Reply {
    match err {
        EngineError::SegmentLimit(_) => Reply::error("SEGMENT_LIMIT", err, "warning"),
        EngineError::InvalidGeometry(_) => Reply::error("INVALID_GEOMETRY", err, "warning"),
        EngineError::InvalidSnapshot(_) => Reply::error("INVALID_DIAGRAM", err, "error"),
        EngineError::IdsExhausted => Reply::error("IDS_EXHAUSTED", err, "error"),
        EngineError::Storage(_) => Reply::error("STORAGE_ERROR", err, "error"),
    }
}

fn storage_error(err: StorageError) -> Reply {
    match err {
        StorageError::NotFound(_) => Reply::error("NOT_FOUND", err, "warning"),
        _ => Reply::error("STORAGE_ERROR", err, "error"),
    }
}

/// What a command did to the editor.
enum Outcome {
    Unchanged,
    /// Geometry moved mid-interaction; nothing to persist yet.
    Preview,
    /// Snapshot-relevant change.
    Saved,
    Diagrams(Vec<DiagramSummary>),
}

impl From<bool> for Outcome {
    fn from(changed: bool) -> Self {
        if changed {
            Outcome::Saved
        } else {
            Outcome::Unchanged
        }
    }
}

pub struct Session<S> {
    editor: Editor,
    store: S,
}

impl<S: SessionStore + DiagramStore> Session<S> {
    /// Restores the last saved session from `store`. An unreadable session is
    /// logged and replaced by an empty editor.
    pub fn open(config: EditorConfig, store: S) -> Self {
        let mut editor = Editor::new(config);
        match editor.load_session_from(&store) {
            Ok(true) => info!("Restored session with {} segments", editor.segments().len()),
            Ok(false) => info!("No saved session, starting empty"),
            Err(e) => warn!("Ignoring saved session: {}", e),
        }
        Self { editor, store }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> Reply {
        Reply::State(StateView::of(&self.editor))
    }

    /// Runs one command and returns the frames to send back, in order.
    pub fn apply(&mut self, command: Command) -> Vec<Reply> {
        if command.is_pointer_move() {
            debug!("Applying {}", command.name());
        } else {
            info!("Applying {}", command.name());
        }

        let outcome = match self.run(command) {
            Ok(outcome) => outcome,
            Err(reply) => return vec![reply],
        };

        match outcome {
            Outcome::Unchanged => Vec::new(),
            Outcome::Preview => vec![self.state()],
            Outcome::Saved => {
                let mut replies = vec![self.state()];
                if let Err(e) = self.editor.save_session_to(&mut self.store) {
                    warn!("Autosave failed: {}", e);
                    replies.push(engine_error(e));
                }
                replies
            }
            Outcome::Diagrams(list) => vec![Reply::Diagrams(list)],
        }
    }

    fn run(&mut self, command: Command) -> Result<Outcome, Reply> {
        let outcome = match command {
            Command::AddSegment(c) => {
                let segment = self.editor.add_segment(c.cx, c.cy).map_err(engine_error)?;
                info!("Added {} ({})", segment.id, segment.code);
                Outcome::Saved
            }
            Command::RemoveSegment(t) => self.editor.remove_segment(t.id).into(),
            Command::RenameSegment(r) => self.editor.rename_segment(r.id, &r.name).into(),
            Command::SetDefinition(d) => self.editor.set_definition(d.id, d.definition_id).into(),
            Command::DragStart(g) => self.editor.start_drag(g.id, g.x, g.y).into(),
            Command::Drag(p) => {
                if !self.editor.is_dragging() {
                    return Ok(Outcome::Unchanged);
                }
                self.editor.drag_to(p.x, p.y);
                Outcome::Preview
            }
            Command::DragEnd(pointer) => self.finish_drag(pointer),
            Command::ResizeStart(t) => self.editor.start_resize(t.id).into(),
            Command::Resize(p) => {
                if !self.editor.is_resizing() {
                    return Ok(Outcome::Unchanged);
                }
                self.editor.resize_to(p.x, p.y);
                Outcome::Preview
            }
            Command::ResizeEnd => {
                if !self.editor.is_resizing() {
                    return Ok(Outcome::Unchanged);
                }
                self.editor.end_resize();
                Outcome::Saved
            }
            Command::SelectSegment(t) => self.editor.select_segment(t.id).into(),
            Command::DeselectAll => {
                self.editor.deselect_all();
                Outcome::Saved
            }
            Command::ToggleRegion(t) => self.editor.toggle_region(&t.id).is_some().into(),
            Command::Click(p) => self.editor.click(p.x, p.y).is_some().into(),
            Command::ListDiagrams => Outcome::Diagrams(self.list_diagrams()?),
            Command::SaveDiagram(req) => {
                let diagram = self.editor.to_new_diagram(&req.name, &req.description);
                let saved = self.store.create_diagram(diagram).map_err(storage_error)?;
                info!("Saved diagram {} ({:?})", saved.id, saved.name);
                Outcome::Diagrams(self.list_diagrams()?)
            }
            Command::LoadDiagram(t) => {
                let diagram = self
                    .store
                    .get_diagram(t.id)
                    .map_err(storage_error)?
                    .ok_or_else(|| storage_error(StorageError::NotFound(t.id)))?;
                self.editor.load_diagram(&diagram).map_err(engine_error)?;
                info!("Loaded diagram {} ({:?})", diagram.id, diagram.name);
                Outcome::Saved
            }
            Command::DeleteDiagram(t) => {
                self.store.delete_diagram(t.id).map_err(storage_error)?;
                info!("Deleted diagram {}", t.id);
                Outcome::Diagrams(self.list_diagrams()?)
            }
        };
        Ok(outcome)
    }

    /// A release after real movement selects the dragged segment. A release
    /// without movement is a click on whatever region lies under the pointer.
    fn finish_drag(&mut self, pointer: Option<Pointer>) -> Outcome {
        let Some(id) = self.editor.interaction().segment_id().filter(|_| self.editor.is_dragging())
        else {
            return Outcome::Unchanged;
        };
        if self.editor.end_drag() {
            self.editor.select_segment(id);
        } else if let Some(p) = pointer {
            self.editor.click(p.x, p.y);
        }
        Outcome::Saved
    }

    fn list_diagrams(&self) -> Result<Vec<DiagramSummary>, Reply> {
        self.store.list_diagrams().map_err(storage_error)
    }
}

/// Applies `command` to a session shared between connections. Store writes
/// are blocking file IO, so they run with the worker thread handed off to the
/// runtime. Needs the multi-threaded runtime.
pub async fn apply_shared<S>(session: &Mutex<Session<S>>, command: Command) -> Vec<Reply>
where
    S: SessionStore + DiagramStore,
{
    let mut session = session.lock().await;
    tokio::task::block_in_place(|| session.apply(command))
}
