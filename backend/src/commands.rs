//! Websocket command frames: `NAME` or `NAME:{json}`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use venn_core::region::RegionId;
use venn_core::segment::SegmentId;
use venn_core::storage::DiagramId;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Center {
    pub cx: f64,
    pub cy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SegmentTarget {
    pub id: SegmentId,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rename {
    pub id: SegmentId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    pub id: SegmentId,
    #[serde(default)]
    pub definition_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Grab {
    pub id: SegmentId,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionTarget {
    pub id: RegionId,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiagramTarget {
    pub id: DiagramId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddSegment(Center),
    RemoveSegment(SegmentTarget),
    RenameSegment(Rename),
    SetDefinition(Definition),
    DragStart(Grab),
    Drag(Pointer),
    /// Pointer position on release, when the client sends one.
    DragEnd(Option<Pointer>),
    ResizeStart(SegmentTarget),
    Resize(Pointer),
    ResizeEnd,
    SelectSegment(SegmentTarget),
    DeselectAll,
    ToggleRegion(RegionTarget),
    Click(Pointer),
    ListDiagrams,
    SaveDiagram(SaveRequest),
    LoadDiagram(DiagramTarget),
    DeleteDiagram(DiagramTarget),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddSegment(_) => "ADD_SEGMENT",
            Command::RemoveSegment(_) => "REMOVE_SEGMENT",
            Command::RenameSegment(_) => "RENAME_SEGMENT",
            Command::SetDefinition(_) => "SET_DEFINITION",
            Command::DragStart(_) => "DRAG_START",
            Command::Drag(_) => "DRAG",
            Command::DragEnd(_) => "DRAG_END",
            Command::ResizeStart(_) => "RESIZE_START",
            Command::Resize(_) => "RESIZE",
            Command::ResizeEnd => "RESIZE_END",
            Command::SelectSegment(_) => "SELECT_SEGMENT",
            Command::DeselectAll => "DESELECT_ALL",
            Command::ToggleRegion(_) => "TOGGLE_REGION",
            Command::Click(_) => "CLICK",
            Command::ListDiagrams => "LIST_DIAGRAMS",
            Command::SaveDiagram(_) => "SAVE_DIAGRAM",
            Command::LoadDiagram(_) => "LOAD_DIAGRAM",
            Command::DeleteDiagram(_) => "DELETE_DIAGRAM",
        }
    }

    /// Pointer-move frames arrive in bursts and are logged at debug level.
    pub fn is_pointer_move(&self) -> bool {
        matches!(self, Command::Drag(_) | Command::Resize(_))
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command {0:?}")]
    Unknown(String),

    #[error("{0} requires a JSON payload")]
    MissingPayload(&'static str),

    #[error("Bad {command} payload: {source}")]
    BadPayload {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn payload<T: DeserializeOwned>(
    command: &'static str,
    json: Option<&str>,
) -> Result<T, CommandError> {
    let json = json.ok_or(CommandError::MissingPayload(command))?;
    serde_json::from_str(json).map_err(|source| CommandError::BadPayload { command, source })
}

fn optional_payload<T: DeserializeOwned>(
    command: &'static str,
    json: Option<&str>,
) -> Result<Option<T>, CommandError> {
    match json {
        None => Ok(None),
        Some(_) => payload(command, json).map(Some),
    }
}

pub fn parse_command(text: &str) -> Result<Command, CommandError> {
    let text = text.trim();
    let (name, json) = match text.split_once(':') {
        Some((name, json)) => (name, Some(json.trim()).filter(|j| !j.is_empty())),
        None => (text, None),
    };

    let command = match name {
        "ADD_SEGMENT" => Command::AddSegment(payload("ADD_SEGMENT", json)?),
        "REMOVE_SEGMENT" => Command::RemoveSegment(payload("REMOVE_SEGMENT", json)?),
        "RENAME_SEGMENT" => Command::RenameSegment(payload("RENAME_SEGMENT", json)?),
        "SET_DEFINITION" => Command::SetDefinition(payload("SET_DEFINITION", json)?),
        "DRAG_START" => Command::DragStart(payload("DRAG_START", json)?),
        "DRAG" => Command::Drag(payload("DRAG", json)?),
        "DRAG_END" => Command::DragEnd(optional_payload("DRAG_END", json)?),
        "RESIZE_START" => Command::ResizeStart(payload("RESIZE_START", json)?),
        "RESIZE" => Command::Resize(payload("RESIZE", json)?),
        "RESIZE_END" => Command::ResizeEnd,
        "SELECT_SEGMENT" => Command::SelectSegment(payload("SELECT_SEGMENT", json)?),
        "DESELECT_ALL" => Command::DeselectAll,
        "TOGGLE_REGION" => Command::ToggleRegion(payload("TOGGLE_REGION", json)?),
        "CLICK" => Command::Click(payload("CLICK", json)?),
        "LIST_DIAGRAMS" => Command::ListDiagrams,
        "SAVE_DIAGRAM" => Command::SaveDiagram(payload("SAVE_DIAGRAM", json)?),
        "LOAD_DIAGRAM" => Command::LoadDiagram(payload("LOAD_DIAGRAM", json)?),
        "DELETE_DIAGRAM" => Command::DeleteDiagram(payload("DELETE_DIAGRAM", json)?),
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}
