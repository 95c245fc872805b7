use crate::config::EditorConfig;
use crate::editor::{Editor, EngineError};
use crate::region::RegionId;
use crate::segment::SegmentId;
use crate::storage::{
    DiagramStore, JsonFileStore, MemoryStore, SavedSegment, SessionSnapshot, SessionStore,
};

fn populated() -> Editor {
    let mut editor = Editor::default();
    let a = editor.add_segment(0.0, 0.0).unwrap().id;
    let b = editor.add_segment(100.0, 0.0).unwrap().id;
    let c = editor.add_segment(50.0, 60.0).unwrap().id;
    editor.rename_segment(b, "Buyers");
    editor.set_definition(c, Some("def-7".to_string()));
    editor.toggle_region(&RegionId::from_members(&[a, b]));
    editor.toggle_region(&RegionId::from_members(&[a, b, c]));
    editor
}

#[test]
fn test_snapshot_restore_round_trip_through_json() {
    let editor = populated();
    let json = serde_json::to_string(&editor.snapshot()).unwrap();
    let snapshot: SessionSnapshot = serde_json::from_str(&json).unwrap();

    let mut restored = Editor::default();
    restored.restore(&snapshot).unwrap();

    assert_eq!(restored.segments().len(), 3);
    for segment in editor.segments().iter() {
        let other = restored.segment(segment.id).expect("same ids");
        assert_eq!(other.name, segment.name);
        assert_eq!(other.code, segment.code);
        assert_eq!(other.circle, segment.circle);
        assert_eq!(other.definition_id, segment.definition_id);
        assert_eq!(other.parent_id, segment.parent_id);
    }
    assert_eq!(restored.selected_region_ids(), editor.selected_region_ids());
    assert_eq!(restored.formula(), editor.formula());
    assert_eq!(restored.render_order(), editor.render_order());
    assert_eq!(restored.next_segment_number(), 4);
}

#[test]
fn test_restore_rederives_hierarchy() {
    let snapshot = SessionSnapshot {
        segments: vec![
            SavedSegment {
                id: SegmentId::new(5),
                name: "Inner".into(),
                code: "E".into(),
                cx: 0.0,
                cy: 0.0,
                radius: 30.0,
                segment_definition_id: None,
            },
            SavedSegment {
                id: SegmentId::new(2),
                name: "Outer".into(),
                code: "B".into(),
                cx: 0.0,
                cy: 0.0,
                radius: 150.0,
                segment_definition_id: None,
            },
        ],
        // Stale counter gets bumped past the highest id
        next_id: 1,
        selected_region_ids: vec![],
    };

    let mut editor = Editor::default();
    editor.restore(&snapshot).unwrap();

    assert_eq!(editor.segment(SegmentId::new(5)).unwrap().parent_id, Some(SegmentId::new(2)));
    assert_eq!(editor.next_segment_number(), 6);
    assert_eq!(editor.add_segment(500.0, 0.0).unwrap().code, "F");
}

#[test]
fn test_invalid_snapshot_leaves_editor_untouched() {
    let mut editor = populated();
    let before = editor.snapshot();

    let mut bad = before.clone();
    bad.segments[1].radius = -4.0;
    assert!(matches!(editor.restore(&bad), Err(EngineError::InvalidSnapshot(_))));

    let mut dup = before.clone();
    dup.segments[1].id = dup.segments[0].id;
    assert!(matches!(editor.restore(&dup), Err(EngineError::InvalidSnapshot(_))));

    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_restore_rejects_counter_that_cannot_advance() {
    let mut editor = populated();
    let before = editor.snapshot();

    let json = serde_json::to_string(&before)
        .unwrap()
        .replace("\"next_id\":4", "\"next_id\":18446744073709551615");
    let maxed: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(maxed.next_id, u64::MAX);
    assert!(matches!(editor.restore(&maxed), Err(EngineError::InvalidSnapshot(_))));

    let mut last_id = before.clone();
    last_id.segments[0].id = SegmentId::new(u64::MAX);
    assert!(matches!(editor.restore(&last_id), Err(EngineError::InvalidSnapshot(_))));

    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_exhausted_counter_never_reuses_ids() {
    let mut snapshot = populated().snapshot();
    snapshot.next_id = u64::MAX - 1;
    let mut editor = Editor::default();
    editor.restore(&snapshot).unwrap();

    let last = editor.add_segment(0.0, 0.0).unwrap();
    assert_eq!(last.id, SegmentId::new(u64::MAX - 1));

    assert_eq!(editor.add_segment(10.0, 0.0), Err(EngineError::IdsExhausted));
    assert_eq!(editor.segments().len(), 4);
    assert_eq!(editor.segment(SegmentId::new(1)).unwrap().code, "A");
}

#[test]
fn test_restore_respects_segment_limit() {
    let editor = populated();
    let mut small = Editor::new(EditorConfig {
        max_segments: 2,
        ..EditorConfig::default()
    });
    assert_eq!(
        small.restore(&editor.snapshot()),
        Err(EngineError::SegmentLimit(2))
    );
}

#[test]
fn test_session_store_round_trip() {
    let editor = populated();
    let mut store = MemoryStore::new();
    editor.save_session_to(&mut store).unwrap();

    let mut fresh = Editor::default();
    assert!(fresh.load_session_from(&store).unwrap());
    assert_eq!(fresh.snapshot(), editor.snapshot());

    let mut empty = Editor::default();
    assert!(!empty.load_session_from(&MemoryStore::new()).unwrap());
}

#[test]
fn test_corrupt_session_surfaces_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("session.json"), "[1, 2").unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();

    let mut editor = populated();
    let before = editor.snapshot();
    match editor.load_session_from(&store) {
        Err(EngineError::Storage(message)) => assert!(message.contains("session.json")),
        other => panic!("expected storage error, got {:?}", other),
    }
    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_save_and_load_named_diagram() {
    let editor = populated();
    let mut store = MemoryStore::new();
    let saved = store
        .create_diagram(editor.to_new_diagram("Campaign", "Q3 audience"))
        .unwrap();

    let mut other = Editor::default();
    for _ in 0..5 {
        other.add_segment(0.0, 0.0).unwrap();
    }
    let loaded = store.get_diagram(saved.id).unwrap().unwrap();
    other.load_diagram(&loaded).unwrap();

    assert_eq!(other.segments().len(), 3);
    assert_eq!(other.selected_region_ids(), editor.selected_region_ids());
    // Counter never goes backwards
    assert_eq!(other.next_segment_number(), 6);
    assert_eq!(store.list_diagrams().unwrap()[0].name, "Campaign");
}

#[test]
fn test_stale_selected_ids_are_dropped_on_load() {
    let editor = populated();
    let mut snapshot = editor.snapshot();
    snapshot
        .selected_region_ids
        .push(RegionId::from("region_segment_1_segment_40"));

    let mut restored = Editor::default();
    restored.restore(&snapshot).unwrap();
    assert_eq!(restored.selected_region_ids(), editor.selected_region_ids());
}

#[test]
fn test_json_file_session_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path()).unwrap();
    let editor = populated();
    editor.save_session_to(&mut store).unwrap();

    assert!(store.load_session().unwrap().is_some());
    let mut fresh = Editor::default();
    assert!(fresh.load_session_from(&store).unwrap());
    assert_eq!(fresh.formula(), editor.formula());
}
