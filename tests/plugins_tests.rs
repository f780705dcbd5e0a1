use std::cell::RefCell;
use std::rc::Rc;

use grid_rs::GridError;
use grid_rs::api::GridEngine;
use grid_rs::core::{ColumnDef, PinSide};
use grid_rs::extensions::{GridContext, GridEvent, GridPlugin};
use grid_rs::interaction::{ResizeInteractionMode, ResizeMode};
use serde_json::{Value, json};

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(GridEvent, GridContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(GridEvent, GridContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl GridPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &GridEvent, context: &GridContext) {
        self.events
            .borrow_mut()
            .push((event.clone(), context.clone()));
    }
}

fn event_kind(event: &GridEvent) -> &'static str {
    match event {
        GridEvent::VisibilityChanged { .. } => "visibility",
        GridEvent::OrderChanged { .. } => "order",
        GridEvent::PinningChanged { .. } => "pinning",
        GridEvent::ResizeStarted { .. } => "resize_start",
        GridEvent::ColumnResized { .. } => "resized",
        GridEvent::ResizeEnded { .. } => "resize_end",
        GridEvent::WidthsReset { .. } => "widths_reset",
        GridEvent::RowsReplaced { .. } => "rows",
        GridEvent::StateRestored => "restored",
    }
}

fn engine() -> GridEngine<Value> {
    GridEngine::new(
        vec![ColumnDef::accessor_key("name"), ColumnDef::accessor_key("age")],
        vec![json!({"name": "Ana", "age": 5})],
        None,
    )
    .expect("engine init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.set_visibility("age", false).expect("hide");
    engine.set_order(["age", "name"]);
    engine.pin("name", Some(PinSide::Left)).expect("pin");
    engine
        .resize("name", 10.0, ResizeMode::OnCommit)
        .expect("buffer");
    engine.end_resize();
    engine.reset_column_width("name").expect("reset name");
    engine.reset_all_widths();
    engine.set_rows(Vec::new());
    let snapshot = engine.snapshot_state();
    engine.restore_state(snapshot).expect("restore");

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "visibility",
            "order",
            "pinning",
            "resize_start",
            "resized",
            "resize_end",
            "widths_reset",
            "widths_reset",
            "rows",
            "restored",
        ]
    );
}

#[test]
fn context_reflects_committed_state() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.set_visibility("age", false).expect("hide");
    engine.start_resize("name").expect("start");

    let events = events.borrow();
    let (_, hidden) = &events[0];
    assert_eq!(hidden.state_version, 1);
    assert_eq!(hidden.leaf_count, 2);
    assert_eq!(hidden.visible_leaf_count, 1);
    assert_eq!(hidden.row_count, 1);
    assert_eq!(hidden.resize_mode, ResizeInteractionMode::Idle);

    let (event, started) = &events[1];
    assert_eq!(
        event,
        &GridEvent::ResizeStarted {
            column_id: "name".to_owned()
        }
    );
    assert_eq!(started.resize_mode, ResizeInteractionMode::Dragging);
    assert_eq!(started.resizing_column.as_deref(), Some("name"));
}

#[test]
fn failed_commands_emit_nothing() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    assert!(engine.set_visibility("ghost", false).is_err());
    assert!(engine.resize("ghost", 1.0, ResizeMode::Live).is_err());
    assert!(events.borrow().is_empty());
}

#[test]
fn duplicate_and_empty_plugin_ids_are_rejected() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));

    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("first register");
    let duplicate = engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect_err("duplicate id");
    assert!(matches!(duplicate, GridError::InvalidData(_)));
    assert!(
        engine
            .register_plugin(Box::new(RecordingPlugin::new("", events.clone())))
            .is_err()
    );

    assert_eq!(engine.plugin_count(), 1);
    assert!(engine.has_plugin("recorder"));
    assert!(engine.unregister_plugin("recorder"));
    assert!(!engine.unregister_plugin("recorder"));
    assert_eq!(engine.plugin_count(), 0);
}

#[test]
fn width_resets_report_reset_columns() {
    let mut engine = engine();
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine
        .resize("name", 30.0, ResizeMode::Live)
        .expect("grow name");
    engine.reset_all_widths();
    engine.reset_column_width("name").expect("reset name");

    let events = events.borrow();
    assert_eq!(events.len(), 3);
    let (all, all_context) = &events[1];
    assert_eq!(
        all,
        &GridEvent::WidthsReset {
            column_ids: vec!["name".to_owned(), "age".to_owned()]
        }
    );
    assert_eq!(all_context.state_version, 2);
    let (single, single_context) = &events[2];
    assert_eq!(
        single,
        &GridEvent::WidthsReset {
            column_ids: vec!["name".to_owned()]
        }
    );
    assert_eq!(single_context.state_version, 3);
    assert_eq!(engine.column_width("name"), Some(150.0));
}
