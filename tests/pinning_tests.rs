use grid_rs::GridError;
use grid_rs::api::{GridEngine, GridEngineConfig};
use grid_rs::core::{ColumnDef, ColumnRegion, PinSide};
use serde_json::Value;

fn columns() -> Vec<ColumnDef<Value>> {
    vec![
        ColumnDef::accessor_key("name"),
        ColumnDef::accessor_key("age"),
        ColumnDef::accessor_key("status"),
    ]
}

fn engine() -> GridEngine<Value> {
    GridEngine::new(columns(), Vec::new(), None).expect("engine init")
}

#[test]
fn pin_left_moves_column_to_front() {
    let mut engine = engine();
    engine.pin("age", Some(PinSide::Left)).expect("pin age");

    assert_eq!(engine.visible_leaf_ids(), vec!["age", "name", "status"]);
    assert_eq!(engine.column_pin("age"), Some(PinSide::Left));
    assert!(engine.is_column_pinned("age"));
    assert_eq!(engine.pinned_column_ids(PinSide::Left), vec!["age"]);
}

#[test]
fn pinning_to_other_side_replaces_previous_pin() {
    let mut engine = engine();
    engine.pin("name", Some(PinSide::Left)).expect("pin left");
    engine.pin("name", Some(PinSide::Right)).expect("pin right");

    assert_eq!(engine.column_pin("name"), Some(PinSide::Right));
    assert!(engine.pinned_column_ids(PinSide::Left).is_empty());
    assert_eq!(engine.visible_leaf_ids(), vec!["age", "status", "name"]);
}

#[test]
fn pinned_runs_follow_column_order() {
    let mut engine = engine();
    engine.set_order(["status", "age", "name"]);
    engine.pin("name", Some(PinSide::Left)).expect("pin name");
    engine.pin("status", Some(PinSide::Left)).expect("pin status");

    assert_eq!(engine.visible_leaf_ids(), vec!["status", "name", "age"]);
}

#[test]
fn unpin_and_reset() {
    let mut engine = engine();
    engine.pin("age", Some(PinSide::Left)).expect("pin age");
    engine.pin("status", Some(PinSide::Right)).expect("pin status");
    engine.pin("age", None).expect("unpin age");

    assert_eq!(engine.column_pin("age"), None);
    assert_eq!(engine.state().pinning.len(), 1);

    engine.reset_pinning();
    assert!(engine.state().pinning.is_empty());
    assert_eq!(engine.visible_leaf_ids(), vec!["name", "age", "status"]);
}

#[test]
fn group_pin_cascades_to_pinnable_leaves() {
    let mut engine: GridEngine<Value> = GridEngine::new(
        vec![
            ColumnDef::accessor_key("name"),
            ColumnDef::group(
                "Details",
                vec![
                    ColumnDef::accessor_key("age"),
                    ColumnDef::accessor_key("status").with_pinnable(false),
                ],
            ),
        ],
        Vec::new(),
        None,
    )
    .expect("engine init");

    engine.pin("Details", Some(PinSide::Left)).expect("pin group");

    assert_eq!(engine.column_pin("age"), Some(PinSide::Left));
    assert_eq!(engine.column_pin("status"), None);
    assert_eq!(engine.column_pin("Details"), Some(PinSide::Left));
    assert_eq!(engine.visible_leaf_ids(), vec!["age", "name", "status"]);

    let err = engine
        .pin("status", Some(PinSide::Right))
        .expect_err("status is not pinnable");
    assert_eq!(err, GridError::PinNotAllowed("status".to_owned()));
}

#[test]
fn pinning_disabled_by_config() {
    let config = GridEngineConfig::default().with_pinning(false);
    let mut engine =
        GridEngine::with_config(config, columns(), Vec::new(), None).expect("engine init");

    assert!(!engine.can_pin("age"));
    assert!(matches!(
        engine.pin("age", Some(PinSide::Left)),
        Err(GridError::PinNotAllowed(_))
    ));
    assert_eq!(engine.state_version(), 0);
}

#[test]
fn regions_split_visible_columns() {
    let mut engine = engine();
    engine.pin("status", Some(PinSide::Left)).expect("pin status");
    engine.pin("name", Some(PinSide::Right)).expect("pin name");

    let ids = |region| -> Vec<String> {
        engine
            .region_leaf_columns(region)
            .into_iter()
            .map(|column| column.id().to_owned())
            .collect()
    };
    assert_eq!(ids(ColumnRegion::Left), vec!["status"]);
    assert_eq!(ids(ColumnRegion::Center), vec!["age"]);
    assert_eq!(ids(ColumnRegion::Right), vec!["name"]);
    assert_eq!(engine.region_width(ColumnRegion::Left), 150.0);
}

#[test]
fn layout_reports_sticky_offsets() {
    let mut engine: GridEngine<Value> = GridEngine::new(
        vec![
            ColumnDef::accessor_key("name").with_width(100.0),
            ColumnDef::accessor_key("age").with_width(60.0),
            ColumnDef::accessor_key("status").with_width(80.0),
            ColumnDef::accessor_key("progress").with_width(50.0),
        ],
        Vec::new(),
        None,
    )
    .expect("engine init");
    engine.pin("name", Some(PinSide::Left)).expect("pin");
    engine.pin("age", Some(PinSide::Left)).expect("pin");
    engine.pin("progress", Some(PinSide::Right)).expect("pin");

    let layout = engine.column_layout();
    let summary: Vec<(&str, f64, Option<f64>)> = layout
        .iter()
        .map(|column| (column.column_id.as_str(), column.start, column.sticky_offset))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("name", 0.0, Some(0.0)),
            ("age", 100.0, Some(100.0)),
            ("status", 160.0, None),
            ("progress", 240.0, Some(0.0)),
        ]
    );
    assert_eq!(engine.total_width(), 290.0);
}
