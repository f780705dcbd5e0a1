use grid_rs::GridError;
use grid_rs::api::{GridEngine, GridEngineConfig};
use grid_rs::core::ColumnDef;
use serde_json::{Value, json};

fn columns() -> Vec<ColumnDef<Value>> {
    vec![
        ColumnDef::accessor_key("name").with_hideable(false),
        ColumnDef::group(
            "Details",
            vec![
                ColumnDef::accessor_key("age"),
                ColumnDef::accessor_key("status"),
            ],
        ),
    ]
}

fn engine() -> GridEngine<Value> {
    GridEngine::new(
        columns(),
        vec![json!({"name": "Ana", "age": 5, "status": "ok"})],
        None,
    )
    .expect("engine init")
}

#[test]
fn hiding_a_leaf_removes_it_from_visible_columns() {
    let mut engine = engine();
    engine.set_visibility("age", false).expect("hide age");

    assert_eq!(engine.visible_leaf_ids(), vec!["name", "status"]);
    assert!(!engine.is_column_visible("age"));
    assert!(engine.is_column_visible("Details"));
    assert!(!engine.is_all_columns_visible());
    assert!(engine.is_some_columns_visible());
    assert_eq!(engine.state().visibility.get("age"), Some(&false));
}

#[test]
fn showing_a_leaf_restores_canonical_state() {
    let mut engine = engine();
    engine.set_visibility("age", false).expect("hide");
    engine.set_visibility("age", true).expect("show");

    assert!(engine.state().visibility.is_empty());
    assert_eq!(engine.visible_leaf_ids(), vec!["name", "age", "status"]);
}

#[test]
fn group_visibility_applies_to_all_leaves() {
    let mut engine = engine();
    engine.set_visibility("Details", false).expect("hide group");

    assert_eq!(engine.visible_leaf_ids(), vec!["name"]);
    assert!(!engine.is_column_visible("Details"));
}

#[test]
fn non_hideable_column_rejects_hide() {
    let mut engine = engine();
    let err = engine
        .set_visibility("name", false)
        .expect_err("name is not hideable");

    assert_eq!(err, GridError::HideNotAllowed("name".to_owned()));
    assert_eq!(engine.state_version(), 0);
}

#[test]
fn unknown_column_is_reported_and_ignored() {
    let mut engine = engine();
    let err = engine
        .set_visibility("ghost", false)
        .expect_err("unknown column");

    assert_eq!(err, GridError::UnknownColumn("ghost".to_owned()));
    assert!(engine.state().visibility.is_empty());
}

#[test]
fn toggle_all_skips_non_hideable_columns() {
    let mut engine = engine();
    engine.toggle_all_visibility(false);

    assert_eq!(engine.state_version(), 1);
    assert_eq!(engine.visible_leaf_ids(), vec!["name"]);

    engine.toggle_all_visibility(true);
    assert_eq!(engine.state_version(), 2);
    assert!(engine.is_all_columns_visible());
    assert!(engine.state().visibility.is_empty());
}

#[test]
fn toggle_all_twice_returns_to_prior_state() {
    let mut engine = engine();
    let before = engine.state().clone();

    engine.toggle_all_visibility(false);
    engine.toggle_all_visibility(true);

    assert_eq!(engine.state(), &before);
}

#[test]
fn hiding_disabled_by_config() {
    let config = GridEngineConfig::default().with_hiding(false);
    let mut engine =
        GridEngine::with_config(config, columns(), Vec::new(), None).expect("engine init");

    assert!(matches!(
        engine.set_visibility("age", false),
        Err(GridError::HideNotAllowed(_))
    ));
    engine.toggle_all_visibility(false);
    assert!(engine.is_all_columns_visible());
}
