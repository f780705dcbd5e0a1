use grid_rs::api::GridEngine;
use grid_rs::core::{ColumnDef, ColumnRegion, HeaderGroup, PinSide};
use serde_json::Value;

fn engine() -> GridEngine<Value> {
    GridEngine::new(
        vec![
            ColumnDef::accessor_key("firstName").with_header("First Name"),
            ColumnDef::group(
                "Info",
                vec![
                    ColumnDef::accessor_key("age"),
                    ColumnDef::group(
                        "More Info",
                        vec![
                            ColumnDef::accessor_key("visits"),
                            ColumnDef::accessor_key("status"),
                        ],
                    ),
                ],
            ),
        ],
        Vec::new(),
        None,
    )
    .expect("engine init")
}

fn row_summary(group: &HeaderGroup) -> Vec<(String, usize, bool)> {
    group
        .headers
        .iter()
        .map(|cell| (cell.id.clone(), cell.col_span, cell.is_placeholder))
        .collect()
}

fn owned(cells: &[(&str, usize, bool)]) -> Vec<(String, usize, bool)> {
    cells
        .iter()
        .map(|(id, span, placeholder)| ((*id).to_owned(), *span, *placeholder))
        .collect()
}

#[test]
fn nested_groups_build_one_row_per_depth() {
    let engine = engine();
    let groups = engine.header_groups();

    assert_eq!(groups.len(), 3);
    assert_eq!(
        row_summary(&groups[0]),
        owned(&[("0_firstName_placeholder", 1, true), ("0_Info", 3, false)])
    );
    assert_eq!(
        row_summary(&groups[1]),
        owned(&[
            ("1_firstName_placeholder", 1, true),
            ("1_age_placeholder", 1, true),
            ("1_More Info", 2, false),
        ])
    );
    assert_eq!(
        row_summary(&groups[2]),
        owned(&[
            ("2_firstName", 1, false),
            ("2_age", 1, false),
            ("2_visits", 1, false),
            ("2_status", 1, false),
        ])
    );

    let first = &groups[2].headers[0];
    assert_eq!(first.label.as_deref(), Some("First Name"));
    assert!(groups[0].headers[0].label.is_none());
}

#[test]
fn spans_track_visible_leaves() {
    let mut engine = engine();
    engine.set_visibility("visits", false).expect("hide visits");

    let groups = engine.header_groups();
    for group in &groups {
        assert_eq!(group.total_span(), 3);
    }
    let info = &groups[0].headers[1];
    assert_eq!(info.column_id, "Info");
    assert_eq!(info.col_span, 2);
    assert_eq!(info.leaf_column_ids, vec!["age", "status"]);
    assert_eq!(info.width, 300.0);
}

#[test]
fn hidden_group_disappears_from_header_rows() {
    let mut engine = engine();
    engine.set_visibility("Info", false).expect("hide group");

    let groups = engine.header_groups();
    assert_eq!(groups.len(), 3);
    for group in &groups {
        assert_eq!(group.headers.len(), 1);
        assert_eq!(group.headers[0].column_id, "firstName");
    }
}

#[test]
fn reordering_splits_groups_with_distinct_ids() {
    let mut engine = engine();
    engine.set_order(["age", "firstName", "visits", "status"]);

    let top = engine.header_groups().remove(0);
    let ids: Vec<&str> = top.headers.iter().map(|cell| cell.id.as_str()).collect();
    assert_eq!(ids, vec!["0_Info", "0_firstName_placeholder", "0_Info_1"]);
    assert_eq!(top.total_span(), 4);
}

#[test]
fn footer_rows_mirror_headers() {
    let engine = engine();
    let headers = engine.header_groups();
    let footers = engine.footer_groups();

    assert_eq!(footers.len(), headers.len());
    assert_eq!(footers[0], headers[2]);
    assert_eq!(footers[2], headers[0]);
}

#[test]
fn region_header_groups_only_cover_region_columns() {
    let mut engine = engine();
    engine
        .pin("firstName", Some(PinSide::Left))
        .expect("pin first");

    let left = engine.region_header_groups(ColumnRegion::Left);
    let center = engine.region_header_groups(ColumnRegion::Center);

    assert!(left.iter().all(|group| group.total_span() == 1));
    assert!(center.iter().all(|group| group.total_span() == 3));
    assert!(
        engine
            .region_header_groups(ColumnRegion::Right)
            .iter()
            .all(|group| group.headers.is_empty())
    );
}

#[test]
fn repeated_queries_hit_the_cache() {
    let mut engine = engine();
    let _ = engine.header_groups();
    let misses = engine.derived_cache_stats().misses;

    let _ = engine.header_groups();
    let stats = engine.derived_cache_stats();
    assert_eq!(stats.misses, misses);
    assert!(stats.hits >= 1);

    engine.set_visibility("age", false).expect("hide");
    let _ = engine.header_groups();
    assert!(engine.derived_cache_stats().misses > misses);
    assert_eq!(engine.derived_cache_stats().version, 1);
}
