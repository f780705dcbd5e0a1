use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use crate::core::ColumnTree;
use crate::error::{GridError, GridResult};

use super::{GridEngineConfig, GridState, GridStatePatch};

pub(super) fn validate_engine_config(config: GridEngineConfig) -> GridResult<GridEngineConfig> {
    if !config.min_column_width.is_finite() || config.min_column_width < 0.0 {
        return Err(GridError::Configuration(
            "min column width must be finite and >= 0".to_owned(),
        ));
    }
    if let Some(max_width) = config.max_column_width {
        if max_width.is_nan() || max_width < config.min_column_width {
            return Err(GridError::Configuration(
                "max column width must be >= min column width".to_owned(),
            ));
        }
    }
    if !config.default_column_width.is_finite() || config.default_column_width <= 0.0 {
        return Err(GridError::Configuration(
            "default column width must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

/// Default state: everything visible, declaration order, no pins, default widths.
pub(super) fn default_state<R>(tree: &ColumnTree<R>) -> GridState {
    let widths = tree
        .leaf_slots()
        .iter()
        .map(|slot| {
            let node = tree.node(*slot);
            (node.id().to_owned(), node.sizing().default_width)
        })
        .collect();
    GridState {
        visibility: IndexMap::new(),
        order: tree.leaf_ids(),
        pinning: IndexMap::new(),
        widths,
    }
}

/// Resolves a requested leaf order against the tree.
///
/// Unknown, non-leaf and repeated ids are dropped. Leaves missing from the
/// request follow, in their `prior` relative order; leaves missing from
/// both keep declaration order.
pub(super) fn normalize_order<'a, R>(
    tree: &ColumnTree<R>,
    requested: impl IntoIterator<Item = &'a str>,
    prior: &[String],
) -> Vec<String> {
    let mut resolved: IndexSet<String> = IndexSet::new();
    for id in requested {
        if tree.is_leaf_id(id) {
            resolved.insert(id.to_owned());
        }
    }
    for id in prior {
        if tree.is_leaf_id(id) {
            resolved.insert(id.clone());
        }
    }
    for id in tree.leaf_ids() {
        resolved.insert(id);
    }
    resolved.into_iter().collect()
}

/// Applies a partial state on top of `base` using the rules shared by
/// construction and [`super::GridEngine::restore_state`].
///
/// Entries naming unknown columns or columns that forbid the setting are
/// dropped with a warning; non-finite widths reject the whole patch.
pub(super) fn resolve_state<R>(
    tree: &ColumnTree<R>,
    config: GridEngineConfig,
    patch: GridStatePatch,
    base: &GridState,
) -> GridResult<GridState> {
    let visibility = match patch.visibility {
        None => base.visibility.clone(),
        Some(requested) => {
            let mut resolved = IndexMap::new();
            for (id, visible) in requested {
                let Some(node) = tree.get(&id).filter(|node| node.is_leaf()) else {
                    warn!(column_id = %id, "dropping visibility entry for unknown leaf column");
                    continue;
                };
                if visible {
                    continue;
                }
                if !config.enable_hiding || !node.is_hideable() {
                    warn!(column_id = %id, "dropping hidden entry for non-hideable column");
                    continue;
                }
                resolved.insert(id, false);
            }
            resolved
        }
    };

    let order = match patch.order {
        None => base.order.clone(),
        Some(requested) => normalize_order(tree, requested.iter().map(String::as_str), &base.order),
    };

    let pinning = match patch.pinning {
        None => base.pinning.clone(),
        Some(requested) => {
            let mut resolved = IndexMap::new();
            for (id, side) in requested {
                let Some(node) = tree.get(&id).filter(|node| node.is_leaf()) else {
                    warn!(column_id = %id, "dropping pin entry for unknown leaf column");
                    continue;
                };
                if !config.enable_pinning || !node.is_pinnable() {
                    warn!(column_id = %id, "dropping pin entry for non-pinnable column");
                    continue;
                }
                resolved.insert(id, side);
            }
            resolved
        }
    };

    let mut widths = base.widths.clone();
    if let Some(requested) = patch.widths {
        for (id, width) in requested {
            let Some(node) = tree.get(&id).filter(|node| node.is_leaf()) else {
                warn!(column_id = %id, "dropping width entry for unknown leaf column");
                continue;
            };
            if !width.is_finite() {
                return Err(GridError::InvalidData(format!(
                    "width for column `{id}` must be finite"
                )));
            }
            let clamped = node.sizing().clamp(width);
            widths.insert(id, clamped);
        }
    }

    Ok(GridState {
        visibility,
        order,
        pinning,
        widths,
    })
}
