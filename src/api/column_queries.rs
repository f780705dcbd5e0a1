use std::rc::Rc;

use crate::core::{
    ColumnLayout, ColumnNode, ColumnRegion, HeaderGroup, LayoutColumn, PinSide,
    build_header_groups, compute_column_layout, footer_groups_from_headers, total_layout_width,
};

use super::GridEngine;

impl<R> GridEngine<R> {
    /// All leaf columns, depth-first, in declaration order.
    #[must_use]
    pub fn leaf_columns(&self) -> Vec<&ColumnNode<R>> {
        let tree = &self.core.model.tree;
        tree.leaf_slots().iter().map(|slot| tree.node(*slot)).collect()
    }

    /// Visible leaves in render order: left-pinned, unpinned, right-pinned,
    /// each run following the column order.
    #[must_use]
    pub fn visible_leaf_columns(&self) -> Vec<&ColumnNode<R>> {
        let tree = &self.core.model.tree;
        self.visible_leaf_slots()
            .iter()
            .map(|slot| tree.node(*slot))
            .collect()
    }

    #[must_use]
    pub fn visible_leaf_ids(&self) -> Vec<String> {
        self.visible_leaf_columns()
            .into_iter()
            .map(|column| column.id().to_owned())
            .collect()
    }

    /// Visible leaves of one split-layout region, in render order.
    #[must_use]
    pub fn region_leaf_columns(&self, region: ColumnRegion) -> Vec<&ColumnNode<R>> {
        let tree = &self.core.model.tree;
        self.region_leaf_slots(region)
            .into_iter()
            .map(|slot| tree.node(slot))
            .collect()
    }

    /// Header rows for the whole visible column set, top row first.
    #[must_use]
    pub fn header_groups(&self) -> Vec<HeaderGroup> {
        self.cached_header_groups(None).to_vec()
    }

    /// Header rows restricted to one region, for split layouts.
    #[must_use]
    pub fn region_header_groups(&self, region: ColumnRegion) -> Vec<HeaderGroup> {
        self.cached_header_groups(Some(region)).to_vec()
    }

    /// Footer rows: header rows in bottom-up order.
    #[must_use]
    pub fn footer_groups(&self) -> Vec<HeaderGroup> {
        footer_groups_from_headers(&self.cached_header_groups(None))
    }

    /// Horizontal placement of every visible leaf, including sticky offsets
    /// for pinned columns.
    #[must_use]
    pub fn column_layout(&self) -> Vec<ColumnLayout> {
        let version = self.core.model.version;
        self.core
            .runtime
            .cache
            .layout(version, || {
                let state = &self.core.model.state;
                let columns = self.visible_leaf_columns();
                let inputs: Vec<LayoutColumn<'_>> = columns
                    .iter()
                    .map(|column| LayoutColumn {
                        id: column.id(),
                        width: self.committed_leaf_width(column),
                        pin: state.pin_of(column.id()),
                    })
                    .collect();
                compute_column_layout(&inputs)
            })
            .to_vec()
    }

    /// Sum of committed widths of all visible leaves.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        total_layout_width(&self.column_layout())
    }

    #[must_use]
    pub fn region_width(&self, region: ColumnRegion) -> f64 {
        self.column_layout()
            .iter()
            .filter(|column| column.region() == region)
            .map(|column| column.width)
            .sum()
    }

    pub(super) fn visible_leaf_slots(&self) -> Rc<[usize]> {
        let version = self.core.model.version;
        self.core
            .runtime
            .cache
            .visible_leaves(version, || self.compute_visible_leaf_slots())
    }

    pub(super) fn region_leaf_slots(&self, region: ColumnRegion) -> Vec<usize> {
        let tree = &self.core.model.tree;
        let state = &self.core.model.state;
        self.visible_leaf_slots()
            .iter()
            .copied()
            .filter(|slot| ColumnRegion::from_pin(state.pin_of(tree.node(*slot).id())) == region)
            .collect()
    }

    pub(super) fn committed_leaf_width(&self, column: &ColumnNode<R>) -> f64 {
        self.core
            .model
            .state
            .width_of(column.id())
            .unwrap_or(column.sizing().default_width)
    }

    /// Leaf slots following `order`; leaves it misses keep declaration position.
    fn ordered_leaf_slots(&self) -> Vec<usize> {
        let tree = &self.core.model.tree;
        let mut seen = vec![false; tree.len()];
        let mut ordered = Vec::with_capacity(tree.leaf_slots().len());
        for id in &self.core.model.state.order {
            if let Some(slot) = tree.slot_of(id) {
                if tree.node(slot).is_leaf() && !seen[slot] {
                    seen[slot] = true;
                    ordered.push(slot);
                }
            }
        }
        for (position, &slot) in tree.leaf_slots().iter().enumerate() {
            if !seen[slot] {
                seen[slot] = true;
                ordered.insert(position.min(ordered.len()), slot);
            }
        }
        ordered
    }

    fn compute_visible_leaf_slots(&self) -> Vec<usize> {
        let tree = &self.core.model.tree;
        let state = &self.core.model.state;
        let mut left = Vec::new();
        let mut center = Vec::new();
        let mut right = Vec::new();
        for slot in self.ordered_leaf_slots() {
            let id = tree.node(slot).id();
            if !state.is_visible(id) {
                continue;
            }
            match state.pin_of(id) {
                Some(PinSide::Left) => left.push(slot),
                Some(PinSide::Right) => right.push(slot),
                None => center.push(slot),
            }
        }
        left.extend(center);
        left.extend(right);
        left
    }

    fn cached_header_groups(&self, scope: Option<ColumnRegion>) -> Rc<[HeaderGroup]> {
        let version = self.core.model.version;
        self.core
            .runtime
            .cache
            .header_groups(version, scope, || {
                let tree = &self.core.model.tree;
                let leaves: Vec<usize> = match scope {
                    None => self.visible_leaf_slots().to_vec(),
                    Some(region) => self.region_leaf_slots(region),
                };
                build_header_groups(tree, &leaves, |slot| {
                    self.committed_leaf_width(tree.node(slot))
                })
            })
    }
}
