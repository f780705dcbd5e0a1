use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ColumnTree;

/// One header cell. Placeholders keep columns aligned when leaves sit at
/// different tree depths; they carry the leaf's id but render empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub id: String,
    pub column_id: String,
    pub label: Option<String>,
    pub row_index: usize,
    pub col_span: usize,
    pub is_placeholder: bool,
    pub width: f64,
    pub leaf_column_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderGroup {
    pub id: String,
    pub depth: usize,
    pub headers: Vec<HeaderCell>,
}

impl HeaderGroup {
    /// Sum of spans; equals the visible leaf count for every row.
    #[must_use]
    pub fn total_span(&self) -> usize {
        self.headers.iter().map(|cell| cell.col_span).sum()
    }
}

struct PendingCell {
    slot: usize,
    is_placeholder: bool,
    col_span: usize,
    width: f64,
    leaves: SmallVec<[usize; 4]>,
}

/// Builds header rows, top row first, for an ordered run of visible leaves.
///
/// Leaves always land in the bottom row. Above a leaf, each row shows its
/// ancestor at that depth, or a placeholder once the path runs out.
/// Adjacent cells for the same group merge into one spanning cell.
#[must_use]
pub fn build_header_groups<R>(
    tree: &ColumnTree<R>,
    ordered_leaves: &[usize],
    width_of: impl Fn(usize) -> f64,
) -> Vec<HeaderGroup> {
    let max_depth = tree.max_depth();
    let mut groups = Vec::with_capacity(max_depth + 1);

    for depth in 0..=max_depth {
        let mut pending: Vec<PendingCell> = Vec::new();
        for &leaf in ordered_leaves {
            let (slot, is_placeholder) = if depth == max_depth {
                (leaf, false)
            } else {
                match tree.ancestor_at_depth(leaf, depth) {
                    Some(ancestor) if ancestor != leaf => (ancestor, false),
                    _ => (leaf, true),
                }
            };
            let width = width_of(leaf);

            if let Some(last) = pending.last_mut() {
                if !is_placeholder && !last.is_placeholder && last.slot == slot {
                    last.col_span += 1;
                    last.width += width;
                    last.leaves.push(leaf);
                    continue;
                }
            }
            let mut leaves = SmallVec::new();
            leaves.push(leaf);
            pending.push(PendingCell {
                slot,
                is_placeholder,
                col_span: 1,
                width,
                leaves,
            });
        }

        let mut seen: Vec<(usize, bool, usize)> = Vec::new();
        let headers = pending
            .into_iter()
            .map(|cell| {
                let node = tree.node(cell.slot);
                let occurrence = match seen
                    .iter_mut()
                    .find(|(slot, placeholder, _)| {
                        *slot == cell.slot && *placeholder == cell.is_placeholder
                    }) {
                    Some(entry) => {
                        entry.2 += 1;
                        entry.2
                    }
                    None => {
                        seen.push((cell.slot, cell.is_placeholder, 0));
                        0
                    }
                };
                let mut id = if cell.is_placeholder {
                    format!("{depth}_{}_placeholder", node.id())
                } else {
                    format!("{depth}_{}", node.id())
                };
                if occurrence > 0 {
                    id.push_str(&format!("_{occurrence}"));
                }
                HeaderCell {
                    id,
                    column_id: node.id().to_owned(),
                    label: (!cell.is_placeholder).then(|| node.header().to_owned()),
                    row_index: depth,
                    col_span: cell.col_span,
                    is_placeholder: cell.is_placeholder,
                    width: cell.width,
                    leaf_column_ids: cell
                        .leaves
                        .iter()
                        .map(|leaf| tree.node(*leaf).id().to_owned())
                        .collect(),
                }
            })
            .collect();

        groups.push(HeaderGroup {
            id: depth.to_string(),
            depth,
            headers,
        });
    }

    groups
}

/// Footer rows mirror header rows bottom-up.
#[must_use]
pub fn footer_groups_from_headers(headers: &[HeaderGroup]) -> Vec<HeaderGroup> {
    headers.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::build_header_groups;
    use crate::core::{ColumnDef, ColumnDefaults, ColumnTree};

    type Row = serde_json::Value;

    fn tree() -> ColumnTree<Row> {
        ColumnTree::build(
            vec![
                ColumnDef::accessor_key("firstName"),
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
            ColumnDefaults {
                width: 100.0,
                min_width: 40.0,
                max_width: f64::INFINITY,
            },
        )
        .expect("tree")
    }

    #[test]
    fn uneven_depths_produce_placeholders_above_shallow_leaves() {
        let tree = tree();
        let leaves = tree.leaf_slots().to_vec();
        let groups = build_header_groups(&tree, &leaves, |_| 100.0);

        assert_eq!(groups.len(), 3);
        let top: Vec<(&str, usize, bool)> = groups[0]
            .headers
            .iter()
            .map(|cell| (cell.column_id.as_str(), cell.col_span, cell.is_placeholder))
            .collect();
        assert_eq!(top, vec![("firstName", 1, true), ("Info", 3, false)]);

        let middle: Vec<(&str, usize, bool)> = groups[1]
            .headers
            .iter()
            .map(|cell| (cell.column_id.as_str(), cell.col_span, cell.is_placeholder))
            .collect();
        assert_eq!(
            middle,
            vec![
                ("firstName", 1, true),
                ("age", 1, true),
                ("More Info", 2, false)
            ]
        );
        assert!(groups[2].headers.iter().all(|cell| !cell.is_placeholder));
        for group in &groups {
            assert_eq!(group.total_span(), 4);
        }
        assert_eq!(groups[0].headers[1].width, 300.0);
    }

    #[test]
    fn split_group_gets_distinct_cell_ids() {
        let tree = tree();
        let first = tree.slot_of("firstName").expect("first");
        let age = tree.slot_of("age").expect("age");
        let visits = tree.slot_of("visits").expect("visits");
        let groups = build_header_groups(&tree, &[age, first, visits], |_| 50.0);

        let ids: Vec<&str> = groups[0].headers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["0_Info", "0_firstName_placeholder", "0_Info_1"]);
    }
}
