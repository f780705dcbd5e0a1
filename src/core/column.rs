use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::core::{CellValue, GridRow};
use crate::error::{GridError, GridResult};

pub type AccessorFn<R> = Arc<dyn Fn(&R) -> Result<CellValue, String> + Send + Sync + 'static>;

/// Extracts one cell value from a row.
pub enum Accessor<R> {
    /// Reads a named field through [`GridRow::field`]. Missing fields yield `Empty`.
    Key(String),
    /// Caller closure. Failures must come back as `Err`; those render as
    /// `Empty`. A panicking closure unwinds through the row queries.
    Fn(AccessorFn<R>),
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Key(key) => Self::Key(key.clone()),
            Self::Fn(accessor) => Self::Fn(Arc::clone(accessor)),
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

impl<R: GridRow> Accessor<R> {
    pub fn read(&self, row: &R) -> Result<CellValue, String> {
        match self {
            Self::Key(key) => Ok(row.field(key).unwrap_or_default()),
            Self::Fn(accessor) => accessor(row),
        }
    }
}

/// Caller-facing column definition. Groups carry `children`, leaves an accessor.
pub struct ColumnDef<R> {
    pub id: Option<String>,
    pub header: Option<String>,
    pub accessor: Option<Accessor<R>>,
    pub children: Option<Vec<ColumnDef<R>>>,
    pub width: Option<f64>,
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub resizable: bool,
    pub pinnable: bool,
    pub hideable: bool,
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("children", &self.children)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl<R> ColumnDef<R> {
    /// Bare column with an explicit id and no accessor.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            header: None,
            accessor: None,
            children: None,
            width: None,
            min_width: None,
            max_width: None,
            resizable: true,
            pinnable: true,
            hideable: true,
        }
    }

    /// Leaf column reading field `key`; the key doubles as the column id.
    #[must_use]
    pub fn accessor_key(key: impl Into<String>) -> Self {
        let key = key.into();
        let mut def = Self::new(key.clone());
        def.accessor = Some(Accessor::Key(key));
        def
    }

    #[must_use]
    pub fn accessor_fn<F>(id: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> Result<CellValue, String> + Send + Sync + 'static,
    {
        let mut def = Self::new(id);
        def.accessor = Some(Accessor::Fn(Arc::new(accessor)));
        def
    }

    /// Header group; its id resolves from `header` unless set explicitly.
    #[must_use]
    pub fn group(header: impl Into<String>, children: Vec<ColumnDef<R>>) -> Self {
        let mut def = Self::new(String::new());
        def.id = None;
        def.header = Some(header.into());
        def.children = Some(children);
        def
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }

    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    #[must_use]
    pub fn with_pinnable(mut self, pinnable: bool) -> Self {
        self.pinnable = pinnable;
        self
    }

    #[must_use]
    pub fn with_hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    fn resolved_id(&self) -> Option<String> {
        if let Some(id) = &self.id {
            return Some(id.clone());
        }
        if let Some(Accessor::Key(key)) = &self.accessor {
            return Some(key.clone());
        }
        self.header.clone()
    }
}

/// Width bounds applied to every resize and state restore of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSizing {
    pub default_width: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl ColumnSizing {
    #[must_use]
    pub fn clamp(self, width: f64) -> f64 {
        width.max(self.min_width).min(self.max_width)
    }
}

/// Defaults applied to columns that leave sizing unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDefaults {
    pub width: f64,
    pub min_width: f64,
    pub max_width: f64,
}

pub enum ColumnKind<R> {
    Group { children: Vec<usize> },
    Leaf { accessor: Accessor<R> },
}

impl<R> fmt::Debug for ColumnKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group { children } => f
                .debug_struct("Group")
                .field("children", children)
                .finish(),
            Self::Leaf { accessor } => f
                .debug_struct("Leaf")
                .field("accessor", accessor)
                .finish(),
        }
    }
}

/// Runtime node of the resolved column tree.
pub struct ColumnNode<R> {
    id: String,
    header: Option<String>,
    depth: usize,
    parent: Option<usize>,
    kind: ColumnKind<R>,
    sizing: ColumnSizing,
    resizable: bool,
    pinnable: bool,
    hideable: bool,
}

impl<R> fmt::Debug for ColumnNode<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnNode")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("depth", &self.depth)
            .field("kind", &self.kind)
            .field("sizing", &self.sizing)
            .finish_non_exhaustive()
    }
}

impl<R> ColumnNode<R> {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header label, falling back to the column id.
    #[must_use]
    pub fn header(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.id)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn kind(&self) -> &ColumnKind<R> {
        &self.kind
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, ColumnKind::Leaf { .. })
    }

    #[must_use]
    pub fn accessor(&self) -> Option<&Accessor<R>> {
        match &self.kind {
            ColumnKind::Leaf { accessor } => Some(accessor),
            ColumnKind::Group { .. } => None,
        }
    }

    #[must_use]
    pub fn sizing(&self) -> ColumnSizing {
        self.sizing
    }

    #[must_use]
    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    #[must_use]
    pub fn is_pinnable(&self) -> bool {
        self.pinnable
    }

    #[must_use]
    pub fn is_hideable(&self) -> bool {
        self.hideable
    }

    pub(crate) fn parent(&self) -> Option<usize> {
        self.parent
    }
}

/// Column tree flattened into an arena of nodes addressed by index.
pub struct ColumnTree<R> {
    nodes: Vec<ColumnNode<R>>,
    roots: Vec<usize>,
    leaves: Vec<usize>,
    index: IndexMap<String, usize>,
    max_depth: usize,
}

impl<R> fmt::Debug for ColumnTree<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnTree")
            .field("nodes", &self.nodes)
            .field("roots", &self.roots)
            .field("leaves", &self.leaves)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl<R> ColumnTree<R> {
    /// Resolves ids, validates the tree and records depth-first leaf order.
    pub fn build(defs: Vec<ColumnDef<R>>, defaults: ColumnDefaults) -> GridResult<Self> {
        if defs.is_empty() {
            return Err(GridError::Configuration(
                "column tree must contain at least one column".to_owned(),
            ));
        }
        let mut tree = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            leaves: Vec::new(),
            index: IndexMap::new(),
            max_depth: 0,
        };
        for def in defs {
            let root = tree.insert(def, 0, None, defaults)?;
            tree.roots.push(root);
        }
        Ok(tree)
    }

    fn insert(
        &mut self,
        def: ColumnDef<R>,
        depth: usize,
        parent: Option<usize>,
        defaults: ColumnDefaults,
    ) -> GridResult<usize> {
        let id = def
            .resolved_id()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                GridError::Configuration(format!(
                    "column at depth {depth} has no resolvable id (set `id`, an accessor key, or a header)"
                ))
            })?;
        if self.index.contains_key(&id) {
            return Err(GridError::Configuration(format!(
                "duplicate column id `{id}`"
            )));
        }
        let sizing = resolve_sizing(&id, &def, defaults)?;

        let slot = self.nodes.len();
        self.index.insert(id.clone(), slot);
        self.max_depth = self.max_depth.max(depth);

        match def.children {
            Some(children) => {
                if children.is_empty() {
                    return Err(GridError::Configuration(format!(
                        "group column `{id}` has no children"
                    )));
                }
                self.nodes.push(ColumnNode {
                    id,
                    header: def.header,
                    depth,
                    parent,
                    kind: ColumnKind::Group {
                        children: Vec::new(),
                    },
                    sizing,
                    resizable: def.resizable,
                    pinnable: def.pinnable,
                    hideable: def.hideable,
                });
                let mut child_slots = Vec::with_capacity(children.len());
                for child in children {
                    child_slots.push(self.insert(child, depth + 1, Some(slot), defaults)?);
                }
                self.nodes[slot].kind = ColumnKind::Group {
                    children: child_slots,
                };
            }
            None => {
                let accessor = def.accessor.ok_or_else(|| {
                    GridError::Configuration(format!("leaf column `{id}` has no accessor"))
                })?;
                self.nodes.push(ColumnNode {
                    id,
                    header: def.header,
                    depth,
                    parent,
                    kind: ColumnKind::Leaf { accessor },
                    sizing,
                    resizable: def.resizable,
                    pinnable: def.pinnable,
                    hideable: def.hideable,
                });
                self.leaves.push(slot);
            }
        }
        Ok(slot)
    }

    #[must_use]
    pub fn node(&self, slot: usize) -> &ColumnNode<R> {
        &self.nodes[slot]
    }

    #[must_use]
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ColumnNode<R>> {
        self.slot_of(id).map(|slot| &self.nodes[slot])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn is_leaf_id(&self, id: &str) -> bool {
        self.get(id).is_some_and(ColumnNode::is_leaf)
    }

    /// Leaf slots in depth-first declaration order.
    #[must_use]
    pub fn leaf_slots(&self) -> &[usize] {
        &self.leaves
    }

    #[must_use]
    pub fn leaf_ids(&self) -> Vec<String> {
        self.leaves
            .iter()
            .map(|slot| self.nodes[*slot].id.clone())
            .collect()
    }

    #[must_use]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Leaf slots under `slot` in declaration order; a leaf yields itself.
    #[must_use]
    pub fn leaf_descendants(&self, slot: usize) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_leaves(slot, &mut out);
        out
    }

    fn collect_leaves(&self, slot: usize, out: &mut Vec<usize>) {
        match &self.nodes[slot].kind {
            ColumnKind::Leaf { .. } => out.push(slot),
            ColumnKind::Group { children } => {
                for child in children {
                    self.collect_leaves(*child, out);
                }
            }
        }
    }

    /// Ancestor at `depth` on the path from a root to `slot`, if any.
    #[must_use]
    pub fn ancestor_at_depth(&self, slot: usize, depth: usize) -> Option<usize> {
        let mut current = slot;
        loop {
            let node = &self.nodes[current];
            if node.depth == depth {
                return Some(current);
            }
            if node.depth < depth {
                return None;
            }
            current = node.parent?;
        }
    }
}

fn resolve_sizing<R>(
    id: &str,
    def: &ColumnDef<R>,
    defaults: ColumnDefaults,
) -> GridResult<ColumnSizing> {
    let min_width = def.min_width.unwrap_or(defaults.min_width);
    let max_width = def.max_width.unwrap_or(defaults.max_width);
    if !min_width.is_finite() || min_width < 0.0 {
        return Err(GridError::Configuration(format!(
            "column `{id}` min width must be finite and >= 0"
        )));
    }
    if max_width.is_nan() || max_width < min_width {
        return Err(GridError::Configuration(format!(
            "column `{id}` max width must be >= min width"
        )));
    }
    let width = def.width.unwrap_or(defaults.width);
    if !width.is_finite() {
        return Err(GridError::Configuration(format!(
            "column `{id}` width must be finite"
        )));
    }
    let sizing = ColumnSizing {
        default_width: width,
        min_width,
        max_width,
    };
    Ok(ColumnSizing {
        default_width: sizing.clamp(width),
        ..sizing
    })
}
