use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::{ColumnLayout, ColumnRegion, HeaderGroup};

/// Runtime metrics exposed by the derived-view cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedCacheStats {
    pub hits: u64,
    pub misses: u64,
    /// State version the cached entries were computed for.
    pub version: u64,
}

#[derive(Default)]
struct DerivedEntries {
    version: u64,
    visible_leaves: Option<Rc<[usize]>>,
    header_groups: HashMap<Option<ColumnRegion>, Rc<[HeaderGroup]>>,
    layout: Option<Rc<[ColumnLayout]>>,
    hits: u64,
    misses: u64,
}

impl DerivedEntries {
    fn sync(&mut self, version: u64) {
        if self.version != version {
            self.version = version;
            self.visible_leaves = None;
            self.header_groups.clear();
            self.layout = None;
        }
    }
}

/// Memo of derived queries keyed on the state version.
///
/// Lookups release the borrow before computing, so a computation may
/// itself consult the cache.
#[derive(Default)]
pub(super) struct DerivedCache {
    entries: RefCell<DerivedEntries>,
}

impl DerivedCache {
    pub(super) fn visible_leaves(
        &self,
        version: u64,
        compute: impl FnOnce() -> Vec<usize>,
    ) -> Rc<[usize]> {
        {
            let mut entries = self.entries.borrow_mut();
            entries.sync(version);
            if let Some(cached) = entries.visible_leaves.clone() {
                entries.hits = entries.hits.saturating_add(1);
                return cached;
            }
            entries.misses = entries.misses.saturating_add(1);
        }
        let computed: Rc<[usize]> = compute().into();
        let mut entries = self.entries.borrow_mut();
        if entries.version == version {
            entries.visible_leaves = Some(Rc::clone(&computed));
        }
        computed
    }

    pub(super) fn header_groups(
        &self,
        version: u64,
        scope: Option<ColumnRegion>,
        compute: impl FnOnce() -> Vec<HeaderGroup>,
    ) -> Rc<[HeaderGroup]> {
        {
            let mut entries = self.entries.borrow_mut();
            entries.sync(version);
            if let Some(cached) = entries.header_groups.get(&scope).cloned() {
                entries.hits = entries.hits.saturating_add(1);
                return cached;
            }
            entries.misses = entries.misses.saturating_add(1);
        }
        let computed: Rc<[HeaderGroup]> = compute().into();
        let mut entries = self.entries.borrow_mut();
        if entries.version == version {
            entries.header_groups.insert(scope, Rc::clone(&computed));
        }
        computed
    }

    pub(super) fn layout(
        &self,
        version: u64,
        compute: impl FnOnce() -> Vec<ColumnLayout>,
    ) -> Rc<[ColumnLayout]> {
        {
            let mut entries = self.entries.borrow_mut();
            entries.sync(version);
            if let Some(cached) = entries.layout.clone() {
                entries.hits = entries.hits.saturating_add(1);
                return cached;
            }
            entries.misses = entries.misses.saturating_add(1);
        }
        let computed: Rc<[ColumnLayout]> = compute().into();
        let mut entries = self.entries.borrow_mut();
        if entries.version == version {
            entries.layout = Some(Rc::clone(&computed));
        }
        computed
    }

    pub(super) fn stats(&self) -> DerivedCacheStats {
        let entries = self.entries.borrow();
        DerivedCacheStats {
            hits: entries.hits,
            misses: entries.misses,
            version: entries.version,
        }
    }
}
