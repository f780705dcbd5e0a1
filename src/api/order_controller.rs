use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::error::{GridError, GridResult};
use crate::extensions::GridEvent;

use super::GridEngine;
use super::validation::normalize_order;

impl<R> GridEngine<R> {
    /// Current leaf order; always a permutation of all leaf ids.
    #[must_use]
    pub fn column_order(&self) -> &[String] {
        &self.core.model.state.order
    }

    /// Replaces the column order wholesale.
    ///
    /// Ids not naming a leaf are dropped; leaves missing from `order` are
    /// appended in their prior relative order.
    pub fn set_order<I, S>(&mut self, order: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: Vec<String> = order
            .into_iter()
            .map(|id| id.as_ref().to_owned())
            .collect();
        let resolved = normalize_order(
            &self.core.model.tree,
            requested.iter().map(String::as_str),
            &self.core.model.state.order,
        );
        let dropped = requested
            .iter()
            .filter(|id| !self.core.model.tree.is_leaf_id(id))
            .count();
        self.apply_order(resolved, dropped);
    }

    /// Moves one leaf to `target_index` within the order (clamped to the end).
    pub fn move_column(&mut self, column_id: &str, target_index: usize) -> GridResult<()> {
        if !self.core.model.tree.is_leaf_id(column_id) {
            warn!(column_id, "ignoring move of unknown leaf column");
            return Err(GridError::UnknownColumn(column_id.to_owned()));
        }
        let mut order = self.core.model.state.order.clone();
        order.retain(|id| id != column_id);
        let index = target_index.min(order.len());
        order.insert(index, column_id.to_owned());
        self.apply_order(order, 0);
        Ok(())
    }

    /// Uniformly random permutation of the current leaf order drawn from `rng`.
    pub fn shuffle_order<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        let mut order = self.core.model.state.order.clone();
        order.shuffle(rng);
        self.apply_order(order, 0);
    }

    /// Restores declaration order.
    pub fn reset_order(&mut self) {
        let order = self.core.model.tree.leaf_ids();
        self.apply_order(order, 0);
    }

    fn apply_order(&mut self, order: Vec<String>, dropped: usize) {
        self.core.model.state.order = order;
        let version = self.core.model.bump_version();
        debug!(dropped, version, "set column order");
        self.emit_plugin_event(GridEvent::OrderChanged {
            order: self.core.model.state.order.clone(),
        });
    }
}
