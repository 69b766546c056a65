use std::hash::Hash;

use log::debug;

use crate::error::GraphError;
use crate::graph::WeightedGraph;

impl<V: Clone + Eq + Hash> WeightedGraph<V> {
    /// Depth-first search from `start`, stopping as soon as `end` is popped.
    ///
    /// Same protocol as [`bfs`](Self::bfs) with `on_dfs_begun` in place of
    /// `on_bfs_begun`. Neighbours are pushed in edge insertion order, so the
    /// most recently added edge is followed first.
    ///
    /// Returns whether `end` was reached.
    pub fn dfs(&self, start: &V, end: &V) -> Result<bool, GraphError> {
        let start_idx = self.index_of(start)?;
        let end_idx = self.index_of(end)?;

        debug!("dfs over {} vertices", self.len());
        self.notify(|o| o.on_dfs_begun());
        let found = self.walk(start_idx, end_idx, Vec::new());
        debug!("dfs finished, end reached: {found}");
        Ok(found)
    }
}
