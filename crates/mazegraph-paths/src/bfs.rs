use std::collections::VecDeque;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::GraphError;
use crate::graph::WeightedGraph;

/// Pending-vertex container driving an uninformed search.
///
/// A FIFO queue yields breadth-first order, a LIFO stack depth-first order.
pub(crate) trait Worklist {
    fn put(&mut self, idx: usize);
    fn take(&mut self) -> Option<usize>;
}

impl Worklist for VecDeque<usize> {
    #[inline]
    fn put(&mut self, idx: usize) {
        self.push_back(idx);
    }

    #[inline]
    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

impl Worklist for Vec<usize> {
    #[inline]
    fn put(&mut self, idx: usize) {
        self.push(idx);
    }

    #[inline]
    fn take(&mut self) -> Option<usize> {
        self.pop()
    }
}

impl<V: Clone + Eq + Hash> WeightedGraph<V> {
    /// Breadth-first search from `start`, stopping as soon as `end` is
    /// dequeued.
    ///
    /// Observers receive `on_bfs_begun`, then `on_visit` for every vertex
    /// processed before `end` comes up, then exactly one `on_search_over`.
    /// `end` itself is never reported as visited, so `start == end`
    /// produces no visit at all. Edge weights are ignored.
    ///
    /// Returns whether `end` was reached.
    pub fn bfs(&self, start: &V, end: &V) -> Result<bool, GraphError> {
        let start_idx = self.index_of(start)?;
        let end_idx = self.index_of(end)?;

        debug!("bfs over {} vertices", self.len());
        self.notify(|o| o.on_bfs_begun());
        let found = self.walk(start_idx, end_idx, VecDeque::new());
        debug!("bfs finished, end reached: {found}");
        Ok(found)
    }

    /// Shared search loop for BFS and DFS.
    ///
    /// Vertices may sit in the worklist more than once; a visited vertex is
    /// dropped when it comes up again. Sends `on_search_over` once, on both
    /// the early exit and the exhausted paths.
    pub(crate) fn walk<W: Worklist>(&self, start: usize, end: usize, mut work: W) -> bool {
        let mut visited = vec![false; self.len()];
        let mut found = false;
        work.put(start);

        while let Some(ci) = work.take() {
            if ci == end {
                found = true;
                break;
            }
            if visited[ci] {
                continue;
            }
            let Some((vertex, edges)) = self.adjacency.get_index(ci) else {
                continue;
            };

            trace!("visit #{ci}");
            self.notify(|o| o.on_visit(vertex));
            visited[ci] = true;

            for to in edges.keys() {
                if let Some(ni) = self.adjacency.get_index_of(to) {
                    if !visited[ni] {
                        work.put(ni);
                    }
                }
            }
        }

        self.notify(|o| o.on_search_over());
        found
    }
}
