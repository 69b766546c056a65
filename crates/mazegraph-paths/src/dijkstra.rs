use std::collections::BinaryHeap;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::GraphError;
use crate::graph::{UNREACHABLE, WeightedGraph};

/// Open-set entry, ordered so `BinaryHeap` (a max-heap) pops the smallest
/// cost first and, among equal costs, the earliest-inserted vertex.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Frontier {
    cost: i64,
    idx: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Clone + Eq + Hash> WeightedGraph<V> {
    /// Single-source shortest paths from `start`, reporting the cheapest
    /// path to `end`.
    ///
    /// Every vertex of the graph is finished, one at a time, in order of
    /// increasing cost; ties go to the vertex added to the graph first.
    /// Vertices with no path from `start` finish last, in insertion order,
    /// with cost [`UNREACHABLE`]. Observers receive `on_dijkstra_begun`, one
    /// `on_vertex_finished` per vertex and finally `on_dijkstra_over` with
    /// the returned path.
    ///
    /// Costs are summed as `i64`, so long paths of heavy `i32` edges never
    /// overflow.
    ///
    /// The path starts with `start` and ends with `end`. If `end` cannot be
    /// reached the call fails with [`GraphError::UnreachableEnd`] after all
    /// vertices have been finished, and `on_dijkstra_over` is not sent.
    pub fn dijkstra(&self, start: &V, end: &V) -> Result<Vec<V>, GraphError> {
        let start_idx = self.index_of(start)?;
        let end_idx = self.index_of(end)?;
        let n = self.len();

        debug!("dijkstra over {n} vertices");
        self.notify(|o| o.on_dijkstra_begun());

        // `None` until a path is found.
        let mut cost: Vec<Option<i64>> = vec![None; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        let mut finished = vec![false; n];
        cost[start_idx] = Some(0);
        pred[start_idx] = Some(start_idx);

        let mut open = BinaryHeap::new();
        open.push(Frontier {
            cost: 0,
            idx: start_idx,
        });
        // Once the open set drains, the rest are unreachable; they finish in
        // index order, and this cursor only moves forward.
        let mut stragglers = 0usize;

        for _ in 0..n {
            let ci = match Self::pop_open(&mut open, &cost, &finished) {
                Some(ci) => ci,
                None => {
                    while finished[stragglers] {
                        stragglers += 1;
                    }
                    stragglers
                }
            };
            finished[ci] = true;

            let Some((vertex, edges)) = self.adjacency.get_index(ci) else {
                continue;
            };
            let Some(current) = cost[ci] else {
                trace!("finished #{ci}, unreachable");
                self.notify(|o| o.on_vertex_finished(vertex, UNREACHABLE));
                continue;
            };
            trace!("finished #{ci} at cost {current}");
            self.notify(|o| o.on_vertex_finished(vertex, current));

            for (to, &w) in edges {
                let Some(ni) = self.adjacency.get_index_of(to) else {
                    continue;
                };
                if finished[ni] {
                    continue;
                }
                let tentative = current + i64::from(w);
                if cost[ni].is_none_or(|known| tentative < known) {
                    cost[ni] = Some(tentative);
                    pred[ni] = Some(ci);
                    open.push(Frontier {
                        cost: tentative,
                        idx: ni,
                    });
                }
            }
        }

        let Some(total) = cost[end_idx] else {
            debug!("dijkstra finished, end unreachable");
            return Err(GraphError::UnreachableEnd);
        };

        let mut indices = vec![end_idx];
        let mut cur = end_idx;
        while cur != start_idx {
            cur = pred[cur].ok_or(GraphError::UnreachableEnd)?;
            indices.push(cur);
        }
        let path: Vec<V> = indices
            .iter()
            .rev()
            .filter_map(|&i| self.adjacency.get_index(i).map(|(v, _)| v.clone()))
            .collect();

        debug!(
            "dijkstra finished, path of {} vertices at cost {total}",
            path.len()
        );
        self.notify(|o| o.on_dijkstra_over(&path));
        Ok(path)
    }

    /// Pop the cheapest live entry, skipping finished and superseded ones.
    fn pop_open(
        open: &mut BinaryHeap<Frontier>,
        cost: &[Option<i64>],
        finished: &[bool],
    ) -> Option<usize> {
        while let Some(entry) = open.pop() {
            if finished[entry.idx] || cost[entry.idx].is_some_and(|c| entry.cost > c) {
                continue;
            }
            return Some(entry.idx);
        }
        None
    }
}
