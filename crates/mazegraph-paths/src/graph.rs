use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use indexmap::IndexMap;
use log::debug;

use crate::error::GraphError;
use crate::traits::GraphObserver;

/// Cost reported for vertices Dijkstra cannot reach.
///
/// Path costs are sums of `i32` weights accumulated as `i64`, so no real
/// path ever reaches this value.
pub const UNREACHABLE: i64 = i64::MAX;

/// Shared handle to a registered observer.
pub type SharedObserver<V> = Rc<RefCell<dyn GraphObserver<V>>>;

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// A directed graph with non-negative integer edge weights.
///
/// Vertices are arbitrary values compared by equality. Each vertex owns a
/// map of outgoing edges keyed by the destination vertex. Both maps keep
/// insertion order, so every traversal is deterministic: vertices are
/// scanned in the order they were added and neighbours in the order their
/// edge was first added.
///
/// The graph never stores duplicate vertices and never removes anything.
pub struct WeightedGraph<V> {
    pub(crate) adjacency: IndexMap<V, IndexMap<V, i32>>,
    observers: Vec<SharedObserver<V>>,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
            observers: Vec::new(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for WeightedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("adjacency", &self.adjacency)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<V: Clone + Eq + Hash> WeightedGraph<V> {
    /// Create an empty graph with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with no outgoing edges.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if `vertex` is already
    /// present; check [`contains_vertex`](Self::contains_vertex) first when
    /// duplicates are possible.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError> {
        if self.adjacency.contains_key(&vertex) {
            debug!("add_vertex: duplicate among {} vertices", self.len());
            return Err(GraphError::DuplicateVertex);
        }
        self.adjacency.insert(vertex, IndexMap::new());
        Ok(())
    }

    /// Whether `vertex` is in the graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Add (or overwrite) the directed edge `from -> to`.
    ///
    /// The weight is validated before the endpoints, and neither endpoint is
    /// created implicitly. On error the graph is left untouched.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i32) -> Result<(), GraphError> {
        if weight < 0 {
            debug!("add_edge: rejected weight {weight}");
            return Err(GraphError::InvalidWeight { weight });
        }
        if !self.adjacency.contains_key(to) {
            debug!("add_edge: unknown destination among {} vertices", self.len());
            return Err(GraphError::UnknownVertex);
        }
        let Some(edges) = self.adjacency.get_mut(from) else {
            debug!("add_edge: unknown source among {} vertices", self.adjacency.len());
            return Err(GraphError::UnknownVertex);
        };
        edges.insert(to.clone(), weight);
        Ok(())
    }

    /// Weight of the directed edge `from -> to`.
    ///
    /// Returns `Ok(None)` when both vertices exist but are not connected in
    /// that direction, and [`GraphError::UnknownVertex`] when either is
    /// missing.
    pub fn weight(&self, from: &V, to: &V) -> Result<Option<i32>, GraphError> {
        if !self.adjacency.contains_key(to) {
            return Err(GraphError::UnknownVertex);
        }
        let edges = self.adjacency.get(from).ok_or(GraphError::UnknownVertex)?;
        Ok(edges.get(to).copied())
    }

    /// Register an observer. Observers are notified in registration order.
    ///
    /// The caller keeps its own clone of the `Rc` to inspect the observer
    /// once a traversal returns.
    pub fn add_observer<O>(&mut self, observer: Rc<RefCell<O>>)
    where
        O: GraphObserver<V> + 'static,
    {
        self.add_shared_observer(observer);
    }

    /// Register an observer whose concrete type has already been erased.
    pub fn add_shared_observer(&mut self, observer: SharedObserver<V>) {
        self.observers.push(observer);
    }

    /// Number of registered observers.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Outgoing edges of `vertex` as `(neighbour, weight)`, in edge
    /// insertion order.
    pub fn neighbors(
        &self,
        vertex: &V,
    ) -> Result<impl Iterator<Item = (&V, i32)> + '_, GraphError> {
        let edges = self.adjacency.get(vertex).ok_or(GraphError::UnknownVertex)?;
        Ok(edges.iter().map(|(to, &w)| (to, w)))
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Dense index of `vertex`, used by the traversals for their scratch
    /// arrays.
    #[inline]
    pub(crate) fn index_of(&self, vertex: &V) -> Result<usize, GraphError> {
        self.adjacency
            .get_index_of(vertex)
            .ok_or(GraphError::UnknownVertex)
    }

    /// Call `event` on every observer, in registration order.
    pub(crate) fn notify(&self, mut event: impl FnMut(&mut dyn GraphObserver<V>)) {
        for observer in &self.observers {
            event(&mut *observer.borrow_mut());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> WeightedGraph<&'static str> {
        let mut g = WeightedGraph::new();
        g.add_vertex("a").unwrap();
        g.add_vertex("b").unwrap();
        g.add_vertex("c").unwrap();
        g
    }

    #[test]
    fn add_vertex_then_contains() {
        let mut g = WeightedGraph::new();
        assert!(!g.contains_vertex(&1));
        g.add_vertex(1).unwrap();
        assert!(g.contains_vertex(&1));
        assert_eq!(g.len(), 1);
        assert!(!g.is_empty());
    }

    #[test]
    fn duplicate_vertex_rejected() {
        let mut g = WeightedGraph::new();
        g.add_vertex(7).unwrap();
        assert_eq!(g.add_vertex(7), Err(GraphError::DuplicateVertex));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn add_edge_and_weight() {
        let mut g = WeightedGraph::new();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.add_vertex(3).unwrap();
        assert_eq!(g.weight(&1, &2), Ok(None));
        g.add_edge(&1, &2, 1).unwrap();
        g.add_edge(&1, &3, 10).unwrap();
        assert_eq!(g.weight(&1, &2), Ok(Some(1)));
        assert_eq!(g.weight(&1, &3), Ok(Some(10)));
        // Edges are directed.
        assert_eq!(g.weight(&2, &1), Ok(None));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn zero_weight_is_valid() {
        let mut g = abc();
        g.add_edge(&"a", &"b", 0).unwrap();
        assert_eq!(g.weight(&"a", &"b"), Ok(Some(0)));
    }

    #[test]
    fn overwrite_keeps_edge_position() {
        let mut g = abc();
        g.add_edge(&"a", &"b", 1).unwrap();
        g.add_edge(&"a", &"c", 2).unwrap();
        g.add_edge(&"a", &"b", 5).unwrap();
        let n: Vec<_> = g.neighbors(&"a").unwrap().collect();
        assert_eq!(n, vec![(&"b", 5), (&"c", 2)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn negative_weight_checked_first() {
        let mut g = abc();
        assert_eq!(
            g.add_edge(&"a", &"b", -1),
            Err(GraphError::InvalidWeight { weight: -1 })
        );
        // Even when the vertices do not exist.
        assert_eq!(
            g.add_edge(&"x", &"y", -3),
            Err(GraphError::InvalidWeight { weight: -3 })
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn unknown_endpoints_rejected() {
        let mut g = abc();
        assert_eq!(g.add_edge(&"a", &"z", 1), Err(GraphError::UnknownVertex));
        assert_eq!(g.add_edge(&"z", &"a", 1), Err(GraphError::UnknownVertex));
        assert!(!g.contains_vertex(&"z"));
        assert_eq!(g.weight(&"a", &"z"), Err(GraphError::UnknownVertex));
        assert_eq!(g.weight(&"z", &"a"), Err(GraphError::UnknownVertex));
        assert!(g.neighbors(&"z").is_err());
    }

    #[test]
    fn weight_is_idempotent() {
        let mut g = abc();
        g.add_edge(&"b", &"c", 4).unwrap();
        let first = g.weight(&"b", &"c");
        for _ in 0..5 {
            assert_eq!(g.weight(&"b", &"c"), first);
        }
        assert_eq!(first, Ok(Some(4)));
    }

    #[test]
    fn vertices_in_insertion_order() {
        let mut g = WeightedGraph::new();
        for v in [5, 3, 9, 1] {
            g.add_vertex(v).unwrap();
        }
        let order: Vec<_> = g.vertices().copied().collect();
        assert_eq!(order, vec![5, 3, 9, 1]);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GraphError::InvalidWeight { weight: -2 }.to_string(),
            "invalid edge weight -2: weights must be non-negative"
        );
        assert_eq!(
            GraphError::UnknownVertex.to_string(),
            "vertex is not present in the graph"
        );
    }

    #[test]
    fn shared_observer_registers() {
        use crate::recording::{EventLog, GraphEvent};

        let mut g = abc();
        g.add_edge(&"a", &"b", 1).unwrap();
        let log = Rc::new(RefCell::new(EventLog::<&'static str>::new()));
        let shared: SharedObserver<&'static str> = log.clone();
        g.add_shared_observer(shared);
        assert_eq!(g.observer_count(), 1);

        g.bfs(&"a", &"b").unwrap();
        assert_eq!(
            log.borrow().events(),
            &[GraphEvent::BfsBegun, GraphEvent::Visit("a"), GraphEvent::SearchOver]
        );
    }
}
