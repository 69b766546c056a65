//! Traversal recording.
//!
//! [`EventLog`] is an observer that stores every notification it receives as
//! a [`GraphEvent`], in order. A visualizer can replay the log at its own
//! pace after the traversal returns instead of drawing from inside the
//! callbacks.

use crate::traits::GraphObserver;

/// One observer notification, as recorded by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphEvent<V> {
    BfsBegun,
    DfsBegun,
    DijkstraBegun,
    Visit(V),
    VertexFinished(V, i64),
    SearchOver,
    DijkstraOver(Vec<V>),
}

impl<V> GraphEvent<V> {
    /// Whether this event ends a traversal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::SearchOver | Self::DijkstraOver(_))
    }
}

/// An observer that records every notification.
#[derive(Debug, Clone)]
pub struct EventLog<V> {
    events: Vec<GraphEvent<V>>,
}

impl<V> Default for EventLog<V> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<V> EventLog<V> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[inline]
    pub fn events(&self) -> &[GraphEvent<V>] {
        &self.events
    }

    /// Number of recorded events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forget all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Move the recorded events out, leaving the log empty.
    pub fn take(&mut self) -> Vec<GraphEvent<V>> {
        std::mem::take(&mut self.events)
    }

    /// Vertices reported through `on_visit`, in order.
    pub fn visited(&self) -> Vec<&V> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GraphEvent::Visit(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    /// `(vertex, cost)` pairs reported through `on_vertex_finished`, in order.
    pub fn finished(&self) -> Vec<(&V, i64)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GraphEvent::VertexFinished(v, c) => Some((v, *c)),
                _ => None,
            })
            .collect()
    }

    /// The most recent path reported through `on_dijkstra_over`.
    pub fn last_path(&self) -> Option<&[V]> {
        self.events.iter().rev().find_map(|e| match e {
            GraphEvent::DijkstraOver(path) => Some(path.as_slice()),
            _ => None,
        })
    }
}

impl<V: Clone> GraphObserver<V> for EventLog<V> {
    fn on_bfs_begun(&mut self) {
        self.events.push(GraphEvent::BfsBegun);
    }

    fn on_dfs_begun(&mut self) {
        self.events.push(GraphEvent::DfsBegun);
    }

    fn on_dijkstra_begun(&mut self) {
        self.events.push(GraphEvent::DijkstraBegun);
    }

    fn on_visit(&mut self, vertex: &V) {
        self.events.push(GraphEvent::Visit(vertex.clone()));
    }

    fn on_vertex_finished(&mut self, vertex: &V, cost: i64) {
        self.events
            .push(GraphEvent::VertexFinished(vertex.clone(), cost));
    }

    fn on_search_over(&mut self) {
        self.events.push(GraphEvent::SearchOver);
    }

    fn on_dijkstra_over(&mut self, path: &[V]) {
        self.events.push(GraphEvent::DijkstraOver(path.to_vec()));
    }
}
