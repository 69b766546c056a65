//! Ready-made observers: [`LogObserver`] and [`Paced`].

use std::fmt;
use std::thread;
use std::time::Duration;

use log::{debug, trace};

use crate::traits::GraphObserver;

/// Forwards every notification to the [`log`] facade.
///
/// Begin/over events go out at `debug` level, per-vertex events at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<V: fmt::Debug> GraphObserver<V> for LogObserver {
    fn on_bfs_begun(&mut self) {
        debug!("bfs begun");
    }

    fn on_dfs_begun(&mut self) {
        debug!("dfs begun");
    }

    fn on_dijkstra_begun(&mut self) {
        debug!("dijkstra begun");
    }

    fn on_visit(&mut self, vertex: &V) {
        trace!("visit {vertex:?}");
    }

    fn on_vertex_finished(&mut self, vertex: &V, cost: i64) {
        trace!("finished {vertex:?} at cost {cost}");
    }

    fn on_search_over(&mut self) {
        debug!("search over");
    }

    fn on_dijkstra_over(&mut self, path: &[V]) {
        debug!("dijkstra over, path {path:?}");
    }
}

/// Wraps an observer and sleeps for a fixed delay after each visited or
/// finished vertex, turning a traversal into step-by-step playback.
///
/// The delay blocks the traversal itself, since observers run inline.
#[derive(Debug, Clone)]
pub struct Paced<O> {
    inner: O,
    delay: Duration,
}

impl<O> Paced<O> {
    /// Wrap `inner`, pausing `delay` after every per-vertex event.
    pub fn new(inner: O, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// The configured delay.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay; takes effect from the next event.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// The wrapped observer.
    #[inline]
    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Mutable access to the wrapped observer.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut O {
        &mut self.inner
    }

    /// Unwrap, returning the inner observer.
    pub fn into_inner(self) -> O {
        self.inner
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl<V, O: GraphObserver<V>> GraphObserver<V> for Paced<O> {
    fn on_bfs_begun(&mut self) {
        self.inner.on_bfs_begun();
    }

    fn on_dfs_begun(&mut self) {
        self.inner.on_dfs_begun();
    }

    fn on_dijkstra_begun(&mut self) {
        self.inner.on_dijkstra_begun();
    }

    fn on_visit(&mut self, vertex: &V) {
        self.inner.on_visit(vertex);
        self.pause();
    }

    fn on_vertex_finished(&mut self, vertex: &V, cost: i64) {
        self.inner.on_vertex_finished(vertex, cost);
        self.pause();
    }

    fn on_search_over(&mut self) {
        self.inner.on_search_over();
    }

    fn on_dijkstra_over(&mut self, path: &[V]) {
        self.inner.on_dijkstra_over(path);
    }
}
