/// Receives progress notifications from the graph algorithms.
///
/// Every method has an empty default body, so an observer only overrides
/// the events it cares about. Observers are called synchronously, in
/// registration order, on the caller's stack: a slow observer slows the
/// traversal down by exactly as much.
pub trait GraphObserver<V> {
    /// A breadth-first search is about to start.
    fn on_bfs_begun(&mut self) {}

    /// A depth-first search is about to start.
    fn on_dfs_begun(&mut self) {}

    /// Dijkstra's algorithm is about to start.
    fn on_dijkstra_begun(&mut self) {}

    /// BFS or DFS just visited `vertex`.
    fn on_visit(&mut self, _vertex: &V) {}

    /// Dijkstra moved `vertex` to the finished set with its final `cost`.
    ///
    /// Vertices that cannot be reached report [`UNREACHABLE`](crate::UNREACHABLE).
    fn on_vertex_finished(&mut self, _vertex: &V, _cost: i64) {}

    /// BFS or DFS terminated. Sent exactly once per search.
    fn on_search_over(&mut self) {}

    /// Dijkstra completed; `path` runs from the start vertex to the end vertex.
    fn on_dijkstra_over(&mut self, _path: &[V]) {}
}
