//! Observable graph search over generic weighted graphs.
//!
//! This crate provides [`WeightedGraph`], a directed graph with
//! non-negative integer edge weights over any `Clone + Eq + Hash` vertex
//! type, together with three traversals:
//!
//! - **BFS** first-reached search ([`WeightedGraph::bfs`])
//! - **DFS** first-reached search ([`WeightedGraph::dfs`])
//! - **Dijkstra** single-source shortest path ([`WeightedGraph::dijkstra`])
//!
//! Traversals report their progress to registered [`GraphObserver`]s,
//! synchronously and in registration order, so visualizers and loggers can
//! follow along without the algorithms knowing about them.
//!
//! # Notification protocol
//!
//! | Traversal | Events |
//! |---|---|
//! | BFS | `on_bfs_begun`, `on_visit`*, `on_search_over` |
//! | DFS | `on_dfs_begun`, `on_visit`*, `on_search_over` |
//! | Dijkstra | `on_dijkstra_begun`, `on_vertex_finished`*, `on_dijkstra_over` |

mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod graph;
mod observers;
mod recording;
mod traits;

pub use error::GraphError;
pub use graph::{SharedObserver, UNREACHABLE, WeightedGraph};
pub use observers::{LogObserver, Paced};
pub use recording::{EventLog, GraphEvent};
pub use traits::GraphObserver;
