//! Maze to graph conversion.

use log::debug;
use mazegraph_core::{Direction, Juncture};
use mazegraph_paths::{GraphError, WeightedGraph};

use crate::traits::Maze;

/// A weighted graph whose vertices are maze junctures.
pub type MazeGraph = WeightedGraph<Juncture>;

/// Build the graph of `maze`.
///
/// Every juncture becomes a vertex. For every side of a juncture that is not
/// walled, the juncture across it is added too (if not already present) and
/// two directed edges join them, both weighted with the maze's weight for
/// that side of the current juncture. Junctures are scanned row by row and
/// sides in [`Direction::ALL`] order, so when the two cells of a shared
/// opening report different weights, the cell scanned last wins.
///
/// No bounds checks are made: a maze that reports an opening in its border
/// produces vertices outside its rectangle.
pub fn maze_graph<M: Maze + ?Sized>(maze: &M) -> Result<MazeGraph, GraphError> {
    let mut graph = WeightedGraph::new();

    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let here = Juncture::new(x, y);
            ensure_vertex(&mut graph, here)?;

            for dir in Direction::ALL {
                if maze.is_wall(here, dir) {
                    continue;
                }
                let there = here.neighbor(dir);
                ensure_vertex(&mut graph, there)?;
                let weight = maze.weight(here, dir);
                graph.add_edge(&here, &there, weight)?;
                graph.add_edge(&there, &here, weight)?;
            }
        }
    }

    debug!(
        "built maze graph: {}x{} maze, {} vertices, {} edges",
        maze.width(),
        maze.height(),
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

fn ensure_vertex(graph: &mut MazeGraph, j: Juncture) -> Result<(), GraphError> {
    if graph.contains_vertex(&j) {
        return Ok(());
    }
    graph.add_vertex(j)
}
