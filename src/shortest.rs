//! A module for computing single-source shortest paths over a weighted graph.
//!
//! The engine is a label-setting Dijkstra variant driven by a binary heap with lazy insertion:
//! the heap starts with only the source and vertices are (re)pushed as they are relaxed, which
//! suits the sparse graphs of a transit network. A run produces a [`ShortestPaths`] holding the
//! distance and predecessor arrays for every vertex.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{error::GraphError, graph::Graph};

/// A heap entry: the tentative distance of a vertex at the time it was pushed.
///
/// The ordering is reversed on the distance so `BinaryHeap`, a max-heap, pops the smallest
/// tentative distance first. Weights are validated non-NaN at insertion, making `total_cmp`
/// agree with the usual ordering.
#[derive(Clone, Copy, Debug, PartialEq)]
struct State {
    distance: f64,
    vertex: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The result of a single shortest-path run: per-vertex distances and predecessor links from a
/// fixed source.
///
/// Unreachable vertices have distance [`f64::INFINITY`] and no predecessor. The source has
/// distance `0.0` and no predecessor; unreachability and "is the source" are therefore told
/// apart by the distance, not the predecessor.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Returns the source vertex of this run.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the shortest distance from the source to `vertex`, or [`f64::INFINITY`] if it is
    /// unreachable.
    pub fn distance(&self, vertex: usize) -> Result<f64, GraphError> {
        self.check_vertex(vertex)?;

        Ok(self.distances[vertex])
    }

    /// Returns whether `vertex` is reachable from the source.
    pub fn is_reachable(&self, vertex: usize) -> Result<bool, GraphError> {
        Ok(self.distance(vertex)?.is_finite())
    }

    /// Returns the predecessor of `vertex` on its shortest path, or `None` for the source and
    /// for unreachable vertices.
    pub fn predecessor(&self, vertex: usize) -> Result<Option<usize>, GraphError> {
        self.check_vertex(vertex)?;

        Ok(self.predecessors[vertex])
    }

    /// Reconstructs the shortest path from the source to `target`.
    ///
    /// Returns `Ok(None)` when the target is unreachable. Otherwise the path starts at the
    /// source and ends at the target; for `target == source` it is the single-vertex path.
    ///
    /// # Errors
    ///
    /// [`GraphError::InconsistentPredecessors`] if the predecessor chain fails to terminate at
    /// the source. That cannot happen for an unmodified run and indicates corrupted state.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::graph::Graph;
    /// use roundel::shortest::dijkstra;
    ///
    /// let mut graph = Graph::new(3);
    /// graph.insert_edge(0, 1, 1.0).unwrap();
    /// graph.insert_edge(1, 2, 2.0).unwrap();
    ///
    /// let paths = dijkstra(&graph, 0).unwrap();
    /// assert_eq!(paths.path_to(2).unwrap(), Some(vec![0, 1, 2]));
    /// ```
    pub fn path_to(&self, target: usize) -> Result<Option<Vec<usize>>, GraphError> {
        self.check_vertex(target)?;

        if !self.distances[target].is_finite() {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut current = target;

        while current != self.source {
            match self.predecessors[current] {
                Some(predecessor) => {
                    path.push(predecessor);
                    current = predecessor;
                }
                // A finite distance with a broken chain is an internal contradiction.
                None => return Err(GraphError::InconsistentPredecessors { vertex: current }),
            }

            // A chain longer than the vertex count must contain a cycle.
            if path.len() > self.distances.len() {
                return Err(GraphError::InconsistentPredecessors { vertex: target });
            }
        }

        path.reverse();

        Ok(Some(path))
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.distances.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.distances.len(),
            })
        }
    }
}

/// Computes shortest paths from `source` to every vertex of `graph`.
///
/// Runs in `O((V + E) log V)`. The graph is only read; runs from different sources over the
/// same graph are independent and may execute on separate threads.
///
/// Edge weights are guaranteed non-negative by [`Graph::insert_edge`], which is what makes the
/// label-setting approach sound.
///
/// # Examples
///
/// ```
/// use roundel::graph::Graph;
/// use roundel::shortest::dijkstra;
///
/// let mut graph = Graph::new(4);
/// graph.insert_edge(0, 1, 1.0).unwrap();
/// graph.insert_edge(1, 2, 2.0).unwrap();
/// graph.insert_edge(0, 2, 5.0).unwrap();
///
/// let paths = dijkstra(&graph, 0).unwrap();
/// assert_eq!(paths.distance(2).unwrap(), 3.0);
/// assert_eq!(paths.distance(3).unwrap(), f64::INFINITY);
/// ```
pub fn dijkstra(graph: &Graph, source: usize) -> Result<ShortestPaths, GraphError> {
    let n = graph.vertex_count();
    if source >= n {
        return Err(GraphError::InvalidVertex {
            vertex: source,
            vertex_count: n,
        });
    }

    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut heap = BinaryHeap::new();

    distances[source] = 0.0;
    heap.push(State {
        distance: 0.0,
        vertex: source,
    });

    while let Some(State { distance, vertex }) = heap.pop() {
        // A stale entry: the vertex was already finalized with a shorter distance.
        if distance > distances[vertex] {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(vertex)? {
            let candidate = distance + weight;

            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                predecessors[neighbor] = Some(vertex);
                heap.push(State {
                    distance: candidate,
                    vertex: neighbor,
                });
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}
