//! A module for working with graphs.

use crate::{edge::Edge, error::GraphError};

/// An undirected weighted graph over a fixed set of vertices.
///
/// Vertices are dense indices in `[0, vertex_count)`, fixed at construction; mapping domain
/// labels (station names) to indices is the caller's concern (see
/// [`Network`](crate::network::Network)). At most one edge exists between any unordered pair;
/// inserting a second one is rejected with [`GraphError::DuplicateEdge`] so the edge set stays a
/// simple set.
#[derive(Clone, Debug)]
pub struct Graph {
    /// Adjacency lists holding `(neighbor, weight)` pairs for each vertex.
    adjacency: Vec<Vec<(usize, f64)>>,
    /// The number of undirected edges, each counted once.
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with the given number of vertices and no edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::graph::Graph;
    ///
    /// let graph = Graph::new(5);
    /// assert_eq!(graph.vertex_count(), 5);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Inserts an undirected edge between `u` and `v`.
    ///
    /// The weight must be finite and non-negative. Self-loops, out-of-range vertices and
    /// duplicate pairs are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::error::GraphError;
    /// use roundel::graph::Graph;
    ///
    /// let mut graph = Graph::new(3);
    ///
    /// assert!(graph.insert_edge(0, 1, 2.5).is_ok());
    /// assert_eq!(
    ///     graph.insert_edge(1, 0, 4.0),
    ///     Err(GraphError::DuplicateEdge { source: 1, target: 0 })
    /// );
    /// ```
    pub fn insert_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if u == v {
            return Err(GraphError::SelfLoop { vertex: u });
        }

        // Rejecting NaN here keeps every weight totally ordered downstream.
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(GraphError::NegativeWeight { weight });
        }

        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge {
                source: u,
                target: v,
            });
        }

        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edge_count += 1;

        Ok(())
    }

    /// Checks whether an edge exists between `u` and `v`, in either orientation.
    ///
    /// Out-of-range vertices are simply not adjacent to anything.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|list| list.iter().any(|&(neighbor, _)| neighbor == v))
    }

    /// Returns the weight of the edge between `u` and `v`, if one exists.
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<f64> {
        self.adjacency.get(u)?.iter().find_map(
            |&(neighbor, weight)| {
                if neighbor == v {
                    Some(weight)
                } else {
                    None
                }
            },
        )
    }

    /// Removes the edge between `u` and `v` and returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::graph::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// graph.insert_edge(0, 1, 2.0).unwrap();
    ///
    /// assert_eq!(graph.delete_edge(1, 0), true);
    /// assert_eq!(graph.delete_edge(0, 2), false);
    /// ```
    pub fn delete_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.has_edge(u, v) {
            return false;
        }

        self.adjacency[u].retain(|&(neighbor, _)| neighbor != v);
        self.adjacency[v].retain(|&(neighbor, _)| neighbor != u);
        self.edge_count -= 1;

        true
    }

    /// Returns an iterator over the `(neighbor, weight)` pairs incident to `u`.
    ///
    /// The iterator borrows the graph; re-querying yields a fresh sequence reflecting the
    /// current state.
    pub fn neighbors(
        &self,
        u: usize,
    ) -> Result<impl Iterator<Item = (usize, f64)> + '_, GraphError> {
        self.check_vertex(u)?;

        Ok(self.adjacency[u].iter().copied())
    }

    /// Returns all edges, each reported once in canonical orientation (lower index first).
    ///
    /// Enumeration order is deterministic: ascending by source vertex, then by insertion order
    /// within each adjacency list.
    pub fn edge_list(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);

        for (u, list) in self.adjacency.iter().enumerate() {
            for &(v, weight) in list {
                if u < v {
                    edges.push(Edge::new(u, v, weight));
                }
            }
        }

        edges
    }

    /// Returns the vertex count of the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of edges incident to `u`.
    pub fn degree(&self, u: usize) -> Result<usize, GraphError> {
        self.check_vertex(u)?;

        Ok(self.adjacency[u].len())
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum
    /// possible edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::graph::Graph;
    ///
    /// let mut graph = Graph::new(3);
    ///
    /// graph.insert_edge(0, 1, 1.0).unwrap();
    /// graph.insert_edge(0, 2, 1.0).unwrap();
    /// assert_eq!(graph.density(), 2.0 / 3.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.vertex_count() as f64;
        let ec = self.edge_count() as f64;

        // Calculate the total number of possible edges given a vertex count.
        let pec = vc * (vc - 1.0) / 2.0;
        // Actual edges divided by the possible edges gives the density.
        ec / pec
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.adjacency.len(),
            })
        }
    }
}
