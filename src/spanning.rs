//! A module for computing minimum spanning trees of a weighted graph.

use std::collections::HashSet;

use crate::{edge::Edge, graph::Graph, union_find::DisjointSet};

/// Computes a minimum spanning tree of `graph` using Kruskal's algorithm.
///
/// Edges are taken in ascending weight order (ties broken by the deterministic enumeration
/// order of [`Graph::edge_list`], the sort being stable) and accepted whenever they join two
/// previously disconnected components. The result is a new graph over the same vertices
/// containing exactly the accepted edges.
///
/// For a connected input the result is a spanning tree with `vertex_count - 1` edges of
/// minimum total weight. A disconnected input yields a minimum spanning forest, one tree per
/// component; this is not an error.
///
/// # Examples
///
/// ```
/// use roundel::graph::Graph;
/// use roundel::spanning::kruskal;
///
/// let mut graph = Graph::new(3);
/// graph.insert_edge(0, 1, 1.0).unwrap();
/// graph.insert_edge(1, 2, 1.0).unwrap();
/// graph.insert_edge(0, 2, 5.0).unwrap();
///
/// let tree = kruskal(&graph);
/// assert_eq!(tree.edge_count(), 2);
/// assert!(!tree.has_edge(0, 2));
/// ```
pub fn kruskal(graph: &Graph) -> Graph {
    let mut edges = graph.edge_list();
    edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut tree = Graph::new(graph.vertex_count());

    for edge in edges {
        if sets.union(edge.source(), edge.target()) {
            // The edge comes from a valid graph and the tree's edge set is a subset of the
            // input's, so insertion cannot fail.
            let _ = tree.insert_edge(edge.source(), edge.target(), edge.weight());
        }
    }

    tree
}

/// Returns the edges of `graph` that are not part of its minimum spanning tree.
///
/// These are the sections that can be closed while keeping every connected station pair
/// connected. The result is sorted by canonical endpoints for reproducibility.
///
/// # Examples
///
/// ```
/// use roundel::graph::Graph;
/// use roundel::spanning::redundant_edges;
///
/// let mut graph = Graph::new(3);
/// graph.insert_edge(0, 1, 1.0).unwrap();
/// graph.insert_edge(1, 2, 1.0).unwrap();
/// graph.insert_edge(0, 2, 5.0).unwrap();
///
/// let redundant = redundant_edges(&graph);
/// assert_eq!(redundant.len(), 1);
/// assert_eq!(redundant[0].endpoints(), (0, 2));
/// ```
pub fn redundant_edges(graph: &Graph) -> Vec<Edge> {
    let tree_edges: HashSet<Edge> = kruskal(graph).edge_list().into_iter().collect();

    let mut redundant: Vec<Edge> = graph
        .edge_list()
        .into_iter()
        .filter(|edge| !tree_edges.contains(edge))
        .collect();
    redundant.sort_by_key(|edge| edge.endpoints());

    redundant
}
