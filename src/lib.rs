//! Roundel is a small toolkit for analysing transit network topologies, though it applies more
//! generally to sparse weighted undirected graphs.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure, a fixed set of
//! vertices connected by weighted undirected edges. Once constructed, shortest paths can be
//! computed from any source with [`dijkstra`](shortest::dijkstra) and a minimum spanning tree
//! extracted with [`kruskal`](spanning::kruskal).
//!
//! ```rust
//! use roundel::graph::Graph;
//! use roundel::shortest::dijkstra;
//! use roundel::spanning::kruskal;
//!
//! // Five stations connected by five line sections, weighted by journey minutes.
//! let mut graph = Graph::new(5);
//! for (u, v, minutes) in [(0, 1, 8.0), (0, 3, 7.0), (1, 2, 3.0), (2, 4, 5.0), (3, 4, 1.0)] {
//!     graph.insert_edge(u, v, minutes).unwrap();
//! }
//!
//! // The quickest journey from station 0 to station 4 takes 8 minutes, via station 3.
//! let paths = dijkstra(&graph, 0).unwrap();
//! assert_eq!(paths.distance(4).unwrap(), 8.0);
//! assert_eq!(paths.path_to(4).unwrap(), Some(vec![0, 3, 4]));
//!
//! // Four sections suffice to keep every station connected.
//! let tree = kruskal(&graph);
//! assert_eq!(tree.edge_count(), 4);
//! ```
//!
//! Station names are mapped to dense vertex indices at the boundary by
//! [`Network`](network::Network), and [`analysis`] aggregates shortest paths across the whole
//! network (all pairwise journey durations, the longest journey) using a worker pool.

pub mod analysis;
pub mod edge;
pub mod error;
pub mod graph;
pub mod network;
pub mod shortest;
pub mod spanning;
pub mod union_find;
