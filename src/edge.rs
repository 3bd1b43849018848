//! A module for working with edges.

use std::hash::{Hash, Hasher};

/// A weighted pair of vertices representing a graph edge. Edges don't have a direction, despite
/// the `source`-`target` nomenclature used.
///
/// Equality and hashing consider the endpoints only, symmetrically: `(u, v)` and `(v, u)` denote
/// the same edge regardless of their weights. This makes edge-set differences (for instance
/// between a graph and its spanning tree) operate on connectivity rather than on weights.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates a new edge from two vertices and a weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1, 2.5);
    /// assert_eq!(edge, Edge::new(1, 0, 2.5));
    /// ```
    pub fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first vertex forming the edge.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the second vertex forming the edge.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the weight of the edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the endpoints in canonical orientation, lower index first.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::edge::Edge;
    ///
    /// assert_eq!(Edge::new(4, 2, 1.0).endpoints(), (2, 4));
    /// assert_eq!(Edge::new(2, 4, 1.0).endpoints(), (2, 4));
    /// ```
    pub fn endpoints(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }

    /// Returns whether the edge contains the given vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1, 3.0);
    ///
    /// assert_eq!(edge.contains(0), true);
    /// assert_eq!(edge.contains(1), true);
    /// assert_eq!(edge.contains(2), false);
    /// ```
    pub fn contains(&self, vertex: usize) -> bool {
        self.source == vertex || self.target == vertex
    }
}

//
// Trait implementations
//

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // This ensures the hash is the same for (a, b) as it is for (b, a).
        let (a, b) = self.endpoints();
        a.hash(state);
        b.hash(state);
    }
}
