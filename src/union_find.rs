//! A disjoint-set forest used for cycle detection when building spanning trees.

/// A union-find structure over dense element indices, with iterative path halving and union by
/// rank. Both keep trees shallow enough that a sequence of unions and finds runs in amortized
/// near-constant time per operation.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `n` singleton sets, one per element in `[0, n)`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Each node visited on the way up is relinked to its grandparent, halving the path for
    /// subsequent queries.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }

        x
    }

    /// Merges the sets containing `a` and `b`, returning whether a merge occurred.
    ///
    /// Returns `false` when `a` and `b` were already in the same set, which is exactly the
    /// "this edge would form a cycle" signal Kruskal's algorithm needs.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);

        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }

        true
    }
}
