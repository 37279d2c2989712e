//! Disjoint-set (union-find) structure used by Kruskal's algorithm.

/// Union-find over elements `0..len` with path compression and union by
/// rank. Each element starts as its own singleton set.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Create `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Find the representative of the set containing `element`.
    ///
    /// Compresses the path: every element visited on the way up is
    /// re-parented directly to the root.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b` by rank: the lower-rank root
    /// is attached under the higher-rank root; on equal rank, `a`'s root
    /// becomes the parent and its rank increments.
    ///
    /// Returns `true` if the sets were distinct.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_b] < self.rank[root_a] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }

        true
    }

    /// Whether `a` and `b` are currently in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of elements (not sets).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
