//! Disjoint set forest used by the connected-component labelling.

pub(crate) struct DisjointSetForest {
    /// parent[i] is the index of the parent of element i; roots are their
    /// own parent.
    parent: Vec<usize>,
    /// tree_size[i] is the size of the tree rooted at i.
    tree_size: Vec<usize>,
}

impl DisjointSetForest {
    /// Forest of `count` singletons.
    pub(crate) fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            tree_size: vec![1; count],
        }
    }

    /// Add a new singleton and return its index.
    pub(crate) fn push(&mut self) -> usize {
        let i = self.parent.len();
        self.parent.push(i);
        self.tree_size.push(1);
        i
    }

    /// Root of the tree containing `i`, halving the path on the way.
    pub(crate) fn root(&mut self, i: usize) -> usize {
        let mut j = i;
        while self.parent[j] != j {
            let grandparent = self.parent[self.parent[j]];
            self.parent[j] = grandparent;
            j = grandparent;
        }
        j
    }

    /// Union by size of the trees containing `i` and `j`.
    pub(crate) fn union(&mut self, i: usize, j: usize) {
        let p = self.root(i);
        let q = self.root(j);
        if p == q {
            return;
        }
        if self.tree_size[p] < self.tree_size[q] {
            self.parent[p] = q;
            self.tree_size[q] += self.tree_size[p];
        } else {
            self.parent[q] = p;
            self.tree_size[p] += self.tree_size[q];
        }
    }
}
