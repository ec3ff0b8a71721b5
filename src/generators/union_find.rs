use crate::error::MazeError;

/// Partition of `0..len` into disjoint sets, each element starting as its own root.
///
/// Implementors only provide [`UnionFind::find`] and [`UnionFind::link`]; the set
/// operations are shared so that every implementation answers queries identically.
pub trait UnionFind {
    /// Returns the representative of the set containing `x`.
    fn find(&mut self, x: usize) -> usize;

    /// Makes root `x` point at `y`. Callers must pass a current root as `x`.
    fn link(&mut self, x: usize, y: usize);

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merges the sets of `x` and `y`, which must not be connected yet.
    fn union(&mut self, x: usize, y: usize) -> Result<(), MazeError> {
        let (root_x, root_y) = (self.find(x), self.find(y));
        if root_x == root_y {
            return Err(MazeError::AlreadyConnected { x, y });
        }
        self.link(root_x, root_y);
        Ok(())
    }

    fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merges the sets of `x` and `y` unless they already are the same set.
    /// Returns whether a merge happened.
    fn try_union(&mut self, x: usize, y: usize) -> bool {
        let (root_x, root_y) = (self.find(x), self.find(y));
        if root_x == root_y {
            return false;
        }
        self.link(root_x, root_y);
        true
    }
}

/// Union-find with full path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Option<usize>>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        DisjointSet {
            parent: vec![None; size],
        }
    }
}

impl UnionFind for DisjointSet {
    fn find(&mut self, x: usize) -> usize {
        let mut encountered = Vec::new();
        let mut root = x;
        while let Some(parent) = self.parent[root] {
            encountered.push(root);
            root = parent;
        }
        // Point the whole chain straight at the root
        for node in encountered {
            self.parent[node] = Some(root);
        }
        root
    }

    fn link(&mut self, x: usize, y: usize) {
        debug_assert!(self.parent[x].is_none(), "{} is not a root", x);
        self.parent[x] = Some(y);
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

/// Reference union-find that walks the parent chain without compressing it.
#[derive(Debug, Clone)]
pub struct SlowDisjointSet {
    parent: Vec<Option<usize>>,
}

impl SlowDisjointSet {
    pub fn new(size: usize) -> Self {
        SlowDisjointSet {
            parent: vec![None; size],
        }
    }
}

impl UnionFind for SlowDisjointSet {
    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while let Some(parent) = self.parent[root] {
            root = parent;
        }
        root
    }

    fn link(&mut self, x: usize, y: usize) {
        debug_assert!(self.parent[x].is_none(), "{} is not a root", x);
        self.parent[x] = Some(y);
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}
