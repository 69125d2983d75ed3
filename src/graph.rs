//! Per-player connectivity graph
//!
//! An undirected, unweighted graph over board cell indices. Each player
//! owns one; an edge joins two adjacent cells of that player's color.
//! Stones never move or change color, so edges are only ever added.

use std::collections::VecDeque;

/// Sparse adjacency-list graph over `0..cell_count`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityGraph {
    adjacency: Vec<Vec<usize>>,
    nodes: Vec<bool>,
    edge_count: usize,
}

impl ConnectivityGraph {
    pub fn new(cell_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); cell_count],
            nodes: vec![false; cell_count],
            edge_count: 0,
        }
    }

    /// Number of cell slots the graph was created for
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Mark a cell as owned by this player
    #[inline]
    pub fn add_node(&mut self, node: usize) {
        self.check_node(node);
        self.nodes[node] = true;
    }

    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        self.check_node(node);
        self.nodes[node]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|&&n| n).count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Record an undirected edge. Adding it again is a no-op, as is a
    /// self-edge.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        assert!(
            a < self.capacity() && b < self.capacity(),
            "edge ({}, {}) is outside a graph of {} cells",
            a,
            b,
            self.capacity()
        );
        if a == b || self.has_edge(a, b) {
            return;
        }
        self.nodes[a] = true;
        self.nodes[b] = true;
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edge_count += 1;
    }

    #[inline]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.check_node(a);
        self.check_node(b);
        self.adjacency[a].contains(&b)
    }

    /// Nodes joined to `node` by an edge, in insertion order
    #[inline]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.check_node(node);
        &self.adjacency[node]
    }

    /// Breadth-first reachability from `src` to `dst`.
    ///
    /// `src == dst` is always connected. Stops at the first sighting of
    /// `dst`.
    pub fn has_path(&self, src: usize, dst: usize) -> bool {
        self.check_bounds(src, dst);
        if src == dst {
            return true;
        }
        if self.adjacency[src].is_empty() || self.adjacency[dst].is_empty() {
            return false;
        }

        let mut visited = vec![false; self.capacity()];
        let mut queue = VecDeque::new();
        visited[src] = true;
        queue.push_back(src);

        while let Some(node) = queue.pop_front() {
            for &next in &self.adjacency[node] {
                if next == dst {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Fewest-edge chain from `src` to `dst`, both ends included
    pub fn shortest_path(&self, src: usize, dst: usize) -> Option<Vec<usize>> {
        self.check_bounds(src, dst);
        if src == dst {
            return Some(vec![src]);
        }

        let mut parent: Vec<Option<usize>> = vec![None; self.capacity()];
        let mut visited = vec![false; self.capacity()];
        let mut queue = VecDeque::new();
        visited[src] = true;
        queue.push_back(src);

        while let Some(node) = queue.pop_front() {
            for &next in &self.adjacency[node] {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                parent[next] = Some(node);
                if next == dst {
                    let mut path = vec![dst];
                    let mut cur = dst;
                    while let Some(p) = parent[cur] {
                        path.push(p);
                        cur = p;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(next);
            }
        }
        None
    }

    #[inline]
    fn check_node(&self, node: usize) {
        assert!(
            node < self.capacity(),
            "node {} is outside a graph of {} cells",
            node,
            self.capacity()
        );
    }

    #[inline]
    fn check_bounds(&self, src: usize, dst: usize) {
        assert!(
            src < self.capacity() && dst < self.capacity(),
            "path query ({}, {}) is outside a graph of {} cells",
            src,
            dst,
            self.capacity()
        );
    }
}
