use std::collections::HashMap;

/// Node identifier as it appears in the input (a person's name, a letter).
pub type NodeId = String;

/// Cost of traversing an edge, as seen by weighted traversals.
pub trait EdgeWeight: Copy {
    fn cost(&self) -> f64;
}

/// Unweighted edges cost one hop.
impl EdgeWeight for () {
    fn cost(&self) -> f64 {
        1.0
    }
}

impl EdgeWeight for f64 {
    fn cost(&self) -> f64 {
        *self
    }
}

/// One direction of an undirected edge in the adjacency list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W> {
    pub target: NodeId,
    pub weight: W,
}

/// In-memory undirected graph: node → ordered adjacency list.
///
/// Every edge is stored twice, once under each endpoint. Nodes are registered
/// the first time they appear on either side of an edge. Self-loops and
/// parallel edges are kept as given.
#[derive(Debug, Clone)]
pub struct Graph<W> {
    adjacency: HashMap<NodeId, Vec<Edge<W>>>,
}

/// Graph whose edges all have unit length.
pub type UnweightedGraph = Graph<()>;

/// Graph whose edges carry a real-valued length.
pub type WeightedGraph = Graph<f64>;

impl<W: Copy> Graph<W> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(node_count),
        }
    }

    /// Register a node with no edges. No-op if it already exists.
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), Vec::new());
        }
    }

    /// Add an undirected edge: appends `a → b` and `b → a`.
    ///
    /// Both endpoints are registered before either direction is appended, so
    /// a self-loop yields two entries in the node's own list.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: W) {
        self.add_node(a);
        self.add_node(b);
        self.push(a, b, weight);
        self.push(b, a, weight);
    }

    fn push(&mut self, from: &str, to: &str, weight: W) {
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push(Edge {
                target: to.to_string(),
                weight,
            });
        }
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Adjacency list of a node. Empty for unknown nodes.
    pub fn neighbors(&self, id: &str) -> &[Edge<W>] {
        self.adjacency.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Iterate over all registered node IDs (arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(|k| k.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (each is stored in both directions).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum::<usize>() / 2
    }
}

impl<W: Copy> Default for Graph<W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = WeightedGraph::new();
        g.add_edge("B", "C", 2.0);
        assert_eq!(
            g.neighbors("B"),
            &[Edge { target: "C".to_string(), weight: 2.0 }]
        );
        assert_eq!(
            g.neighbors("C"),
            &[Edge { target: "B".to_string(), weight: 2.0 }]
        );
    }

    #[test]
    fn test_adjacency_keeps_insertion_order() {
        let mut g = UnweightedGraph::new();
        g.add_edge("Alice", "Bob", ());
        g.add_edge("Alice", "Diana", ());
        g.add_edge("Alice", "Carol", ());
        let targets: Vec<&str> = g.neighbors("Alice").iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["Bob", "Diana", "Carol"]);
    }

    #[test]
    fn test_self_loop_stored_twice() {
        let mut g = UnweightedGraph::new();
        g.add_edge("Eve", "Eve", ());
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.neighbors("Eve").len(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("A", "B", 4.0);
        assert_eq!(g.neighbors("A").len(), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let g = UnweightedGraph::new();
        assert!(!g.contains_node("Zeta"));
        assert!(g.neighbors("Zeta").is_empty());
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut g = UnweightedGraph::new();
        g.add_edge("A", "B", ());
        g.add_node("A");
        g.add_node("C");
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.neighbors("A").len(), 1);
        assert!(g.neighbors("C").is_empty());
    }

    #[test]
    fn test_edge_weight_costs() {
        assert_eq!(().cost(), 1.0);
        assert_eq!(2.5f64.cost(), 2.5);
    }
}
