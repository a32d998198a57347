use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use serde::{Serialize, Serializer};

use crate::error::TraversalError;
use crate::graph::{EdgeWeight, Graph, NodeId};
use crate::observer::TraversalObserver;

/// Shortest known distance from a fixed source to every reachable node.
///
/// Built by a traversal and handed to the caller; there are no mutators.
/// The source itself is included at distance 0.
/// Serializes as a map keyed by node ID, in ID order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMap {
    distances: HashMap<NodeId, f64>,
}

impl DistanceMap {
    pub fn get(&self, node: &str) -> Option<f64> {
        self.distances.get(node).copied()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.distances.contains_key(node)
    }

    /// Number of reachable nodes, source included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.distances.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Sum of all distances, the source's 0 included.
    pub fn total_distance(&self) -> f64 {
        self.distances.values().sum()
    }

    /// Entries ordered by distance, then node ID. Stable across runs.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    fn from_borrowed(distances: HashMap<&str, f64>) -> Self {
        Self {
            distances: distances
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}

impl Serialize for DistanceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        serializer.collect_map(entries)
    }
}

impl<S: Into<NodeId>> FromIterator<(S, f64)> for DistanceMap {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            distances: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// BFS distances (in hops) from `start` to every reachable node.
///
/// Edge weights, if any, are ignored: every edge counts as one hop.
/// Returns [`TraversalError::NodeNotFound`] when `start` is not in the graph.
pub fn bfs_distances<W: Copy>(
    graph: &Graph<W>,
    start: &str,
) -> Result<DistanceMap, TraversalError> {
    bfs_observed(graph, start, ())
}

/// BFS with every settle and relaxation reported to `observer`.
///
/// A node is recorded the first time it is reached. Since all edges have
/// the same length, first-visit order equals layer order and the recorded
/// hop count is minimal.
pub fn bfs_observed<W: Copy, O: TraversalObserver>(
    graph: &Graph<W>,
    start: &str,
    mut observer: O,
) -> Result<DistanceMap, TraversalError> {
    if !graph.contains_node(start) {
        observer.on_missing_start(start);
        return Err(TraversalError::NodeNotFound(start.to_string()));
    }

    let mut visited: HashMap<&str, u32> = HashMap::new();
    let mut queue: VecDeque<(&str, u32)> = VecDeque::new();

    visited.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        observer.on_settle(current, f64::from(depth));
        let next = depth + 1;

        for edge in graph.neighbors(current) {
            let target = edge.target.as_str();
            let unseen = !visited.contains_key(target);
            observer.on_relax(current, target, f64::from(next), unseen);
            if unseen {
                visited.insert(target, next);
                queue.push_back((target, next));
            }
        }
    }

    tracing::debug!(start, reachable = visited.len(), "bfs complete");

    Ok(DistanceMap::from_borrowed(
        visited
            .into_iter()
            .map(|(node, depth)| (node, f64::from(depth)))
            .collect(),
    ))
}

/// Priority queue entry, ordered so `BinaryHeap` pops the smallest distance.
#[derive(Debug)]
struct QueueEntry<'a> {
    node: &'a str,
    distance: f64,
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap; ties settle in node ID order.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(self.node))
    }
}

/// Dijkstra distances (sum of edge costs) from `start` to every reachable node.
///
/// Correct for non-negative costs only. Works on unweighted graphs too, where
/// every edge costs 1 and the result equals [`bfs_distances`].
pub fn dijkstra_distances<W: EdgeWeight>(
    graph: &Graph<W>,
    start: &str,
) -> Result<DistanceMap, TraversalError> {
    dijkstra_observed(graph, start, ())
}

/// Dijkstra with every settle and relaxation reported to `observer`.
///
/// Uses lazy deletion: an improved distance pushes a fresh queue entry and
/// leaves the stale one in place. Stale entries are dropped on pop because
/// their node is already settled.
pub fn dijkstra_observed<W: EdgeWeight, O: TraversalObserver>(
    graph: &Graph<W>,
    start: &str,
    mut observer: O,
) -> Result<DistanceMap, TraversalError> {
    if !graph.contains_node(start) {
        observer.on_missing_start(start);
        return Err(TraversalError::NodeNotFound(start.to_string()));
    }

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry {
        node: start,
        distance: 0.0,
    });

    while let Some(QueueEntry { node: current, .. }) = queue.pop() {
        if !settled.insert(current) {
            continue;
        }
        let Some(&distance) = distances.get(current) else {
            continue;
        };
        observer.on_settle(current, distance);

        for edge in graph.neighbors(current) {
            let target = edge.target.as_str();
            let candidate = distance + edge.weight.cost();
            let improved = match distances.get(target) {
                None => true,
                Some(&known) => candidate < known,
            };
            observer.on_relax(current, target, candidate, improved);

            if improved {
                distances.insert(target, candidate);
                queue.push(QueueEntry {
                    node: target,
                    distance: candidate,
                });
            }
        }
    }

    tracing::debug!(start, reachable = distances.len(), "dijkstra complete");

    Ok(DistanceMap::from_borrowed(distances))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{UnweightedGraph, WeightedGraph};
    use crate::observer::TraversalEvent;

    fn node(i: u64) -> String {
        format!("n{}", i)
    }

    fn make_chain(n: u64) -> UnweightedGraph {
        let mut g = UnweightedGraph::new();
        for i in 0..n - 1 {
            g.add_edge(&node(i), &node(i + 1), ());
        }
        g
    }

    fn make_star(leaves: u64) -> UnweightedGraph {
        let mut g = UnweightedGraph::new();
        for i in 1..=leaves {
            g.add_edge("hub", &node(i), ());
        }
        g
    }

    fn make_cycle(n: u64) -> UnweightedGraph {
        let mut g = UnweightedGraph::new();
        for i in 0..n {
            g.add_edge(&node(i), &node((i + 1) % n), ());
        }
        g
    }

    fn make_weighted(edges: &[(&str, &str, f64)]) -> WeightedGraph {
        let mut g = WeightedGraph::new();
        for &(a, b, w) in edges {
            g.add_edge(a, b, w);
        }
        g
    }

    fn settled_distances(events: &[TraversalEvent]) -> Vec<f64> {
        events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::Settled { distance, .. } => Some(*distance),
                TraversalEvent::Relaxed { .. } => None,
            })
            .collect()
    }

    // --- BFS tests ---

    #[test]
    fn test_bfs_social_example() {
        let mut g = UnweightedGraph::new();
        g.add_edge("Diana", "Alice", ());
        g.add_edge("Alice", "Bob", ());

        let d = bfs_distances(&g, "Diana").unwrap();
        let expected: DistanceMap = [("Diana", 0.0), ("Alice", 1.0), ("Bob", 2.0)]
            .into_iter()
            .collect();
        assert_eq!(d, expected);
    }

    #[test]
    fn test_bfs_chain() {
        let g = make_chain(6);
        let d = bfs_distances(&g, "n0").unwrap();
        assert_eq!(d.len(), 6);
        assert_eq!(d.get("n5"), Some(5.0));
        assert_eq!(d.get("n0"), Some(0.0));
    }

    #[test]
    fn test_bfs_star() {
        let g = make_star(100);
        let d = bfs_distances(&g, "hub").unwrap();
        assert_eq!(d.len(), 101);
        assert!(d.iter().filter(|(n, _)| *n != "hub").all(|(_, dist)| dist == 1.0));
    }

    #[test]
    fn test_bfs_from_leaf_crosses_hub() {
        let g = make_star(5);
        let d = bfs_distances(&g, "n1").unwrap();
        assert_eq!(d.get("hub"), Some(1.0));
        assert_eq!(d.get("n5"), Some(2.0));
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let g = make_cycle(5);
        let d = bfs_distances(&g, "n0").unwrap();
        assert_eq!(d.len(), 5);
        // Both ways round the ring: n2 and n3 are two hops away.
        assert_eq!(d.get("n2"), Some(2.0));
        assert_eq!(d.get("n3"), Some(2.0));
    }

    #[test]
    fn test_bfs_undirected() {
        let g = make_chain(2);
        let d = bfs_distances(&g, "n1").unwrap();
        assert_eq!(d.get("n0"), Some(1.0));
    }

    #[test]
    fn test_bfs_start_not_in_graph() {
        let g = make_chain(3);
        let err = bfs_distances(&g, "Zeta").unwrap_err();
        assert_eq!(err, TraversalError::NodeNotFound("Zeta".to_string()));
    }

    #[test]
    fn test_missing_start_notifies_observer() {
        #[derive(Default)]
        struct Missing(Vec<String>);
        impl TraversalObserver for Missing {
            fn on_missing_start(&mut self, start: &str) {
                self.0.push(start.to_string());
            }
        }

        let g = make_chain(3);
        let mut missing = Missing::default();
        assert!(bfs_observed(&g, "Zeta", &mut missing).is_err());
        assert!(dijkstra_observed(&g, "Omega", &mut missing).is_err());
        assert!(bfs_observed(&g, "n0", &mut missing).is_ok());
        assert_eq!(missing.0, vec!["Zeta", "Omega"]);
    }

    #[test]
    fn test_distance_map_serializes_in_id_order() {
        let d: DistanceMap = [("C", 2.0), ("A", 0.0), ("B", 1.5)].into_iter().collect();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"A":0.0,"B":1.5,"C":2.0}"#);
    }

    #[test]
    fn test_bfs_empty_graph() {
        let g = UnweightedGraph::new();
        assert!(bfs_distances(&g, "n0").is_err());
    }

    #[test]
    fn test_bfs_isolated_node() {
        let mut g = UnweightedGraph::new();
        g.add_node("solo");
        g.add_edge("a", "b", ());
        let d = bfs_distances(&g, "solo").unwrap();
        assert_eq!(d.len(), 1);
        assert_eq!(d.get("solo"), Some(0.0));
    }

    #[test]
    fn test_bfs_disconnected_component_unreached() {
        let mut g = make_chain(3);
        g.add_edge("x", "y", ());
        let d = bfs_distances(&g, "n0").unwrap();
        assert!(!d.contains("x"));
        assert!(!d.contains("y"));
    }

    #[test]
    fn test_bfs_self_loop() {
        let mut g = UnweightedGraph::new();
        g.add_edge("n0", "n0", ());
        let d = bfs_distances(&g, "n0").unwrap();
        assert_eq!(d.len(), 1);
        assert_eq!(d.get("n0"), Some(0.0));
    }

    #[test]
    fn test_bfs_parallel_edges() {
        let mut g = UnweightedGraph::new();
        g.add_edge("n0", "n1", ());
        g.add_edge("n0", "n1", ());
        g.add_edge("n0", "n1", ());
        let d = bfs_distances(&g, "n0").unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.get("n1"), Some(1.0));
    }

    #[test]
    fn test_bfs_ignores_weights() {
        let g = make_weighted(&[("A", "B", 10.0), ("B", "C", 0.5)]);
        let d = bfs_distances(&g, "A").unwrap();
        assert_eq!(d.get("C"), Some(2.0));
    }

    #[test]
    fn test_bfs_idempotent() {
        let g = make_cycle(7);
        let first = bfs_distances(&g, "n3").unwrap();
        let second = bfs_distances(&g, "n3").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bfs_settles_layer_by_layer() {
        let g = make_star(4);
        let mut events: Vec<TraversalEvent> = Vec::new();
        bfs_observed(&g, "n1", &mut events).unwrap();
        let layers = settled_distances(&events);
        assert_eq!(layers, vec![0.0, 1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_bfs_relax_marks_first_visit_only() {
        let g = make_chain(3);
        let mut events: Vec<TraversalEvent> = Vec::new();
        bfs_observed(&g, "n0", &mut events).unwrap();
        let improved = events
            .iter()
            .filter(|e| matches!(e, TraversalEvent::Relaxed { improved: true, .. }))
            .count();
        // Every node except the start is discovered exactly once.
        assert_eq!(improved, 2);
    }

    // --- Dijkstra tests ---

    #[test]
    fn test_dijkstra_weighted_example() {
        let g = make_weighted(&[("B", "C", 2.0), ("C", "D", 3.0)]);
        let d = dijkstra_distances(&g, "B").unwrap();
        let expected: DistanceMap = [("B", 0.0), ("C", 2.0), ("D", 5.0)].into_iter().collect();
        assert_eq!(d, expected);
    }

    #[test]
    fn test_dijkstra_prefers_lighter_detour() {
        // Direct A-B costs 10, the detour through C costs 3.
        let g = make_weighted(&[("A", "B", 10.0), ("A", "C", 1.0), ("C", "B", 2.0)]);
        let d = dijkstra_distances(&g, "A").unwrap();
        assert_eq!(d.get("B"), Some(3.0));
        assert_eq!(d.get("C"), Some(1.0));
    }

    #[test]
    fn test_dijkstra_stale_entries_skipped() {
        // B is first offered 10 (via A), then improved to 3 (via C): two queue
        // entries for B, but it must settle once.
        let g = make_weighted(&[("A", "B", 10.0), ("A", "C", 1.0), ("C", "B", 2.0)]);
        let mut events: Vec<TraversalEvent> = Vec::new();
        dijkstra_observed(&g, "A", &mut events).unwrap();

        let b_settles: Vec<f64> = events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::Settled { node, distance } if node == "B" => Some(*distance),
                _ => None,
            })
            .collect();
        assert_eq!(b_settles, vec![3.0]);
        assert_eq!(settled_distances(&events).len(), 3);
    }

    #[test]
    fn test_dijkstra_trace_sequence() {
        let g = make_weighted(&[("B", "C", 2.0), ("C", "D", 3.0)]);
        let mut events: Vec<TraversalEvent> = Vec::new();
        dijkstra_observed(&g, "B", &mut events).unwrap();

        let relaxed = |from: &str, to: &str, distance: f64, improved: bool| TraversalEvent::Relaxed {
            from: from.to_string(),
            to: to.to_string(),
            distance,
            improved,
        };
        let settled = |node: &str, distance: f64| TraversalEvent::Settled {
            node: node.to_string(),
            distance,
        };

        assert_eq!(
            events,
            vec![
                settled("B", 0.0),
                relaxed("B", "C", 2.0, true),
                settled("C", 2.0),
                relaxed("C", "B", 4.0, false),
                relaxed("C", "D", 5.0, true),
                settled("D", 5.0),
                relaxed("D", "C", 8.0, false),
            ]
        );
    }

    #[test]
    fn test_dijkstra_settle_order_non_decreasing() {
        let g = make_weighted(&[
            ("A", "B", 4.0),
            ("A", "C", 1.0),
            ("C", "B", 1.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
            ("D", "E", 0.5),
        ]);
        let mut events: Vec<TraversalEvent> = Vec::new();
        dijkstra_observed(&g, "A", &mut events).unwrap();
        let order = settled_distances(&events);
        assert_eq!(order.len(), 5);
        assert!(order.windows(2).all(|w| w[0] <= w[1]), "settle order {:?}", order);
    }

    #[test]
    fn test_dijkstra_zero_weight_edges() {
        let g = make_weighted(&[("A", "B", 0.0), ("B", "C", 0.0)]);
        let d = dijkstra_distances(&g, "A").unwrap();
        assert_eq!(d.get("C"), Some(0.0));
        assert_eq!(d.total_distance(), 0.0);
    }

    #[test]
    fn test_dijkstra_parallel_edges_take_minimum() {
        let g = make_weighted(&[("A", "B", 7.0), ("A", "B", 2.0)]);
        let d = dijkstra_distances(&g, "A").unwrap();
        assert_eq!(d.get("B"), Some(2.0));
    }

    #[test]
    fn test_dijkstra_unit_weights_match_bfs() {
        let g = make_cycle(9);
        assert_eq!(
            dijkstra_distances(&g, "n0").unwrap(),
            bfs_distances(&g, "n0").unwrap()
        );
    }

    #[test]
    fn test_dijkstra_start_not_in_graph() {
        let g = make_weighted(&[("B", "C", 2.0)]);
        let err = dijkstra_distances(&g, "Zeta").unwrap_err();
        assert_eq!(err, TraversalError::NodeNotFound("Zeta".to_string()));
    }

    #[test]
    fn test_dijkstra_disconnected_component_unreached() {
        let g = make_weighted(&[("A", "B", 1.0), ("X", "Y", 1.0)]);
        let d = dijkstra_distances(&g, "A").unwrap();
        assert_eq!(d.len(), 2);
        assert!(!d.contains("X"));
    }

    #[test]
    fn test_dijkstra_idempotent() {
        let g = make_weighted(&[("A", "B", 1.5), ("B", "C", 2.25), ("A", "C", 4.0)]);
        assert_eq!(
            dijkstra_distances(&g, "A").unwrap(),
            dijkstra_distances(&g, "A").unwrap()
        );
    }

    // --- DistanceMap ---

    #[test]
    fn test_distance_map_sorted_is_stable() {
        let d: DistanceMap = [("b", 1.0), ("a", 1.0), ("s", 0.0), ("c", 2.5)]
            .into_iter()
            .collect();
        assert_eq!(d.sorted(), vec![("s", 0.0), ("a", 1.0), ("b", 1.0), ("c", 2.5)]);
    }

    #[test]
    fn test_distance_map_total() {
        let d: DistanceMap = [("B", 0.0), ("C", 2.0), ("D", 5.0)].into_iter().collect();
        assert_eq!(d.total_distance(), 7.0);
        assert_eq!(d.len(), 3);
        assert!(!d.is_empty());
    }
}
