use influence_core::{
    bfs_distances, dijkstra_distances, influence_score, round_score, WeightedGraph,
};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: influence-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Ternary tree (deep paths, no cycles)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense clusters joined by a thin bridge");
        println!();
        println!("Default node_count: 200000");
        return;
    }

    println!("influence-bench");
    println!("===============");
    println!();

    let generators: Vec<(&str, fn(u64) -> WeightedGraph)> = match mode {
        "tree" => vec![("Ternary tree", gen_tree)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Ternary tree", gen_tree as fn(u64) -> WeightedGraph),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> WeightedGraph, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    println!(
        "Generated in {:.2}s: {} nodes, {} edges",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count()
    );

    let start = node(0);
    println!();
    println!("{:>10} {:>12} {:>10} {:>10}", "algorithm", "reached", "score", "time");
    println!("{:->10} {:->12} {:->10} {:->10}", "", "", "", "");

    let t = Instant::now();
    let bfs = bfs_distances(&graph, &start);
    report_row("bfs", t.elapsed().as_secs_f64(), bfs.as_ref().ok());

    let t = Instant::now();
    let dijkstra = dijkstra_distances(&graph, &start);
    report_row("dijkstra", t.elapsed().as_secs_f64(), dijkstra.as_ref().ok());

    if let Ok(distances) = &dijkstra {
        if let Some((far, d)) = distances.sorted().last() {
            println!();
            println!("Farthest from {}: {} at weighted distance {}", start, far, d);
        }
    }
    println!();
}

fn report_row(algorithm: &str, secs: f64, distances: Option<&influence_core::DistanceMap>) {
    match distances {
        Some(d) => {
            let score = influence_score(d)
                .map(|s| round_score(s).to_string())
                .unwrap_or_else(|_| "undefined".to_string());
            println!(
                "{:>10} {:>12} {:>10} {:>8.1}ms",
                algorithm,
                d.len(),
                score,
                secs * 1000.0
            );
        }
        None => println!("{:>10} start node missing", algorithm),
    }
}

// ---------------------------------------------------------------------------
// Generators: O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    /// Edge weight in 1..=10 with a quarter-step fraction.
    fn weight(&mut self) -> f64 {
        1.0 + self.next(37) as f64 * 0.25
    }
}

fn node(i: u64) -> String {
    format!("p{}", i)
}

/// Ternary tree: each node gets 3 children. Log depth, exponential width.
fn gen_tree(node_count: u64) -> WeightedGraph {
    let mut graph = WeightedGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(42);

    graph.add_node(&node(0));
    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * 3);
        for &parent in &frontier {
            for _ in 0..3 {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                graph.add_edge(&node(parent), &node(child), rng.weight());
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each node links to its K nearest ring neighbours; each link is rewired to
/// a random node with probability p. High clustering, short paths.
fn gen_small_world(node_count: u64) -> WeightedGraph {
    let k = 5u64;
    let p = 0.05f64;
    let mut graph = WeightedGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let mut neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i {
                    neighbor = rewired;
                }
            }
            graph.add_edge(&node(i), &node(neighbor), rng.weight());
        }
    }

    graph
}

/// Erdos-Renyi: ~5 uniform random edges per node, no structure.
fn gen_random(node_count: u64) -> WeightedGraph {
    let mut graph = WeightedGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        graph.add_node(&node(i));
    }
    for _ in 0..node_count * 5 {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_edge(&node(from), &node(to), rng.weight());
        }
    }

    graph
}

/// Barbell: two dense clusters joined by a 10-node chain.
///
/// Every path between the clusters crosses the bridge, so half the graph
/// sits at a large distance from node 0.
fn gen_barbell(node_count: u64) -> WeightedGraph {
    let bridge_len = 10u64;
    let cluster = (node_count.saturating_sub(bridge_len) / 2).max(2);
    let mut graph = WeightedGraph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(99999);

    let mut densify = |graph: &mut WeightedGraph, offset: u64| {
        for i in 0..cluster {
            for _ in 0..10u64.min(cluster - 1) {
                let target = rng.next(cluster);
                if target != i {
                    graph.add_edge(&node(offset + i), &node(offset + target), rng.weight());
                }
            }
        }
    };

    densify(&mut graph, 0);

    let bridge_start = cluster;
    for i in 0..=bridge_len {
        graph.add_edge(&node(bridge_start + i - 1), &node(bridge_start + i), 1.0);
    }

    densify(&mut graph, bridge_start + bridge_len);

    graph
}
