//! Load → traverse → score, once per selected graph.

use influence_core::{
    bfs_observed, dijkstra_observed, influence_score, load_unweighted, load_weighted,
    DistanceMap, TraversalError, TraversalEvent, TraversalObserver, TracingObserver,
};

use crate::error::{AnalysisError, CliResult};
use crate::settings::{GraphKind, Settings};
use crate::trace::MissingStartOnly;

/// Outcome of one traversal plus its score.
#[derive(Debug)]
pub struct Analysis {
    pub kind: GraphKind,
    pub start: String,
    pub nodes: usize,
    pub edges: usize,
    /// Empty when the start node was missing.
    pub distances: DistanceMap,
    /// Recorded Dijkstra events; empty unless the settings ask for them.
    pub events: Vec<TraversalEvent>,
    pub score: Result<f64, AnalysisError>,
}

impl Analysis {
    fn new(
        kind: GraphKind,
        start: &str,
        (nodes, edges): (usize, usize),
        traversal: Result<DistanceMap, TraversalError>,
        events: Vec<TraversalEvent>,
    ) -> Self {
        let (distances, score) = match traversal {
            Ok(distances) => {
                let score = influence_score(&distances).map_err(AnalysisError::from);
                (distances, score)
            }
            Err(e) => {
                tracing::warn!(graph = kind.name(), start, "start node not present in graph");
                (DistanceMap::default(), Err(e.into()))
            }
        };

        Self {
            kind,
            start: start.to_string(),
            nodes,
            edges,
            distances,
            events,
            score,
        }
    }
}

/// Run every graph selected by `settings.mode`, in order.
///
/// `live` receives Dijkstra events as they happen (the text trace) and a
/// missing-start notice from either traversal. Load failures abort the whole
/// run; a missing start node or an undefined score only marks that run's
/// `score` as an error.
pub fn run(settings: &Settings, live: &mut dyn TraversalObserver) -> CliResult<Vec<Analysis>> {
    settings
        .mode
        .kinds()
        .iter()
        .map(|&kind| analyze(settings, kind, &mut *live))
        .collect()
}

fn analyze(
    settings: &Settings,
    kind: GraphKind,
    live: &mut dyn TraversalObserver,
) -> CliResult<Analysis> {
    match kind {
        GraphKind::Unweighted => {
            let graph = load_unweighted(&settings.unweighted)?;
            let start = settings.unweighted_start.as_str();
            let traversal = bfs_observed(&graph, start, (TracingObserver, MissingStartOnly(live)));
            Ok(Analysis::new(
                kind,
                start,
                (graph.node_count(), graph.edge_count()),
                traversal,
                Vec::new(),
            ))
        }
        GraphKind::Weighted => {
            let graph = load_weighted(&settings.weighted)?;
            let start = settings.weighted_start.as_str();
            let mut events: Vec<TraversalEvent> = Vec::new();
            let traversal = if settings.records_trace() {
                dijkstra_observed(&graph, start, (TracingObserver, (&mut events, live)))
            } else {
                dijkstra_observed(&graph, start, (TracingObserver, live))
            };
            Ok(Analysis::new(
                kind,
                start,
                (graph.node_count(), graph.edge_count()),
                traversal,
                events,
            ))
        }
    }
}
