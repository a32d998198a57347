use std::io::Write;

use influence_core::{round_score, DistanceMap, TraversalEvent};
use serde::Serialize;

use crate::error::CliResult;
use crate::pipeline::Analysis;
use crate::settings::OutputFormat;

/// Printed in place of a score that has no value.
pub const UNDEFINED_SCORE: &str = "undefined";

pub fn render<W: Write>(format: OutputFormat, analyses: &[Analysis], out: &mut W) -> CliResult<()> {
    match format {
        OutputFormat::Text => render_text(analyses, out),
        OutputFormat::Json => render_json(analyses, out),
    }
}

/// One rounded score per line, in run order.
///
/// A missing start node was already announced by the live trace while the
/// traversal ran, so its run only prints `undefined` here.
fn render_text<W: Write>(analyses: &[Analysis], out: &mut W) -> CliResult<()> {
    for analysis in analyses {
        match &analysis.score {
            Ok(score) => writeln!(out, "{}", round_score(*score))?,
            Err(_) => writeln!(out, "{}", UNDEFINED_SCORE)?,
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ReportRow<'a> {
    mode: &'static str,
    algorithm: &'static str,
    start: &'a str,
    nodes: usize,
    edges: usize,
    distances: &'a DistanceMap,
    score: Option<f64>,
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [TraversalEvent]>,
}

impl<'a> From<&'a Analysis> for ReportRow<'a> {
    fn from(a: &'a Analysis) -> Self {
        Self {
            mode: a.kind.name(),
            algorithm: a.kind.algorithm(),
            start: &a.start,
            nodes: a.nodes,
            edges: a.edges,
            distances: &a.distances,
            score: a.score.as_ref().ok().map(|s| round_score(*s)),
            error: a.score.as_ref().err().map(|e| e.to_string()),
            trace: (!a.events.is_empty()).then_some(a.events.as_slice()),
        }
    }
}

fn render_json<W: Write>(analyses: &[Analysis], out: &mut W) -> CliResult<()> {
    let rows: Vec<ReportRow<'_>> = analyses.iter().map(ReportRow::from).collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}
