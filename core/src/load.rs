//! CSV adjacency-list loaders.
//!
//! Two input shapes are supported:
//!
//! - unweighted: no header, one `node,neighbor` pair per line
//! - weighted: one header line, then `node,neighbor,weight`
//!
//! Fields are split on `,` only: quote characters are part of the node ID.
//! Fields are trimmed, blank lines skipped, and every edge is inserted in
//! both directions. The first line of a weighted file is always dropped,
//! whatever it holds. Weighted lines without a weight that parses as a finite
//! number are dropped without an error.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::LoadError;
use crate::graph::{UnweightedGraph, WeightedGraph};

/// Load an unweighted graph from a headerless `node,neighbor` file.
pub fn load_unweighted(path: impl AsRef<Path>) -> Result<UnweightedGraph, LoadError> {
    let path = path.as_ref();
    let graph = read_unweighted(open(path)?)?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded unweighted graph"
    );
    Ok(graph)
}

/// Load a weighted graph from a `node,neighbor,weight` file with a header.
pub fn load_weighted(path: impl AsRef<Path>) -> Result<WeightedGraph, LoadError> {
    let path = path.as_ref();
    let graph = read_weighted(open(path)?)?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded weighted graph"
    );
    Ok(graph)
}

/// Build an unweighted graph from any reader.
pub fn read_unweighted<R: Read>(reader: R) -> Result<UnweightedGraph, LoadError> {
    let mut rdr = reader_builder().from_reader(reader);
    let mut graph = UnweightedGraph::new();

    for record in rdr.records() {
        let record = record?;
        let Some((node, neighbor)) = endpoints(&record)? else {
            continue;
        };
        graph.add_edge(node, neighbor, ());
    }

    Ok(graph)
}

/// Build a weighted graph from any reader. The first line is a header.
pub fn read_weighted<R: Read>(reader: R) -> Result<WeightedGraph, LoadError> {
    let mut reader = BufReader::new(reader);
    let mut header = Vec::new();
    reader
        .read_until(b'\n', &mut header)
        .map_err(csv::Error::from)?;

    let mut rdr = reader_builder().from_reader(reader);
    let mut graph = WeightedGraph::new();

    for record in rdr.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        let (Some(node), Some(neighbor), Some(weight)) =
            (record.get(0), record.get(1), parse_weight(record.get(2)))
        else {
            // Header sits above the reader, so csv line numbers are one short.
            tracing::trace!(line = line_of(&record) + 1, "skipping edge without a usable weight");
            continue;
        };
        graph.add_edge(node, neighbor, weight);
    }

    Ok(graph)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .quoting(false)
        .trim(Trim::All)
        .flexible(true);
    builder
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

/// First two fields of a record, or None for a whitespace-only line.
fn endpoints(record: &StringRecord) -> Result<Option<(&str, &str)>, LoadError> {
    if is_blank(record) {
        return Ok(None);
    }
    match (record.get(0), record.get(1)) {
        (Some(node), Some(neighbor)) => Ok(Some((node, neighbor))),
        _ => Err(LoadError::MalformedRecord {
            line: line_of(record),
            found: record.len(),
        }),
    }
}

fn parse_weight(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|w| w.is_finite())
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
