use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_UNWEIGHTED_PATH: &str = "Files/unweighted_network.csv";
pub const DEFAULT_WEIGHTED_PATH: &str = "Files/weighted_network.csv";
pub const DEFAULT_UNWEIGHTED_START: &str = "Diana";
pub const DEFAULT_WEIGHTED_START: &str = "B";

/// Compute influence scores for a node in a social graph.
///
/// Runs BFS over an unweighted edge list and Dijkstra over a weighted one,
/// then prints `(reachable - 1) / total_distance` for each, rounded to two
/// decimal places. With no arguments the fixed input files under `Files/`
/// are used.
#[derive(Parser, Debug, Clone)]
#[command(name = "influence")]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// Headerless `node,neighbor` edge list
    #[arg(long, env = "INFLUENCE_UNWEIGHTED", default_value = DEFAULT_UNWEIGHTED_PATH)]
    pub unweighted: PathBuf,

    /// `node,neighbor,weight` edge list with one header line
    #[arg(long, env = "INFLUENCE_WEIGHTED", default_value = DEFAULT_WEIGHTED_PATH)]
    pub weighted: PathBuf,

    /// Start node for the BFS run
    #[arg(long, env = "INFLUENCE_UNWEIGHTED_START", default_value = DEFAULT_UNWEIGHTED_START)]
    pub unweighted_start: String,

    /// Start node for the Dijkstra run
    #[arg(long, env = "INFLUENCE_WEIGHTED_START", default_value = DEFAULT_WEIGHTED_START)]
    pub weighted_start: String,

    /// Which graphs to analyse
    #[arg(long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Omit the Dijkstra settle/relax trace
    #[arg(long)]
    pub no_trace: bool,

    /// Log debug events to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Unweighted then weighted
    All,
    Unweighted,
    Weighted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scores (and trace) as plain lines
    Text,
    /// One JSON array describing every run
    Json,
}

/// The two kinds of graph the tool analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Unweighted,
    Weighted,
}

impl GraphKind {
    pub fn name(self) -> &'static str {
        match self {
            GraphKind::Unweighted => "unweighted",
            GraphKind::Weighted => "weighted",
        }
    }

    pub fn algorithm(self) -> &'static str {
        match self {
            GraphKind::Unweighted => "bfs",
            GraphKind::Weighted => "dijkstra",
        }
    }
}

impl Mode {
    pub fn kinds(self) -> &'static [GraphKind] {
        match self {
            Mode::All => &[GraphKind::Unweighted, GraphKind::Weighted],
            Mode::Unweighted => &[GraphKind::Unweighted],
            Mode::Weighted => &[GraphKind::Weighted],
        }
    }
}

impl Settings {
    /// Whether Dijkstra events should be captured into the JSON report.
    pub fn records_trace(&self) -> bool {
        self.format == OutputFormat::Json && !self.no_trace
    }

    /// Whether Dijkstra events should be streamed to stdout as text.
    pub fn streams_trace(&self) -> bool {
        self.format == OutputFormat::Text && !self.no_trace
    }
}
