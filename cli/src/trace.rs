use std::fmt;
use std::io::{self, Write};

use influence_core::TraversalObserver;

/// Printed when a traversal's start node is absent.
pub const NODE_NOT_FOUND_MESSAGE: &str = "Name not present in graph";

/// Streams traversal events as plain text lines.
///
/// A settle prints a blank line then `"{node} is {distance} from start"`;
/// every relaxation attempt prints `"{to} is {distance} from {from}"`; a
/// missing start node prints [`NODE_NOT_FOUND_MESSAGE`].
/// The first write error stops further output and is returned by `finish`.
pub struct ConsoleTrace<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(args) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> TraversalObserver for ConsoleTrace<W> {
    fn on_settle(&mut self, node: &str, distance: f64) {
        self.emit(format_args!("\n{} is {} from start\n", node, distance));
    }

    fn on_relax(&mut self, from: &str, to: &str, distance: f64, _improved: bool) {
        self.emit(format_args!("{} is {} from {}\n", to, distance, from));
    }

    fn on_missing_start(&mut self, _start: &str) {
        self.emit(format_args!("{}\n", NODE_NOT_FOUND_MESSAGE));
    }
}

/// Forwards only missing-start notices; settles and relaxations are dropped.
pub struct MissingStartOnly<O>(pub O);

impl<O: TraversalObserver> TraversalObserver for MissingStartOnly<O> {
    fn on_missing_start(&mut self, start: &str) {
        self.0.on_missing_start(start);
    }
}
