//! Traversal event hooks.
//!
//! Traversals report every settle and every relaxation attempt to a
//! [`TraversalObserver`]. The algorithm itself never prints; callers pick a
//! sink: `()` to ignore events, a `Vec<TraversalEvent>` to record them, or
//! [`TracingObserver`] to forward them to the `tracing` facade.

use serde::Serialize;

use crate::graph::NodeId;

/// Callback sink for traversal progress.
pub trait TraversalObserver {
    /// `node` left the frontier with its final distance.
    fn on_settle(&mut self, _node: &str, _distance: f64) {}

    /// An edge `from → to` was examined, offering `distance` to `to`.
    /// `improved` is true when the offer was recorded.
    fn on_relax(&mut self, _from: &str, _to: &str, _distance: f64, _improved: bool) {}

    /// The traversal was asked to start from a node the graph does not hold.
    /// Called once, before the traversal returns its error.
    fn on_missing_start(&mut self, _start: &str) {}
}

impl TraversalObserver for () {}

impl<O: TraversalObserver + ?Sized> TraversalObserver for &mut O {
    fn on_settle(&mut self, node: &str, distance: f64) {
        (**self).on_settle(node, distance);
    }

    fn on_relax(&mut self, from: &str, to: &str, distance: f64, improved: bool) {
        (**self).on_relax(from, to, distance, improved);
    }

    fn on_missing_start(&mut self, start: &str) {
        (**self).on_missing_start(start);
    }
}

/// A recorded traversal event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalEvent {
    Settled {
        node: NodeId,
        distance: f64,
    },
    Relaxed {
        from: NodeId,
        to: NodeId,
        distance: f64,
        improved: bool,
    },
}

impl TraversalObserver for Vec<TraversalEvent> {
    fn on_settle(&mut self, node: &str, distance: f64) {
        self.push(TraversalEvent::Settled {
            node: node.to_string(),
            distance,
        });
    }

    fn on_relax(&mut self, from: &str, to: &str, distance: f64, improved: bool) {
        self.push(TraversalEvent::Relaxed {
            from: from.to_string(),
            to: to.to_string(),
            distance,
            improved,
        });
    }
}

/// Forwards events to `tracing` at TRACE level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TraversalObserver for TracingObserver {
    fn on_settle(&mut self, node: &str, distance: f64) {
        tracing::trace!(node, distance, "settled");
    }

    fn on_relax(&mut self, from: &str, to: &str, distance: f64, improved: bool) {
        tracing::trace!(from, to, distance, improved, "relaxed");
    }
}

/// Fan events out to two observers.
impl<A: TraversalObserver, B: TraversalObserver> TraversalObserver for (A, B) {
    fn on_settle(&mut self, node: &str, distance: f64) {
        self.0.on_settle(node, distance);
        self.1.on_settle(node, distance);
    }

    fn on_relax(&mut self, from: &str, to: &str, distance: f64, improved: bool) {
        self.0.on_relax(from, to, distance, improved);
        self.1.on_relax(from, to, distance, improved);
    }

    fn on_missing_start(&mut self, start: &str) {
        self.0.on_missing_start(start);
        self.1.on_missing_start(start);
    }
}
