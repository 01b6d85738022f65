//! Breadth-first reachability over a [`GraphView`].
//!
//! Every traversal owns its own [`VisitSet`]; nothing is marked on the
//! vertices themselves, so traversals can be nested or run side by side on a
//! shared `&Graph`.

use crate::graph::GraphView;
use log::trace;
use std::collections::{HashSet, VecDeque};

/// Signal returned by a traversal callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep traversing
    Continue,
    /// Stop the traversal now; vertices visited so far stay recorded
    Stop,
}

/// The vertices reached by one traversal, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct VisitSet<'g> {
    order: Vec<&'g str>,
    seen: HashSet<&'g str>,
    stopped: bool,
}

impl<'g> VisitSet<'g> {
    fn mark(&mut self, name: &'g str) -> bool {
        if self.seen.insert(name) {
            self.order.push(name);
            true
        } else {
            false
        }
    }

    /// Was `name` visited?
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Number of visited vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` if nothing was visited (the start vertex did not exist).
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited vertex names in the order they were reached.
    pub fn order(&self) -> &[&'g str] {
        &self.order
    }

    /// `true` if the callback cut the traversal short.
    pub fn stopped_early(&self) -> bool {
        self.stopped
    }
}

/// Breadth-first traversal from `start`, following outgoing edges only.
///
/// `visit` is called once per vertex as it is first reached, starting with
/// `start` itself. Neighbors are enqueued in the order of each vertex's
/// outgoing edge list. Returning [`Control::Stop`] ends the traversal; the
/// returned set still holds everything visited up to that point.
///
/// An unknown `start` yields an empty set.
pub fn breadth_first<'g, G, F>(graph: &'g G, start: &str, mut visit: F) -> VisitSet<'g>
where
    G: GraphView + ?Sized,
    F: FnMut(&str) -> Control,
{
    let mut visited = VisitSet::default();
    let Some(root) = graph.vertex(start) else {
        trace!("Traversal root {start} not in graph");
        return visited;
    };

    let mut queue = VecDeque::new();
    visited.mark(root.name());
    queue.push_back(root.name());
    if visit(root.name()) == Control::Stop {
        visited.stopped = true;
        return visited;
    }

    while let Some(current) = queue.pop_front() {
        for edge in graph.outgoing(current) {
            let next = edge.to();
            if visited.mark(next) {
                trace!("Visited {next} via {current}");
                queue.push_back(next);
                if visit(next) == Control::Stop {
                    visited.stopped = true;
                    return visited;
                }
            }
        }
    }

    visited
}

/// Every vertex reachable from `start` (including `start`).
pub fn reachable<'g, G>(graph: &'g G, start: &str) -> VisitSet<'g>
where
    G: GraphView + ?Sized,
{
    breadth_first(graph, start, |_| Control::Continue)
}

/// Check whether one traversal from `root` reaches every vertex.
///
/// Graphs with zero or one vertex are always connected. With `root == None`
/// the first vertex in the graph's iteration order is used.
///
/// This tests reachability from a single root only. In a graph where
/// reachability is asymmetric the answer depends on the root: for
/// `a -> b`, rooting at `a` reports connected while rooting at `b` does not.
pub fn is_connected_from<G>(graph: &G, root: Option<&str>) -> bool
where
    G: GraphView + ?Sized,
{
    let total = graph.vertex_count();
    if total <= 1 {
        return true;
    }

    let root = match root {
        Some(name) => name,
        None => match graph.vertex_names().first() {
            Some(name) => *name,
            None => return true,
        },
    };

    reachable(graph, root).len() == total
}

/// Check whether `to` is reachable from `from` along outgoing edges.
///
/// Stops as soon as `to` is reached. Unknown vertices are never connected.
pub fn are_connected<G>(graph: &G, from: &str, to: &str) -> bool
where
    G: GraphView + ?Sized,
{
    if !graph.contains_vertex(to) {
        return false;
    }

    let visited = breadth_first(graph, from, |name| {
        if name == to {
            Control::Stop
        } else {
            Control::Continue
        }
    });

    visited.contains(from) && visited.contains(to)
}
