//! Single-source shortest paths (Dijkstra).
//!
//! A [`ShortestPath`] is computed once against the graph as it is at call time
//! and owns copies of everything it needs. Later graph mutations do not
//! change it; a stale snapshot keeps answering with the old distances.

use crate::error::{GraphError, Result};
use crate::graph::{Edge, GraphView};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Best known distance to a vertex and the last edge on that path.
#[derive(Debug, Clone)]
struct PathEntry {
    distance: f64,
    edge: Option<Edge>,
}

/// Distances and predecessor edges from one source vertex.
#[derive(Debug, Clone)]
pub struct ShortestPath {
    source: String,
    entries: HashMap<String, PathEntry>,
}

impl ShortestPath {
    /// Run Dijkstra from `source` over `graph`.
    ///
    /// Every vertex starts at `+∞` except the source at `0`. The unsettled
    /// vertex with the smallest distance is settled next (ties go to the one
    /// added first), then each outgoing edge to a vertex that is not yet settled
    /// is relaxed. Edge weights are never negative, so settled distances are
    /// final.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `source` is not in the graph.
    pub fn compute<G>(graph: &G, source: &str) -> Result<Self>
    where
        G: GraphView + ?Sized,
    {
        let root = graph.vertex(source).ok_or_else(|| GraphError::VertexNotFound {
            name: source.to_string(),
        })?;
        debug!("Computing shortest paths from {source}");

        let mut entries: HashMap<String, PathEntry> = graph
            .vertex_names()
            .into_iter()
            .map(|name| {
                (
                    name.to_string(),
                    PathEntry {
                        distance: f64::INFINITY,
                        edge: None,
                    },
                )
            })
            .collect();
        if let Some(entry) = entries.get_mut(source) {
            entry.distance = 0.0;
        }

        let mut unsettled: Vec<&str> = vec![root.name()];
        let mut settled: HashSet<&str> = HashSet::with_capacity(graph.vertex_count());

        while let Some(index) = Self::closest(&unsettled, &entries) {
            let current = unsettled.remove(index);
            settled.insert(current);
            let base = entries[current].distance;
            trace!("Settled {current} at distance {base}");

            for edge in graph.outgoing(current) {
                let next = edge.to();
                if settled.contains(next) {
                    continue;
                }
                let candidate = base + edge.weight() as f64;
                let Some(entry) = entries.get_mut(next) else {
                    continue;
                };
                if candidate < entry.distance {
                    trace!("Relaxed {next}: {} -> {candidate}", entry.distance);
                    entry.distance = candidate;
                    entry.edge = Some(edge.clone());
                    if !unsettled.contains(&next) {
                        unsettled.push(next);
                    }
                }
            }
        }

        Ok(Self {
            source: source.to_string(),
            entries,
        })
    }

    /// Index of the unsettled vertex with the smallest distance.
    fn closest(unsettled: &[&str], entries: &HashMap<String, PathEntry>) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, name) in unsettled.iter().enumerate() {
            let distance = entries.get(*name).map_or(f64::INFINITY, |e| e.distance);
            match best {
                Some((_, shortest)) if distance >= shortest => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Name of the source vertex.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Shortest distance from the source to `to`.
    ///
    /// `f64::INFINITY` when `to` is unreachable or was not in the graph when
    /// the snapshot was taken.
    pub fn distance_to(&self, to: &str) -> f64 {
        self.entries
            .get(to)
            .map_or(f64::INFINITY, |entry| entry.distance)
    }

    /// Check whether `to` is reachable from the source.
    pub fn has_path_to(&self, to: &str) -> bool {
        self.distance_to(to).is_finite()
    }

    /// The edges of a shortest path from the source to `to`, source first.
    ///
    /// Returns `None` when `to` is unreachable, and an empty path when `to` is
    /// the source itself.
    pub fn path_to(&self, to: &str) -> Option<Vec<Edge>> {
        if !self.has_path_to(to) {
            return None;
        }

        let mut path = Vec::new();
        let mut edge = self.entries.get(to).and_then(|entry| entry.edge.as_ref());
        while let Some(current) = edge {
            path.push(current.clone());
            edge = self
                .entries
                .get(current.from())
                .and_then(|entry| entry.edge.as_ref());
        }
        path.reverse();

        Some(path)
    }
}
