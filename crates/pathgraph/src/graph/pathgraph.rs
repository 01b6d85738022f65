//! Main Graph interface: vertex and edge storage, mutation, and queries.

use super::algorithms;
use super::edge::{Edge, MAX_WEIGHT};
use super::shortest_path::ShortestPath;
use super::types::{EdgeId, GraphView, Point};
use super::vertex::Vertex;
use crate::codec::{self, JsonOptions};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::{BTreeMap, HashSet};
use std::io::{Read, Write};

/// An in-memory weighted graph of named vertices.
///
/// The graph owns every [`Vertex`] (indexed by name) and every [`Edge`]
/// (indexed by a generated [`EdgeId`]). Vertices refer to their edges by ID
/// and edges refer to their endpoints by name, so there are no reference
/// cycles. Every edge's endpoints are always present in the graph.
///
/// Not safe for concurrent mutation; wrap in a lock or clone a snapshot for
/// parallel readers.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: BTreeMap<String, Vertex>,
    edges: BTreeMap<EdgeId, Edge>,
    edge_counter: EdgeId,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges in the graph. A bidirectional pair counts twice.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get a vertex by name.
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertices.get(name)
    }

    /// Get a vertex by name for updating its location or data.
    pub fn vertex_mut(&mut self, name: &str) -> Option<&mut Vertex> {
        self.vertices.get_mut(name)
    }

    /// All vertices, ordered by name.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Add a vertex.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the vertex was added, `Ok(false)` if a vertex with that
    /// name already exists (the graph is unchanged).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if `name` is empty.
    pub fn add_vertex(&mut self, name: &str, location: Point, data: Option<&str>) -> Result<bool> {
        if name.is_empty() {
            return Err(GraphError::invalid_argument("Vertex name cannot be empty"));
        }
        if self.vertices.contains_key(name) {
            debug!("Vertex {name} already exists");
            return Ok(false);
        }

        debug!("Adding vertex: name={name}, location={location}");
        let vertex = Vertex::new(name, location, data.map(str::to_string));
        self.vertices.insert(name.to_string(), vertex);
        Ok(true)
    }

    /// Remove a vertex and every edge touching it.
    ///
    /// Both halves of any bidirectional pair are removed, and the edges are
    /// detached from the other endpoints' adjacency lists.
    ///
    /// Returns `false` if the vertex does not exist.
    pub fn remove_vertex(&mut self, name: &str) -> bool {
        let Some(mut vertex) = self.vertices.remove(name) else {
            return false;
        };

        let incident = vertex.take_edges();
        debug!("Removing vertex {name} with {} incident edges", incident.len());
        for id in incident {
            let Some(edge) = self.edges.remove(&id) else {
                continue;
            };
            let other = if edge.from() == name { edge.to() } else { edge.from() };
            if other != name {
                if let Some(neighbor) = self.vertices.get_mut(other) {
                    neighbor.detach(id);
                }
            }
        }

        true
    }

    /// Remove every vertex and edge.
    pub fn clear(&mut self) {
        debug!("Clearing graph");
        self.vertices.clear();
        self.edges.clear();
        self.edge_counter = 0;
    }

    /// Add an edge between two vertices in the graph.
    ///
    /// A directed edge is added only if `from` has no outgoing edge to `to`.
    /// A non-directed edge is stored as two mirrored edges and is added only
    /// if neither direction exists yet; if either does, nothing changes.
    /// `weight` is clamped to `0..=MAX_WEIGHT` so path distances stay exact.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the edge (or pair) was inserted, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if either endpoint is not in
    /// the graph.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        label: &str,
        weight: i64,
        directed: bool,
    ) -> Result<bool> {
        for endpoint in [from, to] {
            if !self.vertices.contains_key(endpoint) {
                return Err(GraphError::invalid_argument(format!(
                    "Vertex '{endpoint}' is not in the graph"
                )));
            }
        }

        if self.find_edge_id(from, to).is_some() {
            debug!("Edge {from} -> {to} already exists");
            return Ok(false);
        }
        if !directed && self.find_edge_id(to, from).is_some() {
            debug!("Edge {to} -> {from} already exists, not pairing {from} <-> {to}");
            return Ok(false);
        }

        debug!("Adding edge: {from} -> {to}, label={label:?}, weight={weight}, directed={directed}");
        let edge = Edge::new(from, to, label, weight, directed);
        let mirror = (!directed && from != to).then(|| edge.reversed());
        self.insert_edge(edge);
        if let Some(mirror) = mirror {
            self.insert_edge(mirror);
        }

        Ok(true)
    }

    /// Remove the edge from `from` to `to`.
    ///
    /// If that edge is one half of a bidirectional pair, the mirrored edge is
    /// removed too.
    ///
    /// Returns `true` if the forward edge existed and was removed.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let Some(id) = self.find_edge_id(from, to) else {
            return false;
        };
        let Some(edge) = self.detach_edge(id) else {
            return false;
        };
        debug!("Removed edge {from} -> {to}");

        if !edge.is_directed() {
            if let Some(mirror) = self.find_edge_id(to, from) {
                self.detach_edge(mirror);
                trace!("Removed mirrored edge {to} -> {from}");
            }
        }

        true
    }

    /// Find the outgoing edge from `from` that ends at `to`.
    pub fn find_edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.find_edge_id(from, to).and_then(|id| self.edges.get(&id))
    }

    /// Check whether `from` has an outgoing edge ending at `to`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.find_edge_id(from, to).is_some()
    }

    /// Change the weight of the edge from `from` to `to`.
    ///
    /// Both halves of a bidirectional pair are updated. Returns `false` if the
    /// edge does not exist or `weight` is outside `0..=MAX_WEIGHT`; nothing
    /// changes then.
    pub fn set_edge_weight(&mut self, from: &str, to: &str, weight: i64) -> bool {
        if u64::try_from(weight).map_or(true, |w| w > MAX_WEIGHT) {
            return false;
        }
        self.update_pair(from, to, |edge| {
            edge.set_weight(weight);
        })
    }

    /// Change the label of the edge from `from` to `to`.
    ///
    /// Both halves of a bidirectional pair are updated. Returns `false` if the
    /// edge does not exist.
    pub fn set_edge_label(&mut self, from: &str, to: &str, label: &str) -> bool {
        self.update_pair(from, to, |edge| edge.set_label(label))
    }

    /// Find the first vertex (in name order) placed at `location`.
    pub fn vertex_at_location(&self, location: Point) -> Option<&Vertex> {
        self.vertices.values().find(|v| v.location() == location)
    }

    /// Names of all vertices reachable from `start`, in breadth-first order.
    ///
    /// Includes `start` itself; empty if `start` is not in the graph.
    pub fn bfs(&self, start: &str) -> Vec<&str> {
        algorithms::reachable(self, start).order().to_vec()
    }

    /// Check whether a single breadth-first traversal reaches every vertex.
    ///
    /// Always `true` for zero or one vertex. With `starting_point == None` the
    /// first vertex by name is the root; an unknown root gives `false`.
    ///
    /// Only reachability from that one root is tested, so with one-way edges
    /// the answer depends on the root chosen.
    pub fn is_graph_connected(&self, starting_point: Option<&str>) -> bool {
        algorithms::is_connected_from(self, starting_point)
    }

    /// Check whether there is a path of outgoing edges from `from` to `to`.
    pub fn are_vertices_connected(&self, from: &str, to: &str) -> bool {
        algorithms::are_connected(self, from, to)
    }

    /// Compute shortest paths from `from` to every other vertex.
    ///
    /// The result is a snapshot; later changes to the graph do not affect it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `from` is not in the graph.
    pub fn path_information(&self, from: &str) -> Result<ShortestPath> {
        ShortestPath::compute(self, from)
    }

    /// Write the graph as a compact JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the writer fails.
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        self.save_with(writer, &JsonOptions::default())
    }

    /// Write the graph as a JSON document using `options`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the writer fails.
    pub fn save_with<W: Write>(&self, writer: W, options: &JsonOptions) -> Result<()> {
        debug!(
            "Saving graph: {} vertices, {} edges",
            self.vertex_count(),
            self.edge_count()
        );
        codec::json::encode(self, writer, options)
    }

    /// Replace the graph's contents with a JSON document read from `reader`.
    ///
    /// The document is parsed and validated in full before anything changes;
    /// on any error the graph is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] for malformed or structurally
    /// invalid documents and [`GraphError::Io`] if the reader fails.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        let loaded = codec::json::decode(reader)?;
        debug!(
            "Loaded graph: {} vertices, {} edges",
            loaded.vertex_count(),
            loaded.edge_count()
        );
        *self = loaded;
        Ok(())
    }

    /// The graph as a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if encoding fails.
    pub fn to_json_string(&self) -> Result<String> {
        let document = codec::json::to_document(self);
        serde_json::to_string(&document)
            .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
    }

    // Private helper methods

    fn next_edge_id(&mut self) -> EdgeId {
        let id = self.edge_counter;
        self.edge_counter += 1;
        id
    }

    fn find_edge_id(&self, from: &str, to: &str) -> Option<EdgeId> {
        let vertex = self.vertices.get(from)?;
        vertex.outgoing_edges().iter().copied().find(|id| {
            self.edges
                .get(id)
                .is_some_and(|edge| edge.to() == to)
        })
    }

    fn insert_edge(&mut self, edge: Edge) -> EdgeId {
        let id = self.next_edge_id();
        if let Some(source) = self.vertices.get_mut(edge.from()) {
            source.attach(id, &edge);
        }
        if edge.from() != edge.to() {
            if let Some(target) = self.vertices.get_mut(edge.to()) {
                target.attach(id, &edge);
            }
        }
        trace!("Edge {id} stored: {} -> {}", edge.from(), edge.to());
        self.edges.insert(id, edge);
        id
    }

    fn detach_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.remove(&id)?;
        for endpoint in [edge.from(), edge.to()] {
            if let Some(vertex) = self.vertices.get_mut(endpoint) {
                vertex.detach(id);
            }
        }
        Some(edge)
    }

    fn update_pair(&mut self, from: &str, to: &str, mut apply: impl FnMut(&mut Edge)) -> bool {
        let Some(id) = self.find_edge_id(from, to) else {
            return false;
        };
        let mirror = match self.edges.get(&id) {
            Some(edge) if !edge.is_directed() && from != to => self.find_edge_id(to, from),
            _ => None,
        };

        for id in std::iter::once(id).chain(mirror) {
            if let Some(edge) = self.edges.get_mut(&id) {
                apply(edge);
            }
        }
        true
    }
}

impl GraphView for Graph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertices.get(name)
    }

    fn vertex_names(&self) -> Vec<&str> {
        self.vertices.keys().map(String::as_str).collect()
    }

    fn outgoing(&self, name: &str) -> Vec<&Edge> {
        self.vertices
            .get(name)
            .map(|vertex| {
                vertex
                    .outgoing_edges()
                    .iter()
                    .filter_map(|id| self.edges.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        if self.vertex_count() != other.vertex_count() || self.edge_count() != other.edge_count() {
            return false;
        }

        let same_vertices = self.vertices.iter().all(|(name, vertex)| {
            other.vertices.get(name).is_some_and(|theirs| {
                vertex.location() == theirs.location() && vertex.data() == theirs.data()
            })
        });

        same_vertices && {
            let ours: HashSet<&Edge> = self.edges.values().collect();
            let theirs: HashSet<&Edge> = other.edges.values().collect();
            ours == theirs
        }
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = self.to_json_string().map_err(|_| std::fmt::Error)?;
        write!(f, "Graph {json}")
    }
}
