//! JSON document types and the encode/decode boundary used by save and load.

use super::JsonOptions;
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, Point, Vertex, MAX_WEIGHT};
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Top-level persisted graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Every vertex, with its adjacency written out
    pub vertices: Vec<VertexDocument>,
    /// Every directed edge; both halves of a bidirectional pair appear
    pub edges: Vec<EdgeDocument>,
}

/// A persisted vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexDocument {
    /// Vertex name
    pub name: String,
    /// Vertex location as `{"x": .., "y": ..}`
    pub location: Point,
    /// Optional free-form data, `null` when absent
    #[serde(default)]
    pub data: Option<String>,
    /// Edges ending at this vertex
    #[serde(default)]
    pub incoming_edges: Vec<EdgeDocument>,
    /// Edges starting at this vertex
    #[serde(default)]
    pub outgoing_edges: Vec<EdgeDocument>,
}

/// A persisted directed edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDocument {
    /// Edge label
    pub label: String,
    /// Source vertex name
    pub from: String,
    /// Destination vertex name
    pub to: String,
    /// Non-negative weight
    pub weight: u64,
    /// `false` for one half of a bidirectional pair
    pub directed: bool,
}

impl From<&Edge> for EdgeDocument {
    fn from(edge: &Edge) -> Self {
        Self {
            label: edge.label().to_string(),
            from: edge.from().to_string(),
            to: edge.to().to_string(),
            weight: edge.weight(),
            directed: edge.is_directed(),
        }
    }
}

/// Build the persisted form of `graph`.
///
/// Vertices are written in name order and edges in insertion order.
pub fn to_document(graph: &Graph) -> GraphDocument {
    let vertices = graph
        .vertices()
        .map(|vertex| vertex_to_document(graph, vertex))
        .collect();
    let edges = graph.edges().map(EdgeDocument::from).collect();

    GraphDocument { vertices, edges }
}

fn vertex_to_document(graph: &Graph, vertex: &Vertex) -> VertexDocument {
    let documents = |ids: &[u64]| -> Vec<EdgeDocument> {
        ids.iter()
            .filter_map(|id| graph.edge(*id))
            .map(EdgeDocument::from)
            .collect()
    };

    VertexDocument {
        name: vertex.name().to_string(),
        location: vertex.location(),
        data: vertex.data().map(str::to_string),
        incoming_edges: documents(vertex.incoming_edges()),
        outgoing_edges: documents(vertex.outgoing_edges()),
    }
}

/// Build a fresh graph from a persisted document.
///
/// All vertices are created first, then edges are connected by vertex name.
/// The second half of a bidirectional pair is already present by the time it
/// is read and is skipped. Any other listed edge that cannot be added because
/// it conflicts with one already loaded is dropped with a warning.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if a vertex has an empty name, an edge
/// names a vertex the document does not define, or a weight exceeds
/// [`MAX_WEIGHT`].
pub fn from_document(document: GraphDocument) -> Result<Graph> {
    let mut graph = Graph::new();

    for vertex in &document.vertices {
        let added = graph
            .add_vertex(&vertex.name, vertex.location, vertex.data.as_deref())
            .map_err(|e| GraphError::serialization("Invalid vertex in document", Some(e)))?;
        if !added {
            warn!("Duplicate vertex '{}' in document, keeping the first", vertex.name);
        }
    }

    for edge in &document.edges {
        if edge.weight > MAX_WEIGHT {
            return Err(GraphError::serialization(
                format!(
                    "Edge {} -> {} weight {} exceeds {MAX_WEIGHT}",
                    edge.from, edge.to, edge.weight
                ),
                None::<std::io::Error>,
            ));
        }
        let weight = edge.weight as i64;
        let added = graph
            .add_edge(&edge.from, &edge.to, &edge.label, weight, edge.directed)
            .map_err(|e| GraphError::serialization("Edge references an unknown vertex", Some(e)))?;
        if added {
            continue;
        }

        if completes_pair(&graph, edge) {
            trace!("Edge {} -> {} is the second half of a pair", edge.from, edge.to);
        } else {
            warn!(
                "Dropping edge {} -> {} from document: conflicts with an existing edge",
                edge.from, edge.to
            );
        }
    }

    Ok(graph)
}

/// `true` if `edge` is the mirror half of a bidirectional pair already in
/// `graph`, i.e. the pair was created from its first half.
fn completes_pair(graph: &Graph, edge: &EdgeDocument) -> bool {
    if edge.directed {
        return false;
    }
    let Ok(weight) = i64::try_from(edge.weight) else {
        return false;
    };
    let mirror = Edge::new(&*edge.to, &*edge.from, &*edge.label, weight, false);
    graph.find_edge(&edge.from, &edge.to).is_some()
        && graph.find_edge(&edge.to, &edge.from) == Some(&mirror)
}

/// Serialize `graph` to `writer`.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if writing fails.
pub fn encode<W: Write>(graph: &Graph, mut writer: W, options: &JsonOptions) -> Result<()> {
    let document = to_document(graph);
    if options.pretty {
        serde_json::to_writer_pretty(&mut writer, &document)?;
    } else {
        serde_json::to_writer(&mut writer, &document)?;
    }
    writer
        .flush()
        .map_err(|e| GraphError::io("Failed to flush graph document", Some(e)))
}

/// Parse a graph from `reader`.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] for malformed or structurally invalid
/// input and [`GraphError::Io`] if reading fails.
pub fn decode<R: Read>(reader: R) -> Result<Graph> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    from_document(document)
}
