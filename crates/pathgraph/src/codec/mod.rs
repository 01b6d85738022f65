//! Persistence codec.
//!
//! The graph is stored as a single JSON document:
//!
//! ```text
//! {
//!   "vertices": [ { "name", "location": {"x", "y"}, "data",
//!                   "incomingEdges": [..], "outgoingEdges": [..] } ],
//!   "edges":    [ { "label", "from", "to", "weight", "directed" } ]
//! }
//! ```
//!
//! The top-level `edges` list is authoritative on load; the per-vertex edge
//! lists are written for readers of the document and ignored when loading.

pub mod json;

pub use json::{EdgeDocument, GraphDocument, VertexDocument};

/// Output options for saving a graph.
#[derive(Debug, Clone, Default)]
pub struct JsonOptions {
    /// Indent the document for human readers instead of writing it compactly
    pub pretty: bool,
}

impl JsonOptions {
    /// Options for indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}
