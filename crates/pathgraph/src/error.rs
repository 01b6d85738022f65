//! Error types for pathgraph operations.
//!
//! Structural no-ops (duplicate vertex, missing edge) are not errors; they are
//! reported as `false`. Only invalid arguments and persistence failures surface
//! as [`GraphError`].

use thiserror::Error;

/// Result type alias for pathgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Caller passed an argument the graph cannot accept
    /// (empty vertex name, edge endpoint missing from the graph).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was wrong
        message: String,
    },

    /// A query was rooted at a vertex that is not in the graph.
    #[error("Vertex not found: {name}")]
    VertexNotFound {
        /// Name of the missing vertex
        name: String,
    },

    /// The persisted document could not be parsed or has the wrong shape.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The reader or writer failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an I/O error from a message and optional source.
    pub fn io<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            GraphError::io("Failed to read or write graph document", Some(err))
        } else {
            GraphError::serialization("Malformed graph document", Some(err))
        }
    }
}
