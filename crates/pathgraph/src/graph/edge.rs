//! Weighted, labeled edges between named vertices.

use crate::codec::json::EdgeDocument;

/// Largest weight an edge can carry.
///
/// Path lengths are reported as `f64`. Sums of weights in this range stay
/// exact for any path shorter than 2^22 edges.
pub const MAX_WEIGHT: u64 = i32::MAX as u64;

/// A directed, weighted edge between two vertices.
///
/// Endpoints are stored as vertex names rather than references; the owning
/// [`Graph`](super::Graph) resolves them. Equality and hashing use the value
/// tuple `(from, to, label, weight, directed)`, so two edges built from the
/// same values compare equal regardless of where they are stored.
///
/// A bidirectional connection is two `Edge` values with opposite endpoints,
/// both marked `directed == false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    from: String,
    to: String,
    label: String,
    weight: u64,
    directed: bool,
}

impl Edge {
    /// Create an edge from `from` to `to`.
    ///
    /// `weight` is clamped to `0..=MAX_WEIGHT`.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
        weight: i64,
        directed: bool,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: label.into(),
            weight: u64::try_from(weight).unwrap_or(0).min(MAX_WEIGHT),
            directed,
        }
    }

    /// Name of the source vertex.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Name of the destination vertex.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// The edge label, empty when none was given.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// The edge weight.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Set a new weight.
    ///
    /// Weights outside `0..=MAX_WEIGHT` are rejected: returns `false` and the
    /// previous weight is kept.
    pub fn set_weight(&mut self, weight: i64) -> bool {
        match u64::try_from(weight) {
            Ok(w) if w <= MAX_WEIGHT => {
                self.weight = w;
                true
            }
            _ => false,
        }
    }

    /// `true` for a one-way edge, `false` for one half of a bidirectional pair.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Check whether this edge runs from `from` to `to`.
    pub fn connects(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }

    /// The mirrored edge (`to` → `from`) with the same label, weight and flag.
    pub(crate) fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            label: self.label.clone(),
            weight: self.weight,
            directed: self.directed,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(&EdgeDocument::from(self)).map_err(|_| std::fmt::Error)?;
        write!(f, "Edge {json}")
    }
}
