//! Unit tests for Edge values, weights, equality, and display.

use pathgraph::Edge;
use std::collections::HashSet;

#[test]
fn test_edge_creation() {
    let edge = Edge::new("From", "To", "Test Edge", 100, false);

    assert_eq!(edge.from(), "From");
    assert_eq!(edge.to(), "To");
    assert_eq!(edge.label(), "Test Edge");
    assert_eq!(edge.weight(), 100);
    assert!(!edge.is_directed());
    assert!(edge.connects("From", "To"));
    assert!(!edge.connects("To", "From"));
}

#[test]
fn test_set_weight_rejects_negative() {
    let mut edge = Edge::new("a", "b", "", 10, true);

    assert!(edge.set_weight(42));
    assert_eq!(edge.weight(), 42);

    assert!(!edge.set_weight(-1));
    assert_eq!(edge.weight(), 42);

    assert!(edge.set_weight(0));
    assert_eq!(edge.weight(), 0);
}

#[test]
fn test_set_label() {
    let mut edge = Edge::new("a", "b", "old", 1, true);
    edge.set_label("new");
    assert_eq!(edge.label(), "new");
}

#[test]
fn test_edge_equality_is_by_value() {
    let a = Edge::new("a", "b", "road", 5, true);
    let b = Edge::new("a", "b", "road", 5, true);
    assert_eq!(a, b);

    assert_ne!(a, Edge::new("a", "b", "road", 6, true));
    assert_ne!(a, Edge::new("a", "b", "rail", 5, true));
    assert_ne!(a, Edge::new("a", "b", "road", 5, false));
    assert_ne!(a, Edge::new("b", "a", "road", 5, true));
}

#[test]
fn test_equal_edges_hash_together() {
    let mut set = HashSet::new();
    set.insert(Edge::new("a", "b", "road", 5, true));
    set.insert(Edge::new("a", "b", "road", 5, true));
    set.insert(Edge::new("b", "a", "road", 5, true));

    assert_eq!(set.len(), 2);
}

#[test]
fn test_edge_display_is_json() {
    let edge = Edge::new("From", "To", "Test Edge", 100, false);
    let text = edge.to_string();

    let json = text.strip_prefix("Edge ").unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["from"], "From");
    assert_eq!(value["to"], "To");
    assert_eq!(value["label"], "Test Edge");
    assert_eq!(value["weight"], 100);
    assert_eq!(value["directed"], false);
}
