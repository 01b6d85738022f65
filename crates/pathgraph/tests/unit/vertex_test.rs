//! Unit tests for Vertex identity, location, data, and adjacency views.

use pathgraph::{Graph, Point, Vertex};

fn from_and_to() -> Graph {
    let mut graph = Graph::new();
    graph.add_vertex("From", Point::new(10, 1), Some("")).unwrap();
    graph.add_vertex("To", Point::new(20, 1), Some("")).unwrap();
    graph
}

#[test]
fn test_vertex_fields() {
    let mut graph = Graph::new();
    graph
        .add_vertex("Warehouse", Point::new(3, 7), Some("dock 4"))
        .unwrap();

    let vertex = graph.vertex("Warehouse").unwrap();
    assert_eq!(vertex.name(), "Warehouse");
    assert_eq!(vertex.location(), Point::new(3, 7));
    assert_eq!(vertex.data(), Some("dock 4"));
    assert_eq!(vertex.out_degree(), 0);
    assert_eq!(vertex.in_degree(), 0);
}

#[test]
fn test_vertex_without_data() {
    let mut graph = Graph::new();
    graph.add_vertex("Bare", Point::default(), None).unwrap();

    assert_eq!(graph.vertex("Bare").and_then(Vertex::data), None);
}

#[test]
fn test_vertex_location_and_data_are_mutable() {
    let mut graph = from_and_to();

    let vertex = graph.vertex_mut("From").unwrap();
    vertex.set_location(Point::new(-5, 2));
    vertex.set_data(Some("moved".to_string()));

    let vertex = graph.vertex("From").unwrap();
    assert_eq!(vertex.location(), Point::new(-5, 2));
    assert_eq!(vertex.data(), Some("moved"));
    assert_eq!(graph.vertex_at_location(Point::new(-5, 2)).map(Vertex::name), Some("From"));
}

#[test]
fn test_directed_edge_sides() {
    let mut graph = from_and_to();
    graph.add_edge("From", "To", "Test Edge", 100, true).unwrap();

    let from = graph.vertex("From").unwrap();
    let to = graph.vertex("To").unwrap();
    assert_eq!(from.out_degree(), 1);
    assert_eq!(from.in_degree(), 0);
    assert_eq!(to.out_degree(), 0);
    assert_eq!(to.in_degree(), 1);

    assert!(graph.has_edge("From", "To"));
    assert!(!graph.has_edge("To", "From"));
}

#[test]
fn test_bidirectional_edge_sides() {
    let mut graph = from_and_to();
    graph.add_edge("From", "To", "Test Edge", 100, false).unwrap();

    for name in ["From", "To"] {
        let vertex = graph.vertex(name).unwrap();
        assert_eq!(vertex.out_degree(), 1, "{name} outgoing");
        assert_eq!(vertex.in_degree(), 1, "{name} incoming");
    }
    assert!(graph.has_edge("From", "To"));
    assert!(graph.has_edge("To", "From"));
}

#[test]
fn test_adjacency_ids_resolve_to_matching_edges() {
    let mut graph = from_and_to();
    graph.add_vertex("Other", Point::new(30, 1), None).unwrap();
    graph.add_edge("From", "To", "a", 1, true).unwrap();
    graph.add_edge("From", "Other", "b", 2, true).unwrap();

    let from = graph.vertex("From").unwrap();
    let targets: Vec<&str> = from
        .outgoing_edges()
        .iter()
        .filter_map(|id| graph.edge(*id))
        .map(|edge| edge.to())
        .collect();
    assert_eq!(targets, vec!["To", "Other"]);

    let to = graph.vertex("To").unwrap();
    let incoming = graph.edge(to.incoming_edges()[0]).unwrap();
    assert!(incoming.connects("From", "To"));
}

#[test]
fn test_removing_edge_clears_both_sides() {
    let mut graph = from_and_to();
    graph.add_edge("From", "To", "Test Edge", 100, true).unwrap();

    assert!(graph.remove_edge("From", "To"));
    assert_eq!(graph.vertex("From").map(Vertex::out_degree), Some(0));
    assert_eq!(graph.vertex("To").map(Vertex::in_degree), Some(0));
}
