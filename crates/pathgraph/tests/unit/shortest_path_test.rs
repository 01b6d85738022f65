//! Unit tests for single-source shortest paths.

use pathgraph::{Graph, GraphError, Point, ShortestPath, MAX_WEIGHT};

fn node(i: i32) -> String {
    format!("Node {i}")
}

// 1 -> 2 (4), 2 -> 3 (9), 3 -> 4 (16), 1 <-> 4 (100)
fn create_fixture() -> Graph {
    let mut graph = Graph::new();
    for i in 1..=4 {
        graph.add_vertex(&node(i), Point::new(i, i), Some("")).unwrap();
    }
    for i in 2..=4 {
        let weight = i64::from(i * i);
        graph
            .add_edge(&node(i - 1), &node(i), &format!("Edge {weight}"), weight, true)
            .unwrap();
    }
    graph.add_edge(&node(1), &node(4), "Edge 100", 100, false).unwrap();
    graph
}

#[test]
fn test_distances_from_first_vertex() {
    let graph = create_fixture();
    let sp = graph.path_information(&node(1)).unwrap();

    assert_eq!(sp.source(), "Node 1");
    assert!(sp.has_path_to(&node(2)));
    assert!(sp.has_path_to(&node(3)));
    assert!(sp.has_path_to(&node(4)));

    assert_eq!(sp.distance_to(&node(1)), 0.0);
    assert_eq!(sp.distance_to(&node(2)), 4.0);
    assert_eq!(sp.distance_to(&node(3)), 13.0);
    // Around the chain (4 + 9 + 16) beats the direct edge of 100
    assert_eq!(sp.distance_to(&node(4)), 29.0);
}

#[test]
fn test_distances_and_path_from_third_vertex() {
    let graph = create_fixture();
    let sp = graph.path_information(&node(3)).unwrap();

    assert_eq!(sp.distance_to(&node(4)), 16.0);
    assert_eq!(sp.distance_to(&node(1)), 116.0);
    assert_eq!(sp.distance_to(&node(2)), 120.0);

    let path = sp.path_to(&node(2)).unwrap();
    assert_eq!(path.len(), 3);
    let stops: Vec<&str> = path.iter().map(|e| e.to()).collect();
    assert_eq!(stops, vec!["Node 4", "Node 1", "Node 2"]);
    assert_eq!(path[0].from(), "Node 3");

    let total: u64 = path.iter().map(|e| e.weight()).sum();
    assert_eq!(total as f64, sp.distance_to(&node(2)));
}

#[test]
fn test_path_to_source_is_empty() {
    let graph = create_fixture();
    let sp = graph.path_information(&node(2)).unwrap();
    assert_eq!(sp.path_to(&node(2)), Some(Vec::new()));
}

#[test]
fn test_unreachable_vertex() {
    let mut graph = create_fixture();
    graph.add_vertex("Island", Point::new(9, 9), None).unwrap();

    let sp = graph.path_information(&node(1)).unwrap();
    assert!(!sp.has_path_to("Island"));
    assert_eq!(sp.distance_to("Island"), f64::INFINITY);
    assert_eq!(sp.path_to("Island"), None);
}

#[test]
fn test_vertex_unknown_to_snapshot() {
    let graph = create_fixture();
    let sp = graph.path_information(&node(1)).unwrap();
    assert_eq!(sp.distance_to("Nowhere"), f64::INFINITY);
    assert!(sp.path_to("Nowhere").is_none());
}

#[test]
fn test_unknown_source_fails() {
    let graph = create_fixture();
    let result = graph.path_information("Nowhere");
    assert!(matches!(result, Err(GraphError::VertexNotFound { ref name }) if name == "Nowhere"));
}

#[test]
fn test_snapshot_survives_graph_changes() {
    let mut graph = create_fixture();
    let sp = graph.path_information(&node(3)).unwrap();

    assert!(graph.remove_edge(&node(2), &node(3)));
    assert!(sp.has_path_to(&node(2)));
    assert_eq!(sp.distance_to(&node(2)), 120.0);

    let fresh = graph.path_information(&node(2)).unwrap();
    assert!(!fresh.has_path_to(&node(3)));

    graph.clear();
    assert_eq!(sp.path_to(&node(2)).map(|p| p.len()), Some(3));
}

#[test]
fn test_weight_change_reroutes() {
    let mut graph = create_fixture();
    assert!(graph.set_edge_weight(&node(1), &node(4), 10));

    let sp = graph.path_information(&node(1)).unwrap();
    assert_eq!(sp.distance_to(&node(4)), 10.0);
    assert_eq!(sp.path_to(&node(4)).map(|p| p.len()), Some(1));
}

#[test]
fn test_compute_directly_over_view() {
    let graph = create_fixture();
    let sp = ShortestPath::compute(&graph, &node(4)).unwrap();
    assert_eq!(sp.distance_to(&node(3)), 113.0);
}

#[test]
fn test_large_weights_keep_exact_distances() {
    let mut graph = Graph::new();
    let names = ["a", "b", "c", "d"];
    for (i, name) in names.iter().enumerate() {
        graph.add_vertex(name, Point::new(i as i32, 0), None).unwrap();
    }
    for pair in names.windows(2) {
        graph.add_edge(pair[0], pair[1], "", i64::MAX, true).unwrap();
    }

    let sp = graph.path_information("a").unwrap();
    let path = sp.path_to("d").unwrap();
    let total: u64 = path.iter().map(|e| e.weight()).sum();
    assert_eq!(total, 3 * MAX_WEIGHT);
    assert_eq!(sp.distance_to("d"), total as f64);
}
