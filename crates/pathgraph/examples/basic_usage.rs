//! Basic usage example for pathgraph
//!
//! This example demonstrates:
//! - Building a small road network
//! - Reachability and shortest-path queries
//! - Saving and loading the graph as JSON

use pathgraph::{Graph, JsonOptions, Point};

fn main() -> pathgraph::Result<()> {
    let mut graph = Graph::new();

    println!("Building a small road network...\n");

    for (name, x, y) in [("Depot", 0, 0), ("Mill", 2, 0), ("Market", 4, 1), ("Harbor", 6, 0)] {
        graph.add_vertex(name, Point::new(x, y), None)?;
        println!("✓ Added vertex: {name} at ({x}, {y})");
    }

    graph.add_edge("Depot", "Mill", "mill lane", 2, false)?;
    graph.add_edge("Mill", "Market", "high street", 3, true)?;
    graph.add_edge("Market", "Harbor", "quay", 5, false)?;
    graph.add_edge("Depot", "Harbor", "coast road", 15, true)?;
    println!("✓ Added {} directed edges\n", graph.edge_count());

    println!("Reachable from Harbor: {:?}", graph.bfs("Harbor"));
    println!(
        "Harbor -> Depot connected: {}",
        graph.are_vertices_connected("Harbor", "Depot")
    );
    println!("Connected from Depot: {}\n", graph.is_graph_connected(Some("Depot")));

    let paths = graph.path_information("Depot")?;
    for target in ["Mill", "Market", "Harbor"] {
        let path = paths.path_to(target).unwrap_or_default();
        let route: Vec<&str> = path.iter().map(|edge| edge.label()).collect();
        println!(
            "Depot -> {target}: distance {} via {route:?}",
            paths.distance_to(target)
        );
    }

    let mut buffer = Vec::new();
    graph.save_with(&mut buffer, &JsonOptions::pretty())?;
    println!("\nSaved document:\n{}", String::from_utf8_lossy(&buffer));

    let mut restored = Graph::new();
    restored.load(buffer.as_slice())?;
    println!("✓ Reloaded graph equals original: {}", restored == graph);

    Ok(())
}
