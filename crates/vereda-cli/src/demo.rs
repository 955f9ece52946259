//! Scripted walkthrough of the graph engine on two small sample graphs.
//!
//! Runs only from the `demo` subcommand, never as an import side effect.

use colored::Colorize;
use vereda_core::{bfs, dfs, find_path, is_connected, Graph, Orientation};

/// Run the full walkthrough: an undirected road map, then a directed flow.
pub fn run() -> anyhow::Result<()> {
    road_map()?;
    directed_flow()?;
    Ok(())
}

/// Undirected city graph: every query works in both directions.
fn road_map() -> anyhow::Result<()> {
    println!("{}", "--- Undirected graph: city roads ---".bold().green());

    let mut graph = Graph::new(Orientation::Undirected);
    graph.add_edge("Managua", "Masaya");
    graph.add_edge("Managua", "León");
    graph.add_edge("Masaya", "Granada");
    graph.add_edge("Granada", "Rivas");
    graph.add_edge("Managua", "Granada");

    for city in graph.vertices() {
        println!("  {city}: {}", graph.neighbors(city).join(", "));
    }
    println!();

    println!("Neighbors of Managua: {:?}", graph.neighbors(&"Managua"));
    println!(
        "Edge Managua -- Masaya? {}",
        graph.has_edge(&"Managua", &"Masaya")
    );
    println!(
        "Edge Managua -- Rivas?  {}",
        graph.has_edge(&"Managua", &"Rivas")
    );
    println!();

    println!("BFS from Managua: {:?}", bfs(&graph, &"Managua")?);
    println!("DFS from Managua: {:?}", dfs(&graph, &"Managua")?);
    println!("Connected? {}", is_connected(&graph));
    println!();

    // The direct Managua-Granada edge makes the two-hop route win.
    println!(
        "Path Managua -> Rivas: {:?}",
        find_path(&graph, &"Managua", &"Rivas")
    );
    println!(
        "Path Managua -> Juigalpa (unknown city): {:?}",
        find_path(&graph, &"Managua", &"Juigalpa")
    );
    println!();
    Ok(())
}

/// Directed graph: arrows only run forward, so reverse queries come up empty.
fn directed_flow() -> anyhow::Result<()> {
    println!("{}", "--- Directed graph: one-way flow ---".bold().green());

    let mut graph = Graph::new(Orientation::Directed);
    graph.add_edge("Inicio", "A");
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.add_edge("C", "Fin");
    graph.add_edge("Inicio", "D");
    graph.add_edge("D", "Fin");

    for vertex in graph.vertices() {
        println!("  {vertex}: {}", graph.neighbors(vertex).join(", "));
    }
    println!();

    println!("Neighbors of Inicio: {:?}", graph.neighbors(&"Inicio"));
    println!(
        "Neighbors of Fin:    {:?} (nothing leaves the sink)",
        graph.neighbors(&"Fin")
    );
    println!("Edge A -> B? {}", graph.has_edge(&"A", &"B"));
    println!("Edge B -> A? {}", graph.has_edge(&"B", &"A"));
    println!();

    println!("BFS from Inicio: {:?}", bfs(&graph, &"Inicio")?);
    println!("DFS from Inicio: {:?}", dfs(&graph, &"Inicio")?);
    println!();

    // BFS finds the two-hop branch through D, not the four-hop chain.
    println!(
        "Path Inicio -> Fin: {:?}",
        find_path(&graph, &"Inicio", &"Fin")
    );
    println!(
        "Path Fin -> Inicio: {:?} (no reverse edges)",
        find_path(&graph, &"Fin", &"Inicio")
    );
    Ok(())
}
