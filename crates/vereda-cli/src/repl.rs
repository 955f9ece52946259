//! Interactive shell: line editing, session state and graph commands.
//!
//! Bare-word commands build and query the session graph and are handled
//! here; lines starting with '.' adjust the session and live in
//! `repl_commands.rs`.

use std::time::Instant;

use clap::Args;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use vereda_core::{bfs, dfs, find_path, is_connected, Graph, Orientation};

use crate::output::{self, OutputFormat};
use crate::repl_commands::{self, CommandResult};

/// Startup options for the interactive shell.
#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Output format for query results (table, plain or json)
    #[arg(long, default_value = "table", env = "VEREDA_FORMAT")]
    pub format: String,

    /// Print elapsed time after each command
    #[arg(long, env = "VEREDA_TIMING")]
    pub timing: bool,
}

/// Mutable per-session settings, adjusted via dot-commands.
pub struct ReplConfig {
    pub format: OutputFormat,
    pub timing: bool,
}

/// Run the interactive shell until `.quit` or end of input.
pub fn run(args: &ReplArgs) -> anyhow::Result<()> {
    let format = OutputFormat::parse(&args.format).ok_or_else(|| {
        anyhow::anyhow!("unknown format '{}' (use table, plain or json)", args.format)
    })?;
    let mut config = ReplConfig {
        format,
        timing: args.timing,
    };
    let mut graph: Graph<String> = Graph::default();

    print_banner();

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("vereda> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line)?;

                let started = Instant::now();
                let result = if line.starts_with('.') {
                    repl_commands::handle_command(&graph, line, &mut config)
                } else {
                    handle_graph_command(&mut graph, line, &config)
                };

                match result {
                    CommandResult::Continue => {
                        if config.timing {
                            let elapsed = started.elapsed();
                            println!("Time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
                        }
                    }
                    CommandResult::Quit => break,
                    CommandResult::Error(message) => {
                        eprintln!("{} {message}", "Error:".red().bold());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C (use .quit to exit)");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("Bye!");
    Ok(())
}

fn print_banner() {
    println!(
        "{} {} - graph traversal shell",
        "Vereda".bold().green(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Type {} for commands, {} to leave.\n", ".help".yellow(), ".quit".yellow());
}

/// Handle a bare-word graph command (anything not starting with '.').
pub fn handle_graph_command(
    graph: &mut Graph<String>,
    line: &str,
    config: &ReplConfig,
) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        "new" => cmd_new(graph, &parts),
        "vertex" | "v" => cmd_vertex(graph, &parts),
        "edge" | "e" => cmd_edge(graph, &parts),
        "neighbors" | "n" => cmd_neighbors(graph, &parts, config),
        "hasedge" => cmd_hasedge(graph, &parts, config),
        "bfs" => cmd_bfs(graph, &parts, config),
        "dfs" => cmd_dfs(graph, &parts, config),
        "path" => cmd_path(graph, &parts, config),
        "connected" => cmd_connected(graph, config),
        "print" | "p" => cmd_print(graph, config),
        _ => CommandResult::Error(format!("Unknown command: {cmd} (type .help for help)")),
    }
}

fn cmd_new(graph: &mut Graph<String>, parts: &[&str]) -> CommandResult {
    let orientation = match parts.get(1).map(|s| s.to_lowercase()).as_deref() {
        None | Some("undirected") => Orientation::Undirected,
        Some("directed") => Orientation::Directed,
        Some(other) => {
            return CommandResult::Error(format!(
                "Unknown orientation: {other} (use directed or undirected)"
            ));
        }
    };
    *graph = Graph::new(orientation);
    println!("New {orientation:?} graph.\n");
    CommandResult::Continue
}

fn cmd_vertex(graph: &mut Graph<String>, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: vertex <id>...\n");
        return CommandResult::Continue;
    }
    for id in &parts[1..] {
        if graph.add_vertex((*id).to_string()) {
            println!("Vertex '{}' added.", id.green());
        } else {
            println!("Vertex '{}' already exists.", id.yellow());
        }
    }
    println!();
    CommandResult::Continue
}

fn cmd_edge(graph: &mut Graph<String>, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: edge <from> <to> [weight]\n");
        return CommandResult::Continue;
    }
    let from = parts[1].to_string();
    let to = parts[2].to_string();
    let arrow = if graph.is_directed() { "->" } else { "--" };

    match parts.get(3) {
        None => {
            graph.add_edge(from.clone(), to.clone());
            println!("Edge {from} {arrow} {to} added.\n");
        }
        Some(raw) => match raw.parse::<f64>() {
            Ok(weight) => {
                graph.add_edge_weighted(from.clone(), to.clone(), weight);
                println!("Edge {from} {arrow} {to} (weight {weight}) added.\n");
            }
            Err(_) => {
                return CommandResult::Error(format!("Invalid weight: {raw}"));
            }
        },
    }
    CommandResult::Continue
}

fn cmd_neighbors(graph: &Graph<String>, parts: &[&str], config: &ReplConfig) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: neighbors <vertex>\n");
        return CommandResult::Continue;
    }
    let neighbors = graph.neighbors(&parts[1].to_string());
    if neighbors.is_empty() {
        println!("No neighbors.\n");
    } else {
        output::render_sequence("neighbors", &neighbors, config.format);
        println!();
    }
    CommandResult::Continue
}

fn cmd_hasedge(graph: &Graph<String>, parts: &[&str], config: &ReplConfig) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: hasedge <from> <to>\n");
        return CommandResult::Continue;
    }
    let found = graph.has_edge(&parts[1].to_string(), &parts[2].to_string());
    output::render_value("hasedge", &found.to_string(), config.format);
    println!();
    CommandResult::Continue
}

fn cmd_bfs(graph: &Graph<String>, parts: &[&str], config: &ReplConfig) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: bfs <start>\n");
        return CommandResult::Continue;
    }
    match bfs(graph, &parts[1].to_string()) {
        Ok(order) => {
            output::render_sequence("bfs", &order, config.format);
            println!();
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_dfs(graph: &Graph<String>, parts: &[&str], config: &ReplConfig) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: dfs <start>\n");
        return CommandResult::Continue;
    }
    match dfs(graph, &parts[1].to_string()) {
        Ok(order) => {
            output::render_sequence("dfs", &order, config.format);
            println!();
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_path(graph: &Graph<String>, parts: &[&str], config: &ReplConfig) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: path <start> <end>\n");
        return CommandResult::Continue;
    }
    let path = find_path(graph, &parts[1].to_string(), &parts[2].to_string());
    if path.is_empty() {
        println!("No path from '{}' to '{}'.\n", parts[1], parts[2]);
    } else {
        output::render_sequence("path", &path, config.format);
        println!();
    }
    CommandResult::Continue
}

fn cmd_connected(graph: &Graph<String>, config: &ReplConfig) -> CommandResult {
    output::render_value("connected", &is_connected(graph).to_string(), config.format);
    println!();
    CommandResult::Continue
}

fn cmd_print(graph: &Graph<String>, config: &ReplConfig) -> CommandResult {
    if graph.is_empty() {
        println!("Graph is empty.\n");
        return CommandResult::Continue;
    }
    output::render_graph(graph, config.format);
    println!();
    CommandResult::Continue
}
