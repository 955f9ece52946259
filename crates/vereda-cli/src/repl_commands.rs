//! REPL dot-command handlers extracted from repl.rs
//!
//! Each command is implemented as a separate function for maintainability.

use colored::Colorize;
use vereda_core::{is_connected, Graph};

use crate::output::OutputFormat;
use crate::repl::ReplConfig;

/// Result of a REPL command execution.
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

/// Handle a REPL command (line starting with '.')
pub fn handle_command(graph: &Graph<String>, line: &str, config: &mut ReplConfig) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        ".quit" | ".exit" | ".q" => CommandResult::Quit,
        ".help" | ".h" => {
            print_help();
            CommandResult::Continue
        }
        ".timing" => cmd_timing(config, &parts),
        ".format" => cmd_format(config, &parts),
        ".clear" => cmd_clear(),
        ".stats" => cmd_stats(graph),
        _ => CommandResult::Error(format!("Unknown command: {cmd}")),
    }
}

fn cmd_timing(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Timing is {}", if config.timing { "ON" } else { "OFF" });
    } else {
        match parts[1].to_lowercase().as_str() {
            "on" | "true" | "1" => {
                config.timing = true;
                println!("Timing ON");
            }
            "off" | "false" | "0" => {
                config.timing = false;
                println!("Timing OFF");
            }
            _ => {
                return CommandResult::Error("Use: .timing on|off".to_string());
            }
        }
    }
    println!();
    CommandResult::Continue
}

fn cmd_format(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Format is {:?}", config.format);
    } else {
        match OutputFormat::parse(parts[1]) {
            Some(format) => {
                config.format = format;
                println!("Format: {}", parts[1].to_lowercase());
            }
            None => {
                return CommandResult::Error("Use: .format table|plain|json".to_string());
            }
        }
    }
    println!();
    CommandResult::Continue
}

fn cmd_clear() -> CommandResult {
    print!("\x1B[2J\x1B[1;1H");
    CommandResult::Continue
}

fn cmd_stats(graph: &Graph<String>) -> CommandResult {
    println!("\n{}", "Graph Statistics".bold().underline());
    println!("  {} {:?}", "Orientation:".cyan(), graph.orientation());
    println!("  {} {}", "Vertices:".cyan(), graph.vertex_count());
    println!("  {} {}", "Edges:".cyan(), graph.edge_count());
    println!("  {} {}", "Connected:".cyan(), is_connected(graph));
    println!();
    CommandResult::Continue
}

/// Print help text for REPL commands
pub fn print_help() {
    println!("\n{}", "Graph Commands".bold().underline());
    println!();
    println!(
        "  {}  Start over with an empty graph",
        "new [directed|undirected]".yellow()
    );
    println!("  {}            Add one or more vertices", "vertex <id>...".yellow());
    println!(
        "  {}  Add an edge (default weight 1)",
        "edge <from> <to> [weight]".yellow()
    );
    println!(
        "  {}        Ordered neighbors of a vertex",
        "neighbors <vertex>".yellow()
    );
    println!(
        "  {}       Does the edge exist?",
        "hasedge <from> <to>".yellow()
    );
    println!("  {}               Breadth-first order", "bfs <start>".yellow());
    println!("  {}               Depth-first order", "dfs <start>".yellow());
    println!(
        "  {}        Fewest-edges route",
        "path <start> <end>".yellow()
    );
    println!(
        "  {}                 Is every vertex reachable?",
        "connected".yellow()
    );
    println!("  {}                     Show the whole graph", "print".yellow());
    println!();
    println!("{}", "Session Commands".bold().underline());
    println!();
    println!("  {}                     Show this help", ".help".yellow());
    println!("  {}                     Exit the shell", ".quit".yellow());
    println!(
        "  {} Set output format",
        ".format table|plain|json".yellow()
    );
    println!("  {}            Toggle timing display", ".timing on|off".yellow());
    println!("  {}                    Clear screen", ".clear".yellow());
    println!("  {}                    Graph statistics", ".stats".yellow());
    println!();
    println!("{}", "Example:".bold().underline());
    println!();
    println!("  {}", "edge Managua Masaya".italic().white());
    println!("  {}", "edge Managua León".italic().white());
    println!("  {}", "edge Masaya Granada".italic().white());
    println!("  {}", "bfs Managua".italic().white());
    println!("  {}", "path León Granada".italic().white());
    println!();
}
