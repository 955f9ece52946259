//! Output rendering for REPL query results.
//!
//! Every query renders through one of three formats selected per session:
//! a bordered table, a plain one-line form for piping, or JSON.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use vereda_core::Graph;

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
    Json,
}

impl OutputFormat {
    /// Parses a format name as given on the command line or to `.format`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "plain" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render a traversal or path result (an ordered vertex sequence).
pub fn render_sequence(label: &str, sequence: &[String], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["#", label]);
            for (position, vertex) in sequence.iter().enumerate() {
                table.add_row(vec![position.to_string(), vertex.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Plain => {
            println!("{}", sequence.join(" -> "));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ label: sequence }));
        }
    }
}

/// Render a single named value (connectivity, edge membership).
pub fn render_value(label: &str, value: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table | OutputFormat::Plain => {
            println!("{}: {}", label.cyan(), value.green());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ label: value }));
        }
    }
}

/// Render the whole graph: one row per vertex with its neighbor entries.
///
/// The JSON form serializes the graph itself, so it round-trips through
/// `serde_json::from_str` back into a [`Graph`].
pub fn render_graph(graph: &Graph<String>, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Vertex", "Neighbors"]);
            for vertex in graph.vertices() {
                table.add_row(vec![vertex.clone(), format_entries(graph, vertex)]);
            }
            println!("{table}");
        }
        OutputFormat::Plain => {
            for vertex in graph.vertices() {
                println!("{}: {}", vertex, format_entries(graph, vertex));
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(graph) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{} {e}", "Serialization failed:".red()),
        },
    }
}

/// Format a vertex's `(neighbor, weight)` entries on one line.
///
/// Weights are stored but unused by traversal, so the default `1` is left
/// implicit and only explicit weights are shown.
fn format_entries(graph: &Graph<String>, vertex: &String) -> String {
    graph
        .neighbor_entries(vertex)
        .iter()
        .map(|(to, weight)| {
            if (*weight - 1.0).abs() < f64::EPSILON {
                to.clone()
            } else {
                format!("{to} ({weight})")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
