//! gate2dot - Gate listing to Graphviz converter
//!
//! Reads a circuit listing and prints an undirected DOT graph.
//!
//! # Usage
//!
//! ```bash
//! gate2dot 24.txt | dot -Tsvg > circuit.svg
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use gate_graph::{error::Result, netlist, render, GateGraph, ParseOptions, DEFAULT_INPUT_FILE};
use log::info;

/// Logic-gate listing to Graphviz converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the gate listing
    #[arg(value_name = "INPUT_FILE", default_value = DEFAULT_INPUT_FILE)]
    input_file: PathBuf,

    /// Write the graph to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Fail if no blank line separates the header from the gates
    #[arg(long)]
    require_header: bool,
}

impl Args {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            require_header: self.require_header,
        }
    }
}

/// Write the graph to the chosen file, or to stdout when none is given.
fn emit(graph: &GateGraph, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => render::write_to_file(graph, path),
        None => render::write_to_stdout(graph),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Parse the listing
    let netlist = netlist::parse_file(&args.input_file, args.parse_options())?;

    // Build the graph
    let graph = GateGraph::from_netlist(&netlist);
    info!(
        "{}: {} gates, {} nodes, {} edges",
        args.input_file.display(),
        netlist.len(),
        graph.node_count(),
        graph.edge_count()
    );

    // Emit
    emit(&graph, args.output.as_deref())?;

    Ok(())
}
