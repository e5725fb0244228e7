//! Graphviz output for gate graphs.
//!
//! Writes an undirected `graph { ... }` block: node declarations first,
//! then one blank line, then edges.
//!
//! ```text
//! graph {
//!     AND0 [shape=triangle, label="AND"]
//!     x00 [shape=circle, label="x00"]
//!
//!    x00 -- AND0
//! }
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{GateGraphError, Result};
use crate::graph::{escape_dot, Edge, GateGraph, NodeDecl, NodeKey};

/// Indentation for node declaration lines.
const NODE_INDENT: &str = "    ";

/// Indentation for edge lines.
const EDGE_INDENT: &str = "   ";

/// Write one node declaration line.
fn write_node<W: Write>(out: &mut W, node: &NodeDecl) -> io::Result<()> {
    writeln!(
        out,
        "{NODE_INDENT}{} [shape={}, label=\"{}\"]",
        node.id,
        node.shape,
        escape_dot(&node.label)
    )
}

/// Look up the rendered id of an edge endpoint.
fn endpoint_id<'g>(graph: &'g GateGraph, edge: &Edge, end: &NodeKey) -> Result<&'g str> {
    graph
        .id_of(end)
        .ok_or_else(|| GateGraphError::dangling(&edge.from, &edge.to, end))
}

/// Write one edge line.
fn write_edge<W: Write>(out: &mut W, graph: &GateGraph, edge: &Edge) -> Result<()> {
    let from = endpoint_id(graph, edge, &edge.from)?;
    let to = endpoint_id(graph, edge, &edge.to)?;
    writeln!(out, "{EDGE_INDENT}{from} -- {to}")?;
    Ok(())
}

/// Write the full graph description to a sink.
pub fn write_graph<W: Write>(graph: &GateGraph, out: &mut W) -> Result<()> {
    writeln!(out, "graph {{")?;
    for node in graph.nodes() {
        write_node(out, node)?;
    }
    writeln!(out)?;
    for edge in graph.edges() {
        write_edge(out, graph, edge)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Render the graph description into a string.
pub fn render_to_string(graph: &GateGraph) -> Result<String> {
    let mut buffer = Vec::new();
    write_graph(graph, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("graph text is assembled from UTF-8 strings"))
}

/// Write the rendered graph to stdout in one piece.
pub fn write_to_stdout(graph: &GateGraph) -> Result<()> {
    let rendered = render_to_string(graph)?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(rendered.as_bytes())?;
    lock.flush()?;
    Ok(())
}

/// Write the rendered graph to a file, replacing any existing contents.
pub fn write_to_file(graph: &GateGraph, path: &Path) -> Result<()> {
    let rendered = render_to_string(graph)?;
    let mut file = File::create(path)?;
    file.write_all(rendered.as_bytes())?;
    Ok(())
}
