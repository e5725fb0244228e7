//! # Gate Graph
//!
//! Converts a logic-gate circuit listing into a Graphviz graph description.
//!
//! This library provides:
//! - A parser for gate listings (`x00 AND y00 -> z00`), header block skipped
//! - A graph model with one node per gate instance and per distinct signal
//! - A renderer for the undirected DOT `graph { ... }` format
//!
//! ## Architecture
//!
//! - [`netlist`] - Header skipping and gate line tokenizing
//! - [`graph`] - Ordered, deduplicated node declarations and edges
//! - [`render`] - DOT output
//! - [`error`] - Error type shared by all of the above
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! gate2dot 24.txt | dot -Tsvg > circuit.svg
//! ```
//!
//! ### Library
//!
//! ```
//! let dot = gate_graph::convert("x00: 1\n\nx00 AND y00 -> z00\n").unwrap();
//! assert!(dot.contains("AND0 -- z00"));
//! ```

pub mod error;
pub mod graph;
pub mod netlist;
pub mod render;

// Re-export main types for convenience
pub use error::{GateGraphError, Result};
pub use graph::GateGraph;
pub use netlist::{Netlist, ParseOptions};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::gate_graph_to_dot;

/// Input file read when none is given on the command line.
pub const DEFAULT_INPUT_FILE: &str = "24.txt";

/// Convert a gate listing into a DOT graph description.
pub fn convert(input: &str) -> Result<String> {
    convert_with_options(input, ParseOptions::default())
}

/// Convert a gate listing into a DOT graph description with explicit
/// parse options.
pub fn convert_with_options(input: &str, options: ParseOptions) -> Result<String> {
    let netlist = netlist::parse_with_options(input, options)?;
    let graph = GateGraph::from_netlist(&netlist);
    render::render_to_string(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_example() {
        let dot = convert("x00: 1\ny00: 1\n\nx00 AND y00 -> a\na OR y01 -> z00\n").unwrap();
        let expected = [
            "graph {",
            "    AND0 [shape=triangle, label=\"AND\"]",
            "    x00 [shape=circle, label=\"x00\"]",
            "    y00 [shape=circle, label=\"y00\"]",
            "    a [shape=circle, label=\"a\"]",
            "    OR1 [shape=triangle, label=\"OR\"]",
            "    y01 [shape=circle, label=\"y01\"]",
            "    z00 [shape=circle, label=\"z00\"]",
            "",
            "   x00 -- AND0",
            "   y00 -- AND0",
            "   AND0 -- a",
            "   a -- OR1",
            "   y01 -- OR1",
            "   OR1 -- z00",
            "}",
        ];
        assert_eq!(dot.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_convert_without_separator() {
        assert_eq!(convert("x00 AND y00 -> z00").unwrap(), "graph {\n\n}\n");

        let strict = ParseOptions {
            require_header: true,
        };
        assert!(matches!(
            convert_with_options("x00 AND y00 -> z00", strict),
            Err(GateGraphError::MissingHeaderSeparator { .. })
        ));
    }

    #[test]
    fn test_convert_malformed() {
        let err = convert("\nx00 AND y00 z00\n").unwrap_err();
        assert!(matches!(err, GateGraphError::MalformedLine { line: 2, .. }));
    }
}
