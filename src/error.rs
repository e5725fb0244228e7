//! Error types for the gate graph converter.
//!
//! This module provides a unified error type [`GateGraphError`] that covers
//! every failure the converter can hit: reading the input, tokenizing gate
//! lines, and writing the rendered graph.

use thiserror::Error;

/// Result type alias using [`GateGraphError`].
pub type Result<T> = std::result::Result<T, GateGraphError>;

/// Unified error type for all gate graph operations.
#[derive(Error, Debug)]
pub enum GateGraphError {
    // ============ Netlist Parsing Errors ============
    /// A body line did not split into exactly five fields
    #[error("Malformed gate at line {line}: expected 5 fields, got {fields}: {text:?}")]
    MalformedLine {
        line: usize,
        fields: usize,
        text: String,
    },

    /// No blank line separates the header from the gate listing
    #[error("No blank line found after the header ({lines} lines read)")]
    MissingHeaderSeparator { lines: usize },

    // ============ Graph Errors ============
    /// An edge references a node that was never declared
    #[error("Edge {from} -- {to} references undeclared node '{missing}'")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    /// A node key was declared more than once
    #[error("Node '{key}' declared more than once")]
    DuplicateNode { key: String },

    // ============ I/O Errors ============
    /// Error reading the circuit listing
    #[error("Failed to read input file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the rendered graph
    #[error("Output error: {source}")]
    OutputError {
        #[from]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl GateGraphError {
    /// Create a malformed line error
    pub fn malformed(line: usize, fields: usize, text: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            fields,
            text: text.into(),
        }
    }

    /// Create a dangling edge error
    pub fn dangling(from: impl ToString, to: impl ToString, missing: impl ToString) -> Self {
        Self::DanglingEdge {
            from: from.to_string(),
            to: to.to_string(),
            missing: missing.to_string(),
        }
    }
}
