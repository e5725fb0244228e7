//! Parser for gate listings.
//!
//! A listing is a header block, a blank separator line, and one gate per
//! line. The header (initial wire values in the puzzle input) is discarded.
//!
//! # Grammar Overview
//!
//! ```text
//! listing  = header blank { body_line }
//! header   = { non_blank_line }
//! body_line = blank | gate
//! gate     = signal op signal arrow signal
//! arrow    = any field, conventionally "->"
//! ```
//!
//! Fields are separated by any run of whitespace.
//!
//! # Example
//!
//! ```text
//! x00: 1
//! y00: 0
//!
//! x00 AND y00 -> z00
//! x00 XOR y00 -> z01
//! ```

mod ast;
mod parser;

pub use ast::*;
pub use parser::{ParseOptions, Parser};

use crate::error::Result;

/// Parse a gate listing string.
pub fn parse(input: &str) -> Result<Netlist> {
    Parser::new(input).parse()
}

/// Parse a gate listing string with explicit options.
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Netlist> {
    Parser::with_options(input, options).parse()
}

/// Parse a gate listing file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path, options: ParseOptions) -> Result<Netlist> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::GateGraphError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_with_options(&content, options)
}
