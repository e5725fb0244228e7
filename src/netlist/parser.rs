//! Line parser for gate listings.

use log::{debug, warn};

use super::ast::{GateLine, Netlist};
use crate::error::{GateGraphError, Result};

/// Options controlling how a listing is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fail when no blank line terminates the header, instead of
    /// treating the whole input as header.
    pub require_header: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    Body,
}

/// Parser for gate listings.
pub struct Parser<'a> {
    input: &'a str,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the given input.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Create a new parser with explicit options.
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self { input, options }
    }

    /// Parse the entire listing.
    pub fn parse(&self) -> Result<Netlist> {
        let mut netlist = Netlist::new();
        let mut state = State::Header;

        for (idx, raw) in self.input.lines().enumerate() {
            let line_no = idx + 1;
            let text = raw.trim_end();

            match state {
                State::Header => {
                    netlist.header_lines += 1;
                    if text.is_empty() {
                        netlist.header_terminated = true;
                        state = State::Body;
                    }
                }
                State::Body => {
                    if text.is_empty() {
                        continue;
                    }
                    let gate = parse_gate(text, netlist.gates.len(), line_no)?;
                    netlist.gates.push(gate);
                }
            }
        }

        if !netlist.header_terminated {
            if self.options.require_header {
                return Err(GateGraphError::MissingHeaderSeparator {
                    lines: netlist.header_lines,
                });
            }
            warn!(
                "no blank line after header; all {} lines treated as header",
                netlist.header_lines
            );
        }

        debug!(
            "parsed {} gates after {} header lines",
            netlist.gates.len(),
            netlist.header_lines
        );

        Ok(netlist)
    }
}

/// Split one body line into a [`GateLine`].
///
/// The fourth field is the `->` connector and is discarded unchecked.
fn parse_gate(text: &str, index: usize, line: usize) -> Result<GateLine> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [lhs, op, rhs, _arrow, output] = fields[..] else {
        return Err(GateGraphError::malformed(line, fields.len(), text));
    };

    Ok(GateLine {
        lhs: lhs.to_string(),
        op: op.to_string(),
        rhs: rhs.to_string(),
        output: output.to_string(),
        index,
        line,
    })
}
