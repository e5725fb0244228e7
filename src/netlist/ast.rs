//! Parsed representation of a gate listing.

/// One gate definition: `lhs op rhs -> output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateLine {
    /// First input signal
    pub lhs: String,
    /// Operator mnemonic (AND, OR, XOR, ...)
    pub op: String,
    /// Second input signal
    pub rhs: String,
    /// Output signal
    pub output: String,
    /// Zero-based position among the gate lines of the body
    pub index: usize,
    /// Source line number for error reporting (1-indexed)
    pub line: usize,
}

impl GateLine {
    /// Create a gate line at the given body index.
    pub fn new(
        lhs: impl Into<String>,
        op: impl Into<String>,
        rhs: impl Into<String>,
        output: impl Into<String>,
        index: usize,
    ) -> Self {
        Self {
            lhs: lhs.into(),
            op: op.into(),
            rhs: rhs.into(),
            output: output.into(),
            index,
            line: 0,
        }
    }
}

/// A parsed circuit listing with the header already discarded.
#[derive(Debug, Clone, Default)]
pub struct Netlist {
    /// Gate definitions in file order
    pub gates: Vec<GateLine>,
    /// Number of lines consumed as header, separator included
    pub header_lines: usize,
    /// Whether a blank line ended the header
    pub header_terminated: bool,
}

impl Netlist {
    /// Create a new empty netlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of gate lines in the body.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the body holds no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}
