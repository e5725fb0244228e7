//! Core types for the gate graph.

use std::fmt;

/// Identifies one gate instance: its operator plus its body line index.
///
/// Kept as a composite so that `A1` at index 2 and `A` at index 12 remain
/// distinct even though both display as `A12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GateKey {
    /// Operator mnemonic
    pub op: String,
    /// Zero-based body line index
    pub index: usize,
}

impl GateKey {
    pub fn new(op: impl Into<String>, index: usize) -> Self {
        Self {
            op: op.into(),
            index,
        }
    }
}

impl fmt::Display for GateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.index)
    }
}

/// A unique identifier for a node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    /// A gate instance
    Gate(GateKey),
    /// A named wire
    Signal(String),
}

impl NodeKey {
    pub fn signal(name: impl Into<String>) -> Self {
        NodeKey::Signal(name.into())
    }

    pub fn gate(op: impl Into<String>, index: usize) -> Self {
        NodeKey::Gate(GateKey::new(op, index))
    }

    /// Node id this key asks for before collisions are resolved.
    ///
    /// A gate whose operator ends in a digit would run into its index
    /// (`A1` + `2` vs `A` + `12`), so it gets a `#` between the two.
    pub fn preferred_id(&self) -> String {
        match self {
            NodeKey::Gate(gate) if gate.op.ends_with(|c: char| c.is_ascii_digit()) => {
                format!("{}#{}", gate.op, gate.index)
            }
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Gate(gate) => fmt::Display::fmt(gate, f),
            NodeKey::Signal(name) => f.write_str(name),
        }
    }
}

/// Graphviz keywords, which cannot be used as bare ids.
const DOT_KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Escape text for use inside a DOT double-quoted string.
pub fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render text as a DOT id, quoting it unless it is a bare identifier or
/// an unsigned integer.
pub fn dot_id(text: &str) -> String {
    let identifier = text.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    let integer = !text.is_empty() && text.chars().all(|c| c.is_ascii_digit());
    let keyword = DOT_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(text));

    if (identifier || integer) && !keyword {
        text.to_string()
    } else {
        format!("\"{}\"", escape_dot(text))
    }
}

/// Rendered node shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeShape {
    Triangle,
    Circle,
}

impl NodeShape {
    /// Graphviz shape name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeShape::Triangle => "triangle",
            NodeShape::Circle => "circle",
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node declaration: key, rendered id, shape and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDecl {
    pub key: NodeKey,
    /// DOT id, unique within its graph and already quoted if needed
    pub id: String,
    pub shape: NodeShape,
    pub label: String,
}

impl NodeDecl {
    /// Declaration for a key under the given id. Gates are triangles
    /// labelled with their operator, signals are circles labelled with
    /// their own name.
    pub fn new(key: NodeKey, id: String) -> Self {
        let (shape, label) = match &key {
            NodeKey::Gate(gate) => (NodeShape::Triangle, gate.op.clone()),
            NodeKey::Signal(name) => (NodeShape::Circle, name.clone()),
        };
        Self {
            key,
            id,
            shape,
            label,
        }
    }
}

/// A connection between two declared nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeKey,
    pub to: NodeKey,
}

impl Edge {
    pub fn new(from: NodeKey, to: NodeKey) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.from, self.to)
    }
}
