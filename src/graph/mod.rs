//! Gate graph representation and validation.
//!
//! The [`GateGraph`] holds one node per gate instance and per distinct
//! signal, plus three edges for every gate line, in the order they were
//! encountered.

mod graph;
mod types;
mod validate;

pub use graph::GateGraph;
pub use types::*;
pub use validate::validate_graph;
