//! Gate graph structure.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::types::{dot_id, Edge, NodeDecl, NodeKey};
use crate::netlist::{GateLine, Netlist};

/// Node declarations and edges built from a gate listing.
#[derive(Debug, Clone, Default)]
pub struct GateGraph {
    /// Node declarations in first-seen order
    nodes: Vec<NodeDecl>,

    /// Mapping from node keys to their position in `nodes`
    node_map: HashMap<NodeKey, usize>,

    /// Unquoted text of every id handed out so far
    taken_ids: HashSet<String>,

    /// Edges in insertion order
    edges: Vec<Edge>,
}

impl GateGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a parsed netlist.
    pub fn from_netlist(netlist: &Netlist) -> Self {
        let mut graph = Self::new();
        for gate in &netlist.gates {
            graph.add_gate(gate);
        }
        debug!(
            "built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Add one gate: declare its gate node and three signal nodes if new,
    /// then append its three edges.
    pub fn add_gate(&mut self, gate: &GateLine) {
        let gate_key = NodeKey::gate(gate.op.as_str(), gate.index);
        let lhs = NodeKey::signal(gate.lhs.as_str());
        let rhs = NodeKey::signal(gate.rhs.as_str());
        let output = NodeKey::signal(gate.output.as_str());

        self.declare(gate_key.clone());
        self.declare(lhs.clone());
        self.declare(rhs.clone());
        self.declare(output.clone());

        self.edges.push(Edge::new(lhs, gate_key.clone()));
        self.edges.push(Edge::new(rhs, gate_key.clone()));
        self.edges.push(Edge::new(gate_key, output));
    }

    /// Declare a node if it is not already present.
    /// Returns true if the node was newly declared.
    pub fn declare(&mut self, key: NodeKey) -> bool {
        if self.node_map.contains_key(&key) {
            return false;
        }
        let id = self.assign_id(&key);
        self.node_map.insert(key.clone(), self.nodes.len());
        self.nodes.push(NodeDecl::new(key, id));
        true
    }

    /// Pick an id for a new key. The key's preferred id is used unless an
    /// earlier node already holds that text, in which case `#1`, `#2`, ...
    /// is appended until it is free.
    fn assign_id(&mut self, key: &NodeKey) -> String {
        let base = key.preferred_id();
        let mut text = base.clone();
        let mut suffix = 1usize;
        while self.taken_ids.contains(&text) {
            text = format!("{base}#{suffix}");
            suffix += 1;
        }
        let id = dot_id(&text);
        self.taken_ids.insert(text);
        id
    }

    /// Node declarations in first-seen order.
    pub fn nodes(&self) -> &[NodeDecl] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether a key has been declared.
    pub fn contains(&self, key: &NodeKey) -> bool {
        self.node_map.contains_key(key)
    }

    /// Find the declaration for a key.
    pub fn get(&self, key: &NodeKey) -> Option<&NodeDecl> {
        self.node_map.get(key).map(|&idx| &self.nodes[idx])
    }

    /// Rendered id of a declared key.
    pub fn id_of(&self, key: &NodeKey) -> Option<&str> {
        self.get(key).map(|decl| decl.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeShape;
    use crate::netlist;

    fn keys(graph: &GateGraph) -> Vec<String> {
        graph.nodes().iter().map(|n| n.key.to_string()).collect()
    }

    fn ids(graph: &GateGraph) -> Vec<&str> {
        graph.nodes().iter().map(|n| n.id.as_str()).collect()
    }

    fn edges(graph: &GateGraph) -> Vec<String> {
        graph.edges().iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_single_gate() {
        let mut graph = GateGraph::new();
        graph.add_gate(&GateLine::new("x00", "AND", "y00", "z00", 0));

        assert_eq!(keys(&graph), vec!["AND0", "x00", "y00", "z00"]);
        assert_eq!(graph.nodes()[0].shape, NodeShape::Triangle);
        assert!(graph.nodes()[1..]
            .iter()
            .all(|n| n.shape == NodeShape::Circle));
        assert_eq!(edges(&graph), vec!["x00 -- AND0", "y00 -- AND0", "AND0 -- z00"]);
    }

    #[test]
    fn test_shared_signal_declared_once() {
        let netlist = netlist::parse("\nx00 AND y00 -> a\na OR y01 -> z00\n").unwrap();
        let graph = GateGraph::from_netlist(&netlist);

        assert_eq!(
            keys(&graph),
            vec!["AND0", "x00", "y00", "a", "OR1", "y01", "z00"]
        );
        assert_eq!(graph.edge_count(), 6);
        let a = NodeKey::signal("a");
        let touching_a = graph
            .edges()
            .iter()
            .filter(|e| e.from == a || e.to == a)
            .count();
        assert_eq!(touching_a, 2);
        assert_eq!(
            edges(&graph),
            vec![
                "x00 -- AND0",
                "y00 -- AND0",
                "AND0 -- a",
                "a -- OR1",
                "y01 -- OR1",
                "OR1 -- z00",
            ]
        );
    }

    #[test]
    fn test_same_operator_on_many_lines() {
        let netlist =
            netlist::parse("\nx00 XOR y00 -> z00\nx01 XOR y01 -> z01\nx02 XOR y02 -> z02\n")
                .unwrap();
        let graph = GateGraph::from_netlist(&netlist);
        for i in 0..3 {
            let decl = graph.get(&NodeKey::gate("XOR", i)).unwrap();
            assert_eq!(decl.label, "XOR");
        }
        assert_eq!(graph.node_count(), 12);
        assert_eq!(graph.edge_count(), 9);
    }

    #[test]
    fn test_re_adding_known_operands_only_adds_edges() {
        let mut graph = GateGraph::new();
        graph.add_gate(&GateLine::new("x00", "AND", "y00", "z00", 0));
        let before = keys(&graph);

        graph.add_gate(&GateLine::new("x00", "OR", "y00", "z00", 1));
        let after = keys(&graph);

        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(&after[before.len()..], ["OR1"]);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut graph = GateGraph::new();
        graph.add_gate(&GateLine::new("a", "AND", "a", "b", 0));
        assert_eq!(edges(&graph), vec!["a -- AND0", "a -- AND0", "AND0 -- b"]);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_declare_is_idempotent() {
        let mut graph = GateGraph::new();
        assert!(graph.declare(NodeKey::signal("x00")));
        assert!(!graph.declare(NodeKey::signal("x00")));
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains(&NodeKey::signal("x00")));
        assert!(graph.get(&NodeKey::signal("y00")).is_none());
    }

    #[test]
    fn test_empty_netlist() {
        let graph = GateGraph::from_netlist(&Netlist::new());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_digit_operator_ids_do_not_collide() {
        let mut graph = GateGraph::new();
        graph.add_gate(&GateLine::new("p", "A1", "q", "t", 2));
        graph.add_gate(&GateLine::new("p", "A", "q", "v", 12));

        assert_eq!(graph.id_of(&NodeKey::gate("A1", 2)), Some("\"A1#2\""));
        assert_eq!(graph.id_of(&NodeKey::gate("A", 12)), Some("A12"));
    }

    #[test]
    fn test_signal_named_like_gate_gets_own_id() {
        let mut graph = GateGraph::new();
        graph.add_gate(&GateLine::new("x00", "AND", "y00", "z00", 0));
        graph.add_gate(&GateLine::new("AND0", "OR", "q", "w", 1));

        assert_eq!(graph.id_of(&NodeKey::gate("AND", 0)), Some("AND0"));
        assert_eq!(graph.id_of(&NodeKey::signal("AND0")), Some("\"AND0#1\""));
    }

    #[test]
    fn test_suffixed_id_skips_taken_text() {
        let mut graph = GateGraph::new();
        graph.declare(NodeKey::signal("AND0#1"));
        graph.declare(NodeKey::gate("AND", 0));
        graph.declare(NodeKey::signal("AND0"));
        assert_eq!(ids(&graph), vec!["\"AND0#1\"", "AND0", "\"AND0#2\""]);
    }

    #[test]
    fn test_plain_listing_keeps_plain_ids() {
        let netlist = netlist::parse("\nx00 AND y00 -> a\na OR y01 -> z00\n").unwrap();
        let graph = GateGraph::from_netlist(&netlist);
        assert_eq!(ids(&graph), vec!["AND0", "x00", "y00", "a", "OR1", "y01", "z00"]);
    }
}
