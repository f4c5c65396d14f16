//! Static description of the overview roadmap diagram.
//!
//! This is diagram-as-data: a fixed node list and edge list that the TUI
//! overview component draws top-to-bottom. The core never runs any graph
//! algorithm on it — sequencing comes from declaration order, and the two
//! cross-cutting nodes hang off their target stages with dashed edges.

/// Whether a node is a sequential playbook stage or a cross-cutting
/// element that applies across stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Stage,
    CrossCutting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphNode {
    pub id: &'static str,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: &'static str,
    pub to: &'static str,
    pub style: EdgeStyle,
}

#[derive(Debug, Clone, Copy)]
pub struct OverviewGraph {
    pub nodes: &'static [GraphNode],
    pub edges: &'static [GraphEdge],
}

impl OverviewGraph {
    /// Sequential stage node ids, in roadmap order.
    pub fn stage_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Stage)
            .map(|n| n.id)
    }

    /// Dashed edges from cross-cutting nodes, as (cross-cutting id, target
    /// stage id) pairs.
    pub fn cross_cutting_links(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.edges
            .iter()
            .filter(|e| e.style == EdgeStyle::Dashed)
            .map(|e| (e.from, e.to))
    }
}

const NODES: &[GraphNode] = &[
    GraphNode { id: "Business Problem", kind: NodeKind::Stage },
    GraphNode { id: "Business Motivation", kind: NodeKind::Stage },
    GraphNode { id: "Business Model", kind: NodeKind::Stage },
    GraphNode { id: "Business Requirements", kind: NodeKind::Stage },
    GraphNode { id: "Business Solution", kind: NodeKind::Stage },
    GraphNode { id: "Implement the Business Change", kind: NodeKind::Stage },
    GraphNode { id: "Technical Standards", kind: NodeKind::CrossCutting },
    GraphNode { id: "Governance Process", kind: NodeKind::CrossCutting },
];

const EDGES: &[GraphEdge] = &[
    GraphEdge { from: "Business Problem", to: "Business Motivation", style: EdgeStyle::Solid },
    GraphEdge { from: "Business Motivation", to: "Business Model", style: EdgeStyle::Solid },
    GraphEdge { from: "Business Model", to: "Business Requirements", style: EdgeStyle::Solid },
    GraphEdge { from: "Business Requirements", to: "Business Solution", style: EdgeStyle::Solid },
    GraphEdge { from: "Business Solution", to: "Implement the Business Change", style: EdgeStyle::Solid },
    GraphEdge { from: "Technical Standards", to: "Business Model", style: EdgeStyle::Dashed },
    GraphEdge { from: "Governance Process", to: "Implement the Business Change", style: EdgeStyle::Dashed },
];

pub const fn overview_graph() -> OverviewGraph {
    OverviewGraph { nodes: NODES, edges: EDGES }
}
