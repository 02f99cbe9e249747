//! Graph model for the rendered diagram
//!
//! The traversal never talks to a renderer directly. It writes nodes and
//! edges into a [`GraphSink`], and [`Graph`] is the sink used for real runs.
//! Directory nodes are boxes, file nodes are ellipses, and every edge points
//! from a directory to one of its immediate children.

mod dot;

use std::path::{Path, PathBuf};

use serde::Serialize;

pub use dot::escape_id;

/// Shape a node is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    /// Directories (the graph's default node shape)
    Box,
    /// Matching files
    Ellipse,
}

impl NodeShape {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeShape::Box => "box",
            NodeShape::Ellipse => "ellipse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Path of the directory or file; unique within a graph
    pub id: PathBuf,
    /// Base name shown in the diagram
    pub label: String,
    pub shape: NodeShape,
}

/// Containment edge, parent directory -> immediate child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Receives nodes and edges as the tree builder discovers them.
pub trait GraphSink {
    fn add_node(&mut self, id: &Path, label: &str, shape: NodeShape);

    fn add_edge(&mut self, from: &Path, to: &Path);
}

/// In-memory graph, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn dir_count(&self) -> usize {
        self.count_shape(NodeShape::Box)
    }

    pub fn file_count(&self) -> usize {
        self.count_shape(NodeShape::Ellipse)
    }

    pub fn node(&self, id: &Path) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &Path) -> bool {
        self.node(id).is_some()
    }

    pub fn contains_edge(&self, from: &Path, to: &Path) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    /// Immediate children of `id`, in the order they were added.
    pub fn children<'a>(&'a self, id: &'a Path) -> impl Iterator<Item = &'a Path> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.from == id)
            .map(|e| e.to.as_path())
    }

    fn count_shape(&self, shape: NodeShape) -> usize {
        self.nodes.iter().filter(|n| n.shape == shape).count()
    }
}

impl GraphSink for Graph {
    fn add_node(&mut self, id: &Path, label: &str, shape: NodeShape) {
        self.nodes.push(Node {
            id: id.to_path_buf(),
            label: label.to_string(),
            shape,
        });
    }

    fn add_edge(&mut self, from: &Path, to: &Path) {
        self.edges.push(Edge {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
}
