//! textree - diagrams of just the directories that hold your .tex files

pub mod error;
pub mod graph;
pub mod output;
pub mod render;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::path::PathBuf;

pub use error::{TreeError, TreeResult};
pub use graph::{Edge, Graph, GraphSink, Node, NodeShape};
pub use output::{OutputConfig, print_dot, print_json, print_summary};
pub use render::{GraphvizRenderer, LayoutEngine, OutputFormat, RenderConfig, Renderer};
pub use tree::{BuildStats, QualifyCache, ScanConfig, TreeBuilder, has_qualifying_files};

/// Scan `scan.root` and return the populated graph.
pub fn generate_file_tree(scan: &ScanConfig) -> TreeResult<(Graph, BuildStats)> {
    let mut graph = Graph::new();
    let stats = TreeBuilder::new(scan.clone()).build(&mut graph)?;
    Ok((graph, stats))
}

/// Scan, then render. The renderer is only invoked once the whole walk has
/// succeeded, so a failed walk never leaves an image behind.
pub fn render_file_tree<R: Renderer + ?Sized>(
    scan: &ScanConfig,
    config: &RenderConfig,
    renderer: &R,
) -> TreeResult<(PathBuf, BuildStats)> {
    let (graph, stats) = generate_file_tree(scan)?;
    let image = renderer.render(&graph, config)?;
    Ok((image, stats))
}
