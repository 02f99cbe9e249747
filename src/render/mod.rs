//! Turning a [`Graph`] into an image
//!
//! Layout is delegated entirely to an external engine. [`Renderer`] is the
//! seam: [`GraphvizRenderer`] shells out to Graphviz, and tests can swap in
//! something that never leaves the process.

mod config;
mod graphviz;

use std::path::PathBuf;

use crate::error::TreeResult;
use crate::graph::Graph;

pub use config::{DEFAULT_OUTPUT_NAME, DEFAULT_PROGRAM, LayoutEngine, OutputFormat, RenderConfig};
pub use graphviz::GraphvizRenderer;

/// Something that can lay out and rasterize a graph.
pub trait Renderer {
    /// Render `graph` according to `config`, returning the path of the image.
    fn render(&self, graph: &Graph, config: &RenderConfig) -> TreeResult<PathBuf>;
}
