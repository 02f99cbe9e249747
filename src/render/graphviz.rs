//! Graphviz renderer
//!
//! Writes the DOT source next to the requested image, runs
//! `dot -K<engine> -T<format> -o <image> <source>` and removes the source
//! afterwards unless asked to keep it.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::error::{TreeError, TreeResult};
use crate::graph::Graph;

use super::Renderer;
use super::config::RenderConfig;

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphvizRenderer;

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Check if the Graphviz executable can be run at all.
    pub fn is_available(program: &Path) -> bool {
        Command::new(program)
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn write_source(graph: &Graph, path: &Path) -> TreeResult<()> {
        let write_err = |source| TreeError::WriteSource {
            path: path.to_path_buf(),
            source,
        };
        let mut out = BufWriter::new(File::create(path).map_err(write_err)?);
        graph.write_dot(&mut out).map_err(write_err)?;
        out.flush().map_err(write_err)
    }

    fn run_layout(config: &RenderConfig, source: &Path, image: &Path) -> TreeResult<()> {
        info!(
            program = %config.program.display(),
            engine = %config.engine,
            format = %config.format,
            image = %image.display(),
            "rendering"
        );
        let output = Command::new(&config.program)
            .arg(format!("-K{}", config.engine))
            .arg(format!("-T{}", config.format))
            .arg("-o")
            .arg(image)
            .arg(source)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TreeError::RendererUnavailable {
                program: config.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TreeError::RenderFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, graph: &Graph, config: &RenderConfig) -> TreeResult<PathBuf> {
        let source = config.source_path();
        let image = config.image_path();

        Self::write_source(graph, &source)?;
        debug!(source = %source.display(), "wrote graph source");

        let result = Self::run_layout(config, &source, &image);

        if config.cleanup {
            if let Err(e) = fs::remove_file(&source) {
                warn!(source = %source.display(), error = %e, "could not remove graph source");
            }
        }

        result.map(|()| image)
    }
}
