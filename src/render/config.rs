//! Rendering configuration

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

pub const DEFAULT_OUTPUT_NAME: &str = "file_system_structure";
pub const DEFAULT_PROGRAM: &str = "dot";

/// Image format handed to Graphviz with `-T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    Jpg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Jpg => "jpg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Graphviz layout engine, passed with `-K`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LayoutEngine {
    /// Force-directed placement
    #[default]
    Fdp,
    /// Hierarchical top-down layout
    Dot,
    Neato,
    Circo,
    Twopi,
    Sfdp,
}

impl LayoutEngine {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutEngine::Fdp => "fdp",
            LayoutEngine::Dot => "dot",
            LayoutEngine::Neato => "neato",
            LayoutEngine::Circo => "circo",
            LayoutEngine::Twopi => "twopi",
            LayoutEngine::Sfdp => "sfdp",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how the diagram is written.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Base name shared by the image and the intermediate source file
    pub output_name: String,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub engine: LayoutEngine,
    /// Delete the intermediate `.gv` file once rendering is done
    pub cleanup: bool,
    /// Graphviz executable
    pub program: PathBuf,
}

impl RenderConfig {
    /// Path of the intermediate DOT source.
    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.gv", self.output_name))
    }

    /// Path of the rendered image.
    pub fn image_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.output_name, self.format.extension()))
    }

    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            output_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            engine: LayoutEngine::default(),
            cleanup: true,
            program: PathBuf::from(DEFAULT_PROGRAM),
        }
    }
}
