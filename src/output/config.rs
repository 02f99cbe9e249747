//! Output configuration types

/// Configuration for text printed to the terminal.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}
