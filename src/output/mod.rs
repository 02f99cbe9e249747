//! Terminal output
//!
//! - `json` - the graph as JSON
//! - `dot` - the graph as DOT source, skipping the render
//! - `summary` - the line printed once an image has been written

mod config;
mod dot;
mod json;
mod summary;

pub use config::OutputConfig;
pub use dot::print_dot;
pub use json::print_json;
pub use summary::{print_summary, write_summary};
