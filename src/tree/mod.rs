//! Directory tree scanning
//!
//! This module decides which directories and files end up in the diagram:
//!
//! - `predicate`: does a directory hold a qualifying file at or below it
//! - `builder`: `TreeBuilder`, the depth-first walk that feeds a `GraphSink`

mod builder;
mod config;
mod predicate;
mod utils;

pub use builder::{BuildStats, TreeBuilder};
pub use config::{DEFAULT_SUFFIX, ScanConfig};
pub use predicate::{QualifyCache, has_qualifying_files};
pub use utils::{glob_match, matches_suffix, normalize_root};
