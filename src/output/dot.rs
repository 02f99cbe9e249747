//! DOT output to stdout

use std::io::{self, Write};

use crate::error::TreeResult;
use crate::graph::Graph;

/// Print the graph's DOT source to stdout instead of rendering it.
pub fn print_dot(graph: &Graph) -> TreeResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    graph.write_dot(&mut out)?;
    out.flush()?;
    Ok(())
}
