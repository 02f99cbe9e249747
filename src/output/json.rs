//! JSON output formatting

use crate::error::TreeResult;
use crate::graph::Graph;

/// Print the graph as pretty-printed JSON to stdout.
pub fn print_json(graph: &Graph) -> TreeResult<()> {
    let json = serde_json::to_string_pretty(graph)?;
    println!("{}", json);
    Ok(())
}
