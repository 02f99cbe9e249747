//! DOT serialization

use std::io::{self, Write};
use std::path::Path;

use super::{Graph, NodeShape};

impl Graph {
    /// Write the graph in Graphviz DOT syntax.
    ///
    /// Directories inherit the default `box` shape; only file nodes carry an
    /// explicit `shape` attribute.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph {{")?;
        writeln!(out, "\tnode [shape={}]", NodeShape::Box.as_str())?;
        for node in &self.nodes {
            write!(
                out,
                "\t{} [label={}",
                quote_path(&node.id),
                escape_id(&node.label)
            )?;
            if node.shape != NodeShape::Box {
                write!(out, " shape={}", node.shape.as_str())?;
            }
            writeln!(out, "]")?;
        }
        for edge in &self.edges {
            writeln!(out, "\t{} -> {}", quote_path(&edge.from), quote_path(&edge.to))?;
        }
        writeln!(out, "}}")
    }

    pub fn to_dot(&self) -> String {
        let mut buf = Vec::new();
        self.write_dot(&mut buf)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Quote a string as a DOT identifier.
pub fn escape_id(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn quote_path(path: &Path) -> String {
    escape_id(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphSink;

    #[test]
    fn test_escape_id() {
        assert_eq!(escape_id("plain"), "\"plain\"");
        assert_eq!(escape_id("with space.tex"), "\"with space.tex\"");
        assert_eq!(escape_id("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(escape_id("C:\\docs"), "\"C:\\\\docs\"");
        assert_eq!(escape_id("two\nlines"), "\"two\\nlines\"");
    }

    #[test]
    fn test_empty_graph() {
        let dot = Graph::new().to_dot();
        assert_eq!(dot, "digraph {\n\tnode [shape=box]\n}\n");
    }

    #[test]
    fn test_nodes_and_edges() {
        let mut graph = Graph::new();
        graph.add_node(Path::new("/r"), "r", NodeShape::Box);
        graph.add_node(Path::new("/r/x.tex"), "x.tex", NodeShape::Ellipse);
        graph.add_edge(Path::new("/r"), Path::new("/r/x.tex"));

        let dot = graph.to_dot();
        assert!(dot.contains("\t\"/r\" [label=\"r\"]\n"), "{}", dot);
        assert!(
            dot.contains("\t\"/r/x.tex\" [label=\"x.tex\" shape=ellipse]\n"),
            "{}",
            dot
        );
        assert!(dot.contains("\t\"/r\" -> \"/r/x.tex\"\n"), "{}", dot);
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_to_dot_matches_write_dot() {
        let mut graph = Graph::new();
        graph.add_node(Path::new("/r"), "r", NodeShape::Box);
        let mut buf = Vec::new();
        graph.write_dot(&mut buf).unwrap();
        assert_eq!(graph.to_dot().as_bytes(), buf.as_slice());
    }
}
