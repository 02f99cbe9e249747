//! Integration tests for textree


use assert_cmd::Command;
use harness::{TestTree, has_graphviz, run_textree};
use predicates::prelude::*;
use serde_json::Value;

fn json_graph(tree: &TestTree, args: &[&str]) -> Value {
    let mut all = vec!["--json"];
    all.extend_from_slice(args);
    let (stdout, stderr, success) = run_textree(tree.path(), &all);
    assert!(success, "textree should succeed: {}", stderr);
    serde_json::from_str(&stdout).expect("valid JSON")
}

fn labels(graph: &Value) -> Vec<String> {
    let mut labels: Vec<String> = graph["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["label"].as_str().unwrap().to_string())
        .collect();
    labels.sort();
    labels
}

#[test]
fn test_nested_tex_file() {
    let tree = TestTree::new();
    tree.add_file("root/a/b/doc.tex", "");
    tree.add_file("root/a/c/readme.md", "");

    let graph = json_graph(&tree, &["root"]);
    assert_eq!(labels(&graph), vec!["a", "b", "doc.tex", "root"]);
    assert_eq!(graph["edges"].as_array().unwrap().len(), 3);
}

#[test]
fn test_no_tex_files_gives_empty_graph() {
    let tree = TestTree::new();
    tree.add_file("root/readme.md", "");
    tree.add_file("root/src/lib.rs", "");

    let graph = json_graph(&tree, &["root"]);
    assert!(graph["nodes"].as_array().unwrap().is_empty());
    assert!(graph["edges"].as_array().unwrap().is_empty());
}

#[test]
fn test_direct_file_and_sibling_without_matches() {
    let tree = TestTree::new();
    tree.add_file("root/x.tex", "");
    tree.add_file("root/sub/notes.txt", "");

    let graph = json_graph(&tree, &["root"]);
    assert_eq!(labels(&graph), vec!["root", "x.tex"]);
}

#[test]
fn test_file_nodes_are_ellipses() {
    let tree = TestTree::new();
    tree.add_file("root/x.tex", "");

    let graph = json_graph(&tree, &["root"]);
    for node in graph["nodes"].as_array().unwrap() {
        let expected = if node["label"] == "x.tex" { "ellipse" } else { "box" };
        assert_eq!(node["shape"], expected);
    }
}

#[test]
fn test_custom_suffix() {
    let tree = TestTree::new();
    tree.add_file("root/refs.bib", "");
    tree.add_file("root/main.tex", "");

    let graph = json_graph(&tree, &["root", "-s", ".bib"]);
    assert_eq!(labels(&graph), vec!["refs.bib", "root"]);
}

#[test]
fn test_ignore_pattern() {
    let tree = TestTree::new();
    tree.add_file("root/paper/main.tex", "");
    tree.add_file("root/_minted/cache.tex", "");

    let graph = json_graph(&tree, &["root", "-I", "_minted"]);
    assert_eq!(labels(&graph), vec!["main.tex", "paper", "root"]);
}

#[test]
fn test_node_ids_are_absolute() {
    let tree = TestTree::new();
    tree.add_file("root/x.tex", "");

    let graph = json_graph(&tree, &["root"]);
    for node in graph["nodes"].as_array().unwrap() {
        let id = node["id"].as_str().unwrap();
        assert!(std::path::Path::new(id).is_absolute(), "{}", id);
    }
}

#[test]
fn test_default_root_ids_have_no_dot_segments() {
    let tree = TestTree::new();
    tree.add_file("a/x.tex", "");

    let graph = json_graph(&tree, &[]);
    let nodes = graph["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    for node in nodes {
        let id = node["id"].as_str().unwrap();
        assert!(!id.contains("/./") && !id.ends_with("/."), "{}", id);
    }
    let file = nodes.iter().find(|n| n["label"] == "x.tex").unwrap();
    assert!(file["id"].as_str().unwrap().ends_with("/a/x.tex"));
    // The root is labelled by its own name, not "."
    assert!(nodes.iter().all(|n| n["label"] != "."));
}

#[test]
fn test_dot_output() {
    let tree = TestTree::new();
    tree.add_file("root/x.tex", "");

    let (stdout, _stderr, success) = run_textree(tree.path(), &["root", "--dot"]);
    assert!(success);
    assert!(stdout.starts_with("digraph {"), "{}", stdout);
    assert!(stdout.contains("node [shape=box]"));
    assert!(stdout.contains("[label=\"x.tex\" shape=ellipse]"), "{}", stdout);
    assert!(stdout.contains(" -> "));
    assert!(!tree.path().join("file_system_structure.png").exists());
}

#[test]
fn test_sorted_dot_output_is_stable() {
    let tree = TestTree::new();
    for name in ["c.tex", "a.tex", "b/d.tex"] {
        tree.add_file(&format!("root/{}", name), "");
    }

    let (first, _, ok1) = run_textree(tree.path(), &["root", "--dot", "--sort"]);
    let (second, _, ok2) = run_textree(tree.path(), &["root", "--dot", "--sort"]);
    assert!(ok1 && ok2);
    assert_eq!(first, second);
    let a = first.find("\"a.tex\"").unwrap();
    let c = first.find("\"c.tex\"").unwrap();
    assert!(a < c);
}

#[test]
fn test_dot_and_json_conflict() {
    Command::cargo_bin("textree")
        .unwrap()
        .args(["--dot", "--json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unknown_engine_rejected() {
    Command::cargo_bin("textree")
        .unwrap()
        .args(["-K", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_graphviz_fails_without_image() {
    let tree = TestTree::new();
    tree.add_file("root/x.tex", "");

    Command::cargo_bin("textree")
        .unwrap()
        .current_dir(tree.path())
        .args(["root", "--graphviz", "/nonexistent/graphviz/dot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("textree: cannot run"));

    assert!(!tree.path().join("file_system_structure.png").exists());
    assert!(!tree.path().join("file_system_structure.gv").exists());
}

#[test]
fn test_render_png() {
    if !has_graphviz() {
        eprintln!("skipping: Graphviz not installed");
        return;
    }
    let tree = TestTree::new();
    tree.add_file("root/a/b/doc.tex", "");

    let (stdout, stderr, success) = run_textree(tree.path(), &["root"]);
    assert!(success, "render should succeed: {}", stderr);
    assert!(
        stdout.contains("saved as ./file_system_structure.png"),
        "{}",
        stdout
    );
    assert!(stdout.contains("3 directories, 1 files"), "{}", stdout);
    assert!(tree.path().join("file_system_structure.png").exists());
    assert!(!tree.path().join("file_system_structure.gv").exists());
}

#[test]
fn test_render_svg_keep_source() {
    if !has_graphviz() {
        eprintln!("skipping: Graphviz not installed");
        return;
    }
    let tree = TestTree::new();
    tree.add_file("root/x.tex", "");

    let (_stdout, stderr, success) = run_textree(
        tree.path(),
        &["root", "-T", "svg", "-o", "thesis", "-K", "dot", "--keep-source"],
    );
    assert!(success, "{}", stderr);
    let svg = std::fs::read_to_string(tree.path().join("thesis.svg")).unwrap();
    assert!(svg.contains("x.tex"));
    assert!(tree.path().join("thesis.gv").exists());
}

#[test]
fn test_render_empty_tree() {
    if !has_graphviz() {
        eprintln!("skipping: Graphviz not installed");
        return;
    }
    let tree = TestTree::new();
    tree.add_file("root/readme.md", "");

    let (stdout, _stderr, success) = run_textree(tree.path(), &["root"]);
    assert!(success);
    assert!(stdout.contains("nothing matched"), "{}", stdout);
    assert!(tree.path().join("file_system_structure.png").exists());
}
