//! CLI entry point for textree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use textree::render::{DEFAULT_OUTPUT_NAME, DEFAULT_PROGRAM};
use textree::tree::{DEFAULT_SUFFIX, normalize_root};
use textree::{
    GraphvizRenderer, LayoutEngine, OutputConfig, OutputFormat, RenderConfig, Renderer,
    ScanConfig, TreeResult, generate_file_tree, print_dot, print_json, print_summary,
};
use tracing::Level;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "textree")]
#[command(about = "Draw the directories that contain .tex files as a Graphviz diagram")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File-name suffix that makes a file qualify
    #[arg(short = 's', long = "suffix", default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Base name of the rendered image
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_NAME)]
    output: String,

    /// Directory the image is written to
    #[arg(long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Image format
    #[arg(short = 'T', long = "format", default_value = "png")]
    format: OutputFormat,

    /// Graphviz layout engine
    #[arg(short = 'K', long = "engine", default_value = "fdp")]
    engine: LayoutEngine,

    /// Graphviz executable to run
    #[arg(long = "graphviz", value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    program: PathBuf,

    /// Keep the intermediate .gv file next to the image
    #[arg(long = "keep-source")]
    keep_source: bool,

    /// Visit entries in name order (default: filesystem order)
    #[arg(long = "sort")]
    sort: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Print the DOT source to stdout instead of rendering
    #[arg(long = "dot", conflicts_with = "json")]
    dot: bool,

    /// Print the graph as JSON to stdout instead of rendering
    #[arg(long = "json", conflicts_with = "dot")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("textree: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> TreeResult<()> {
    let root = normalize_root(&args.path, &std::env::current_dir()?);

    let scan = ScanConfig {
        root,
        suffix: args.suffix.clone(),
        ignore_patterns: args.ignore.clone(),
        sort_entries: args.sort,
    };
    tracing::debug!(?scan, "scanning");

    let (graph, stats) = generate_file_tree(&scan)?;

    if args.dot {
        return print_dot(&graph);
    }
    if args.json {
        return print_json(&graph);
    }

    let render = RenderConfig {
        output_name: args.output.clone(),
        output_dir: args.output_dir.clone(),
        format: args.format,
        engine: args.engine,
        cleanup: !args.keep_source,
        program: args.program.clone(),
    };
    let image = GraphvizRenderer::new().render(&graph, &render)?;

    let output = OutputConfig {
        use_color: should_use_color(args.color),
    };
    print_summary(&image, &stats, &output)?;
    Ok(())
}
