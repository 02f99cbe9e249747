//! TreeBuilder - walks the tree once and feeds qualifying nodes into a sink

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TreeResult;
use crate::graph::{Graph, GraphSink, NodeShape};

use super::config::ScanConfig;
use super::predicate::QualifyCache;
use super::utils::{EntryKind, canonical_dir, get_name, matches_suffix, read_entries};

/// Node counts from one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub dirs: usize,
    pub files: usize,
}

/// Depth-first builder for the containment graph.
///
/// A directory becomes a node only if a qualifying file exists at or below it,
/// so a directory whose only matches are nested deeper still appears to keep
/// the path from the root connected. Files become nodes only when they sit
/// directly in an included directory and match the suffix.
pub struct TreeBuilder {
    config: ScanConfig,
}

impl TreeBuilder {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk from the configured root, writing into `sink`.
    ///
    /// Every call starts with an empty qualification cache. Errors abort the
    /// walk; whatever was already written to `sink` is left as is.
    pub fn build<S: GraphSink + ?Sized>(&self, sink: &mut S) -> TreeResult<BuildStats> {
        let mut run = BuildRun {
            config: &self.config,
            cache: QualifyCache::new(),
            ancestors: Vec::new(),
            sink,
            stats: BuildStats::default(),
        };
        run.visit(&self.config.root, None)?;
        debug!(
            root = %self.config.root.display(),
            dirs = run.stats.dirs,
            files = run.stats.files,
            cached = run.cache.len(),
            "tree built"
        );
        Ok(run.stats)
    }

    /// Build into a fresh [`Graph`].
    pub fn build_graph(&self) -> TreeResult<Graph> {
        let mut graph = Graph::new();
        self.build(&mut graph)?;
        Ok(graph)
    }
}

struct BuildRun<'a, S: GraphSink + ?Sized> {
    config: &'a ScanConfig,
    cache: QualifyCache,
    /// Canonical paths of the directories currently being visited, outermost first
    ancestors: Vec<PathBuf>,
    sink: &'a mut S,
    stats: BuildStats,
}

impl<S: GraphSink + ?Sized> BuildRun<'_, S> {
    fn visit(&mut self, dir: &Path, parent: Option<&Path>) -> TreeResult<()> {
        if !self
            .cache
            .qualifies_within(dir, self.config, &mut self.ancestors)?
        {
            debug!(dir = %dir.display(), "skipping, nothing qualifies below");
            return Ok(());
        }

        self.sink.add_node(dir, &get_name(dir), NodeShape::Box);
        self.stats.dirs += 1;
        if let Some(parent) = parent {
            self.sink.add_edge(parent, dir);
        }

        self.ancestors.push(canonical_dir(dir)?);
        let result = self.visit_children(dir);
        self.ancestors.pop();
        result
    }

    fn visit_children(&mut self, dir: &Path) -> TreeResult<()> {
        for entry in read_entries(dir, self.config)? {
            match EntryKind::of(&entry) {
                EntryKind::Dir => self.visit(&entry, Some(dir))?,
                EntryKind::File if matches_suffix(&entry, &self.config.suffix) => {
                    self.sink.add_node(&entry, &get_name(&entry), NodeShape::Ellipse);
                    self.sink.add_edge(dir, &entry);
                    self.stats.files += 1;
                }
                _ => {}
            }
        }
        Ok(())
    }
}
