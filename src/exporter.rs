use std::time::Instant;

use tracing::{debug, info};

use crate::builder::GraphBuilder;
use crate::errors::{ExportError, Result};
use crate::export::{write_artifact, OUTPUT_FILENAME};
use crate::host::{ViewInspector, GRAPH_VIEW};
use crate::resolve::LinkIndex;
use crate::scope::Scope;
use crate::store::DocumentStore;
use crate::types::{EdgeFormat, ExportSummary};

/// Central orchestrator that runs one complete graph export.
///
/// Wires the view gate, document store, reference index, scope, and edge
/// format into the single operation every trigger surface invokes.
pub struct GraphExporter<S, V> {
    store: S,
    view: V,
    scope: Scope,
    edge_format: EdgeFormat,
}

impl<S: DocumentStore, V: ViewInspector> GraphExporter<S, V> {
    pub fn new(store: S, view: V, scope: Scope, edge_format: EdgeFormat) -> Self {
        GraphExporter {
            store,
            view,
            scope,
            edge_format,
        }
    }

    /// Runs the export end to end.
    ///
    /// Order of operations: precondition gate, corpus indexing, graph
    /// construction, artifact write. The gate and the empty-scope check
    /// abort before any document content is read; a write failure is the
    /// only error that can occur after the graph has been built.
    pub fn export(&self) -> Result<ExportSummary> {
        let start = Instant::now();
        self.check_view()?;

        if self.scope.is_unscoped() {
            info!("exporting link graph for the whole corpus");
        } else {
            info!("exporting link graph for scope '{}'", self.scope.prefix());
        }

        let corpus = self.store.list_all()?;
        let index = LinkIndex::build(&corpus);
        debug!("indexed {} documents for reference resolution", index.len());

        let builder = GraphBuilder::new(&self.store, &index, self.scope.clone());
        let graph = builder.build()?;

        write_artifact(&self.store, &graph, self.edge_format)?;

        let summary = ExportSummary {
            nodes: graph.nodes.len(),
            edges: graph.edges.len(),
            output_path: OUTPUT_FILENAME.to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            "exported {} nodes and {} edges to {} in {}ms",
            summary.nodes, summary.edges, summary.output_path, summary.duration_ms
        );
        Ok(summary)
    }

    /// Precondition gate: a graph view must hold the foreground.
    fn check_view(&self) -> Result<()> {
        match self.view.active_view() {
            Some(kind) if kind == GRAPH_VIEW => Ok(()),
            Some(kind) => Err(ExportError::ViewKind { kind }),
            None => Err(ExportError::NoActiveView),
        }
    }
}
