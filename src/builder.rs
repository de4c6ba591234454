use tracing::{debug, warn};

use crate::errors::{ExportError, Result};
use crate::extract::extract_markers;
use crate::resolve::ReferenceResolver;
use crate::scope::Scope;
use crate::store::DocumentStore;
use crate::types::{Document, GraphData, GraphEdge, GraphNode};

/// Assembles the link graph for the in-scope slice of a corpus.
///
/// Owns the grouping and ordering policy: one node per in-scope markdown
/// document in enumeration order, then edges in document order and
/// in-document reference order. An edge is kept only when its marker
/// resolves to an in-scope markdown document; everything else is a silent
/// per-reference skip. Edges are not deduplicated and self-references
/// survive.
pub struct GraphBuilder<'a, S, R> {
    store: &'a S,
    resolver: &'a R,
    scope: Scope,
}

impl<'a, S: DocumentStore, R: ReferenceResolver> GraphBuilder<'a, S, R> {
    pub fn new(store: &'a S, resolver: &'a R, scope: Scope) -> Self {
        GraphBuilder {
            store,
            resolver,
            scope,
        }
    }

    /// Builds the complete graph value.
    ///
    /// Fails fast with `EmptyScope` when no markdown document lies inside
    /// the scope; no content has been read at that point. A document whose
    /// content cannot be read keeps its node but contributes no edges.
    pub fn build(&self) -> Result<GraphData> {
        let mut documents = self.store.list_markdown()?;
        documents.retain(|doc| self.scope.contains(&doc.path));
        if documents.is_empty() {
            return Err(ExportError::EmptyScope {
                scope: self.scope.prefix().to_string(),
            });
        }
        debug!("building graph from {} in-scope documents", documents.len());

        let nodes = documents
            .iter()
            .map(|doc| GraphNode {
                id: doc.basename().to_string(),
                group: self.scope.relative_dir(doc.directory()),
            })
            .collect();

        let mut edges = Vec::new();
        for doc in &documents {
            let content = match self.store.read_content(doc) {
                Ok(content) => content,
                Err(e) => {
                    warn!("skipping unreadable document {}: {}", doc.path, e);
                    continue;
                }
            };
            self.collect_edges(doc, &content, &mut edges);
        }

        Ok(GraphData { nodes, edges })
    }

    /// Appends one edge per marker in `content` that resolves to an
    /// in-scope markdown target, preserving marker order.
    fn collect_edges(&self, doc: &Document, content: &str, edges: &mut Vec<GraphEdge>) {
        for marker in extract_markers(content) {
            let target = match self.resolver.resolve(&marker.payload, &doc.path) {
                Some(target) => target,
                None => {
                    debug!(
                        "unresolved reference [[{}]] at {}:{}",
                        marker.payload, doc.path, marker.line
                    );
                    continue;
                }
            };
            if !target.is_markdown() || !self.scope.contains(&target.path) {
                debug!(
                    "reference [[{}]] at {}:{} resolves outside the export ({})",
                    marker.payload, doc.path, marker.line, target.path
                );
                continue;
            }
            edges.push(GraphEdge {
                source: doc.basename().to_string(),
                target: target.basename().to_string(),
            });
        }
    }
}
