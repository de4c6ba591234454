use serde::Serialize;

use crate::errors::Result;
use crate::store::DocumentStore;
use crate::types::{EdgeFormat, GraphData, GraphNode};

/// Storage path of the exported artifact, relative to the corpus root.
pub const OUTPUT_FILENAME: &str = "graph_data.json";

/// Renders the graph as pretty-printed JSON with a stable key order.
///
/// `nodes` precedes `edges`; nodes serialize `id` then `group`; edges
/// serialize `source` then `target`, or `from` then `to` under the legacy
/// format. Rendering is deterministic, so an unchanged graph produces a
/// byte-identical artifact.
pub fn render(graph: &GraphData, format: EdgeFormat) -> Result<String> {
    let json = match format {
        EdgeFormat::SourceTarget => serde_json::to_string_pretty(graph)?,
        EdgeFormat::FromTo => serde_json::to_string_pretty(&LegacyGraph::from(graph))?,
    };
    Ok(json)
}

/// Writes the rendered graph through the store at the fixed output path.
///
/// Overwrites the entity in place when one exists, creates it otherwise;
/// both go through the store's own primitives so no partially-written state
/// is observable. A failed write surfaces with its cause and is not
/// retried.
pub fn write_artifact<S: DocumentStore>(
    store: &S,
    graph: &GraphData,
    format: EdgeFormat,
) -> Result<()> {
    let json = render(graph, format)?;
    if store.entity_exists(OUTPUT_FILENAME) {
        store.overwrite_entity(OUTPUT_FILENAME, &json)
    } else {
        store.create_entity(OUTPUT_FILENAME, &json)
    }
}

/// Legacy wire shape: nodes unchanged, edges keyed `from`/`to`.
#[derive(Serialize)]
struct LegacyGraph<'a> {
    nodes: &'a [GraphNode],
    edges: Vec<LegacyEdge<'a>>,
}

#[derive(Serialize)]
struct LegacyEdge<'a> {
    from: &'a str,
    to: &'a str,
}

impl<'a> From<&'a GraphData> for LegacyGraph<'a> {
    fn from(graph: &'a GraphData) -> LegacyGraph<'a> {
        LegacyGraph {
            nodes: &graph.nodes,
            edges: graph
                .edges
                .iter()
                .map(|edge| LegacyEdge {
                    from: &edge.source,
                    to: &edge.target,
                })
                .collect(),
        }
    }
}
