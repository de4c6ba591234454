use serde::{Deserialize, Serialize};

/// File extension of the recognized document type.
pub const MARKDOWN_EXTENSION: &str = "md";

/// A document surfaced by the host store, identified by its storage path.
///
/// Paths are corpus-relative and `/`-separated regardless of platform. The
/// document's content is owned by the store; this type carries identity only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: String,
}

impl Document {
    pub fn new(path: impl Into<String>) -> Document {
        Document { path: path.into() }
    }

    /// Final path segment, extension included.
    pub fn file_name(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[idx + 1..],
            None => &self.path,
        }
    }

    /// Short identifier: the final path segment without its extension.
    ///
    /// A leading dot does not count as an extension separator, so
    /// `.hidden` is its own basename.
    pub fn basename(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        }
    }

    /// Containing directory path, `""` for documents at the corpus root.
    pub fn directory(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[..idx],
            None => "",
        }
    }

    /// Extension of the final path segment, without the dot.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => Some(&name[idx + 1..]),
            _ => None,
        }
    }

    /// Whether this document is of the recognized (markdown) type.
    pub fn is_markdown(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION))
    }
}

/// A raw reference marker found in document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Literal text between the `[[` and `]]` delimiters, unvalidated.
    pub payload: String,
    /// 1-based line of the opening delimiter.
    pub line: u32,
}

/// A node in the exported graph: one per in-scope document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// The document's short identifier.
    pub id: String,
    /// Containing directory relative to the scope root, `""` at the root.
    pub group: String,
}

/// A directed edge between two documents' short identifiers.
///
/// Edges are not deduplicated and may be self-referential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// The complete exported graph value.
///
/// Node order is document enumeration order; edge order is document order,
/// then in-document reference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Wire format for edge keys in the exported artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeFormat {
    /// Current convention: `source` / `target`.
    #[default]
    SourceTarget,
    /// Legacy convention: `from` / `to`.
    FromTo,
}

#[allow(clippy::should_implement_trait)]
impl EdgeFormat {
    /// Returns the string representation of this edge format.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeFormat::SourceTarget => "source_target",
            EdgeFormat::FromTo => "from_to",
        }
    }

    /// Parses a string into an `EdgeFormat`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<EdgeFormat> {
        match s {
            "source_target" | "source-target" => Some(EdgeFormat::SourceTarget),
            "from_to" | "from-to" => Some(EdgeFormat::FromTo),
            _ => None,
        }
    }
}

/// Result of a completed export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub nodes: usize,
    pub edges: usize,
    pub output_path: String,
    pub duration_ms: u64,
}
