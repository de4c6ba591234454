use thiserror::Error;

/// Errors that can occur during graph export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no active view; open the graph view before exporting")]
    NoActiveView,

    #[error("active view '{kind}' is not a graph view")]
    ViewKind { kind: String },

    #[error("no markdown documents found in scope")]
    EmptyScope { scope: String },

    #[error("failed to write graph artifact (path: {path})")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `ExportError`.
pub type Result<T> = std::result::Result<T, ExportError>;
