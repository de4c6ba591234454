/// View kind that must hold the foreground before an export may run.
pub const GRAPH_VIEW: &str = "graph";

/// Host surface reporting which visualization view holds the foreground.
///
/// The export operation is gated on a graph view being active. The gate is
/// a UX guard, not a data dependency; no other part of the pipeline touches
/// this surface.
pub trait ViewInspector {
    /// Kind of the active foreground view, or `None` when nothing has focus.
    fn active_view(&self) -> Option<String>;
}

/// Fixed view state for hosts whose foreground never changes.
///
/// The CLI reports a graph view, since a terminal invocation of the export
/// is its own graph surface; tests use the other constructors to exercise
/// the precondition gate.
#[derive(Debug, Clone)]
pub struct StaticView {
    kind: Option<String>,
}

impl StaticView {
    /// A host with the graph view in the foreground.
    pub fn graph() -> StaticView {
        StaticView {
            kind: Some(GRAPH_VIEW.to_string()),
        }
    }

    /// A host with no active view at all.
    pub fn none() -> StaticView {
        StaticView { kind: None }
    }

    /// A host with a view of the given kind in the foreground.
    pub fn of(kind: impl Into<String>) -> StaticView {
        StaticView {
            kind: Some(kind.into()),
        }
    }
}

impl ViewInspector for StaticView {
    fn active_view(&self) -> Option<String> {
        self.kind.clone()
    }
}
