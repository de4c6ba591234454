use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Document, MARKDOWN_EXTENSION};

/// Adapter over the host's reference-resolution capability.
///
/// Given a raw marker payload and the storage path of the document
/// containing it, returns the single best-matching target document, or
/// `None` when nothing matches. Implementations are best-effort oracles;
/// callers consume only the returned document's path and type.
pub trait ReferenceResolver {
    fn resolve(&self, payload: &str, source_path: &str) -> Option<Document>;
}

/// In-memory reference index replicating first-matching-target link
/// resolution over a document corpus.
///
/// Display aliases and heading fragments are stripped from the payload,
/// exact storage paths win over short-identifier matches, exact-case short
/// identifiers win over case-folded ones, and ties go to the
/// lexicographically smallest storage path. Indexes are built once at
/// construction time.
pub struct LinkIndex {
    /// Every corpus document keyed by its exact storage path.
    by_path: BTreeMap<String, Document>,
    /// Candidate paths keyed by linkable name, exact case.
    by_name: BTreeMap<String, BTreeSet<String>>,
    /// Candidate paths keyed by linkable name, lowercased.
    by_name_folded: BTreeMap<String, BTreeSet<String>>,
}

impl LinkIndex {
    /// Builds the index from the full corpus listing.
    ///
    /// Markdown documents are linkable by their short identifier; every
    /// document is additionally linkable by its full file name, so
    /// `[[photo.png]]` finds an attachment wherever it lives.
    pub fn build(documents: &[Document]) -> LinkIndex {
        let mut by_path = BTreeMap::new();
        let mut by_name: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut by_name_folded: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for doc in documents {
            by_path.insert(doc.path.clone(), doc.clone());

            let mut names = vec![doc.file_name().to_string()];
            if doc.is_markdown() {
                names.push(doc.basename().to_string());
            }
            for name in names {
                by_name_folded
                    .entry(name.to_lowercase())
                    .or_default()
                    .insert(doc.path.clone());
                by_name.entry(name).or_default().insert(doc.path.clone());
            }
        }

        LinkIndex {
            by_path,
            by_name,
            by_name_folded,
        }
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

impl ReferenceResolver for LinkIndex {
    /// Resolution strategies are tried in order:
    /// 1. **Exact storage path** -- the link path as written, then with the
    ///    markdown extension appended. Path-qualified links that match
    ///    neither stay unresolved.
    /// 2. **Short identifier** -- exact-case lookup, then case-folded; with
    ///    several candidates the smallest storage path wins.
    ///
    /// An empty link path (a bare `#heading` reference) resolves to the
    /// containing document itself.
    fn resolve(&self, payload: &str, source_path: &str) -> Option<Document> {
        let link_path = normalize_link_path(payload);

        if link_path.is_empty() {
            return self.by_path.get(source_path).cloned();
        }

        // Strategy 1: exact storage path
        if let Some(doc) = self.by_path.get(link_path.as_str()) {
            return Some(doc.clone());
        }
        let with_ext = format!("{}.{}", link_path, MARKDOWN_EXTENSION);
        if let Some(doc) = self.by_path.get(with_ext.as_str()) {
            return Some(doc.clone());
        }
        if link_path.contains('/') {
            return None;
        }

        // Strategy 2: short identifier
        let candidates = self
            .by_name
            .get(link_path.as_str())
            .or_else(|| self.by_name_folded.get(link_path.to_lowercase().as_str()))?;
        let first = candidates.iter().next()?;
        self.by_path.get(first).cloned()
    }
}

/// Reduces a raw marker payload to its link path.
///
/// Everything after a `|` (display alias) or `#` (heading fragment) is
/// dropped, backslashes become `/`, and leading `./` or `/` runs are
/// trimmed along with surrounding whitespace.
fn normalize_link_path(payload: &str) -> String {
    let target = match payload.split_once('|') {
        Some((before, _)) => before,
        None => payload,
    };
    let target = match target.split_once('#') {
        Some((before, _)) => before,
        None => target,
    };
    let target = target.trim().replace('\\', "/");
    let target = target.trim_start_matches("./").trim_start_matches('/');
    target.to_string()
}
