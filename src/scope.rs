/// Configured sub-tree of the corpus that bounds an export.
///
/// An empty prefix covers the whole corpus. Matching aligns on path
/// separator boundaries: scope `A` contains `A/B/c.md` but not `AB/c.md`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    prefix: String,
}

impl Scope {
    /// Builds a scope from a configured directory prefix.
    ///
    /// Trailing separators are normalized away, so `Notes/` and `Notes`
    /// describe the same scope.
    pub fn new(prefix: impl Into<String>) -> Scope {
        let mut prefix = prefix.into();
        while prefix.ends_with('/') {
            prefix.pop();
        }
        Scope { prefix }
    }

    /// The configured prefix, `""` when unscoped.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True when the scope covers the whole corpus.
    pub fn is_unscoped(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Whether a storage path lies inside the scope.
    pub fn contains(&self, path: &str) -> bool {
        if self.prefix.is_empty() {
            return true;
        }
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.starts_with('/'),
            None => false,
        }
    }

    /// Rewrites a directory path relative to the scope root.
    ///
    /// The scope prefix itself maps to `""`; directories outside the scope
    /// come back unchanged.
    pub fn relative_dir(&self, dir: &str) -> String {
        if self.prefix.is_empty() {
            return dir.to_string();
        }
        match dir.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.trim_start_matches('/').to_string(),
            None => dir.to_string(),
        }
    }
}
