use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{ExportError, Result};
use crate::types::Document;

/// Host document store consumed by the export pipeline.
///
/// Implementations own document identity, content, and entity writes; the
/// pipeline reads through this surface and persists a single artifact.
pub trait DocumentStore {
    /// Markdown documents in the corpus, in stable enumeration order.
    fn list_markdown(&self) -> Result<Vec<Document>>;

    /// Every document in the corpus, markdown or not.
    fn list_all(&self) -> Result<Vec<Document>>;

    /// Full text content of a document.
    fn read_content(&self, doc: &Document) -> Result<String>;

    /// Whether an entity already exists at `path`.
    fn entity_exists(&self, path: &str) -> bool;

    /// Creates a new entity at `path`. Fails when one already exists.
    fn create_entity(&self, path: &str, content: &str) -> Result<()>;

    /// Replaces the content of the entity at `path`, atomically as far as
    /// concurrent readers of the store can observe.
    fn overwrite_entity(&self, path: &str, content: &str) -> Result<()>;
}

/// Filesystem-backed store rooted at a vault directory.
///
/// Storage paths are vault-relative and `/`-separated on every platform.
/// Dot-directories (`.obsidian`, `.git`, the tool's own metadata dir) are
/// not part of the corpus. Enumeration order is lexicographic on the
/// relative path, so repeated exports see the corpus in identical order.
pub struct VaultStore {
    root: PathBuf,
}

impl VaultStore {
    pub fn new(root: impl Into<PathBuf>) -> VaultStore {
        VaultStore { root: root.into() }
    }

    /// The vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location of a storage path.
    fn location(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    fn scan(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for entry in WalkDir::new(&self.root).into_iter().filter_entry(|e| {
            // Skip hidden entries, but never the walk root itself
            let name = e.file_name().to_string_lossy();
            e.depth() == 0 || !name.starts_with('.')
        }) {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                let path = relative.to_string_lossy().replace('\\', "/");
                documents.push(Document::new(path));
            }
        }
        documents.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(documents)
    }
}

impl DocumentStore for VaultStore {
    fn list_markdown(&self) -> Result<Vec<Document>> {
        let mut documents = self.scan()?;
        documents.retain(Document::is_markdown);
        Ok(documents)
    }

    fn list_all(&self) -> Result<Vec<Document>> {
        self.scan()
    }

    fn read_content(&self, doc: &Document) -> Result<String> {
        Ok(fs::read_to_string(self.location(&doc.path))?)
    }

    fn entity_exists(&self, path: &str) -> bool {
        self.location(path).exists()
    }

    fn create_entity(&self, path: &str, content: &str) -> Result<()> {
        let location = self.location(path);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&location)
            .map_err(|e| ExportError::Write {
                path: path.to_string(),
                source: e,
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| ExportError::Write {
                path: path.to_string(),
                source: e,
            })?;
        Ok(())
    }

    fn overwrite_entity(&self, path: &str, content: &str) -> Result<()> {
        let location = self.location(path);
        let tmp_location = location.with_extension("tmp");
        fs::write(&tmp_location, content).map_err(|e| ExportError::Write {
            path: path.to_string(),
            source: e,
        })?;
        fs::rename(&tmp_location, &location).map_err(|e| ExportError::Write {
            path: path.to_string(),
            source: e,
        })?;
        Ok(())
    }
}
