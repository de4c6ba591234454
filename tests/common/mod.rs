//! Common test utilities
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;

use vaultgraph::errors::{ExportError, Result};
use vaultgraph::store::DocumentStore;
use vaultgraph::types::Document;

/// In-memory document store for pipeline tests.
///
/// Documents enumerate in insertion order so tests control ordering
/// directly; entity writes land in a separate artifact map that tests can
/// inspect afterwards.
pub struct MemStore {
    documents: Vec<(String, String)>,
    artifacts: RefCell<BTreeMap<String, String>>,
    unreadable: BTreeSet<String>,
    fail_writes: bool,
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore {
            documents: Vec::new(),
            artifacts: RefCell::new(BTreeMap::new()),
            unreadable: BTreeSet::new(),
            fail_writes: false,
        }
    }

    /// Builds a store from `(path, content)` pairs, in enumeration order.
    pub fn with_documents(docs: &[(&str, &str)]) -> MemStore {
        let mut store = MemStore::new();
        for (path, content) in docs {
            store.add(path, content);
        }
        store
    }

    pub fn add(&mut self, path: &str, content: &str) {
        self.documents.push((path.to_string(), content.to_string()));
    }

    /// Makes `read_content` fail for the document at `path`.
    pub fn mark_unreadable(&mut self, path: &str) {
        self.unreadable.insert(path.to_string());
    }

    /// Makes every entity write fail.
    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    /// Content of a written artifact, if one was persisted.
    pub fn artifact(&self, path: &str) -> Option<String> {
        self.artifacts.borrow().get(path).cloned()
    }

    fn write_error(&self, path: &str, message: &str) -> ExportError {
        ExportError::Write {
            path: path.to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, message.to_string()),
        }
    }
}

impl DocumentStore for MemStore {
    fn list_markdown(&self) -> Result<Vec<Document>> {
        Ok(self
            .documents
            .iter()
            .map(|(path, _)| Document::new(path.clone()))
            .filter(Document::is_markdown)
            .collect())
    }

    fn list_all(&self) -> Result<Vec<Document>> {
        Ok(self
            .documents
            .iter()
            .map(|(path, _)| Document::new(path.clone()))
            .collect())
    }

    fn read_content(&self, doc: &Document) -> Result<String> {
        if self.unreadable.contains(&doc.path) {
            return Err(ExportError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("unreadable document {}", doc.path),
            )));
        }
        self.documents
            .iter()
            .find(|(path, _)| *path == doc.path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| {
                ExportError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no document {}", doc.path),
                ))
            })
    }

    fn entity_exists(&self, path: &str) -> bool {
        self.artifacts.borrow().contains_key(path)
            || self.documents.iter().any(|(p, _)| p == path)
    }

    fn create_entity(&self, path: &str, content: &str) -> Result<()> {
        if self.fail_writes {
            return Err(self.write_error(path, "writes disabled"));
        }
        if self.entity_exists(path) {
            return Err(self.write_error(path, "entity already exists"));
        }
        self.artifacts
            .borrow_mut()
            .insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn overwrite_entity(&self, path: &str, content: &str) -> Result<()> {
        if self.fail_writes {
            return Err(self.write_error(path, "writes disabled"));
        }
        if !self.artifacts.borrow().contains_key(path) {
            return Err(self.write_error(path, "no entity to overwrite"));
        }
        self.artifacts
            .borrow_mut()
            .insert(path.to_string(), content.to_string());
        Ok(())
    }
}
