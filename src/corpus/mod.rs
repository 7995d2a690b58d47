//! Reference corpus and license registry loading.
//!
//! - [`registry`] — parses the SPDX `licenses.json` registry. Failures here are fatal.
//! - this module — reads reference license texts into [`LicenseDocument`]s.
//!   Unreadable files and missing directories only produce warnings.

pub mod registry;

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::license::preprocess::tokenize;

/// A reference license text and its term counts.
#[derive(Debug, Clone)]
pub struct LicenseDocument {
    pub id: String,
    pub text: String,
    pub term_counts: HashMap<String, u32>,
    /// Total number of tokens in `text`.
    pub length: usize,
}

impl LicenseDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut term_counts: HashMap<String, u32> = HashMap::new();
        let mut length = 0;
        for token in tokenize(&text) {
            *term_counts.entry(token).or_insert(0) += 1;
            length += 1;
        }
        Self {
            id: id.into(),
            text,
            term_counts,
            length,
        }
    }
}

/// Ordered reference documents: the SPDX partition first, then custom licenses.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<LicenseDocument>,
    spdx_count: usize,
}

impl Corpus {
    pub fn new(spdx: Vec<LicenseDocument>, custom: Vec<LicenseDocument>) -> Self {
        let spdx_count = spdx.len();
        let mut documents = spdx;
        documents.extend(custom);
        Self {
            documents,
            spdx_count,
        }
    }

    /// Read both corpus directories. Never fails; problems are logged.
    pub fn load(spdx_dir: &Path, custom_dir: &Path) -> Self {
        Self::new(read_corpus_dir(spdx_dir), read_corpus_dir(custom_dir))
    }

    pub fn documents(&self) -> &[LicenseDocument] {
        &self.documents
    }

    pub fn standard(&self) -> &[LicenseDocument] {
        &self.documents[..self.spdx_count]
    }

    pub fn custom(&self) -> &[LicenseDocument] {
        &self.documents[self.spdx_count..]
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.id.as_str())
    }
}

/// Read every license file in `dir`, sorted by file name.
pub fn read_corpus_dir(dir: &Path) -> Vec<LicenseDocument> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "corpus directory not readable, skipping");
            return Vec::new();
        }
    };

    let mut paths: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut docs = Vec::new();
    for path in paths {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_skipped_file(file_name) {
            continue;
        }

        let bytes = match std::fs::read(&path) {
            Ok(b) => b,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "failed to read corpus file");
                continue;
            }
        };
        let text = match String::from_utf8(bytes) {
            Ok(t) => t,
            Err(_) => {
                warn!(file = %path.display(), "corpus file is not valid UTF-8, skipping");
                continue;
            }
        };

        docs.push(LicenseDocument::new(document_id(file_name), text));
    }

    debug!(dir = %dir.display(), count = docs.len(), "loaded corpus directory");
    docs
}

fn is_skipped_file(file_name: &str) -> bool {
    file_name.starts_with('.') || file_name.to_lowercase().ends_with(".py")
}

fn document_id(file_name: &str) -> String {
    file_name
        .strip_suffix(".txt")
        .unwrap_or(file_name)
        .to_string()
}
