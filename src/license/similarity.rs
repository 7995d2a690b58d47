//! BM25-weighted vector space over the reference corpus.
//!
//! The model is built once from a [`Corpus`] and never mutated afterwards.
//! Queries are projected onto the model's vocabulary (unknown terms are
//! dropped) and compared to every document with cosine similarity.

use std::collections::HashMap;

use serde::Serialize;

use crate::corpus::{Corpus, LicenseDocument};
use crate::license::preprocess::tokenize;

const K1: f64 = 1.2;
const B: f64 = 0.75;

/// Sparse term-weight vector, sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
    norm: f64,
}

impl SparseVector {
    pub fn new(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(i, _)| i);
        let norm = entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
        Self { entries, norm }
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ti, wi) = self.entries[i];
            let (tj, wj) = other.entries[j];
            match ti.cmp(&tj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// `dot(a, b) / (|a| * |b|)`, or `0.0` when either vector is zero.
///
/// With non-negative weights the result is clamped into `[0, 1]` to absorb
/// floating point drift.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm = a.norm() * b.norm();
    if norm <= 0.0 || !norm.is_finite() {
        return 0.0;
    }
    (a.dot(b) / norm).clamp(0.0, 1.0)
}

/// A corpus document with its similarity to a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: String,
    pub confidence: f64,
}

#[derive(Debug)]
pub struct SimilarityModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    avg_doc_len: f64,
    doc_ids: Vec<String>,
    doc_vectors: Vec<SparseVector>,
}

impl SimilarityModel {
    pub fn build(corpus: &Corpus) -> Self {
        let docs = corpus.documents();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<u32> = Vec::new();
        for doc in docs {
            for term in doc.term_counts.keys() {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term.clone()).or_insert(next);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                doc_freq[idx] += 1;
            }
        }

        let n = docs.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| {
                let df = df as f64;
                (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
            })
            .collect();

        let avg_doc_len = if docs.is_empty() {
            0.0
        } else {
            docs.iter().map(|d| d.length as f64).sum::<f64>() / n
        };

        let mut model = Self {
            vocabulary,
            idf,
            avg_doc_len,
            doc_ids: docs.iter().map(|d| d.id.clone()).collect(),
            doc_vectors: Vec::with_capacity(docs.len()),
        };
        model.doc_vectors = docs
            .iter()
            .map(|d| model.weigh(&d.term_counts, d.length))
            .collect();
        model
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn document_count(&self) -> usize {
        self.doc_ids.len()
    }

    /// Project free text onto the model's vocabulary.
    pub fn vectorize(&self, text: &str) -> SparseVector {
        let query = LicenseDocument::new("query", text);
        self.weigh(&query.term_counts, query.length)
    }

    /// Top `top_n` corpus documents by cosine similarity, best first.
    /// Equal scores keep corpus order.
    pub fn score(&self, text: &str, top_n: usize) -> Vec<ScoredDocument> {
        let query = self.vectorize(text);

        let mut scored: Vec<ScoredDocument> = self
            .doc_ids
            .iter()
            .zip(&self.doc_vectors)
            .map(|(id, vector)| ScoredDocument {
                id: id.clone(),
                confidence: cosine_similarity(vector, &query),
            })
            .collect();

        scored.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        scored.truncate(top_n);
        scored
    }

    fn weigh(&self, term_counts: &HashMap<String, u32>, length: usize) -> SparseVector {
        let len_ratio = if self.avg_doc_len > 0.0 {
            length as f64 / self.avg_doc_len
        } else {
            0.0
        };
        let norm = K1 * (1.0 - B + B * len_ratio);

        let entries = term_counts
            .iter()
            .filter_map(|(term, &count)| {
                let idx = *self.vocabulary.get(term)?;
                let tf = count as f64;
                let weight = self.idf[idx] * tf * (K1 + 1.0) / (tf + norm);
                Some((idx, weight))
            })
            .collect();

        SparseVector::new(entries)
    }
}
