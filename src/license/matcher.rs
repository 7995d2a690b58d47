use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::corpus::registry::{load_registry, RegistryEntry};
use crate::corpus::Corpus;
use crate::error::LoadError;
use crate::license::curated;
use crate::license::preprocess::{extract_from_html, normalize_plain};
use crate::license::rules::{match_with_ignore, IgnoreList, RuleMatch, RuleOutcome, RuleSet};
use crate::license::similarity::{ScoredDocument, SimilarityModel};
use crate::license::url::{UrlIndex, UrlMatch};

/// Read-only bundle of every matcher, built once at start-up and shared.
#[derive(Debug)]
pub struct LicenseMatcher {
    model: SimilarityModel,
    curated: RuleSet,
    spdx_rules: RuleSet,
    ignore: IgnoreList,
    urls: UrlIndex,
    /// Lower-cased id -> canonical spelling.
    canonical_ids: HashMap<String, String>,
}

impl LicenseMatcher {
    /// Load both corpus directories and the registry document.
    ///
    /// Only the registry is mandatory; corpus problems are logged and leave the
    /// similarity model smaller.
    pub fn load(spdx_dir: &Path, custom_dir: &Path, registry: &Path) -> Result<Self, LoadError> {
        let corpus = Corpus::load(spdx_dir, custom_dir);
        let registry = load_registry(registry)?;
        Ok(Self::new(&corpus, &registry))
    }

    pub fn new(corpus: &Corpus, registry: &[RegistryEntry]) -> Self {
        let model = SimilarityModel::build(corpus);
        let curated = curated::curated_rules();

        let mut canonical_ids = HashMap::new();
        let known = registry
            .iter()
            .map(|e| e.spdx_id.as_str())
            .chain(curated.ids())
            .chain(corpus.ids());
        for id in known {
            canonical_ids
                .entry(id.trim().to_lowercase())
                .or_insert_with(|| id.to_string());
        }

        let matcher = Self {
            model,
            curated,
            spdx_rules: RuleSet::from_registry(registry),
            ignore: curated::ignore_list(),
            urls: UrlIndex::from_registry(registry),
            canonical_ids,
        };

        info!(
            documents = corpus.len(),
            custom = corpus.custom().len(),
            vocabulary = matcher.model.vocabulary_size(),
            registry = registry.len(),
            urls = matcher.urls.len(),
            "license matcher ready"
        );
        matcher
    }

    /// Score free text against the corpus, best `top_n` first.
    pub fn match_text(&self, text: &str, top_n: usize) -> Vec<ScoredDocument> {
        let clean = normalize_plain(text);
        if clean.is_empty() {
            return Vec::new();
        }
        self.model.score(&clean, top_n)
    }

    /// Extract the license-bearing text of an HTML page and score it.
    pub fn match_html(&self, html: &str, top_n: usize) -> Vec<ScoredDocument> {
        let text = extract_from_html(html);
        if text.is_empty() {
            debug!("no text extracted from html document");
            return Vec::new();
        }
        self.match_text(&text, top_n)
    }

    pub fn match_url(&self, url: &str) -> Option<UrlMatch> {
        self.urls.lookup(url)
    }

    /// Ignore list, then the curated alias dictionary.
    pub fn match_rules(&self, text: &str, early_exit: bool) -> RuleOutcome {
        match_with_ignore(&self.ignore, &self.curated, text, early_exit)
    }

    /// Registry-derived rules only; the ignore list is not consulted.
    pub fn match_spdx_rules(&self, text: &str, early_exit: bool) -> Vec<RuleMatch> {
        self.spdx_rules.evaluate(&normalize_plain(text), early_exit)
    }

    /// Canonical spelling of a license id, or `id` itself when unknown.
    pub fn to_spdx_id(&self, id: &str) -> String {
        self.canonical_ids
            .get(&id.trim().to_lowercase())
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    pub fn document_count(&self) -> usize {
        self.model.document_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::LicenseDocument;

    const MIT: &str = "Permission is hereby granted, free of charge, to any person obtaining a copy \
        of this software and associated documentation files (the \"Software\"), to deal in the \
        Software without restriction.";
    const ISC: &str = "Permission to use, copy, modify, and/or distribute this software for any \
        purpose with or without fee is hereby granted.";

    fn matcher() -> LicenseMatcher {
        let corpus = Corpus::new(
            vec![LicenseDocument::new("MIT", MIT), LicenseDocument::new("ISC", ISC)],
            vec![LicenseDocument::new("Bespoke-Corp", "Bespoke corporate terms apply")],
        );
        let registry = vec![RegistryEntry {
            spdx_id: "MIT".to_string(),
            name: "MIT License".to_string(),
            aliases: vec![],
            identifiers: vec!["Expat".to_string()],
            urls: vec!["https://opensource.org/licenses/MIT".to_string()],
        }];
        LicenseMatcher::new(&corpus, &registry)
    }

    #[test]
    fn test_match_text_finds_identical_document() {
        let m = matcher();
        let top = m.match_text(MIT, 3);
        assert_eq!(top[0].id, "MIT");
        assert!(top[0].confidence > 0.99);
        assert!(m.match_text("  \n ", 3).is_empty());
    }

    #[test]
    fn test_match_html() {
        let m = matcher();
        let html = format!("<html><body><nav><li class=\"x\">Home</li></nav><p>{ISC}</p></body></html>");
        assert_eq!(m.match_html(&html, 1)[0].id, "ISC");
        assert!(m.match_html("<html><body></body></html>", 1).is_empty());
    }

    #[test]
    fn test_match_url() {
        let m = matcher();
        let hit = m.match_url("http://opensource.org/licenses/MIT").unwrap();
        assert_eq!(hit.spdx_id, "MIT");
        assert_eq!(hit.confidence, 1.0);
        assert!(m.match_url("https://example.com/license").is_none());
    }

    #[test]
    fn test_rule_passes() {
        let m = matcher();
        assert_eq!(m.match_rules("GPL-3.0", true).first().unwrap().spdx_id, "GPL-3.0");
        assert!(matches!(m.match_rules("TODO", true), RuleOutcome::Ignored { .. }));

        assert_eq!(m.match_spdx_rules("Expat", true)[0].spdx_id, "MIT");
        assert!(m.match_spdx_rules("TODO", true).is_empty());
    }

    #[test]
    fn test_to_spdx_id() {
        let m = matcher();
        assert_eq!(m.to_spdx_id("mit"), "MIT");
        assert_eq!(m.to_spdx_id("gpl-3.0"), "GPL-3.0");
        assert_eq!(m.to_spdx_id("bespoke-corp"), "Bespoke-Corp");
        assert_eq!(m.to_spdx_id("Not-A-License"), "Not-A-License");
    }
}
