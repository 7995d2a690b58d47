//! Detection pipeline: turns a record's URL and name into a [`Detection`].
//!
//! URL signals go through the registry URL index first, then a cached
//! fetch + similarity pass. Name signals use the rule dictionaries, or the
//! similarity model when the "name" is really an embedded license text.
//!
//! - [`fetch`] — the HTTP collaborator.
//! - [`cache`] — fingerprint-keyed TTL memo of fetch results.
//! - [`store`] — persistence of applied matches.

pub mod cache;
pub mod fetch;
pub mod store;

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::config::DetectionConfig;
use crate::license::preprocess::decode_text;
use crate::license::rules::RuleOutcome;
use crate::license::similarity::ScoredDocument;
use crate::license::LicenseMatcher;
use crate::models::{
    BatchSummary, Detection, LicenseMatch, LicenseRecord, MatchSource, RecordOutcome,
    RecordReport,
};

use cache::{fingerprint, DetectionCache};
use fetch::{cache_key, parse_url, BodyKind, Fetcher};
use store::LicenseStore;

pub struct Pipeline {
    matcher: Arc<LicenseMatcher>,
    fetcher: Arc<dyn Fetcher>,
    cache: Arc<DetectionCache>,
    store: Option<Arc<dyn LicenseStore>>,
    settings: DetectionConfig,
}

impl Pipeline {
    pub fn new(
        matcher: Arc<LicenseMatcher>,
        fetcher: Arc<dyn Fetcher>,
        cache: Arc<DetectionCache>,
        settings: DetectionConfig,
    ) -> Self {
        Self {
            matcher,
            fetcher,
            cache,
            store: None,
            settings,
        }
    }

    /// Persist applied matches. Without a store the pipeline is a dry run.
    pub fn with_store(mut self, store: Arc<dyn LicenseStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn matcher(&self) -> &LicenseMatcher {
        &self.matcher
    }

    pub fn settings(&self) -> &DetectionConfig {
        &self.settings
    }

    /// Classify the document behind a license URL.
    pub async fn detect_url(&self, raw_url: &str) -> Detection {
        let Some(url) = parse_url(raw_url) else {
            return Detection::Unknown;
        };

        if let Some(hit) = self.matcher.match_url(&url) {
            debug!(url = %url, spdx_id = %hit.spdx_id, "matched registry url");
            return Detection::Matched(LicenseMatch {
                spdx_id: hit.spdx_id,
                score: hit.confidence,
                rule: Some(hit.url),
                source: MatchSource::Url,
            });
        }

        let key = fingerprint(&cache_key(&url));
        let matcher = Arc::clone(&self.matcher);
        let fetcher = Arc::clone(&self.fetcher);
        let top_n = self.settings.top_n;
        self.cache
            .get_or_compute(&key, move || fetch_and_score(matcher, fetcher, url, top_n))
            .await
    }

    /// Classify a license name field.
    ///
    /// Long names are license texts pasted into the name field and go through
    /// the similarity model. Short ones try the ignore list, the curated
    /// aliases and then the registry-derived rules.
    pub fn detect_name(&self, name: &str) -> Detection {
        let name = name.trim();
        if name.is_empty() {
            return Detection::Unknown;
        }

        if name.chars().count() >= self.settings.min_name_chars {
            return best_similarity(self.matcher.match_text(name, self.settings.top_n));
        }

        match self.matcher.match_rules(name, self.settings.early_exit) {
            RuleOutcome::Ignored { pattern } => return Detection::Ignored { pattern },
            RuleOutcome::Matches(matches) => {
                if let Some(m) = matches.into_iter().next() {
                    return Detection::Matched(LicenseMatch {
                        spdx_id: m.spdx_id,
                        score: m.confidence,
                        rule: Some(m.pattern),
                        source: MatchSource::Rule,
                    });
                }
            }
        }

        match self
            .matcher
            .match_spdx_rules(name, self.settings.early_exit)
            .into_iter()
            .next()
        {
            Some(m) => Detection::Matched(LicenseMatch {
                spdx_id: m.spdx_id,
                score: m.confidence,
                rule: Some(m.pattern),
                source: MatchSource::SpdxRule,
            }),
            None => Detection::Unknown,
        }
    }

    /// Detect a license for one record and apply it when confident enough.
    ///
    /// The URL is tried first; the name is the fallback when the URL yields
    /// nothing. A record with neither is reported as invalid.
    pub async fn process_record(&self, record: &LicenseRecord) -> RecordReport {
        let url = record.url.as_deref().and_then(parse_url);
        let has_name = !record.name.trim().is_empty();

        if url.is_none() && !has_name {
            warn!(record = %record, url = ?record.url, "record has no usable license signal");
            return RecordReport {
                record: record.clone(),
                detection: Detection::Unknown,
                outcome: RecordOutcome::Invalid,
            };
        }

        let mut detection = Detection::Unknown;
        if let Some(url) = &url {
            detection = self.detect_url(url).await;
        }
        if detection.is_unknown() && has_name {
            detection = self.detect_name(&record.name);
        }

        let (record, outcome) = match &detection {
            Detection::Matched(m) if m.score >= self.settings.min_confidence => {
                (self.apply(record, m).await, RecordOutcome::Applied)
            }
            Detection::Matched(m) => {
                info!(
                    record = %record,
                    spdx_id = %m.spdx_id,
                    score = m.score,
                    min_confidence = self.settings.min_confidence,
                    "confidence too low, record left unchanged"
                );
                (record.clone(), RecordOutcome::BelowThreshold)
            }
            Detection::Ignored { pattern } => {
                debug!(record = %record, pattern = %pattern, "license name is a known placeholder");
                (record.clone(), RecordOutcome::Ignored)
            }
            Detection::Unknown => {
                warn!(record = %record, url = ?url, "detected no license");
                (record.clone(), RecordOutcome::Unknown)
            }
        };

        RecordReport {
            record,
            detection,
            outcome,
        }
    }

    /// Process `records` with up to `concurrency` in flight.
    ///
    /// Reports come back in completion order.
    pub async fn run_batch(
        &self,
        records: Vec<LicenseRecord>,
        concurrency: usize,
        show_progress: bool,
    ) -> anyhow::Result<(Vec<RecordReport>, BatchSummary)> {
        let pb = if show_progress {
            let pb = ProgressBar::new(records.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )?
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        info!(records = records.len(), concurrency, "starting batch");

        let mut reports = Vec::with_capacity(records.len());
        let mut summary = BatchSummary::default();
        let mut results = stream::iter(records)
            .map(|record| async move { self.process_record(&record).await })
            .buffer_unordered(concurrency.max(1));

        while let Some(report) = results.next().await {
            summary.record(&report.outcome);
            pb.inc(1);
            reports.push(report);
        }
        pb.finish_with_message("Done");

        info!(
            processed = summary.processed,
            detected = summary.detected,
            ignored = summary.ignored,
            unknown = summary.unknown,
            skipped = summary.skipped,
            "batch finished"
        );
        Ok((reports, summary))
    }

    async fn apply(&self, record: &LicenseRecord, m: &LicenseMatch) -> LicenseRecord {
        let spdx_id = self.matcher.to_spdx_id(&m.spdx_id);
        let mut updated = record.clone();
        updated.name = spdx_id.clone();
        updated.spdx_id = Some(spdx_id);
        updated.comments = Some(format!(
            "{}_license_crawler_update",
            record.language.as_deref().unwrap_or("unknown")
        ));

        match &self.store {
            Some(store) => match store.save(&updated).await {
                Ok(()) => info!(record = %updated, spdx_id = ?updated.spdx_id, source = %m.source, "license updated"),
                Err(e) => warn!(record = %updated, error = %e, "failed to persist license update"),
            },
            None => debug!(record = %updated, spdx_id = ?updated.spdx_id, "dry run, not persisted"),
        }
        updated
    }
}

async fn fetch_and_score(
    matcher: Arc<LicenseMatcher>,
    fetcher: Arc<dyn Fetcher>,
    url: String,
    top_n: usize,
) -> Detection {
    info!(url = %url, "fetching license text");
    let response = match fetcher.fetch(&url).await {
        Ok(r) => r,
        Err(e) => {
            warn!(url = %url, error = %e, "license fetch failed");
            return Detection::Unknown;
        }
    };
    if !response.is_success() {
        warn!(url = %url, status = response.status, "license fetch returned non-success status");
        return Detection::Unknown;
    }

    let content_type = response.content_type.as_deref().unwrap_or_default();
    let Some(kind) = BodyKind::from_content_type(content_type) else {
        warn!(url = %url, content_type, "unsupported content type");
        return Detection::Unknown;
    };

    let body = decode_text(&response.body);
    let scores = match kind {
        BodyKind::Plain => matcher.match_text(&body, top_n),
        BodyKind::Html => matcher.match_html(&body, top_n),
    };
    debug!(url = %url, ?scores, "similarity scores");
    best_similarity(scores)
}

fn best_similarity(scores: Vec<ScoredDocument>) -> Detection {
    match scores.into_iter().next() {
        Some(best) if best.confidence > 0.0 => {
            Detection::matched(best.id, best.confidence, MatchSource::Similarity)
        }
        _ => Detection::Unknown,
    }
}
