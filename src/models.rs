use serde::{Deserialize, Serialize};

/// Confidence reported by authoritative (rule and URL) matches.
pub const EXACT_CONFIDENCE: f64 = 1.0;

/// Legacy numeric score of an ignore-list hit, kept for reports.
pub const IGNORED_SENTINEL: f64 = -1.0;

/// Which matcher produced a [`LicenseMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Url,
    Rule,
    SpdxRule,
    Similarity,
}

impl std::fmt::Display for MatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchSource::Url => write!(f, "url"),
            MatchSource::Rule => write!(f, "rule"),
            MatchSource::SpdxRule => write!(f, "spdx-rule"),
            MatchSource::Similarity => write!(f, "similarity"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseMatch {
    pub spdx_id: String,
    pub score: f64,
    /// Originating pattern for rule and URL matches.
    pub rule: Option<String>,
    pub source: MatchSource,
}

/// Outcome of classifying a single signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Detection {
    Matched(LicenseMatch),
    /// Known placeholder or non-license string.
    Ignored { pattern: String },
    Unknown,
}

impl Detection {
    pub fn matched(spdx_id: impl Into<String>, score: f64, source: MatchSource) -> Self {
        Detection::Matched(LicenseMatch {
            spdx_id: spdx_id.into(),
            score,
            rule: None,
            source,
        })
    }

    pub fn spdx_id(&self) -> Option<&str> {
        match self {
            Detection::Matched(m) => Some(&m.spdx_id),
            _ => None,
        }
    }

    /// Numeric score in the legacy convention: `-1` for ignored, `None` for unknown.
    pub fn score(&self) -> Option<f64> {
        match self {
            Detection::Matched(m) => Some(m.score),
            Detection::Ignored { .. } => Some(IGNORED_SENTINEL),
            Detection::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Detection::Unknown)
    }
}

impl std::fmt::Display for Detection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Detection::Matched(m) => write!(f, "{} ({:.3}, {})", m.spdx_id, m.score, m.source),
            Detection::Ignored { .. } => write!(f, "ignored"),
            Detection::Unknown => write!(f, "unknown"),
        }
    }
}

/// A license record owned by the surrounding platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub prod_key: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub spdx_id: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    /// Position in the records file this record was loaded from.
    #[serde(skip)]
    pub row: Option<usize>,
}

impl std::fmt::Display for LicenseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}:{}",
            self.language.as_deref().unwrap_or("-"),
            self.prod_key.as_deref().unwrap_or("-"),
            self.version.as_deref().unwrap_or("*"),
        )
    }
}

/// What the pipeline did with one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    /// Confident match written into the record.
    Applied,
    /// Match found but under the confidence threshold; record left unchanged.
    BelowThreshold,
    Ignored,
    Unknown,
    /// The record had no usable signal (empty name and no valid URL).
    Invalid,
}

impl std::fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordOutcome::Applied => write!(f, "applied"),
            RecordOutcome::BelowThreshold => write!(f, "below threshold"),
            RecordOutcome::Ignored => write!(f, "ignored"),
            RecordOutcome::Unknown => write!(f, "unknown"),
            RecordOutcome::Invalid => write!(f, "invalid"),
        }
    }
}

/// Per-record report line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordReport {
    pub record: LicenseRecord,
    pub detection: Detection,
    pub outcome: RecordOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub detected: usize,
    pub below_threshold: usize,
    pub ignored: usize,
    pub unknown: usize,
    pub skipped: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &RecordOutcome) {
        self.processed += 1;
        match outcome {
            RecordOutcome::Applied => self.detected += 1,
            RecordOutcome::BelowThreshold => self.below_threshold += 1,
            RecordOutcome::Ignored => self.ignored += 1,
            RecordOutcome::Unknown => self.unknown += 1,
            RecordOutcome::Invalid => self.skipped += 1,
        }
    }
}
