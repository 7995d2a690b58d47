use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::corpus::registry::RegistryEntry;
use crate::license::preprocess::normalize_plain;
use crate::models::EXACT_CONFIDENCE;

/// A rule that fired for a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub spdx_id: String,
    pub confidence: f64,
    pub pattern: String,
}

/// Result of running the ignore list and a rule set over a string.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    /// The text is a known placeholder; no rule set was consulted.
    Ignored { pattern: String },
    /// Rule matches in dictionary order. Empty means unrecognized.
    Matches(Vec<RuleMatch>),
}

impl RuleOutcome {
    pub fn first(&self) -> Option<&RuleMatch> {
        match self {
            RuleOutcome::Matches(m) => m.first(),
            RuleOutcome::Ignored { .. } => None,
        }
    }
}

/// Ordered `(spdx_id, patterns)` dictionary. Order is priority: the first
/// entry with a matching pattern wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    entries: Vec<(String, Vec<Regex>)>,
}

impl RuleSet {
    /// Compile a literal table. Patterns are case-insensitive unless they
    /// opt out with `(?-i)`; a pattern that fails to compile is dropped.
    pub fn compile<'a, I>(table: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let entries = table
            .into_iter()
            .map(|(id, patterns)| {
                let compiled = patterns.iter().filter_map(|p| compile_pattern(id, p)).collect();
                (id.to_string(), compiled)
            })
            .collect();
        Self { entries }
    }

    /// Build full-string rules from the registry: id, name, identifier
    /// codes, URLs and alternative names of every entry.
    pub fn from_registry(registry: &[RegistryEntry]) -> Self {
        let entries = registry
            .iter()
            .map(|entry| {
                let literals = std::iter::once(&entry.spdx_id)
                    .chain(std::iter::once(&entry.name))
                    .chain(&entry.identifiers)
                    .chain(&entry.urls)
                    .chain(&entry.aliases);

                let compiled = literals
                    .filter_map(|lit| literal_pattern(lit))
                    .filter_map(|p| compile_pattern(&entry.spdx_id, &p))
                    .collect();
                (entry.spdx_id.clone(), compiled)
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Test already-normalized text against every entry in order.
    ///
    /// With `early_exit` only the first matching entry is returned. Each entry
    /// reports at most one pattern.
    pub fn evaluate(&self, text: &str, early_exit: bool) -> Vec<RuleMatch> {
        let mut matches = Vec::new();
        for (spdx_id, patterns) in &self.entries {
            if let Some(rule) = patterns.iter().find(|r| r.is_match(text)) {
                matches.push(RuleMatch {
                    spdx_id: spdx_id.clone(),
                    confidence: EXACT_CONFIDENCE,
                    pattern: rule.as_str().to_string(),
                });
                if early_exit {
                    break;
                }
            }
        }
        matches
    }
}

/// Patterns for placeholder and non-license strings.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    patterns: Vec<Regex>,
}

impl IgnoreList {
    pub fn compile(patterns: &[&str]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .filter_map(|p| compile_pattern("ignore", p))
                .collect(),
        }
    }

    /// The first ignore pattern matching `text`, if any.
    pub fn find(&self, text: &str) -> Option<&Regex> {
        self.patterns.iter().find(|r| r.is_match(text))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Normalize `text`, check it against the ignore list, then evaluate `rules`.
pub fn match_with_ignore(
    ignore: &IgnoreList,
    rules: &RuleSet,
    text: &str,
    early_exit: bool,
) -> RuleOutcome {
    let clean = normalize_plain(text);
    if let Some(pattern) = ignore.find(&clean) {
        return RuleOutcome::Ignored {
            pattern: pattern.as_str().to_string(),
        };
    }
    RuleOutcome::Matches(rules.evaluate(&clean, early_exit))
}

fn compile_pattern(owner: &str, pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(r) => Some(r),
        Err(e) => {
            warn!(rule = owner, pattern, error = %e, "skipping rule that failed to compile");
            None
        }
    }
}

/// Turn a registry literal into a whole-word pattern: regex-escaped, any
/// whitespace run matches `\s+`, and `\b` is added only on sides that end in
/// a word character.
fn literal_pattern(literal: &str) -> Option<String> {
    let clean = normalize_plain(literal);
    if clean.is_empty() {
        return None;
    }

    let body = clean
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    let lead = if clean.chars().next().is_some_and(is_word_char) { r"\b" } else { "" };
    let tail = if clean.chars().last().is_some_and(is_word_char) { r"\b" } else { "" };

    Some(format!("{lead}{body}{tail}"))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Vec<RegistryEntry> {
        vec![
            RegistryEntry {
                spdx_id: "GPL-2.0+".to_string(),
                name: "GNU General Public License v2.0 or later".to_string(),
                aliases: vec![],
                identifiers: vec![],
                urls: vec![],
            },
            RegistryEntry {
                spdx_id: "MIT".to_string(),
                name: "MIT License".to_string(),
                aliases: vec!["Expat License".to_string()],
                identifiers: vec!["Expat".to_string()],
                urls: vec!["https://opensource.org/licenses/MIT".to_string()],
            },
        ]
    }

    #[test]
    fn test_literal_pattern_boundaries() {
        assert_eq!(literal_pattern("MIT").as_deref(), Some(r"\bMIT\b"));
        let plus = literal_pattern("GPL-2.0+").unwrap();
        assert!(plus.starts_with(r"\bGPL"));
        assert!(!plus.ends_with(r"\b"));
        assert_eq!(
            literal_pattern("MIT  License").as_deref(),
            Some(r"\bMIT\s+License\b")
        );
        assert_eq!(literal_pattern("  "), None);
    }

    #[test]
    fn test_registry_rules_match_names_and_codes() {
        let rules = RuleSet::from_registry(&registry());
        assert_eq!(rules.ids().collect::<Vec<_>>(), vec!["GPL-2.0+", "MIT"]);

        let m = rules.evaluate("released under the expat license", true);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].spdx_id, "MIT");
        assert_eq!(m[0].confidence, 1.0);

        let m = rules.evaluate("GPL-2.0+ only", true);
        assert_eq!(m[0].spdx_id, "GPL-2.0+");

        assert!(rules.evaluate("Apache", true).is_empty());
    }

    #[test]
    fn test_early_exit_controls_match_count() {
        let rules = RuleSet::compile([
            ("A", &[r"\bfoo\b"][..]),
            ("B", &[r"\bbar\b"][..]),
            ("C", &[r"\bbaz\b"][..]),
        ]);
        assert_eq!(rules.evaluate("foo bar", true).len(), 1);

        let all = rules.evaluate("foo bar", false);
        let ids: Vec<_> = all.iter().map(|m| m.spdx_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_case_sensitive_opt_out() {
        let rules = RuleSet::compile([("EPL-1.0", &[r"(?-i)\bEPL\b"][..])]);
        assert_eq!(rules.evaluate("EPL", true).len(), 1);
        assert!(rules.evaluate("epl", true).is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let rules = RuleSet::compile([("X", &[r"(unclosed", r"\bok\b"][..])]);
        assert_eq!(rules.evaluate("ok", true)[0].pattern, r"\bok\b");
    }

    #[test]
    fn test_ignore_list_takes_precedence() {
        let ignore = IgnoreList::compile(&[r"\bProprietary\b"]);
        let rules = RuleSet::compile([("MIT", &[r"\bMIT\b"][..])]);

        let outcome = match_with_ignore(&ignore, &rules, "Proprietary, MIT", true);
        assert!(matches!(outcome, RuleOutcome::Ignored { .. }));
        assert!(outcome.first().is_none());

        let outcome = match_with_ignore(&ignore, &rules, "MIT.", true);
        assert_eq!(outcome.first().map(|m| m.spdx_id.as_str()), Some("MIT"));

        let outcome = match_with_ignore(&ignore, &rules, "whatever", true);
        assert_eq!(outcome, RuleOutcome::Matches(vec![]));
    }
}
