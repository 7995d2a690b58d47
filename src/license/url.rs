use tracing::debug;

use crate::corpus::registry::RegistryEntry;
use crate::models::EXACT_CONFIDENCE;

/// A registry URL that matched a license link exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlMatch {
    pub spdx_id: String,
    pub confidence: f64,
    pub url: String,
}

/// Strip the scheme and any `www.` prefix, then lower-case.
///
/// Idempotent: normalizing twice gives the same string.
pub fn normalize_url(url: &str) -> String {
    let mut rest = url.trim();
    loop {
        let before = rest.len();
        for prefix in ["https://", "http://", "www."] {
            if let Some(stripped) = strip_prefix_ignore_case(rest, prefix) {
                rest = stripped.trim_start();
            }
        }
        if rest.len() == before {
            break;
        }
    }
    rest.to_lowercase()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Normalized license URLs in registry order.
///
/// A candidate matches an entry when its normalized form starts with the
/// entry's URL, so deep links and anchors under a license page still resolve.
#[derive(Debug, Clone, Default)]
pub struct UrlIndex {
    entries: Vec<(String, String)>,
}

impl UrlIndex {
    /// Index every URL of every registry entry. When two entries claim the
    /// same URL the earlier one keeps it.
    pub fn from_registry(registry: &[RegistryEntry]) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for entry in registry {
            for url in &entry.urls {
                let key = normalize_url(url);
                if key.is_empty() {
                    continue;
                }
                if let Some((_, owner)) = entries.iter().find(|(u, _)| *u == key) {
                    if owner != &entry.spdx_id {
                        debug!(url = %key, kept = %owner, dropped = %entry.spdx_id, "duplicate license url");
                    }
                    continue;
                }
                entries.push((key, entry.spdx_id.clone()));
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in registry order, that prefixes the normalized `url`.
    pub fn lookup(&self, url: &str) -> Option<UrlMatch> {
        let candidate = normalize_url(url);
        if candidate.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(prefix, _)| candidate.starts_with(prefix.as_str()))
            .map(|(prefix, spdx_id)| UrlMatch {
                spdx_id: spdx_id.clone(),
                confidence: EXACT_CONFIDENCE,
                url: prefix.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, urls: &[&str]) -> RegistryEntry {
        RegistryEntry {
            spdx_id: id.to_string(),
            name: id.to_string(),
            aliases: vec![],
            identifiers: vec![],
            urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(
            normalize_url("https://www.OpenSource.org/licenses/MIT"),
            "opensource.org/licenses/mit"
        );
        assert_eq!(normalize_url("  http://example.com  "), "example.com");
        assert_eq!(normalize_url("HTTP://WWW.example.com"), "example.com");
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn test_normalize_url_is_idempotent() {
        for url in [
            "https://www.gnu.org/licenses/gpl-3.0.html",
            "http://https://www.www.x.org",
            "Example.COM/Path",
            "www.",
        ] {
            let once = normalize_url(url);
            assert_eq!(normalize_url(&once), once, "{url}");
        }
    }

    #[test]
    fn test_lookup_ignores_scheme_and_case() {
        let index = UrlIndex::from_registry(&[entry("MIT", &["https://opensource.org/licenses/MIT"])]);
        let m = index.lookup("http://www.opensource.org/licenses/MIT").unwrap();
        assert_eq!(m.spdx_id, "MIT");
        assert_eq!(m.confidence, 1.0);
        assert_eq!(m.url, "opensource.org/licenses/mit");

        assert!(index.lookup("https://opensource.org/licenses/Apache-2.0").is_none());
        assert!(index.lookup("").is_none());
    }

    #[test]
    fn test_lookup_is_prefix_anchored_in_registry_order() {
        let index = UrlIndex::from_registry(&[
            entry("MIT-0", &["https://opensource.org/licenses/MIT-0"]),
            entry("MIT", &["https://opensource.org/licenses/MIT"]),
        ]);
        assert_eq!(
            index.lookup("opensource.org/licenses/MIT-0#text").unwrap().spdx_id,
            "MIT-0"
        );
        assert_eq!(
            index.lookup("https://opensource.org/licenses/mit.php").unwrap().spdx_id,
            "MIT"
        );
        assert!(index.lookup("https://mirror.example/opensource.org/licenses/MIT").is_none());
    }

    #[test]
    fn test_first_entry_keeps_shared_url() {
        let index = UrlIndex::from_registry(&[
            entry("GPL-2.0", &["https://www.gnu.org/licenses/old-licenses/gpl-2.0.html"]),
            entry("GPL-2.0-only", &["http://gnu.org/licenses/old-licenses/gpl-2.0.html", ""]),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.lookup("gnu.org/licenses/old-licenses/gpl-2.0.html").unwrap().spdx_id,
            "GPL-2.0"
        );
    }
}
