//! Text normalization shared by every matcher.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Body-content tags whose text is kept when extracting from HTML.
const CONTENT_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "em", "strong", "td", "pre", "li",
];

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("Invalid token pattern"));

/// Decode a fetched body as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warn!(
                valid_up_to = e.valid_up_to(),
                "body is not valid UTF-8, substituting replacement characters"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Flatten text onto one line, drop stray punctuation and collapse whitespace.
///
/// A `.` survives only between two alphanumeric characters so version numbers
/// (`GPL-2.0`) and file names (`LICENSE.md`) stay intact.
pub fn normalize_plain(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let mapped = match c {
            '\n' | '\r' | '\u{2028}' | '\u{2029}' | '\u{0085}' => ' ',
            ',' | ';' | '?' | '!' => ' ',
            '.' => {
                let prev = i.checked_sub(1).and_then(|p| chars.get(p));
                let next = chars.get(i + 1);
                match (prev, next) {
                    (Some(p), Some(n)) if p.is_alphanumeric() && n.is_alphanumeric() => '.',
                    _ => ' ',
                }
            }
            other => other,
        };
        out.push(mapped);
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pull license-bearing text out of an HTML page.
///
/// Only allow-listed body-content elements contribute; list items count only
/// when they carry no `id`/`class` and contain no link, which filters out most
/// navigation menus. An element nested inside another contributing element is
/// not emitted twice. When nothing survives the filter the whole `<body>` text
/// is used instead.
pub fn extract_from_html(html: &str) -> String {
    let doc = Html::parse_document(html);

    let Ok(content_sel) = Selector::parse(&CONTENT_TAGS.join(", ")) else {
        return String::new();
    };

    let mut pieces: Vec<String> = Vec::new();
    for el in doc.select(&content_sel) {
        if !is_content_element(&el) || has_content_ancestor(&el) {
            continue;
        }
        let text = element_text(&el);
        if !text.is_empty() {
            pieces.push(text);
        }
    }

    let body = pieces.join(" ");
    if !body.trim().is_empty() {
        return normalize_whitespace(&body);
    }

    debug!("html did not pass the content filter, using the whole body");
    let fallback = Selector::parse("body")
        .ok()
        .and_then(|sel| doc.select(&sel).next().map(|b| element_text(&b)))
        .unwrap_or_else(|| element_text(&doc.root_element()));

    normalize_whitespace(&fallback)
}

/// Lower-cased word tokens used by the similarity model.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_content_element(el: &ElementRef) -> bool {
    let name = el.value().name();
    if !CONTENT_TAGS.contains(&name) {
        return false;
    }
    if name == "li" {
        if el.value().attr("id").is_some() || el.value().attr("class").is_some() {
            return false;
        }
        if contains_link(el) {
            return false;
        }
    }
    true
}

fn contains_link(el: &ElementRef) -> bool {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .any(|d| d.value().name() == "a")
}

fn has_content_ancestor(el: &ElementRef) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| is_content_element(&a))
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
