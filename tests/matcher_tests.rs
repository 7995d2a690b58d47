use std::fs;
use std::path::{Path, PathBuf};

use license_matchr::corpus::registry::load_registry;
use license_matchr::corpus::Corpus;
use license_matchr::license::rules::RuleOutcome;
use license_matchr::license::LicenseMatcher;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn load_matcher() -> LicenseMatcher {
    let data = data_dir();
    LicenseMatcher::load(
        &data.join("spdx_licenses/plain"),
        &data.join("custom_licenses"),
        &data.join("spdx_licenses/licenses.json"),
    )
    .expect("packaged corpus should load")
}

#[test]
fn test_packaged_corpus_loads() {
    let data = data_dir();
    let corpus = Corpus::load(&data.join("spdx_licenses/plain"), &data.join("custom_licenses"));
    assert!(corpus.standard().iter().any(|d| d.id == "MIT"));
    assert_eq!(corpus.custom().len(), 1);
    assert_eq!(corpus.custom()[0].id, "JSON");

    let registry = load_registry(&data.join("spdx_licenses/licenses.json")).unwrap();
    assert!(registry.iter().any(|e| e.spdx_id == "Apache-2.0"));
}

#[test]
fn test_every_corpus_text_matches_itself() {
    let matcher = load_matcher();
    let data = data_dir();

    for dir in ["spdx_licenses/plain", "custom_licenses"] {
        for entry in fs::read_dir(data.join(dir)).unwrap() {
            let path = entry.unwrap().path();
            let id = path.file_name().unwrap().to_str().unwrap().to_string();
            let text = fs::read_to_string(&path).unwrap();

            let top = matcher.match_text(&text, 1);
            assert_eq!(top[0].id, id);
            assert!(top[0].confidence > 0.999, "{id}: {}", top[0].confidence);
        }
    }
}

#[test]
fn test_mit_and_json_are_told_apart() {
    let matcher = load_matcher();
    let mit = fs::read_to_string(data_dir().join("spdx_licenses/plain/MIT")).unwrap();

    let scores = matcher.match_text(&mit, 3);
    assert_eq!(scores.len(), 3);
    assert_eq!(scores[0].id, "MIT");
    assert!(scores[1].confidence < scores[0].confidence);
}

#[test]
fn test_html_page_with_navigation() {
    let matcher = load_matcher();
    let isc = fs::read_to_string(data_dir().join("spdx_licenses/plain/ISC")).unwrap();
    let paragraphs: String = isc
        .split("\n\n")
        .map(|p| format!("<p>{}</p>", p.replace('<', "&lt;").replace('>', "&gt;")))
        .collect();
    let html = format!(
        "<html><body><ul><li class=\"menu\">Licenses</li><li><a href=\"/\">Home</a></li></ul>{paragraphs}</body></html>"
    );

    let top = matcher.match_html(&html, 1);
    assert_eq!(top[0].id, "ISC");
    assert!(top[0].confidence > 0.95);
}

#[test]
fn test_names_and_urls_against_registry() {
    let matcher = load_matcher();

    assert_eq!(matcher.match_rules("GPL-3.0", true).first().unwrap().spdx_id, "GPL-3.0");
    assert!(matches!(matcher.match_rules("TODO", true), RuleOutcome::Ignored { .. }));
    assert_eq!(
        matcher.match_spdx_rules("Zero-Clause BSD", true)[0].spdx_id,
        "0BSD"
    );

    let hit = matcher.match_url("http://opensource.org/licenses/MIT").unwrap();
    assert_eq!(hit.spdx_id, "MIT");
    assert_eq!(hit.confidence, 1.0);
    assert_eq!(
        matcher.match_url("https://www.apache.org/licenses/LICENSE-2.0.txt").unwrap().spdx_id,
        "Apache-2.0"
    );

    assert_eq!(matcher.to_spdx_id("zlib"), "Zlib");
    assert_eq!(matcher.to_spdx_id("json"), "JSON");
}

#[test]
fn test_missing_registry_is_fatal() {
    let data = data_dir();
    let result = LicenseMatcher::load(
        &data.join("spdx_licenses/plain"),
        &data.join("custom_licenses"),
        &data.join("does-not-exist.json"),
    );
    assert!(result.is_err());
}
