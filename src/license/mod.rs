//! License text normalization and classification.
//!
//! - [`preprocess`] — plain text / HTML normalization and tokenization.
//! - [`similarity`] — BM25 vector space over the reference corpus.
//! - [`rules`] and [`curated`] — ordered regex dictionaries and the ignore list.
//! - [`url`] — prefix match of license URLs against the registry.
//! - [`matcher`] — [`LicenseMatcher`], the shared entry point bundling all of the above.

pub mod curated;
pub mod matcher;
pub mod preprocess;
pub mod rules;
pub mod similarity;
pub mod url;

pub use matcher::LicenseMatcher;
