//! `license-matchr` — classify license texts, names and URLs into SPDX identifiers.
//!
//! The engine combines a BM25 similarity model over reference license texts,
//! ordered regex dictionaries for license names, and an exact URL index built
//! from the SPDX registry. [`pipeline::Pipeline`] ties them together for
//! license records, with a TTL cache in front of the HTTP fetches.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use license_matchr::license::LicenseMatcher;
//!
//! fn main() -> anyhow::Result<()> {
//!     let matcher = LicenseMatcher::load(
//!         Path::new("data/spdx_licenses/plain"),
//!         Path::new("data/custom_licenses"),
//!         Path::new("data/spdx_licenses/licenses.json"),
//!     )?;
//!
//!     let rules = matcher.match_rules("Apache License, Version 2.0", true);
//!     println!("{:?}", rules.first());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod license;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod report;
