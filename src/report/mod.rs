//! Report renderers for detection results.
//!
//! - [`terminal`] — colored, tabular output with summary box; respects `--verbose` / `--quiet`.
//!
//! JSON output is plain `serde_json` over the [`models`](crate::models) types and lives in the binary.

pub mod terminal;
