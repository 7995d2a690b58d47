use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.license-matchr/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub detection: DetectionConfig,
    pub cache: CacheConfig,
    pub fetch: FetchConfig,
}

/// Where the reference texts and the SPDX registry live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub spdx_dir: PathBuf,
    pub custom_dir: PathBuf,
    pub registry: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            spdx_dir: PathBuf::from("data/spdx_licenses/plain"),
            custom_dir: PathBuf::from("data/custom_licenses"),
            registry: PathBuf::from("data/spdx_licenses/licenses.json"),
        }
    }
}

/// Thresholds used when deciding whether to apply a match.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Similarity matches below this are reported but never applied.
    pub min_confidence: f64,
    /// How many corpus documents to keep per similarity query.
    pub top_n: usize,
    /// Stop at the first matching rule.
    pub early_exit: bool,
    /// License names at least this long are scored as text instead of rule-matched.
    pub min_name_chars: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.9,
            top_n: 3,
            early_exit: true,
            min_name_chars: 70,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: 120 }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    /// Records classified in parallel by a batch run.
    pub concurrency: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            concurrency: 16,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.license-matchr/config.toml`
/// 3. `~/.config/license-matchr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".license-matchr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-matchr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.detection.min_confidence, 0.9);
        assert_eq!(cfg.detection.top_n, 3);
        assert!(cfg.detection.early_exit);
        assert_eq!(cfg.cache.ttl(), Duration::from_secs(120));
        assert_eq!(cfg.fetch.timeout(), Duration::from_secs(5));
        assert_eq!(cfg.fetch.concurrency, 16);
        assert_eq!(cfg.corpus.spdx_dir, PathBuf::from("data/spdx_licenses/plain"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [detection]
            min_confidence = 0.75

            [cache]
            ttl_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(cfg.detection.min_confidence, 0.75);
        assert_eq!(cfg.detection.top_n, 3);
        assert_eq!(cfg.cache.ttl_secs, 10);
        assert_eq!(cfg.fetch.timeout_secs, 5);
    }

    #[test]
    fn test_project_config_is_found() {
        let dir = tempdir().unwrap();
        let cfg_dir = dir.path().join(".license-matchr");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(cfg_dir.join("config.toml"), "[detection]\ntop_n = 5\n").unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.detection.top_n, 5);
    }

    #[test]
    fn test_override_wins_and_errors_are_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[fetch]\nconcurrency = 2\n").unwrap();
        assert_eq!(load_config(dir.path(), Some(&path)).unwrap().fetch.concurrency, 2);

        std::fs::write(&path, "[fetch\n").unwrap();
        assert!(load_config(dir.path(), Some(&path)).is_err());
        assert!(load_config(dir.path(), Some(&dir.path().join("missing.toml"))).is_err());
    }
}
