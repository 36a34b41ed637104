//! Configuration file support.
//!
//! `.exemplar.toml` holds corpus-wide defaults; every field is optional and
//! CLI flags win over file values.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".exemplar.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemplarConfig {
    pub ranking: RankingConfig,
    pub features: FeatureConfig,
    pub corpus: CorpusConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Gaussian kernel bandwidth for typicality scoring
    pub bandwidth: f64,
    /// Size of the typical set used by the representativeness pass
    pub typical_count: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            bandwidth: crate::ranking::DEFAULT_BANDWIDTH,
            typical_count: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Reduce feature strings to identifier sub-words
    pub normalize_tokens: bool,
    /// Restrict feature extraction to these member names
    pub members: Vec<String>,
    /// Skip segmentation and use whole files as features
    pub skip_segmentation: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            normalize_tokens: false,
            members: Vec::new(),
            skip_segmentation: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Glob patterns excluded from file discovery
    pub ignore_patterns: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: vec![
                "**/target/**".to_string(),
                "**/.git/**".to_string(),
            ],
        }
    }
}

impl ExemplarConfig {
    /// Load configuration from an explicit path, or from `.exemplar.toml`
    /// in the corpus root when present; defaults otherwise.
    pub fn load(explicit: Option<&Path>, corpus_root: &Path) -> Result<Self> {
        let candidate = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let implicit = corpus_root.join(CONFIG_FILE_NAME);
                implicit.exists().then_some(implicit)
            }
        };

        match candidate {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)
                    .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))
            }
            None => Ok(Self::default()),
        }
    }

    /// Default configuration rendered as a commented TOML document
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).expect("default config always serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = ExemplarConfig::default();
        assert_eq!(config.ranking.bandwidth, 0.3);
        assert_eq!(config.ranking.typical_count, 5);
        assert!(!config.features.normalize_tokens);
        assert!(!config.corpus.ignore_patterns.is_empty());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExemplarConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.ranking.typical_count, 5);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[ranking]\nbandwidth = 0.5\n").unwrap();
        let config = ExemplarConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.ranking.bandwidth, 0.5);
        assert_eq!(config.ranking.typical_count, 5);
    }

    #[test]
    fn test_load_invalid_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "ranking = \"not a table\"").unwrap();
        let err = ExemplarConfig::load(Some(&path), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_default_toml_round_trips() {
        let rendered = ExemplarConfig::default_toml();
        let parsed: ExemplarConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.ranking.typical_count, 5);
    }
}
