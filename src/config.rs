use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// AnalyzerConfig – the three tunables of the pipeline
// ---------------------------------------------------------------------------

/// Analysis tunables. Sources, later wins: built-in defaults → optional
/// TOML file → individual CLI flags (applied by the binary).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Shortfall percentage above which a run is classified underperforming.
    pub error_threshold: f64,
    /// Raw reading treated as the disconnection sentinel.
    pub disconnection_value: f64,
    /// Multiplier applied to the row dispersion for the below-threshold
    /// test.
    pub threshold_multiplier: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            error_threshold: 6.26,
            disconnection_value: 0.0,
            threshold_multiplier: 1.5,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// defaults; unknown keys are rejected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AnalyzerConfig::default();
        assert_eq!(cfg.error_threshold, 6.26);
        assert_eq!(cfg.disconnection_value, 0.0);
        assert_eq!(cfg.threshold_multiplier, 1.5);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "error_threshold = 10.0").expect("write");
        let cfg = AnalyzerConfig::from_file(file.path()).expect("load");
        assert_eq!(cfg.error_threshold, 10.0);
        assert_eq!(cfg.threshold_multiplier, 1.5);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "errro_threshold = 10.0").expect("write");
        assert!(AnalyzerConfig::from_file(file.path()).is_err());
    }
}
