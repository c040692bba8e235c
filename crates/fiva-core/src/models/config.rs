//! Configuration structures for the extraction pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FivaError, Result};

/// Main configuration for the fiva pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FivaConfig {
    /// Field extraction and record building configuration.
    pub extraction: ExtractionConfig,
}

/// Extraction and record-building configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// VAT-within-gross estimation factor applied when no explicit VAT
    /// line is recognized. The default 0.187 is inherited from the
    /// legacy system as-is; it is a rough heuristic, not a statutory
    /// rate calculation.
    pub vat_estimate_rate: Decimal,

    /// Confidence assigned to records built from unverified OCR text.
    pub ocr_confidence: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            vat_estimate_rate: Decimal::new(187, 3),
            ocr_confidence: 0.65,
        }
    }
}

impl FivaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| FivaError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| FivaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_constants() {
        let config = FivaConfig::default();
        assert_eq!(config.extraction.vat_estimate_rate, Decimal::new(187, 3));
        assert_eq!(config.extraction.ocr_confidence, 0.65);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: FivaConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.extraction.ocr_confidence, 0.65);

        let config: FivaConfig =
            serde_json::from_str(r#"{"extraction": {"ocr_confidence": 0.8}}"#).unwrap();
        assert_eq!(config.extraction.ocr_confidence, 0.8);
        assert_eq!(config.extraction.vat_estimate_rate, Decimal::new(187, 3));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = FivaConfig::default();
        config.extraction.ocr_confidence = 0.7;
        config.save(&path).unwrap();

        let loaded = FivaConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extraction.ocr_confidence, 0.7);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FivaConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, FivaError::Config(_)));
    }
}
