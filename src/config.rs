//! Analyzer configuration.

use crate::error::{AnalysisError, Result};
use crate::ring::zones::{ZoneLabelParser, DEFAULT_IDENTIFIER_PREFIX};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTLIER_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Nodes scoring strictly below this value are reported as outliers.
    pub outlier_threshold: u8,
    /// Leading component of node identifiers, e.g. `ingester` in `ingester-zone-a-1`.
    pub identifier_prefix: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            outlier_threshold: DEFAULT_OUTLIER_THRESHOLD,
            identifier_prefix: DEFAULT_IDENTIFIER_PREFIX.to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.outlier_threshold > 100 {
            return Err(AnalysisError::InvalidThreshold(self.outlier_threshold as i64));
        }
        Ok(())
    }

    /// Copy of this config with a different threshold, given as a raw integer.
    pub fn with_threshold(&self, threshold: i64) -> Result<Self> {
        if !(0..=100).contains(&threshold) {
            return Err(AnalysisError::InvalidThreshold(threshold));
        }
        Ok(Self {
            outlier_threshold: threshold as u8,
            ..self.clone()
        })
    }

    pub fn zone_parser(&self) -> Result<ZoneLabelParser> {
        ZoneLabelParser::new(&self.identifier_prefix)
    }
}
