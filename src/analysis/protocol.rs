//! Analysis HTTP Protocol
//!
//! Endpoints and request/response bodies for running an analysis over HTTP.
//! Bodies are JSON.

use super::types::AnalysisReport;
use crate::load::types::LoadByNode;
use crate::ring::types::RingSnapshot;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Runs one analysis over the snapshot and load mapping in the request body.
pub const ENDPOINT_ANALYZE: &str = "/analyze";
/// Liveness check.
pub const ENDPOINT_HEALTH: &str = "/health";

// --- Data Transfer Objects ---

/// A ring snapshot plus the observed series per node, taken at the same instant.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub snapshot: RingSnapshot,
    pub series: LoadByNode,
    /// Overrides the server's configured outlier threshold for this request.
    #[serde(default)]
    pub threshold: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub report: Option<AnalysisReport>,
    /// The report rendered as operator-facing text.
    pub rendered: Option<String>,
    pub error: Option<String>,
}

impl AnalyzeResponse {
    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            report: None,
            rendered: None,
            error: Some(error.to_string()),
        }
    }
}
