use axum::{extract::Extension, http::StatusCode, Json};
use std::sync::Arc;

use super::correlation::analyze_report;
use super::protocol::{AnalyzeRequest, AnalyzeResponse};
use super::report::render;
use crate::config::AnalyzerConfig;

pub async fn handle_analyze(
    Extension(config): Extension<Arc<AnalyzerConfig>>,
    Json(req): Json<AnalyzeRequest>,
) -> (StatusCode, Json<AnalyzeResponse>) {
    let config = match req.threshold {
        Some(threshold) => match config.with_threshold(threshold) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Rejected analysis request: {}", e);
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(AnalyzeResponse::failed(e)),
                );
            }
        },
        None => config.as_ref().clone(),
    };

    match analyze_report(&req.snapshot, &req.series, &config) {
        Ok(report) => {
            let rendered = render(&report);
            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    success: true,
                    report: Some(report),
                    rendered: Some(rendered),
                    error: None,
                }),
            )
        }
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(AnalyzeResponse::failed(e)),
            )
        }
    }
}

pub async fn handle_health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
