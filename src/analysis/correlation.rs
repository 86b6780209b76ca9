use super::types::{AnalysisReport, Histogram, NodeCorrelation, Outlier, OutlierSet};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::load::aggregator::compute_zone_load_shares_with;
use crate::load::types::LoadByNode;
use crate::ring::ownership::OwnershipSummary;
use crate::ring::types::{NodeId, RingSnapshot};
use crate::ring::zones::{split_by_zone, SnapshotZoneResolver};
use std::collections::BTreeMap;

/// Score in `[0, 100]` of how closely a node's load share tracks its token ownership.
///
/// `100 - round(|load - ownership| / load * 100)`, clamped at 0. Returns `None`
/// when the load share is zero (or not a positive number), since the divergence
/// is undefined there.
pub fn correlation_score(ownership_share: f64, load_share: f64) -> Option<u8> {
    if !load_share.is_finite() || load_share <= 0.0 || !ownership_share.is_finite() {
        return None;
    }

    let divergence = ((load_share - ownership_share).abs() / load_share * 100.0).round();
    Some((100.0 - divergence).clamp(0.0, 100.0) as u8)
}

/// Correlates per-zone token ownership with per-zone load and returns the
/// score histogram and the nodes scoring below `outlier_threshold`.
pub fn analyze(
    snapshot: &RingSnapshot,
    load_by_node: &LoadByNode,
    outlier_threshold: u8,
) -> Result<(Histogram, OutlierSet)> {
    let config = AnalyzerConfig {
        outlier_threshold,
        ..AnalyzerConfig::default()
    };
    let report = analyze_report(snapshot, load_by_node, &config)?;
    Ok((report.histogram, report.outliers))
}

/// Full analysis run: global and per-zone ownership, per-node scores,
/// histogram, outliers and the nodes excluded from scoring.
pub fn analyze_report(
    snapshot: &RingSnapshot,
    load_by_node: &LoadByNode,
    config: &AnalyzerConfig,
) -> Result<AnalysisReport> {
    config.validate()?;
    snapshot.validate()?;

    let threshold = config.outlier_threshold;
    let parser = config.zone_parser()?;

    // Global ownership is reported only; scoring uses per-zone ownership.
    let global = OwnershipSummary::of(snapshot);
    tracing::info!(
        "Global ownership: min={:.2}% max={:.2}% max variance={:.2}%",
        global.min,
        global.max,
        global.max_variance
    );

    let zone_snapshots = split_by_zone(snapshot);
    let zones: BTreeMap<String, OwnershipSummary> = zone_snapshots
        .iter()
        .map(|(zone, zone_snapshot)| (zone.clone(), OwnershipSummary::of(zone_snapshot)))
        .collect();

    let resolver = SnapshotZoneResolver::new(snapshot, &parser);
    let load_tables = compute_zone_load_shares_with(load_by_node, &resolver)?;

    let mut correlations = BTreeMap::new();
    let mut histogram = Histogram::default();
    let mut outliers = OutlierSet::new();
    let mut excluded = Vec::new();

    for (zone, summary) in zones.iter() {
        tracing::info!(
            "Per-zone ownership: zone={} min={:.2}% max={:.2}% max variance={:.2}%",
            zone,
            summary.min,
            summary.max,
            summary.max_variance
        );

        let Some(load_table) = load_tables.get(zone) else {
            tracing::debug!("No load reported for zone {}", zone);
            continue;
        };

        // Every node of the zone is scored, including ones holding no tokens.
        let mut node_ids: Vec<&NodeId> = zone_snapshots
            .get(zone)
            .map(|zone_snapshot| zone_snapshot.nodes().map(|node| &node.id).collect())
            .unwrap_or_default();
        node_ids.sort();

        for node_id in node_ids {
            let ownership_share = summary.table.share(node_id);
            let Some(load_share) = load_table.share(node_id) else {
                tracing::debug!("No load reported for {}", node_id);
                continue;
            };

            let Some(score) = correlation_score(ownership_share, load_share) else {
                tracing::debug!("Excluding {} from scoring: zero load share", node_id);
                excluded.push(node_id.clone());
                continue;
            };

            tracing::debug!(
                "{} owns {:.2}% tokens and {:.2}% load, correlation: {}",
                node_id,
                ownership_share,
                load_share,
                score
            );

            histogram.record(score);
            if score < threshold {
                let load = load_by_node.get(node_id).copied().unwrap_or(0);
                outliers.insert(node_id.clone(), Outlier { score, load });
            }
            correlations.insert(
                node_id.clone(),
                NodeCorrelation {
                    ownership_share,
                    load_share,
                    score,
                },
            );
        }
    }

    excluded.sort();

    tracing::info!(
        "Correlated {} node(s): {} outlier(s) below {}, {} excluded",
        histogram.total(),
        outliers.len(),
        threshold,
        excluded.len()
    );

    Ok(AnalysisReport {
        threshold,
        global,
        zones,
        correlations,
        histogram,
        outliers,
        excluded,
    })
}

