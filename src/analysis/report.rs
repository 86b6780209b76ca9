//! Plain-text rendering of an analysis run for operators.

use super::types::AnalysisReport;
use crate::ring::ownership::OwnershipSummary;
use std::fmt::Write;

pub fn render(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Global ownership: {}", spread(&report.global));
    for (zone, summary) in report.zones.iter() {
        let _ = writeln!(out, "Per-zone ownership: zone={} {}", zone, spread(summary));
    }

    out.push('\n');
    out.push_str("------------------------------------------------------\n");
    out.push('\n');
    out.push_str("Correlation between number of tokens owned and in-memory series\n");
    out.push_str(
        "This is a percentage: 100% means an ingester owns a number of series equal to the number of owned tokens.\n",
    );
    out.push_str(
        "50% means an ingester owns either half or the double of series compared to the number of owned tokens.\n",
    );
    out.push('\n');

    for ((start, end), count) in report.histogram.buckets() {
        let _ = writeln!(out, "[{:3}, {:3}] Number ingesters: {}", start, end, count);
    }

    if !report.outliers.is_empty() {
        let mut outliers: Vec<_> = report.outliers.iter().collect();
        outliers.sort_by(|a, b| a.1.score.cmp(&b.1.score).then_with(|| a.0.cmp(b.0)));

        out.push('\n');
        let _ = writeln!(out, "Outliers (correlation < {}):", report.threshold);
        for (node_id, outlier) in outliers {
            let _ = writeln!(
                out,
                "- {} \twith correlation {} (number of series: {:.3}M)",
                node_id,
                outlier.score,
                outlier.load as f64 / 1_000_000.0
            );
        }
    }

    if !report.excluded.is_empty() {
        out.push('\n');
        out.push_str("Excluded (zero load share):\n");
        for node_id in report.excluded.iter() {
            let _ = writeln!(out, "- {}", node_id);
        }
    }

    out
}

fn spread(summary: &OwnershipSummary) -> String {
    format!(
        "min={:.2}% max={:.2}% max variance={:.2}%",
        summary.min, summary.max, summary.max_variance
    )
}
