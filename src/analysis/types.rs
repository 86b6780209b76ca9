use crate::ring::ownership::OwnershipSummary;
use crate::ring::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const HISTOGRAM_BUCKETS: usize = 10;
pub const HISTOGRAM_BUCKET_WIDTH: u8 = 10;

/// Bucket of a score in `[0, 100]`. A perfect 100 lands in the top bucket.
pub fn bucket_index(score: u8) -> usize {
    ((score / HISTOGRAM_BUCKET_WIDTH) as usize).min(HISTOGRAM_BUCKETS - 1)
}

/// Node counts per correlation score decile: `[0,10)`, `[10,20)`, ..., `[90,100]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; HISTOGRAM_BUCKETS],
}

impl Histogram {
    pub fn record(&mut self, score: u8) {
        self.counts[bucket_index(score)] += 1;
    }

    pub fn count(&self, bucket: usize) -> u32 {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    /// `((start, end), count)` for every bucket, lowest first.
    pub fn buckets(&self) -> Vec<((u8, u8), u32)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(idx, count)| {
                let start = idx as u8 * HISTOGRAM_BUCKET_WIDTH;
                ((start, start + HISTOGRAM_BUCKET_WIDTH), *count)
            })
            .collect()
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outlier {
    pub score: u8,
    /// Raw load count the node reported, for annotation.
    pub load: u64,
}

/// Nodes scoring below the outlier threshold. Unordered.
pub type OutlierSet = HashMap<NodeId, Outlier>;

/// Inputs and result of scoring a single node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NodeCorrelation {
    pub ownership_share: f64,
    pub load_share: f64,
    pub score: u8,
}

/// Everything one analysis run produces for reporting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub threshold: u8,
    pub global: OwnershipSummary,
    pub zones: BTreeMap<String, OwnershipSummary>,
    pub correlations: BTreeMap<NodeId, NodeCorrelation>,
    pub histogram: Histogram,
    pub outliers: OutlierSet,
    /// Nodes left out of scoring because their load share is zero.
    pub excluded: Vec<NodeId>,
}
