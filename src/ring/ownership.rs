//! Token space ownership.
//!
//! The token space is `[0, 2^32 - 1]` and wraps around. A token owns the range
//! running from the previous token (exclusive) up to itself (inclusive). The
//! lowest token owns the wrap-around range coming from the highest token.

use super::types::{NodeId, RingSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of points in the token space.
pub const TOKEN_SPACE_SIZE: u64 = 1 << 32;

/// Percentage (0-100) of the token space owned by each node.
///
/// Nodes holding no tokens are absent; treat a missing node as owning 0%.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OwnershipTable {
    shares: BTreeMap<NodeId, f64>,
}

impl OwnershipTable {
    pub fn share(&self, id: &NodeId) -> f64 {
        self.shares.get(id).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, f64)> {
        self.shares.iter().map(|(id, share)| (id, *share))
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.shares.values().sum()
    }
}

/// Ownership table plus its spread, as reported for one snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OwnershipSummary {
    pub table: OwnershipTable,
    pub min: f64,
    pub max: f64,
    pub max_variance: f64,
}

impl OwnershipSummary {
    pub fn of(snapshot: &RingSnapshot) -> Self {
        let table = compute_ownership(snapshot);
        let (min, max, max_variance) = min_max_of(snapshot, &table);
        Self {
            table,
            min,
            max,
            max_variance,
        }
    }
}

pub fn compute_ownership(snapshot: &RingSnapshot) -> OwnershipTable {
    let owners = snapshot.token_owners();
    let Some(&(last_token, _)) = owners.last() else {
        return OwnershipTable::default();
    };

    let mut owned: BTreeMap<NodeId, u64> = BTreeMap::new();
    let mut previous = last_token as u64;

    for (idx, (token, node_id)) in owners.iter().enumerate() {
        let token = *token as u64;
        let range = if idx == 0 {
            token + TOKEN_SPACE_SIZE - previous
        } else {
            token - previous
        };
        *owned.entry((*node_id).clone()).or_insert(0) += range;
        previous = token;
    }

    let shares = owned
        .into_iter()
        .map(|(id, range)| (id, range as f64 / TOKEN_SPACE_SIZE as f64 * 100.0))
        .collect();

    OwnershipTable { shares }
}

/// Returns `(min%, max%, max variance%)` over every node in the snapshot.
///
/// Nodes holding no tokens count as owning 0%. Max variance is
/// `(max - min) / max * 100`, and 0 when nobody owns anything.
pub fn min_max_ownership(snapshot: &RingSnapshot) -> (f64, f64, f64) {
    min_max_of(snapshot, &compute_ownership(snapshot))
}

fn min_max_of(snapshot: &RingSnapshot, table: &OwnershipTable) -> (f64, f64, f64) {
    if snapshot.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let (min, max) = snapshot
        .nodes()
        .map(|node| table.share(&node.id))
        .fold((f64::MAX, 0.0_f64), |(min, max), share| {
            (min.min(share), max.max(share))
        });

    let variance = if max > 0.0 {
        (max - min) / max * 100.0
    } else {
        0.0
    };

    (min, max, variance)
}
