use crate::ring::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Observed load (in-memory series) per node, as delivered by the metrics source.
pub type LoadByNode = HashMap<NodeId, u64>;

/// Each node's percentage (0-100) of its zone's total observed load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoadTable {
    pub(crate) shares: BTreeMap<NodeId, f64>,
    pub(crate) total: u64,
}

impl LoadTable {
    pub fn share(&self, id: &NodeId) -> Option<f64> {
        self.shares.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, f64)> {
        self.shares.iter().map(|(id, share)| (id, *share))
    }

    /// Sum of the raw load counts in the zone.
    pub fn zone_total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
