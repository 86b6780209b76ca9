use super::types::{LoadByNode, LoadTable};
use crate::error::Result;
use crate::ring::types::NodeId;
use crate::ring::zones::{ZoneLabelParser, ZoneResolver};
use std::collections::BTreeMap;

/// Per-zone load shares, attributing nodes to zones by parsing their identifiers.
pub fn compute_zone_load_shares(
    load_by_node: &LoadByNode,
) -> Result<BTreeMap<String, LoadTable>> {
    compute_zone_load_shares_with(load_by_node, &ZoneLabelParser::default())
}

/// Per-zone load shares using `resolver` to attribute nodes to zones.
///
/// Any identifier the resolver rejects fails the whole computation: dropping
/// the node would skew its zone's total. A zone whose total load is zero gets
/// a 0% share for every node.
pub fn compute_zone_load_shares_with<R: ZoneResolver + ?Sized>(
    load_by_node: &LoadByNode,
    resolver: &R,
) -> Result<BTreeMap<String, LoadTable>> {
    let mut zones: BTreeMap<String, BTreeMap<NodeId, u64>> = BTreeMap::new();
    for (node_id, count) in load_by_node.iter() {
        let zone = resolver.zone_of(node_id)?;
        zones
            .entry(zone)
            .or_default()
            .insert(node_id.clone(), *count);
    }

    let mut out = BTreeMap::new();
    for (zone, nodes) in zones {
        let total: u64 = nodes.values().sum();

        let shares: BTreeMap<NodeId, f64> = if total == 0 {
            tracing::warn!(
                "Zone {} has {} node(s) but no observed load, reporting 0% shares",
                zone,
                nodes.len()
            );
            nodes.into_keys().map(|id| (id, 0.0)).collect()
        } else {
            nodes
                .into_iter()
                .map(|(id, count)| (id, count as f64 / total as f64 * 100.0))
                .collect()
        };

        out.insert(zone, LoadTable { shares, total });
    }

    Ok(out)
}
