//! Zone partitioning and zone attribution for node identifiers.
//!
//! With zone-aware replication every zone covers the full token space on its
//! own, so per-zone ownership is computed by running the ownership model over a
//! snapshot that only holds that zone's nodes.

use super::types::{NodeId, RingSnapshot};
use crate::error::{AnalysisError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Identifier prefix used by the ingester fleet.
pub const DEFAULT_IDENTIFIER_PREFIX: &str = "ingester";

static DEFAULT_PARSER: LazyLock<ZoneLabelParser> = LazyLock::new(|| {
    ZoneLabelParser::new(DEFAULT_IDENTIFIER_PREFIX).expect("default identifier pattern is valid")
});

/// Splits a snapshot into one sub-snapshot per zone label.
///
/// Pure filtering on `Node::zone`; no ownership is computed here.
pub fn split_by_zone(snapshot: &RingSnapshot) -> BTreeMap<String, RingSnapshot> {
    snapshot
        .zones()
        .into_iter()
        .map(|zone| {
            let zone_snapshot = snapshot.filter(|node| node.zone == zone);
            (zone, zone_snapshot)
        })
        .collect()
}

/// Maps a node identifier to the zone it belongs to.
pub trait ZoneResolver {
    fn zone_of(&self, id: &NodeId) -> Result<String>;
}

/// Extracts the zone from identifiers shaped like `<prefix>-zone-<letter>-<number>`.
#[derive(Debug, Clone)]
pub struct ZoneLabelParser {
    pattern: Regex,
}

impl ZoneLabelParser {
    pub fn new(prefix: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"^{}-(zone-[a-z])-\d+$", regex::escape(prefix)))?;
        Ok(Self { pattern })
    }

    pub fn parse(&self, id: &str) -> Result<String> {
        self.pattern
            .captures(id)
            .and_then(|caps| caps.get(1))
            .map(|zone| zone.as_str().to_string())
            .ok_or_else(|| AnalysisError::MalformedIdentifier { id: id.to_string() })
    }
}

impl Default for ZoneLabelParser {
    fn default() -> Self {
        DEFAULT_PARSER.clone()
    }
}

impl ZoneResolver for ZoneLabelParser {
    fn zone_of(&self, id: &NodeId) -> Result<String> {
        self.parse(id.as_str())
    }
}

/// Zone label of an `ingester-zone-<letter>-<number>` identifier.
pub fn zone_label_from_node_id(id: &str) -> Result<String> {
    DEFAULT_PARSER.parse(id)
}

/// Resolves zones from the typed `Node::zone` field, parsing the identifier
/// only for nodes the snapshot does not know about.
pub struct SnapshotZoneResolver<'a> {
    snapshot: &'a RingSnapshot,
    parser: &'a ZoneLabelParser,
}

impl<'a> SnapshotZoneResolver<'a> {
    pub fn new(snapshot: &'a RingSnapshot, parser: &'a ZoneLabelParser) -> Self {
        Self { snapshot, parser }
    }
}

impl ZoneResolver for SnapshotZoneResolver<'_> {
    fn zone_of(&self, id: &NodeId) -> Result<String> {
        match self.snapshot.get(id) {
            Some(node) => Ok(node.zone.clone()),
            None => self.parser.zone_of(id),
        }
    }
}
