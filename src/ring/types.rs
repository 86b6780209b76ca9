use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state reported by the ring membership store.
///
/// Carried through untouched; ownership and correlation ignore it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NodeState {
    Pending,
    Joining,
    #[default]
    Active,
    Leaving,
    Left,
}

/// A single ring member at snapshot time.
///
/// `tokens` are positions on the 32-bit circular token space. Each token value
/// must be unique across the whole snapshot, not only within this node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub zone: String,
    pub tokens: BTreeSet<u32>,
    #[serde(default)]
    pub state: NodeState,
    /// Unix seconds of the last heartbeat seen by the membership store.
    #[serde(default)]
    pub last_heartbeat: i64,
}

impl Node {
    pub fn new(id: &str, zone: &str, tokens: impl IntoIterator<Item = u32>) -> Self {
        Self {
            id: NodeId::from(id),
            zone: zone.to_string(),
            tokens: tokens.into_iter().collect(),
            state: NodeState::Active,
            last_heartbeat: 0,
        }
    }
}

/// Immutable point-in-time view of the ring, keyed by node id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RingSnapshot {
    nodes: HashMap<NodeId, Node>,
}

impl RingSnapshot {
    /// Builds a snapshot, rejecting token values claimed by more than one node.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Result<Self> {
        let snapshot = Self {
            nodes: nodes
                .into_iter()
                .map(|node| (node.id.clone(), node))
                .collect(),
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks the invariants a snapshot must hold before it can be analyzed.
    ///
    /// Needed for snapshots that did not go through [`RingSnapshot::from_nodes`],
    /// e.g. ones deserialized from a request body.
    pub fn validate(&self) -> Result<()> {
        let mut owners: HashMap<u32, &NodeId> = HashMap::new();

        for (key, node) in self.nodes.iter() {
            if key != &node.id {
                return Err(AnalysisError::NodeIdMismatch {
                    key: key.clone(),
                    id: node.id.clone(),
                });
            }

            for token in node.tokens.iter() {
                if let Some(first) = owners.insert(*token, &node.id) {
                    let (first, second) = if first < &node.id {
                        (first.clone(), node.id.clone())
                    } else {
                        (node.id.clone(), first.clone())
                    };
                    return Err(AnalysisError::DuplicateToken {
                        token: *token,
                        first,
                        second,
                    });
                }
            }
        }

        Ok(())
    }

    /// Sub-snapshot holding only the nodes matching `keep`.
    pub fn filter(&self, mut keep: impl FnMut(&Node) -> bool) -> RingSnapshot {
        RingSnapshot {
            nodes: self
                .nodes
                .iter()
                .filter(|(_, node)| keep(node))
                .map(|(id, node)| (id.clone(), node.clone()))
                .collect(),
        }
    }

    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every `(token, owner)` pair, ascending by token.
    pub fn token_owners(&self) -> Vec<(u32, &NodeId)> {
        let mut pairs: Vec<(u32, &NodeId)> = self
            .nodes
            .values()
            .flat_map(|node| node.tokens.iter().map(move |token| (*token, &node.id)))
            .collect();
        pairs.sort_unstable_by_key(|(token, _)| *token);
        pairs
    }

    /// Tokens grouped by zone label, each group ascending.
    pub fn tokens_by_zone(&self) -> BTreeMap<String, Vec<u32>> {
        let mut by_zone: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for node in self.nodes.values() {
            by_zone
                .entry(node.zone.clone())
                .or_default()
                .extend(node.tokens.iter().copied());
        }
        for tokens in by_zone.values_mut() {
            tokens.sort_unstable();
        }
        by_zone
    }

    /// Distinct zone labels, sorted. Zones whose nodes hold no tokens are included.
    pub fn zones(&self) -> Vec<String> {
        self.tokens_by_zone().into_keys().collect()
    }
}
