//! Analysis Errors
//!
//! Only structural problems with the inputs are errors. Numeric edge cases
//! (zones without load, nodes with a zero load share, empty snapshots) are
//! absorbed by the analysis with fixed fallback values and never show up here.

use crate::ring::types::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The identifier does not follow the `<prefix>-zone-<letter>-<n>` convention,
    /// so its load cannot be attributed to a zone.
    #[error("unable to extract zone from node identifier {id:?}")]
    MalformedIdentifier { id: String },

    /// Two nodes claim the same token.
    #[error("token {token} is owned by both {first:?} and {second:?}")]
    DuplicateToken {
        token: u32,
        first: NodeId,
        second: NodeId,
    },

    /// A snapshot entry is keyed under a different id than the node it holds.
    #[error("snapshot key {key:?} holds node {id:?}")]
    NodeIdMismatch { key: NodeId, id: NodeId },

    #[error("outlier threshold must be within [0, 100], got {0}")]
    InvalidThreshold(i64),

    #[error("invalid identifier pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
