//! Ring Ownership Analyzer Library
//!
//! Detects load imbalance in a zone-aware consistent-hashing ring: nodes whose
//! share of the token space diverges from their share of the observed load.
//!
//! ## Modules
//! - **`ring`**: Read-only ring snapshot, token space ownership and zone partitioning.
//! - **`load`**: Per-zone load shares from the observed series per node.
//! - **`analysis`**: Ownership/load correlation scores, histogram, outliers,
//!   report rendering and the HTTP handlers exposing it.
//! - **`config`**: Analyzer settings (outlier threshold, identifier convention).
//! - **`error`**: Structural input errors.
//!
//! Every analysis is a pure function of a snapshot and a load mapping. No ring
//! state is held between calls.

pub mod analysis;
pub mod config;
pub mod error;
pub mod load;
pub mod ring;
