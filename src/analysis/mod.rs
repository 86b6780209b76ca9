//! Correlation Analysis Module
//!
//! Checks whether token ownership is a good proxy for the load a node actually
//! carries.
//!
//! ## Pipeline
//! 1. **Ownership**: global and per-zone token ownership from the ring snapshot.
//! 2. **Load**: per-zone load shares from the observed series per node.
//! 3. **Scoring**: each node gets a `[0, 100]` correlation score comparing its
//!    per-zone ownership with its per-zone load share.
//! 4. **Aggregation**: scores are bucketed into a decile histogram and nodes
//!    below the threshold are collected as outliers.
//!
//! ## Submodules
//! - **`correlation`**: scoring and the `analyze` entry points.
//! - **`report`**: operator-facing text rendering.
//! - **`handlers`** / **`protocol`**: HTTP surface for running an analysis.
//! - **`types`**: histogram, outliers and the report structure.

pub mod correlation;
pub mod handlers;
pub mod protocol;
pub mod report;
pub mod types;
