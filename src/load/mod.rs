//! Load Distribution Module
//!
//! Turns the flat `node -> observed series` mapping from the metrics source into
//! per-zone load shares. Zones are resolved from node identifiers, so a node
//! whose identifier cannot be attributed to a zone aborts the computation.

pub mod aggregator;
pub mod types;

#[cfg(test)]
mod tests;
