//! Ring Snapshot Module
//!
//! Read-only model of a zone-aware consistent-hashing ring and the token space
//! ownership derived from it.
//!
//! ## Core Concepts
//! - **Snapshot**: `RingSnapshot` is a frozen view of the ring supplied by the
//!   membership store. Nothing in this crate mutates ring state.
//! - **Ownership**: Each token owns the slice of the circular 32-bit token space
//!   ending at it. A node's ownership is the sum of its tokens' slices.
//! - **Zones**: Under zone-aware replication each zone covers the full token
//!   space independently, so ownership is also computed per zone.

pub mod ownership;
pub mod types;
pub mod zones;
