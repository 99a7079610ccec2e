//! Formation geometry for SENTINEL.
//!
//! Computes member stations for named patterns around a shared center.
//! Station math is pure: same spec and member list, same stations.

pub mod patterns;
pub mod registry;

pub use patterns::{compute_positions, AssignedStation, FormationSpec};
pub use registry::FormationSet;

pub use sentinel_core as core;
