//! Strategic deployment and threat assessment for SENTINEL.
//!
//! Partitions the operating area into prioritized zones, scores incoming
//! threats, and recommends which unit type to deploy where.

pub mod assessment;
pub mod zones;

pub use assessment::{ThreatAssessment, ThreatPicture};
pub use zones::{DeploymentAdvice, DeploymentZone, DroneSummary, StrategyEngine};

pub use sentinel_core as core;
