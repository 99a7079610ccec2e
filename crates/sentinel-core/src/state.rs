//! Engine state snapshot — the complete visible state rebuilt each tick.
//!
//! Snapshots are read-only from the consumer's perspective; the renderer
//! never mutates engine state directly.

use serde::{Deserialize, Serialize};

use crate::components::TrailSample;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete engine state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub automation: AutomationMode,
    pub mission: MissionProfile,
    pub score: ScoreView,
    pub resources: ResourceView,
    pub dispatcher: DispatcherView,
    pub threats: Vec<ThreatView>,
    pub drones: Vec<DroneView>,
    pub weapons: Vec<WeaponView>,
    pub bays: Vec<BayView>,
    pub zones: Vec<ZoneView>,
    pub recommendations: Vec<DeploymentAdviceView>,
    pub formations: Vec<FormationView>,
    pub power_ups: Vec<PowerUpView>,
    /// Events raised during this tick, in order.
    pub events: Vec<GameEvent>,
}

/// Running score counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub level: u32,
    pub neutralized: u32,
    pub combo_multiplier: f32,
}

/// Operator-side resource pools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceView {
    pub energy: f32,
    pub max_energy: f32,
    pub cooling: f32,
    pub max_cooling: f32,
}

/// Dispatcher reservoir status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatcherView {
    pub position: Position,
    pub energy: f32,
    pub max_energy: f32,
    pub fuel: f32,
    pub max_fuel: f32,
    pub deployed_count: usize,
    pub drone_capacity: usize,
}

/// One threat on the tactical display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatView {
    pub id: u32,
    pub category: ThreatCategory,
    pub behavior: ThreatBehavior,
    pub status: ThreatStatus,
    pub tier: ThreatTier,
    pub position: Position,
    pub health: f32,
    pub max_health: f32,
    pub shield_strength: Option<f32>,
    /// Render opacity; pulses for stealth airframes.
    pub observability: f32,
    pub selected: bool,
    pub trail: Vec<TrailSample>,
}

/// One deployed drone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneView {
    pub id: u32,
    pub drone_type: DroneType,
    pub mission: DroneMission,
    pub status: DroneStatus,
    pub position: Position,
    pub target: Position,
    pub health: f32,
    pub max_health: f32,
    pub energy: f32,
    pub max_energy: f32,
}

/// One effector channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub kind: WeaponKind,
    pub ready: bool,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Fraction of the cooldown still remaining (0 when ready).
    pub cooldown_fraction: f32,
    pub selected: bool,
}

/// One deployment bay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BayView {
    pub drone_type: DroneType,
    pub current: u32,
    pub capacity: u32,
    pub ready: bool,
}

/// One deployment zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneView {
    pub id: String,
    pub name: String,
    pub center: Position,
    pub radius: f32,
    pub tier: ZoneTier,
    pub threat_level: f32,
    pub coverage: f32,
    pub assigned_drones: Vec<u32>,
    pub recommended_types: Vec<DroneType>,
}

/// One deployment recommendation, priority-ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentAdviceView {
    pub zone_id: String,
    pub drone_type: DroneType,
    pub position: Position,
    pub estimated_effectiveness: f32,
    pub reasoning: String,
}

/// One active formation with derived member stations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationView {
    pub id: u32,
    pub pattern: FormationPattern,
    pub center: Position,
    pub stations: Vec<StationView>,
}

/// One assigned formation station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationView {
    pub drone_id: u32,
    pub position: Position,
    pub role: FormationRole,
}

/// One active power-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub remaining_secs: f64,
}

/// A persisted leaderboard entry — the only state surviving a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u64,
    pub level: u32,
    /// ISO-8601 date string supplied by the embedding shell.
    pub date: String,
    pub threats_neutralized: u32,
}
