//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Systems in the sim crate own all behavior.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Marks an entity as a hostile threat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Threat;

/// Marks an entity as a friendly interceptor drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Uav;

/// Marks the single dispatcher ("mothership") entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dispatcher;

/// Hit points. `current` never drops below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Debit health, clamping at zero. Returns true when depleted.
    pub fn apply_damage(&mut self, amount: f32) -> bool {
        self.current = (self.current - amount).max(0.0);
        self.current <= 0.0
    }
}

/// Category-specific extras carried by some threats.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpecialTraits {
    /// Chain-detonation radius for kamikaze airframes.
    pub explosion_radius: Option<f32>,
    /// Remaining shield pool, drained before health.
    pub shield_strength: Option<f32>,
    /// Lures score reduced engagement value.
    pub is_decoy: bool,
}

/// Threat behavior and lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatProfile {
    pub category: ThreatCategory,
    /// Movement behavior, fixed at spawn.
    pub behavior: ThreatBehavior,
    /// Evasion scalar in [0, 1], amplifies evasive/zigzag/hover deviation.
    pub evasion_level: f32,
    /// Cruise speed in units per second.
    pub speed: f32,
    pub tier: ThreatTier,
    pub status: ThreatStatus,
    /// Elapsed-seconds stamp of the last status transition.
    pub status_since_secs: f64,
    /// Elapsed-seconds stamp of spawn (phase offset for the zigzag weave).
    pub spawned_at_secs: f64,
    pub special: SpecialTraits,
}

/// One recorded trail sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailSample {
    pub position: Position,
    pub elapsed_secs: f64,
}

/// Bounded position history for trail rendering (newest last).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    pub samples: Vec<TrailSample>,
}

impl Trail {
    /// Append a sample, dropping the oldest beyond the cap.
    pub fn push(&mut self, position: Position, elapsed_secs: f64) {
        self.samples.push(TrailSample {
            position,
            elapsed_secs,
        });
        let cap = crate::constants::TRAIL_CAP;
        if self.samples.len() > cap {
            let excess = self.samples.len() - cap;
            self.samples.drain(..excess);
        }
    }
}

/// Deployed drone state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airframe {
    pub drone_type: DroneType,
    pub mission: DroneMission,
    pub status: DroneStatus,
    /// Current waypoint in arena space.
    pub target: Vec2,
    /// Cruise speed in units per second.
    pub speed: f32,
    pub energy: f32,
    pub max_energy: f32,
    /// Id of the owning dispatcher entity.
    pub dispatcher_id: u32,
    /// Elapsed-seconds stamp of deployment.
    pub deployed_at_secs: f64,
}

/// One effector channel on the dispatcher mast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub damage: f32,
    pub range: f32,
    /// Base cooldown in seconds.
    pub cooldown_secs: f64,
    /// Elapsed-seconds stamp of the last shot.
    pub last_fired_secs: f64,
    /// True once the cooldown sweep observes the cooldown has elapsed.
    pub ready: bool,
    pub ammo: u32,
    pub max_ammo: u32,
}

/// The full effector rack plus the operator's channel selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponRack {
    pub weapons: Vec<Weapon>,
    pub selected: WeaponKind,
}

impl WeaponRack {
    pub fn get(&self, kind: WeaponKind) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.kind == kind)
    }

    pub fn get_mut(&mut self, kind: WeaponKind) -> Option<&mut Weapon> {
        self.weapons.iter_mut().find(|w| w.kind == kind)
    }
}

/// Holding pen for one drone type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentBay {
    pub drone_type: DroneType,
    pub capacity: u32,
    pub current: u32,
    /// Seconds between launches from this bay.
    pub cooldown_secs: f64,
    pub last_deployment_secs: f64,
    pub ready: bool,
}

/// All bays on the dispatcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BayRack {
    pub bays: Vec<DeploymentBay>,
}

impl BayRack {
    pub fn bay_mut(&mut self, drone_type: DroneType) -> Option<&mut DeploymentBay> {
        self.bays.iter_mut().find(|b| b.drone_type == drone_type)
    }
}

/// Central energy/fuel reservoir and deployment authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatcherCore {
    pub energy: f32,
    pub max_energy: f32,
    pub energy_regen_rate: f32,
    pub fuel: f32,
    pub max_fuel: f32,
    pub fuel_per_deployment: f32,
    pub deployment_cooldown_secs: f64,
    pub last_deployment_secs: f64,
    pub drone_capacity: usize,
    /// Unit ids of currently deployed drones.
    pub deployed: Vec<u32>,
}

impl DispatcherCore {
    /// Debit energy, clamping within [0, max]. Returns false (and leaves
    /// the reservoir untouched) when the balance is insufficient.
    pub fn try_debit_energy(&mut self, amount: f32) -> bool {
        if self.energy < amount {
            return false;
        }
        self.energy = (self.energy - amount).clamp(0.0, self.max_energy);
        true
    }
}
