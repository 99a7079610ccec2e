//! Resource regeneration: operator pools, dispatcher reservoir, and drone
//! energy drain.

use hecs::World;

use sentinel_core::components::{Airframe, Dispatcher, DispatcherCore, Uav};
use sentinel_core::constants::*;
use sentinel_core::enums::DroneStatus;

/// Operator-side pools feeding weapon fire.
#[derive(Debug, Clone)]
pub struct BaseResources {
    pub energy: f32,
    pub max_energy: f32,
    pub cooling: f32,
    pub max_cooling: f32,
}

impl Default for BaseResources {
    fn default() -> Self {
        Self {
            energy: BASE_ENERGY_MAX,
            max_energy: BASE_ENERGY_MAX,
            cooling: BASE_COOLING_MAX,
            max_cooling: BASE_COOLING_MAX,
        }
    }
}

impl BaseResources {
    /// Debit a shot's cost. The energy check happens before this call;
    /// both pools clamp at zero.
    pub fn debit_shot(&mut self) {
        self.energy = (self.energy - FIRE_ENERGY_COST).max(0.0);
        self.cooling = (self.cooling - FIRE_COOLING_COST).max(0.0);
    }
}

/// Regenerate all pools proportional to elapsed time and drain deployed
/// drone batteries. Drones that run dry are marked destroyed.
pub fn run(world: &mut World, base: &mut BaseResources, dt: f64) {
    let dt = dt as f32;

    base.energy = (base.energy + BASE_ENERGY_REGEN * dt).min(base.max_energy);
    base.cooling = (base.cooling + BASE_COOLING_REGEN * dt).min(base.max_cooling);

    for (_entity, (_marker, core)) in world.query_mut::<(&Dispatcher, &mut DispatcherCore)>() {
        core.energy = (core.energy + core.energy_regen_rate * dt).clamp(0.0, core.max_energy);
    }

    for (_entity, (_marker, airframe)) in world.query_mut::<(&Uav, &mut Airframe)>() {
        if airframe.status == DroneStatus::Destroyed {
            continue;
        }
        airframe.energy = (airframe.energy - DRONE_ENERGY_DRAIN * dt).max(0.0);
        if airframe.energy <= 0.0 {
            airframe.status = DroneStatus::Destroyed;
        }
    }
}
