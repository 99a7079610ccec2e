//! Cleanup system: removes entities whose lifecycle has ended.
//!
//! Craters despawn after their time-to-live; destroyed drones are released
//! from the dispatcher. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use hecs::{Entity, World};

use sentinel_core::components::{Airframe, DispatcherCore, Threat, ThreatProfile, Uav};
use sentinel_core::constants::CRATER_TTL_SECS;
use sentinel_core::enums::{DroneStatus, ThreatStatus};
use sentinel_core::types::UnitId;

/// Unit ids removed from the world this tick.
#[derive(Debug, Default)]
pub struct RemovedUnits {
    pub threats: Vec<u32>,
    pub drones: Vec<u32>,
}

/// Despawn expired craters and destroyed drones.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, now_secs: f64) -> RemovedUnits {
    despawn_buffer.clear();
    let mut removed = RemovedUnits::default();

    for (entity, (_marker, unit, profile)) in
        world.query_mut::<(&Threat, &UnitId, &ThreatProfile)>()
    {
        if profile.status == ThreatStatus::Crater
            && now_secs - profile.status_since_secs >= CRATER_TTL_SECS
        {
            despawn_buffer.push(entity);
            removed.threats.push(unit.0);
        }
    }

    for (entity, (_marker, unit, airframe)) in world.query_mut::<(&Uav, &UnitId, &Airframe)>() {
        if airframe.status == DroneStatus::Destroyed {
            despawn_buffer.push(entity);
            removed.drones.push(unit.0);
        }
    }

    for (_entity, core) in world.query_mut::<&mut DispatcherCore>() {
        core.deployed.retain(|id| !removed.drones.contains(id));
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
