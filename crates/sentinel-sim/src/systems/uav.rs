//! Drone operations: type configs, deployment, movement, and recovery.

use hecs::{Entity, World};

use sentinel_core::components::*;
use sentinel_core::constants::*;
use sentinel_core::enums::{DroneMission, DroneStatus, DroneType};
use sentinel_core::events::GameEvent;
use sentinel_core::types::{Position, UnitId};

/// Static parameters for a drone role.
pub struct DroneConfig {
    /// Cruise speed in units per second.
    pub speed: f32,
    pub health: f32,
    pub energy: f32,
    pub mission: DroneMission,
}

/// Per-role configuration, total over all 17 roles.
pub fn drone_config(drone_type: DroneType) -> DroneConfig {
    use DroneMission::*;
    let (speed, health, energy, mission) = match drone_type {
        DroneType::Effector => (120.0, 100.0, 80.0, Intercept),
        DroneType::Jammer => (90.0, 80.0, 100.0, Jam),
        DroneType::Surveillance => (60.0, 60.0, 120.0, Surveil),
        DroneType::Shield => (48.0, 150.0, 200.0, Shield),
        DroneType::SwarmCoordinator => (72.0, 120.0, 150.0, Coordinate),
        DroneType::DecoyUav => (100.0, 40.0, 60.0, Patrol),
        DroneType::NetCapture => (80.0, 70.0, 90.0, Intercept),
        DroneType::Relay => (70.0, 60.0, 140.0, Coordinate),
        DroneType::OverwatchTether => (40.0, 110.0, 250.0, Surveil),
        DroneType::Recovery => (90.0, 90.0, 110.0, Patrol),
        DroneType::LureSwarm => (110.0, 30.0, 50.0, Patrol),
        DroneType::PerimeterSentry => (55.0, 100.0, 160.0, Surveil),
        DroneType::HpmPod => (65.0, 90.0, 130.0, Jam),
        DroneType::LidarMapper => (75.0, 50.0, 100.0, Surveil),
        DroneType::MicroDecoySwarm => (115.0, 25.0, 40.0, Patrol),
        DroneType::OpticalMesh => (70.0, 55.0, 120.0, Coordinate),
        DroneType::Spotter => (95.0, 45.0, 90.0, Surveil),
    };
    DroneConfig {
        speed,
        health,
        energy,
        mission,
    }
}

/// Re-arm bays whose launch cooldown has elapsed.
pub fn update_bay_readiness(world: &mut World, now_secs: f64) {
    for (_entity, rack) in world.query_mut::<&mut BayRack>() {
        for bay in &mut rack.bays {
            if !bay.ready && now_secs - bay.last_deployment_secs >= bay.cooldown_secs {
                bay.ready = true;
            }
        }
    }
}

/// A drone recovered into its bay this tick.
pub struct Recovered {
    pub entity: Entity,
    pub drone_id: u32,
    pub drone_type: DroneType,
}

/// Move drones toward their waypoints and recover returning drones that
/// reach the dispatcher. Arrival is distance < 10 units.
pub fn update_positions(world: &mut World, dt: f64, events: &mut Vec<GameEvent>) -> Vec<Recovered> {
    let mut recovered: Vec<Recovered> = Vec::new();

    for (entity, (_marker, unit, airframe, position)) in
        world.query_mut::<(&Uav, &UnitId, &mut Airframe, &mut Position)>()
    {
        if airframe.status == DroneStatus::Destroyed {
            continue;
        }

        let offset = airframe.target - position.0;
        let distance = offset.length();

        if distance < DRONE_ARRIVAL_RADIUS {
            match airframe.status {
                DroneStatus::Returning => {
                    recovered.push(Recovered {
                        entity,
                        drone_id: unit.0,
                        drone_type: airframe.drone_type,
                    });
                }
                DroneStatus::Deploying => {
                    airframe.status = DroneStatus::Active;
                }
                _ => {}
            }
            continue;
        }

        let step = (airframe.speed * dt as f32).min(distance);
        position.0 += offset / distance * step;
    }

    // Restock bays and release dispatcher slots for recovered drones.
    for rec in &recovered {
        for (_entity, (core, bays)) in world.query_mut::<(&mut DispatcherCore, &mut BayRack)>() {
            core.deployed.retain(|&id| id != rec.drone_id);
            if let Some(bay) = bays.bay_mut(rec.drone_type) {
                bay.current = (bay.current + 1).min(bay.capacity);
            }
        }
        events.push(GameEvent::DroneRecovered {
            drone_id: rec.drone_id,
            drone_type: rec.drone_type,
        });
    }
    for rec in &recovered {
        let _ = world.despawn(rec.entity);
    }

    recovered
}
