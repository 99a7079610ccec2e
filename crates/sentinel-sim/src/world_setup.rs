//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the dispatcher (with its weapon rack and deployment bays) and
//! threat entities with appropriate component bundles.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::components::*;
use sentinel_core::constants::*;
use sentinel_core::enums::*;
use sentinel_core::types::{Position, UnitId, Velocity};

use sentinel_threat_ai::profiles::{category_profile, difficulty_scaling, evasion_for_level};

use crate::systems::weapons::weapon_loadout;

/// Spawn the dispatcher at the arena center with a full rack and bays.
pub fn spawn_dispatcher(world: &mut World, next_unit_id: &mut u32, center: Vec2) -> hecs::Entity {
    let id = *next_unit_id;
    *next_unit_id += 1;

    let core = DispatcherCore {
        energy: DISPATCHER_ENERGY_MAX,
        max_energy: DISPATCHER_ENERGY_MAX,
        energy_regen_rate: DISPATCHER_ENERGY_REGEN,
        fuel: DISPATCHER_FUEL_MAX,
        max_fuel: DISPATCHER_FUEL_MAX,
        fuel_per_deployment: FUEL_PER_DEPLOYMENT,
        deployment_cooldown_secs: DEPLOYMENT_COOLDOWN_SECS,
        last_deployment_secs: f64::NEG_INFINITY,
        drone_capacity: DISPATCHER_DRONE_CAPACITY,
        deployed: Vec::new(),
    };

    let rack = WeaponRack {
        weapons: weapon_loadout(),
        selected: WeaponKind::Kinetic,
    };

    world.spawn((
        Dispatcher,
        UnitId(id),
        Position(center),
        core,
        rack,
        default_bay_rack(),
    ))
}

/// Default bay loadout: the five staffed bays. Drone types without a bay
/// cannot be deployed until one is fitted.
fn default_bay_rack() -> BayRack {
    let table: [(DroneType, u32, f64); 5] = [
        (DroneType::Effector, 4, 5.0),
        (DroneType::Jammer, 3, 8.0),
        (DroneType::Surveillance, 2, 6.0),
        (DroneType::Shield, 2, 10.0),
        (DroneType::SwarmCoordinator, 1, 12.0),
    ];
    BayRack {
        bays: table
            .iter()
            .map(|&(drone_type, capacity, cooldown_secs)| DeploymentBay {
                drone_type,
                capacity,
                current: capacity,
                cooldown_secs,
                last_deployment_secs: f64::NEG_INFINITY,
                ready: true,
            })
            .collect(),
    }
}

/// Spawn a threat of the given category on the spawn ring, scaled to the
/// current level.
pub fn spawn_threat(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
    category: ThreatCategory,
    level: u32,
    defended_point: Vec2,
    now_secs: f64,
) -> (hecs::Entity, u32) {
    let profile = category_profile(category);
    let scaling = difficulty_scaling(level);

    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let position = defended_point + Vec2::new(angle.cos(), angle.sin()) * SPAWN_RING_RADIUS;

    let speed = profile.speed * scaling.speed_multiplier;
    let health = profile.health * scaling.health_multiplier;

    let id = *next_unit_id;
    *next_unit_id += 1;

    let threat_profile = ThreatProfile {
        category,
        behavior: profile.behavior,
        evasion_level: evasion_for_level(level),
        speed,
        tier: profile.tier,
        status: ThreatStatus::Active,
        status_since_secs: now_secs,
        spawned_at_secs: now_secs,
        special: profile.special,
    };

    let velocity = Velocity((defended_point - position).normalize_or_zero() * speed);

    let entity = world.spawn((
        Threat,
        UnitId(id),
        Position(position),
        velocity,
        Health::full(health),
        Trail::default(),
        threat_profile,
    ));
    (entity, id)
}
