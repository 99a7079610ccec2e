//! Snapshot system: queries the ECS world and builds a complete
//! `SimSnapshot`. Read-only — it never modifies the world.

use hecs::World;

use sentinel_core::components::*;
use sentinel_core::enums::*;
use sentinel_core::events::GameEvent;
use sentinel_core::state::*;
use sentinel_core::types::{Position, SimTime, UnitId};

use sentinel_formation::FormationSet;
use sentinel_strategy::{DeploymentAdvice, StrategyEngine};

use crate::scoring::ScoreState;
use crate::systems::power_ups::ActivePowerUp;
use crate::systems::resources::BaseResources;

/// Everything the snapshot builder reads besides the world.
pub struct SnapshotInputs<'a> {
    pub time: &'a SimTime,
    pub phase: SimPhase,
    pub automation: AutomationMode,
    pub mission: MissionProfile,
    pub score: &'a ScoreState,
    pub base: &'a BaseResources,
    pub power_ups: &'a [ActivePowerUp],
    pub strategy: &'a StrategyEngine,
    pub recommendations: &'a [DeploymentAdvice],
    pub formations: &'a FormationSet,
    pub selected_threats: &'a [u32],
    pub events: Vec<GameEvent>,
}

/// Build a complete snapshot from the current world state.
pub fn build(world: &World, inputs: SnapshotInputs<'_>) -> SimSnapshot {
    let now_secs = inputs.time.elapsed_secs;

    SimSnapshot {
        time: *inputs.time,
        phase: inputs.phase,
        automation: inputs.automation,
        mission: inputs.mission,
        score: ScoreView {
            score: inputs.score.score,
            level: inputs.score.level,
            neutralized: inputs.score.neutralized,
            combo_multiplier: inputs.score.combo,
        },
        resources: ResourceView {
            energy: inputs.base.energy,
            max_energy: inputs.base.max_energy,
            cooling: inputs.base.cooling,
            max_cooling: inputs.base.max_cooling,
        },
        dispatcher: build_dispatcher(world),
        threats: build_threats(world, inputs.selected_threats, now_secs),
        drones: build_drones(world),
        weapons: build_weapons(world, now_secs),
        bays: build_bays(world),
        zones: build_zones(inputs.strategy),
        recommendations: build_recommendations(inputs.recommendations),
        formations: build_formations(inputs.formations),
        power_ups: inputs
            .power_ups
            .iter()
            .map(|p| PowerUpView {
                kind: p.kind,
                remaining_secs: p.remaining_secs(now_secs),
            })
            .collect(),
        events: inputs.events,
    }
}

fn build_dispatcher(world: &World) -> DispatcherView {
    world
        .query::<(&Dispatcher, &Position, &DispatcherCore)>()
        .iter()
        .next()
        .map(|(_, (_, position, core))| DispatcherView {
            position: *position,
            energy: core.energy,
            max_energy: core.max_energy,
            fuel: core.fuel,
            max_fuel: core.max_fuel,
            deployed_count: core.deployed.len(),
            drone_capacity: core.drone_capacity,
        })
        .unwrap_or_default()
}

fn build_threats(world: &World, selected: &[u32], now_secs: f64) -> Vec<ThreatView> {
    let mut threats: Vec<ThreatView> = world
        .query::<(&Threat, &UnitId, &ThreatProfile, &Position, &Health, &Trail)>()
        .iter()
        .map(|(_, (_, unit, profile, position, health, trail))| ThreatView {
            id: unit.0,
            category: profile.category,
            behavior: profile.behavior,
            status: profile.status,
            tier: profile.tier,
            position: *position,
            health: health.current,
            max_health: health.max,
            shield_strength: profile.special.shield_strength,
            observability: observability(profile, now_secs),
            selected: selected.contains(&unit.0),
            trail: trail.samples.clone(),
        })
        .collect();
    threats.sort_by_key(|t| t.id);
    threats
}

/// Render opacity. Stealth airframes pulse; everything else is solid.
fn observability(profile: &ThreatProfile, now_secs: f64) -> f32 {
    match profile.category {
        ThreatCategory::Stealth => {
            let phase = (now_secs / 2.0 + profile.spawned_at_secs).sin() as f32;
            0.3 + phase * 0.3
        }
        _ => 1.0,
    }
}

fn build_drones(world: &World) -> Vec<DroneView> {
    let mut drones: Vec<DroneView> = world
        .query::<(&Uav, &UnitId, &Airframe, &Position, &Health)>()
        .iter()
        .map(|(_, (_, unit, airframe, position, health))| DroneView {
            id: unit.0,
            drone_type: airframe.drone_type,
            mission: airframe.mission,
            status: airframe.status,
            position: *position,
            target: Position(airframe.target),
            health: health.current,
            max_health: health.max,
            energy: airframe.energy,
            max_energy: airframe.max_energy,
        })
        .collect();
    drones.sort_by_key(|d| d.id);
    drones
}

fn build_weapons(world: &World, now_secs: f64) -> Vec<WeaponView> {
    world
        .query::<&WeaponRack>()
        .iter()
        .next()
        .map(|(_, rack)| {
            rack.weapons
                .iter()
                .map(|w| WeaponView {
                    kind: w.kind,
                    ready: w.ready,
                    ammo: w.ammo,
                    max_ammo: w.max_ammo,
                    cooldown_fraction: if w.ready || w.cooldown_secs <= 0.0 {
                        0.0
                    } else {
                        let elapsed = now_secs - w.last_fired_secs;
                        (1.0 - elapsed / w.cooldown_secs).clamp(0.0, 1.0) as f32
                    },
                    selected: w.kind == rack.selected,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn build_bays(world: &World) -> Vec<BayView> {
    world
        .query::<&BayRack>()
        .iter()
        .next()
        .map(|(_, rack)| {
            rack.bays
                .iter()
                .map(|b| BayView {
                    drone_type: b.drone_type,
                    current: b.current,
                    capacity: b.capacity,
                    ready: b.ready,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn build_zones(strategy: &StrategyEngine) -> Vec<ZoneView> {
    strategy
        .zones()
        .iter()
        .map(|z| ZoneView {
            id: z.id.to_string(),
            name: z.name.to_string(),
            center: Position(z.center),
            radius: z.radius,
            tier: z.tier,
            threat_level: z.threat_level,
            coverage: z.coverage,
            assigned_drones: z.assigned_drones.clone(),
            recommended_types: z.recommended_types.clone(),
        })
        .collect()
}

fn build_recommendations(recommendations: &[DeploymentAdvice]) -> Vec<DeploymentAdviceView> {
    recommendations
        .iter()
        .map(|r| DeploymentAdviceView {
            zone_id: r.zone_id.to_string(),
            drone_type: r.drone_type,
            position: Position(r.position),
            estimated_effectiveness: r.estimated_effectiveness,
            reasoning: r.reasoning.clone(),
        })
        .collect()
}

fn build_formations(formations: &FormationSet) -> Vec<FormationView> {
    formations
        .iter_ordered()
        .into_iter()
        .map(|f| FormationView {
            id: f.id,
            pattern: f.spec.pattern,
            center: Position(f.spec.center),
            stations: sentinel_formation::compute_positions(&f.spec, &f.members)
                .into_iter()
                .map(|s| StationView {
                    drone_id: s.drone_id,
                    position: Position(s.station),
                    role: s.role,
                })
                .collect(),
        })
        .collect()
}
