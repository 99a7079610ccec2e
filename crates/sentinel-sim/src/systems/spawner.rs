//! Probabilistic threat spawning, gated by level-scaled caps and intervals.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::components::{Threat, ThreatProfile};
use sentinel_core::constants::*;
use sentinel_core::enums::{ThreatCategory, ThreatStatus};
use sentinel_core::events::GameEvent;
use sentinel_core::types::Position;

use crate::world_setup;

/// Spawn gating state.
#[derive(Debug, Clone)]
pub struct SpawnState {
    pub last_spawn_secs: f64,
}

impl Default for SpawnState {
    fn default() -> Self {
        Self {
            last_spawn_secs: f64::NEG_INFINITY,
        }
    }
}

/// Current spawn interval for a level: tightens each level to a floor.
pub fn spawn_interval(level: u32) -> f64 {
    (SPAWN_INTERVAL_START - (level.max(1) - 1) as f64 * SPAWN_INTERVAL_STEP)
        .max(SPAWN_INTERVAL_FLOOR)
}

/// Active-threat ceiling for a level.
pub fn threat_cap(level: u32) -> usize {
    THREAT_CAP_BASE + level as usize * THREAT_CAP_PER_LEVEL
}

/// Attempt one spawn this tick. The gate requires the active count below
/// the level cap, the interval elapsed since the last spawn, and a
/// level-scaled probability draw.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut SpawnState,
    next_unit_id: &mut u32,
    level: u32,
    defended_point: Vec2,
    now_secs: f64,
    events: &mut Vec<GameEvent>,
) {
    let active = world
        .query_mut::<(&Threat, &ThreatProfile)>()
        .into_iter()
        .filter(|(_, (_, p))| p.status == ThreatStatus::Active)
        .count();
    if active >= threat_cap(level) {
        return;
    }
    if now_secs - state.last_spawn_secs <= spawn_interval(level) {
        return;
    }

    let chance = (SPAWN_BASE_CHANCE + level as f64 * SPAWN_CHANCE_PER_LEVEL).min(1.0);
    if rng.gen::<f64>() >= chance {
        return;
    }

    let category = pick_category(rng, level);
    let (entity, id) = world_setup::spawn_threat(
        world,
        rng,
        next_unit_id,
        category,
        level,
        defended_point,
        now_secs,
    );
    state.last_spawn_secs = now_secs;

    let position = world.get::<&Position>(entity).map(|p| p.0).unwrap_or(Vec2::ZERO);
    events.push(GameEvent::ThreatSpawned {
        threat_id: id,
        category,
        x: position.x,
        y: position.y,
    });
}

/// Category mix widens as levels climb.
fn pick_category(rng: &mut ChaCha8Rng, level: u32) -> ThreatCategory {
    let mut pool = vec![
        ThreatCategory::Drone,
        ThreatCategory::Drone,
        ThreatCategory::Drone,
    ];
    if level >= 2 {
        pool.push(ThreatCategory::Swarm);
        pool.push(ThreatCategory::Swarm);
    }
    if level >= 3 {
        pool.push(ThreatCategory::Stealth);
        pool.push(ThreatCategory::Decoy);
    }
    if level >= 4 {
        pool.push(ThreatCategory::Kamikaze);
    }
    if level >= 5 {
        pool.push(ThreatCategory::Shielded);
    }
    if level >= 8 {
        pool.push(ThreatCategory::Boss);
    }
    pool[rng.gen_range(0..pool.len())]
}
