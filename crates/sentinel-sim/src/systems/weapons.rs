//! Weapon ledger: the effector rack, per-category effectiveness, firing,
//! and the cooldown sweep.
//!
//! No shot executes without budget: readiness, ammo, and operator energy
//! are all checked before anything is debited. A low-effectiveness shot
//! may still miss after resources are spent — there is no refund.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::components::*;
use sentinel_core::constants::*;
use sentinel_core::enums::*;
use sentinel_core::events::GameEvent;
use sentinel_core::types::{Position, UnitId, Velocity};

use crate::scoring::ScoreState;
use crate::systems::power_ups::{self, ActivePowerUp};
use crate::systems::resources::BaseResources;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy)]
pub struct ShotReport {
    pub outcome: EngagementOutcome,
    /// Effectiveness against the best-engaged threat category.
    pub effectiveness: f32,
}

/// Build the full 13-channel rack.
pub fn weapon_loadout() -> Vec<Weapon> {
    WeaponKind::ALL
        .iter()
        .map(|&kind| {
            let (damage, range, cooldown_secs, max_ammo) = weapon_stats(kind);
            Weapon {
                kind,
                damage,
                range,
                cooldown_secs,
                last_fired_secs: f64::NEG_INFINITY,
                ready: true,
                ammo: max_ammo,
                max_ammo,
            }
        })
        .collect()
}

/// Static stats per channel: (damage, range, cooldown secs, max ammo).
fn weapon_stats(kind: WeaponKind) -> (f32, f32, f64, u32) {
    match kind {
        WeaponKind::Kinetic => (100.0, 120.0, 0.8, 50),
        WeaponKind::Electronic => (200.0, 150.0, 1.2, 30),
        WeaponKind::Laser => (150.0, 200.0, 0.6, 100),
        WeaponKind::Net => (50.0, 150.0, 6.0, 20),
        WeaponKind::Hpm => (300.0, 800.0, 10.0, 15),
        WeaponKind::RfTakeover => (120.0, 1200.0, 12.0, 10),
        WeaponKind::GnssDenial => (80.0, 500.0, 8.0, 25),
        WeaponKind::OpticalDazzler => (50.0, 300.0, 5.0, 40),
        WeaponKind::Acoustic => (30.0, 200.0, 5.0, 60),
        WeaponKind::DecoyBeacon => (60.0, 1000.0, 10.0, 8),
        WeaponKind::Chaff => (40.0, 100.0, 8.0, 30),
        WeaponKind::SmartSlug => (250.0, 600.0, 7.0, 12),
        WeaponKind::AiDeception => (150.0, 2000.0, 12.0, 5),
    }
}

/// Effectiveness multiplier of a weapon channel against a threat category.
/// Total over both enums — no fallback branch exists.
pub fn effectiveness(kind: WeaponKind, category: ThreatCategory) -> f32 {
    use ThreatCategory::*;
    match kind {
        WeaponKind::Kinetic => match category {
            Drone => 1.0,
            Swarm => 0.8,
            Stealth => 0.6,
            Kamikaze => 1.2,
            Decoy => 0.3,
            Shielded => 0.2,
            Boss => 0.5,
        },
        WeaponKind::Electronic => match category {
            Drone => 1.5,
            Swarm => 1.2,
            Stealth => 0.4,
            Kamikaze => 0.8,
            Decoy => 0.1,
            Shielded => 0.9,
            Boss => 0.8,
        },
        WeaponKind::Laser => match category {
            Drone => 1.1,
            Swarm => 0.9,
            Stealth => 1.8,
            Kamikaze => 0.7,
            Decoy => 0.5,
            Shielded => 1.5,
            Boss => 0.7,
        },
        WeaponKind::Net => match category {
            Drone => 1.2,
            Swarm => 0.9,
            Stealth => 0.3,
            Kamikaze => 0.8,
            Decoy => 0.1,
            Shielded => 0.1,
            Boss => 0.2,
        },
        WeaponKind::Hpm => match category {
            Drone => 2.0,
            Swarm => 2.5,
            Stealth => 1.8,
            Kamikaze => 1.5,
            Decoy => 0.2,
            Shielded => 1.2,
            Boss => 1.0,
        },
        WeaponKind::RfTakeover => match category {
            Drone => 1.8,
            Swarm => 1.5,
            Stealth => 0.2,
            Kamikaze => 0.1,
            Decoy => 2.0,
            Shielded => 0.8,
            Boss => 0.3,
        },
        WeaponKind::GnssDenial => match category {
            Drone => 1.5,
            Swarm => 2.0,
            Stealth => 0.1,
            Kamikaze => 0.3,
            Decoy => 0.1,
            Shielded => 0.2,
            Boss => 0.1,
        },
        WeaponKind::OpticalDazzler => match category {
            Drone => 1.3,
            Swarm => 1.0,
            Stealth => 0.8,
            Kamikaze => 0.6,
            Decoy => 0.1,
            Shielded => 0.1,
            Boss => 0.4,
        },
        WeaponKind::Acoustic => match category {
            Drone => 1.1,
            Swarm => 1.4,
            Stealth => 0.5,
            Kamikaze => 0.7,
            Decoy => 0.1,
            Shielded => 0.1,
            Boss => 0.3,
        },
        WeaponKind::DecoyBeacon => match category {
            Drone => 0.8,
            Swarm => 1.2,
            Stealth => 0.3,
            Kamikaze => 0.5,
            Decoy => 2.5,
            Shielded => 0.1,
            Boss => 0.2,
        },
        WeaponKind::Chaff => match category {
            Drone => 0.6,
            Swarm => 0.8,
            Stealth => 0.4,
            Kamikaze => 0.3,
            Decoy => 0.1,
            Shielded => 0.1,
            Boss => 0.1,
        },
        WeaponKind::SmartSlug => match category {
            Drone => 2.2,
            Swarm => 1.8,
            Stealth => 1.5,
            Kamikaze => 2.0,
            Decoy => 0.2,
            Shielded => 1.0,
            Boss => 1.8,
        },
        WeaponKind::AiDeception => match category {
            Drone => 1.6,
            Swarm => 2.2,
            Stealth => 1.2,
            Kamikaze => 0.8,
            Decoy => 1.8,
            Shielded => 0.6,
            Boss => 0.7,
        },
    }
}

/// Re-arm weapons whose cooldown has elapsed. Each channel recovers
/// independently; active rapid-fire power-ups shrink the effective
/// cooldown.
pub fn update_cooldowns(world: &mut World, now_secs: f64, active: &[ActivePowerUp]) {
    let factor = power_ups::cooldown_factor(active);
    for (_entity, rack) in world.query_mut::<&mut WeaponRack>() {
        for weapon in &mut rack.weapons {
            if !weapon.ready && now_secs - weapon.last_fired_secs >= weapon.cooldown_secs * factor
            {
                weapon.ready = true;
            }
        }
    }
}

/// Fire a weapon channel at a point in arena space.
///
/// Returns `None` when the shot was rejected (not ready, out of ammo or
/// energy, aim point beyond range) — a silent no-op with no state change.
#[allow(clippy::too_many_arguments)]
pub fn fire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    weapon_kind: WeaponKind,
    aim: Vec2,
    now_secs: f64,
    active_power_ups: &[ActivePowerUp],
    base: &mut BaseResources,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> Option<ShotReport> {
    let range_factor = power_ups::range_multiplier(active_power_ups);
    let damage_factor = power_ups::damage_multiplier(active_power_ups);

    // Validate and debit against the dispatcher's rack.
    let mut debited: Option<f32> = None;
    for (_entity, (_marker, position, rack)) in
        world.query_mut::<(&Dispatcher, &Position, &mut WeaponRack)>()
    {
        let weapon = match rack.get_mut(weapon_kind) {
            Some(w) => w,
            None => break,
        };
        if !weapon.ready || weapon.ammo == 0 || base.energy < FIRE_ENERGY_COST {
            break;
        }
        if position.0.distance(aim) > weapon.range * range_factor {
            break;
        }

        weapon.ammo -= 1;
        weapon.last_fired_secs = now_secs;
        weapon.ready = false;
        debited = Some(weapon.damage);
        break;
    }
    let weapon_damage = debited?;
    base.debit_shot();

    let blast_radius = match weapon_kind {
        WeaponKind::Hpm => HPM_BLAST_RADIUS,
        _ => AIM_BLAST_RADIUS,
    };

    // Collect threats caught in the blast before mutating anything.
    let candidates: Vec<(Entity, ThreatCategory)> = world
        .query::<(&Threat, &ThreatProfile, &Position)>()
        .iter()
        .filter(|(_, (_, profile, position))| {
            profile.status == ThreatStatus::Active && position.0.distance(aim) <= blast_radius
        })
        .map(|(entity, (_, profile, _))| (entity, profile.category))
        .collect();

    let mut best_effectiveness: f32 = 0.0;
    let mut any_hit = false;

    for (entity, category) in candidates {
        let eff = effectiveness(weapon_kind, category);
        best_effectiveness = best_effectiveness.max(eff);

        // Low-effectiveness engagements are probabilistic: the draw must
        // exceed 1 - effectiveness or the shot misses this threat.
        let hit = eff >= 0.5 || rng.gen::<f32>() > 1.0 - eff;
        if !hit {
            continue;
        }
        any_hit = true;

        let depleted = apply_damage(world, entity, weapon_damage * eff * damage_factor);
        if depleted {
            neutralize(world, entity, SCORE_BASE * eff, now_secs, score, events, true);
        }
    }

    let outcome = if any_hit {
        EngagementOutcome::Hit
    } else {
        EngagementOutcome::Miss
    };
    events.push(GameEvent::WeaponFired {
        weapon: weapon_kind,
        x: aim.x,
        y: aim.y,
        outcome,
    });

    Some(ShotReport {
        outcome,
        effectiveness: best_effectiveness,
    })
}

/// Drain shield first, then health. Returns true when health is depleted.
fn apply_damage(world: &mut World, entity: Entity, amount: f32) -> bool {
    let mut remaining = amount;
    if let Ok(mut profile) = world.get::<&mut ThreatProfile>(entity) {
        if let Some(shield) = profile.special.shield_strength.as_mut() {
            let absorbed = remaining.min(*shield);
            *shield -= absorbed;
            remaining -= absorbed;
        }
    }
    if remaining <= 0.0 {
        return false;
    }
    match world.get::<&mut Health>(entity) {
        Ok(mut health) => health.apply_damage(remaining),
        Err(_) => false,
    }
}

/// Transition a threat to Neutralized, bank the score, and chain-detonate
/// kamikaze warheads. Status only moves forward — an already-neutralized
/// threat is left untouched.
pub fn neutralize(
    world: &mut World,
    entity: Entity,
    base_award: f32,
    now_secs: f64,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    allow_chain: bool,
) {
    let id = match world.get::<&UnitId>(entity) {
        Ok(unit) => unit.0,
        Err(_) => return,
    };
    let (category, explosion) = {
        let mut profile = match world.get::<&mut ThreatProfile>(entity) {
            Ok(p) => p,
            Err(_) => return,
        };
        if profile.status != ThreatStatus::Active {
            return;
        }
        profile.status = ThreatStatus::Neutralized;
        profile.status_since_secs = now_secs;
        (profile.category, profile.special.explosion_radius)
    };

    if let Ok(mut velocity) = world.get::<&mut Velocity>(entity) {
        velocity.0 = Vec2::ZERO;
    }

    let (award, leveled) = score.register_kill(base_award, now_secs);
    events.push(GameEvent::ThreatNeutralized {
        threat_id: id,
        category,
        score_award: award,
    });
    if let Some(level) = leveled {
        events.push(GameEvent::LevelUp { level });
    }

    // Kamikaze warheads take nearby threats with them. The chain is a
    // single level deep: secondary victims do not detonate in turn.
    if let (Some(radius), true) = (explosion, allow_chain) {
        let center = match world.get::<&Position>(entity) {
            Ok(p) => p.0,
            Err(_) => return,
        };
        let victims: Vec<Entity> = world
            .query::<(&Threat, &ThreatProfile, &Position)>()
            .iter()
            .filter(|(e, (_, profile, position))| {
                *e != entity
                    && profile.status == ThreatStatus::Active
                    && position.0.distance(center) <= radius
            })
            .map(|(e, _)| e)
            .collect();
        for victim in victims {
            neutralize(world, victim, CHAIN_KILL_SCORE, now_secs, score, events, false);
        }
    }
}
