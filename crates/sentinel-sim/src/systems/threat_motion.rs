//! Threat movement and lifecycle system.
//!
//! Steps every active threat through its behavior function, appends trail
//! samples, and advances the neutralized → crater fade. Behavior selection
//! happened at spawn; this system never re-randomizes it.

use glam::Vec2;
use hecs::World;

use sentinel_core::components::{Threat, ThreatProfile, Trail};
use sentinel_core::constants::*;
use sentinel_core::enums::ThreatStatus;
use sentinel_core::types::{Position, Velocity};

use sentinel_threat_ai::behavior::{step, BehaviorContext};

/// Move all active threats toward the defended point and record trails.
pub fn run(world: &mut World, defended_point: Vec2, now_secs: f64, dt: f64) {
    for (_entity, (_marker, profile, position, velocity, trail)) in world.query_mut::<(
        &Threat,
        &mut ThreatProfile,
        &mut Position,
        &mut Velocity,
        &mut Trail,
    )>() {
        match profile.status {
            ThreatStatus::Active => {
                let ctx = BehaviorContext {
                    behavior: profile.behavior,
                    position: position.0,
                    target: defended_point,
                    speed: profile.speed,
                    evasion_level: profile.evasion_level,
                    elapsed_secs: now_secs,
                    spawned_at_secs: profile.spawned_at_secs,
                    dt,
                };
                let next = step(&ctx);

                trail.push(*position, now_secs);
                velocity.0 = if dt > 0.0 {
                    (next - position.0) / dt as f32
                } else {
                    Vec2::ZERO
                };
                position.0 = next;
            }
            ThreatStatus::Neutralized => {
                // Hold at the crash site until the fade completes.
                if now_secs - profile.status_since_secs >= NEUTRALIZED_FADE_SECS {
                    profile.status = ThreatStatus::Crater;
                    profile.status_since_secs = now_secs;
                }
            }
            ThreatStatus::Crater => {}
        }
    }
}
