//! Per-tick threat movement behaviors.
//!
//! `step` computes the next position for one threat from its behavior,
//! current position, the defended point, and elapsed time. Behaviors never
//! divide by a zero distance: a threat sitting exactly on the defended
//! point holds position.

use glam::Vec2;

use sentinel_core::constants::*;
use sentinel_core::enums::ThreatBehavior;

/// Input to the behavior step for a single threat.
pub struct BehaviorContext {
    pub behavior: ThreatBehavior,
    pub position: Vec2,
    /// The defended point the threat is drawn toward.
    pub target: Vec2,
    /// Cruise speed in units per second.
    pub speed: f32,
    /// Evasion scalar in [0, 1].
    pub evasion_level: f32,
    /// Current elapsed simulation seconds.
    pub elapsed_secs: f64,
    /// Elapsed-seconds stamp of spawn, de-synchronizing weave phases.
    pub spawned_at_secs: f64,
    /// Seconds covered by this step.
    pub dt: f64,
}

/// Compute the next position for one threat.
pub fn step(ctx: &BehaviorContext) -> Vec2 {
    let offset = ctx.target - ctx.position;
    let distance = offset.length();
    let step_len = ctx.speed * ctx.dt as f32;

    match ctx.behavior {
        ThreatBehavior::Direct => {
            if distance > DIRECT_STOP_EPSILON {
                ctx.position + (offset / distance) * step_len
            } else {
                ctx.position
            }
        }
        ThreatBehavior::Evasive => {
            if distance <= f32::EPSILON {
                return ctx.position;
            }
            let toward = offset / distance;
            if distance < EVASIVE_NEAR_FIELD {
                // Inside the near field: flee, scaled by evasion.
                ctx.position - toward * step_len * ctx.evasion_level
            } else {
                ctx.position + toward * step_len
            }
        }
        ThreatBehavior::Zigzag => {
            if distance <= DIRECT_STOP_EPSILON {
                return ctx.position;
            }
            let toward = offset / distance;
            let phase = (ctx.elapsed_secs * ZIGZAG_FREQUENCY + ctx.spawned_at_secs).sin() as f32;
            let weave = phase * ctx.evasion_level * ZIGZAG_AMPLITUDE;
            let perpendicular = Vec2::new(-toward.y, toward.x);
            ctx.position + toward * step_len + perpendicular * weave
        }
        ThreatBehavior::Hover => {
            if distance <= f32::EPSILON {
                return ctx.position;
            }
            let standoff = HOVER_BASE_STANDOFF + HOVER_EVASION_STANDOFF * ctx.evasion_level;
            let toward = offset / distance;
            if distance > standoff + HOVER_DEAD_BAND {
                ctx.position + toward * step_len
            } else if distance < standoff - HOVER_DEAD_BAND {
                ctx.position - toward * step_len
            } else {
                ctx.position
            }
        }
    }
}
