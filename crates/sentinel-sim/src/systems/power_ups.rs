//! Transient power-ups modifying weapon performance.
//!
//! Power-ups are pure timestamp records: activation stamps the start, the
//! per-tick sweep drops entries whose duration has elapsed.

use sentinel_core::enums::PowerUpKind;
use sentinel_core::events::GameEvent;

/// One running power-up.
#[derive(Debug, Clone)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub activated_at_secs: f64,
    pub duration_secs: f64,
}

impl ActivePowerUp {
    pub fn new(kind: PowerUpKind, now_secs: f64) -> Self {
        Self {
            kind,
            activated_at_secs: now_secs,
            duration_secs: duration_for(kind),
        }
    }

    pub fn remaining_secs(&self, now_secs: f64) -> f64 {
        (self.activated_at_secs + self.duration_secs - now_secs).max(0.0)
    }

    fn expired(&self, now_secs: f64) -> bool {
        now_secs - self.activated_at_secs >= self.duration_secs
    }
}

/// Fixed duration per power-up kind.
pub fn duration_for(kind: PowerUpKind) -> f64 {
    match kind {
        PowerUpKind::RapidFire => 8.0,
        PowerUpKind::DamageBoost => 10.0,
        PowerUpKind::AreaEffect => 6.0,
        PowerUpKind::RangeBoost => 12.0,
    }
}

/// Remove expired power-ups, emitting an event for each.
pub fn expire(active: &mut Vec<ActivePowerUp>, now_secs: f64, events: &mut Vec<GameEvent>) {
    active.retain(|p| {
        if p.expired(now_secs) {
            events.push(GameEvent::PowerUpExpired { kind: p.kind });
            false
        } else {
            true
        }
    });
}

/// Multiplier applied to weapon damage.
pub fn damage_multiplier(active: &[ActivePowerUp]) -> f32 {
    if active.iter().any(|p| p.kind == PowerUpKind::DamageBoost) {
        1.5
    } else {
        1.0
    }
}

/// Multiplier applied to weapon cooldown (smaller is faster).
pub fn cooldown_factor(active: &[ActivePowerUp]) -> f64 {
    if active.iter().any(|p| p.kind == PowerUpKind::RapidFire) {
        0.5
    } else {
        1.0
    }
}

/// Multiplier applied to weapon range. Area and range boosts stack.
pub fn range_multiplier(active: &[ActivePowerUp]) -> f32 {
    let mut factor = 1.0;
    if active.iter().any(|p| p.kind == PowerUpKind::AreaEffect) {
        factor *= 2.0;
    }
    if active.iter().any(|p| p.kind == PowerUpKind::RangeBoost) {
        factor *= 1.5;
    }
    factor
}
