//! Auto-targeting: best-candidate selection and per-target engagement
//! pacing.
//!
//! The re-engagement cooldown is independent of weapon cooldown — it stops
//! the same target from being re-selected faster than a fixed rate even
//! when the weapon itself is ready.

use std::collections::HashMap;

use glam::Vec2;

use sentinel_core::constants::{ENGAGE_RECORD_TTL_SECS, REENGAGE_COOLDOWN_SECS, TIER_SCORE_WEIGHT};
use sentinel_core::enums::ThreatTier;

/// One targeting candidate, as seen by the selector.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub threat_id: u32,
    pub tier: ThreatTier,
    pub position: Vec2,
}

/// The selected target.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub threat_id: u32,
    pub position: Vec2,
    pub distance: f32,
}

/// Per-target engagement records.
#[derive(Debug, Default)]
pub struct TargetLedger {
    last_engagement: HashMap<u32, f64>,
}

impl TargetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the highest-priority in-range candidate: tier first, then
    /// ascending distance. Returns `None` when nothing is in range.
    pub fn select_target(
        &self,
        candidates: &[Candidate],
        reference: Vec2,
        weapon_range: f32,
    ) -> Option<Selection> {
        candidates
            .iter()
            .filter_map(|c| {
                let distance = c.position.distance(reference);
                if distance > weapon_range {
                    return None;
                }
                let score = c.tier.weight() as f32 * TIER_SCORE_WEIGHT + (weapon_range - distance);
                Some((score, c, distance))
            })
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, c, distance)| Selection {
                threat_id: c.threat_id,
                position: c.position,
                distance,
            })
    }

    /// True when the per-target cooldown has elapsed.
    pub fn can_engage(&self, threat_id: u32, now_secs: f64) -> bool {
        match self.last_engagement.get(&threat_id) {
            Some(&last) => now_secs - last >= REENGAGE_COOLDOWN_SECS,
            None => true,
        }
    }

    /// Stamp an engagement.
    pub fn record_engagement(&mut self, threat_id: u32, now_secs: f64) {
        self.last_engagement.insert(threat_id, now_secs);
    }

    /// Drop records older than the retention window, bounding memory.
    pub fn purge_stale(&mut self, now_secs: f64) {
        self.last_engagement
            .retain(|_, &mut last| now_secs - last < ENGAGE_RECORD_TTL_SECS);
    }

    #[cfg(test)]
    pub fn record_count(&self) -> usize {
        self.last_engagement.len()
    }
}
