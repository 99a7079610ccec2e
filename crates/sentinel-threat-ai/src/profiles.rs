//! Category-specific spawn profiles and difficulty scaling.
//!
//! Consolidates per-category parameters applied when a threat is created.

use sentinel_core::components::SpecialTraits;
use sentinel_core::constants::{DIFFICULTY_STEP, HEALTH_SCALE_MAX, SPEED_SCALE_MAX};
use sentinel_core::enums::{ThreatBehavior, ThreatCategory, ThreatTier};

/// Base parameters for a threat category before difficulty scaling.
pub struct CategoryProfile {
    pub health: f32,
    /// Cruise speed in units per second.
    pub speed: f32,
    pub behavior: ThreatBehavior,
    pub tier: ThreatTier,
    pub special: SpecialTraits,
}

/// Get the spawn profile for a category.
pub fn category_profile(category: ThreatCategory) -> CategoryProfile {
    match category {
        ThreatCategory::Drone => CategoryProfile {
            health: 100.0,
            speed: 50.0,
            behavior: ThreatBehavior::Direct,
            tier: ThreatTier::Medium,
            special: SpecialTraits::default(),
        },
        ThreatCategory::Swarm => CategoryProfile {
            health: 50.0,
            speed: 70.0,
            behavior: ThreatBehavior::Zigzag,
            tier: ThreatTier::Medium,
            special: SpecialTraits::default(),
        },
        ThreatCategory::Stealth => CategoryProfile {
            health: 80.0,
            speed: 60.0,
            behavior: ThreatBehavior::Evasive,
            tier: ThreatTier::Medium,
            special: SpecialTraits::default(),
        },
        ThreatCategory::Kamikaze => CategoryProfile {
            health: 120.0,
            speed: 100.0,
            behavior: ThreatBehavior::Direct,
            tier: ThreatTier::High,
            special: SpecialTraits {
                explosion_radius: Some(80.0),
                ..SpecialTraits::default()
            },
        },
        ThreatCategory::Decoy => CategoryProfile {
            health: 40.0,
            speed: 60.0,
            behavior: ThreatBehavior::Hover,
            tier: ThreatTier::Low,
            special: SpecialTraits {
                is_decoy: true,
                ..SpecialTraits::default()
            },
        },
        ThreatCategory::Shielded => CategoryProfile {
            health: 150.0,
            speed: 45.0,
            behavior: ThreatBehavior::Direct,
            tier: ThreatTier::Medium,
            special: SpecialTraits {
                shield_strength: Some(100.0),
                ..SpecialTraits::default()
            },
        },
        ThreatCategory::Boss => CategoryProfile {
            health: 500.0,
            speed: 30.0,
            behavior: ThreatBehavior::Hover,
            tier: ThreatTier::High,
            special: SpecialTraits {
                shield_strength: Some(200.0),
                explosion_radius: Some(120.0),
                ..SpecialTraits::default()
            },
        },
    }
}

/// Per-level multipliers applied to base health and speed at spawn.
pub struct DifficultyScaling {
    pub speed_multiplier: f32,
    pub health_multiplier: f32,
}

/// Difficulty multipliers for a simulation level (1-based). Level 1 is
/// exactly 1.0 so freshly spawned threats match their base profile.
pub fn difficulty_scaling(level: u32) -> DifficultyScaling {
    let steps = (level.max(1) - 1) as f32;
    DifficultyScaling {
        speed_multiplier: (1.0 + steps * 0.1).min(SPEED_SCALE_MAX),
        health_multiplier: (1.0 + steps * DIFFICULTY_STEP).min(HEALTH_SCALE_MAX),
    }
}

/// Evasion level for a simulation level. Grows with difficulty, capped at 1.
pub fn evasion_for_level(level: u32) -> f32 {
    (0.2 + (level.max(1) - 1) as f32 * 0.08).min(1.0)
}
