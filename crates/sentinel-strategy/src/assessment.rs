//! Per-threat scoring: level, priority, and recommended response.

use glam::Vec2;

use sentinel_core::constants::{THREAT_SPEED_BONUS, THREAT_SPEED_NORM};
use sentinel_core::enums::{ResponseDoctrine, ThreatCategory, ZoneTier};

/// The facts the assessor needs about one threat.
#[derive(Debug, Clone, Copy)]
pub struct ThreatPicture {
    pub id: u32,
    pub category: ThreatCategory,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Derived assessment of one threat.
#[derive(Debug, Clone)]
pub struct ThreatAssessment {
    pub id: u32,
    pub category: ThreatCategory,
    pub position: Vec2,
    /// Combined danger score in [0, 1].
    pub threat_level: f32,
    pub priority: ZoneTier,
    pub response: ResponseDoctrine,
    /// Seconds until arrival at the defended point at current speed.
    pub estimated_arrival_secs: f32,
}

/// Score a threat from its category and speed.
///
/// Level = category base + speed-scaled bonus, capped at 1.
pub fn threat_level(category: ThreatCategory, speed: f32) -> f32 {
    let base = match category {
        ThreatCategory::Drone => 0.6,
        ThreatCategory::Swarm => 0.7,
        ThreatCategory::Stealth => 0.8,
        ThreatCategory::Kamikaze => 0.9,
        ThreatCategory::Decoy => 0.3,
        ThreatCategory::Shielded => 0.7,
        ThreatCategory::Boss => 0.85,
    };
    let speed_factor = (speed / THREAT_SPEED_NORM).min(1.0);
    (base + speed_factor * THREAT_SPEED_BONUS).min(1.0)
}

/// Priority from the combined level-and-speed score.
pub fn threat_priority(level: f32, speed: f32) -> ZoneTier {
    let combined = level + speed / (2.0 * THREAT_SPEED_NORM);
    if combined >= 1.2 {
        ZoneTier::Critical
    } else if combined >= 0.9 {
        ZoneTier::High
    } else if combined >= 0.6 {
        ZoneTier::Medium
    } else {
        ZoneTier::Low
    }
}

/// Doctrine for countering a threat category.
pub fn response_for(category: ThreatCategory, level: f32) -> ResponseDoctrine {
    match category {
        ThreatCategory::Swarm => ResponseDoctrine::MultiTarget,
        ThreatCategory::Stealth => ResponseDoctrine::Surveil,
        ThreatCategory::Shielded => ResponseDoctrine::Jam,
        ThreatCategory::Kamikaze => ResponseDoctrine::Intercept,
        ThreatCategory::Decoy => ResponseDoctrine::Evade,
        ThreatCategory::Drone | ThreatCategory::Boss => {
            if level > 0.7 {
                ResponseDoctrine::Intercept
            } else {
                ResponseDoctrine::Surveil
            }
        }
    }
}

/// Full assessment of one threat relative to the defended point.
pub fn assess(picture: &ThreatPicture, defended_point: Vec2) -> ThreatAssessment {
    let speed = picture.velocity.length();
    let level = threat_level(picture.category, speed);
    let distance = picture.position.distance(defended_point);
    ThreatAssessment {
        id: picture.id,
        category: picture.category,
        position: picture.position,
        threat_level: level,
        priority: threat_priority(level, speed),
        response: response_for(picture.category, level),
        estimated_arrival_secs: if speed > 0.0 {
            distance / speed
        } else {
            f32::INFINITY
        },
    }
}
