//! Deployment zones and the recommendation engine.
//!
//! Zones are fixed circular regions seeded from the mission profile. Their
//! threat level only rises (max of current value and each new in-zone
//! detection); coverage only rises through recorded successful deployments.

use std::collections::HashMap;

use glam::Vec2;

use sentinel_core::constants::*;
use sentinel_core::enums::{DroneType, MissionProfile, ZoneTier};

use crate::assessment::{assess, ThreatAssessment, ThreatPicture};

/// One fixed circular region of the operating area.
#[derive(Debug, Clone)]
pub struct DeploymentZone {
    pub id: &'static str,
    pub name: &'static str,
    pub center: Vec2,
    pub radius: f32,
    pub tier: ZoneTier,
    /// Danger score in [0, 1]; monotone non-decreasing.
    pub threat_level: f32,
    /// Covered fraction in [0, 1].
    pub coverage: f32,
    pub assigned_drones: Vec<u32>,
    pub recommended_types: Vec<DroneType>,
    /// Elapsed-seconds stamp of the last in-zone detection.
    pub last_detected_secs: f64,
}

impl DeploymentZone {
    fn new(
        id: &'static str,
        name: &'static str,
        center: Vec2,
        radius: f32,
        tier: ZoneTier,
        threat_level: f32,
        recommended_types: Vec<DroneType>,
    ) -> Self {
        Self {
            id,
            name,
            center,
            radius,
            tier,
            threat_level,
            coverage: 0.0,
            assigned_drones: Vec::new(),
            recommended_types,
            last_detected_secs: 0.0,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }
}

/// What the recommender needs to know about an available drone.
#[derive(Debug, Clone, Copy)]
pub struct DroneSummary {
    pub id: u32,
    pub drone_type: DroneType,
    pub energy: f32,
}

/// One deployment recommendation.
#[derive(Debug, Clone)]
pub struct DeploymentAdvice {
    pub zone_id: &'static str,
    pub drone_type: DroneType,
    pub position: Vec2,
    /// Tier weight × effectiveness, used for ordering.
    pub priority: f32,
    pub estimated_effectiveness: f32,
    pub reasoning: String,
}

/// Zone map plus the latest per-threat assessments.
#[derive(Debug, Default)]
pub struct StrategyEngine {
    zones: Vec<DeploymentZone>,
    assessments: HashMap<u32, ThreatAssessment>,
    defended_point: Vec2,
}

impl StrategyEngine {
    /// Seed zones for a protected-site layout scaled to the arena.
    pub fn new(profile: MissionProfile, arena_width: f32, arena_height: f32) -> Self {
        Self {
            zones: mission_zones(profile, arena_width, arena_height),
            assessments: HashMap::new(),
            defended_point: Vec2::new(arena_width / 2.0, arena_height / 2.0),
        }
    }

    /// Replace the zone map for a new mission profile. Threat levels and
    /// coverage reset with it.
    pub fn set_mission(&mut self, profile: MissionProfile, arena_width: f32, arena_height: f32) {
        self.zones = mission_zones(profile, arena_width, arena_height);
        self.assessments.clear();
    }

    pub fn zones(&self) -> &[DeploymentZone] {
        &self.zones
    }

    pub fn assessments(&self) -> &HashMap<u32, ThreatAssessment> {
        &self.assessments
    }

    /// Re-score every observed threat and raise in-zone threat levels.
    /// A zone's level is the max of its current value and each in-zone
    /// threat's computed level — it never decreases here.
    pub fn observe_threats(&mut self, threats: &[ThreatPicture], now_secs: f64) {
        self.assessments.clear();
        for picture in threats {
            let assessment = assess(picture, self.defended_point);
            for zone in &mut self.zones {
                if zone.contains(picture.position) {
                    zone.threat_level = zone.threat_level.max(assessment.threat_level);
                    zone.last_detected_secs = now_secs;
                }
            }
            self.assessments.insert(picture.id, assessment);
        }
    }

    /// Drop assessments for threats no longer present.
    pub fn retain_assessments(&mut self, live: impl Fn(u32) -> bool) {
        self.assessments.retain(|id, _| live(*id));
    }

    /// Generate priority-sorted deployment recommendations.
    ///
    /// Zones above the coverage skip threshold produce nothing. Each
    /// remaining zone is paired with its optimal drone types, gated on a
    /// matching available drone with sufficient energy.
    pub fn recommend(&self, available: &[DroneSummary]) -> Vec<DeploymentAdvice> {
        let mut recommendations: Vec<DeploymentAdvice> = Vec::new();

        for zone in &self.zones {
            if zone.coverage > ZONE_COVERAGE_SKIP {
                continue;
            }
            for drone_type in optimal_types(zone) {
                let candidate = available
                    .iter()
                    .find(|d| d.drone_type == drone_type && d.energy > RECOMMEND_MIN_ENERGY);
                if candidate.is_none() {
                    continue;
                }

                let effectiveness = deployment_effectiveness(zone, drone_type);
                recommendations.push(DeploymentAdvice {
                    zone_id: zone.id,
                    drone_type,
                    position: zone.center + type_offset(drone_type),
                    priority: zone.tier.weight() as f32 * effectiveness,
                    estimated_effectiveness: effectiveness,
                    reasoning: reasoning_for(zone, drone_type),
                });
            }
        }

        // Zone tier first, effectiveness second, both descending.
        recommendations.sort_by(|a, b| {
            let tier_a = self.zone_tier_weight(a.zone_id);
            let tier_b = self.zone_tier_weight(b.zone_id);
            tier_b.cmp(&tier_a).then(
                b.estimated_effectiveness
                    .total_cmp(&a.estimated_effectiveness),
            )
        });
        recommendations
    }

    /// Record a deployment outcome. Success is the only coverage mutation.
    pub fn record_deployment(&mut self, zone_id: &str, drone_id: u32, success: bool) {
        if !success {
            return;
        }
        if let Some(zone) = self.zones.iter_mut().find(|z| z.id == zone_id) {
            zone.coverage = (zone.coverage + ZONE_COVERAGE_STEP).min(1.0);
            zone.assigned_drones.push(drone_id);
        }
    }

    /// The zone containing a point, preferring the highest tier when
    /// zones overlap.
    pub fn zone_at(&self, point: Vec2) -> Option<&DeploymentZone> {
        self.zones
            .iter()
            .filter(|z| z.contains(point))
            .max_by_key(|z| z.tier.weight())
    }

    /// Remove a lost drone from zone assignments.
    pub fn release_drone(&mut self, drone_id: u32) {
        for zone in &mut self.zones {
            zone.assigned_drones.retain(|&d| d != drone_id);
        }
    }

    fn zone_tier_weight(&self, zone_id: &str) -> u32 {
        self.zones
            .iter()
            .find(|z| z.id == zone_id)
            .map(|z| z.tier.weight())
            .unwrap_or(0)
    }
}

/// Optimal drone types for a zone, priority tier and heat driving the mix.
fn optimal_types(zone: &DeploymentZone) -> Vec<DroneType> {
    let mut types = Vec::new();
    if zone.tier == ZoneTier::Critical {
        types.push(DroneType::Shield);
        types.push(DroneType::SwarmCoordinator);
    }
    if zone.threat_level > 0.7 {
        types.push(DroneType::Effector);
        types.push(DroneType::Jammer);
    } else {
        types.push(DroneType::Surveillance);
    }
    types
}

/// Per-type stand-off from the zone center.
fn type_offset(drone_type: DroneType) -> Vec2 {
    match drone_type {
        DroneType::Effector => Vec2::new(0.0, -20.0),
        DroneType::Jammer => Vec2::new(20.0, 0.0),
        DroneType::Surveillance => Vec2::new(-20.0, 20.0),
        DroneType::SwarmCoordinator => Vec2::new(0.0, -10.0),
        _ => Vec2::ZERO,
    }
}

/// Base deployment effectiveness per type, before zone bonuses.
fn base_effectiveness(drone_type: DroneType) -> f32 {
    match drone_type {
        DroneType::Shield => 0.9,
        DroneType::Effector | DroneType::SwarmCoordinator => 0.8,
        DroneType::Jammer => 0.7,
        DroneType::Surveillance => 0.6,
        _ => 0.5,
    }
}

/// Effectiveness = base + critical-zone bonus + uncovered-area bonus, capped.
fn deployment_effectiveness(zone: &DeploymentZone, drone_type: DroneType) -> f32 {
    let base = base_effectiveness(drone_type);
    let zone_bonus = if zone.tier == ZoneTier::Critical {
        CRITICAL_ZONE_BONUS
    } else {
        0.0
    };
    let coverage_bonus = (1.0 - zone.coverage) * COVERAGE_GAP_BONUS;
    (base + zone_bonus + coverage_bonus).min(1.0)
}

fn reasoning_for(zone: &DeploymentZone, drone_type: DroneType) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if zone.tier == ZoneTier::Critical {
        parts.push("critical zone protection required");
    }
    if zone.threat_level > 0.7 {
        parts.push("high threat level detected");
    }
    if zone.coverage < 0.5 {
        parts.push("zone coverage insufficient");
    }
    format!("{}; deploy {drone_type:?}", parts.join("; "))
}

/// Fixed zone tables per protected-site layout, scaled to the arena.
fn mission_zones(profile: MissionProfile, width: f32, height: f32) -> Vec<DeploymentZone> {
    match profile {
        MissionProfile::Airport => vec![
            DeploymentZone::new(
                "runway-approach",
                "Runway Approach",
                Vec2::new(width * 0.5, height * 0.2),
                150.0,
                ZoneTier::Critical,
                0.8,
                vec![DroneType::Effector, DroneType::Surveillance],
            ),
            DeploymentZone::new(
                "terminal-perimeter",
                "Terminal Perimeter",
                Vec2::new(width * 0.5, height * 0.7),
                200.0,
                ZoneTier::High,
                0.6,
                vec![DroneType::Jammer, DroneType::Shield, DroneType::Surveillance],
            ),
        ],
        MissionProfile::MilitaryBase => vec![
            DeploymentZone::new(
                "command-center",
                "Command Center",
                Vec2::new(width * 0.5, height * 0.5),
                100.0,
                ZoneTier::Critical,
                0.9,
                vec![DroneType::Shield, DroneType::SwarmCoordinator],
            ),
            DeploymentZone::new(
                "perimeter-north",
                "Northern Perimeter",
                Vec2::new(width * 0.5, height * 0.1),
                180.0,
                ZoneTier::High,
                0.7,
                vec![DroneType::Effector, DroneType::Jammer],
            ),
            DeploymentZone::new(
                "perimeter-south",
                "Southern Perimeter",
                Vec2::new(width * 0.5, height * 0.9),
                180.0,
                ZoneTier::High,
                0.7,
                vec![DroneType::Effector, DroneType::Jammer],
            ),
        ],
        MissionProfile::VipProtection => vec![
            DeploymentZone::new(
                "vip-zone",
                "VIP Protection Zone",
                Vec2::new(width * 0.5, height * 0.5),
                80.0,
                ZoneTier::Critical,
                0.8,
                vec![DroneType::Shield, DroneType::Effector],
            ),
            DeploymentZone::new(
                "approach-vectors",
                "Approach Vectors",
                Vec2::new(width * 0.5, height * 0.3),
                250.0,
                ZoneTier::High,
                0.6,
                vec![DroneType::Surveillance, DroneType::Jammer],
            ),
        ],
        MissionProfile::BorderPatrol => vec![DeploymentZone::new(
            "border-line",
            "Border Line",
            Vec2::new(width * 0.5, height * 0.1),
            300.0,
            ZoneTier::High,
            0.5,
            vec![DroneType::Surveillance, DroneType::Effector],
        )],
    }
}
