//! Enumeration types used throughout the simulation.
//!
//! Every entity "type" is a closed enum with exhaustive matching — there are
//! no string-keyed configuration tables, so an unknown type is a compile
//! error rather than a runtime fallback.

use serde::{Deserialize, Serialize};

/// Hostile airframe category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatCategory {
    /// Commercial quadcopter class — the baseline threat.
    Drone,
    /// Coordinated group member, fast and fragile.
    Swarm,
    /// Low-observable airframe with reduced sensor return.
    Stealth,
    /// One-way attack drone carrying a warhead.
    Kamikaze,
    /// Harmless lure meant to waste interceptor resources.
    Decoy,
    /// Hardened airframe with an ablative shield layer.
    Shielded,
    /// Heavy multi-rotor command platform.
    Boss,
}

/// Movement behavior, fixed at spawn time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatBehavior {
    /// Straight pursuit of the defended point.
    #[default]
    Direct,
    /// Drawn in at range, flees inside the near-field threshold.
    Evasive,
    /// Direct pursuit with a perpendicular sine weave.
    Zigzag,
    /// Holds a standoff ring around the defended point.
    Hover,
}

/// Threat lifecycle status. Transitions are forward-only:
/// Active → Neutralized → Crater → despawned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatStatus {
    #[default]
    Active,
    /// Brought down; held in place while the kill marker fades.
    Neutralized,
    /// Impact site, despawned after a fixed time-to-live.
    Crater,
}

/// Targeting priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatTier {
    High,
    #[default]
    Medium,
    Low,
}

impl ThreatTier {
    /// Numeric weight used by targeting score (higher engages first).
    pub fn weight(self) -> u32 {
        match self {
            ThreatTier::High => 3,
            ThreatTier::Medium => 2,
            ThreatTier::Low => 1,
        }
    }
}

/// Interceptor unit role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneType {
    /// Kinetic effector — the primary hard-kill interceptor.
    Effector,
    /// RF jamming platform.
    Jammer,
    /// Wide-area sensor picket.
    Surveillance,
    /// Mobile shield projector for point defense.
    Shield,
    /// Coordinates friendly swarm tactics.
    SwarmCoordinator,
    /// Expendable false-target emitter.
    DecoyUav,
    /// Net-capture interceptor for intact takedowns.
    NetCapture,
    /// Communications relay extending command range.
    Relay,
    /// Tethered persistent overwatch mast.
    OverwatchTether,
    /// Retrieves downed airframes for exploitation.
    Recovery,
    /// Disposable lure swarm.
    LureSwarm,
    /// Fixed patrol along the perimeter fence.
    PerimeterSentry,
    /// Airborne high-power microwave pod.
    HpmPod,
    /// Terrain and obstacle mapping platform.
    LidarMapper,
    /// Micro-decoy dispenser swarm.
    MicroDecoySwarm,
    /// Optical mesh network node.
    OpticalMesh,
    /// Forward observer pairing targets for effectors.
    Spotter,
}

/// Tasking assigned to a deployed drone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneMission {
    #[default]
    Patrol,
    Intercept,
    Jam,
    Surveil,
    Shield,
    Coordinate,
}

/// Drone lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneStatus {
    Idle,
    #[default]
    Deploying,
    Active,
    Returning,
    Destroyed,
}

/// Effector channel on the dispatcher mast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Physical projectile interceptor, high rate of fire.
    #[default]
    Kinetic,
    /// EMP burst disrupting drone electronics.
    Electronic,
    /// Directed energy, instant line-of-sight hit.
    Laser,
    /// Net projector for non-destructive capture.
    Net,
    /// High-power microwave area burst.
    Hpm,
    /// Command-link hijack.
    RfTakeover,
    /// GNSS denial bubble.
    GnssDenial,
    /// Sensor-blinding dazzler.
    OpticalDazzler,
    /// Sonic disruptor.
    Acoustic,
    /// False-target beacon.
    DecoyBeacon,
    /// Radar obscurant dispenser.
    Chaff,
    /// Guided slug launcher.
    SmartSlug,
    /// Adversarial spoofing of onboard autonomy.
    AiDeception,
}

impl WeaponKind {
    /// All channels in rack order.
    pub const ALL: [WeaponKind; 13] = [
        WeaponKind::Kinetic,
        WeaponKind::Electronic,
        WeaponKind::Laser,
        WeaponKind::Net,
        WeaponKind::Hpm,
        WeaponKind::RfTakeover,
        WeaponKind::GnssDenial,
        WeaponKind::OpticalDazzler,
        WeaponKind::Acoustic,
        WeaponKind::DecoyBeacon,
        WeaponKind::Chaff,
        WeaponKind::SmartSlug,
        WeaponKind::AiDeception,
    ];
}

/// Transient global effect modifying weapon performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    RapidFire,
    DamageBoost,
    AreaEffect,
    RangeBoost,
}

/// Named formation pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormationPattern {
    Circle,
    Line,
    Diamond,
    Wedge,
    Semicircle,
    Swarm,
}

/// Compass facing for semicircle formations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingDirection {
    #[default]
    North,
    South,
    East,
    West,
}

/// Presentation role derived from formation pattern and slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormationRole {
    Leader,
    Wingman,
    Flanker,
    Support,
    Reserve,
}

/// Static deployment zone priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneTier {
    Low,
    Medium,
    High,
    Critical,
}

impl ZoneTier {
    /// Sort weight for recommendation ordering.
    pub fn weight(self) -> u32 {
        match self {
            ZoneTier::Critical => 4,
            ZoneTier::High => 3,
            ZoneTier::Medium => 2,
            ZoneTier::Low => 1,
        }
    }
}

/// Protected-site layout driving zone placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionProfile {
    Airport,
    #[default]
    MilitaryBase,
    VipProtection,
    BorderPatrol,
}

/// Recommended counter for an assessed threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseDoctrine {
    Intercept,
    Jam,
    Surveil,
    Shield,
    Evade,
    MultiTarget,
}

/// Engagement authority mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutomationMode {
    /// Operator fires every shot.
    Manual,
    /// Engine engages autonomously.
    Automated,
    /// Engine engages, operator may override.
    #[default]
    Hybrid,
}

/// Resolution of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementOutcome {
    Hit,
    Miss,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Active,
    Paused,
}
