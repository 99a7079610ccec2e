//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Default arena width in display units.
pub const ARENA_WIDTH: f32 = 800.0;

/// Default arena height in display units.
pub const ARENA_HEIGHT: f32 = 600.0;

/// Radius of the ring on which new threats spawn, measured from the
/// defended point (places spawns just outside the visible arena).
pub const SPAWN_RING_RADIUS: f32 = 520.0;

// --- Threat behavior ---

/// Distance below which a direct-pursuit threat holds position.
pub const DIRECT_STOP_EPSILON: f32 = 5.0;

/// Near-field radius inside which evasive threats flee the defended point.
pub const EVASIVE_NEAR_FIELD: f32 = 100.0;

/// Angular frequency of the zigzag weave (radians per second).
pub const ZIGZAG_FREQUENCY: f64 = 5.0;

/// Lateral amplitude of the zigzag weave at evasion level 1.0.
pub const ZIGZAG_AMPLITUDE: f32 = 5.0;

/// Hover standoff distance at evasion level 0.
pub const HOVER_BASE_STANDOFF: f32 = 80.0;

/// Additional hover standoff per unit of evasion level.
pub const HOVER_EVASION_STANDOFF: f32 = 40.0;

/// Dead band around the hover standoff ring.
pub const HOVER_DEAD_BAND: f32 = 10.0;

/// Trail ring capacity (most recent samples kept).
pub const TRAIL_CAP: usize = 10;

/// Seconds a neutralized threat holds before collapsing to a crater.
pub const NEUTRALIZED_FADE_SECS: f64 = 5.0;

/// Seconds a crater persists before the entity is despawned.
pub const CRATER_TTL_SECS: f64 = 4.0;

// --- Spawning and difficulty ---

/// Seconds between spawn attempts at level 1.
pub const SPAWN_INTERVAL_START: f64 = 2.0;

/// Spawn interval reduction per level.
pub const SPAWN_INTERVAL_STEP: f64 = 0.15;

/// Spawn interval floor.
pub const SPAWN_INTERVAL_FLOOR: f64 = 0.5;

/// Base probability of a spawn once the interval has elapsed.
pub const SPAWN_BASE_CHANCE: f64 = 0.4;

/// Spawn probability gained per level.
pub const SPAWN_CHANCE_PER_LEVEL: f64 = 0.05;

/// Active-threat cap at level 1.
pub const THREAT_CAP_BASE: usize = 5;

/// Active-threat cap gained per level.
pub const THREAT_CAP_PER_LEVEL: usize = 2;

/// Neutralizations required per level.
pub const KILLS_PER_LEVEL: u32 = 10;

/// Per-level health/speed scaling step.
pub const DIFFICULTY_STEP: f32 = 0.15;

/// Speed multiplier ceiling.
pub const SPEED_SCALE_MAX: f32 = 3.0;

/// Health multiplier ceiling.
pub const HEALTH_SCALE_MAX: f32 = 5.0;

// --- Scoring ---

/// Base score per neutralization before effectiveness and combo scaling.
pub const SCORE_BASE: f32 = 100.0;

/// Seconds within which consecutive kills extend the combo.
pub const COMBO_WINDOW_SECS: f64 = 2.0;

/// Combo multiplier gained per chained kill.
pub const COMBO_STEP: f32 = 0.1;

/// Combo multiplier ceiling.
pub const COMBO_MAX: f32 = 3.0;

// --- Base resources ---

/// Operator-side energy pool feeding weapon fire.
pub const BASE_ENERGY_MAX: f32 = 100.0;

/// Operator energy regeneration per second.
pub const BASE_ENERGY_REGEN: f32 = 2.0;

/// Thermal headroom pool.
pub const BASE_COOLING_MAX: f32 = 100.0;

/// Cooling recovery per second.
pub const BASE_COOLING_REGEN: f32 = 5.0;

/// Energy debited per shot.
pub const FIRE_ENERGY_COST: f32 = 10.0;

/// Cooling debited per shot.
pub const FIRE_COOLING_COST: f32 = 5.0;

/// Minimum operator energy before auto-targeting stands down.
pub const AUTO_TARGET_MIN_ENERGY: f32 = 10.0;

/// Radius around the aim point within which threats are engaged.
pub const AIM_BLAST_RADIUS: f32 = 50.0;

/// Wider blast radius for the HPM area burst.
pub const HPM_BLAST_RADIUS: f32 = 150.0;

/// Score for a threat caught in a kamikaze chain detonation.
pub const CHAIN_KILL_SCORE: f32 = 50.0;

// --- Dispatcher ("mothership") ---

/// Dispatcher energy reservoir.
pub const DISPATCHER_ENERGY_MAX: f32 = 1000.0;

/// Dispatcher energy regeneration per second.
pub const DISPATCHER_ENERGY_REGEN: f32 = 10.0;

/// Dispatcher fuel reservoir.
pub const DISPATCHER_FUEL_MAX: f32 = 500.0;

/// Fuel burned per deployment.
pub const FUEL_PER_DEPLOYMENT: f32 = 2.0;

/// Energy debited per deployment.
pub const DEPLOYMENT_ENERGY_COST: f32 = 50.0;

/// Seconds between dispatcher deployments.
pub const DEPLOYMENT_COOLDOWN_SECS: f64 = 3.0;

/// Maximum simultaneously deployed drones.
pub const DISPATCHER_DRONE_CAPACITY: usize = 12;

/// Arrival radius for drone waypoints and base recovery.
pub const DRONE_ARRIVAL_RADIUS: f32 = 10.0;

/// Drone energy drain per second while deployed.
pub const DRONE_ENERGY_DRAIN: f32 = 1.0;

// --- Auto-targeting ---

/// Per-target re-engagement cooldown (seconds), independent of weapon
/// cooldown.
pub const REENGAGE_COOLDOWN_SECS: f64 = 0.5;

/// Engagement records older than this are purged.
pub const ENGAGE_RECORD_TTL_SECS: f64 = 10.0;

/// Ticks between stale-record purges (5 seconds at the tick rate).
pub const ENGAGE_PURGE_INTERVAL_TICKS: u64 = 300;

/// Weight applied to the priority tier in the targeting score, chosen so
/// tier always dominates distance.
pub const TIER_SCORE_WEIGHT: f32 = 1000.0;

// --- Zones ---

/// Coverage gained per recorded successful deployment.
pub const ZONE_COVERAGE_STEP: f32 = 0.2;

/// Zones above this coverage are skipped for new recommendations.
pub const ZONE_COVERAGE_SKIP: f32 = 0.8;

/// Effectiveness bonus for critical-tier zones.
pub const CRITICAL_ZONE_BONUS: f32 = 0.1;

/// Effectiveness bonus scale for uncovered area.
pub const COVERAGE_GAP_BONUS: f32 = 0.2;

/// Speed normalization divisor in the threat-level formula.
pub const THREAT_SPEED_NORM: f32 = 100.0;

/// Speed contribution ceiling in the threat-level formula.
pub const THREAT_SPEED_BONUS: f32 = 0.3;

/// Minimum drone energy for a deployment recommendation.
pub const RECOMMEND_MIN_ENERGY: f32 = 50.0;

// --- Formations ---

/// Default formation radius.
pub const FORMATION_RADIUS: f32 = 100.0;

/// Default member spacing.
pub const FORMATION_SPACING: f32 = 50.0;

/// Members per swarm cluster.
pub const SWARM_CLUSTER_SIZE: usize = 6;

// --- Leaderboard ---

/// Retained leaderboard entries.
pub const LEADERBOARD_CAP: usize = 10;
