//! Simulation engine — the core of the demo.
//!
//! `SimulationEngine` owns the hecs ECS world, processes operator commands,
//! runs all systems in a fixed per-tick order, and produces `SimSnapshot`s.
//! Completely headless, enabling deterministic testing: the same seed and
//! command stream reproduce the same snapshot stream.

use std::collections::VecDeque;
use std::path::Path;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sentinel_core::commands::Command;
use sentinel_core::components::*;
use sentinel_core::constants::*;
use sentinel_core::enums::*;
use sentinel_core::events::GameEvent;
use sentinel_core::state::{LeaderboardEntry, SimSnapshot};
use sentinel_core::types::{Position, SimTime, UnitId, Velocity};

use sentinel_formation::FormationSet;
use sentinel_strategy::{DeploymentAdvice, DroneSummary, StrategyEngine, ThreatPicture};

use crate::leaderboard::{Leaderboard, LeaderboardError};
use crate::scoring::ScoreState;
use crate::systems;
use crate::systems::power_ups::ActivePowerUp;
use crate::systems::resources::BaseResources;
use crate::systems::spawner::SpawnState;
use crate::systems::targeting::{Candidate, TargetLedger};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub arena_width: f32,
    pub arena_height: f32,
    pub mission: MissionProfile,
    pub automation: AutomationMode,
    /// Date string stamped on leaderboard entries banked by this session.
    pub session_date: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            mission: MissionProfile::default(),
            automation: AutomationMode::default(),
            session_date: String::new(),
        }
    }
}

/// Number of threats seeded at mission start.
const INITIAL_THREATS: usize = 3;

/// The simulation engine. Owns the ECS world and all engine state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    automation: AutomationMode,
    mission: MissionProfile,
    defended_point: Vec2,
    config: SimConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<Command>,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    next_unit_id: u32,
    score: ScoreState,
    spawn: SpawnState,
    base: BaseResources,
    power_ups: Vec<ActivePowerUp>,
    targeting: TargetLedger,
    strategy: StrategyEngine,
    formations: FormationSet,
    recommendations: Vec<DeploymentAdvice>,
    selected_threats: Vec<u32>,
    leaderboard: Leaderboard,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::Active,
            automation: config.automation,
            mission: config.mission,
            defended_point: Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            next_unit_id: 0,
            score: ScoreState::default(),
            spawn: SpawnState::default(),
            base: BaseResources::default(),
            power_ups: Vec::new(),
            targeting: TargetLedger::new(),
            strategy: StrategyEngine::default(),
            formations: FormationSet::new(),
            recommendations: Vec::new(),
            selected_threats: Vec::new(),
            leaderboard: Leaderboard::new(),
        };
        engine.setup_world();
        engine
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. One tick runs to completion before the next; no engine
    /// work survives across the tick boundary.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Active {
            self.time.advance();
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            systems::snapshot::SnapshotInputs {
                time: &self.time,
                phase: self.phase,
                automation: self.automation,
                mission: self.mission,
                score: &self.score,
                base: &self.base,
                power_ups: &self.power_ups,
                strategy: &self.strategy,
                recommendations: &self.recommendations,
                formations: &self.formations,
                selected_threats: &self.selected_threats,
                events,
            },
        )
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Load the persisted leaderboard from disk.
    pub fn load_leaderboard(&mut self, path: &Path) -> Result<(), LeaderboardError> {
        self.leaderboard = Leaderboard::load(path)?;
        tracing::debug!(entries = self.leaderboard.entries().len(), "leaderboard loaded");
        Ok(())
    }

    /// Persist the leaderboard to disk.
    pub fn save_leaderboard(&self, path: &Path) -> Result<(), LeaderboardError> {
        self.leaderboard.save(path)
    }

    /// Build the initial world: dispatcher at the defended point plus the
    /// opening wave of threats.
    fn setup_world(&mut self) {
        world_setup::spawn_dispatcher(&mut self.world, &mut self.next_unit_id, self.defended_point);
        self.strategy = StrategyEngine::new(
            self.mission,
            self.config.arena_width,
            self.config.arena_height,
        );
        for _ in 0..INITIAL_THREATS {
            let (entity, id) = world_setup::spawn_threat(
                &mut self.world,
                &mut self.rng,
                &mut self.next_unit_id,
                ThreatCategory::Drone,
                self.score.level,
                self.defended_point,
                self.time.elapsed_secs,
            );
            let position = self
                .world
                .get::<&Position>(entity)
                .map(|p| p.0)
                .unwrap_or(Vec2::ZERO);
            self.events.push(GameEvent::ThreatSpawned {
                threat_id: id,
                category: ThreatCategory::Drone,
                x: position.x,
                y: position.y,
            });
        }
    }

    /// Process all queued commands. Commands that became invalid since
    /// they were queued are silently dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::FireWeapon { weapon, x, y } => {
                let _ = systems::weapons::fire(
                    &mut self.world,
                    &mut self.rng,
                    weapon,
                    Vec2::new(x, y),
                    self.time.elapsed_secs,
                    &self.power_ups,
                    &mut self.base,
                    &mut self.score,
                    &mut self.events,
                );
            }
            Command::SwitchWeapon { weapon } => {
                for (_entity, rack) in self.world.query_mut::<&mut WeaponRack>() {
                    rack.selected = weapon;
                }
            }
            Command::SelectThreat { threat_id } => {
                if self.threat_exists(threat_id) {
                    match self.selected_threats.iter().position(|&id| id == threat_id) {
                        Some(index) => {
                            self.selected_threats.remove(index);
                        }
                        None => self.selected_threats.push(threat_id),
                    }
                }
            }
            Command::SetThreatTier { threat_id, tier } => {
                for (_entity, (_marker, unit, profile)) in
                    self.world.query_mut::<(&Threat, &UnitId, &mut ThreatProfile)>()
                {
                    if unit.0 == threat_id {
                        profile.tier = tier;
                    }
                }
            }
            Command::DeployDrone { drone_type, x, y } => {
                self.deploy_drone(drone_type, Vec2::new(x, y));
            }
            Command::RecallDrone { drone_id } => {
                let dispatcher_position = self.dispatcher_position();
                for (_entity, (_marker, unit, airframe)) in
                    self.world.query_mut::<(&Uav, &UnitId, &mut Airframe)>()
                {
                    if unit.0 == drone_id && airframe.status != DroneStatus::Destroyed {
                        airframe.status = DroneStatus::Returning;
                        airframe.target = dispatcher_position;
                    }
                }
            }
            Command::CreateFormation {
                pattern,
                x,
                y,
                drone_ids,
            } => {
                self.create_formation(pattern, Vec2::new(x, y), drone_ids);
            }
            Command::DisbandFormation { formation_id } => {
                self.formations.disband(formation_id);
            }
            Command::SetMissionProfile { profile } => {
                self.mission = profile;
                self.strategy.set_mission(
                    profile,
                    self.config.arena_width,
                    self.config.arena_height,
                );
                self.recommendations.clear();
            }
            Command::SetAutomation { mode } => {
                self.automation = mode;
            }
            Command::ActivatePowerUp { kind } => {
                self.power_ups
                    .push(ActivePowerUp::new(kind, self.time.elapsed_secs));
                self.events.push(GameEvent::PowerUpActivated { kind });
            }
            Command::Pause => {
                if self.phase == SimPhase::Active {
                    self.phase = SimPhase::Paused;
                }
            }
            Command::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Active;
                }
            }
            Command::Reset => self.reset(),
        }
    }

    /// Restore the initial state. The finished session's score is banked
    /// to the leaderboard first.
    fn reset(&mut self) {
        if self.score.score > 0 {
            self.leaderboard.record(LeaderboardEntry {
                score: self.score.score,
                level: self.score.level,
                date: self.config.session_date.clone(),
                threats_neutralized: self.score.neutralized,
            });
        }
        tracing::info!(
            score = self.score.score,
            neutralized = self.score.neutralized,
            "simulation reset"
        );

        self.world = World::new();
        self.time = SimTime::default();
        self.phase = SimPhase::Active;
        self.automation = self.config.automation;
        self.mission = self.config.mission;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.command_queue.clear();
        self.events.clear();
        self.next_unit_id = 0;
        self.score = ScoreState::default();
        self.spawn = SpawnState::default();
        self.base = BaseResources::default();
        self.power_ups.clear();
        self.targeting = TargetLedger::new();
        self.formations = FormationSet::new();
        self.recommendations.clear();
        self.selected_threats.clear();
        self.setup_world();
    }

    /// Run all systems in the fixed per-tick order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;
        let dt = self.time.dt();

        // 1. Weapon and bay cooldown sweeps
        systems::weapons::update_cooldowns(&mut self.world, now, &self.power_ups);
        systems::uav::update_bay_readiness(&mut self.world, now);

        // 2. Power-up expiry
        systems::power_ups::expire(&mut self.power_ups, now, &mut self.events);

        // 3. Resource regeneration
        systems::resources::run(&mut self.world, &mut self.base, dt);

        // 4. Drone movement and recovery
        let recovered = systems::uav::update_positions(&mut self.world, dt, &mut self.events);
        for rec in &recovered {
            self.formations.remove_member(rec.drone_id);
            self.strategy.release_drone(rec.drone_id);
        }

        // 5. Threat behavior and lifecycle
        systems::threat_motion::run(&mut self.world, self.defended_point, now, dt);

        // 6. Zone re-scoring and deployment recommendations
        self.refresh_assessment(now);

        // 7. Auto-targeting
        self.run_auto_targeting(now);
        if self.time.tick % ENGAGE_PURGE_INTERVAL_TICKS == 0 {
            self.targeting.purge_stale(now);
        }

        // 8. Probabilistic spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn,
            &mut self.next_unit_id,
            self.score.level,
            self.defended_point,
            now,
            &mut self.events,
        );

        // 9. Cleanup
        let removed = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, now);
        for threat_id in &removed.threats {
            self.selected_threats.retain(|id| id != threat_id);
        }
        for drone_id in &removed.drones {
            self.formations.remove_member(*drone_id);
            self.strategy.release_drone(*drone_id);
        }
    }

    /// Feed the strategy engine the current threat picture and refresh
    /// deployment recommendations.
    fn refresh_assessment(&mut self, now: f64) {
        let pictures: Vec<ThreatPicture> = self
            .world
            .query_mut::<(&Threat, &UnitId, &ThreatProfile, &Position, &Velocity)>()
            .into_iter()
            .filter(|(_, (_, _, profile, _, _))| profile.status == ThreatStatus::Active)
            .map(|(_, (_, unit, profile, position, velocity))| ThreatPicture {
                id: unit.0,
                category: profile.category,
                position: position.0,
                velocity: velocity.0,
            })
            .collect();
        self.strategy.observe_threats(&pictures, now);

        let available: Vec<DroneSummary> = self
            .world
            .query_mut::<(&Uav, &UnitId, &Airframe)>()
            .into_iter()
            .filter(|(_, (_, _, airframe))| {
                matches!(airframe.status, DroneStatus::Idle | DroneStatus::Active)
            })
            .map(|(_, (_, unit, airframe))| DroneSummary {
                id: unit.0,
                drone_type: airframe.drone_type,
                energy: airframe.energy,
            })
            .collect();
        self.recommendations = self.strategy.recommend(&available);
    }

    /// Engage the best in-range threat with the selected weapon, gated by
    /// the per-target re-engagement cooldown.
    fn run_auto_targeting(&mut self, now: f64) {
        if self.automation == AutomationMode::Manual {
            return;
        }
        if self.base.energy < AUTO_TARGET_MIN_ENERGY {
            return;
        }

        let (selected, ready, ammo, range) = {
            let mut query = self.world.query::<(&Dispatcher, &WeaponRack)>();
            match query.iter().next().and_then(|(_, (_, rack))| {
                rack.get(rack.selected)
                    .map(|w| (rack.selected, w.ready, w.ammo, w.range))
            }) {
                Some(info) => info,
                None => return,
            }
        };
        if !ready || ammo == 0 {
            return;
        }

        let dispatcher_position = self.dispatcher_position();
        let range = range * systems::power_ups::range_multiplier(&self.power_ups);

        let candidates: Vec<Candidate> = self
            .world
            .query_mut::<(&Threat, &UnitId, &ThreatProfile, &Position)>()
            .into_iter()
            .filter(|(_, (_, _, profile, position))| {
                profile.status == ThreatStatus::Active
                    && position.0.distance(self.defended_point) > DIRECT_STOP_EPSILON
            })
            .map(|(_, (_, unit, profile, position))| Candidate {
                threat_id: unit.0,
                tier: profile.tier,
                position: position.0,
            })
            .collect();

        let selection = match self
            .targeting
            .select_target(&candidates, dispatcher_position, range)
        {
            Some(s) => s,
            None => return,
        };
        if !self.targeting.can_engage(selection.threat_id, now) {
            return;
        }

        let fired = systems::weapons::fire(
            &mut self.world,
            &mut self.rng,
            selected,
            selection.position,
            now,
            &self.power_ups,
            &mut self.base,
            &mut self.score,
            &mut self.events,
        );
        if fired.is_some() {
            self.targeting.record_engagement(selection.threat_id, now);
        }
    }

    /// Register a formation over live drones and send each member to its
    /// station. Stale drone ids are dropped; an empty member list after
    /// filtering is a no-op.
    fn create_formation(&mut self, pattern: FormationPattern, center: Vec2, drone_ids: Vec<u32>) {
        let members: Vec<u32> = {
            let live: Vec<u32> = self
                .world
                .query_mut::<(&Uav, &UnitId, &Airframe)>()
                .into_iter()
                .filter(|(_, (_, _, airframe))| airframe.status != DroneStatus::Destroyed)
                .map(|(_, (_, unit, _))| unit.0)
                .collect();
            drone_ids.into_iter().filter(|id| live.contains(id)).collect()
        };
        if members.is_empty() {
            return;
        }

        let id = self.formations.create(pattern, center, members);
        if let Some(stations) = self.formations.stations(id) {
            for station in stations {
                for (_entity, (_marker, unit, airframe)) in
                    self.world.query_mut::<(&Uav, &UnitId, &mut Airframe)>()
                {
                    if unit.0 == station.drone_id {
                        airframe.target = station.station;
                        if airframe.status == DroneStatus::Active {
                            airframe.status = DroneStatus::Deploying;
                        }
                    }
                }
            }
        }
    }

    /// Deploy a drone from its bay toward a point. Every gate failing is a
    /// silent no-op: missing bay, empty bay, bay or dispatcher cooldown,
    /// capacity, energy, or fuel.
    fn deploy_drone(&mut self, drone_type: DroneType, target: Vec2) {
        let now = self.time.elapsed_secs;
        let target = Vec2::new(
            target.x.clamp(0.0, self.config.arena_width),
            target.y.clamp(0.0, self.config.arena_height),
        );

        let mut approved = false;
        for (_entity, (_marker, core, bays)) in
            self.world
                .query_mut::<(&Dispatcher, &mut DispatcherCore, &mut BayRack)>()
        {
            let bay = match bays.bay_mut(drone_type) {
                Some(b) => b,
                None => break,
            };
            if !bay.ready || bay.current == 0 {
                break;
            }
            if core.deployed.len() >= core.drone_capacity {
                break;
            }
            if now - core.last_deployment_secs < core.deployment_cooldown_secs {
                break;
            }
            if core.fuel < core.fuel_per_deployment {
                break;
            }
            if !core.try_debit_energy(DEPLOYMENT_ENERGY_COST) {
                break;
            }

            core.fuel -= core.fuel_per_deployment;
            core.last_deployment_secs = now;
            bay.current -= 1;
            bay.ready = false;
            bay.last_deployment_secs = now;
            approved = true;
            break;
        }
        if !approved {
            return;
        }

        let dispatcher_position = self.dispatcher_position();
        let dispatcher_id = self.dispatcher_unit_id();
        let config = systems::uav::drone_config(drone_type);
        let id = self.next_unit_id;
        self.next_unit_id += 1;

        self.world.spawn((
            Uav,
            UnitId(id),
            Position(dispatcher_position),
            Health::full(config.health),
            Airframe {
                drone_type,
                mission: config.mission,
                status: DroneStatus::Deploying,
                target,
                speed: config.speed,
                energy: config.energy,
                max_energy: config.energy,
                dispatcher_id,
                deployed_at_secs: now,
            },
        ));

        for (_entity, core) in self.world.query_mut::<&mut DispatcherCore>() {
            core.deployed.push(id);
        }
        self.events.push(GameEvent::DroneDeployed {
            drone_id: id,
            drone_type,
        });

        if let Some(zone_id) = self.strategy.zone_at(target).map(|z| z.id) {
            self.strategy.record_deployment(zone_id, id, true);
        }
    }

    /// Spawn a threat with its level-1 profile at an exact position
    /// (for tests needing precise geometry).
    #[cfg(test)]
    pub(crate) fn spawn_test_threat(&mut self, category: ThreatCategory, x: f32, y: f32) -> u32 {
        use sentinel_threat_ai::profiles::category_profile;

        let profile = category_profile(category);
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        self.world.spawn((
            Threat,
            UnitId(id),
            Position(Vec2::new(x, y)),
            Velocity(Vec2::ZERO),
            Health::full(profile.health),
            Trail::default(),
            ThreatProfile {
                category,
                behavior: profile.behavior,
                evasion_level: 0.2,
                speed: profile.speed,
                tier: profile.tier,
                status: ThreatStatus::Active,
                status_since_secs: self.time.elapsed_secs,
                spawned_at_secs: self.time.elapsed_secs,
                special: profile.special,
            },
        ));
        id
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable operator-resource access for test setup.
    #[cfg(test)]
    pub(crate) fn base_mut(&mut self) -> &mut BaseResources {
        &mut self.base
    }

    fn dispatcher_position(&self) -> Vec2 {
        self.world
            .query::<(&Dispatcher, &Position)>()
            .iter()
            .next()
            .map(|(_, (_, position))| position.0)
            .unwrap_or(self.defended_point)
    }

    fn dispatcher_unit_id(&self) -> u32 {
        self.world
            .query::<(&Dispatcher, &UnitId)>()
            .iter()
            .next()
            .map(|(_, (_, unit))| unit.0)
            .unwrap_or(0)
    }

    fn threat_exists(&self, threat_id: u32) -> bool {
        self.world
            .query::<(&Threat, &UnitId)>()
            .iter()
            .any(|(_, (_, unit))| unit.0 == threat_id)
    }
}
