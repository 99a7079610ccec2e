//! Operator commands sent from the presentation layer to the engine.
//!
//! Commands are queued and applied at the next tick boundary. Ordinary
//! rejection (insufficient resources, stale target id) is a silent no-op —
//! nothing here returns an error.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // --- Engagement ---
    /// Fire a weapon channel at a point in arena space.
    FireWeapon { weapon: WeaponKind, x: f32, y: f32 },
    /// Change the selected weapon channel.
    SwitchWeapon { weapon: WeaponKind },
    /// Toggle a threat in the operator's selection set.
    SelectThreat { threat_id: u32 },
    /// Override a threat's targeting tier.
    SetThreatTier { threat_id: u32, tier: ThreatTier },

    // --- Drone operations ---
    /// Deploy a drone from its bay toward a point.
    DeployDrone {
        drone_type: DroneType,
        x: f32,
        y: f32,
    },
    /// Order a deployed drone back to the dispatcher.
    RecallDrone { drone_id: u32 },

    // --- Formations ---
    /// Arrange deployed drones in a named pattern around a center point.
    /// Ids that no longer resolve to live drones are dropped silently.
    CreateFormation {
        pattern: FormationPattern,
        x: f32,
        y: f32,
        drone_ids: Vec<u32>,
    },
    /// Dissolve a formation; members hold their current stations.
    DisbandFormation { formation_id: u32 },

    // --- Mission context ---
    /// Re-seed deployment zones for a protected-site layout.
    SetMissionProfile { profile: MissionProfile },
    /// Change engagement authority.
    SetAutomation { mode: AutomationMode },

    // --- Power-ups ---
    ActivatePowerUp { kind: PowerUpKind },

    // --- Simulation control ---
    Pause,
    Resume,
    /// Restore the initial state (score banked to the leaderboard first).
    Reset,
}
