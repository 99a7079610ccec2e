//! Events emitted by the engine for presentation-layer effects.
//!
//! Events are side-effect-free from the engine's perspective: the renderer
//! uses them for explosions, score pop-ups, and audio cues.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Discrete notifications drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ThreatSpawned {
        threat_id: u32,
        category: ThreatCategory,
        x: f32,
        y: f32,
    },
    ThreatNeutralized {
        threat_id: u32,
        category: ThreatCategory,
        score_award: u32,
    },
    WeaponFired {
        weapon: WeaponKind,
        x: f32,
        y: f32,
        outcome: EngagementOutcome,
    },
    DroneDeployed {
        drone_id: u32,
        drone_type: DroneType,
    },
    DroneRecovered {
        drone_id: u32,
        drone_type: DroneType,
    },
    LevelUp {
        level: u32,
    },
    PowerUpActivated {
        kind: PowerUpKind,
    },
    PowerUpExpired {
        kind: PowerUpKind,
    },
}
