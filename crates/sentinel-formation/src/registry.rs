//! Formation registry — tracks live formations and their members.
//!
//! Member stations are never stored; callers recompute them through
//! [`compute_positions`] whenever they are needed.

use std::collections::HashMap;

use glam::Vec2;

use sentinel_core::enums::{FacingDirection, FormationPattern};

use crate::patterns::{compute_positions, AssignedStation, FormationSpec};

/// One registered formation.
#[derive(Debug, Clone)]
pub struct Formation {
    pub id: u32,
    pub spec: FormationSpec,
    /// Ordered member drone ids. Order determines slot assignment.
    pub members: Vec<u32>,
    pub active: bool,
}

/// Registry of live formations, keyed by id.
#[derive(Debug, Default)]
pub struct FormationSet {
    formations: HashMap<u32, Formation>,
    next_id: u32,
}

impl FormationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a formation and return its id.
    pub fn create(
        &mut self,
        pattern: FormationPattern,
        center: Vec2,
        members: Vec<u32>,
    ) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.formations.insert(
            id,
            Formation {
                id,
                spec: FormationSpec::new(pattern, center),
                members,
                active: true,
            },
        );
        id
    }

    /// Move a formation's center. Returns false for an unknown id.
    pub fn reposition(&mut self, id: u32, center: Vec2) -> bool {
        match self.formations.get_mut(&id) {
            Some(f) => {
                f.spec.center = center;
                true
            }
            None => false,
        }
    }

    /// Adjust semicircle arc parameters. Returns false for an unknown id.
    pub fn set_arc(&mut self, id: u32, degrees: f32, facing: FacingDirection) -> bool {
        match self.formations.get_mut(&id) {
            Some(f) => {
                f.spec.arc_degrees = degrees.clamp(1.0, 360.0);
                f.spec.facing = facing;
                true
            }
            None => false,
        }
    }

    /// Remove a member from whatever formation holds it.
    pub fn remove_member(&mut self, drone_id: u32) {
        for formation in self.formations.values_mut() {
            formation.members.retain(|&m| m != drone_id);
        }
        self.formations.retain(|_, f| !f.members.is_empty());
    }

    /// Disband a formation. Returns false for an unknown id.
    pub fn disband(&mut self, id: u32) -> bool {
        self.formations.remove(&id).is_some()
    }

    /// Derived stations for one formation.
    pub fn stations(&self, id: u32) -> Option<Vec<AssignedStation>> {
        self.formations
            .get(&id)
            .map(|f| compute_positions(&f.spec, &f.members))
    }

    /// All formations, id-ordered for stable snapshot output.
    pub fn iter_ordered(&self) -> Vec<&Formation> {
        let mut all: Vec<&Formation> = self.formations.values().collect();
        all.sort_by_key(|f| f.id);
        all
    }

    pub fn len(&self) -> usize {
        self.formations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formations.is_empty()
    }
}
