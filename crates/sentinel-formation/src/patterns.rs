//! Station math for the named formation patterns.

use glam::Vec2;

use sentinel_core::constants::{FORMATION_RADIUS, FORMATION_SPACING, SWARM_CLUSTER_SIZE};
use sentinel_core::enums::{FacingDirection, FormationPattern, FormationRole};

use std::f32::consts::{PI, TAU};

/// Geometric parameters of one formation.
#[derive(Debug, Clone)]
pub struct FormationSpec {
    pub pattern: FormationPattern,
    pub center: Vec2,
    pub radius: f32,
    pub spacing: f32,
    /// Arc width in degrees (semicircle only).
    pub arc_degrees: f32,
    /// Compass direction the arc faces (semicircle only).
    pub facing: FacingDirection,
}

impl FormationSpec {
    pub fn new(pattern: FormationPattern, center: Vec2) -> Self {
        Self {
            pattern,
            center,
            radius: FORMATION_RADIUS,
            spacing: FORMATION_SPACING,
            arc_degrees: 180.0,
            facing: FacingDirection::North,
        }
    }
}

/// One computed member station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignedStation {
    pub drone_id: u32,
    pub station: Vec2,
    pub role: FormationRole,
}

/// Compute stations for every member of a formation.
///
/// Pure function of the spec and the ordered member list: identical inputs
/// yield identical outputs, and every member receives exactly one station.
pub fn compute_positions(spec: &FormationSpec, members: &[u32]) -> Vec<AssignedStation> {
    let positions: Vec<Vec2> = match spec.pattern {
        FormationPattern::Circle => circle_positions(spec, members.len()),
        FormationPattern::Line => line_positions(spec, members.len()),
        FormationPattern::Diamond => diamond_positions(spec, members.len()),
        FormationPattern::Wedge => wedge_positions(spec, members.len()),
        FormationPattern::Semicircle => semicircle_positions(spec, members.len()),
        FormationPattern::Swarm => swarm_positions(spec, members.len()),
    };

    members
        .iter()
        .zip(positions)
        .enumerate()
        .map(|(index, (&drone_id, station))| AssignedStation {
            drone_id,
            station,
            role: role_for(spec.pattern, index),
        })
        .collect()
}

/// Evenly spaced around the full circle.
fn circle_positions(spec: &FormationSpec, count: usize) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let angle_step = TAU / count as f32;
    (0..count)
        .map(|i| {
            let angle = i as f32 * angle_step;
            spec.center + Vec2::new(angle.cos(), angle.sin()) * spec.radius
        })
        .collect()
}

/// Evenly spaced along a horizontal axis centered on the formation center.
fn line_positions(spec: &FormationSpec, count: usize) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let total_width = (count - 1) as f32 * spec.spacing;
    let start_x = spec.center.x - total_width / 2.0;
    (0..count)
        .map(|i| Vec2::new(start_x + i as f32 * spec.spacing, spec.center.y))
        .collect()
}

/// Cardinal points at the radius; members beyond four cluster near center
/// with alternating offsets.
fn diamond_positions(spec: &FormationSpec, count: usize) -> Vec<Vec2> {
    let cardinal = [
        spec.center + Vec2::new(0.0, -spec.radius),
        spec.center + Vec2::new(spec.radius, 0.0),
        spec.center + Vec2::new(0.0, spec.radius),
        spec.center + Vec2::new(-spec.radius, 0.0),
    ];

    (0..count)
        .map(|i| {
            if count == 1 {
                spec.center
            } else if i < 4 {
                cardinal[i]
            } else {
                let offset = if (i - 4) % 2 == 0 {
                    -spec.spacing / 2.0
                } else {
                    spec.spacing / 2.0
                };
                spec.center + Vec2::splat(offset)
            }
        })
        .collect()
}

/// Leader forward of center, the rest fanned out behind.
fn wedge_positions(spec: &FormationSpec, count: usize) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![spec.center];
    }
    let mut positions = vec![spec.center + Vec2::new(0.0, -spec.radius)];
    let half_width = ((count - 1) / 2) as i32;
    for i in 0..(count - 1) as i32 {
        let side_offset = (i - half_width) as f32 * spec.spacing;
        positions.push(spec.center + Vec2::new(side_offset, spec.spacing));
    }
    positions
}

/// Arc of configurable width centered on the facing direction.
fn semicircle_positions(spec: &FormationSpec, count: usize) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let arc = spec.arc_degrees.to_radians();
    let angle_step = if count > 1 {
        arc / (count - 1) as f32
    } else {
        0.0
    };
    let start_angle = match spec.facing {
        FacingDirection::North => -arc / 2.0,
        FacingDirection::South => PI - arc / 2.0,
        FacingDirection::East => PI / 2.0 - arc / 2.0,
        FacingDirection::West => 3.0 * PI / 2.0 - arc / 2.0,
    };
    (0..count)
        .map(|i| {
            let angle = start_angle + i as f32 * angle_step;
            spec.center + Vec2::new(angle.cos(), angle.sin()) * spec.radius
        })
        .collect()
}

/// Angularly spaced clusters with a secondary local angle per member,
/// approximating organic grouping without randomness.
fn swarm_positions(spec: &FormationSpec, count: usize) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let cluster_size = count.min(SWARM_CLUSTER_SIZE);
    let clusters = count.div_ceil(cluster_size);
    (0..count)
        .map(|i| {
            let cluster_index = i / cluster_size;
            let cluster_angle = cluster_index as f32 * TAU / clusters as f32;
            let cluster_radius = spec.radius * (0.5 + cluster_index as f32 * 0.3);

            let local_index = i % cluster_size;
            let local_angle = local_index as f32 * TAU / cluster_size as f32;
            let local_radius = spec.spacing * 0.5;

            spec.center
                + Vec2::new(cluster_angle.cos(), cluster_angle.sin()) * cluster_radius
                + Vec2::new(local_angle.cos(), local_angle.sin()) * local_radius
        })
        .collect()
}

/// Presentation role for a slot. Used for display priority only — the
/// geometry above never consults it.
pub fn role_for(pattern: FormationPattern, index: usize) -> FormationRole {
    if index == 0 {
        return FormationRole::Leader;
    }
    match pattern {
        FormationPattern::Wedge => {
            if index <= 2 {
                FormationRole::Wingman
            } else {
                FormationRole::Support
            }
        }
        FormationPattern::Diamond => {
            if index < 4 {
                FormationRole::Wingman
            } else {
                FormationRole::Support
            }
        }
        FormationPattern::Line => {
            if index % 2 == 0 {
                FormationRole::Wingman
            } else {
                FormationRole::Flanker
            }
        }
        _ => FormationRole::Wingman,
    }
}
