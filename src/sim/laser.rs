//! Laser beam pool
//!
//! A bounded, oldest-first collection of short-lived projectiles. Firing
//! past capacity evicts the oldest beam immediately; expired or spent
//! beams are marked dead during the per-tick update and compacted out
//! afterwards, so no live beam is skipped mid-removal. The buffer is
//! pre-sized once and reused; steady-state ticks allocate nothing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::visibility::GRAVEYARD;
use crate::consts::*;

/// A single laser beam
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserBeam {
    pub pos: Vec2,
    /// Unit travel direction, fixed at fire time
    pub dir: Vec2,
    /// Seconds since fired
    pub age: f32,
    pub alive: bool,
}

impl LaserBeam {
    pub fn new(origin: Vec2, heading_degrees: f32) -> Self {
        Self {
            pos: origin,
            dir: heading_to_direction(heading_degrees),
            age: 0.0,
            alive: true,
        }
    }

    /// Retire the beam and park its render position off-screen.
    pub fn kill(&mut self) {
        self.alive = false;
        self.pos = GRAVEYARD;
    }
}

/// Unit direction for a heading in degrees, 0 pointing up (+y).
///
/// Quadrant-aware: both axis components are derived from the tangent of
/// the heading with per-quadrant sign rules. The four axis headings get
/// exact arms, so the degenerate tangent at 90 and 270 never fires; a
/// zero tangent inside a quadrant is replaced by a large stand-in to keep
/// the ratios finite.
pub fn heading_to_direction(heading_degrees: f32) -> Vec2 {
    let angle = crate::normalize_angle_degrees(heading_degrees);
    let mut tangent = angle.to_radians().tan();
    if tangent == 0.0 {
        tangent = 100.0;
    }

    let delta = if angle > 0.0 && angle < 90.0 {
        Vec2::new(-tangent, 1.0 / tangent)
    } else if angle > 90.0 && angle < 180.0 {
        Vec2::new(tangent, 1.0 / tangent)
    } else if angle > 180.0 && angle < 270.0 {
        Vec2::new(tangent, -1.0 / tangent)
    } else if angle > 270.0 && angle < 360.0 {
        Vec2::new(-tangent, -1.0 / tangent)
    } else if angle == 0.0 {
        Vec2::new(0.0, 1.0)
    } else if angle == 90.0 {
        Vec2::new(-1.0, 0.0)
    } else if angle == 180.0 {
        Vec2::new(0.0, -1.0)
    } else {
        Vec2::new(1.0, 0.0)
    };
    delta.normalize_or_zero()
}

/// Bounded oldest-first pool of laser beams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserPool {
    beams: Vec<LaserBeam>,
    capacity: usize,
}

impl LaserPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            // One extra slot so an over-capacity fire never reallocates
            beams: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.beams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beams.is_empty()
    }

    pub fn beams(&self) -> &[LaserBeam] {
        &self.beams
    }

    pub(crate) fn beams_mut(&mut self) -> &mut [LaserBeam] {
        &mut self.beams
    }

    /// Fire a new beam. If that pushes the pool over capacity the oldest
    /// beam is evicted immediately and returned with its render position
    /// already parked at the graveyard.
    pub fn fire(&mut self, origin: Vec2, heading_degrees: f32) -> Option<LaserBeam> {
        self.beams.push(LaserBeam::new(origin, heading_degrees));
        if self.beams.len() > self.capacity {
            let mut evicted = self.beams.remove(0);
            evicted.kill();
            return Some(evicted);
        }
        None
    }

    /// Move, age and expire beams, then compact the dead ones out.
    pub fn advance(&mut self, dt: f32) {
        for beam in &mut self.beams {
            if !beam.alive {
                continue;
            }
            beam.pos += beam.dir * LASER_SPEED * dt;
            beam.age += dt;
            if beam.age > LASER_TTL {
                beam.kill();
            }
        }
        self.beams.retain(|b| b.alive);
    }

    /// Write live beam positions into the fixed render slots, sentineling
    /// the unused remainder.
    pub fn publish(&self, slots: &mut [Vec2]) {
        let mut slot = 0;
        for beam in &self.beams {
            if beam.alive && slot < slots.len() {
                slots[slot] = beam.pos;
                slot += 1;
            }
        }
        for s in &mut slots[slot..] {
            *s = GRAVEYARD;
        }
    }
}
