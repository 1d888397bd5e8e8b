//! Body lifecycle: initial layouts, destruction and respawn placement
//!
//! Respawn is a cheap repulsion rule, not an outside-view sampler: a
//! uniform candidate that lands too close to the ship on an axis is pushed
//! outward by that axis's view half-extent. When the push crosses into the
//! far half of the grid the resulting clustering is accepted.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Asteroid;
use crate::consts::*;

/// Mark an asteroid destroyed this frame and start its respawn countdown.
/// Position and direction stay untouched until respawn overwrites the
/// position.
pub fn destroy(a: &mut Asteroid) {
    a.destroyed = true;
    a.respawn_timer = RESPAWN_DELAY;
}

/// Re-place a destroyed asteroid and return it to the live set.
///
/// Only the position is redrawn; direction, speed and spin survive the
/// respawn. The final coordinate is clamped to the grid so a push near the
/// edge cannot land a body outside the world.
pub fn respawn(a: &mut Asteroid, ship_pos: Vec2, bounds: f32, view_half: Vec2, rng: &mut Pcg32) {
    let x = push_clear(rng.random_range(0.0..bounds), ship_pos.x, view_half.x);
    let y = push_clear(rng.random_range(0.0..bounds), ship_pos.y, view_half.y);
    a.pos = Vec2::new(x.clamp(0.0, bounds), y.clamp(0.0, bounds));
    a.destroyed = false;
    a.respawn_timer = 0.0;
}

/// Push a candidate coordinate clear of the ship on one axis: if the
/// offset is smaller than the view half-extent, move outward by exactly
/// that half-extent, away from the ship.
fn push_clear(candidate: f32, ship: f32, half_extent: f32) -> f32 {
    let offset = candidate - ship;
    if offset.abs() >= half_extent {
        return candidate;
    }
    if offset >= 0.0 {
        candidate + half_extent
    } else {
        candidate - half_extent
    }
}

/// Populate the table with the default layout: one asteroid per grid cell.
pub fn init_grid_layout(asteroids: &mut Vec<Asteroid>, dim: u32, rng: &mut Pcg32) {
    asteroids.clear();
    for x in 0..dim {
        for y in 0..dim {
            asteroids.push(spawn_at(Vec2::new(x as f32, y as f32), rng));
        }
    }
}

/// Populate the table with uniformly random positions inside the grid.
pub fn init_random_layout(asteroids: &mut Vec<Asteroid>, dim: u32, rng: &mut Pcg32) {
    asteroids.clear();
    let bounds = dim as f32;
    for _ in 0..dim * dim {
        let pos = Vec2::new(
            rng.random_range(0.0..bounds),
            rng.random_range(0.0..bounds),
        );
        asteroids.push(spawn_at(pos, rng));
    }
}

fn spawn_at(pos: Vec2, rng: &mut Pcg32) -> Asteroid {
    Asteroid {
        pos,
        rotation_speed: rng.random_range(0.0..ASTEROID_MAX_ROTATION_SPEED),
        dir: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
        speed: rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED),
        respawn_timer: 0.0,
        destroyed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_destroy_sets_flag_and_timer() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut a = spawn_at(Vec2::new(1.0, 2.0), &mut rng);
        destroy(&mut a);
        assert!(a.destroyed);
        assert_eq!(a.respawn_timer, RESPAWN_DELAY);
        assert_eq!(a.pos, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_push_clear_nudges_by_exact_half_extent() {
        // Candidate inside the window, on the high side of the ship
        assert_eq!(push_clear(6.0, 5.5, 3.8), 6.0 + 3.8);
        // Low side pushes downward
        assert_eq!(push_clear(5.0, 5.5, 3.8), 5.0 - 3.8);
        // Already clear: untouched
        assert_eq!(push_clear(10.0, 2.0, 3.8), 10.0);
        assert_eq!(push_clear(0.5, 9.0, 3.8), 0.5);
    }

    #[test]
    fn test_respawn_clears_flag_and_keeps_motion() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut a = spawn_at(Vec2::ZERO, &mut rng);
        let dir = a.dir;
        let speed = a.speed;
        destroy(&mut a);

        respawn(&mut a, Vec2::splat(80.0), 160.0, Vec2::new(3.8, 2.3), &mut rng);
        assert!(!a.destroyed);
        assert_eq!(a.respawn_timer, 0.0);
        assert_eq!(a.dir, dir);
        assert_eq!(a.speed, speed);
    }

    #[test]
    fn test_respawn_lands_inside_bounds() {
        let bounds = 20.0;
        let view_half = Vec2::new(3.8, 2.3);
        // Ship parked near a corner so pushes would overshoot the edge
        let ship = Vec2::new(19.5, 0.2);
        for seed in 0..200 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut a = spawn_at(Vec2::ZERO, &mut rng);
            destroy(&mut a);
            respawn(&mut a, ship, bounds, view_half, &mut rng);
            assert!(a.pos.x >= 0.0 && a.pos.x <= bounds, "x out of bounds: {}", a.pos.x);
            assert!(a.pos.y >= 0.0 && a.pos.y <= bounds, "y out of bounds: {}", a.pos.y);
        }
    }

    #[test]
    fn test_grid_layout_fills_every_cell() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut table = Vec::new();
        init_grid_layout(&mut table, 4, &mut rng);
        assert_eq!(table.len(), 16);
        assert_eq!(table[0].pos, Vec2::new(0.0, 0.0));
        assert_eq!(table[15].pos, Vec2::new(3.0, 3.0));
        for a in &table {
            assert!(!a.destroyed);
            assert!(a.speed >= ASTEROID_MIN_SPEED && a.speed < ASTEROID_MAX_SPEED);
            assert!(a.rotation_speed >= 0.0 && a.rotation_speed < ASTEROID_MAX_ROTATION_SPEED);
        }
    }

    #[test]
    fn test_random_layout_stays_inside_grid() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut table = Vec::new();
        init_random_layout(&mut table, 8, &mut rng);
        assert_eq!(table.len(), 64);
        for a in &table {
            assert!(a.pos.x >= 0.0 && a.pos.x < 8.0);
            assert!(a.pos.y >= 0.0 && a.pos.y < 8.0);
        }
    }

    #[test]
    fn test_layouts_are_deterministic_per_seed() {
        let mut table_a = Vec::new();
        let mut table_b = Vec::new();
        init_grid_layout(&mut table_a, 4, &mut Pcg32::seed_from_u64(9));
        init_grid_layout(&mut table_b, 4, &mut Pcg32::seed_from_u64(9));
        for (a, b) in table_a.iter().zip(&table_b) {
            assert_eq!(a.dir, b.dir);
            assert_eq!(a.speed, b.speed);
        }
    }
}
