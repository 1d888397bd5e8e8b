//! Broad-phase collision sweeps
//!
//! All three passes share one pruning idea: the body table is sorted
//! ascending by x, so once two candidates are farther apart in x than
//! their combined radius, they cannot collide and neither can anything
//! after them in table order. The cheap |dy| reject and the approximate
//! distance run only inside that sliding window.
//!
//! Destruction flags mutate mid-pass, so a body destroyed earlier in a
//! pass is excluded from later pairings within the same pass. Under three
//! or more mutually overlapping bodies the outcome therefore depends on
//! sweep order; accepted behavior, documented in the tests.

use super::fastsqrt::fast_sqrt;
use super::laser::LaserPool;
use super::spawn;
use super::state::{Asteroid, Ship};

/// Debug-build precondition for the sweep passes.
pub fn is_sorted_by_x(asteroids: &[Asteroid]) -> bool {
    asteroids.windows(2).all(|w| w[0].pos.x <= w[1].pos.x)
}

/// Asteroid-vs-asteroid pass over the sorted table.
///
/// On a hit both bodies are destroyed and the left index advances one
/// extra step: consumed bodies are not reused as the left operand.
pub fn sweep_asteroid_pairs(asteroids: &mut [Asteroid], radius: f32) {
    debug_assert!(is_sorted_by_x(asteroids));
    let diameter = radius + radius;
    let n = asteroids.len();

    let mut ia = 0;
    while ia + 1 < n {
        if asteroids[ia].destroyed {
            ia += 1;
            continue;
        }
        let a_pos = asteroids[ia].pos;

        let mut ib = ia + 1;
        while ib < n {
            let dif_x = asteroids[ib].pos.x - a_pos.x;
            if dif_x >= diameter {
                break; // window closed; nothing further right can collide
            }
            if !asteroids[ib].destroyed {
                let dif_y = (asteroids[ib].pos.y - a_pos.y).abs();
                if dif_y < diameter {
                    let distance = fast_sqrt(dif_x * dif_x + dif_y * dif_y);
                    if distance < diameter {
                        spawn::destroy(&mut asteroids[ia]);
                        spawn::destroy(&mut asteroids[ib]);
                        ia += 1;
                        break;
                    }
                }
            }
            ib += 1;
        }
        ia += 1;
    }
}

/// Asteroid-vs-ship pass. Returns true if the ship was hit this pass.
///
/// The x-window around the ship is resolved from sort order: bodies left
/// of the window are skipped, the first body past it on the right ends
/// the pass.
pub fn sweep_ship(
    asteroids: &mut [Asteroid],
    ship: &mut Ship,
    asteroid_radius: f32,
    ship_radius: f32,
) -> bool {
    debug_assert!(is_sorted_by_x(asteroids));
    if ship.destroyed {
        return false;
    }
    let radius_sum = asteroid_radius + ship_radius;

    for a in asteroids.iter_mut() {
        if a.destroyed {
            continue;
        }
        if a.pos.x < ship.pos.x {
            if ship.pos.x - a.pos.x > radius_sum {
                continue; // still left of the window
            }
        } else if a.pos.x - ship.pos.x > radius_sum {
            break; // past the window; sort order ends the pass
        }

        let dif = ship.pos - a.pos;
        let distance = fast_sqrt(dif.x * dif.x + dif.y * dif.y);
        if distance < radius_sum {
            spawn::destroy(a);
            ship.destroyed = true;
            return true;
        }
    }
    false
}

/// Asteroid-vs-laser pass. Returns the number of asteroids shot down.
///
/// Lasers move independently, so each live beam gets its own |dx| prune
/// over the full table instead of a shared window. A beam is spent on its
/// first hit.
pub fn sweep_lasers(
    asteroids: &mut [Asteroid],
    lasers: &mut LaserPool,
    asteroid_radius: f32,
    laser_radius: f32,
) -> u64 {
    let radius_sum = asteroid_radius + laser_radius;
    let mut kills = 0;

    for laser in lasers.beams_mut() {
        if !laser.alive {
            continue;
        }
        for a in asteroids.iter_mut() {
            let dif_x = (laser.pos.x - a.pos.x).abs();
            if dif_x >= radius_sum {
                continue;
            }
            if a.destroyed {
                continue;
            }
            let dif_y = (laser.pos.y - a.pos.y).abs();
            let distance = fast_sqrt(dif_x * dif_x + dif_y * dif_y);
            if distance < radius_sum {
                spawn::destroy(a);
                laser.kill();
                kills += 1;
                break;
            }
        }
    }
    kills
}
