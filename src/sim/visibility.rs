//! Visible-body publisher
//!
//! Maps the non-destroyed bodies inside the view window onto a fixed-size
//! slot array in table order. Slots with nothing in them are parked at the
//! graveyard sentinel so the renderer never shows stale bodies.

use glam::Vec2;

use super::state::Asteroid;

/// Off-screen sentinel position for unused render slots
pub const GRAVEYARD: Vec2 = Vec2::new(-99999.0, -99999.0);

/// Fill `slots` with the positions of visible asteroids.
///
/// One pass in table order; once every slot is taken the remaining
/// in-window bodies are silently dropped for this tick, so the slot array
/// must be sized generously above the expected maximum simultaneously
/// visible count.
pub fn publish_visible(
    asteroids: &[Asteroid],
    ship_pos: Vec2,
    view_half: Vec2,
    slots: &mut [Vec2],
) {
    let mut slot = 0;
    for a in asteroids {
        if slot == slots.len() {
            break;
        }
        if a.destroyed {
            continue;
        }
        if (ship_pos.x - a.pos.x).abs() > view_half.x {
            continue;
        }
        if (ship_pos.y - a.pos.y).abs() > view_half.y {
            continue;
        }
        slots[slot] = a.pos;
        slot += 1;
    }

    // Unused slots go to the graveyard
    for s in &mut slots[slot..] {
        *s = GRAVEYARD;
    }
}
