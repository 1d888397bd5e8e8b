//! Fixed timestep simulation tick
//!
//! One tick is atomic from the outside. The pass order is load-bearing:
//! later sweeps consume destruction flags set by earlier ones, and the
//! table must be re-sorted between movement and the first sweep.

use super::state::{self, GameEvent, GamePhase, GameState};
use super::{collision, visibility};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Forward motion along the ship heading this tick, -1..1
    pub thrust: f32,
    /// Heading change in degrees this tick
    pub rotate_degrees: f32,
    /// Fire one laser beam
    pub fire: bool,
    /// Reset the run
    pub restart: bool,
}

/// Advance the simulation by one fixed timestep.
///
/// Ship intents are applied first so every sweep sees the post-input
/// pose. Once the ship is destroyed its intents are ignored but the
/// swarm keeps ticking; `restart` is the only way back.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.restart {
        state.restart();
        return;
    }

    state.time_ticks += 1;

    if input.rotate_degrees != 0.0 {
        state.apply_rotation(input.rotate_degrees);
    }
    if input.thrust != 0.0 {
        state.apply_movement(input.thrust * dt);
    }
    if input.fire {
        state.fire();
    }

    let ship_pos = state.ship.pos;
    let bounds = state.params.bounds();
    let view_half = state.params.view_half();

    state::advance_asteroids(
        &mut state.asteroids,
        dt,
        ship_pos,
        bounds,
        view_half,
        &mut state.rng,
    );
    state::sort_by_x(&mut state.asteroids);

    collision::sweep_asteroid_pairs(&mut state.asteroids, state.params.asteroid_radius);

    let ship_hit = collision::sweep_ship(
        &mut state.asteroids,
        &mut state.ship,
        state.params.asteroid_radius,
        state.params.ship_radius,
    );
    if ship_hit {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::ShipDestroyed);
        log::info!(
            "ship destroyed at tick {} with score {}",
            state.time_ticks,
            state.score
        );
    }

    visibility::publish_visible(&state.asteroids, ship_pos, view_half, &mut state.visible);

    state.score += collision::sweep_lasers(
        &mut state.asteroids,
        &mut state.lasers,
        state.params.asteroid_radius,
        state.params.laser_radius,
    );

    state.lasers.advance(dt);
    state.lasers.publish(&mut state.laser_slots);
}
