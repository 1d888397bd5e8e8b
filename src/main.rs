//! Fasteroids entry point
//!
//! Headless driver: runs a seeded simulation with scripted input and logs
//! a short summary. Rendering and real input belong to external
//! front-ends; this binary exists to exercise the full tick path.

use std::path::Path;

use fasteroids::config;
use fasteroids::consts::SIM_DT;
use fasteroids::sim::{GameEvent, GameState, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("Fasteroids (headless) starting...");

    let seed = 0xFA57_0001;
    let mut state = GameState::new(seed);
    state.ship_name = config::load_ship_name(Path::new("spaceships.json"));
    log::info!(
        "piloting \"{}\" with seed {:#x}, {} asteroids",
        state.ship_name,
        seed,
        state.asteroids.len()
    );

    let mut input = TickInput {
        thrust: 1.0,
        rotate_degrees: 0.5,
        ..Default::default()
    };

    // Ten simulated seconds, firing twice a second
    let ticks = (10.0 / SIM_DT) as u64;
    for t in 0..ticks {
        input.fire = t % 30 == 0;
        tick(&mut state, &input, SIM_DT);
        for event in state.drain_events() {
            match event {
                GameEvent::ShipDestroyed => {
                    log::info!("\"{}\" went down at tick {}", state.ship_name, t);
                }
            }
        }
        if state.game_over() {
            break;
        }
    }

    log::info!(
        "done: {} ticks, score {}, game over: {}",
        state.time_ticks,
        state.score,
        state.game_over()
    );
}
