//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Body table sorted by ascending x before every sweep
//! - No rendering or platform dependencies

pub mod collision;
pub mod fastsqrt;
pub mod laser;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod visibility;

pub use collision::{sweep_asteroid_pairs, sweep_lasers, sweep_ship};
pub use fastsqrt::fast_sqrt;
pub use laser::{LaserBeam, LaserPool};
pub use state::{Asteroid, GameEvent, GamePhase, GameState, Ship, SimParams};
pub use tick::{TickInput, tick};
pub use visibility::{GRAVEYARD, publish_visible};
