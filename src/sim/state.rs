//! Simulation state and core types
//!
//! The body table is a fixed-capacity arena: records are reset in place on
//! destroy/respawn and never allocated or freed after construction. The
//! table must be re-sorted by ascending x before every sweep pass; that
//! ordering is what makes the broad phase affordable.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::laser::LaserPool;
use super::spawn;
use super::visibility::GRAVEYARD;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship alive, responding to input
    Playing,
    /// Ship destroyed; the swarm keeps ticking, ship intents are ignored
    GameOver,
}

/// One-shot signals raised by a tick, drained by the embedder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Raised exactly once on the Playing -> GameOver edge
    ShipDestroyed,
}

/// One slot in the body table
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Travel direction, constant between respawns
    pub dir: Vec2,
    /// Per-tick displacement, drawn once at spawn
    pub speed: f32,
    /// Cosmetic spin for the renderer; no effect on simulation state
    pub rotation_speed: f32,
    /// Counts down only while destroyed
    pub respawn_timer: f32,
    /// Destroyed-this-frame flag; true from destruction until respawn
    pub destroyed: bool,
}

/// The player-controlled ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in degrees, 0 pointing up (+y), increasing counter-clockwise
    pub heading_degrees: f32,
    pub destroyed: bool,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            heading_degrees: 0.0,
            destroyed: false,
        }
    }

    /// Unit vector the ship's nose points along
    pub fn forward(&self) -> Vec2 {
        let rad = self.heading_degrees.to_radians();
        Vec2::new(-rad.sin(), rad.cos())
    }
}

/// Parameters of one simulation instance
///
/// Every run owns its own table and tuning; tests shrink `grid_dim` down
/// to a handful of bodies. `Default` is the full 160x160 swarm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimParams {
    pub grid_dim: u32,
    pub asteroid_radius: f32,
    pub ship_radius: f32,
    pub ship_speed: f32,
    pub laser_radius: f32,
    pub view_half_width: f32,
    pub view_half_height: f32,
    pub visible_slots: usize,
    pub laser_capacity: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            grid_dim: GRID_DIM,
            asteroid_radius: ASTEROID_RADIUS,
            ship_radius: SHIP_RADIUS,
            ship_speed: SHIP_SPEED,
            laser_radius: LASER_RADIUS,
            view_half_width: VIEW_HALF_WIDTH,
            view_half_height: VIEW_HALF_HEIGHT,
            visible_slots: VISIBLE_POOL_SIZE,
            laser_capacity: LASER_CAPACITY,
        }
    }
}

impl SimParams {
    /// Total number of body records
    pub fn asteroid_count(&self) -> usize {
        (self.grid_dim * self.grid_dim) as usize
    }

    /// World bounds: the spawn area is the square [0, bounds)²
    pub fn bounds(&self) -> f32 {
        self.grid_dim as f32
    }

    /// Fixed ship spawn point at the grid center
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::splat(self.grid_dim as f32 / 2.0 - 0.5)
    }

    /// View window half-extents as a vector
    pub fn view_half(&self) -> Vec2 {
        Vec2::new(self.view_half_width, self.view_half_height)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub params: SimParams,
    pub phase: GamePhase,
    /// Asteroids shot down; monotonically increasing, survives restarts
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    /// Display name from configuration; cosmetic
    pub ship_name: String,
    /// The body table, sorted by ascending x before every sweep
    pub asteroids: Vec<Asteroid>,
    pub lasers: LaserPool,
    /// Published render slots for visible asteroids
    pub visible: Vec<Vec2>,
    /// Published render slots for laser beams
    pub laser_slots: Vec<Vec2>,
    /// One-shot signals from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a full-size simulation with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, SimParams::default())
    }

    /// Create a simulation with explicit parameters
    pub fn with_params(seed: u64, params: SimParams) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut asteroids = Vec::with_capacity(params.asteroid_count());
        spawn::init_grid_layout(&mut asteroids, params.grid_dim, &mut rng);
        sort_by_x(&mut asteroids);

        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            ship: Ship::new(params.spawn_point()),
            ship_name: crate::config::DEFAULT_SHIP_NAME.to_string(),
            asteroids,
            lasers: LaserPool::new(params.laser_capacity),
            visible: vec![GRAVEYARD; params.visible_slots],
            laser_slots: vec![GRAVEYARD; params.laser_capacity],
            events: Vec::new(),
            params,
        }
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take the signals raised by the most recent tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move the ship along its heading by `delta` seconds worth of travel
    /// (signed; negative backs up). Ignored once the ship is destroyed.
    pub fn apply_movement(&mut self, delta: f32) {
        if self.ship.destroyed {
            return;
        }
        let forward = self.ship.forward();
        self.ship.pos += forward * delta * self.params.ship_speed;
    }

    /// Rotate the ship heading by `degrees`. Ignored once destroyed.
    pub fn apply_rotation(&mut self, degrees: f32) {
        if self.ship.destroyed {
            return;
        }
        self.ship.heading_degrees =
            crate::normalize_angle_degrees(self.ship.heading_degrees + degrees);
    }

    /// Fire a laser beam from the ship's position along its heading.
    /// Over-capacity fire evicts the oldest beam (logged at debug).
    pub fn fire(&mut self) {
        if self.ship.destroyed {
            return;
        }
        if let Some(evicted) = self.lasers.fire(self.ship.pos, self.ship.heading_degrees) {
            log::debug!("laser pool full, evicted beam aged {:.2}s", evicted.age);
        }
    }

    /// Reset the run: ship back at the spawn point, body table rebuilt
    /// with the grid layout. No body state survives. The score counter is
    /// monotonic across runs and is deliberately not reset.
    pub fn restart(&mut self) {
        self.ship = Ship::new(self.params.spawn_point());
        self.phase = GamePhase::Playing;
        spawn::init_grid_layout(&mut self.asteroids, self.params.grid_dim, &mut self.rng);
        sort_by_x(&mut self.asteroids);
        self.lasers = LaserPool::new(self.params.laser_capacity);
        self.visible.fill(GRAVEYARD);
        self.laser_slots.fill(GRAVEYARD);
        log::info!("run restarted, score carried: {}", self.score);
    }
}

/// Move live asteroids and count down destroyed ones, respawning those
/// whose timer has run out.
///
/// Live bodies move by `dir * speed` per tick; speed already encodes the
/// per-tick displacement, so `dt` only drives the respawn countdown.
pub fn advance_asteroids(
    asteroids: &mut [Asteroid],
    dt: f32,
    ship_pos: Vec2,
    bounds: f32,
    view_half: Vec2,
    rng: &mut Pcg32,
) {
    for a in asteroids.iter_mut() {
        if !a.destroyed {
            a.pos += a.dir * a.speed;
            continue;
        }
        a.respawn_timer -= dt;
        if a.respawn_timer <= 0.0 {
            spawn::respawn(a, ship_pos, bounds, view_half, rng);
        }
    }
}

/// Stable sort of the body table by ascending x. Ties keep table order.
pub fn sort_by_x(asteroids: &mut [Asteroid]) {
    asteroids.sort_by(|a, b| {
        a.pos
            .x
            .partial_cmp(&b.pos.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
