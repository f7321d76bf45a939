//! Per-tick state snapshot handed to the render sink.

use serde::{Deserialize, Serialize};

use crate::game::entities::{Asteroid, Explosion, Missile, Ship};

/// Complete, internally consistent copy of the playfield at one tick.
///
/// Published once per tick as a whole value; the simulation never mutates a
/// snapshot after handing it off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub missiles: Vec<Missile>,
    pub explosions: Vec<Explosion>,
}

impl Snapshot {
    /// Total number of entities captured
    pub fn entity_count(&self) -> usize {
        1 + self.asteroids.len() + self.missiles.len() + self.explosions.len()
    }
}
