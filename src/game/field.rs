//! The playfield: a bounded rectangular arena owning the ship and all
//! transient entities, plus the procedural generation that feeds it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GameConfig;
use crate::game::body::CollisionError;
use crate::game::constants::ship;
use crate::game::entities::{Asteroid, Entity, Explosion, Missile, Ship};
use crate::game::snapshot::Snapshot;
use crate::ports::RandomSource;
use crate::util::point2::Point2;
use crate::util::vec2::Vec2;

/// Rectangular playfield boundary `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether a point lies inside the boundary, edges included
    pub fn contains(&self, point: Point2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Nearest point inside the boundary, coordinate-wise
    pub fn clamp(&self, point: Point2) -> Point2 {
        Point2::new(point.x.clamp(0.0, self.width), point.y.clamp(0.0, self.height))
    }
}

/// The playfield.
///
/// Owns exactly one ship for its whole lifetime plus growable collections of
/// asteroids, missiles and explosions, all in insertion order. Randomness
/// comes only through the injected [`RandomSource`]; collections are exposed
/// as read-only slices.
pub struct Field {
    bounds: Bounds,
    ship: Ship,
    asteroids: Vec<Asteroid>,
    missiles: Vec<Missile>,
    explosions: Vec<Explosion>,
    random: Box<dyn RandomSource>,
    config: GameConfig,
}

impl Field {
    pub fn new(random: Box<dyn RandomSource>, config: &GameConfig) -> Self {
        let bounds = Bounds::new(f64::from(config.field_width), f64::from(config.field_height));
        let spawn = Point2::new(bounds.width() / 2.0, ship::SPAWN_HEIGHT);
        let ship = Ship::new(spawn, Vec2::ZERO, config.ship_boost);

        Self {
            bounds,
            ship,
            asteroids: Vec::new(),
            missiles: Vec::new(),
            explosions: Vec::new(),
            random,
            config: config.clone(),
        }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn missiles(&self) -> &[Missile] {
        &self.missiles
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    /// Total number of entities currently in the field
    pub fn entity_count(&self) -> usize {
        1 + self.asteroids.len() + self.missiles.len() + self.explosions.len()
    }

    /// Move the ship one step, clamped to the boundary
    pub fn move_ship(&mut self) {
        self.ship.advance(&self.bounds);
    }

    /// Move all asteroids one step; no boundary handling
    pub fn move_asteroids(&mut self) {
        for asteroid in &mut self.asteroids {
            asteroid.body_mut().advance();
        }
    }

    /// Move all missiles one step; no boundary handling
    pub fn move_missiles(&mut self) {
        for missile in &mut self.missiles {
            missile.body_mut().advance();
        }
    }

    /// Roll the spawn chance and generate an asteroid on success.
    ///
    /// A source pinned at the minimum probability spawns every call; one
    /// pinned at the maximum never spawns.
    pub fn maybe_generate_asteroid(&mut self) -> bool {
        if self.random.probability() < self.config.asteroid_spawn_chance {
            self.generate_asteroid();
            true
        } else {
            false
        }
    }

    /// Generate one asteroid with randomized parameters.
    ///
    /// Spawns on the top edge moving downward: `x` uniform across the width,
    /// horizontal yaw in `[-max_yaw, max_yaw]`, vertical speed negated from
    /// `[min_speed, max_speed]`, radius and mass drawn as scaled integers.
    pub fn generate_asteroid(&mut self) {
        let position = Point2::new(
            f64::from(self.random.uniform_int(0, self.config.field_width as i32)),
            self.bounds.height(),
        );

        let yaw = self
            .random
            .uniform(-self.config.asteroid_max_yaw, self.config.asteroid_max_yaw);
        let speed = -self
            .random
            .uniform(self.config.asteroid_min_speed, self.config.asteroid_max_speed);
        let velocity = Vec2::new(yaw, speed);

        let radius = f64::from(
            self.random
                .uniform_int(self.config.asteroid_min_radius, self.config.asteroid_max_radius),
        ) * self.config.asteroid_radius_multiplier;

        let mass = f64::from(
            self.random
                .uniform_int(self.config.asteroid_min_mass, self.config.asteroid_max_mass),
        ) * self.config.asteroid_mass_multiplier;

        debug!(x = position.x, radius, mass, "asteroid spawned");
        self.asteroids.push(Asteroid::new(position, velocity, radius, mass));
    }

    /// Launch a missile just beyond the ship's forward edge, flying straight
    /// up at the configured speed
    pub fn generate_missile(&mut self) {
        let clearance = self.ship.body().radius() + self.config.missile_radius + self.config.missile_gap;
        let position = self.ship.body().center() + Vec2::new(0.0, clearance);
        let velocity = Vec2::new(0.0, self.config.missile_speed);

        debug!(x = position.x, y = position.y, "missile launched");
        self.missiles.push(Missile::new(
            position,
            velocity,
            self.config.missile_radius,
            self.config.missile_mass,
        ));
    }

    /// Drop asteroids whose center left the playfield; survivors keep their
    /// order
    pub fn trim_asteroids(&mut self) {
        let bounds = self.bounds;
        self.asteroids.retain(|asteroid| asteroid.in_bounds(&bounds));
    }

    /// Drop missiles whose center left the playfield
    pub fn trim_missiles(&mut self) {
        let bounds = self.bounds;
        self.missiles.retain(|missile| missile.in_bounds(&bounds));
    }

    /// Burn one tick off every explosion and drop the expired ones
    pub fn tick_explosions(&mut self) {
        for explosion in &mut self.explosions {
            explosion.tick();
        }
        self.explosions.retain(Explosion::is_active);
    }

    /// Resolve every impacting pair among ship, asteroids and missiles.
    ///
    /// Each collision exchanges impulse along the line of centers; the final
    /// state is order-independent because a collision only mutates the two
    /// participants' velocities. Explosions are inert and excluded.
    pub fn resolve_collisions(&mut self, restitution: f64) -> Result<(), CollisionError> {
        // ship vs asteroids
        for asteroid in &mut self.asteroids {
            if self.ship.body().impacts(asteroid.body()) {
                self.ship.body_mut().collide_with(asteroid.body_mut(), restitution)?;
            }
        }

        // ship vs missiles
        for missile in &mut self.missiles {
            if self.ship.body().impacts(missile.body()) {
                self.ship.body_mut().collide_with(missile.body_mut(), restitution)?;
            }
        }

        // asteroid vs asteroid
        for i in 0..self.asteroids.len() {
            let (head, tail) = self.asteroids.split_at_mut(i + 1);
            let first = &mut head[i];
            for second in tail.iter_mut() {
                if first.body().impacts(second.body()) {
                    first.body_mut().collide_with(second.body_mut(), restitution)?;
                }
            }
        }

        // missile vs missile
        for i in 0..self.missiles.len() {
            let (head, tail) = self.missiles.split_at_mut(i + 1);
            let first = &mut head[i];
            for second in tail.iter_mut() {
                if first.body().impacts(second.body()) {
                    first.body_mut().collide_with(second.body_mut(), restitution)?;
                }
            }
        }

        // asteroid vs missile
        for asteroid in &mut self.asteroids {
            for missile in &mut self.missiles {
                if asteroid.body().impacts(missile.body()) {
                    asteroid.body_mut().collide_with(missile.body_mut(), restitution)?;
                }
            }
        }

        Ok(())
    }

    /// Destroy every missile/asteroid pair in contact, leaving an explosion
    /// at each destroyed asteroid's center.
    ///
    /// Each missile takes out at most one asteroid and vice versa; surviving
    /// entities keep their insertion order.
    pub fn detonate_struck_asteroids(&mut self) {
        let mut dead_asteroids: Vec<usize> = Vec::new();
        let mut dead_missiles: Vec<usize> = Vec::new();

        for (ai, asteroid) in self.asteroids.iter().enumerate() {
            for (mi, missile) in self.missiles.iter().enumerate() {
                if dead_asteroids.contains(&ai) || dead_missiles.contains(&mi) {
                    continue;
                }
                if missile.body().impacts(asteroid.body()) {
                    dead_asteroids.push(ai);
                    dead_missiles.push(mi);
                    self.explosions.push(asteroid.explode());
                }
            }
        }

        for &index in dead_asteroids.iter().rev() {
            debug!(index, "asteroid destroyed");
            self.asteroids.remove(index);
        }
        for &index in dead_missiles.iter().rev() {
            self.missiles.remove(index);
        }
    }

    /// Place a prebuilt asteroid; test seam for collision scenarios
    #[cfg(test)]
    pub(crate) fn push_asteroid(&mut self, asteroid: Asteroid) {
        self.asteroids.push(asteroid);
    }

    /// Complete copy of the current state, safe to hand across the render
    /// boundary
    pub fn snapshot(&self, tick: u64) -> Snapshot {
        Snapshot {
            tick,
            ship: self.ship.clone(),
            asteroids: self.asteroids.clone(),
            missiles: self.missiles.clone(),
            explosions: self.explosions.clone(),
        }
    }
}
