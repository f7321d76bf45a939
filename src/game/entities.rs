//! Entity variants built on [`Body`]: the player ship, asteroids, missiles
//! and explosions. Composition plus a kind tag, no inheritance.

use serde::{Deserialize, Serialize};

use crate::game::body::Body;
use crate::game::constants::{explosion, ship};
use crate::game::field::Bounds;
use crate::util::point2::Point2;
use crate::util::vec2::Vec2;

/// Tag identifying an entity variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Asteroid,
    Missile,
    Explosion,
}

impl EntityKind {
    /// Stable type name for presentation adapters
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Ship => "Ship",
            EntityKind::Asteroid => "Asteroid",
            EntityKind::Missile => "Missile",
            EntityKind::Explosion => "Explosion",
        }
    }

    /// One-character display symbol
    pub fn symbol(&self) -> char {
        match self {
            EntityKind::Ship => '@',
            EntityKind::Asteroid => '.',
            EntityKind::Missile => '^',
            EntityKind::Explosion => 'x',
        }
    }
}

/// Shared capability of all playfield entities
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
    fn kind(&self) -> EntityKind;

    fn symbol(&self) -> char {
        self.kind().symbol()
    }

    fn in_bounds(&self, bounds: &Bounds) -> bool {
        bounds.contains(self.body().center())
    }
}

/// The player ship.
///
/// Moves with boundary clamping: leaving the playfield stops it dead on both
/// axes, an inelastic wall stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    body: Body,
    boost: f64,
}

impl Ship {
    pub fn new(position: Point2, velocity: Vec2, boost: f64) -> Self {
        Self {
            body: Body::new(position, velocity, ship::RADIUS, ship::MASS),
            boost,
        }
    }

    pub fn boost_up(&mut self) {
        self.body.shift(Vec2::new(0.0, self.boost));
    }

    pub fn boost_down(&mut self) {
        self.body.shift(Vec2::new(0.0, -self.boost));
    }

    pub fn boost_left(&mut self) {
        self.body.shift(Vec2::new(-self.boost, 0.0));
    }

    pub fn boost_right(&mut self) {
        self.body.shift(Vec2::new(self.boost, 0.0));
    }

    /// Integrate one step, then clamp back inside `bounds`.
    ///
    /// A clamped ship loses its entire velocity, not just the offending
    /// axis component.
    pub fn advance(&mut self, bounds: &Bounds) {
        self.body.advance();

        if bounds.contains(self.body.center()) {
            return;
        }

        self.body.set_center(bounds.clamp(self.body.center()));
        self.body.halt();
    }
}

impl Entity for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Ship
    }
}

/// A passive asteroid drifting down through the playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    body: Body,
}

impl Asteroid {
    pub fn new(position: Point2, velocity: Vec2, radius: f64, mass: f64) -> Self {
        Self {
            body: Body::new(position, velocity, radius, mass),
        }
    }

    /// Explosion left behind when this asteroid is destroyed: same center
    /// and radius, zero velocity.
    pub fn explode(&self) -> Explosion {
        Explosion::new(self.body.center(), self.body.radius(), self.body.mass())
    }
}

impl Entity for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Asteroid
    }
}

/// A missile launched from the ship, flying straight up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    body: Body,
}

impl Missile {
    pub fn new(position: Point2, velocity: Vec2, radius: f64, mass: f64) -> Self {
        Self {
            body: Body::new(position, velocity, radius, mass),
        }
    }
}

impl Entity for Missile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Missile
    }
}

/// A short-lived decaying explosion.
///
/// The playfield decrements the countdown once per tick and prunes the
/// explosion when it reaches zero. Explosions do not take part in the
/// collision pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    body: Body,
    ticks_remaining: u32,
}

impl Explosion {
    pub fn new(center: Point2, radius: f64, mass: f64) -> Self {
        Self {
            body: Body::new(center, Vec2::ZERO, radius, mass),
            ticks_remaining: explosion::LIFETIME_TICKS,
        }
    }

    pub fn is_active(&self) -> bool {
        self.ticks_remaining > 0
    }

    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }

    /// Burn down one tick of remaining lifetime
    pub fn tick(&mut self) {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
    }
}

impl Entity for Explosion {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Explosion
    }
}
