//! Engine configuration: one explicit value constructed at startup and
//! passed into the playfield and loop constructors. No ambient globals.

use std::fmt::Display;
use std::str::FromStr;

use crate::game::constants::timing;

/// All numeric tunables of the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Playfield width in world units
    pub field_width: u32,
    /// Playfield height in world units
    pub field_height: u32,
    /// Velocity added per ship boost command
    pub ship_boost: f64,
    /// Missile collision radius
    pub missile_radius: f64,
    /// Missile mass
    pub missile_mass: f64,
    /// Clearance between the ship's forward edge and a fresh missile
    pub missile_gap: f64,
    /// Fixed upward missile speed
    pub missile_speed: f64,
    /// Horizontal drift bound for spawned asteroids
    pub asteroid_max_yaw: f64,
    /// Slowest downward asteroid speed
    pub asteroid_min_speed: f64,
    /// Fastest downward asteroid speed
    pub asteroid_max_speed: f64,
    /// Asteroid radius roll, lower bound (scaled by the multiplier)
    pub asteroid_min_radius: i32,
    /// Asteroid radius roll, upper bound
    pub asteroid_max_radius: i32,
    /// Scale applied to the radius roll
    pub asteroid_radius_multiplier: f64,
    /// Asteroid mass roll, lower bound (scaled by the multiplier)
    pub asteroid_min_mass: i32,
    /// Asteroid mass roll, upper bound
    pub asteroid_max_mass: i32,
    /// Scale applied to the mass roll
    pub asteroid_mass_multiplier: f64,
    /// Coefficient of restitution for the collision pass, in [0, 1]
    pub restitution: f64,
    /// Per-tick asteroid spawn probability, in [0, 1]
    pub asteroid_spawn_chance: f64,
    /// Seed for the default random source
    pub random_seed: u64,
    /// Tick limit for the headless runner; None runs until stopped
    pub max_ticks: Option<u64>,
    /// Wall-clock pacing between ticks in the runner
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 64,
            field_height: 32,
            ship_boost: 1.0,
            missile_radius: 0.5,
            missile_mass: 1.0,
            missile_gap: 0.5,
            missile_speed: 1.0,
            asteroid_max_yaw: 0.5,
            asteroid_min_speed: 1.0,
            asteroid_max_speed: 2.0,
            asteroid_min_radius: 1,
            asteroid_max_radius: 4,
            asteroid_radius_multiplier: 0.5,
            asteroid_min_mass: 1,
            asteroid_max_mass: 10,
            asteroid_mass_multiplier: 1.0,
            restitution: 0.8,
            asteroid_spawn_chance: 0.2,
            random_seed: 42,
            max_ticks: None,
            tick_interval_ms: timing::TICK_DURATION_MS,
        }
    }
}

/// Read an environment variable, keeping `current` on absence or parse
/// failure (with a warning)
fn env_or<T: FromStr + Display>(name: &str, current: T) -> T {
    match std::env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid {} '{}', using default {}", name, raw, current);
                current
            }
        },
        Err(_) => current,
    }
}

impl GameConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let defaults = Self::default();

        let max_ticks = match std::env::var("MAX_TICKS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Invalid MAX_TICKS '{}', running unbounded", raw);
                    None
                }
            },
            Err(_) => defaults.max_ticks,
        };

        Self {
            field_width: env_or("FIELD_WIDTH", defaults.field_width),
            field_height: env_or("FIELD_HEIGHT", defaults.field_height),
            ship_boost: env_or("SHIP_BOOST", defaults.ship_boost),
            missile_radius: env_or("MISSILE_RADIUS", defaults.missile_radius),
            missile_mass: env_or("MISSILE_MASS", defaults.missile_mass),
            missile_gap: env_or("MISSILE_GAP", defaults.missile_gap),
            missile_speed: env_or("MISSILE_SPEED", defaults.missile_speed),
            asteroid_max_yaw: env_or("ASTEROID_MAX_YAW", defaults.asteroid_max_yaw),
            asteroid_min_speed: env_or("ASTEROID_MIN_SPEED", defaults.asteroid_min_speed),
            asteroid_max_speed: env_or("ASTEROID_MAX_SPEED", defaults.asteroid_max_speed),
            asteroid_min_radius: env_or("ASTEROID_MIN_RADIUS", defaults.asteroid_min_radius),
            asteroid_max_radius: env_or("ASTEROID_MAX_RADIUS", defaults.asteroid_max_radius),
            asteroid_radius_multiplier: env_or(
                "ASTEROID_RADIUS_MULTIPLIER",
                defaults.asteroid_radius_multiplier,
            ),
            asteroid_min_mass: env_or("ASTEROID_MIN_MASS", defaults.asteroid_min_mass),
            asteroid_max_mass: env_or("ASTEROID_MAX_MASS", defaults.asteroid_max_mass),
            asteroid_mass_multiplier: env_or(
                "ASTEROID_MASS_MULTIPLIER",
                defaults.asteroid_mass_multiplier,
            ),
            restitution: env_or("RESTITUTION", defaults.restitution),
            asteroid_spawn_chance: env_or("ASTEROID_SPAWN_CHANCE", defaults.asteroid_spawn_chance),
            random_seed: env_or("RANDOM_SEED", defaults.random_seed),
            max_ticks,
            tick_interval_ms: env_or("TICK_INTERVAL_MS", defaults.tick_interval_ms),
        }
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), String> {
        if self.field_width == 0 || self.field_height == 0 {
            return Err("field dimensions must be at least 1".to_string());
        }
        if self.ship_boost <= 0.0 {
            return Err("ship_boost must be positive".to_string());
        }
        if self.missile_radius <= 0.0 || self.missile_mass <= 0.0 {
            return Err("missile radius and mass must be positive".to_string());
        }
        if self.missile_speed <= 0.0 {
            return Err("missile_speed must be positive".to_string());
        }
        if self.asteroid_max_yaw < 0.0 {
            return Err("asteroid_max_yaw cannot be negative".to_string());
        }
        if self.asteroid_min_speed <= 0.0 || self.asteroid_min_speed > self.asteroid_max_speed {
            return Err("asteroid speed range must be positive and ordered".to_string());
        }
        if self.asteroid_min_radius < 1 || self.asteroid_min_radius > self.asteroid_max_radius {
            return Err("asteroid radius range must start at 1 and be ordered".to_string());
        }
        if self.asteroid_min_mass < 1 || self.asteroid_min_mass > self.asteroid_max_mass {
            return Err("asteroid mass range must start at 1 and be ordered".to_string());
        }
        if self.asteroid_radius_multiplier <= 0.0 || self.asteroid_mass_multiplier <= 0.0 {
            return Err("asteroid multipliers must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err("restitution must be within [0.0, 1.0]".to_string());
        }
        if !(0.0..=1.0).contains(&self.asteroid_spawn_chance) {
            return Err("asteroid_spawn_chance must be within [0.0, 1.0]".to_string());
        }
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be at least 1".to_string());
        }
        Ok(())
    }
}
