//! Fixed engine constants. Tunables that vary per deployment live in
//! [`crate::config::GameConfig`] instead.

/// Ship parameters
pub mod ship {
    /// Collision radius of the player ship
    pub const RADIUS: f64 = 1.0;
    /// Mass of the player ship
    pub const MASS: f64 = 10.0;
    /// Vertical spawn position, just above the lower boundary
    pub const SPAWN_HEIGHT: f64 = 1.0;
}

/// Explosion parameters
pub mod explosion {
    /// Number of ticks an explosion stays visible
    pub const LIFETIME_TICKS: u32 = 100;
}

/// Loop timing
pub mod timing {
    /// Simulation tick rate in Hz
    pub const TICK_RATE: u32 = 30;
    /// Tick duration in milliseconds
    pub const TICK_DURATION_MS: u64 = 1000 / TICK_RATE as u64;
}
