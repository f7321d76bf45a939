//! Capability interfaces the simulation core consumes and provides.
//!
//! Adapters live outside the core: the random source wraps an RNG, the input
//! source is fed by whatever reads the player's device, and the render sink
//! hands snapshots to a display or wire format. The loop never blocks on any
//! of them.

use crate::game::snapshot::Snapshot;

/// Source of randomness for procedural generation.
///
/// The core draws through this interface only, so tests and replays can
/// substitute deterministic implementations.
pub trait RandomSource: Send {
    /// A probability in [0, 1)
    fn probability(&mut self) -> f64;

    /// A uniform double in [min, max]
    fn uniform(&mut self, min: f64, max: f64) -> f64;

    /// A uniform integer in [min, max]
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;
}

/// Player command, as delivered by an input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    LaunchMissile,
    Pause,
}

/// Source of player commands.
///
/// `next_command` must never block: an empty source returns `None` and the
/// tick proceeds without input.
pub trait InputSource: Send {
    fn next_command(&mut self) -> Option<Command>;
}

/// Sink receiving one complete snapshot per tick.
///
/// The snapshot is handed over by value; the sink owns it and the loop never
/// mutates published state afterwards.
pub trait RenderSink: Send {
    fn render(&mut self, snapshot: Snapshot);
}
