//! Astroblitz simulation engine
//!
//! A deterministic, fixed-step 2D space-shooter arena: a player ship dodges
//! and shoots procedurally spawned asteroids inside a bounded playfield,
//! with momentum-conserving collisions, advanced one tick at a time.
//!
//! The engine is synchronous and single-threaded. It touches the outside
//! world only through the capability traits in [`ports`]: a random source
//! for procedural generation, a non-blocking input source for player
//! commands, and a render sink that receives one complete snapshot per
//! tick. Adapters for all three ship with the crate ([`rng`],
//! [`game::command_queue`], [`render`]).

pub mod config;
pub mod game;
pub mod ports;
pub mod render;
pub mod rng;
pub mod util;
