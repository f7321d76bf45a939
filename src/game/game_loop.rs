//! Fixed-step simulation loop: input, update, collisions, render, in that
//! order, once per tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::body::CollisionError;
use crate::game::field::Field;
use crate::ports::{Command, InputSource, RandomSource, RenderSink};

/// Loop execution state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Paused,
    /// Terminal; only reached through the stop signal
    Stopped,
}

/// One-shot termination signal, checked once per tick boundary.
///
/// Clonable so an outside context (signal handler, supervisor) can hold it
/// while the loop runs.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// The simulation loop.
///
/// Owns the playfield and drives it through the tick protocol against an
/// injected input source and render sink. Runs on a single thread; a tick is
/// atomic from the simulation's point of view.
pub struct GameLoop {
    field: Field,
    controller: Box<dyn InputSource>,
    visualizer: Box<dyn RenderSink>,
    status: Status,
    stop: StopSignal,
    ticks: u64,
}

impl GameLoop {
    /// Whether movement boosts apply while the loop is paused.
    ///
    /// Single decision point for the pause policy; nothing else in the loop
    /// depends on it.
    const BOOST_WHILE_PAUSED: bool = true;

    pub fn new(
        random: Box<dyn RandomSource>,
        controller: Box<dyn InputSource>,
        visualizer: Box<dyn RenderSink>,
        config: &GameConfig,
    ) -> Self {
        Self {
            field: Field::new(random, config),
            controller,
            visualizer,
            status: Status::Playing,
            stop: StopSignal::new(),
            ticks: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Number of completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Handle for requesting termination from another context
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// Stop immediately; the loop will not tick again
    pub fn stop(&mut self) {
        info!(ticks = self.ticks, "simulation stopped");
        self.status = Status::Stopped;
    }

    /// Pull at most one command from the input source and apply it
    pub fn process_player_input(&mut self) {
        let Some(command) = self.controller.next_command() else {
            return;
        };

        match command {
            Command::Pause => self.toggle_pause(),
            Command::LaunchMissile => self.field.generate_missile(),
            Command::MoveUp if self.boosts_apply() => self.field.ship_mut().boost_up(),
            Command::MoveDown if self.boosts_apply() => self.field.ship_mut().boost_down(),
            Command::MoveLeft if self.boosts_apply() => self.field.ship_mut().boost_left(),
            Command::MoveRight if self.boosts_apply() => self.field.ship_mut().boost_right(),
            _ => debug!(?command, "movement command ignored while paused"),
        }
    }

    fn boosts_apply(&self) -> bool {
        self.status == Status::Playing || Self::BOOST_WHILE_PAUSED
    }

    fn toggle_pause(&mut self) {
        self.status = match self.status {
            Status::Playing => {
                info!("simulation paused");
                Status::Paused
            }
            Status::Paused => {
                info!("simulation resumed");
                Status::Playing
            }
            Status::Stopped => Status::Stopped,
        };
    }

    /// Advance the playfield one step: move everything, roll the asteroid
    /// spawn, expire explosions, prune what left the field.
    ///
    /// No-op unless the loop is playing.
    pub fn update_space_objects(&mut self) {
        if self.status != Status::Playing {
            return;
        }

        self.field.move_ship();
        self.field.move_asteroids();
        self.field.move_missiles();
        self.field.maybe_generate_asteroid();
        self.field.tick_explosions();
        self.field.trim_asteroids();
        self.field.trim_missiles();
    }

    /// Resolve all impacts, then detonate missile/asteroid contacts.
    ///
    /// No-op unless the loop is playing, like the update pass.
    pub fn handle_collisions(&mut self) -> Result<(), CollisionError> {
        if self.status != Status::Playing {
            return Ok(());
        }

        let restitution = self.field.config().restitution;
        self.field.resolve_collisions(restitution)?;
        self.field.detonate_struck_asteroids();
        Ok(())
    }

    /// Hand the current snapshot to the render sink; always executes
    pub fn render_space_field(&mut self) {
        self.visualizer.render(self.field.snapshot(self.ticks));
    }

    /// One full iteration of the loop protocol
    pub fn tick(&mut self) -> Result<(), CollisionError> {
        self.process_player_input();
        self.update_space_objects();
        self.handle_collisions()?;
        self.render_space_field();
        self.ticks += 1;
        Ok(())
    }

    /// Execute exactly `max_ticks` iterations
    pub fn run_ticks(&mut self, max_ticks: u64) -> Result<(), CollisionError> {
        for _ in 0..max_ticks {
            self.tick()?;
        }
        Ok(())
    }

    /// Execute until the stop signal is observed at a tick boundary
    pub fn run_until_stopped(&mut self) -> Result<(), CollisionError> {
        while self.status != Status::Stopped {
            if self.stop.is_triggered() {
                self.stop();
                break;
            }
            self.tick()?;
        }
        Ok(())
    }
}
