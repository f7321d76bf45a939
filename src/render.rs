//! RenderSink adapters: snapshot publication for a separate display context
//! and a logging sink for headless runs.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::game::snapshot::Snapshot;
use crate::ports::RenderSink;

/// Latest-snapshot cell.
///
/// The loop publishes each tick's snapshot by replacing the stored `Arc`;
/// readers on other threads grab the current one without ever observing a
/// partially updated playfield. Cloning the cell shares the same slot.
#[derive(Clone, Default)]
pub struct SnapshotCell {
    slot: Arc<RwLock<Option<Arc<Snapshot>>>>,
}

impl SnapshotCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently published snapshot, if any
    pub fn latest(&self) -> Option<Arc<Snapshot>> {
        self.slot.read().clone()
    }
}

impl RenderSink for SnapshotCell {
    fn render(&mut self, snapshot: Snapshot) {
        *self.slot.write() = Some(Arc::new(snapshot));
    }
}

/// Sink that logs a one-line summary every `every` ticks
pub struct LogSink {
    every: u64,
}

impl LogSink {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl RenderSink for LogSink {
    fn render(&mut self, snapshot: Snapshot) {
        use crate::game::entities::Entity;

        if snapshot.tick % self.every == 0 {
            let ship = snapshot.ship.body().center();
            info!(
                tick = snapshot.tick,
                ship_x = ship.x,
                ship_y = ship.y,
                asteroids = snapshot.asteroids.len(),
                missiles = snapshot.missiles.len(),
                explosions = snapshot.explosions.len(),
                "frame"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::GameConfig;
    use crate::game::field::Field;
    use crate::ports::RandomSource;

    struct MinRandom;

    impl RandomSource for MinRandom {
        fn probability(&mut self) -> f64 {
            0.0
        }
        fn uniform(&mut self, min: f64, _max: f64) -> f64 {
            min
        }
        fn uniform_int(&mut self, min: i32, _max: i32) -> i32 {
            min
        }
    }

    fn sample_snapshot(tick: u64) -> Snapshot {
        let field = Field::new(Box::new(MinRandom), &GameConfig::default());
        field.snapshot(tick)
    }

    #[test]
    fn test_cell_starts_empty() {
        let cell = SnapshotCell::new();
        assert!(cell.latest().is_none());
    }

    #[test]
    fn test_cell_replaces_whole_snapshot() {
        let mut cell = SnapshotCell::new();

        cell.render(sample_snapshot(1));
        cell.render(sample_snapshot(2));

        assert_eq!(cell.latest().unwrap().tick, 2);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let mut cell = SnapshotCell::new();
        let reader = cell.clone();

        cell.render(sample_snapshot(5));

        assert_eq!(reader.latest().unwrap().tick, 5);
    }

    #[test]
    fn test_reader_on_another_thread_sees_publication() {
        let mut cell = SnapshotCell::new();
        let reader = cell.clone();

        cell.render(sample_snapshot(3));

        let seen = std::thread::spawn(move || reader.latest().map(|s| s.tick))
            .join()
            .unwrap();
        assert_eq!(seen, Some(3));
    }
}
