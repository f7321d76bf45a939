use std::io::BufRead;
use std::thread;
use std::time::Duration;

use tracing::{info, warn, Level};

use astroblitz::config::GameConfig;
use astroblitz::game::command_queue::{CommandQueue, CommandSender};
use astroblitz::game::game_loop::{GameLoop, Status};
use astroblitz::ports::Command;
use astroblitz::render::SnapshotCell;
use astroblitz::rng::SeededRandom;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("astroblitz v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = GameConfig::load_or_default();
    config.validate().map_err(anyhow::Error::msg)?;
    info!(
        "Configuration loaded: field {}x{}, seed {}",
        config.field_width, config.field_height, config.random_seed
    );

    // Player commands arrive from a keyboard reader thread through a
    // bounded queue; the loop drains it without blocking
    let queue = CommandQueue::default();
    let keyboard_sender = queue.sender();
    thread::spawn(move || read_keyboard(keyboard_sender));

    // Snapshots go out through a latest-value cell; a reporter thread
    // drains it independently of the simulation
    let cell = SnapshotCell::new();
    let reporter_cell = cell.clone();
    thread::spawn(move || report_snapshots(reporter_cell));
    let final_cell = cell.clone();

    let mut game = GameLoop::new(
        Box::new(SeededRandom::new(config.random_seed)),
        Box::new(queue),
        Box::new(cell),
        &config,
    );

    match config.max_ticks {
        Some(n) => info!("Running for {} ticks", n),
        None => info!("Running until stopped"),
    }

    // Fixed-step pacing; the core itself has no notion of wall-clock time
    let interval = Duration::from_millis(config.tick_interval_ms);
    let mut remaining = config.max_ticks;
    while game.status() != Status::Stopped {
        if remaining == Some(0) {
            break;
        }
        game.tick()?;
        if let Some(left) = remaining.as_mut() {
            *left -= 1;
        }
        thread::sleep(interval);
    }

    info!(ticks = game.ticks(), "Simulation finished");
    if let Some(snapshot) = final_cell.latest() {
        info!("Final state: {}", serde_json::to_string(&*snapshot)?);
    }

    Ok(())
}

/// Map keystrokes to commands: WASD moves, space or `f` fires, `p` pauses
fn read_keyboard(sender: CommandSender) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        for ch in line.chars() {
            let command = match ch.to_ascii_lowercase() {
                'w' => Command::MoveUp,
                's' => Command::MoveDown,
                'a' => Command::MoveLeft,
                'd' => Command::MoveRight,
                ' ' | 'f' => Command::LaunchMissile,
                'p' => Command::Pause,
                _ => continue,
            };
            if sender.try_send(command).is_err() {
                warn!("Command dropped, queue unavailable");
            }
        }
    }
}

/// Periodic one-line status from the latest published snapshot
fn report_snapshots(cell: SnapshotCell) {
    loop {
        thread::sleep(Duration::from_secs(1));
        if let Some(snapshot) = cell.latest() {
            info!(
                tick = snapshot.tick,
                entities = snapshot.entity_count(),
                "status"
            );
        }
    }
}
