pub mod body;
pub mod command_queue;
pub mod constants;
pub mod entities;
pub mod field;
pub mod game_loop;
pub mod snapshot;
