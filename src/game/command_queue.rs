//! Bounded command queue between the input context and the simulation loop.
//!
//! Uses a crossbeam channel so the producing I/O context and the consuming
//! loop never share an unsynchronized collection. The loop side never
//! blocks: an empty queue yields no command.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use thiserror::Error;

use crate::ports::{Command, InputSource};

/// Submit-side errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandQueueError {
    /// Queue is full; the command is dropped (backpressure)
    #[error("command queue is full")]
    Full,
    /// Consumer side is gone
    #[error("command queue is disconnected")]
    Disconnected,
}

/// Bounded FIFO command queue.
///
/// The queue itself is the consumer end and implements [`InputSource`];
/// producers hold [`CommandSender`] clones.
pub struct CommandQueue {
    sender: Sender<Command>,
    receiver: Receiver<Command>,
    capacity: usize,
}

impl CommandQueue {
    /// Create a queue holding at most `capacity` pending commands
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            capacity,
        }
    }

    /// New producer handle; each input adapter keeps its own clone
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            sender: self.sender.clone(),
        }
    }

    /// Number of commands waiting to be consumed
    #[inline]
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        // Plenty for one player between ticks
        Self::new(64)
    }
}

impl InputSource for CommandQueue {
    fn next_command(&mut self) -> Option<Command> {
        self.receiver.try_recv().ok()
    }
}

/// Clonable producer handle for input adapters
#[derive(Clone)]
pub struct CommandSender {
    sender: Sender<Command>,
}

impl CommandSender {
    /// Submit a command without blocking
    pub fn try_send(&self, command: Command) -> Result<(), CommandQueueError> {
        self.sender.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => CommandQueueError::Full,
            TrySendError::Disconnected(_) => CommandQueueError::Disconnected,
        })
    }
}
