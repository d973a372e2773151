//! # Command Sinks
//!
//! The editor model receives edits through a [`CommandSink`]. This module also
//! provides [`CommandQueue`], an in-process sink that records every command
//! with the time it was dispatched, for hosts that forward edits in batches.
//!
//! ```text
//! 1. The dispatcher submits a command
//! 2. The queue timestamps it and appends it
//! 3. The host drains the queue and forwards the commands to the model
//! ```

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::command::EditCommand;
use crate::error::TransformResult;

/// Default number of commands kept before the oldest are dropped.
const DEFAULT_MAX_SIZE: usize = 1000;

/// Receives edit commands on behalf of the editor model.
pub trait CommandSink {
    /// Submit one command.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Sink`](crate::TransformError::Sink) if the
    /// model refuses the command.
    fn submit(&mut self, command: EditCommand) -> TransformResult<()>;
}

impl CommandSink for Vec<EditCommand> {
    fn submit(&mut self, command: EditCommand) -> TransformResult<()> {
        self.push(command);
        Ok(())
    }
}

impl<S: CommandSink + ?Sized> CommandSink for &mut S {
    fn submit(&mut self, command: EditCommand) -> TransformResult<()> {
        (**self).submit(command)
    }
}

/// A dispatched command and when it was dispatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedCommand {
    /// The command.
    pub command: EditCommand,
    /// Milliseconds since epoch.
    pub timestamp: u64,
}

/// Bounded, serializable record of dispatched commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandQueue {
    pending: VecDeque<QueuedCommand>,
    /// Oldest commands are dropped when exceeded.
    max_size: usize,
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandQueue {
    /// Create a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Create a queue with a custom max size.
    #[must_use]
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::new()
        }
    }

    /// Append a command stamped with the given time.
    pub fn enqueue_at(&mut self, command: EditCommand, timestamp: u64) {
        if self.max_size == 0 {
            return;
        }
        if self.pending.len() >= self.max_size {
            if let Some(dropped) = self.pending.pop_front() {
                tracing::warn!("Command queue full, dropping {}", dropped.command.name());
            }
        }
        self.pending.push_back(QueuedCommand { command, timestamp });
    }

    /// Get the number of pending commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Peek at pending commands without removing them.
    #[must_use]
    pub fn pending(&self) -> &VecDeque<QueuedCommand> {
        &self.pending
    }

    /// The most recently dispatched command.
    #[must_use]
    pub fn last(&self) -> Option<&EditCommand> {
        self.pending.back().map(|q| &q.command)
    }

    /// Take all pending commands, oldest first.
    pub fn take_pending(&mut self) -> Vec<QueuedCommand> {
        self.pending.drain(..).collect()
    }

    /// Serialize the pending commands to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> TransformResult<String> {
        Ok(serde_json::to_string_pretty(&self.pending)?)
    }
}

impl CommandSink for CommandQueue {
    fn submit(&mut self, command: EditCommand) -> TransformResult<()> {
        self.enqueue_at(command, now_ms());
        Ok(())
    }
}

/// Get the current Unix timestamp in milliseconds.
#[allow(clippy::cast_possible_truncation)] // Timestamps won't exceed u64 for billions of years
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip() -> EditCommand {
        EditCommand::FlipHorizontal { elements: vec![] }
    }

    #[test]
    fn test_submit_records_command() {
        let mut queue = CommandQueue::new();
        assert!(queue.is_empty());

        queue.submit(flip()).expect("submit");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.last(), Some(&flip()));
        assert!(queue.pending()[0].timestamp > 0);
    }

    #[test]
    fn test_max_size_drops_oldest() {
        let mut queue = CommandQueue::with_max_size(2);
        queue.enqueue_at(flip(), 1);
        queue.enqueue_at(flip(), 2);
        queue.enqueue_at(EditCommand::FlipVertical { elements: vec![] }, 3);

        assert_eq!(queue.len(), 2);
        let taken = queue.take_pending();
        assert_eq!(taken[0].timestamp, 2);
        assert_eq!(taken[1].timestamp, 3);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut queue = CommandQueue::with_max_size(0);
        queue.enqueue_at(flip(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_to_json_lists_commands() {
        let mut queue = CommandQueue::new();
        queue.enqueue_at(flip(), 7);
        let json = queue.to_json().expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value[0]["command"]["command"], "flip_horizontal");
        assert_eq!(value[0]["timestamp"], 7);
    }

    #[test]
    fn test_vec_sink() {
        let mut sink: Vec<EditCommand> = Vec::new();
        sink.submit(flip()).expect("submit");
        assert_eq!(sink, vec![flip()]);
    }
}
