//! Common payload types used across benchmarks.
//!
//! These payloads are designed to be representative of real event values
//! in terms of size: a small `Copy` tick and a heap-backed message.

use std::{cell::Cell, rc::Rc};

use rusty_event::Handler;

/// Fixed-step tick payload (16 bytes).
#[derive(Clone, Copy, Debug, Default)]
pub struct Tick {
    pub frame: u64,
    pub delta: f32,
}

/// Message payload with owned, heap-allocated data.
#[derive(Clone, Debug, Default)]
pub struct Message {
    pub topic: String,
    pub body: Vec<u8>,
}

impl Message {
    /// Creates a message with a body of `len` bytes.
    pub fn sized(topic: &str, len: usize) -> Self {
        Self {
            topic: topic.to_string(),
            body: vec![0; len],
        }
    }
}

/// Shared call counter for benchmark handlers.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Rc<Cell<u64>>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh handler that bumps this counter on every call.
    pub fn handler<T: 'static>(&self) -> Handler<T> {
        let calls = Rc::clone(&self.0);
        Handler::new(move |_: &T| calls.set(calls.get() + 1))
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}
