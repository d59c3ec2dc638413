//! Re-entrant relay benchmark scenario.
//!
//! Simulates handlers that react to an event by dispatching a follow-up event
//! on the same channel:
//! - One relay handler re-dispatches until the chain reaches `depth`
//! - A fixed audience of persistent listeners observes every hop
//! - A one-shot watchdog is armed each round and must fire exactly once
//!
//! This scenario tests:
//! - Nested dispatch cost (one snapshot per hop)
//! - One-shot retirement under re-entrant dispatch

use std::{cell::Cell, rc::Rc};

use rusty_event::{Channel, Handler};

use crate::payloads::{CallCounter, Tick};
use crate::scenarios::Scenario;

/// Configuration for the relay benchmark.
pub struct RelayConfig {
    /// Number of hops per round.
    pub depth: u64,
    /// Persistent listeners observing every hop.
    pub listeners: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            depth: 8,
            listeners: 32,
        }
    }
}

pub struct RelayScenario {
    config: RelayConfig,
    channel: Channel<Tick>,
    audience: CallCounter,
    watchdog: Handler<Tick>,
    watchdog_fired: Rc<Cell<u64>>,
}

impl RelayScenario {
    pub fn new() -> Self {
        Self::with_config(RelayConfig::default())
    }

    pub fn with_config(config: RelayConfig) -> Self {
        let watchdog_fired = Rc::new(Cell::new(0));
        let fired = Rc::clone(&watchdog_fired);
        Self {
            channel: Channel::with_capacity(config.listeners + 2),
            audience: CallCounter::new(),
            watchdog: Handler::new(move |_: &Tick| fired.set(fired.get() + 1)),
            watchdog_fired,
            config,
        }
    }

    /// Total calls received by the listener audience.
    pub fn audience_calls(&self) -> u64 {
        self.audience.get()
    }

    /// Number of times the one-shot watchdog has fired.
    pub fn watchdog_fired(&self) -> u64 {
        self.watchdog_fired.get()
    }
}

impl Default for RelayScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario for RelayScenario {
    fn name(&self) -> &'static str {
        "relay"
    }

    fn description(&self) -> &'static str {
        "Handlers re-dispatch on their own channel to build a chain of nested dispatches"
    }

    fn subscriber_count(&self) -> usize {
        self.config.listeners + 1
    }

    fn setup(&mut self) {
        let weak = self.channel.downgrade();
        let depth = self.config.depth;
        let relay = Handler::new(move |tick: &Tick| {
            if tick.frame + 1 < depth {
                if let Some(channel) = weak.upgrade() {
                    channel.dispatch(&Tick {
                        frame: tick.frame + 1,
                        ..*tick
                    });
                }
            }
        });
        self.channel.subscribe(&relay);

        for _ in 0..self.config.listeners {
            self.channel.subscribe(&self.audience.handler());
        }
    }

    fn update(&mut self) {
        self.channel.subscribe_once(&self.watchdog);
        self.channel.dispatch(&Tick {
            frame: 0,
            delta: 1.0 / 60.0,
        });
    }

    fn teardown(&mut self) {
        self.channel.clear();
    }
}
