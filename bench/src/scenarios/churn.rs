//! Subscriber churn benchmark scenario.
//!
//! Simulates a channel whose audience keeps changing:
//! - 1,000 subscribers, a quarter of them one-shot
//! - Every round replaces a random slice of subscribers by reference
//! - Several dispatches per round, then one-shot subscribers re-arm
//!
//! This scenario tests:
//! - Snapshot cost of dispatch with a large subscriber list
//! - Linear removal-by-handler cost under steady churn
//! - One-shot retirement inside dispatch

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rusty_event::{Channel, Handler, Mode};

use crate::payloads::{CallCounter, Message};
use crate::scenarios::Scenario;

/// Configuration for the churn benchmark.
pub struct ChurnConfig {
    /// Number of subscribers kept registered.
    pub subscriber_count: usize,
    /// Subscribers replaced per round.
    pub churn_per_round: usize,
    /// Probability that a new subscriber is one-shot.
    pub once_ratio: f64,
    /// Dispatches per round.
    pub dispatches_per_round: usize,
    /// Size of each dispatched message body.
    pub message_bytes: usize,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for ChurnConfig {
    fn default() -> Self {
        Self {
            subscriber_count: 1_000,
            churn_per_round: 50,
            once_ratio: 0.25,
            dispatches_per_round: 4,
            message_bytes: 256,
            seed: 12345,
        }
    }
}

pub struct ChurnScenario {
    config: ChurnConfig,
    channel: Channel<Message>,
    subscribers: Vec<(Mode, Handler<Message>)>,
    counter: CallCounter,
    message: Message,
    rng: ChaCha8Rng,
}

impl ChurnScenario {
    pub fn new() -> Self {
        Self::with_config(ChurnConfig::default())
    }

    pub fn with_config(config: ChurnConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let message = Message::sized("churn", config.message_bytes);
        Self {
            channel: Channel::with_capacity(config.subscriber_count),
            subscribers: Vec::with_capacity(config.subscriber_count),
            counter: CallCounter::new(),
            message,
            rng,
            config,
        }
    }

    /// Number of subscriptions currently registered on the channel.
    pub fn current_count(&self) -> usize {
        self.channel.len()
    }

    /// Dispatches performed by each [`update()`](Scenario::update).
    pub fn dispatches_per_round(&self) -> usize {
        self.config.dispatches_per_round
    }

    /// Total handler invocations so far.
    pub fn deliveries(&self) -> u64 {
        self.counter.get()
    }

    fn random_mode(&mut self) -> Mode {
        if self.rng.gen_bool(self.config.once_ratio) {
            Mode::OneShot
        } else {
            Mode::Persistent
        }
    }

    fn register(&self, mode: Mode, handler: &Handler<Message>) {
        match mode {
            Mode::Persistent => self.channel.subscribe(handler),
            Mode::OneShot => self.channel.subscribe_once(handler),
        };
    }

    fn replace_random_subscriber(&mut self) {
        let index = self.rng.gen_range(0..self.subscribers.len());
        self.channel.unsubscribe(&self.subscribers[index].1);

        let mode = self.random_mode();
        let handler = self.counter.handler();
        self.register(mode, &handler);
        self.subscribers[index] = (mode, handler);
    }

    fn rearm_one_shots(&self) {
        for (mode, handler) in &self.subscribers {
            if *mode == Mode::OneShot {
                self.channel.subscribe_once(handler);
            }
        }
    }
}

impl Default for ChurnScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario for ChurnScenario {
    fn name(&self) -> &'static str {
        "churn"
    }

    fn description(&self) -> &'static str {
        "Mixed persistent/one-shot subscribers replaced by reference between dispatches"
    }

    fn subscriber_count(&self) -> usize {
        self.config.subscriber_count
    }

    fn setup(&mut self) {
        for _ in 0..self.config.subscriber_count {
            let mode = self.random_mode();
            let handler = self.counter.handler();
            self.register(mode, &handler);
            self.subscribers.push((mode, handler));
        }
    }

    fn update(&mut self) {
        if !self.subscribers.is_empty() {
            for _ in 0..self.config.churn_per_round {
                self.replace_random_subscriber();
            }
        }

        for _ in 0..self.config.dispatches_per_round {
            self.channel.dispatch(&self.message);
        }

        self.rearm_one_shots();
    }

    fn teardown(&mut self) {
        self.channel.clear();
        self.subscribers.clear();
    }
}
