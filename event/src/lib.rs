//! Typed, single-threaded publish/subscribe channels.
//!
//! A [`Channel<T>`] keeps an ordered list of subscriptions and delivers each
//! dispatched value to every subscriber synchronously, in the order they
//! subscribed. Subscriptions are either persistent or one-shot, and are
//! identified by their [`Handler`] so the same handler value can be used to
//! remove them later.
//!
//! # Example
//!
//! ```rust
//! use rusty_event::{Channel, Handler};
//!
//! let channel = Channel::<String>::new();
//! let greet = Handler::new(|name: &String| println!("hello, {name}"));
//!
//! let unsubscribe = channel.subscribe(&greet);
//! channel.dispatch(&"world".to_string());
//!
//! unsubscribe.revoke();
//! assert!(channel.is_empty());
//! ```

pub mod channel;
pub mod handler;
pub mod subscribable;
pub mod token;

pub use channel::{Channel, WeakChannel};
pub use handler::{Handler, Mode};
pub use subscribable::Subscribable;
pub use token::Unsubscribe;
