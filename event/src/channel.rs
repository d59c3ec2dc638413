//! Synchronous, ordered event channel.
//!
//! This module provides [`Channel`], a list of subscriptions for a single payload
//! type. Values passed to [`dispatch()`](Channel::dispatch) are delivered to every
//! subscriber, on the caller's stack, in the order the subscribers were added.
//!
//! # Snapshot Dispatch
//!
//! A dispatch works in three steps:
//! 1. Copy the current subscription list (the snapshot)
//! 2. Drop every one-shot subscription from the live list
//! 3. Call each handler in the snapshot, in order
//!
//! The live list is never borrowed while handlers run, so handlers may subscribe,
//! unsubscribe, clear, or dispatch again on the same channel. Those changes apply
//! to later dispatches only: a handler added mid-dispatch does not see the value
//! being delivered, and a handler removed mid-dispatch still receives it if it was
//! part of the snapshot. One-shot handlers are retired before anything runs, so a
//! nested dispatch can never fire them a second time.
//!
//! # Sharing
//!
//! `Channel` is a handle: clones share the same subscription list. Handlers that
//! need to reach their own channel should capture a [`WeakChannel`] (see
//! [`downgrade()`](Channel::downgrade)) to avoid a reference cycle. Channels are
//! single-threaded and are neither `Send` nor `Sync`.
//!
//! # Example
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use rusty_event::{Channel, Handler};
//!
//! let channel = Channel::<u32>::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! let first = Handler::new(move |v: &u32| sink.borrow_mut().push(*v));
//! channel.subscribe_once(&first);
//!
//! channel.dispatch(&1);
//! channel.dispatch(&2);
//!
//! assert_eq!(*seen.borrow(), vec![1]);
//! ```

use std::{
    any::type_name,
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use log::{debug, trace};

use crate::{
    handler::{Handler, Listener, Mode},
    subscribable::Subscribable,
    token::Unsubscribe,
};

type Listeners<T> = RefCell<Vec<Listener<T>>>;

/// An ordered list of subscribers for values of type `T`.
///
/// # Capacity
///
/// [`new()`](Self::new) allocates nothing until the first subscription. Use
/// [`with_capacity()`](Self::with_capacity) when the number of subscribers is
/// known up front.
///
/// # Panics
///
/// Channel operations never panic on their own. A panic raised by a handler
/// unwinds through [`dispatch()`](Self::dispatch) to its caller, and the handlers
/// after it in that dispatch are not called. The channel stays usable: one-shot
/// subscriptions of the interrupted dispatch are already retired.
pub struct Channel<T> {
    listeners: Rc<Listeners<T>>,
}

impl<T: 'static> Channel<T> {
    /// Creates an empty channel.
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Creates an empty channel with room for `capacity` subscriptions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rusty_event::Channel;
    ///
    /// let channel = Channel::<u32>::with_capacity(16);
    /// assert!(channel.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::with_capacity(capacity))),
        }
    }

    /// Subscribes `handler` to every future dispatch.
    ///
    /// The subscription is appended after all existing ones. Subscribing the same
    /// handler twice registers two independent subscriptions. The returned token
    /// removes every subscription using `handler` when revoked.
    pub fn subscribe(&self, handler: &Handler<T>) -> Unsubscribe {
        self.push(Mode::Persistent, handler)
    }

    /// Subscribes `handler` to the next dispatch only.
    ///
    /// The subscription is removed by the first dispatch that reaches it, before
    /// the handler is called. Same token contract as [`subscribe()`](Self::subscribe).
    pub fn subscribe_once(&self, handler: &Handler<T>) -> Unsubscribe {
        self.push(Mode::OneShot, handler)
    }

    /// Removes every subscription, of either mode, registered with `handler`.
    ///
    /// Does nothing if `handler` is not subscribed.
    pub fn unsubscribe(&self, handler: &Handler<T>) {
        remove_handler(&self.listeners, handler);
    }

    /// Delivers `value` to every subscriber present when the call starts.
    ///
    /// See the [module documentation](self) for the snapshot rules that apply to
    /// handlers which modify the channel while it dispatches.
    pub fn dispatch(&self, value: &T) {
        let snapshot = {
            let mut listeners = self.listeners.borrow_mut();
            let snapshot = listeners.clone();
            listeners.retain(|listener| !listener.is_once());
            snapshot
        };

        trace!(
            "Dispatching {} to {} subscriber(s), retired {} one-shot",
            type_name::<T>(),
            snapshot.len(),
            snapshot.iter().filter(|listener| listener.is_once()).count()
        );

        for listener in &snapshot {
            listener.handler.call(value);
        }
    }

    /// Removes every subscription.
    pub fn clear(&self) {
        // Handlers may own state whose `Drop` touches this channel, so they are
        // released only after the borrow ends.
        let removed = std::mem::take(&mut *self.listeners.borrow_mut());
        debug!(
            "Cleared {} subscription(s) from {} channel",
            removed.len(),
            type_name::<T>()
        );
    }

    /// Returns the number of subscriptions, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Returns `true` if the channel has no subscriptions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Returns `true` if any subscription uses `handler`.
    pub fn contains(&self, handler: &Handler<T>) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|listener| listener.handler.same_as(handler))
    }

    /// Creates a weak handle that does not keep the subscription list alive.
    pub fn downgrade(&self) -> WeakChannel<T> {
        WeakChannel {
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn push(&self, mode: Mode, handler: &Handler<T>) -> Unsubscribe {
        self.listeners
            .borrow_mut()
            .push(Listener::new(mode, handler.clone()));
        trace!("Subscribed {:?} handler to {} channel", mode, type_name::<T>());

        let listeners = Rc::downgrade(&self.listeners);
        let handler = handler.clone();
        Unsubscribe::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                remove_handler(&listeners, &handler);
            }
        })
    }
}

/// Drops every listener whose handler is `handler`, returning how many went.
fn remove_handler<T>(listeners: &Listeners<T>, handler: &Handler<T>) -> usize {
    let removed: Vec<_> = {
        let mut listeners = listeners.borrow_mut();
        let (removed, kept) = std::mem::take(&mut *listeners)
            .into_iter()
            .partition(|listener| listener.handler.same_as(handler));
        *listeners = kept;
        removed
    };
    debug!(
        "Unsubscribed {} subscription(s) from {} channel",
        removed.len(),
        type_name::<T>()
    );
    removed.len()
}

impl<T: 'static> Subscribable<T> for Channel<T> {
    fn subscribe(&self, handler: &Handler<T>) -> Unsubscribe {
        Channel::subscribe(self, handler)
    }

    fn subscribe_once(&self, handler: &Handler<T>) -> Unsubscribe {
        Channel::subscribe_once(self, handler)
    }

    fn unsubscribe(&self, handler: &Handler<T>) {
        Channel::unsubscribe(self, handler)
    }

    fn dispatch(&self, value: &T) {
        Channel::dispatch(self, value)
    }

    fn clear(&self) {
        Channel::clear(self)
    }
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T: 'static> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        let once = listeners.iter().filter(|listener| listener.is_once()).count();
        f.debug_struct("Channel")
            .field("payload", &type_name::<T>())
            .field("persistent", &(listeners.len() - once))
            .field("one_shot", &once)
            .finish()
    }
}

/// A non-owning handle to a [`Channel`].
///
/// Handlers that act on their own channel should hold one of these rather than
/// a `Channel` clone, which would keep the channel alive through its own
/// subscription list.
pub struct WeakChannel<T> {
    listeners: Weak<Listeners<T>>,
}

impl<T> WeakChannel<T> {
    /// Returns the channel if any strong handle to it still exists.
    pub fn upgrade(&self) -> Option<Channel<T>> {
        self.listeners
            .upgrade()
            .map(|listeners| Channel { listeners })
    }
}

impl<T> Clone for WeakChannel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Weak::clone(&self.listeners),
        }
    }
}

impl<T> fmt::Debug for WeakChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakChannel")
            .field("payload", &type_name::<T>())
            .field("alive", &(self.listeners.strong_count() > 0))
            .finish()
    }
}
