//! Subscriber callbacks and the records a channel keeps for them.
//!
//! A [`Handler<T>`] is a shared, reference-counted callback. Its identity is the
//! allocation it points to: clones of a handler are the *same* handler, while two
//! separately constructed handlers are always different, even when they wrap
//! identical closures. Channels use that identity to find the subscriptions to
//! remove on [`unsubscribe()`](crate::Channel::unsubscribe).

use std::{fmt, rc::Rc};

/// Delivery mode of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Receives every dispatch until it is removed.
    Persistent,
    /// Receives at most one dispatch, then is removed by that dispatch.
    OneShot,
}

/// A shared subscriber callback.
///
/// # Identity
///
/// `Handler` equality is reference equality:
///
/// ```rust
/// use rusty_event::Handler;
///
/// let a = Handler::new(|_: &u32| {});
/// let b = Handler::new(|_: &u32| {});
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// ```
pub struct Handler<T> {
    callback: Rc<dyn Fn(&T)>,
}

impl<T> Handler<T> {
    /// Wraps `callback` in a new handler with its own identity.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invokes the callback with `value`.
    #[inline]
    pub fn call(&self, value: &T) {
        (self.callback)(value)
    }

    /// Returns `true` if both handlers share the same callback allocation.
    #[inline]
    pub fn same_as(&self, other: &Handler<T>) -> bool {
        // Compare data addresses only; vtable pointers for the same closure can differ.
        std::ptr::addr_eq(Rc::as_ptr(&self.callback), Rc::as_ptr(&other.callback))
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T> Eq for Handler<T> {}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler")
            .field(&Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

impl<T, F> From<F> for Handler<T>
where
    F: Fn(&T) + 'static,
{
    fn from(callback: F) -> Self {
        Self::new(callback)
    }
}

/// One registered subscription: a handler and how it wants to be delivered to.
pub(crate) struct Listener<T> {
    pub(crate) mode: Mode,
    pub(crate) handler: Handler<T>,
}

impl<T> Listener<T> {
    pub(crate) fn new(mode: Mode, handler: Handler<T>) -> Self {
        Self { mode, handler }
    }

    #[inline]
    pub(crate) fn is_once(&self) -> bool {
        self.mode == Mode::OneShot
    }
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            handler: self.handler.clone(),
        }
    }
}
