use std::{fmt, rc::Rc};

/// Revokes a subscription made through [`Subscribable`](crate::Subscribable).
///
/// Returned by [`subscribe()`](crate::Channel::subscribe) and
/// [`subscribe_once()`](crate::Channel::subscribe_once). Calling
/// [`revoke()`](Self::revoke) has the same effect as passing the registered
/// handler to [`unsubscribe()`](crate::Channel::unsubscribe): every subscription
/// using that handler is removed, whatever its mode.
///
/// The token only holds a weak reference to the channel. Dropping it does not
/// unsubscribe anything, and revoking it after the channel is gone does nothing.
#[derive(Clone)]
pub struct Unsubscribe {
    revoke: Rc<dyn Fn()>,
}

impl Unsubscribe {
    /// Builds a token from the closure that performs the removal.
    pub fn new<F>(revoke: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            revoke: Rc::new(revoke),
        }
    }

    /// Removes every subscription currently registered with the token's handler.
    ///
    /// May be called repeatedly; each call removes whatever matches at that time.
    pub fn revoke(&self) {
        (self.revoke)()
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe").finish_non_exhaustive()
    }
}
