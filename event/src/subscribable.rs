use crate::{handler::Handler, token::Unsubscribe};

/// Capability contract of a typed event source.
///
/// [`Channel`](crate::Channel) is the provided implementation. Code that only
/// needs to listen to, or fire, events can take `&impl Subscribable<T>` instead
/// of a concrete channel.
///
/// Implementations must keep these guarantees:
/// - Handlers are delivered to in subscription order.
/// - A one-shot subscription receives at most one value.
/// - `unsubscribe` and token revocation remove *every* subscription registered
///   with the handler, and silently do nothing when there is none.
/// - None of the operations fail; handler panics propagate out of `dispatch`.
pub trait Subscribable<T> {
    /// Registers `handler` for every future dispatch.
    fn subscribe(&self, handler: &Handler<T>) -> Unsubscribe;

    /// Registers `handler` for the next dispatch only.
    fn subscribe_once(&self, handler: &Handler<T>) -> Unsubscribe;

    /// Removes every subscription registered with `handler`.
    fn unsubscribe(&self, handler: &Handler<T>);

    /// Delivers `value` to the current subscribers.
    fn dispatch(&self, value: &T);

    /// Removes every subscription.
    fn clear(&self);
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::Channel;

    /// Records every value `source` fires until the returned token is revoked.
    fn listen_until_revoked(
        source: &impl Subscribable<u32>,
        log: &Rc<RefCell<Vec<u32>>>,
    ) -> Unsubscribe {
        let sink = Rc::clone(log);
        source.subscribe(&Handler::new(move |v: &u32| sink.borrow_mut().push(*v)))
    }

    #[test]
    fn channel_works_through_trait() {
        // Given
        let channel = Channel::<u32>::new();
        let source: &dyn Subscribable<u32> = &channel;
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let once = Handler::new(move |v: &u32| sink.borrow_mut().push(v * 10));

        // When
        source.subscribe_once(&once);
        source.dispatch(&1);
        source.dispatch(&2);

        // Then
        assert_eq!(*seen.borrow(), vec![10]);
    }

    #[test]
    fn generic_caller_can_revoke_its_subscription() {
        // Given
        let channel = Channel::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let token = listen_until_revoked(&channel, &seen);

        // When
        channel.dispatch(&1);
        token.revoke();
        channel.dispatch(&2);

        // Then
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn trait_unsubscribe_and_clear() {
        let channel = Channel::<u32>::new();
        let source: &dyn Subscribable<u32> = &channel;
        let first = Handler::new(|_: &u32| {});
        let second = Handler::new(|_: &u32| {});
        source.subscribe(&first);
        source.subscribe(&second);

        source.unsubscribe(&first);
        assert_eq!(channel.len(), 1);

        source.clear();
        assert!(channel.is_empty());
    }
}
