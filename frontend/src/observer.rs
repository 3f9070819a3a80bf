//! Minimal single-threaded observer: a [`Subject`] holds the latest value of
//! something that changes over time (scroll offset, element visibility) and
//! notifies whoever subscribed. Listeners stay registered for exactly as long
//! as the [`Subscription`] handle returned to them is alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
    latest: Option<T>,
}

impl<T> Inner<T> {
    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

pub struct Subject<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

// Two handles are equal when they point at the same subject, which is what
// Yew needs to decide whether a context value changed.
impl<T> PartialEq for Subject<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Subject<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                listeners: Vec::new(),
                latest: None,
            })),
        }
    }

    /// Last published value, if anything was published yet.
    pub fn current(&self) -> Option<T> {
        self.inner.borrow().latest.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Registers `listener` for every value published from now on. Dropping
    /// the returned handle removes it again.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        log::debug!("subscriber {} registered", id);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .borrow_mut()
                        .listeners
                        .retain(|(listener_id, _)| *listener_id != id);
                    log::debug!("subscriber {} released", id);
                }
            })),
        }
    }

    /// Stores `value` as the latest and hands it to every live listener.
    ///
    /// Listeners may subscribe or unsubscribe while being notified. One that
    /// was released earlier in the same round is skipped.
    pub fn publish(&self, value: T) {
        let snapshot: Vec<(u64, Listener<T>)> = {
            let mut inner = self.inner.borrow_mut();
            inner.latest = Some(value.clone());
            inner.listeners.clone()
        };

        for (id, listener) in snapshot {
            if self.inner.borrow().is_subscribed(id) {
                listener(&value);
            }
        }
    }
}

/// Handle tying a listener to its owner's lifetime.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn delivers_values_to_live_subscribers() {
        let subject = Subject::<f64>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _subscription = {
            let seen = seen.clone();
            subject.subscribe(move |value| seen.borrow_mut().push(*value))
        };

        subject.publish(10.0);
        subject.publish(60.0);

        assert_eq!(*seen.borrow(), vec![10.0, 60.0]);
        assert_eq!(subject.current(), Some(60.0));
    }

    #[test]
    fn dropping_the_subscription_stops_delivery() {
        let subject = Subject::<f64>::new();
        let calls = Rc::new(Cell::new(0));

        let subscription = {
            let calls = calls.clone();
            subject.subscribe(move |_| calls.set(calls.get() + 1))
        };
        subject.publish(1.0);
        drop(subscription);
        subject.publish(2.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(subject.subscriber_count(), 0);
    }

    #[test]
    fn publishing_without_subscribers_only_records_the_value() {
        let subject = Subject::<bool>::new();
        assert_eq!(subject.current(), None);
        subject.publish(true);
        assert_eq!(subject.current(), Some(true));
    }

    #[test]
    fn subscription_outliving_the_subject_releases_quietly() {
        let subject = Subject::<u32>::new();
        let subscription = subject.subscribe(|_| {});
        drop(subject);
        subscription.cancel();
    }

    #[test]
    fn listener_released_mid_round_is_not_called() {
        let subject = Subject::<u32>::new();
        let late_calls = Rc::new(Cell::new(0));
        let held: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _first = {
            let held = held.clone();
            subject.subscribe(move |_| {
                held.borrow_mut().take();
            })
        };
        let second = {
            let late_calls = late_calls.clone();
            subject.subscribe(move |_| late_calls.set(late_calls.get() + 1))
        };
        *held.borrow_mut() = Some(second);

        subject.publish(1);

        assert_eq!(late_calls.get(), 0);
        assert_eq!(subject.subscriber_count(), 1);
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = Subject::<u8>::new();
        let b = a.clone();
        let c = Subject::<u8>::new();
        assert!(a == b);
        assert!(a != c);
    }
}
