//! Single-threaded observable values with ordered, synchronous notification.
//!
//! [`MutableObservable<T>`] is the write handle owned by a repository;
//! [`Observable<T>`] is the read-only view handed to everyone else. Both share
//! one `Rc<RefCell<..>>` interior. Subscribers are stored as `Weak` callbacks
//! and pruned lazily during notification.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

struct ObservableInner<T> {
    /// Last published value. `None` until the first `set`.
    value: Option<T>,
    /// Bumped once per `set`.
    version: u64,
    next_id: u64,
    /// Kept in subscription order.
    subscribers: Vec<(u64, Weak<Callback<T>>)>,
}

/// Read-only handle to a shared observable value.
///
/// Cloning creates another handle to the **same** value.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: 'static> Observable<T> {
    fn empty() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value: None,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Latest published value, or `None` if nothing was published yet.
    #[must_use]
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.borrow().value.clone()
    }

    /// Access the latest value by reference.
    ///
    /// # Panics
    ///
    /// Panics if the closure publishes to the same observable.
    pub fn with<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        let inner = self.inner.borrow();
        f(inner.value.as_ref())
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        self.inner.borrow().value.is_some()
    }

    /// Number of values published so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of subscriptions that are still alive.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|(_, callback)| callback.strong_count() > 0)
            .count()
    }

    /// Register a callback invoked with every value published from now on.
    ///
    /// The current value is not replayed. The callback stays registered until
    /// the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Rc<Callback<T>> = Rc::new(callback);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::downgrade(&callback)));
            id
        };

        let weak_inner = Rc::downgrade(&self.inner);
        Subscription {
            id,
            cancel: Some(Box::new(move || {
                // A failed borrow means we are inside `with`; the dead weak entry
                // is pruned on the next notification instead.
                if let Some(inner) = weak_inner.upgrade() {
                    if let Ok(mut inner) = inner.try_borrow_mut() {
                        inner.subscribers.retain(|(sid, _)| *sid != id);
                    }
                }
                drop(callback);
            })),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    fn publish(&self, value: T) {
        let (callbacks, value) = {
            let mut inner = self.inner.borrow_mut();
            inner.value = Some(value.clone());
            inner.version += 1;
            inner
                .subscribers
                .retain(|(_, callback)| callback.strong_count() > 0);
            let callbacks: Vec<Rc<Callback<T>>> = inner
                .subscribers
                .iter()
                .filter_map(|(_, callback)| callback.upgrade())
                .collect();
            (callbacks, value)
        };

        tracing::trace!(subscribers = callbacks.len(), "publishing value");
        // Borrow released: callbacks may read this observable or publish again.
        for callback in callbacks {
            callback(&value);
        }
    }
}

/// Owning write handle of an observable value.
///
/// Dereferences to the read-only [`Observable`].
pub struct MutableObservable<T> {
    observable: Observable<T>,
}

impl<T: fmt::Debug> fmt::Debug for MutableObservable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.observable, f)
    }
}

impl<T: Clone + 'static> MutableObservable<T> {
    /// An observable with no value yet.
    pub fn new() -> Self {
        Self {
            observable: Observable::empty(),
        }
    }

    /// An observable already holding `value`. Counts as version 1.
    pub fn with_value(value: T) -> Self {
        let observable = Observable::empty();
        {
            let mut inner = observable.inner.borrow_mut();
            inner.value = Some(value);
            inner.version = 1;
        }
        Self { observable }
    }

    /// Store `value` and notify every subscriber, in subscription order.
    ///
    /// Subscribers are notified even when `value` equals the current value.
    pub fn set(&self, value: T) {
        self.observable.publish(value);
    }

    /// Derive the next value from the current one and publish it.
    pub fn update(&self, f: impl FnOnce(Option<&T>) -> T) {
        let next = self.observable.with(f);
        self.set(next);
    }

    /// A read-only handle to the same value.
    #[must_use]
    pub fn as_observable(&self) -> Observable<T> {
        self.observable.clone()
    }
}

impl<T: Clone + 'static> Default for MutableObservable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for MutableObservable<T> {
    type Target = Observable<T>;

    fn deref(&self) -> &Self::Target {
        &self.observable
    }
}

/// RAII guard for a subscription. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn starts_empty() {
        let source: MutableObservable<i32> = MutableObservable::new();
        assert_eq!(source.get(), None);
        assert!(!source.has_value());
        assert_eq!(source.version(), 0);
    }

    #[test]
    fn with_value_counts_as_published() {
        let source = MutableObservable::with_value(7);
        assert_eq!(source.get(), Some(7));
        assert_eq!(source.version(), 1);
    }

    #[test]
    fn set_notifies_in_subscription_order() {
        let source = MutableObservable::<i32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let log1 = Rc::clone(&log);
        let _s1 = source.subscribe(move |v: &i32| log1.borrow_mut().push(("first", *v)));
        let log2 = Rc::clone(&log);
        let _s2 = source.subscribe(move |v: &i32| log2.borrow_mut().push(("second", *v)));

        source.set(1);
        source.set(2);

        assert_eq!(
            *log.borrow(),
            vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]
        );
    }

    #[test]
    fn same_value_still_notifies() {
        let source = MutableObservable::with_value(5);
        let calls = Rc::new(Cell::new(0u32));
        let calls_clone = Rc::clone(&calls);
        let _sub = source.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));

        source.set(5);
        assert_eq!(calls.get(), 1);
        assert_eq!(source.version(), 2);
    }

    #[test]
    fn subscribe_does_not_replay_current_value() {
        let source = MutableObservable::with_value(3);
        let calls = Rc::new(Cell::new(0u32));
        let calls_clone = Rc::clone(&calls);
        let _sub = source.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn dropped_subscription_is_not_notified() {
        let source = MutableObservable::<i32>::new();
        let calls = Rc::new(Cell::new(0u32));
        let calls_clone = Rc::clone(&calls);
        let sub = source.subscribe(move |_: &i32| calls_clone.set(calls_clone.get() + 1));

        source.set(1);
        assert_eq!(source.subscriber_count(), 1);

        drop(sub);
        assert_eq!(source.subscriber_count(), 0);

        source.set(2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn callback_can_read_the_notifying_observable() {
        let source = MutableObservable::<i32>::new();
        let reader = source.as_observable();
        let seen = Rc::new(Cell::new(None));
        let seen_clone = Rc::clone(&seen);
        let _sub = source.subscribe(move |_: &i32| seen_clone.set(reader.get()));

        source.set(42);
        assert_eq!(seen.get(), Some(42));
    }

    #[test]
    fn callback_can_publish_to_another_observable() {
        let source = MutableObservable::<i32>::new();
        let doubled = Rc::new(MutableObservable::<i32>::new());
        let doubled_clone = Rc::clone(&doubled);
        let _sub = source.subscribe(move |v: &i32| doubled_clone.set(v * 2));

        source.set(21);
        assert_eq!(doubled.get(), Some(42));
    }

    #[test]
    fn update_reads_current_value() {
        let source = MutableObservable::<i32>::new();
        source.update(|current: Option<&i32>| current.copied().unwrap_or(0) + 1);
        source.update(|current| current.copied().unwrap_or(0) + 1);
        assert_eq!(source.get(), Some(2));
        assert_eq!(source.version(), 2);
    }

    #[test]
    fn read_handle_shares_state() {
        let source = MutableObservable::<String>::new();
        let reader = source.as_observable();
        source.set("hello".to_string());
        assert_eq!(reader.get().as_deref(), Some("hello"));
        assert_eq!(reader.with(|v| v.map(String::len)), Some(5));
    }

    #[test]
    fn subscription_outliving_observable_is_inert() {
        let sub;
        {
            let source = MutableObservable::<i32>::new();
            sub = source.subscribe(|_: &i32| {});
            source.set(1);
        }
        drop(sub);
    }

    #[test]
    fn debug_format() {
        let source = MutableObservable::with_value(42);
        let dbg = format!("{:?}", source.as_observable());
        assert!(dbg.contains("Observable"));
        assert!(dbg.contains("42"));
    }
}
