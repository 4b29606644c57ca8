//! Derived observables fed by one or more source observables.
//!
//! A [`Mediator<T>`] owns an output observable and the subscriptions to its
//! sources. Unlike a lazy computed value it pushes: every source notification
//! runs the source's handler immediately, and a `Some` result is published to
//! the output's subscribers before the source's `set` returns.
//!
//! [`combine_latest`] wires two sources so that the combine function always
//! sees the current value of both, never a value captured earlier.

use std::rc::Rc;

use super::observable::{MutableObservable, Observable, Subscription};

pub struct Mediator<T> {
    output: Rc<MutableObservable<T>>,
    /// Never read; dropping them detaches the mediator from its sources.
    sources: Vec<Subscription>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Mediator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mediator")
            .field("output", &self.output)
            .field("sources", &self.sources.len())
            .finish()
    }
}

impl<T: Clone + 'static> Mediator<T> {
    pub fn new() -> Self {
        Self {
            output: Rc::new(MutableObservable::new()),
            sources: Vec::new(),
        }
    }

    /// Listen to `source`. Whenever it publishes, `on_changed` runs and a
    /// `Some` result becomes the new output value. `None` publishes nothing.
    pub fn add_source<S: 'static>(
        &mut self,
        source: &Observable<S>,
        on_changed: impl Fn(&S) -> Option<T> + 'static,
    ) {
        let output = Rc::clone(&self.output);
        let subscription = source.subscribe(move |value| match on_changed(value) {
            Some(next) => output.set(next),
            None => tracing::debug!("source changed, derived value still pending"),
        });
        self.sources.push(subscription);
    }

    /// Read-only handle to the derived value.
    #[must_use]
    pub fn output(&self) -> Observable<T> {
        self.output.as_observable()
    }

    /// Whether a derived value has been published at least once.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.output.has_value()
    }

    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn publish_if_some(&self, value: Option<T>) {
        if let Some(value) = value {
            self.output.set(value);
        }
    }
}

impl<T: Clone + 'static> Default for Mediator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a value from the latest values of `a` and `b`.
///
/// `combine` receives `None` for a source that has not published yet and
/// decides whether a value can be derived. It runs on every publication of
/// either source, and once at construction so that sources which already hold
/// values produce an output straight away.
pub fn combine_latest<A, B, T>(
    a: &Observable<A>,
    b: &Observable<B>,
    combine: impl Fn(Option<&A>, Option<&B>) -> Option<T> + 'static,
) -> Mediator<T>
where
    A: 'static,
    B: 'static,
    T: Clone + 'static,
{
    let combine = Rc::new(combine);
    let mut mediator = Mediator::new();

    {
        let b = b.clone();
        let combine = Rc::clone(&combine);
        mediator.add_source(a, move |a_value| {
            b.with(|b_value| (*combine)(Some(a_value), b_value))
        });
    }
    {
        let a = a.clone();
        let combine = Rc::clone(&combine);
        mediator.add_source(b, move |b_value| {
            a.with(|a_value| (*combine)(a_value, Some(b_value)))
        });
    }

    let initial = a.with(|a_value| b.with(|b_value| (*combine)(a_value, b_value)));
    mediator.publish_if_some(initial);
    mediator
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn product(a: Option<&i32>, b: Option<&i32>) -> Option<i32> {
        Some(a? * b?)
    }

    #[test]
    fn nothing_published_until_both_sources_have_values() {
        let a = MutableObservable::<i32>::new();
        let b = MutableObservable::<i32>::new();
        let mediator = combine_latest(&a, &b, product);

        a.set(3);
        assert!(!mediator.is_initialized());
        assert_eq!(mediator.output().get(), None);

        b.set(4);
        assert!(mediator.is_initialized());
        assert_eq!(mediator.output().get(), Some(12));
    }

    #[test]
    fn reads_latest_value_of_the_silent_source() {
        let a = MutableObservable::with_value(1);
        let b = MutableObservable::with_value(10);
        let mediator = combine_latest(&a, &b, product);
        assert_eq!(mediator.output().get(), Some(10));

        b.set(20);
        b.set(30);
        a.set(2);
        assert_eq!(mediator.output().get(), Some(60));
    }

    #[test]
    fn publishes_at_construction_when_both_sources_hold_values() {
        let a = MutableObservable::with_value(2);
        let b = MutableObservable::with_value(5);
        let mediator = combine_latest(&a, &b, product);
        assert_eq!(mediator.output().get(), Some(10));
        assert_eq!(mediator.output().version(), 1);
    }

    #[test]
    fn output_subscribers_see_every_recomputation() {
        let a = MutableObservable::with_value(1);
        let b = MutableObservable::<i32>::new();
        let mediator = combine_latest(&a, &b, product);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let _sub = mediator
            .output()
            .subscribe(move |v| seen_clone.borrow_mut().push(*v));

        b.set(7);
        a.set(2);
        b.set(7);

        assert_eq!(*seen.borrow(), vec![7, 14, 14]);
    }

    #[test]
    fn dropping_mediator_detaches_from_sources() {
        let a = MutableObservable::<i32>::new();
        let b = MutableObservable::<i32>::new();
        let mediator = combine_latest(&a, &b, product);
        assert_eq!(mediator.source_count(), 2);
        assert_eq!(a.subscriber_count(), 1);
        assert_eq!(b.subscriber_count(), 1);

        drop(mediator);
        assert_eq!(a.subscriber_count(), 0);
        assert_eq!(b.subscriber_count(), 0);
    }

    #[test]
    fn add_source_with_single_source() {
        let text = MutableObservable::<String>::new();
        let mut mediator = Mediator::new();
        mediator.add_source(&text, |s: &String| {
            if s.is_empty() {
                None
            } else {
                Some(s.len())
            }
        });

        text.set(String::new());
        assert!(!mediator.is_initialized());

        text.set("four".to_string());
        assert_eq!(mediator.output().get(), Some(4));
    }

    #[test]
    fn combine_runs_once_per_notification() {
        let calls = Rc::new(Cell::new(0u32));
        let calls_clone = Rc::clone(&calls);

        let a = MutableObservable::<i32>::new();
        let b = MutableObservable::<i32>::new();
        let _mediator = combine_latest(&a, &b, move |x: Option<&i32>, y: Option<&i32>| {
            calls_clone.set(calls_clone.get() + 1);
            product(x, y)
        });
        // Initial attempt at construction.
        assert_eq!(calls.get(), 1);

        a.set(1);
        b.set(1);
        assert_eq!(calls.get(), 3);
    }
}
