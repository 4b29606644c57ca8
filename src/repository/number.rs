use crate::core::observable::{MutableObservable, Observable};

/// Holds the user-driven number.
///
/// An absent number is treated as `0` when mutated. Arithmetic wraps on overflow.
#[derive(Debug)]
pub struct NumberRepository {
    number: MutableObservable<i32>,
}

impl NumberRepository {
    /// `initial` is published as the first value; `None` starts the number absent.
    pub fn new(initial: Option<i32>) -> Self {
        let number = match initial {
            Some(value) => MutableObservable::with_value(value),
            None => MutableObservable::new(),
        };
        Self { number }
    }

    pub fn number_observable(&self) -> Observable<i32> {
        self.number.as_observable()
    }

    pub fn add_to_number(&self, delta: i32) {
        self.number
            .update(|current| current.copied().unwrap_or(0).wrapping_add(delta));
        tracing::debug!(delta, number = ?self.number.get(), "number incremented");
    }

    pub fn multiply_number(&self, factor: i32) {
        self.number
            .update(|current| current.copied().unwrap_or(0).wrapping_mul(factor));
        tracing::debug!(factor, number = ?self.number.get(), "number multiplied");
    }
}

impl Default for NumberRepository {
    fn default() -> Self {
        Self::new(Some(0))
    }
}
