//! Reactive core.
//!
//! - [`observable`]: shared, version-tracked values with ordered, synchronous
//!   subscriber notification.
//! - [`mediator`]: push-based derived values fed by source observables.
//! - [`display`]: the pure combine step producing a [`DisplayState`].
//! - [`view_model`]: wires the repositories to the display state and exposes
//!   the user actions.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order, on the publishing thread,
//!    before `set` returns.
//! 2. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.
//! 3. No [`DisplayState`] is published until both the number and the random
//!    value have been published at least once.
//! 4. A recomputation triggered by one source always reads the other source's
//!    latest value.

pub mod display;
pub mod mediator;
pub mod observable;
pub mod view_model;

pub use crate::domain::model::{DisplayState, Locale, Parity, RandomRange};
pub use crate::domain::ports::RandomGenerator;
pub use crate::utils::error::Result;
pub use mediator::{combine_latest, Mediator};
pub use observable::{MutableObservable, Observable, Subscription};
pub use view_model::{ActionSettings, MainViewModel};
