// Adapters layer: concrete implementations of the domain ports.

pub mod random;

pub use random::{FixedRandom, SeededRandom, ThreadRandom};
