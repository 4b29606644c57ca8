/// Source of random integers for the random repository.
///
/// Adapters live in `crate::adapters::random`.
pub trait RandomGenerator {
    /// Returns an integer in `[min, max]`, inclusive on both ends. Callers guarantee `min <= max`.
    fn random_range(&mut self, min: i32, max: i32) -> i32;
}

impl<G: RandomGenerator + ?Sized> RandomGenerator for Box<G> {
    fn random_range(&mut self, min: i32, max: i32) -> i32 {
        (**self).random_range(min, max)
    }
}
