use std::cell::RefCell;

use crate::core::observable::{MutableObservable, Observable};
use crate::domain::model::RandomRange;
use crate::domain::ports::RandomGenerator;

/// Holds the latest random number. Absent until the first roll.
pub struct RandomRepository {
    random: MutableObservable<i32>,
    generator: RefCell<Box<dyn RandomGenerator>>,
    range: RandomRange,
}

impl std::fmt::Debug for RandomRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomRepository")
            .field("random", &self.random)
            .field("range", &self.range)
            .finish()
    }
}

impl RandomRepository {
    pub fn new(generator: Box<dyn RandomGenerator>, range: RandomRange) -> Self {
        Self {
            random: MutableObservable::new(),
            generator: RefCell::new(generator),
            range,
        }
    }

    pub fn random_observable(&self) -> Observable<i32> {
        self.random.as_observable()
    }

    pub fn range(&self) -> RandomRange {
        self.range
    }

    pub fn roll_new_random(&self) {
        let value = self
            .generator
            .borrow_mut()
            .random_range(self.range.min(), self.range.max());
        tracing::debug!(value, "new random number rolled");
        self.random.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedRandom, SeededRandom};

    #[test]
    fn test_absent_until_first_roll() {
        let repository =
            RandomRepository::new(Box::new(FixedRandom::constant(4)), RandomRange::default());
        assert_eq!(repository.random_observable().get(), None);

        repository.roll_new_random();
        assert_eq!(repository.random_observable().get(), Some(4));
    }

    #[test]
    fn test_each_roll_replaces_value() {
        let repository = RandomRepository::new(
            Box::new(FixedRandom::new(vec![3, 8])),
            RandomRange::default(),
        );
        repository.roll_new_random();
        repository.roll_new_random();
        assert_eq!(repository.random_observable().get(), Some(8));
        assert_eq!(repository.random_observable().version(), 2);
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let range = RandomRange::new(10, 12).unwrap();
        let repository = RandomRepository::new(Box::new(SeededRandom::new(7)), range);
        assert_eq!(repository.range(), range);
        for _ in 0..50 {
            repository.roll_new_random();
            let value = repository.random_observable().get().unwrap();
            assert!(range.contains(value));
        }
    }
}
