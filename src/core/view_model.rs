use std::rc::Rc;

use super::display::combine;
use super::mediator::{combine_latest, Mediator};
use super::observable::Observable;
use crate::domain::model::{DisplayState, Locale};
use crate::repository::{NumberRepository, RandomRepository};

/// Amounts applied by the user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSettings {
    pub increment: i32,
    pub factor: i32,
}

impl Default for ActionSettings {
    fn default() -> Self {
        Self {
            increment: 1,
            factor: 2,
        }
    }
}

/// Sits between the presentation layer and the repositories.
///
/// Combines the number and the random value into a [`DisplayState`] and
/// turns user actions into repository mutations.
#[derive(Debug)]
pub struct MainViewModel {
    number_repository: Rc<NumberRepository>,
    random_repository: Rc<RandomRepository>,
    display_state: Mediator<DisplayState>,
    actions: ActionSettings,
}

impl MainViewModel {
    pub fn new(
        number_repository: Rc<NumberRepository>,
        random_repository: Rc<RandomRepository>,
        locale: Locale,
        actions: ActionSettings,
    ) -> Self {
        // Both handles must be the ones the mediator listens to: the combine
        // step re-reads the other source through them.
        let number = number_repository.number_observable();
        let random = random_repository.random_observable();

        let display_state = combine_latest(&number, &random, move |number, random| {
            combine(number.copied(), random.copied(), locale)
        });

        Self {
            number_repository,
            random_repository,
            display_state,
            actions,
        }
    }

    /// Read-only: the presentation layer can observe but never publish.
    pub fn display_state(&self) -> Observable<DisplayState> {
        self.display_state.output()
    }

    pub fn number_repository(&self) -> &Rc<NumberRepository> {
        &self.number_repository
    }

    pub fn random_repository(&self) -> &Rc<RandomRepository> {
        &self.random_repository
    }

    pub fn on_add_button_clicked(&self) {
        tracing::info!(increment = self.actions.increment, "add requested");
        self.number_repository.add_to_number(self.actions.increment);
    }

    pub fn on_multiply_button_clicked(&self) {
        tracing::info!(factor = self.actions.factor, "multiply requested");
        self.number_repository.multiply_number(self.actions.factor);
    }

    pub fn on_random_button_clicked(&self) {
        tracing::info!("reroll requested");
        self.random_repository.roll_new_random();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedRandom;
    use crate::domain::model::RandomRange;

    fn view_model(initial: Option<i32>, randoms: Vec<i32>) -> MainViewModel {
        MainViewModel::new(
            Rc::new(NumberRepository::new(initial)),
            Rc::new(RandomRepository::new(
                Box::new(FixedRandom::new(randoms)),
                RandomRange::default(),
            )),
            Locale::En,
            ActionSettings::default(),
        )
    }

    #[test]
    fn test_no_state_before_first_roll() {
        let vm = view_model(Some(3), vec![4]);
        vm.on_add_button_clicked();
        assert_eq!(vm.display_state().get(), None);
    }

    #[test]
    fn test_first_roll_initializes_state() {
        let vm = view_model(Some(3), vec![4]);
        vm.on_random_button_clicked();
        assert_eq!(
            vm.display_state().get(),
            Some(DisplayState::new(
                "12",
                "The number 12 is even, the random number is 4"
            ))
        );
    }

    #[test]
    fn test_actions_use_configured_amounts() {
        let vm = MainViewModel::new(
            Rc::new(NumberRepository::new(Some(1))),
            Rc::new(RandomRepository::new(
                Box::new(FixedRandom::constant(1)),
                RandomRange::default(),
            )),
            Locale::En,
            ActionSettings {
                increment: 5,
                factor: 3,
            },
        );
        vm.on_random_button_clicked();
        vm.on_add_button_clicked();
        vm.on_multiply_button_clicked();
        let state = vm.display_state().get().unwrap();
        assert_eq!(state.number_to_display, "18");
    }
}
