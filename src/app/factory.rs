use std::rc::Rc;

use crate::adapters::{SeededRandom, ThreadRandom};
use crate::config::toml_config::AppConfig;
use crate::core::view_model::MainViewModel;
use crate::domain::model::RandomRange;
use crate::domain::ports::RandomGenerator;
use crate::repository::{NumberRepository, RandomRepository};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Builds view models and their repositories from one validated configuration.
///
/// Created once at process entry and passed around explicitly.
#[derive(Debug, Clone)]
pub struct ViewModelFactory {
    config: AppConfig,
    range: RandomRange,
}

impl ViewModelFactory {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let range = config.random_range()?;
        Ok(Self { config, range })
    }

    /// Fresh repositories and view model, using the configured random generator.
    pub fn create_main_view_model(&self) -> MainViewModel {
        let generator: Box<dyn RandomGenerator> = match self.config.random.seed {
            Some(seed) => {
                tracing::debug!(seed, "using seeded random generator");
                Box::new(SeededRandom::new(seed))
            }
            None => Box::new(ThreadRandom),
        };
        self.create_main_view_model_with(generator)
    }

    pub fn create_main_view_model_with(&self, generator: Box<dyn RandomGenerator>) -> MainViewModel {
        let number_repository = Rc::new(NumberRepository::new(self.config.initial_number()));
        let random_repository = Rc::new(RandomRepository::new(generator, self.range));

        let view_model = MainViewModel::new(
            number_repository,
            random_repository,
            self.config.display.locale,
            self.config.action_settings(),
        );

        if self.config.random.roll_on_start {
            view_model.random_repository().roll_new_random();
        }

        view_model
    }
}
