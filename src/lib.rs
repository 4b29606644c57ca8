pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod repository;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{Command, Console, OutputFormat, ViewModelFactory};
pub use config::AppConfig;
pub use crate::core::{
    combine_latest, ActionSettings, DisplayState, Locale, MainViewModel, Mediator,
    MutableObservable, Observable, Subscription,
};
pub use repository::{NumberRepository, RandomRepository};
pub use utils::error::{AppError, Result};
