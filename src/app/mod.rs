// Application layer: composition root and console presentation.

pub mod command;
pub mod console;
pub mod factory;

pub use command::Command;
pub use console::{Console, Flow, OutputFormat};
pub use factory::ViewModelFactory;
