//! Configuration system for Liftoff

pub mod defaults;
mod inputs;
mod loader;
mod settings;
mod types;
pub mod validation;

pub use defaults::*;
pub use inputs::*;
pub use loader::*;
pub use settings::*;
pub use types::*;
pub use validation::*;
