pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{LineConsole, StdConsole};
pub use config::toml_config::TomlConfig;
pub use core::evaluator::{evaluate, Evaluator};
pub use core::session::{CalcSession, Outcome};
pub use domain::model::{Evaluation, NumeralSystem, OutputFormat};
pub use utils::error::{CalcError, Result};
