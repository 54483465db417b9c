pub mod evaluator;
pub mod numeral;
pub mod roman;
pub mod session;

pub use crate::domain::model::{Evaluation, Expression, NumeralSystem, Operator, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Console};
pub use crate::utils::error::Result;
