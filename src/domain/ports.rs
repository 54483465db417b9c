use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

/// Line-oriented terminal. The binary uses stdin/stdout, tests use buffers.
pub trait Console {
    /// `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn prompt(&self) -> &str;
    fn result_label(&self) -> &str;
    fn error_label(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
}
