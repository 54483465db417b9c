use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PROMPT: &str = "Введите выражение:";
pub const DEFAULT_RESULT_LABEL: &str = "Результат:";
pub const DEFAULT_ERROR_LABEL: &str = "Ошибка:";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Optional settings file. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub prompt: Option<String>,
    pub result_label: Option<String>,
    pub error_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let labels = [
            ("display.prompt", &self.display.prompt),
            ("display.result_label", &self.display.result_label),
            ("display.error_label", &self.display.error_label),
        ];
        for (field, value) in labels {
            if let Some(value) = value {
                validation::validate_non_empty_string(field, value)?;
                validation::validate_single_line(field, value)?;
            }
        }

        if let Some(format) = &self.output.format {
            validation::validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        let name = match format {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        self.output.format = Some(name.to_string());
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl ConfigProvider for TomlConfig {
    fn prompt(&self) -> &str {
        self.display.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    fn result_label(&self) -> &str {
        self.display.result_label.as_deref().unwrap_or(DEFAULT_RESULT_LABEL)
    }

    fn error_label(&self) -> &str {
        self.display.error_label.as_deref().unwrap_or(DEFAULT_ERROR_LABEL)
    }

    fn output_format(&self) -> OutputFormat {
        match self.output.format.as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
