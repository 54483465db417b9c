use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Некорректный формат математической операции")]
    MalformedExpression,

    #[error("Используются одновременно разные системы счисления")]
    MixedNumberSystems,

    #[error("Некорректные числа")]
    InvalidOperands,

    #[error("Некорректный оператор")]
    InvalidOperator,

    #[error("Деление на ноль")]
    DivisionByZero,

    #[error("Некорректный результат в римской системе счисления")]
    InvalidRomanResult,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The expression text itself is unusable.
    Input,
    /// The operands were fine but the operation is not.
    Arithmetic,
    /// The result cannot be written in the input's numeral system.
    Formatting,
    System,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::MalformedExpression
            | CalcError::MixedNumberSystems
            | CalcError::InvalidOperands => ErrorCategory::Input,
            CalcError::InvalidOperator | CalcError::DivisionByZero => ErrorCategory::Arithmetic,
            CalcError::InvalidRomanResult => ErrorCategory::Formatting,
            CalcError::Io(_)
            | CalcError::Serialization(_)
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::System,
        }
    }

    /// Stable name of the variant, used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::MalformedExpression => "MalformedExpression",
            CalcError::MixedNumberSystems => "MixedNumberSystems",
            CalcError::InvalidOperands => "InvalidOperands",
            CalcError::InvalidOperator => "InvalidOperator",
            CalcError::DivisionByZero => "DivisionByZero",
            CalcError::InvalidRomanResult => "InvalidRomanResult",
            CalcError::Io(_) => "Io",
            CalcError::Serialization(_) => "Serialization",
            CalcError::ConfigValidationError { .. } => "ConfigValidationError",
            CalcError::InvalidConfigValueError { .. } => "InvalidConfigValueError",
        }
    }

    /// Evaluation errors are expected outcomes and are printed, not escalated.
    pub fn is_evaluation_error(&self) -> bool {
        self.category() != ErrorCategory::System
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::MalformedExpression => {
                "Введите выражение вида \"a + b\": два числа и оператор через один пробел"
            }
            CalcError::MixedNumberSystems => "Используйте только арабские или только римские числа",
            CalcError::InvalidOperands => "Допустимы числа от 1 до 10 или от I до X",
            CalcError::InvalidOperator => "Допустимые операторы: + - * /",
            CalcError::DivisionByZero => "Делитель должен быть отличен от нуля",
            CalcError::InvalidRomanResult => {
                "В римской системе нет нуля и отрицательных чисел"
            }
            CalcError::Io(_) => "Check that standard input and output are available",
            CalcError::Serialization(_) => "Retry without --json",
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_errors_have_distinct_messages() {
        let errors = [
            CalcError::MalformedExpression,
            CalcError::MixedNumberSystems,
            CalcError::InvalidOperands,
            CalcError::InvalidOperator,
            CalcError::DivisionByZero,
            CalcError::InvalidRomanResult,
        ];
        let mut messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), errors.len());
        assert!(errors.iter().all(CalcError::is_evaluation_error));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(CalcError::MalformedExpression.category(), ErrorCategory::Input);
        assert_eq!(CalcError::DivisionByZero.category(), ErrorCategory::Arithmetic);
        assert_eq!(CalcError::InvalidRomanResult.category(), ErrorCategory::Formatting);

        let io = CalcError::from(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
        assert_eq!(io.category(), ErrorCategory::System);
        assert!(!io.is_evaluation_error());
        assert_eq!(io.kind(), "Io");
    }
}
