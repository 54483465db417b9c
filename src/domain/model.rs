use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw `operand operator operand` triple, not yet classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub left: String,
    pub operator: String,
    pub right: String,
}

impl Expression {
    /// Splits on single spaces after trimming, so `"3  + 4"` has four tokens.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens: Vec<&str> = input.trim().split(' ').collect();
        match tokens.as_slice() {
            [left, operator, right] => Ok(Self {
                left: left.to_string(),
                operator: operator.to_string(),
                right: right.to_string(),
            }),
            _ => Err(CalcError::MalformedExpression),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            _ => Err(CalcError::InvalidOperator),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    Arabic,
    Roman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub expression: String,
    pub system: NumeralSystem,
    pub value: i64,
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expression() {
        let expr = Expression::parse(" X * II \n").unwrap();
        assert_eq!(expr.left, "X");
        assert_eq!(expr.operator, "*");
        assert_eq!(expr.right, "II");
    }

    #[test]
    fn test_parse_rejects_wrong_token_count() {
        for input in ["", "5+3", "5 +3", "3  + 4", "1 + 2 + 3"] {
            assert!(
                matches!(Expression::parse(input), Err(CalcError::MalformedExpression)),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Div);
        assert_eq!(Operator::Sub.to_string(), "-");
        assert!(matches!("%".parse::<Operator>(), Err(CalcError::InvalidOperator)));
        assert!(matches!("x".parse::<Operator>(), Err(CalcError::InvalidOperator)));
    }

    #[test]
    fn test_numeral_system_serializes_lowercase() {
        let json = serde_json::to_string(&NumeralSystem::Roman).unwrap();
        assert_eq!(json, "\"roman\"");
    }
}
