use crate::core::numeral::{classify, is_valid_arabic_numeral};
use crate::core::roman::{arabic_to_roman, roman_to_arabic};
use crate::domain::model::{Evaluation, Expression, NumeralSystem, Operator};
use crate::utils::error::{CalcError, Result};

/// Evaluates `operand operator operand` where both operands are Arabic
/// (1..=10) or both are Roman (I..=X). The result is written in the same
/// system as the operands.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, input: &str) -> Result<String> {
        self.evaluate_detailed(input).map(|evaluation| evaluation.result)
    }

    pub fn evaluate_detailed(&self, input: &str) -> Result<Evaluation> {
        let expression = Expression::parse(input)?;
        tracing::debug!(
            "Parsed expression: {:?} {:?} {:?}",
            expression.left,
            expression.operator,
            expression.right
        );

        let system = detect_system(&expression.left, &expression.right)?;
        tracing::debug!("Numeral system: {:?}", system);

        let left = resolve_operand(&expression.left, system)?;
        let right = resolve_operand(&expression.right, system)?;

        // operand errors take precedence over a bad operator
        let operator: Operator = expression.operator.parse()?;
        let value = apply(left, operator, right)?;
        tracing::debug!("{} {} {} = {}", left, operator, right, value);

        let result = format_result(value, system)?;

        Ok(Evaluation {
            expression: input.trim().to_string(),
            system,
            value,
            result,
        })
    }
}

/// Convenience wrapper around [`Evaluator::evaluate`].
pub fn evaluate(input: &str) -> Result<String> {
    Evaluator::new().evaluate(input)
}

fn detect_system(left: &str, right: &str) -> Result<NumeralSystem> {
    match (classify(left), classify(right)) {
        (Some(NumeralSystem::Arabic), Some(NumeralSystem::Arabic)) => Ok(NumeralSystem::Arabic),
        (Some(NumeralSystem::Roman), Some(NumeralSystem::Roman)) => Ok(NumeralSystem::Roman),
        (Some(_), Some(_)) => Err(CalcError::MixedNumberSystems),
        _ => Err(CalcError::InvalidOperands),
    }
}

fn resolve_operand(token: &str, system: NumeralSystem) -> Result<i64> {
    let value = match system {
        NumeralSystem::Arabic => token.parse::<i64>().map_err(|_| CalcError::InvalidOperands)?,
        NumeralSystem::Roman => roman_to_arabic(token),
    };

    if !is_valid_arabic_numeral(value) {
        return Err(CalcError::InvalidOperands);
    }
    Ok(value)
}

/// Integer arithmetic; division truncates toward zero.
pub fn apply(left: i64, operator: Operator, right: i64) -> Result<i64> {
    match operator {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(left / right)
        }
    }
}

/// Arabic results are printed as-is; Roman results must be positive.
pub fn format_result(value: i64, system: NumeralSystem) -> Result<String> {
    match system {
        NumeralSystem::Arabic => Ok(value.to_string()),
        NumeralSystem::Roman => {
            let roman = arabic_to_roman(value);
            if roman.is_empty() {
                return Err(CalcError::InvalidRomanResult);
            }
            Ok(roman)
        }
    }
}
