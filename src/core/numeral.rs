use crate::core::roman::roman_value;
use crate::domain::model::NumeralSystem;

pub const MIN_OPERAND: i64 = 1;
pub const MAX_OPERAND: i64 = 10;

pub fn is_valid_arabic_numeral(value: i64) -> bool {
    (MIN_OPERAND..=MAX_OPERAND).contains(&value)
}

/// Integer parse (sign and leading zeros allowed) that lands in 1..=10.
pub fn is_arabic_numeral(token: &str) -> bool {
    token
        .parse::<i64>()
        .map(is_valid_arabic_numeral)
        .unwrap_or(false)
}

pub fn is_roman_numeral(token: &str) -> bool {
    roman_value(token).is_some()
}

pub fn classify(token: &str) -> Option<NumeralSystem> {
    if is_arabic_numeral(token) {
        Some(NumeralSystem::Arabic)
    } else if is_roman_numeral(token) {
        Some(NumeralSystem::Roman)
    } else {
        None
    }
}
