use roman_calc::core::roman::{arabic_to_roman, roman_to_arabic, ROMAN_TABLE};
use roman_calc::{evaluate, CalcError, Evaluator, NumeralSystem};

const OPERATORS: [&str; 4] = ["+", "-", "*", "/"];

fn arithmetic(a: i64, op: &str, b: i64) -> i64 {
    match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => a / b,
        _ => unreachable!(),
    }
}

#[test]
fn test_every_arabic_expression_prints_decimal_result() {
    for a in 1..=10 {
        for b in 1..=10 {
            for op in OPERATORS {
                let input = format!("{} {} {}", a, op, b);
                let expected = arithmetic(a, op, b).to_string();
                assert_eq!(evaluate(&input).unwrap(), expected, "{input}");
            }
        }
    }
}

#[test]
fn test_every_roman_expression_matches_arabic_arithmetic() {
    for (left, a) in ROMAN_TABLE {
        for (right, b) in ROMAN_TABLE {
            for op in OPERATORS {
                let input = format!("{} {} {}", left, op, right);
                let value = arithmetic(a, op, b);
                match evaluate(&input) {
                    Ok(result) => {
                        assert!(value > 0, "{input} should not succeed");
                        assert_eq!(result, arabic_to_roman(value), "{input}");
                    }
                    Err(CalcError::InvalidRomanResult) => assert!(value <= 0, "{input}"),
                    Err(e) => panic!("{input}: unexpected error {e}"),
                }
            }
        }
    }
}

#[test]
fn test_documented_scenarios() {
    assert_eq!(evaluate("3 + 4").unwrap(), "7");
    assert_eq!(evaluate("X - V").unwrap(), "V");
    assert_eq!(evaluate("10 * 10").unwrap(), "100");
    assert_eq!(evaluate("IX + II").unwrap(), "XI");
    assert!(matches!(evaluate("II - V"), Err(CalcError::InvalidRomanResult)));
    assert!(matches!(evaluate("V + 3"), Err(CalcError::MixedNumberSystems)));
    assert!(matches!(evaluate("11 + 1"), Err(CalcError::InvalidOperands)));
    assert!(matches!(evaluate("5+3"), Err(CalcError::MalformedExpression)));
    assert!(matches!(evaluate("X / 0"), Err(CalcError::InvalidOperands)));
}

#[test]
fn test_input_is_trimmed_but_split_on_single_spaces() {
    assert_eq!(evaluate("  3 + 4 \n").unwrap(), "7");
    assert!(matches!(evaluate("3  + 4"), Err(CalcError::MalformedExpression)));
    assert!(matches!(evaluate("3\t+\t4"), Err(CalcError::MalformedExpression)));
    assert!(matches!(evaluate(""), Err(CalcError::MalformedExpression)));
}

#[test]
fn test_tokens_outside_both_systems() {
    for input in ["0 + 1", "XI + I", "abc + 1", "iv + v", "I + 0", "3.0 + 1"] {
        assert!(
            matches!(evaluate(input), Err(CalcError::InvalidOperands)),
            "{input}"
        );
    }
}

#[test]
fn test_operator_checked_after_operands() {
    assert!(matches!(evaluate("3 x 4"), Err(CalcError::InvalidOperator)));
    assert!(matches!(evaluate("V ^ II"), Err(CalcError::InvalidOperator)));
    assert!(matches!(evaluate("11 x 4"), Err(CalcError::InvalidOperands)));
    assert!(matches!(evaluate("V x 4"), Err(CalcError::MixedNumberSystems)));
}

#[test]
fn test_signed_arabic_tokens_follow_integer_parsing() {
    assert_eq!(evaluate("+3 + 04").unwrap(), "7");
    assert!(matches!(evaluate("-3 + 4"), Err(CalcError::InvalidOperands)));
}

#[test]
fn test_round_trip_one_to_ten() {
    for n in 1..=10 {
        assert_eq!(roman_to_arabic(&arabic_to_roman(n)), n);
    }
}

#[test]
fn test_detailed_evaluation_reports_system_and_value() {
    let evaluation = Evaluator::new().evaluate_detailed("2 - 9").unwrap();
    assert_eq!(evaluation.system, NumeralSystem::Arabic);
    assert_eq!(evaluation.value, -7);
    assert_eq!(evaluation.result, "-7");
}
