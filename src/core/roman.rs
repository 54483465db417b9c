/// The ten accepted Roman literals. Kept as a literal enumeration: anything
/// not listed here (`XI`, `IIII`, lowercase) is not a Roman operand.
pub const ROMAN_TABLE: [(&str, i64); 10] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
];

const ROMAN_PAIRS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub fn roman_value(token: &str) -> Option<i64> {
    ROMAN_TABLE
        .iter()
        .find(|(literal, _)| *literal == token)
        .map(|(_, value)| *value)
}

fn symbol_value(symbol: char) -> i64 {
    let mut buf = [0u8; 4];
    roman_value(symbol.encode_utf8(&mut buf)).unwrap_or(0)
}

/// Two-term lookback accumulation. Exact for the canonical literals only.
pub fn roman_to_arabic(roman: &str) -> i64 {
    let mut total = 0;
    let mut previous: Option<i64> = None;

    for symbol in roman.chars() {
        let current = symbol_value(symbol);
        match previous {
            // undo the previous addition and apply the subtractive pair
            Some(prev) if current > prev => total += current - 2 * prev,
            _ => total += current,
        }
        previous = Some(current);
    }

    total
}

/// Greedy conversion; empty for non-positive input.
pub fn arabic_to_roman(mut value: i64) -> String {
    let mut roman = String::new();
    if value <= 0 {
        return roman;
    }

    for (weight, symbol) in ROMAN_PAIRS {
        while value >= weight {
            roman.push_str(symbol);
            value -= weight;
        }
    }

    roman
}
