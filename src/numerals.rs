// WHY: Act and scene headers number themselves in Roman numerals in one dialect and
// Arabic numerals in the other; both directions are needed to normalize titles

/// Subtractive-pair table used for greedy integer to numeral conversion
const ROMAN_TABLE: &[(u32, &str)] = &[
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

fn letter_value(letter: char) -> i64 {
    match letter.to_ascii_uppercase() {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// Convert a Roman numeral to an integer, case-insensitively.
///
/// Scans right to left, subtracting a letter whose value is smaller than the one to
/// its right and adding otherwise. Non-canonical forms are accepted ("IIII" is 4) and
/// unknown letters count as zero, so the result is always a best-effort number.
pub fn roman_to_int(numeral: &str) -> u32 {
    let mut total: i64 = 0;
    let mut previous = 0;

    for letter in numeral.chars().rev() {
        let value = letter_value(letter);
        if value < previous {
            total -= value;
        } else {
            total += value;
        }
        previous = value;
    }

    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

/// Convert a positive integer to its canonical upper-case Roman numeral.
/// Zero yields an empty string.
pub fn int_to_roman(mut number: u32) -> String {
    let mut numeral = String::new();
    for &(value, symbol) in ROMAN_TABLE {
        while number >= value {
            numeral.push_str(symbol);
            number -= value;
        }
    }
    numeral
}

/// True when every character is one of the seven Roman numeral letters (any case)
pub fn is_roman_numeral(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| matches!(c.to_ascii_uppercase(), 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'))
}

/// Parse an act or scene number written either in Arabic digits or as a Roman numeral
pub fn parse_numeral(token: &str) -> Option<u32> {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return token.parse().ok();
    }
    if is_roman_numeral(token) {
        return Some(roman_to_int(token));
    }
    None
}
