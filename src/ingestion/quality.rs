//! Advisory data-quality checks.
//!
//! Findings are only counted. Nothing here rejects a row or returns an error.

use std::collections::HashSet;
use std::num::IntErrorKind;

use crate::types::{IssueCounters, Row};

/// Column holding the customer identifier.
pub const CUSTOMER_ID_COLUMN: &str = "customer_id";
/// Column holding the customer name.
pub const NAME_COLUMN: &str = "name";
/// Column holding the customer age.
pub const AGE_COLUMN: &str = "age";
/// Ages strictly below this are counted as underage.
pub const ADULT_AGE: i64 = 18;

/// Tally duplicate ids, missing names and underage customers over `rows` in a single pass.
///
/// - `customer_id` is trimmed; a missing column counts as the empty string. Every repeat of an id
///   already seen in this call is a duplicate, including repeats of the empty id.
/// - `name` is trimmed; empty or missing counts as missing.
/// - `age` is parsed as an integer; a missing column reads as `0`. Ages below [`ADULT_AGE`] are
///   underage, and so are values that are not integers at all. The latter is a known quirk: a
///   malformed age and a minor land in the same counter.
///
/// The function is pure; calling it twice on the same rows yields the same counters.
pub fn detect_issues<'a, I>(rows: I) -> IssueCounters
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut issues = IssueCounters::default();
    let mut seen_ids: HashSet<&'a str> = HashSet::new();

    for row in rows {
        let customer_id = row.get(CUSTOMER_ID_COLUMN).unwrap_or("").trim();
        if !seen_ids.insert(customer_id) {
            issues.duplicate_ids += 1;
        }

        if row.get(NAME_COLUMN).unwrap_or("").trim().is_empty() {
            issues.missing_name += 1;
        }

        if is_underage(row.get(AGE_COLUMN).unwrap_or("0")) {
            issues.underage += 1;
        }
    }

    issues
}

/// True when `raw` is an integer below [`ADULT_AGE`] or is not an integer.
///
/// Integer syntax is the one `int()` accepts in Python: surrounding whitespace, an optional sign,
/// single `_` between digits, and decimal digits from any script (`"１８"`, `"١٨"`).
/// Integers too large for `i64` are still classified by their sign.
pub fn is_underage(raw: &str) -> bool {
    let Some(digits) = normalize_integer(raw.trim()) else {
        return true;
    };
    match digits.parse::<i64>() {
        Ok(age) => age < ADULT_AGE,
        Err(e) => !matches!(e.kind(), IntErrorKind::PosOverflow),
    }
}

/// Rewrite `text` as an ASCII integer literal, or `None` if it is not one.
///
/// Underscores are dropped when they sit between two digits; a leading, trailing or doubled `_`
/// rejects the input.
fn normalize_integer(text: &str) -> Option<String> {
    let (sign, body) = match text.chars().next() {
        Some(c @ ('+' | '-')) => (Some(c), &text[1..]),
        _ => (None, text),
    };

    let mut out = String::with_capacity(body.len() + 1);
    out.extend(sign);

    let mut after_digit = false;
    for ch in body.chars() {
        if ch == '_' {
            if !after_digit {
                return None;
            }
            after_digit = false;
            continue;
        }
        out.push(char::from_digit(decimal_digit(ch)?, 10)?);
        after_digit = true;
    }

    // Empty body or trailing underscore.
    after_digit.then_some(out)
}

/// Value of a Unicode decimal digit (general category Nd).
fn decimal_digit(ch: char) -> Option<u32> {
    if let Some(d) = ch.to_digit(10) {
        return Some(d);
    }
    let cp = u32::from(ch);
    let idx = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = DECIMAL_ZEROS[idx.checked_sub(1)?];
    let value = cp - zero;
    (value < 10).then_some(value)
}

/// Code points of the digit zero of every Nd run (Unicode 14). Each run holds `0..=9`.
const DECIMAL_ZEROS: [u32; 66] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];
