//! Numeric literal parsing.
//!
//! Literals are decimal by default. A leading zero followed by more digits
//! marks an octal candidate: if every digit is 0-7 the whole numeral (sign
//! preserved) reads in base 8, the exact forms `08` and `09` read as plain
//! 8 and 9, and any other leading-zero numeral containing an 8 or 9 is
//! discarded outright (no push, no report).

use crate::value::SatInt;

/// Parse a literal token into a value, or `None` to discard it silently.
pub fn parse(text: &str) -> Option<SatInt> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let octal_candidate = digits.len() > 1 && digits.starts_with('0');
    if !octal_candidate {
        return Some(saturating_from_radix(text, 10));
    }
    if digits.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
        return Some(saturating_from_radix(text, 8));
    }
    match text {
        "08" => Some(SatInt::new(8)),
        "09" => Some(SatInt::new(9)),
        _ => None,
    }
}

/// Parse with saturation. The tokenizer guarantees the digit form, so the
/// only possible failure is a numeral too long even for `i128`; that clamps
/// by sign.
fn saturating_from_radix(text: &str, radix: u32) -> SatInt {
    match i128::from_str_radix(text, radix) {
        Ok(v) => SatInt::from_wide(v),
        Err(_) if text.starts_with('-') => SatInt::MIN,
        Err(_) => SatInt::MAX,
    }
}
