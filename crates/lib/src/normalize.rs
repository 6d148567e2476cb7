//! # Amount Normalization
//!
//! Models often quote money the way it is printed on the page, e.g.
//! `"¥123,450"` or `"1,234.56"`, despite being told to emit bare numbers.
//! This helper reduces the common decorations to a plain number for callers
//! that opt in to lenient amounts.

use crate::errors::NormalizeAmountError;
use regex::Regex;
use std::sync::LazyLock;

/// A decorated amount: optional currency marker, digits with optional
/// thousands separators (ASCII or full-width comma), optional decimal part,
/// optional trailing yen suffix.
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[¥￥$€£]?\s*(-?[\d,，]+(?:\.\d+)?)\s*円?$").expect("amount pattern is valid")
});

/// Reduces a decorated amount string to a plain number.
///
/// Strips a leading currency symbol (`¥`, `￥`, `$`, `€`, `£`), a trailing
/// `円`, thousands separators, and surrounding whitespace. Anything left over
/// that is not a plain decimal number fails: `"12 people"` stays rejected
/// rather than being guessed at.
pub fn normalize_amount(input: &str) -> Result<f64, NormalizeAmountError> {
    let bare: String = AMOUNT_PATTERN
        .captures(input.trim())
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| NormalizeAmountError(input.to_string()))?
        .as_str()
        .chars()
        .filter(|c| *c != ',' && *c != '，')
        .collect();

    bare.parse::<f64>()
        .map_err(|_| NormalizeAmountError(input.to_string()))
}
