//! # Completion Validation
//!
//! Turns the decoded JSON of a model completion into a typed [`Invoice`], or
//! into a [`ValidationError`] naming the first field that broke the contract.
//! Validation is a pure, single-pass function: no I/O, no shared state, safe
//! to call concurrently.
//!
//! The one silent correction permitted is the `items` default: a missing or
//! null `items` key becomes an empty array. Everything else is reported.

use crate::errors::{ValidationError, ValidationReason};
use crate::normalize::normalize_amount;
use crate::schema::{Invoice, LineItem, LINE_ITEM_KEYS, TOP_LEVEL_KEYS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How string-valued amount fields are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountMode {
    /// A string where a number belongs is rejected as `non_numeric_amount`.
    #[default]
    Strict,
    /// Strings are run through [`normalize_amount`] and accepted when that
    /// succeeds; anything it cannot salvage is still rejected.
    Normalize,
}

/// Configuration for one validation pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    pub amount_mode: AmountMode,
}

/// Validates a raw completion value with strict defaults.
pub fn validate(raw: &Value) -> Result<Invoice, ValidationError> {
    validate_with_options(raw, &ValidationOptions::default())
}

/// Validates a raw completion value into an [`Invoice`].
///
/// Checks run in schema order and stop at the first violation: the root must
/// be an object, every top-level key except `items` must exist (null is a
/// legal value, absence is not), then each field must match its declared
/// shape. Keys outside the schema are ignored.
pub fn validate_with_options(
    raw: &Value,
    options: &ValidationOptions,
) -> Result<Invoice, ValidationError> {
    let object = match raw.as_object() {
        Some(object) => object,
        None => return Err(wrong_type("$", "object", raw)),
    };

    for key in TOP_LEVEL_KEYS {
        if key != "items" && !object.contains_key(key) {
            return Err(missing(key));
        }
    }

    Ok(Invoice {
        invoice_number: string_field("invoice_number", &object["invoice_number"])?,
        issue_date: date_field("issue_date", &object["issue_date"])?,
        due_date: date_field("due_date", &object["due_date"])?,
        vendor_name: string_field("vendor_name", &object["vendor_name"])?,
        vendor_address: string_field("vendor_address", &object["vendor_address"])?,
        customer_name: string_field("customer_name", &object["customer_name"])?,
        customer_address: string_field("customer_address", &object["customer_address"])?,
        total_amount: non_negative_field("total_amount", &object["total_amount"], options)?,
        currency: string_field("currency", &object["currency"])?,
        items: items_field(object.get("items"), options)?,
        tax_amount: non_negative_field("tax_amount", &object["tax_amount"], options)?,
        notes: string_field("notes", &object["notes"])?,
    })
}

// --- Field Checks ---

fn string_field(path: &str, value: &Value) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        other => Err(wrong_type(path, "string", other)),
    }
}

fn date_field(path: &str, value: &Value) -> Result<Option<NaiveDate>, ValidationError> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(text) => text,
        other => return Err(wrong_type(path, "string", other)),
    };

    parse_strict_date(text).map(Some).ok_or_else(|| ValidationError {
        field_path: path.to_string(),
        reason: ValidationReason::BadDateFormat,
        expected: None,
        raw: value.clone(),
    })
}

fn amount_field(
    path: &str,
    value: &Value,
    options: &ValidationOptions,
) -> Result<Option<f64>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => match number.as_f64() {
            Some(amount) => Ok(Some(amount)),
            None => Err(non_numeric(path, value)),
        },
        Value::String(text) => match options.amount_mode {
            AmountMode::Strict => Err(non_numeric(path, value)),
            AmountMode::Normalize => normalize_amount(text)
                .map(Some)
                .map_err(|_| non_numeric(path, value)),
        },
        other => Err(wrong_type(path, "number", other)),
    }
}

/// Amount check for `total_amount` and `tax_amount`, which must not be
/// negative. Line-item amounts go through [`amount_field`] directly.
fn non_negative_field(
    path: &str,
    value: &Value,
    options: &ValidationOptions,
) -> Result<Option<f64>, ValidationError> {
    let amount = amount_field(path, value, options)?;
    if let Some(amount) = amount {
        if amount < 0.0 {
            return Err(wrong_type(path, "non-negative number", value));
        }
    }
    Ok(amount)
}

fn items_field(
    value: Option<&Value>,
    options: &ValidationOptions,
) -> Result<Vec<LineItem>, ValidationError> {
    let elements = match value {
        // The documented default: no items key, or an explicit null, is an
        // empty list of charges.
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(elements)) => elements,
        Some(other) => return Err(wrong_type("items", "array", other)),
    };

    let mut items = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        items.push(line_item(index, element, options)?);
    }
    Ok(items)
}

fn line_item(
    index: usize,
    element: &Value,
    options: &ValidationOptions,
) -> Result<LineItem, ValidationError> {
    let path = format!("items[{index}]");
    let object = match element.as_object() {
        Some(object) => object,
        None => return Err(wrong_type(&path, "object", element)),
    };

    for key in LINE_ITEM_KEYS {
        if !object.contains_key(key) {
            return Err(missing(&format!("{path}.{key}")));
        }
    }

    Ok(LineItem {
        description: string_field(&format!("{path}.description"), &object["description"])?,
        quantity: amount_field(&format!("{path}.quantity"), &object["quantity"], options)?,
        unit_price: amount_field(&format!("{path}.unit_price"), &object["unit_price"], options)?,
        amount: amount_field(&format!("{path}.amount"), &object["amount"], options)?,
    })
}

/// Parses a date in strict `YYYY-MM-DD` form.
///
/// `NaiveDate::parse_from_str` accepts unpadded fields like `2023-1-5`, so
/// the shape is gated first; chrono then rejects impossible calendar dates
/// such as `2023-02-31`.
fn parse_strict_date(text: &str) -> Option<NaiveDate> {
    let shaped = text.len() == 10
        && text
            .bytes()
            .enumerate()
            .all(|(position, byte)| match position {
                4 | 7 => byte == b'-',
                _ => byte.is_ascii_digit(),
            });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

// --- Error Constructors ---

fn missing(path: &str) -> ValidationError {
    ValidationError {
        field_path: path.to_string(),
        reason: ValidationReason::Missing,
        expected: None,
        raw: Value::Null,
    }
}

fn wrong_type(path: &str, expected: &'static str, raw: &Value) -> ValidationError {
    ValidationError {
        field_path: path.to_string(),
        reason: ValidationReason::WrongType,
        expected: Some(expected),
        raw: raw.clone(),
    }
}

fn non_numeric(path: &str, raw: &Value) -> ValidationError {
    ValidationError {
        field_path: path.to_string(),
        reason: ValidationReason::NonNumericAmount,
        expected: None,
        raw: raw.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_strict_date;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_strict_date_accepts_padded_iso_dates() {
        assert_eq!(
            parse_strict_date("2023-01-15"),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert_eq!(
            parse_strict_date("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_parse_strict_date_rejects_malformed_shapes() {
        assert_eq!(parse_strict_date("2023/01/15"), None);
        assert_eq!(parse_strict_date("2023-1-15"), None);
        assert_eq!(parse_strict_date("2023-01-15 "), None);
        assert_eq!(parse_strict_date("15-01-2023"), None);
        assert_eq!(parse_strict_date("January 15, 2023"), None);
        assert_eq!(parse_strict_date(""), None);
    }

    #[test]
    fn test_parse_strict_date_rejects_impossible_calendar_dates() {
        assert_eq!(parse_strict_date("2023-02-31"), None);
        assert_eq!(parse_strict_date("2023-02-29"), None);
        assert_eq!(parse_strict_date("2023-13-01"), None);
        assert_eq!(parse_strict_date("2023-00-10"), None);
    }
}
