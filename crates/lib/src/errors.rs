use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The reason a completion field was rejected, as reported to callers.
///
/// The serialized form is the wire string used in API responses:
/// `missing`, `wrong_type`, `bad_date_format`, or `non_numeric_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// A required key is absent from the raw input.
    Missing,
    /// A field's value has the wrong shape for its declared type.
    WrongType,
    /// A date field is not a real calendar date in `YYYY-MM-DD` form.
    BadDateFormat,
    /// An amount field is not a bare number.
    NonNumericAmount,
}

impl ValidationReason {
    /// The wire string for this reason, e.g. `wrong_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationReason::Missing => "missing",
            ValidationReason::WrongType => "wrong_type",
            ValidationReason::BadDateFormat => "bad_date_format",
            ValidationReason::NonNumericAmount => "non_numeric_amount",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first schema violation found while validating a completion.
///
/// Carries the dot-delimited path to the offending field (array elements use
/// bracketed indices, e.g. `items[2].unit_price`; the root object is `$`),
/// the reason, and the original raw value for diagnostics. `expected` names
/// the type that was wanted and is only set on wrong-type rejections.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("completion rejected at `{field_path}`: {reason} (raw value: {raw})")]
pub struct ValidationError {
    pub field_path: String,
    pub reason: ValidationReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<&'static str>,
    pub raw: Value,
}

/// Returned when `normalize_amount` cannot reduce a string to a plain number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a recognizable monetary amount")]
pub struct NormalizeAmountError(pub String);

/// Errors from the end-to-end extraction pipeline.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Document model request failed: {0}")]
    Model(String),
    #[error("Failed to parse completion as JSON: {0}")]
    CompletionParse(#[from] serde_json::Error),
    #[error("Completion failed schema validation: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors from rendering line items as CSV.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV buffer write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
