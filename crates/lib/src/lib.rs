//! # Invoice Completion Validation
//!
//! This crate turns the raw text completion of an invoice-extraction model
//! call into a typed [`Invoice`], or into a structured [`ValidationError`]
//! naming the first place the completion broke the contract. Around that
//! core it ships the extraction prompt, the trait for the model endpoint,
//! and a CSV export for validated line items.

pub mod completion;
pub mod errors;
pub mod export;
pub mod normalize;
pub mod prompts;
pub mod provider;
pub mod schema;
pub mod validator;

pub use completion::{parse_completion, strip_code_fences};
pub use errors::{
    ExportError, ExtractError, NormalizeAmountError, ValidationError, ValidationReason,
};
pub use export::{line_items_to_csv, CsvExportOptions};
pub use normalize::normalize_amount;
pub use prompts::INVOICE_EXTRACTION_PROMPT;
pub use provider::DocumentModel;
pub use schema::{Invoice, LineItem};
pub use validator::{validate, validate_with_options, AmountMode, ValidationOptions};

use tracing::{debug, info};

/// Validates a raw completion string into an [`Invoice`].
///
/// This is the synchronous core of the pipeline: strip code fences, parse
/// the JSON, validate against the schema. Callers that already hold the
/// model output can use it without constructing an [`InvoiceExtractor`].
pub fn invoice_from_completion(
    completion: &str,
    options: &ValidationOptions,
) -> Result<Invoice, ExtractError> {
    let raw = parse_completion(completion)?;
    Ok(validator::validate_with_options(&raw, options)?)
}

/// Drives one document through the prompt, the model call, and validation.
#[derive(Clone, Debug)]
pub struct InvoiceExtractor {
    model: Box<dyn DocumentModel>,
    options: ValidationOptions,
}

impl InvoiceExtractor {
    /// Creates an extractor with strict validation defaults.
    pub fn new(model: Box<dyn DocumentModel>) -> Self {
        Self {
            model,
            options: ValidationOptions::default(),
        }
    }

    /// Replaces the validation options, e.g. to enable amount normalization.
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Sends the document to the model and validates the completion.
    pub async fn extract(&self, document: &[u8]) -> Result<Invoice, ExtractError> {
        info!(
            "[extract] Sending document ({} bytes) to the model.",
            document.len()
        );
        let completion = self
            .model
            .complete(prompts::INVOICE_EXTRACTION_PROMPT, document)
            .await?;
        debug!("[extract] Raw completion: {completion}");

        let invoice = invoice_from_completion(&completion, &self.options)?;
        info!(
            "[extract] Completion validated with {} line items.",
            invoice.items.len()
        );
        Ok(invoice)
    }
}
