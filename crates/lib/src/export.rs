//! # Line Item CSV Export
//!
//! Renders a validated invoice's line items as the two-column CSV the
//! downstream accounting sheet expects: item label and tax-included amount.
//! Output is UTF-8 with an optional BOM so Excel detects the encoding
//! instead of mangling the headers.

use crate::errors::ExportError;
use crate::schema::Invoice;
use tracing::warn;

/// Consumption tax rate applied when deriving tax-included amounts.
pub const DEFAULT_TAX_RATE: f64 = 0.10;

/// The header row of the exported CSV: item label, tax-included amount.
pub const CSV_HEADERS: [&str; 2] = ["明細名", "税込金額"];

/// Configuration for [`line_items_to_csv`].
#[derive(Debug, Clone, Copy)]
pub struct CsvExportOptions {
    /// Tax rate applied on top of each line amount.
    pub tax_rate: f64,
    /// Prepend a UTF-8 BOM for Excel compatibility.
    pub include_bom: bool,
}

impl Default for CsvExportOptions {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            include_bom: true,
        }
    }
}

/// Renders the invoice's line items as CSV text.
///
/// Each row carries the item description and its tax-included amount,
/// rounded half away from zero to a whole amount. Items without an amount
/// cannot be priced and are skipped.
pub fn line_items_to_csv(
    invoice: &Invoice,
    options: &CsvExportOptions,
) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(CSV_HEADERS)?;

        for (index, item) in invoice.items.iter().enumerate() {
            let amount = match item.amount {
                Some(amount) => amount,
                None => {
                    warn!("Line item {index} has no amount, skipping CSV row.");
                    continue;
                }
            };

            let tax_included = (amount * (1.0 + options.tax_rate)).round();
            let description = item.description.as_deref().unwrap_or("");
            writer.write_record([description, tax_included.to_string().as_str()])?;
        }
        writer.flush()?;
    }

    let mut csv_text = String::from_utf8(buffer)?;
    if options.include_bom {
        csv_text.insert(0, '\u{feff}');
    }
    Ok(csv_text)
}
