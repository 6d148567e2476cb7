//! # Invoice Records
//!
//! The typed output contract of the extraction pipeline. Every field the
//! prompt asks for is nullable except `items`, which is always an array. A
//! serialized [`Invoice`] is total over the schema keys: absent information
//! is an explicit JSON `null`, never an omitted key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every top-level key the extraction prompt requests, in schema order.
///
/// Shared by the validator (presence checks) and the prompt tests so the
/// instruction text and the enforcement can never drift apart.
pub const TOP_LEVEL_KEYS: [&str; 12] = [
    "invoice_number",
    "issue_date",
    "due_date",
    "vendor_name",
    "vendor_address",
    "customer_name",
    "customer_address",
    "total_amount",
    "currency",
    "items",
    "tax_amount",
    "notes",
];

/// The keys of a single line item object.
pub const LINE_ITEM_KEYS: [&str; 4] = ["description", "quantity", "unit_price", "amount"];

/// One validated invoice, created once per document-extraction request.
///
/// Dates serialize as `YYYY-MM-DD`. `total_amount` and `tax_amount` are
/// non-negative when present; `currency` is echoed as printed on the
/// document and is not checked against a code table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Invoice {
    pub invoice_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub vendor_name: Option<String>,
    pub vendor_address: Option<String>,
    pub customer_name: Option<String>,
    pub customer_address: Option<String>,
    pub total_amount: Option<f64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub tax_amount: Option<f64>,
    pub notes: Option<String>,
}

/// One row of the invoice's itemized charges, owned by its parent invoice.
///
/// Amounts carry no sign constraint here; discount rows are legal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LineItem {
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub amount: Option<f64>,
}
