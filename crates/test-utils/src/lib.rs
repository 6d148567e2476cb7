//! # Shared Test Utilities
//!
//! A mock document model and canonical invoice fixtures used by the
//! integration tests across the workspace.

use async_trait::async_trait;
use chrono::NaiveDate;
use invox::errors::ExtractError;
use invox::provider::DocumentModel;
use invox::schema::{Invoice, LineItem};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// --- Fixtures ---

/// The completion a well-behaved model returns for the sample invoice.
///
/// A worked example that exercises every field of the schema, including
/// Japanese text in names, addresses, and line item descriptions.
pub const SAMPLE_INVOICE_COMPLETION: &str = r#"{
    "invoice_number": "INV-2023-001",
    "issue_date": "2023-01-15",
    "due_date": "2023-02-15",
    "vendor_name": "ABC株式会社",
    "vendor_address": "東京都千代田区1-2-3",
    "customer_name": "XYZ合同会社",
    "customer_address": "大阪府大阪市4-5-6",
    "total_amount": 123450,
    "currency": "JPY",
    "items": [
        {
            "description": "コンサルティング費用",
            "quantity": 1,
            "unit_price": 100000,
            "amount": 100000
        },
        {
            "description": "交通費",
            "quantity": 1,
            "unit_price": 23450,
            "amount": 23450
        }
    ],
    "tax_amount": 12345,
    "notes": "特になし"
}"#;

/// The typed record [`SAMPLE_INVOICE_COMPLETION`] validates into.
pub fn sample_invoice() -> Invoice {
    Invoice {
        invoice_number: Some("INV-2023-001".to_string()),
        issue_date: NaiveDate::from_ymd_opt(2023, 1, 15),
        due_date: NaiveDate::from_ymd_opt(2023, 2, 15),
        vendor_name: Some("ABC株式会社".to_string()),
        vendor_address: Some("東京都千代田区1-2-3".to_string()),
        customer_name: Some("XYZ合同会社".to_string()),
        customer_address: Some("大阪府大阪市4-5-6".to_string()),
        total_amount: Some(123450.0),
        currency: Some("JPY".to_string()),
        items: vec![
            LineItem {
                description: Some("コンサルティング費用".to_string()),
                quantity: Some(1.0),
                unit_price: Some(100000.0),
                amount: Some(100000.0),
            },
            LineItem {
                description: Some("交通費".to_string()),
                quantity: Some(1.0),
                unit_price: Some(23450.0),
                amount: Some(23450.0),
            },
        ],
        tax_amount: Some(12345.0),
        notes: Some("特になし".to_string()),
    }
}

// --- Mock Document Model ---

#[derive(Clone, Debug)]
pub struct MockDocumentModel {
    responses: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl MockDocumentModel {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-programs a completion for a specific prompt.
    /// The key should be a unique substring of the prompt.
    pub fn add_response(&self, key: &str, completion: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), completion.to_string());
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<(String, Vec<u8>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockDocumentModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentModel for MockDocumentModel {
    async fn complete(&self, prompt: &str, document: &[u8]) -> Result<String, ExtractError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((prompt.to_string(), document.to_vec()));

        let responses = self.responses.lock().unwrap();
        for (key, completion) in responses.iter() {
            if prompt.contains(key) {
                return Ok(completion.clone());
            }
        }

        Err(ExtractError::Model(format!(
            "MockDocumentModel: No completion programmed for prompt. Got: '{prompt}'"
        )))
    }
}
