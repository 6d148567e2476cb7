//! # Document Model Provider
//!
//! The boundary to the external completion API. The library never performs
//! network transport itself; callers bring an implementation of
//! [`DocumentModel`] wrapping whatever model endpoint is in use, and tests
//! use the mock from `invox-test-utils`.

use crate::errors::ExtractError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for the model endpoint that turns a document into a completion.
///
/// Timeout and retry policy around the call belong to the implementation or
/// its caller, not to this library.
#[async_trait]
pub trait DocumentModel: Send + Sync + Debug + DynClone {
    /// Sends the extraction prompt and raw document bytes to the model and
    /// returns the text completion.
    async fn complete(&self, prompt: &str, document: &[u8]) -> Result<String, ExtractError>;
}

dyn_clone::clone_trait_object!(DocumentModel);
