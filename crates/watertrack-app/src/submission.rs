//! Where submitted form drafts go.
//!
//! Submissions are inert: a sink observes them, nothing is persisted.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::forms::{FillStockDraft, FormKind, NewProductDraft};

/// A submitted draft, carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormSubmission {
    NewProduct(NewProductDraft),
    FillStock(FillStockDraft),
}

impl FormSubmission {
    pub fn kind(&self) -> FormKind {
        match self {
            FormSubmission::NewProduct(_) => FormKind::NewProduct,
            FormSubmission::FillStock(_) => FormKind::FillStock,
        }
    }
}

/// The info-level log line for a submission.
impl fmt::Display for FormSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormSubmission::NewProduct(draft) => write!(f, "New product added: {}", draft),
            FormSubmission::FillStock(draft) => write!(f, "Stock filled: {}", draft),
        }
    }
}

/// Receives every form submission, in order.
pub trait SubmissionSink: Send {
    fn record(&mut self, submission: &FormSubmission);
}

/// Logs each submission at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&mut self, submission: &FormSubmission) {
        info!("{}", submission);
    }
}

impl<F> SubmissionSink for F
where
    F: FnMut(&FormSubmission) + Send,
{
    fn record(&mut self, submission: &FormSubmission) {
        self(submission)
    }
}
