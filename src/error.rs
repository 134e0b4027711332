use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";
pub const FETCH_FAILED: &str = "Failed to fetch invoices";
pub const CREATE_FAILED: &str = "Failed to create invoice";

/// Everything that can go wrong while talking to the invoice service or submitting the form.
/// None of these are retried; each one ends the attempt and is reported through the notifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvoiceError {
    /// draft is missing a customer or an amount, nothing was sent
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    /// `GET /invoices` failed: transport, non-2xx or undecodable body
    #[error("{}", .0.as_deref().unwrap_or(FETCH_FAILED))]
    Fetch(Option<String>),
    /// `POST /invoices` failed: transport or non-2xx
    #[error("{}", .0.as_deref().unwrap_or(CREATE_FAILED))]
    Create(Option<String>),
}

impl InvoiceError {
    pub fn fetch(cause: impl ToString) -> Self {
        InvoiceError::Fetch(non_empty(cause.to_string()))
    }

    pub fn create(cause: impl ToString) -> Self {
        InvoiceError::Create(non_empty(cause.to_string()))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, InvoiceError::Validation)
    }
}

fn non_empty(message: String) -> Option<String> {
    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}
