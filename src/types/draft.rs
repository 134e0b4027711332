use super::invoice::{InvoiceStatus, NewInvoice};
use crate::error::InvoiceError;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("leading float pattern is valid")
});

/// The create form while the user is still typing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub customer: String,
    /// raw text from the amount input
    pub amount: String,
    pub status: InvoiceStatus,
}

/// A single change to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Customer(String),
    Amount(String),
    Status(InvoiceStatus),
}

impl FormDraft {
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Customer(customer) => self.customer = customer,
            DraftEdit::Amount(amount) => self.amount = amount,
            DraftEdit::Status(status) => self.status = status,
        }
    }

    /// Only emptiness is checked; the service owns every other rule.
    pub fn validate(&self) -> Result<(), InvoiceError> {
        if self.customer.is_empty() || self.amount.is_empty() {
            return Err(InvoiceError::Validation);
        }
        Ok(())
    }

    /// Validated request body for `POST /invoices`
    pub fn to_new_invoice(&self) -> Result<NewInvoice, InvoiceError> {
        self.validate()?;
        Ok(NewInvoice {
            customer: self.customer.clone(),
            amount: parse_amount(&self.amount),
            status: self.status,
        })
    }
}

/// Lenient number parsing for the amount field: leading whitespace is skipped and the
/// longest numeric prefix wins, so `"12abc"` is 12. Returns `None` when no prefix is numeric.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let prefix = LEADING_FLOAT.find(trimmed)?.as_str();
    match prefix.trim_start_matches(['+', '-']) {
        "Infinity" if prefix.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => prefix.parse::<f64>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_pending() {
        let draft = FormDraft::default();
        assert_eq!(draft.customer, "");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.status, InvoiceStatus::Pending);
    }

    #[test]
    fn edits_touch_one_field() {
        let mut draft = FormDraft::default();
        draft.apply(DraftEdit::Customer("Acme".into()));
        draft.apply(DraftEdit::Amount("50".into()));
        draft.apply(DraftEdit::Status(InvoiceStatus::Paid));
        assert_eq!(
            draft,
            FormDraft {
                customer: "Acme".into(),
                amount: "50".into(),
                status: InvoiceStatus::Paid,
            }
        );
    }

    #[test]
    fn empty_fields_fail_validation() {
        let mut draft = FormDraft::default();
        assert_eq!(draft.validate(), Err(InvoiceError::Validation));
        draft.customer = "Acme".into();
        assert_eq!(draft.validate(), Err(InvoiceError::Validation));
        draft.customer.clear();
        draft.amount = "10".into();
        assert_eq!(draft.validate(), Err(InvoiceError::Validation));
    }

    #[test]
    fn builds_request_body() {
        let draft = FormDraft {
            customer: "Acme".into(),
            amount: "50".into(),
            status: InvoiceStatus::Pending,
        };
        assert_eq!(
            draft.to_new_invoice().unwrap(),
            NewInvoice {
                customer: "Acme".into(),
                amount: Some(50.0),
                status: InvoiceStatus::Pending,
            }
        );
    }

    #[test]
    fn amount_parsing_is_lenient() {
        assert_eq!(parse_amount("125.5"), Some(125.5));
        assert_eq!(parse_amount("  7"), Some(7.0));
        assert_eq!(parse_amount("12abc"), Some(12.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("-3."), Some(-3.0));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn unparsable_amount_still_builds_a_body() {
        let draft = FormDraft {
            customer: "Acme".into(),
            amount: "ten".into(),
            status: InvoiceStatus::Paid,
        };
        assert_eq!(draft.to_new_invoice().unwrap().amount, None);
    }
}
