use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An invoice as returned by `GET /invoices`.
/// The service owns these records; nothing in this crate mutates one.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Invoice {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub customer: String,
    #[serde(deserialize_with = "amount_from_number_or_string")]
    pub amount: f64,
    // kept as a plain string, the service knows more statuses than the form offers
    pub status: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Statuses a user can pick when creating an invoice
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Cancelled,
    ];

    /// wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    /// label shown in the status picker
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvoiceStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown invoice status: {}", s))
    }
}

/// Body of `POST /invoices`.
/// `amount` is `None` when the draft text holds no number at all; it then goes out as `null`
/// and the service decides what to do with it.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct NewInvoice {
    pub customer: String,
    pub amount: Option<f64>,
    pub status: InvoiceStatus,
}

// the service hands out integer primary keys, older fixtures use strings
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number for id, got {}",
            other
        ))),
    }
}

// decimals come over the wire as strings ("125.50")
fn amount_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", n))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid amount {:?}: {}", s, e))),
        other => Err(de::Error::custom(format!(
            "expected number or numeric string for amount, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plain_invoice() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": "1",
            "customer": "Acme",
            "amount": 125.5,
            "status": "paid",
            "created_at": "2024-01-15T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(invoice.id, "1");
        assert_eq!(invoice.amount, 125.5);
        assert_eq!(invoice.status, "paid");
        assert_eq!(invoice.updated_at, None);
    }

    #[test]
    fn parses_service_shaped_invoice() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": 42,
            "customer": "Globex",
            "amount": "99.90",
            "status": "overdue",
            "created_at": "2024-03-01T10:20:30.123456+00:00",
            "updated_at": "2024-03-02T10:20:30+00:00"
        }))
        .unwrap();
        assert_eq!(invoice.id, "42");
        assert_eq!(invoice.amount, 99.9);
        assert_eq!(invoice.status, "overdue");
        assert!(invoice.updated_at.is_some());
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let result = serde_json::from_value::<Invoice>(json!({
            "id": "1",
            "customer": "Acme",
            "amount": "lots",
            "status": "paid",
            "created_at": "2024-01-15T00:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Paid".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Paid));
        assert_eq!(
            " cancelled ".parse::<InvoiceStatus>(),
            Ok(InvoiceStatus::Cancelled)
        );
        assert!("overdue".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn new_invoice_wire_shape() {
        let body = NewInvoice {
            customer: "Acme".to_string(),
            amount: Some(50.0),
            status: InvoiceStatus::Pending,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"customer": "Acme", "amount": 50.0, "status": "pending"})
        );

        let body = NewInvoice {
            amount: None,
            ..body
        };
        assert_eq!(serde_json::to_value(&body).unwrap()["amount"], json!(null));
    }
}
