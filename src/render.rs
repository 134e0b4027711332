//! Presentation derived from [`ViewState`]. Nothing in here has side effects.

use crate::state::ViewState;
use crate::types::{Invoice, InvoiceStatus};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};
use std::fmt;

pub const TITLE: &str = "Invoice Service";
pub const SUBTITLE: &str = "Manage your invoices with ease";
pub const LOADING_TEXT: &str = "Loading invoices...";
pub const EMPTY_TITLE: &str = "No invoices yet";
pub const EMPTY_HINT: &str = "Create your first invoice to get started";
pub const COLUMNS: [&str; 4] = ["Customer", "Amount", "Status", "Created"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Outline,
    Destructive,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Destructive => "destructive",
        }
    }
}

/// Emphasis for a status badge. Unknown statuses get `Default`.
pub fn badge_variant(status: &str) -> BadgeVariant {
    match status {
        "pending" => BadgeVariant::Outline,
        "paid" => BadgeVariant::Default,
        "cancelled" => BadgeVariant::Destructive,
        _ => BadgeVariant::Default,
    }
}

pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Short date in `locale`, taken in the timestamp's own offset.
/// Timestamps that cannot be read are shown as they came.
pub fn format_date(timestamp: &str, locale: Locale) -> String {
    match parse_date(timestamp).and_then(|date| date.and_hms_opt(0, 0, 0)) {
        Some(midnight) => midnight
            .and_utc()
            .format_localized("%x", locale)
            .to_string(),
        None => timestamp.to_string(),
    }
}

fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(datetime.date_naive());
    }
    // the service sometimes drops the offset
    if let Ok(datetime) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRow {
    pub key: String,
    pub customer: String,
    pub amount: String,
    pub status: Badge,
    pub created: String,
}

impl InvoiceRow {
    pub fn new(invoice: &Invoice, locale: Locale) -> Self {
        Self {
            key: invoice.id.clone(),
            customer: invoice.customer.clone(),
            amount: format_amount(invoice.amount),
            status: Badge {
                label: invoice.status.clone(),
                variant: badge_variant(&invoice.status),
            },
            created: format_date(&invoice.created_at, locale),
        }
    }

    fn cells(&self) -> [&str; 4] {
        [
            &self.customer,
            &self.amount,
            &self.status.label,
            &self.created,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// fetch in flight and nothing to show yet
    Loading,
    /// call to action
    Empty,
    Table(Vec<InvoiceRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub customer: String,
    pub amount: String,
    pub status: InvoiceStatus,
    pub status_options: Vec<(InvoiceStatus, &'static str)>,
}

/// Everything the invoice screen shows for one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub form: FormView,
    pub refresh_disabled: bool,
    pub refresh_spinning: bool,
    pub body: Body,
}

impl Screen {
    pub fn from_state(state: &ViewState, locale: Locale) -> Self {
        let body = if state.invoices.is_empty() {
            if state.loading {
                Body::Loading
            } else {
                Body::Empty
            }
        } else {
            Body::Table(
                state
                    .invoices
                    .iter()
                    .map(|invoice| InvoiceRow::new(invoice, locale))
                    .collect(),
            )
        };

        Self {
            form: FormView {
                customer: state.draft.customer.clone(),
                amount: state.draft.amount.clone(),
                status: state.draft.status,
                status_options: InvoiceStatus::ALL
                    .into_iter()
                    .map(|status| (status, status.label()))
                    .collect(),
            },
            refresh_disabled: state.loading,
            refresh_spinning: state.loading,
            body,
        }
    }

    /// Plain-text rendering for the console
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", SUBTITLE)?;
        writeln!(f)?;
        let refreshing = if self.refresh_spinning {
            " (refreshing)"
        } else {
            ""
        };
        writeln!(f, "Invoices{}", refreshing)?;

        match &self.body {
            Body::Loading => writeln!(f, "{}", LOADING_TEXT),
            Body::Empty => {
                writeln!(f, "{}", EMPTY_TITLE)?;
                writeln!(f, "{}", EMPTY_HINT)
            }
            Body::Table(rows) => {
                let mut widths = COLUMNS.map(str::len);
                for row in rows {
                    for (width, cell) in widths.iter_mut().zip(row.cells()) {
                        *width = (*width).max(cell.chars().count());
                    }
                }
                write_row(f, COLUMNS, &widths)?;
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                writeln!(f, "{}", rule.join("-+-"))?;
                for row in rows {
                    write_row(f, row.cells(), &widths)?;
                }
                Ok(())
            }
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: [&str; 4], widths: &[usize; 4]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(f, "{}", padded.join(" | ").trim_end())
}
