pub mod draft;
pub mod invoice;
pub mod notification;

pub use draft::{parse_amount, DraftEdit, FormDraft};
pub use invoice::{Invoice, InvoiceStatus, NewInvoice};
pub use notification::{Notification, Severity};
