//! View state of the invoice screen and the pure transitions over it.
//!
//! [`reduce`] never performs I/O. Work that has to leave the process comes back as
//! [`Effect`]s which the controller executes and answers with further [`Event`]s.

use crate::error::InvoiceError;
use crate::types::{DraftEdit, FormDraft, Invoice, NewInvoice, Notification};

pub const CREATED_TITLE: &str = "Success";
pub const CREATED_MESSAGE: &str = "Invoice created successfully";
pub const VALIDATION_TITLE: &str = "Validation Error";
pub const ERROR_TITLE: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Active,
    TornDown,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// server order, replaced wholesale by every successful fetch
    pub invoices: Vec<Invoice>,
    /// true while at least one fetch is outstanding
    pub loading: bool,
    pub draft: FormDraft,
    pub lifecycle: Lifecycle,
    in_flight: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    fn begin_fetch(&mut self, effects: &mut Vec<Effect>) {
        self.in_flight += 1;
        self.loading = true;
        effects.push(Effect::FetchInvoices);
    }

    fn settle_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = self.in_flight > 0;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// screen became active; refreshes once
    Mounted,
    /// user pressed refresh
    RefreshRequested,
    InvoicesLoaded(Vec<Invoice>),
    InvoicesFailed(InvoiceError),
    DraftEdited(DraftEdit),
    /// user submitted the create form
    Submitted,
    InvoiceCreated,
    CreateFailed(InvoiceError),
    Unmounted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchInvoices,
    CreateInvoice(NewInvoice),
    Notify(Notification),
}

pub fn reduce(mut state: ViewState, event: Event) -> (ViewState, Vec<Effect>) {
    let mut effects = Vec::new();

    // late responses after teardown must not touch anything
    if state.is_torn_down() {
        return (state, effects);
    }

    match event {
        Event::Mounted => {
            if state.lifecycle == Lifecycle::Created {
                state.lifecycle = Lifecycle::Active;
                state.begin_fetch(&mut effects);
            }
        }
        Event::RefreshRequested => state.begin_fetch(&mut effects),
        Event::InvoicesLoaded(invoices) => {
            state.invoices = invoices;
            state.settle_fetch();
        }
        Event::InvoicesFailed(err) => {
            effects.push(Effect::Notify(Notification::destructive(
                ERROR_TITLE,
                err.to_string(),
            )));
            state.settle_fetch();
        }
        Event::DraftEdited(edit) => state.draft.apply(edit),
        Event::Submitted => match state.draft.to_new_invoice() {
            Ok(body) => effects.push(Effect::CreateInvoice(body)),
            Err(err) => effects.push(Effect::Notify(Notification::new(
                VALIDATION_TITLE,
                err.to_string(),
            ))),
        },
        Event::InvoiceCreated => {
            effects.push(Effect::Notify(Notification::new(
                CREATED_TITLE,
                CREATED_MESSAGE,
            )));
            state.draft = FormDraft::default();
            state.begin_fetch(&mut effects);
        }
        Event::CreateFailed(err) => effects.push(Effect::Notify(Notification::destructive(
            ERROR_TITLE,
            err.to_string(),
        ))),
        Event::Unmounted => state.lifecycle = Lifecycle::TornDown,
    }

    (state, effects)
}
