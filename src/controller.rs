use crate::client::InvoiceApi;
use crate::notify::Notifier;
use crate::render::Screen;
use crate::state::{reduce, Effect, Event, ViewState};
use crate::types::{DraftEdit, NewInvoice};
use chrono::Locale;
use std::collections::VecDeque;
use tracing::{debug, instrument, trace};

/// Drives one invoice screen: owns its [`ViewState`], runs the network effects the reducer
/// asks for and forwards notifications to the sink.
///
/// Every method takes `&mut self`, so calls on one controller never overlap; the only
/// suspension points are the two service calls. A host that has to show the loading screen,
/// accept edits or refresh again while a request is outstanding should feed events into
/// [`crate::state::reduce`] itself and run the returned [`Effect`]s on its own schedule.
pub struct InvoiceController<A, N> {
    api: A,
    notifier: N,
    state: ViewState,
}

impl<A: InvoiceApi, N: Notifier> InvoiceController<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn screen(&self, locale: Locale) -> Screen {
        Screen::from_state(&self.state, locale)
    }

    /// First activation. Loads the list once; later calls do nothing.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) {
        self.dispatch(Event::Mounted).await
    }

    #[instrument(skip(self))]
    pub async fn refresh(&mut self) {
        self.dispatch(Event::RefreshRequested).await
    }

    pub fn edit_draft(&mut self, edit: DraftEdit) {
        // draft edits never produce service calls
        let effects = self.apply(Event::DraftEdited(edit));
        debug_assert!(effects.is_empty());
    }

    /// Submit the current draft. On success the draft is cleared and the list reloaded.
    #[instrument(skip(self))]
    pub async fn create_invoice(&mut self) {
        self.dispatch(Event::Submitted).await
    }

    pub fn unmount(&mut self) {
        debug!("unmounting invoice screen");
        self.apply(Event::Unmounted);
    }

    /// Feed an event through the reducer and keep going until no service call is left.
    pub async fn dispatch(&mut self, event: Event) {
        let mut pending = VecDeque::from([event]);
        while let Some(event) = pending.pop_front() {
            for call in self.apply(event) {
                let outcome = match call {
                    ServiceCall::List => match self.api.list_invoices().await {
                        Ok(invoices) => Event::InvoicesLoaded(invoices),
                        Err(err) => Event::InvoicesFailed(err),
                    },
                    ServiceCall::Create(body) => match self.api.create_invoice(&body).await {
                        Ok(()) => Event::InvoiceCreated,
                        Err(err) => Event::CreateFailed(err),
                    },
                };
                pending.push_back(outcome);
            }
        }
    }

    /// Runs the reducer, delivers notifications and returns the service calls still to make.
    fn apply(&mut self, event: Event) -> Vec<ServiceCall> {
        trace!(?event, "reduce");
        let (state, effects) = reduce(std::mem::take(&mut self.state), event);
        self.state = state;

        let mut calls = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::Notify(notification) => self.notifier.notify(notification),
                Effect::FetchInvoices => calls.push(ServiceCall::List),
                Effect::CreateInvoice(body) => calls.push(ServiceCall::Create(body)),
            }
        }
        calls
    }
}

/// The effects that leave the process
#[derive(Debug)]
enum ServiceCall {
    List,
    Create(NewInvoice),
}
