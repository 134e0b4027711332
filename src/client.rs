use crate::error::{InvoiceError, CREATE_FAILED, FETCH_FAILED};
use crate::types::{Invoice, NewInvoice};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument, trace};
use url::Url;

/// The two calls the screen makes against the invoice service.
#[async_trait]
pub trait InvoiceApi: Send + Sync {
    /// `GET {base}/invoices`
    async fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceError>;
    /// `POST {base}/invoices`; the response body is ignored
    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<(), InvoiceError>;
}

pub struct InvoiceClient {
    pub client: reqwest::Client,
    base_url: Url,
}

impl InvoiceClient {
    pub fn connect(base_url: Url) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn invoices_url(&self) -> String {
        format!("{}/invoices", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl InvoiceApi for InvoiceClient {
    #[instrument(skip(self), err)]
    async fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceError> {
        let url = self.invoices_url();
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(InvoiceError::fetch)?;

        let status = response.status();
        debug!(%status, "response received");
        if !status.is_success() {
            return Err(InvoiceError::Fetch(Some(FETCH_FAILED.to_string())));
        }

        let invoices: Vec<Invoice> = response.json().await.map_err(InvoiceError::fetch)?;
        trace!("invoices: {:?}", invoices);
        debug!("fetched {} invoices", invoices.len());
        Ok(invoices)
    }

    #[instrument(skip(self), fields(customer = %invoice.customer), err)]
    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<(), InvoiceError> {
        let url = self.invoices_url();
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(invoice)
            .send()
            .await
            .map_err(InvoiceError::create)?;

        let status = response.status();
        debug!(%status, "response received");
        if !status.is_success() {
            return Err(InvoiceError::Create(Some(CREATE_FAILED.to_string())));
        }
        Ok(())
    }
}
