// TODO: https://github.com/tokio-rs/tracing/issues/843
#![allow(clippy::unit_arg)]
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod render;
pub mod state;
pub mod types;

use anyhow::Result;
pub use client::{InvoiceApi, InvoiceClient};
pub use config::{Command, Config};
pub use controller::InvoiceController;
pub use error::InvoiceError;
use notify::ConsoleNotifier;
use tracing::{debug, info};
use types::DraftEdit;

/// mounts the invoice screen against the configured service,
/// submits a new invoice when asked to and prints what the screen ends up showing
pub async fn run(config: &Config) -> Result<()> {
    info!(api_url = %config.api_url, "opening invoice screen");
    let client = InvoiceClient::connect(config.api_url.clone())?;
    let mut screen = InvoiceController::new(client, ConsoleNotifier);

    screen.mount().await;

    if let Command::Create {
        customer,
        amount,
        status,
    } = config.command()
    {
        debug!(%customer, %amount, %status, "filling create form");
        screen.edit_draft(DraftEdit::Customer(customer));
        screen.edit_draft(DraftEdit::Amount(amount));
        screen.edit_draft(DraftEdit::Status(status));
        screen.create_invoice().await;
    }

    print!("{}", screen.screen(config.locale).to_text());
    screen.unmount();
    Ok(())
}
