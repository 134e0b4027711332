use crate::types::InvoiceStatus;
use chrono::Locale;
use structopt::StructOpt;
use tracing::debug;
use url::Url;

#[derive(Debug, StructOpt)]
pub struct Config {
    /// Base URL of the invoice service
    #[structopt(long, env = "API_URL", default_value = "http://localhost:8000")]
    pub api_url: Url,
    /// Locale used for dates, e.g. en_US or de_DE
    #[structopt(long, env = "INVOICE_LOCALE", default_value = "en_US", parse(try_from_str = parse_locale))]
    pub locale: Locale,
    #[structopt(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, StructOpt, PartialEq)]
pub enum Command {
    /// Load and print all invoices
    List,
    /// Submit a new invoice, then print the reloaded list
    Create {
        /// Customer name
        #[structopt(long, default_value = "")]
        customer: String,
        /// Amount, as typed
        #[structopt(long, default_value = "")]
        amount: String,
        /// pending, paid or cancelled
        #[structopt(long, default_value = "pending")]
        status: InvoiceStatus,
    },
}

impl Config {
    /// Create Config from CLI arguments with logging
    pub fn load() -> Self {
        let config = Config::from_args();
        debug!(?config, "loaded");
        config
    }

    /// `list` when no subcommand was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List)
    }
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::try_from(s.trim()).map_err(|_| format!("unknown locale: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_service_and_list() {
        let config = Config::from_iter_safe(["invoice-view"]).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.locale, Locale::en_US);
        assert_eq!(config.command(), Command::List);
    }

    #[test]
    fn parses_create_command() {
        let config = Config::from_iter_safe([
            "invoice-view",
            "--api-url",
            "http://invoices.internal:9000",
            "--locale",
            "de_DE",
            "create",
            "--customer",
            "Acme",
            "--amount",
            "50",
            "--status",
            "paid",
        ])
        .unwrap();
        assert_eq!(config.api_url.host_str(), Some("invoices.internal"));
        assert_eq!(config.locale, Locale::de_DE);
        assert_eq!(
            config.command(),
            Command::Create {
                customer: "Acme".into(),
                amount: "50".into(),
                status: InvoiceStatus::Paid,
            }
        );
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(Config::from_iter_safe(["invoice-view", "--locale", "xx_YY"]).is_err());
    }
}
