use std::net::SocketAddr;

use crate::core::{InvoiceError, RenderConfig};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Startup settings for the HTTP service, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Emit logs as JSON lines.
    pub log_json: bool,
    pub render: RenderConfig,
}

impl ServerConfig {
    /// Read `INVOICE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, InvoiceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InvoiceError> {
        let bind = lookup("INVOICE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| InvoiceError::Config(format!("invalid INVOICE_BIND_ADDR '{bind}': {e}")))?;

        let log_json = lookup("INVOICE_LOG_JSON")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let mut render = RenderConfig::default();
        if let Some(locale) = lookup("INVOICE_DEFAULT_LOCALE") {
            render = render.default_locale(locale.trim());
        }
        if let Some(name) = lookup("INVOICE_ISSUER_NAME") {
            render = render.issuer_name(name);
        }
        if let Some(prefix) = lookup("INVOICE_NUMBER_PREFIX") {
            render = render.number_prefix(prefix.trim());
        }
        render.check()?;

        Ok(Self {
            bind_addr,
            log_json,
            render,
        })
    }
}
