//! # Configuration
//!
//! An [`IncomeConfig`] tells an endpoint call which transport to use and
//! which metadata headers (credentials, API version) to attach. Values are
//! read from the process environment, after loading a `.env` file when one is
//! present. The provider [`Environment`] is a property of the transport: the
//! default transport targets the one named by `PLAID_ENV`.
//!
//! | variable          | effect                                  |
//! |-------------------|-----------------------------------------|
//! | `PLAID_ENV`       | default transport base URL: `sandbox` (default), `development`, `production` |
//! | `PLAID_CLIENT_ID` | `PLAID-CLIENT-ID` header                |
//! | `PLAID_SECRET`    | `PLAID-SECRET` header                   |
//! | `PLAID_VERSION`   | `Plaid-Version` header                  |

use crate::retrieve::transport::Transport;
use static_init::dynamic;
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::sync::Arc;

/// Header carrying the client id.
pub const CLIENT_ID_HEADER: &str = "PLAID-CLIENT-ID";
/// Header carrying the secret.
pub const SECRET_HEADER: &str = "PLAID-SECRET";
/// Header pinning the API version.
pub const VERSION_HEADER: &str = "Plaid-Version";

#[dynamic(lazy)]
static DEFAULT_CONFIG: IncomeConfig = IncomeConfig::from_env();

/// Provider environment; selects the base URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Test data, test credentials.
    #[default]
    Sandbox,
    /// Live institutions, limited items.
    Development,
    /// Live traffic.
    Production,
}

impl Environment {
    /// Absolute base URL endpoint paths are joined onto.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://sandbox.plaid.com/",
            Environment::Development => "https://development.plaid.com/",
            Environment::Production => "https://production.plaid.com/",
        }
    }

    /// Parses a name case-insensitively. Unknown names fall back to `Sandbox`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" => Environment::Production,
            "development" => Environment::Development,
            _ => Environment::Sandbox,
        }
    }

    /// Reads `PLAID_ENV`, after loading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        env::var("PLAID_ENV").map(|name| Self::parse(&name)).unwrap_or_default()
    }
}

/// Per-call configuration.
#[derive(Clone, Default)]
pub struct IncomeConfig {
    /// Transport override; `None` falls back to the default transport.
    pub client: Option<Arc<dyn Transport>>,
    /// Headers merged into every request.
    pub metadata: BTreeMap<String, String>,
}

impl fmt::Debug for IncomeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header values hold credentials; only their names are printed.
        f.debug_struct("IncomeConfig")
            .field("client", &self.client.as_ref().map(|_| "custom"))
            .field("metadata", &self.metadata.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl IncomeConfig {
    /// Configuration built from the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Configuration built from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut metadata = BTreeMap::new();
        for (variable, header) in [
            ("PLAID_CLIENT_ID", CLIENT_ID_HEADER),
            ("PLAID_SECRET", SECRET_HEADER),
            ("PLAID_VERSION", VERSION_HEADER),
        ] {
            if let Some(value) = lookup(variable).filter(|v| !v.is_empty()) {
                metadata.insert(header.to_string(), value);
            }
        }

        Self {
            client: None,
            metadata,
        }
    }

    /// Uses `client` instead of the default transport.
    pub fn with_client(mut self, client: Arc<dyn Transport>) -> Self {
        self.client = Some(client);
        self
    }

    /// Adds or replaces one metadata header.
    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(name.into(), value.into());
        self
    }
}

/// The process-wide configuration, read from the environment on first use.
pub fn default_config() -> &'static IncomeConfig {
    &*DEFAULT_CONFIG
}
