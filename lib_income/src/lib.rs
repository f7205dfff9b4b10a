//! # lib_income
//!
//! Typed client for the "income" family of financial-data endpoints.
//!
//! A call flows through four layers:
//!
//! 1. **`retrieve::request`** builds an abstract [`Request`] from caller
//!    parameters plus the configured metadata headers.
//! 2. **`retrieve::transport`** defines the [`Transport`] seam. The default
//!    implementation is [`HttpTransport`] (feature `retrieve`); tests swap in
//!    a double that returns canned responses.
//! 3. **`decode`** walks the returned JSON against a [`SchemaNode`] template
//!    and produces a [`Decoded`] graph, tolerating missing or `null` nested
//!    objects.
//! 4. **`income`** holds one module per endpoint, each declaring its response
//!    model and schema and wiring the three layers above together.
//!
//! ```rust,no_run
//! use lib_income::{income, IncomeConfig, Params};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), lib_income::IncomeError> {
//! let config = IncomeConfig::from_env();
//! let mut params = Params::new();
//! params.insert("access_token".into(), json!("access-sandbox-123"));
//!
//! let result = income::income_get::get(params, Some(&config)).await?;
//! for stream in &result.income.income_streams {
//!     println!("{:?}: {:?}", stream.name, stream.monthly_income);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Environment and credential configuration for endpoint calls.
pub mod configs;
/// Schema templates and the recursive decode engine.
pub mod decode;
/// Error types shared by every layer.
pub mod errors;
/// Endpoint functions and their typed response models.
pub mod income;
/// Logging setup for binaries embedding this crate.
#[cfg(feature = "loggers")]
pub mod loggers;
/// Request construction and the pluggable transport seam.
pub mod retrieve;

pub use configs::{default_config, Environment, IncomeConfig};
pub use decode::{decode, decode_typed, Decodable, Decoded, DecodedRecord, RecordSchema, SchemaNode, ValueNode};
pub use errors::{ErrorInfo, IncomeError};
pub use income::Params;
pub use retrieve::request::Request;
pub use retrieve::transport::{RawResponse, Transport, TransportExt};

#[cfg(feature = "retrieve")]
pub use retrieve::ky_http::HttpTransport;
