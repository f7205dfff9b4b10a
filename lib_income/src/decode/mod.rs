//! # Structural Decoding
//!
//! Maps an already-parsed JSON tree onto a declared nested shape.
//!
//! - **`schema`**: the [`SchemaNode`] template type and its builder.
//! - **`engine`**: the recursive [`decode`] walk and its lenient mismatch
//!   policy.
//! - **`decoded`**: the [`Decoded`] output graph and the [`Decodable`]
//!   projection onto serde models.

/// The recursive decode walk.
pub mod engine;
/// Decoded output graph and typed projection.
pub mod decoded;
/// Schema templates.
pub mod schema;

pub use decoded::{decode_typed, Decodable, Decoded, DecodedRecord};
pub use engine::decode;
pub use schema::{RecordSchema, SchemaNode};

/// The raw value tree consumed by the engine. Parsing JSON text into it is
/// the transport's job.
pub type ValueNode = serde_json::Value;
