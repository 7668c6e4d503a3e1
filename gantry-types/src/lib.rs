//! Core codec types for Gantry.
//!
//! This crate defines the data-shape-agnostic conversion layer shared by
//! every Gantry backend service:
//! - Scalar string codecs ([`IntString`], [`FloatString`]) — numbers that
//!   travel over JSON as decimal strings but over the SQL boundary as
//!   native columns
//! - Dynamic JSON access ([`Object`], [`Array`]) — total, soft-miss typed
//!   accessors over payloads whose shape is not known ahead of decode
//! - [`decode_object_or_string`] — the shared decode flow for fields a
//!   producing service may collapse to a bare identity string
//!
//! Domain-specific wire structs (site walks, media, users, contracts)
//! belong in `gantry-model`, not here.

mod dynamic;
mod floatstring;
mod intstring;
mod poly;

pub use dynamic::{Array, Object};
pub use floatstring::FloatString;
pub use intstring::IntString;
pub use poly::decode_object_or_string;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in codec operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("merge source is not a JSON object (found {found})")]
    MergeSource { found: &'static str },
}
