//! Error types for extraction operations.
//!
//! This module provides the [`ExtractError`] type for all library operations
//! and the [`Result`] convenience type.
//!
//! Failures are confined to compile and load time. Running a compiled
//! extraction spec against a record never fails. Missing fields, missing
//! subfields and out-of-range offsets produce no value.

use thiserror::Error;

/// Error type for all extraction library operations.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The extraction specification could not be compiled.
    ///
    /// Raised for an unparseable filter expression, a structurally malformed
    /// field-spec component, an unknown derived-function identifier, or a
    /// configuration document that is not a list of extractor definitions.
    #[error("Invalid extraction spec: {0}")]
    InvalidSpec(String),

    /// Error indicating malformed record input (MARC-in-JSON).
    #[error("Invalid MARC record: {0}")]
    InvalidRecord(String),
}

/// Convenience type alias for [`std::result::Result`] with [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;
