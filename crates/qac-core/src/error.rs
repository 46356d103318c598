//! # Error Types
//!
//! Form mutations never fail. The errors here belong to the edge of the
//! system where rendering-layer text is turned into typed values.

use thiserror::Error;

/// Top-level error type for the QA compliance form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QacError {
    /// A section key did not match any known section.
    #[error("unknown section: {0:?}")]
    UnknownSection(String),

    /// A brand type was neither "Brand" nor "WH DC".
    #[error("unknown brand type: {0:?}")]
    UnknownBrandType(String),

    /// An option catalog name did not match any known catalog.
    #[error("unknown catalog: {0:?}")]
    UnknownCatalog(String),
}
