use thiserror::Error;

/// Error type for tree extraction.
///
/// Extraction either produces a complete tree or propagates the first
/// failure; partial trees are never returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The field's value cannot supply elements for the classified array
    /// kind. Fatal: a malformed blob would corrupt the wire encoding.
    #[error("packing mismatch on field `{field}`")]
    Packing { field: String },
    /// A scalar or nested rule received a value of the wrong shape.
    #[error("value shape does not match classified type on field `{field}`")]
    ValueShape { field: String },
    /// Record nesting exceeded the configured depth limit.
    #[error("nesting depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },
}
