//! Error types for the highlighting library.
//!
//! The reconciliation core (indexing, matching, reconciling) is total and never
//! fails. Errors only arise in the surrounding layers: loading configuration,
//! reading text-layer dumps and addressing pages that do not exist.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside the reconciliation core.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)] // "Invalid" prefix is intentional for clarity
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a configuration file or text-layer dump
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration that cannot be turned into a working searcher
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Highlight color that cannot be parsed or is out of range
    #[error("Invalid highlight color: {0}")]
    InvalidColor(String),

    /// A render notification addressed a page the document does not have
    #[error("Page {page} not found (document has {page_count} pages)")]
    PageNotFound {
        /// Requested page index (0-based)
        page: usize,
        /// Number of pages in the document
        page_count: usize,
    },
}
